//! HTTP networking module
//!
//! Provides the HTTP client used to reach the search endpoint.

mod client;

pub use client::{HttpClient, HttpResponse};
