//! Search collaborator module
//!
//! Defines the request model, the `SearchSource` trait and the shipped
//! WordPress.com implementation.

mod models;
mod source;
mod wpcom;

pub use models::SearchRequest;
pub use source::SearchSource;
pub use wpcom::WpcomSearch;
