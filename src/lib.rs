//! es-autocomplete: a search-as-you-type controller
//!
//! As the user types, keystrokes are debounced into queries against a
//! remote full-text search endpoint; the hits are rendered as a dropdown
//! that can be navigated with the keyboard or mouse, and the chosen hit is
//! written back into the input.

pub mod autocomplete;
pub mod config;
pub mod error;
pub mod logging;
pub mod network;
pub mod results;
pub mod search;

pub use autocomplete::{AutocompleteController, AutocompleteHandle, Key};
pub use config::Settings;
pub use error::{Error, Result};
pub use results::{ResultRecord, ResultSet};
pub use search::{SearchRequest, SearchSource, WpcomSearch};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
