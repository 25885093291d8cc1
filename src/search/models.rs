//! Search request model handed to search sources

use crate::config::{SearchSettings, SortKey};
use serde::{Deserialize, Serialize};

/// A full-text query for one keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text term typed by the user
    pub keyword: String,
    /// Field projection returned for each hit
    pub fields: Vec<String>,
    /// Content types to include
    pub post_types: Vec<String>,
    /// Fields the keyword is matched against
    pub query_fields: Vec<String>,
    /// Maximum number of hits
    pub size: u32,
    /// Sort criteria, most significant first
    pub sort: Vec<SortKey>,
}

impl SearchRequest {
    /// Build a request from the configured template
    pub fn from_settings(keyword: impl Into<String>, settings: &SearchSettings) -> Self {
        Self {
            keyword: keyword.into(),
            fields: settings.fields.clone(),
            post_types: settings.post_types.clone(),
            query_fields: settings.query_fields.clone(),
            size: settings.size,
            sort: settings.sort.clone(),
        }
    }

    /// Create a request with the default template
    pub fn simple(keyword: impl Into<String>) -> Self {
        Self::from_settings(keyword, &SearchSettings::default())
    }
}
