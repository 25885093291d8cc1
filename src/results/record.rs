//! A single search hit

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// The content type whose `url` is already a correct permalink
pub const DEFAULT_POST_TYPE: &str = "post";

/// One result returned by the search collaborator.
///
/// `url` carries host and path without a scheme. Unknown fields in the
/// projection are kept in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    #[serde(deserialize_with = "one_or_first")]
    pub title: String,
    #[serde(deserialize_with = "one_or_first")]
    pub url: String,
    #[serde(deserialize_with = "one_or_first")]
    pub post_type: String,
    #[serde(deserialize_with = "one_or_first")]
    pub slug: String,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl ResultRecord {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        post_type: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            post_type: post_type.into(),
            slug: slug.into(),
            extra: HashMap::new(),
        }
    }

    /// Text shown in the row and written back into the input on selection
    pub fn label(&self) -> &str {
        &self.title
    }

    /// Absolute link to the hit.
    ///
    /// The search API only returns a usable `url` for plain posts. For any
    /// other type the link is rebuilt as `url` (query string dropped) with
    /// `post_type/slug` concatenated directly onto it.
    pub fn permalink(&self) -> String {
        let link = if self.post_type == DEFAULT_POST_TYPE {
            self.url.clone()
        } else {
            let base = self.url.split('?').next().unwrap_or_default();
            format!("{}{}/{}", base, self.post_type, self.slug)
        };
        format!("http://{}/", link)
    }
}

/// Elasticsearch `fields` projections wrap every value in an array;
/// accept either shape.
fn one_or_first<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => Ok(value),
        OneOrMany::Many(values) => values
            .into_iter()
            .next()
            .ok_or_else(|| serde::de::Error::custom("empty field array")),
    }
}
