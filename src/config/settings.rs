//! Settings structures for the autocomplete controller

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default endpoint, the WordPress.com REST search API of the site the
/// widget was first written for
pub const DEFAULT_ENDPOINT: &str = "http://public-api.wordpress.com/rest/v1/sites/1821682/search";

/// Top-level settings, one section per concern
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub autocomplete: AutocompleteSettings,
    pub search: SearchSettings,
    pub outgoing: OutgoingSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables (ES_AUTOCOMPLETE_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    pub(crate) fn merge_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("ES_AUTOCOMPLETE_ENDPOINT") {
            self.search.endpoint = val;
        }
        if let Some(val) = var("ES_AUTOCOMPLETE_MIN_KEYWORD_LENGTH") {
            if let Ok(len) = val.parse() {
                self.autocomplete.min_keyword_length = len;
            }
        }
        if let Some(val) = var("ES_AUTOCOMPLETE_DEBOUNCE_MS") {
            if let Ok(ms) = val.parse() {
                self.autocomplete.debounce_ms = ms;
            }
        }
        if let Some(val) = var("ES_AUTOCOMPLETE_LOG") {
            self.logging.level = val;
        }
    }

    /// Reject settings the controller cannot work with
    pub fn validate(&self) -> Result<()> {
        let endpoint = Url::parse(&self.search.endpoint)?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            bail!("search endpoint must be http(s): {}", self.search.endpoint);
        }
        if self.search.size == 0 {
            bail!("search.size must be greater than zero");
        }
        let timeout = self.outgoing.request_timeout;
        if !timeout.is_finite() || timeout <= 0.0 {
            bail!("outgoing.request_timeout must be a positive number of seconds");
        }
        Ok(())
    }
}

/// Keystroke handling settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AutocompleteSettings {
    /// Keywords of this many characters or fewer never reach the search
    pub min_keyword_length: usize,
    /// Quiet period before a keystroke turns into a query
    pub debounce_ms: u64,
}

impl AutocompleteSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for AutocompleteSettings {
    fn default() -> Self {
        Self {
            min_keyword_length: 2,
            debounce_ms: 300,
        }
    }
}

/// Sort direction for a sort key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// One sort criterion, applied in list order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortKey {
    pub field: String,
    #[serde(default)]
    pub order: SortOrder,
}

impl SortKey {
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Desc,
        }
    }
}

/// Search collaborator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchSettings {
    /// Full URL of the search endpoint
    pub endpoint: String,
    /// Maximum number of hits requested
    pub size: u32,
    /// Field projection returned for each hit
    pub fields: Vec<String>,
    /// Content types the search is filtered to
    pub post_types: Vec<String>,
    /// Fields the keyword is matched against, with optional `^boost`
    pub query_fields: Vec<String>,
    /// Sort criteria
    pub sort: Vec<SortKey>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            size: 20,
            fields: ["blog_id", "post_id", "url", "title", "post_type", "slug"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            post_types: vec!["post".to_string()],
            query_fields: ["title^5", "content", "author", "tag", "category", "tag.name^3"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            sort: vec![SortKey::desc("_score"), SortKey::desc("date")],
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Proxy settings
    pub proxies: ProxySettings,
    /// Extra headers to send
    pub extra_headers: HashMap<String, String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 5.0,
            proxies: ProxySettings::default(),
            extra_headers: HashMap::new(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// Log output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// `EnvFilter` directive, e.g. `info` or `es_autocomplete=debug`
    pub level: String,
    /// Print the event target next to each line
    pub with_target: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_target: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.autocomplete.min_keyword_length, 2);
        assert_eq!(settings.autocomplete.debounce(), Duration::from_millis(300));
        assert_eq!(settings.search.size, 20);
        assert_eq!(settings.search.post_types, vec!["post"]);
        assert!(settings.search.fields.contains(&"slug".to_string()));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings = Settings::from_yaml(
            "autocomplete:\n  debounce_ms: 150\nsearch:\n  endpoint: https://search.example.com/q\n",
        )
        .unwrap();
        assert_eq!(settings.autocomplete.debounce_ms, 150);
        assert_eq!(settings.autocomplete.min_keyword_length, 2);
        assert_eq!(settings.search.endpoint, "https://search.example.com/q");
        assert_eq!(settings.search.size, 20);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(Settings::from_yaml("autocomplete:\n  wait: 300\n").is_err());
        assert!(Settings::from_yaml("wrapper: '#search-results'\n").is_err());
    }

    #[test]
    fn test_sort_keys_parse() {
        let settings =
            Settings::from_yaml("search:\n  sort:\n    - field: date\n      order: asc\n    - field: _score\n")
                .unwrap();
        assert_eq!(settings.search.sort[0].order, SortOrder::Asc);
        assert_eq!(settings.search.sort[1], SortKey::desc("_score"));
    }

    #[test]
    fn test_merge_vars() {
        let mut settings = Settings::default();
        settings.merge_vars(|key| match key {
            "ES_AUTOCOMPLETE_DEBOUNCE_MS" => Some("50".to_string()),
            "ES_AUTOCOMPLETE_MIN_KEYWORD_LENGTH" => Some("not a number".to_string()),
            "ES_AUTOCOMPLETE_ENDPOINT" => Some("https://example.com/search".to_string()),
            _ => None,
        });
        assert_eq!(settings.autocomplete.debounce_ms, 50);
        assert_eq!(settings.autocomplete.min_keyword_length, 2);
        assert_eq!(settings.search.endpoint, "https://example.com/search");
    }

    #[test]
    fn test_validate() {
        let mut settings = Settings::default();
        settings.search.endpoint = "ftp://example.com".to_string();
        assert!(settings.validate().is_err());

        settings.search.endpoint = "not a url".to_string();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.search.size = 0;
        assert!(settings.validate().is_err());

        for timeout in [".nan", ".inf", "-.inf", "0", "-1.5"] {
            let settings =
                Settings::from_yaml(&format!("outgoing:\n  request_timeout: {}\n", timeout))
                    .unwrap();
            assert!(settings.validate().is_err(), "accepted timeout {}", timeout);
        }
    }
}
