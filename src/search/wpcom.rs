//! WordPress.com REST search source
//!
//! The endpoint takes an Elasticsearch query body over POST and answers
//! with `{"results": {"hits": [{"fields": {...}}]}}`.

use super::models::SearchRequest;
use super::source::SearchSource;
use crate::config::{SearchSettings, SortOrder};
use crate::error::{Error, Result};
use crate::network::{HttpClient, HttpResponse};
use crate::results::ResultRecord;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::debug;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Hits,
}

#[derive(Debug, Deserialize)]
struct Hits {
    hits: Vec<Hit>,
}

/// Scores are not needed, only the projected fields
#[derive(Debug, Deserialize)]
struct Hit {
    fields: ResultRecord,
}

/// Search source for a WordPress.com-style Elasticsearch endpoint
pub struct WpcomSearch {
    client: HttpClient,
    endpoint: String,
}

impl WpcomSearch {
    pub fn new(client: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_settings(client: HttpClient, settings: &SearchSettings) -> Self {
        Self::new(client, settings.endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the Elasticsearch query body for a request
    pub fn query_body(request: &SearchRequest) -> Value {
        let sort: Vec<Value> = request
            .sort
            .iter()
            .map(|key| {
                let order = match key.order {
                    SortOrder::Asc => "asc",
                    SortOrder::Desc => "desc",
                };
                let mut entry = Map::new();
                entry.insert(key.field.clone(), json!({ "order": order }));
                Value::Object(entry)
            })
            .collect();

        json!({
            "size": request.size,
            "filter": {
                "and": [
                    { "terms": { "post_type": request.post_types } }
                ]
            },
            "query": {
                "multi_match": {
                    "query": request.keyword,
                    "fields": request.query_fields,
                    "operator": "and",
                    "type": "cross_fields"
                }
            },
            "sort": sort,
            "fields": request.fields,
        })
    }

    /// Turn an HTTP response into ranked records
    pub fn parse_response(response: &HttpResponse) -> Result<Vec<ResultRecord>> {
        if !response.is_success() {
            return Err(Error::Status(response.status));
        }

        let parsed: SearchResponse = response.json()?;
        Ok(parsed.results.hits.into_iter().map(|hit| hit.fields).collect())
    }
}

#[async_trait]
impl SearchSource for WpcomSearch {
    fn name(&self) -> &str {
        "wpcom"
    }

    async fn search(&self, request: &SearchRequest) -> Result<Vec<ResultRecord>> {
        let body = Self::query_body(request);
        let response = self.client.post_json(&self.endpoint, &body).await?;

        debug!(
            "Search endpoint {} answered {} for '{}'",
            response.url, response.status, request.keyword
        );

        Self::parse_response(&response)
    }
}
