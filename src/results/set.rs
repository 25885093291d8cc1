//! The live collection of records for the current query

use super::record::ResultRecord;
use crate::config::SearchSettings;
use crate::error::Result;
use crate::search::{SearchRequest, SearchSource};
use futures::future::BoxFuture;
use futures::FutureExt;
use std::sync::Arc;
use tracing::debug;

/// Ordered records for the query currently on screen, plus the source
/// they are fetched from.
///
/// Contents only ever change through [`ResultSet::replace`], which swaps
/// the whole list.
pub struct ResultSet {
    source: Arc<dyn SearchSource>,
    settings: SearchSettings,
    records: Vec<ResultRecord>,
}

impl ResultSet {
    pub fn new(source: Arc<dyn SearchSource>, settings: SearchSettings) -> Self {
        Self {
            source,
            settings,
            records: Vec::new(),
        }
    }

    /// Request for `keyword` using the configured projection, filters and cap
    pub fn request_for(&self, keyword: &str) -> SearchRequest {
        SearchRequest::from_settings(keyword, &self.settings)
    }

    /// Issue one request for `keyword`.
    ///
    /// The returned future owns everything it needs, so several fetches
    /// may be in flight at once; nothing here cancels an earlier one.
    pub fn fetch(&self, keyword: &str) -> BoxFuture<'static, Result<Vec<ResultRecord>>> {
        let source = Arc::clone(&self.source);
        let request = self.request_for(keyword);

        async move {
            debug!("Fetching '{}' from {}", request.keyword, source.name());
            let mut records = source.search(&request).await?;
            records.truncate(request.size as usize);
            Ok(records)
        }
        .boxed()
    }

    /// Swap in the records of an accepted response
    pub fn replace(&mut self, records: Vec<ResultRecord>) -> &[ResultRecord] {
        self.records = records;
        &self.records
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&ResultRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
