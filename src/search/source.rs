//! The search collaborator seam

use super::models::SearchRequest;
use crate::error::Result;
use crate::results::ResultRecord;
use async_trait::async_trait;

/// Anything that can turn a keyword query into ranked records
#[async_trait]
pub trait SearchSource: Send + Sync {
    /// Source name, used in logs
    fn name(&self) -> &str;

    /// Run the query; records come back in server rank order
    async fn search(&self, request: &SearchRequest) -> Result<Vec<ResultRecord>>;
}
