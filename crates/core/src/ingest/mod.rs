pub mod client;
pub mod error;

use crate::domain::recommendation::RawRecommendation;
use crate::ingest::error::FetchError;

/// Source of the rolling past-month recommendation window.
#[async_trait::async_trait]
pub trait RecommendationSource: Send + Sync {
    fn source_name(&self) -> &'static str;

    async fn fetch_past_month(&self) -> Result<Vec<RawRecommendation>, FetchError>;
}
