use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::config::Settings;
use crate::domain::recommendation::RawRecommendation;
use crate::ingest::error::FetchError;
use crate::ingest::RecommendationSource;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_PATH: &str = "/get_recommendations/past_month";

#[derive(Debug, Clone)]
pub struct HttpRecommendationSource {
    http: reqwest::Client,
    base_url: String,
    path: String,
}

impl HttpRecommendationSource {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let base_url = settings.require_recommendations_base_url()?.to_string();

        let timeout_secs = std::env::var("RECOMMENDATIONS_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let path = std::env::var("RECOMMENDATIONS_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PATH.to_string());

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("failed to build recommendations http client")?;

        Ok(Self {
            http,
            base_url,
            path,
        })
    }

    fn url(&self) -> String {
        let path = if self.path.starts_with('/') {
            self.path.clone()
        } else {
            format!("/{}", self.path)
        };

        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait::async_trait]
impl RecommendationSource for HttpRecommendationSource {
    fn source_name(&self) -> &'static str {
        "backend_http_json"
    }

    /// Single attempt, no retry loop. Elements that are not recommendation
    /// objects are dropped individually; only a body that is not a JSON
    /// array fails the fetch.
    async fn fetch_past_month(&self) -> Result<Vec<RawRecommendation>, FetchError> {
        let url = self.url();

        let res = self.http.get(url).send().await.map_err(|e| {
            FetchError::Transport {
                detail: e.to_string(),
            }
        })?;

        let status = res.status();
        let text = res.text().await.map_err(|e| FetchError::Transport {
            detail: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(FetchError::Transport {
                detail: format!("backend HTTP {status}: {text}"),
            });
        }

        let body = serde_json::from_str::<Value>(&text).map_err(|e| FetchError::Decode {
            detail: format!("response is not valid JSON: {e}"),
        })?;

        let Value::Array(items) = body else {
            return Err(FetchError::Decode {
                detail: format!("expected a JSON array of daily records, got: {body}"),
            });
        };

        let total = items.len();
        let records: Vec<RawRecommendation> = items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect();
        if records.len() < total {
            tracing::warn!(
                dropped = total - records.len(),
                total,
                "dropped non-object elements from recommendation window"
            );
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(base_url: &str, path: &str) -> HttpRecommendationSource {
        HttpRecommendationSource {
            http: reqwest::Client::new(),
            base_url: base_url.to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn url_joins_base_and_default_path() {
        let s = source("https://api.example.com", DEFAULT_PATH);
        assert_eq!(
            s.url(),
            "https://api.example.com/get_recommendations/past_month"
        );
    }

    #[test]
    fn url_tolerates_trailing_and_missing_slashes() {
        let s = source("https://api.example.com/", "get_recommendations/past_month");
        assert_eq!(
            s.url(),
            "https://api.example.com/get_recommendations/past_month"
        );
    }

    #[tokio::test]
    async fn connection_failure_is_a_transport_error() {
        // Port 9 (discard) is not listening; the connect fails immediately.
        let s = source("http://127.0.0.1:9", DEFAULT_PATH);
        let err = s.fetch_past_month().await.unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }
}
