pub mod chips;
pub mod classify;
pub mod detail;
pub mod domain;
pub mod ingest;
pub mod project;
pub mod time;
pub mod today;
pub mod view;

pub mod config {
    use anyhow::Context;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub recommendations_base_url: Option<String>,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(Self {
                recommendations_base_url: std::env::var("RECOMMENDATIONS_BASE_URL").ok(),
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
            })
        }

        pub fn require_recommendations_base_url(&self) -> anyhow::Result<&str> {
            self.recommendations_base_url
                .as_deref()
                .context("RECOMMENDATIONS_BASE_URL is required")
        }
    }
}
