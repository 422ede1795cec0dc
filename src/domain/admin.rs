use crate::domain::models::{SchedulerReport, SearchResultItem};
use async_trait::async_trait;
use thiserror::Error;

/// Failure of a call against the admin API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl AdminError {
    /// Compact form for single-line status displays.
    #[must_use]
    pub fn short_label(&self) -> String {
        match self {
            Self::Network(_) => "network".to_string(),
            Self::Status(code) => format!("HTTP {code}"),
            Self::Malformed(_) => "bad response".to_string(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminFacade: Send + Sync {
    // Free-text search across articles, projects and users
    async fn search(&self, query: String) -> Result<Vec<SearchResultItem>, AdminError>;

    // Triggers the publish scheduler
    async fn run_scheduler(&self) -> Result<SchedulerReport, AdminError>;

    fn base_url(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_label_keeps_status_code() {
        assert_eq!(AdminError::Status(503).short_label(), "HTTP 503");
        assert_eq!(
            AdminError::Network("connection refused".into()).short_label(),
            "network"
        );
        assert_eq!(
            AdminError::Malformed("expected array".into()).short_label(),
            "bad response"
        );
    }
}
