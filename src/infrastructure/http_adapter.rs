use crate::domain::admin::{AdminError, AdminFacade};
use crate::domain::models::{EntryId, EntryKind, SchedulerReport, SearchResultItem};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// `AdminFacade` over the portfolio's REST API.
pub struct HttpAdminAdapter {
    agent: ureq::Agent,
    base_url: String,
    token: Option<String>,
}

impl HttpAdminAdapter {
    pub fn new(base_url: &str, token: Option<String>, timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: ureq::Agent::new_with_config(config),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn request(&self, method: Method, url: String) -> Result<String, AdminError> {
        let agent = self.agent.clone();
        let token = self.token.clone();

        tokio::task::spawn_blocking(move || {
            let auth = token.map(|t| format!("Bearer {t}"));
            let result = match method {
                Method::Get(query) => {
                    let mut request = agent.get(&url).query("q", &query);
                    if let Some(auth) = &auth {
                        request = request.header("Authorization", auth);
                    }
                    request.call()
                }
                Method::Post => {
                    let mut request = agent.post(&url);
                    if let Some(auth) = &auth {
                        request = request.header("Authorization", auth);
                    }
                    request.send_empty()
                }
            };
            let mut response = result.map_err(map_ureq_error)?;
            response.body_mut().read_to_string().map_err(map_ureq_error)
        })
        .await
        .map_err(|e| AdminError::Network(format!("request task failed: {e}")))?
    }
}

enum Method {
    Get(String),
    Post,
}

fn map_ureq_error(err: ureq::Error) -> AdminError {
    match err {
        ureq::Error::StatusCode(code) => AdminError::Status(code),
        other => AdminError::Network(other.to_string()),
    }
}

#[async_trait]
impl AdminFacade for HttpAdminAdapter {
    async fn search(&self, query: String) -> Result<Vec<SearchResultItem>, AdminError> {
        debug!(query = %query, "Searching");
        let body = self
            .request(Method::Get(query), self.endpoint("/api/search"))
            .await?;
        parse_search_response(&body)
    }

    async fn run_scheduler(&self) -> Result<SchedulerReport, AdminError> {
        let body = self
            .request(Method::Post, self.endpoint("/api/scheduler/run"))
            .await?;
        if body.trim().is_empty() {
            return Ok(SchedulerReport::default());
        }
        serde_json::from_str(&body).map_err(|e| AdminError::Malformed(e.to_string()))
    }

    fn base_url(&self) -> String {
        self.base_url.clone()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SearchResponse {
    Bare(Vec<RawSearchItem>),
    Wrapped { data: Vec<RawSearchItem> },
}

#[derive(Deserialize)]
struct RawSearchItem {
    #[serde(rename = "_id", alias = "id", default)]
    id: Option<serde_json::Value>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(alias = "isPublished", default)]
    published: Option<bool>,
}

impl RawSearchItem {
    fn normalize(self) -> Option<SearchResultItem> {
        let id = match self.id? {
            serde_json::Value::String(s) if !s.is_empty() => s,
            serde_json::Value::Number(n) => n.to_string(),
            _ => return None,
        };
        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .or(self.name)
            .unwrap_or_default();

        Some(SearchResultItem {
            id: EntryId(id),
            title,
            kind: self.kind.map(EntryKind::from).unwrap_or_default(),
            published: self.published.unwrap_or(false),
        })
    }
}

/// Accepts either a bare JSON array or `{ "data": [...] }`. Items without an
/// identity are dropped; `type` defaults to Article and `title` falls back to
/// `name`.
pub fn parse_search_response(body: &str) -> Result<Vec<SearchResultItem>, AdminError> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| AdminError::Malformed(e.to_string()))?;
    let raw = match response {
        SearchResponse::Bare(items) | SearchResponse::Wrapped { data: items } => items,
    };

    let total = raw.len();
    let items: Vec<_> = raw.into_iter().filter_map(RawSearchItem::normalize).collect();
    if items.len() != total {
        warn!(dropped = total - items.len(), "Search results without an id were dropped");
    }
    Ok(items)
}
