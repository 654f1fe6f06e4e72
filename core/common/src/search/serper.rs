//! Serper (google.serper.dev) 検索プロバイダ

use crate::domain::ApiKey;
use crate::search::{SearchError, SearchHit, WebSearch};
use serde::Deserialize;
use serde_json::json;

pub const DEFAULT_SEARCH_URL: &str = "https://google.serper.dev/search";

/// Serper 検索クライアント
pub struct SerperSearch {
    url: String,
    api_key: ApiKey,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Deserialize)]
struct SerperResponse {
    /// `organic` が無い応答は 0 件として扱う
    #[serde(default)]
    organic: Vec<SearchHit>,
}

impl SerperSearch {
    pub fn new(url: impl Into<String>, api_key: ApiKey) -> Self {
        Self {
            url: url.into(),
            api_key,
            client: reqwest::blocking::Client::new(),
        }
    }

    /// 応答 JSON から organic 配列を取り出す
    pub fn parse_organic(body: &str) -> Result<Vec<SearchHit>, SearchError> {
        let resp: SerperResponse =
            serde_json::from_str(body).map_err(|e| SearchError::Parse(e.to_string()))?;
        Ok(resp.organic)
    }
}

impl WebSearch for SerperSearch {
    fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        let response = self
            .client
            .post(&self.url)
            .header("X-API-KEY", self.api_key.expose())
            .header("Content-Type", "application/json")
            .json(&json!({ "q": query }))
            .send()
            .map_err(|e| SearchError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| SearchError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Self::parse_organic(&body)
    }
}
