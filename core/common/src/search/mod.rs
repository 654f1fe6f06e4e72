//! Web 検索 API
//!
//! 市場調査エージェントだけが使う。上位の検索結果（title + snippet）を返す。

pub mod serper;

pub use serper::SerperSearch;

use serde::Deserialize;
use thiserror::Error;

/// 検索エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// HTTP 呼び出し自体が失敗した（接続不可・タイムアウト等）
    #[error("request failed: {0}")]
    Request(String),
    /// 2xx 以外のステータス
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// 応答が期待する JSON 形状でない
    #[error("unexpected response: {0}")]
    Parse(String),
}

/// オーガニック検索結果 1 件
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
}

impl SearchHit {
    pub fn new(title: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
        }
    }
}

/// Web 検索のトレイト
///
/// 件数の切り詰めは呼び出し側が行う。実装は受け取った結果を順序どおり返す。
pub trait WebSearch: Send + Sync {
    fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError>;
}
