//! ユースケース層
//!
//! 外部コラボレータはポート経由でのみ使う。

pub mod clean;
pub mod csv_table;
pub mod pipeline;
pub mod template;

pub use pipeline::{Pipeline, PipelineDeps};

use common::error::Error;
use common::search::SearchError;
use thiserror::Error as ThisError;

/// パイプラインの失敗
///
/// Display がそのまま利用者向けの表示文字列になる。
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum PipelineError {
    /// 検索ステップの失敗（市場調査のみ）。完了呼び出しは行われない
    #[error("Search Error: {0}")]
    Search(#[from] SearchError),
    /// 完了 API の失敗（認証・レート制限・不正応答を含む）
    #[error("Error: {0}")]
    Completion(#[from] Error),
}

impl PipelineError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Search(_) => 74,
            Self::Completion(e) => e.exit_code(),
        }
    }
}
