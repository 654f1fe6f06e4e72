//! 起動時に確定するアプリ設定
//!
//! 資格情報はここに集約し、リクエストごとの処理からは環境変数を読まない。

use std::path::PathBuf;

use common::domain::{ApiKey, ModelName};

pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub completion_api_key: ApiKey,
    pub search_api_key: ApiKey,
    pub model: ModelName,
    /// OpenAI 互換エンドポイントのベース URL
    pub completion_base_url: String,
    /// 検索エンドポイント（そのまま POST する）
    pub search_url: String,
    /// JSONL ログの出力先（未指定ならファイルに出さない）
    pub log_file: Option<PathBuf>,
}
