//! Outbound ポート: アプリが外界（LLM・検索・環境変数・ログ）を使うための trait

pub mod env_source;
pub mod llm_provider;
pub mod log;
pub mod web_search;

pub use env_source::EnvSource;
pub use llm_provider::ChatCompletion;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
pub use web_search::WebSearch;
