//! 起動時の設定読み込み（adapter 層）
//!
//! 環境変数は EnvSource 経由でのみ読む。必須キーが欠けていたらリクエストを組み立てる前に失敗する。

use std::path::PathBuf;

use common::domain::{ApiKey, ModelName};
use common::error::Error;
use common::llm::openai_compat::DEFAULT_BASE_URL;
use common::ports::outbound::EnvSource;
use common::search::serper::DEFAULT_SEARCH_URL;

use crate::domain::app_config::DEFAULT_MODEL;
use crate::domain::AppConfig;

pub const ENV_COMPLETION_KEY: &str = "GROQ_API_KEY";
pub const ENV_SEARCH_KEY: &str = "SERPER_API_KEY";
pub const ENV_MODEL: &str = "OFFICEOS_MODEL";
pub const ENV_COMPLETION_URL: &str = "OFFICEOS_COMPLETION_URL";
pub const ENV_SEARCH_URL: &str = "OFFICEOS_SEARCH_URL";
pub const ENV_LOG_FILE: &str = "OFFICEOS_LOG_FILE";

fn required(env: &dyn EnvSource, name: &str) -> Result<ApiKey, Error> {
    env.var(name)
        .map(|v| ApiKey::new(v.trim()))
        .ok_or_else(|| Error::env(format!("{} is not set", name)))
}

/// 環境変数から AppConfig を組み立てる
pub fn load_app_config(env: &dyn EnvSource) -> Result<AppConfig, Error> {
    let completion_api_key = required(env, ENV_COMPLETION_KEY)?;
    let search_api_key = required(env, ENV_SEARCH_KEY)?;
    let model = ModelName::new(
        env.var(ENV_MODEL)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
    );
    Ok(AppConfig {
        completion_api_key,
        search_api_key,
        model,
        completion_base_url: env
            .var(ENV_COMPLETION_URL)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        search_url: env
            .var(ENV_SEARCH_URL)
            .unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string()),
        log_file: env.var(ENV_LOG_FILE).map(PathBuf::from),
    })
}
