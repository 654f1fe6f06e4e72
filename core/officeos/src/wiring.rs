//! 配線: 標準アダプタで Pipeline を組み立てる

use std::path::Path;
use std::sync::Arc;

use common::adapter::{FanoutLog, FileJsonLog, NoopLog, StderrLog};
use common::llm::OpenAiCompatCompletion;
use common::ports::outbound::Log;
use common::search::SerperSearch;

use crate::adapter::StderrProgress;
use crate::domain::AppConfig;
use crate::ports::inbound::RunAgent;
use crate::usecase::{Pipeline, PipelineDeps};

/// main が使う組み立て済みの依存
pub struct App {
    pub agent: Arc<dyn RunAgent>,
    pub logger: Arc<dyn Log>,
}

/// ログの出力先を組み立てる（-v なら stderr、OFFICEOS_LOG_FILE があればファイル）
pub fn build_logger(log_file: Option<&Path>, verbose: bool) -> Arc<dyn Log> {
    let mut sinks: Vec<Arc<dyn Log>> = Vec::new();
    if verbose {
        sinks.push(Arc::new(StderrLog::new()));
    }
    if let Some(path) = log_file {
        sinks.push(Arc::new(FileJsonLog::new(path)));
    }
    match sinks.len() {
        0 => Arc::new(NoopLog),
        1 => sinks.remove(0),
        _ => Arc::new(FanoutLog::new(sinks)),
    }
}

/// 配線: 設定から HTTP クライアントと Pipeline を組み立てる
pub fn wire_officeos(config: &AppConfig, verbose: bool) -> App {
    let logger = build_logger(config.log_file.as_deref(), verbose);
    let deps = PipelineDeps {
        completion: Arc::new(OpenAiCompatCompletion::new(
            config.completion_base_url.clone(),
            config.completion_api_key.clone(),
        )),
        search: Arc::new(SerperSearch::new(
            config.search_url.clone(),
            config.search_api_key.clone(),
        )),
        progress: Arc::new(StderrProgress::stderr()),
        log: Arc::clone(&logger),
    };
    App {
        agent: Arc::new(Pipeline::new(deps, config.model.clone())),
        logger,
    }
}
