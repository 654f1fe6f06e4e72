//! プロンプト完了パイプライン
//!
//! 1 リクエスト = 最大 2 回の外部呼び出し（検索 → 完了）。分岐は成功 / 失敗のみで、
//! リトライ・キャッシュ・共有状態は持たない。

use std::sync::Arc;

use common::domain::ModelName;
use common::llm::{ChatMessage, ChatRequest};
use common::ports::outbound::{ChatCompletion, Log, LogLevel, LogRecord, WebSearch};
use common::search::SearchError;

use crate::domain::{profile_for, AgentProfile, Request};
use crate::ports::inbound::RunAgent;
use crate::ports::outbound::Progress;
use crate::usecase::clean::clean_markdown_headers;
use crate::usecase::template::{build_human_prompt, fold_search_context, SEARCH_RESULT_LIMIT};
use crate::usecase::PipelineError;

/// パイプラインが使う外部依存
pub struct PipelineDeps {
    pub completion: Arc<dyn ChatCompletion>,
    pub search: Arc<dyn WebSearch>,
    pub progress: Arc<dyn Progress>,
    pub log: Arc<dyn Log>,
}

pub struct Pipeline {
    deps: PipelineDeps,
    model: ModelName,
}

impl Pipeline {
    pub fn new(deps: PipelineDeps, model: ModelName) -> Self {
        Self { deps, model }
    }

    fn log(&self, record: LogRecord) {
        let _ = self.deps.log.log(&record);
    }

    /// 検索して上位 4 件をコンテキスト文字列にする
    fn search_context(&self, topic: &str) -> Result<String, SearchError> {
        let progress = &self.deps.progress;
        progress.step(&format!("🔍 Searching Google for: '{}'...", topic));
        let hits = self.deps.search.search(topic)?;
        self.log(
            LogRecord::new(LogLevel::Info, "usecase", "search", "search finished")
                .field("query", topic)
                .field("hits", hits.len())
                .field("used", hits.len().min(SEARCH_RESULT_LIMIT)),
        );
        progress.step("✅ Found relevant data sources.");
        progress.step("🧠 Reading and analyzing content...");
        Ok(fold_search_context(&hits))
    }

    fn chat_request(&self, profile: &AgentProfile, human_prompt: String) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            temperature: profile.temperature,
            messages: vec![
                ChatMessage::system(profile.system_prompt),
                ChatMessage::human(human_prompt),
            ],
        }
    }
}

/// 応答の後処理（データ整形は CSV を壊さないよう前後の空白除去のみ）
pub fn post_process(profile: &AgentProfile, raw: String) -> String {
    if profile.post_process {
        clean_markdown_headers(&raw)
    } else {
        raw.trim().to_string()
    }
}

impl RunAgent for Pipeline {
    fn run(&self, request: &Request) -> Result<String, PipelineError> {
        let profile = profile_for(request.variant());
        let progress = &self.deps.progress;
        progress.begin(profile.status.running);
        progress.step(profile.status.opening);

        let context = if profile.uses_search {
            match self.search_context(request.primary()) {
                Ok(ctx) => Some(ctx),
                Err(e) => {
                    progress.fail("Error in Search");
                    self.log(
                        LogRecord::new(LogLevel::Warn, "usecase", "search", "search failed")
                            .field("error", e.to_string()),
                    );
                    return Err(PipelineError::Search(e));
                }
            }
        } else {
            None
        };

        let human_prompt = build_human_prompt(profile, request, context.as_deref());
        progress.step(profile.status.drafting);
        let chat = self.chat_request(profile, human_prompt);
        self.log(
            LogRecord::new(LogLevel::Info, "usecase", "completion", "completion requested")
                .field("variant", request.variant().id())
                .field("provider", self.deps.completion.name())
                .field("model", self.model.to_string())
                .field("temperature", profile.temperature)
                .field("system_chars", profile.system_prompt.chars().count())
                .field("human_chars", chat.messages[1].content.chars().count()),
        );

        let raw = match self.deps.completion.complete(&chat) {
            Ok(text) => text,
            Err(e) => {
                progress.fail("Agent failed");
                self.log(
                    LogRecord::new(LogLevel::Error, "usecase", "completion", "completion failed")
                        .field("error", e.to_string()),
                );
                return Err(PipelineError::Completion(e));
            }
        };
        self.log(
            LogRecord::new(LogLevel::Info, "usecase", "completion", "completion finished")
                .field("chars", raw.chars().count()),
        );

        progress.finish(profile.status.done);
        Ok(post_process(profile, raw))
    }
}
