//! エージェント設定テーブル
//!
//! 8 種のエージェントは system prompt・テンプレート・温度・検索有無・整形有無だけが異なる。
//! 関数を 8 本持たず、このテーブルを引いて 1 本のパイプラインで処理する。

use crate::domain::prompts;
use crate::domain::Variant;

/// 1 エージェント分の設定
#[derive(Debug, Clone, PartialEq)]
pub struct AgentProfile {
    pub variant: Variant,
    pub system_prompt: &'static str,
    pub human_template: &'static str,
    pub temperature: f32,
    /// 完了呼び出しの前に Web 検索を行う
    pub uses_search: bool,
    /// 応答に見出し整形（clean）をかける
    pub post_process: bool,
    pub status: StatusText,
}

/// 進捗表示の文言
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusText {
    /// 実行中ラベル
    pub running: &'static str,
    /// 最初のステップ
    pub opening: &'static str,
    /// 完了呼び出し直前のステップ
    pub drafting: &'static str,
    /// 完了ラベル
    pub done: &'static str,
    /// 結果見出し
    pub result_title: &'static str,
}

static PROFILES: [AgentProfile; 8] = [
    AgentProfile {
        variant: Variant::Research,
        system_prompt: prompts::RESEARCH_SYSTEM,
        human_template: prompts::RESEARCH_HUMAN,
        temperature: 0.0,
        uses_search: true,
        post_process: true,
        status: StatusText {
            running: "🕵️ Agent is working...",
            opening: "🌐 Connecting to World Wide Web...",
            drafting: "✍️ Drafting final report...",
            done: "Mission Complete",
            result_title: "Research Complete",
        },
    },
    AgentProfile {
        variant: Variant::Email,
        system_prompt: prompts::EMAIL_SYSTEM,
        human_template: prompts::EMAIL_HUMAN,
        temperature: 0.7,
        uses_search: false,
        post_process: true,
        status: StatusText {
            running: "📧 Agent is drafting...",
            opening: "🧠 Analyzing email sentiment...",
            drafting: "✍️ Composing response...",
            done: "Draft Ready",
            result_title: "Draft Generated",
        },
    },
    AgentProfile {
        variant: Variant::Minutes,
        system_prompt: prompts::MINUTES_SYSTEM,
        human_template: prompts::MINUTES_HUMAN,
        temperature: 0.0,
        uses_search: false,
        post_process: true,
        status: StatusText {
            running: "📝 Agent is transcribing...",
            opening: "🎧 Identifying speakers and key topics...",
            drafting: "📊 Extracting action items...",
            done: "Minutes Generated",
            result_title: "Minutes Generated",
        },
    },
    AgentProfile {
        variant: Variant::Resume,
        system_prompt: prompts::RESUME_SYSTEM,
        human_template: prompts::RESUME_HUMAN,
        temperature: 0.0,
        uses_search: false,
        post_process: true,
        status: StatusText {
            running: "📄 Agent is analyzing...",
            opening: "🔍 Scanning resume for keywords...",
            drafting: "⚖️ Calculating match score...",
            done: "Analysis Complete",
            result_title: "Analysis Complete",
        },
    },
    AgentProfile {
        variant: Variant::Social,
        system_prompt: prompts::SOCIAL_SYSTEM,
        human_template: prompts::SOCIAL_HUMAN,
        temperature: 0.8,
        uses_search: false,
        post_process: true,
        status: StatusText {
            running: "📱 Agent is creating content...",
            opening: "🔥 Analyzing trends and hashtags...",
            drafting: "✍️ Writing viral hooks...",
            done: "Content Ready",
            result_title: "Posts Generated",
        },
    },
    AgentProfile {
        variant: Variant::Contract,
        system_prompt: prompts::CONTRACT_SYSTEM,
        human_template: prompts::CONTRACT_HUMAN,
        temperature: 0.0,
        uses_search: false,
        post_process: true,
        status: StatusText {
            running: "⚖️ Agent is reviewing...",
            opening: "🧐 Analyzing legal jargon...",
            drafting: "📝 Translating to plain English...",
            done: "Review Complete",
            result_title: "Summary",
        },
    },
    AgentProfile {
        variant: Variant::BugHunt,
        system_prompt: prompts::BUG_HUNT_SYSTEM,
        human_template: prompts::BUG_HUNT_HUMAN,
        temperature: 0.0,
        uses_search: false,
        post_process: true,
        status: StatusText {
            running: "🐛 Agent is debugging...",
            opening: "🔍 Tracing logic flows...",
            drafting: "💻 Writing patch...",
            done: "Debug Complete",
            result_title: "Debug Report",
        },
    },
    AgentProfile {
        variant: Variant::DataClean,
        system_prompt: prompts::DATA_CLEAN_SYSTEM,
        human_template: prompts::DATA_CLEAN_HUMAN,
        temperature: 0.0,
        uses_search: false,
        // CSV のまま返す必要があるため整形しない
        post_process: false,
        status: StatusText {
            running: "🧹 Agent is cleaning...",
            opening: "🌪️ Parsing unstructured text...",
            drafting: "📊 Formatting to CSV...",
            done: "Data Cleaned",
            result_title: "Data Cleaned",
        },
    },
];

/// 種別に対応する設定を返す
pub fn profile_for(variant: Variant) -> &'static AgentProfile {
    // PROFILES は Variant の宣言順と同じ並び
    &PROFILES[variant as usize]
}
