//! human prompt の組み立て
//!
//! テンプレート側のプレースホルダだけを 1 パスで置換する。差し込んだ入力は再走査しないので、
//! 入力に `{context}` などが含まれていてもそのまま残る。エスケープ・切り詰めはしない。

use common::search::SearchHit;
use regex::{Captures, Regex};
use std::sync::OnceLock;

use crate::domain::{AgentProfile, Request};

/// 検索結果のうちプロンプトに入れる件数
pub const SEARCH_RESULT_LIMIT: usize = 4;

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").expect("static regex"))
}

/// `{name}` を bindings の値で置換する。未知の名前は残す
pub fn render(template: &str, bindings: &[(&str, &str)]) -> String {
    placeholder()
        .replace_all(template, |caps: &Captures| {
            bindings
                .iter()
                .find(|(name, _)| *name == &caps[1])
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// 検索結果を "- title: snippet" 行に畳み込む（先頭 4 件）
pub fn fold_search_context(hits: &[SearchHit]) -> String {
    hits.iter()
        .take(SEARCH_RESULT_LIMIT)
        .map(|h| format!("- {}: {}\n", h.title, h.snippet))
        .collect()
}

/// プロファイルのテンプレートへ入力（と検索コンテキスト）を差し込む
pub fn build_human_prompt(profile: &AgentProfile, request: &Request, context: Option<&str>) -> String {
    let mut bindings = request.bindings();
    if let Some(ctx) = context {
        bindings.push(("context", ctx));
    }
    render(profile.human_template, &bindings)
}
