//! 応答テキストの見出し整形
//!
//! Markdown レンダラはブロック要素の間に空行が必要なため、`###` の直前が改行でなければ
//! 空行（"\n\n"）を差し込む。テキスト先頭の `###` はそのまま残す。

use regex::Regex;
use std::sync::OnceLock;

fn header_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("###").expect("static regex"))
}

/// `###` の直前に空行を入れる（1 パス・非重複マッチ）
///
/// 直前の文字は元テキストで判定する。改行直後の `#` の並び（`####` 見出しなど）は
/// 1 つの見出しとして扱い、途中で分割しない。2 回かけても結果は変わらない。
pub fn clean_markdown_headers(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;
    for m in header_marker().find_iter(text) {
        out.push_str(&text[last..m.start()]);
        if m.start() > 0 && !text[..m.start()].ends_with('\n') {
            out.push_str("\n\n");
        }
        out.push_str(m.as_str());
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}
