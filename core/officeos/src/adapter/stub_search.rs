//! テスト用: 固定の検索結果（またはエラー）を返す WebSearch 実装と、進捗を記録する Progress 実装


#[cfg(test)]
pub use stub::{RecordingProgress, StubSearch};
