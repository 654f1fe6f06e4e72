//! Web 検索 Outbound ポート（re-export）

pub use crate::search::WebSearch;
