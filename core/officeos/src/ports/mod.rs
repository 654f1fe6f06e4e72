//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: アプリが外界（進捗表示等）を使うための trait
//!
//! LLM・検索・ログのポートは common::ports::outbound にある。

pub mod inbound;
pub mod outbound;
