//! OfficeOS 共通ライブラリ
//!
//! `officeos` コマンドが使う外部コラボレータ（LLM 完了・Web 検索）のアダプタと、
//! エラー型・構造化ログのポートを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// チャット完了 API のクライアント
pub mod llm;

/// Web 検索 API のクライアント
pub mod search;

/// Ports & Adapters のポート定義
pub mod ports;

/// ポートの標準実装
pub mod adapter;
