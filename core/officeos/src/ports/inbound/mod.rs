//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::domain::Request;
use crate::usecase::PipelineError;

/// エージェントを 1 回実行する Inbound ポート
///
/// フロントエンド（CLI・Web・デスクトップ）はこの trait だけを呼ぶ。状態は持ち越さない。
pub trait RunAgent: Send + Sync {
    fn run(&self, request: &Request) -> Result<String, PipelineError>;
}
