//! officeos コマンドの enum（Command Pattern）

use crate::domain::Request;

/// officeos の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum OfficeCommand {
    /// ヘルプ表示
    Help,
    /// エージェント一覧（サイドバーのメニュー相当）
    ListAgents,
    /// エージェント実行
    Run { request: Request },
}
