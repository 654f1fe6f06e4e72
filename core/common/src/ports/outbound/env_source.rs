//! 環境変数 Outbound ポート
//!
//! 設定の読み込みはこの trait 経由でのみ環境変数にアクセスする。

/// 環境変数の読み出し抽象
///
/// 実装は `common::adapter::StdEnvSource` やテスト用の `MapEnvSource` など。
pub trait EnvSource: Send + Sync {
    /// 変数を読む。未設定・空文字は None
    fn var(&self, name: &str) -> Option<String>;
}
