//! 進捗表示の Outbound ポート
//!
//! パイプラインの各ステップをフロントエンドへ知らせる。結果の出力とは別チャネル。

/// 進捗の通知先
pub trait Progress: Send + Sync {
    /// 実行開始（例: "Agent is working..."）
    fn begin(&self, label: &str);
    /// 途中のステップ
    fn step(&self, message: &str);
    /// 正常完了
    fn finish(&self, label: &str);
    /// 失敗で終了
    fn fail(&self, label: &str);
}
