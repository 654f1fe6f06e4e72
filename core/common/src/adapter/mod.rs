//! アダプター（外界の I/O を trait で抽象化）
//!
//! usecase はポートの trait 経由でのみ環境変数・ログに触れる。
//! 実装は標準実装（Std*）やテスト用の実装を注入する。

pub mod file_json_log;
pub mod std_env_source;
pub mod stderr_log;

pub use file_json_log::{FanoutLog, FileJsonLog, NoopLog};
pub use std_env_source::{MapEnvSource, StdEnvSource};
pub use stderr_log::StderrLog;
