//! アダプター（設定読み込み・入力・進捗表示の実装と、テスト用スタブ）

pub mod config;
pub mod input;
pub mod progress;
pub mod stub_completion;
pub mod stub_search;

pub use config::load_app_config;
pub use input::{read_input, read_job_description, InputSource};
pub use progress::{SilentProgress, StderrProgress};
#[cfg(test)]
pub use stub_completion::StubCompletion;
#[cfg(test)]
pub use stub_search::{RecordingProgress, StubSearch};
