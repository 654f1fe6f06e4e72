//! Outbound ポート: アプリが外界（進捗表示等）を使うための trait

pub mod progress;

pub use progress::Progress;
