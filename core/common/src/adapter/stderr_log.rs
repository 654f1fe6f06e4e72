//! 人間向けログ（stderr へ 1 行ずつ）
//!
//! `-v` 指定時のみ配線される。fields は JSON のまま短く出す。

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};

const FIELDS_SUMMARY_MAX: usize = 400;

/// stderr へ整形して出力する Log 実装
#[derive(Debug, Clone, Default)]
pub struct StderrLog;

impl StderrLog {
    pub fn new() -> Self {
        Self
    }
}

/// 1 レコードを表示用の 1 行にする
pub fn format_line(record: &LogRecord) -> String {
    let mut line = format!("[{}] {}", record.level.as_str(), record.message);
    if let Some(layer) = &record.layer {
        line = format!("{} ({})", line, layer);
    }
    if let Some(fields) = &record.fields {
        let s = serde_json::to_string(fields).unwrap_or_default();
        if s.chars().count() > FIELDS_SUMMARY_MAX {
            let truncated: String = s.chars().take(FIELDS_SUMMARY_MAX).collect();
            line = format!("{} {}...", line, truncated);
        } else {
            line = format!("{} {}", line, s);
        }
    }
    line
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        eprintln!("{}", format_line(record));
        Ok(())
    }
}
