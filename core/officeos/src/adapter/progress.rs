//! 進捗表示の実装
//!
//! StderrProgress: ステップを stderr に 1 行ずつ出す（stdout は結果専用）
//! SilentProgress: 何も出さない（パイプ・テスト用）

use std::io::{self, Write};
use std::sync::Mutex;

use crate::ports::outbound::Progress;

/// 1 行分の表示文字列
fn format_event(kind: ProgressKind, text: &str) -> String {
    match kind {
        ProgressKind::Begin => text.to_string(),
        ProgressKind::Step => format!("  {}", text),
        ProgressKind::Finish => format!("✅ {}", text),
        ProgressKind::Fail => format!("❌ {}", text),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProgressKind {
    Begin,
    Step,
    Finish,
    Fail,
}

/// 任意の Write へ進捗を書く実装
pub struct WriterProgress<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterProgress<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    fn emit(&self, kind: ProgressKind, text: &str) {
        if let Ok(mut w) = self.writer.lock() {
            // 表示の失敗で処理は止めない
            let _ = writeln!(w, "{}", format_event(kind, text));
            let _ = w.flush();
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> Progress for WriterProgress<W> {
    fn begin(&self, label: &str) {
        self.emit(ProgressKind::Begin, label);
    }

    fn step(&self, message: &str) {
        self.emit(ProgressKind::Step, message);
    }

    fn finish(&self, label: &str) {
        self.emit(ProgressKind::Finish, label);
    }

    fn fail(&self, label: &str) {
        self.emit(ProgressKind::Fail, label);
    }
}

/// stderr へ進捗を書く
pub type StderrProgress = WriterProgress<io::Stderr>;

impl StderrProgress {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

/// 何も表示しない
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl Progress for SilentProgress {
    fn begin(&self, _label: &str) {}
    fn step(&self, _message: &str) {}
    fn finish(&self, _label: &str) {}
    fn fail(&self, _label: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_progress_lines() {
        let p = WriterProgress::new(Vec::<u8>::new());
        p.begin("🕵️ Agent is working...");
        p.step("🌐 Connecting to World Wide Web...");
        p.finish("Mission Complete");
        p.fail("Error in Search");
        let out = String::from_utf8(p.into_inner()).unwrap();
        assert_eq!(
            out,
            "🕵️ Agent is working...\n  🌐 Connecting to World Wide Web...\n✅ Mission Complete\n❌ Error in Search\n"
        );
    }
}
