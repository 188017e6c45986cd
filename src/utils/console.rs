//! # 终端事件接收端
//!
//! 将批次事件渲染到终端：彩色日志行加进度条。
//!
//! ## 依赖关系
//! - 被 `commands/copy.rs` 使用
//! - 实现 `batch/events.rs` 中的 `EventSink`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::{EventSink, LogKind, LogLine};
use crate::utils::{output, progress};

use indicatif::ProgressBar;

/// 终端输出
pub struct ConsoleSink {
    pb: Option<ProgressBar>,
    /// 只显示失败条目和错误
    quiet: bool,
}

impl ConsoleSink {
    pub fn new(quiet: bool) -> Self {
        Self { pb: None, quiet }
    }

    /// quiet 模式只保留失败条目、错误和汇总行
    fn shows(&self, kind: LogKind) -> bool {
        !(self.quiet && matches!(kind, LogKind::Info | LogKind::Success))
    }

    fn print(&self, line: &LogLine) {
        let render = || match line.kind {
            LogKind::Info if line.message == "---" => output::print_separator(),
            LogKind::Info => output::print_info(&line.message),
            LogKind::Summary => output::print_done(&line.message),
            LogKind::Success => output::print_success(&line.message),
            LogKind::NotFound => output::print_warning(&line.message),
            LogKind::Error | LogKind::Fatal => output::print_error(&line.message),
        };

        match &self.pb {
            Some(pb) => pb.suspend(render),
            None => render(),
        }
    }
}

impl EventSink for ConsoleSink {
    fn log(&mut self, line: LogLine) {
        if self.shows(line.kind) {
            self.print(&line);
        }
    }

    fn progress(&mut self, processed: usize, total: usize) {
        let pb = self
            .pb
            .get_or_insert_with(|| progress::create_progress_bar(total as u64, "Copying"));
        pb.set_position(processed as u64);
    }

    fn complete(&mut self) {
        if let Some(pb) = self.pb.take() {
            pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_keeps_failures_and_summary() {
        let sink = ConsoleSink::new(true);
        assert!(!sink.shows(LogKind::Info));
        assert!(!sink.shows(LogKind::Success));
        assert!(sink.shows(LogKind::NotFound));
        assert!(sink.shows(LogKind::Error));
        assert!(sink.shows(LogKind::Fatal));
        assert!(sink.shows(LogKind::Summary));
    }

    #[test]
    fn test_default_shows_everything() {
        let sink = ConsoleSink::new(false);
        assert!(sink.shows(LogKind::Info));
        assert!(sink.shows(LogKind::Success));
        assert!(sink.shows(LogKind::Summary));
    }
}
