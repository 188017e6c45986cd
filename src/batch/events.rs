//! # 批次事件
//!
//! 批次执行过程中向外部发送的日志、进度和完成事件。
//!
//! ## 事件顺序约定
//! - 每个条目处理完成后恰好发送一次 `progress`，`processed` 从 1 递增到 `total`
//! - `complete` 只发送一次，位于最后一个进度事件和汇总日志之后
//! - 致命错误时同样发送 `complete`，但不会有任何进度事件
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用
//! - `utils/console.rs` 提供终端实现

use std::sync::mpsc::Sender;

/// 日志行类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Info,
    Success,
    NotFound,
    Error,
    Fatal,
    /// 批次汇总行
    Summary,
}

/// 一行人类可读的日志
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub kind: LogKind,
    pub message: String,
}

impl LogLine {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(LogKind::Info, message)
    }

    pub fn new(kind: LogKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for LogLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            LogKind::Info | LogKind::Summary => write!(f, "{}", self.message),
            LogKind::Success => write!(f, "✓ {}", self.message),
            LogKind::NotFound | LogKind::Error | LogKind::Fatal => {
                write!(f, "✗ {}", self.message)
            }
        }
    }
}

/// 批次事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyEvent {
    Log(LogLine),
    Progress { processed: usize, total: usize },
    Complete,
}

/// 事件接收端
///
/// 接收端不能让复制失败：方法没有返回值，实现方自行吞掉内部错误。
pub trait EventSink {
    fn log(&mut self, line: LogLine);
    fn progress(&mut self, processed: usize, total: usize);
    fn complete(&mut self);
}

/// 将事件记录在内存中
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<CopyEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl RecordingSink {
    pub fn log_lines(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                CopyEvent::Log(line) => Some(line.to_string()),
                _ => None,
            })
            .collect()
    }

    pub fn progress_events(&self) -> Vec<(usize, usize)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                CopyEvent::Progress { processed, total } => Some((*processed, *total)),
                _ => None,
            })
            .collect()
    }

    pub fn completions(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, CopyEvent::Complete))
            .count()
    }
}

impl EventSink for RecordingSink {
    fn log(&mut self, line: LogLine) {
        self.events.push(CopyEvent::Log(line));
    }

    fn progress(&mut self, processed: usize, total: usize) {
        self.events.push(CopyEvent::Progress { processed, total });
    }

    fn complete(&mut self) {
        self.events.push(CopyEvent::Complete);
    }
}

// 接收端断开时直接丢弃事件
impl EventSink for Sender<CopyEvent> {
    fn log(&mut self, line: LogLine) {
        let _ = self.send(CopyEvent::Log(line));
    }

    fn progress(&mut self, processed: usize, total: usize) {
        let _ = self.send(CopyEvent::Progress { processed, total });
    }

    fn complete(&mut self) {
        let _ = self.send(CopyEvent::Complete);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_log_line_prefixes() {
        assert_eq!(LogLine::info("Processing: a").to_string(), "Processing: a");
        assert_eq!(
            LogLine::new(LogKind::Success, "Copied file: a -> a.md").to_string(),
            "✓ Copied file: a -> a.md"
        );
        assert_eq!(
            LogLine::new(LogKind::NotFound, "Not found: b").to_string(),
            "✗ Not found: b"
        );
    }

    #[test]
    fn test_channel_sink_forwards_in_order() {
        let (mut tx, rx) = mpsc::channel::<CopyEvent>();
        tx.log(LogLine::info("start"));
        tx.progress(1, 1);
        tx.complete();
        drop(tx);

        let events: Vec<_> = rx.iter().collect();
        assert_eq!(
            events,
            vec![
                CopyEvent::Log(LogLine::info("start")),
                CopyEvent::Progress {
                    processed: 1,
                    total: 1
                },
                CopyEvent::Complete,
            ]
        );
    }

    #[test]
    fn test_channel_sink_ignores_disconnected_receiver() {
        let (mut tx, rx) = mpsc::channel::<CopyEvent>();
        drop(rx);
        tx.log(LogLine::info("nobody listening"));
        tx.complete();
    }
}
