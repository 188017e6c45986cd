//! # 批量执行器
//!
//! 逐个解析并复制请求中的条目，向事件接收端报告进度。
//!
//! ## 功能
//! - 准备阶段：创建目标目录、确认源目录可读，失败即中止整个批次
//! - 按请求顺序串行处理，单项错误只记录不中止
//! - 每个条目恰好一行结果日志、一个进度事件
//! - 汇总统计与完成事件
//!
//! ## 状态机
//! `Idle -> Running -> Completed` 或 `Idle -> Running -> FatalAborted`
//!
//! ## 依赖关系
//! - 被 `commands/copy.rs` 调用
//! - 使用 `batch/resolver.rs`, `batch/copier.rs`, `batch/events.rs`

use super::copier::copy_tree;
use super::events::{EventSink, LogKind, LogLine};
use super::resolver::resolve;
use crate::error::{ItemCopyError, Result};
use crate::models::{BatchResult, CopyOutcome, CopyRequest, ItemKind, OutcomeKind};

use std::fs;

/// 执行器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchState {
    #[default]
    Idle,
    Running,
    Completed,
    FatalAborted,
}

/// 批量执行器
#[derive(Debug, Default)]
pub struct BatchRunner {
    state: BatchState,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn state(&self) -> BatchState {
        self.state
    }

    /// 执行一个批次
    ///
    /// 单项错误记录在返回的 `BatchResult` 中，`Err` 只表示批次未能开始。
    pub fn run(&mut self, request: &CopyRequest, sink: &mut dyn EventSink) -> Result<BatchResult> {
        if self.state == BatchState::Running {
            return Err(ItemCopyError::AlreadyRunning);
        }
        self.state = BatchState::Running;

        announce(request, sink);

        if let Err(e) = prepare(request) {
            sink.log(LogLine::new(LogKind::Fatal, format!("Fatal error: {}", e)));
            sink.complete();
            self.state = BatchState::FatalAborted;
            return Err(e);
        }

        let total = request.total();
        let mut result = BatchResult::new(total);

        for name in request.items() {
            sink.log(LogLine::info(format!("Processing: {}", name)));

            let outcome = process_item(request, name);
            sink.log(outcome_line(&outcome));
            result.record(outcome);

            sink.progress(result.processed(), total);
        }

        sink.log(LogLine::info("---"));
        sink.log(LogLine::info("Copy operation completed!"));
        sink.log(LogLine::new(
            LogKind::Summary,
            format!(
                "Success: {}, Errors: {}, Total: {}",
                result.succeeded, result.failed, result.total
            ),
        ));
        sink.complete();

        self.state = BatchState::Completed;
        Ok(result)
    }
}

fn announce(request: &CopyRequest, sink: &mut dyn EventSink) {
    sink.log(LogLine::info("Starting copy operation..."));
    sink.log(LogLine::info(format!(
        "Source: {}",
        request.source_root().display()
    )));
    sink.log(LogLine::info(format!(
        "Target: {}",
        request.target_root().display()
    )));
    sink.log(LogLine::info(format!("Items to copy: {}", request.total())));
    sink.log(LogLine::info(format!(
        "Ignore extensions: {}",
        if request.ignore_extensions() { "Yes" } else { "No" }
    )));
    sink.log(LogLine::info("---"));
}

/// 准备阶段：目标目录必须可创建，源目录必须可列举
fn prepare(request: &CopyRequest) -> Result<()> {
    let target = request.target_root();
    fs::create_dir_all(target).map_err(|e| ItemCopyError::BatchSetup {
        path: target.display().to_string(),
        source: e,
    })?;

    let source = request.source_root();
    fs::read_dir(source).map_err(|e| ItemCopyError::BatchSetup {
        path: source.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 处理单个条目，所有错误都转换为结果
fn process_item(request: &CopyRequest, name: &str) -> CopyOutcome {
    let found = match resolve(request.source_root(), name, request.ignore_extensions()) {
        Ok(Some(path)) => path,
        Ok(None) => return CopyOutcome::not_found(name),
        Err(e) => return CopyOutcome::failed(name, None, e.to_string()),
    };

    // 以磁盘上的实际名称落盘，而不是请求名称
    let Some(file_name) = found.file_name() else {
        return CopyOutcome::failed(
            name,
            Some(found.clone()),
            format!("Invalid entry name: {}", found.display()),
        );
    };
    let dest = request.target_root().join(file_name);

    match copy_tree(&found, &dest) {
        Ok(kind) => CopyOutcome::copied(name, found, kind),
        Err(e) => CopyOutcome::failed(name, Some(found), e.to_string()),
    }
}

fn outcome_line(outcome: &CopyOutcome) -> LogLine {
    let name = &outcome.requested_name;
    let actual = outcome
        .matched_path
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    match outcome.kind {
        OutcomeKind::Directory | OutcomeKind::File => {
            let what = if outcome.kind == OutcomeKind::Directory {
                ItemKind::Directory
            } else {
                ItemKind::File
            };
            LogLine::new(
                LogKind::Success,
                format!("Copied {}: {} -> {}", what, name, actual),
            )
        }
        OutcomeKind::NotFound => LogLine::new(LogKind::NotFound, format!("Not found: {}", name)),
        OutcomeKind::Failed => LogLine::new(
            LogKind::Error,
            format!(
                "Error copying {}: {}",
                name,
                outcome.error.as_deref().unwrap_or("unknown error")
            ),
        ),
    }
}
