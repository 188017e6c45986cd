//! # 复制结果数据模型
//!
//! 单个条目的解析结果、复制结果，以及整个批次的统计。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - `CopyResponse` 通过 `serde` 序列化为 JSON 输出

use serde::Serialize;
use std::path::PathBuf;

/// 源条目的类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    File,
    Directory,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::File => write!(f, "file"),
            ItemKind::Directory => write!(f, "folder"),
        }
    }
}

/// 单个条目的解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedItem {
    pub requested_name: String,
    pub matched_path: Option<PathBuf>,
}

impl ResolvedItem {
    /// 实际匹配到的磁盘文件名
    pub fn matched_name(&self) -> Option<String> {
        self.matched_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
    }
}

/// 单个条目的最终结果类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Directory,
    File,
    NotFound,
    Failed,
}

impl OutcomeKind {
    pub fn is_success(&self) -> bool {
        matches!(self, OutcomeKind::Directory | OutcomeKind::File)
    }
}

impl From<ItemKind> for OutcomeKind {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::File => OutcomeKind::File,
            ItemKind::Directory => OutcomeKind::Directory,
        }
    }
}

impl std::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutcomeKind::Directory => write!(f, "directory"),
            OutcomeKind::File => write!(f, "file"),
            OutcomeKind::NotFound => write!(f, "not_found"),
            OutcomeKind::Failed => write!(f, "failed"),
        }
    }
}

/// 单个条目的复制结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOutcome {
    pub requested_name: String,
    pub matched_path: Option<PathBuf>,
    pub kind: OutcomeKind,
    pub error: Option<String>,
}

impl CopyOutcome {
    pub fn copied(requested_name: &str, matched_path: PathBuf, kind: ItemKind) -> Self {
        Self {
            requested_name: requested_name.to_string(),
            matched_path: Some(matched_path),
            kind: kind.into(),
            error: None,
        }
    }

    pub fn not_found(requested_name: &str) -> Self {
        Self {
            requested_name: requested_name.to_string(),
            matched_path: None,
            kind: OutcomeKind::NotFound,
            error: None,
        }
    }

    pub fn failed(requested_name: &str, matched_path: Option<PathBuf>, error: String) -> Self {
        Self {
            requested_name: requested_name.to_string(),
            matched_path,
            kind: OutcomeKind::Failed,
            error: Some(error),
        }
    }
}

/// 批量复制结果统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchResult {
    /// 条目总数
    pub total: usize,
    /// 成功数量
    pub succeeded: usize,
    /// 失败数量（含未找到）
    pub failed: usize,
    /// 按请求顺序排列的结果
    pub outcomes: Vec<CopyOutcome>,
}

impl BatchResult {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            outcomes: Vec::with_capacity(total),
            ..Default::default()
        }
    }

    /// 记录一个条目的结果
    pub fn record(&mut self, outcome: CopyOutcome) {
        if outcome.kind.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.outcomes.push(outcome);
    }

    /// 已处理的条目数量
    pub fn processed(&self) -> usize {
        self.outcomes.len()
    }

    /// 所有条目均成功
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// 对外返回的操作结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_items: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CopyResponse {
    pub fn completed(result: &BatchResult) -> Self {
        Self {
            success: true,
            success_count: Some(result.succeeded),
            error_count: Some(result.failed),
            total_items: Some(result.total),
            error: None,
        }
    }

    pub fn fatal(error: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            success_count: None,
            error_count: None,
            total_items: None,
            error: Some(error.to_string()),
        }
    }
}
