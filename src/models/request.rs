//! # 复制请求数据模型
//!
//! 描述一次批量复制的输入：源目录、目标目录、条目列表与扩展名策略。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 和 `commands/` 使用
//! - 使用 `error.rs`

use crate::error::{ItemCopyError, Result};

use std::path::{Path, PathBuf};

/// 一次批量复制请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    source_root: PathBuf,
    target_root: PathBuf,
    items: Vec<String>,
    ignore_extensions: bool,
}

impl CopyRequest {
    /// 从原始条目文本（换行分隔）构建请求
    pub fn new(
        source_root: impl Into<PathBuf>,
        target_root: impl Into<PathBuf>,
        items_list: &str,
        ignore_extensions: bool,
    ) -> Result<Self> {
        let source_root = source_root.into();
        let target_root = target_root.into();

        if source_root.as_os_str().is_empty() {
            return Err(ItemCopyError::InvalidArgument(
                "source path must not be empty".to_string(),
            ));
        }
        if target_root.as_os_str().is_empty() {
            return Err(ItemCopyError::InvalidArgument(
                "target path must not be empty".to_string(),
            ));
        }

        Ok(Self {
            source_root,
            target_root,
            items: parse_items(items_list),
            ignore_extensions,
        })
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn target_root(&self) -> &Path {
        &self.target_root
    }

    /// 规范化后的条目（保持顺序，允许重复）
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn ignore_extensions(&self) -> bool {
        self.ignore_extensions
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }
}

/// 按行拆分条目列表，去掉首尾空白并丢弃空行
///
/// `\r\n` 换行也被正确处理（`\r` 属于空白）。
pub fn parse_items(items_list: &str) -> Vec<String> {
    items_list
        .split('\n')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
