//! # 统一错误处理模块
//!
//! 定义 itemcopy 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分级
//! - 致命错误：`BatchSetup`，整个批次中止
//! - 单项错误：`DirectoryRead`, `Copy`，只影响当前条目，批次继续
//! - 其余为命令行层面的错误（参数、报告文件等）
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// itemcopy 统一错误类型
#[derive(Error, Debug)]
pub enum ItemCopyError {
    // ─────────────────────────────────────────────────────────────
    // 批次错误
    // ─────────────────────────────────────────────────────────────
    #[error("Cannot prepare batch at {path}: {source}")]
    BatchSetup {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to search in source directory {path}: {source}")]
    DirectoryRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {path}: {source}")]
    Copy {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("A copy batch is already running")]
    AlreadyRunning,

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 序列化错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ItemCopyError {
    /// 是否为致命错误（中止整个批次）
    pub fn is_fatal(&self) -> bool {
        matches!(self, ItemCopyError::BatchSetup { .. })
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ItemCopyError>;
