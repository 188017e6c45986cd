//! # 数据模型模块
//!
//! 定义复制请求、单项结果和批次统计的数据模型。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 子模块: request, outcome

pub mod outcome;
pub mod request;

pub use outcome::{BatchResult, CopyOutcome, CopyResponse, ItemKind, OutcomeKind, ResolvedItem};
pub use request::{parse_items, CopyRequest};
