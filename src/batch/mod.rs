//! # 批量复制模块
//!
//! 条目解析与复制引擎。
//!
//! ## 功能
//! - 在源目录中解析条目名称（精确匹配优先，可忽略扩展名）
//! - 递归复制文件或目录树
//! - 串行批次执行、进度反馈与统计
//! - 结果清单导出
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `walkdir` 遍历目录，`csv` 导出结果

pub mod copier;
pub mod events;
pub mod export;
pub mod resolver;
pub mod runner;

pub use events::{EventSink, LogKind, LogLine, RecordingSink};
pub use resolver::resolve_item;
pub use runner::BatchRunner;
