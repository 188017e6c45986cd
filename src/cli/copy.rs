//! # copy 子命令 CLI 定义
//!
//! 在源目录中查找条目清单并复制到目标目录
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/copy.rs`

use clap::Args;
use std::path::PathBuf;

/// 源/目标目录与条目清单（copy 与 resolve 共用）
#[derive(Args, Debug, Clone)]
pub struct ItemsArgs {
    /// Source directory to look items up in
    #[arg(short, long, env = "ITEMCOPY_SOURCE")]
    pub source: PathBuf,

    /// File with one item name per line ('-' reads stdin)
    #[arg(short, long)]
    pub items: Option<PathBuf>,

    /// Item name to look up (repeatable, appended after --items)
    #[arg(long = "item", value_name = "NAME")]
    pub item: Vec<String>,

    /// Match files by name without extension when there is no exact match
    #[arg(short = 'x', long, default_value_t = false)]
    pub ignore_extensions: bool,
}

/// copy 子命令参数
#[derive(Args, Debug)]
pub struct CopyArgs {
    #[command(flatten)]
    pub items: ItemsArgs,

    /// Target directory (created if missing)
    #[arg(short, long, env = "ITEMCOPY_TARGET")]
    pub target: PathBuf,

    /// Write a per-item CSV report
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Print the per-item result table after the summary
    #[arg(long, default_value_t = false)]
    pub table: bool,

    /// Print the operation result as JSON instead of log lines
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Only show failed items and the summary
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}
