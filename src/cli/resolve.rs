//! # resolve 子命令 CLI 定义
//!
//! 只解析条目、不复制（预览匹配结果）
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/resolve.rs`

use super::copy::ItemsArgs;
use clap::Args;

/// resolve 子命令参数
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub items: ItemsArgs,
}
