//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `models/`, `utils/`
//! - 子模块: copy, resolve

pub mod copy;
pub mod resolve;

use crate::cli::copy::ItemsArgs;
use crate::cli::Commands;
use crate::error::{ItemCopyError, Result};

use std::fs;
use std::io;

/// 命令结束状态，决定进程退出码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// 所有条目成功
    Clean,
    /// 批次完成，但至少一个条目失败或未找到
    ItemsFailed,
    /// 致命错误，已经报告过
    Aborted,
}

impl RunStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            RunStatus::Clean => 0,
            RunStatus::Aborted => 1,
            RunStatus::ItemsFailed => 2,
        }
    }
}

/// 执行命令
pub fn run(cmd: Commands) -> Result<RunStatus> {
    match cmd {
        Commands::Copy(args) => copy::execute(args),
        Commands::Resolve(args) => resolve::execute(args),
    }
}

/// 组装原始条目文本：先 `--items` 文件（或 stdin），再追加 `--item`
fn read_items_list(args: &ItemsArgs) -> Result<String> {
    let mut list = match &args.items {
        Some(path) if path.as_os_str() == "-" => {
            io::read_to_string(io::stdin()).map_err(|e| ItemCopyError::FileReadError {
                path: "<stdin>".to_string(),
                source: e,
            })?
        }
        Some(path) => fs::read_to_string(path).map_err(|e| ItemCopyError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?,
        None => String::new(),
    };

    for name in &args.item {
        if !list.is_empty() && !list.ends_with('\n') {
            list.push('\n');
        }
        list.push_str(name);
    }

    Ok(list)
}
