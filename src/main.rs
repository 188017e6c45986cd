//! # itemcopy - 按名称清单批量复制
//!
//! 给定源目录、目标目录和一份条目名称清单，在源目录中逐个查找
//! （可忽略扩展名），将找到的文件或文件夹复制到目标目录，并实时报告进度。
//!
//! ## 子命令
//! - `copy`    - 解析并复制条目清单
//! - `resolve` - 只预览解析结果
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/    (解析器、复制引擎、批量执行器)
//!   │     └── models/   (数据模型)
//!   ├── utils/      (终端输出、进度条)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    match commands::run(cli.command) {
        Ok(status) => std::process::exit(status.exit_code()),
        Err(e) => {
            utils::output::print_error(&format!("{}", e));
            std::process::exit(1);
        }
    }
}
