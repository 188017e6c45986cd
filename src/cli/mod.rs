//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `copy`: 查找并复制条目清单
//! - `resolve`: 只预览条目解析结果
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: copy, resolve

pub mod copy;
pub mod resolve;

use clap::{Parser, Subcommand};

/// itemcopy - 按名称清单批量复制文件与文件夹
#[derive(Parser)]
#[command(name = "itemcopy")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Copy a list of named files and folders from one directory to another", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve each listed item in the source directory and copy it to the target
    Copy(copy::CopyArgs),

    /// Show what each listed item resolves to, without copying
    Resolve(resolve::ResolveArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_copy_args() {
        let cli = Cli::try_parse_from([
            "itemcopy",
            "copy",
            "--source",
            "/in",
            "--target",
            "/out",
            "--item",
            "notes",
            "--item",
            "project",
            "-x",
        ])
        .unwrap();

        match cli.command {
            Commands::Copy(args) => {
                assert_eq!(args.items.source.to_str(), Some("/in"));
                assert_eq!(args.target.to_str(), Some("/out"));
                assert_eq!(args.items.item, vec!["notes", "project"]);
                assert!(args.items.ignore_extensions);
                assert!(args.items.items.is_none());
            }
            Commands::Resolve(_) => panic!("expected copy"),
        }
    }

    #[test]
    fn test_clap_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
