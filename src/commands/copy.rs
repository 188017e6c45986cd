//! # copy 命令实现
//!
//! 按名称清单在源目录中查找条目并复制到目标目录。
//!
//! ## 功能
//! - 读取条目清单（文件、stdin 或命令行）
//! - 串行解析与复制，终端实时显示日志与进度
//! - 可选导出 CSV 结果清单、打印结果表格、输出 JSON
//!
//! ## 依赖关系
//! - 使用 `cli/copy.rs` 定义的参数
//! - 使用 `batch/`, `models/`
//! - 使用 `utils/output.rs`, `utils/console.rs`

use super::{read_items_list, RunStatus};
use crate::batch::{export, BatchRunner, EventSink, RecordingSink};
use crate::cli::copy::CopyArgs;
use crate::error::{ItemCopyError, Result};
use crate::models::{BatchResult, CopyRequest, CopyResponse};
use crate::utils::console::ConsoleSink;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 结果表格行
#[derive(Debug, Clone, Tabled)]
struct OutcomeRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Requested")]
    requested: String,
    #[tabled(rename = "Copied as")]
    copied_as: String,
    #[tabled(rename = "Result")]
    result: String,
    #[tabled(rename = "Error")]
    error: String,
}

/// 执行 copy 命令
pub fn execute(args: CopyArgs) -> Result<RunStatus> {
    let items_list = read_items_list(&args.items)?;
    let request = CopyRequest::new(
        &args.items.source,
        &args.target,
        &items_list,
        args.items.ignore_extensions,
    )?;

    if request.total() == 0 {
        return Err(ItemCopyError::InvalidArgument(
            "no items to copy (use --items or --item)".to_string(),
        ));
    }

    // JSON 模式下 stdout 只保留最终结果
    let mut recorder = RecordingSink::new();
    let mut console = ConsoleSink::new(args.quiet);
    let sink: &mut dyn EventSink = if args.json {
        &mut recorder
    } else {
        output::print_header("Copying Items");
        &mut console
    };

    let mut runner = BatchRunner::new();
    let result = match runner.run(&request, sink) {
        Ok(result) => result,
        Err(e) if e.is_fatal() => {
            if args.json {
                print_json(&CopyResponse::fatal(&e))?;
            } else {
                output::print_error(&format!("Copy operation failed: {}", e));
            }
            return Ok(RunStatus::Aborted);
        }
        Err(e) => return Err(e),
    };

    if let Some(report) = &args.report {
        export::to_csv(&result, report)?;
        if !args.json {
            output::print_success(&format!("Report saved to '{}'", report.display()));
        }
    }

    if args.json {
        print_json(&CopyResponse::completed(&result))?;
    } else {
        if args.table {
            println!("{}", Table::new(outcome_rows(&result)));
        }
        print_summary(&result, &args);
    }

    Ok(if result.all_succeeded() {
        RunStatus::Clean
    } else {
        RunStatus::ItemsFailed
    })
}

fn print_summary(result: &BatchResult, args: &CopyArgs) {
    output::print_done(&format!(
        "Copied {} of {} item(s) into '{}'",
        result.succeeded,
        result.total,
        args.target.display()
    ));
    if result.failed > 0 {
        output::print_warning(&format!(
            "{} item(s) were not found or failed to copy",
            result.failed
        ));
    }
}

fn outcome_rows(result: &BatchResult) -> Vec<OutcomeRow> {
    result
        .outcomes
        .iter()
        .enumerate()
        .map(|(i, o)| OutcomeRow {
            index: i + 1,
            requested: o.requested_name.clone(),
            copied_as: o
                .matched_path
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            result: o.kind.to_string(),
            error: o.error.clone().unwrap_or_default(),
        })
        .collect()
}

fn print_json(response: &CopyResponse) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::copy::ItemsArgs;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn copy_args(src: &Path, dst: &Path, items: &[&str], ignore: bool) -> CopyArgs {
        CopyArgs {
            items: ItemsArgs {
                source: src.to_path_buf(),
                items: None,
                item: items.iter().map(|s| s.to_string()).collect(),
                ignore_extensions: ignore,
            },
            target: dst.to_path_buf(),
            report: None,
            table: false,
            json: true,
            quiet: true,
        }
    }

    #[test]
    fn test_execute_clean_batch_with_report() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        fs::write(src.path().join("notes.md"), "n").unwrap();
        fs::create_dir(src.path().join("project")).unwrap();
        fs::write(src.path().join("project").join("main.go"), "m").unwrap();

        let report = dst.path().join("report.csv");
        let mut args = copy_args(src.path(), &dst.path().join("out"), &["notes", "project"], true);
        args.report = Some(report.clone());

        assert_eq!(execute(args).unwrap(), RunStatus::Clean);
        assert!(dst.path().join("out").join("notes.md").is_file());
        assert!(dst.path().join("out").join("project").join("main.go").is_file());
        assert_eq!(fs::read_to_string(report).unwrap().lines().count(), 3);
    }

    #[test]
    fn test_execute_reports_item_failures() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        fs::write(src.path().join("a.txt"), "a").unwrap();

        let args = copy_args(src.path(), dst.path(), &["a.txt", "ghost"], false);
        assert_eq!(execute(args).unwrap(), RunStatus::ItemsFailed);
    }

    #[test]
    fn test_execute_fatal_is_aborted() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        let occupied = dst.path().join("file");
        fs::write(&occupied, "x").unwrap();

        let args = copy_args(src.path(), &occupied, &["a"], false);
        assert_eq!(execute(args).unwrap(), RunStatus::Aborted);
    }

    #[test]
    fn test_execute_requires_items() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();

        let args = copy_args(src.path(), dst.path(), &["   "], false);
        assert!(matches!(
            execute(args),
            Err(ItemCopyError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_outcome_rows_use_disk_name() {
        let mut result = BatchResult::new(1);
        result.record(crate::models::CopyOutcome::copied(
            "notes",
            std::path::PathBuf::from("/src/notes.md"),
            crate::models::ItemKind::File,
        ));

        let rows = outcome_rows(&result);
        assert_eq!(rows[0].copied_as, "notes.md");
        assert_eq!(rows[0].result, "file");
        assert!(Table::new(&rows).to_string().contains("Copied as"));
    }
}
