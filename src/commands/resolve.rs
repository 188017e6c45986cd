//! # resolve 命令实现
//!
//! 预览每个条目在源目录中会匹配到哪个实际条目，不做任何复制。
//!
//! ## 依赖关系
//! - 使用 `cli/resolve.rs` 定义的参数
//! - 使用 `batch/resolver.rs`
//! - 使用 `utils/output.rs`

use super::{read_items_list, RunStatus};
use crate::batch::resolve_item;
use crate::cli::resolve::ResolveArgs;
use crate::error::{ItemCopyError, Result};
use crate::models::{parse_items, ResolvedItem};
use crate::utils::output;

use std::fs;
use std::path::Path;

/// 执行 resolve 命令
pub fn execute(args: ResolveArgs) -> Result<RunStatus> {
    let source = &args.items.source;
    fs::read_dir(source).map_err(|e| ItemCopyError::DirectoryRead {
        path: source.display().to_string(),
        source: e,
    })?;

    let items = parse_items(&read_items_list(&args.items)?);
    if items.is_empty() {
        return Err(ItemCopyError::InvalidArgument(
            "no items to resolve (use --items or --item)".to_string(),
        ));
    }

    output::print_header(&format!("Resolving {} item(s)", items.len()));

    let resolved = resolve_all(source, &items, args.items.ignore_extensions);
    let mut found = 0;

    for (name, item) in items.iter().zip(&resolved) {
        match item {
            Ok(item) => match item.matched_name() {
                Some(actual) => {
                    output::print_mapping(&item.requested_name, &actual);
                    found += 1;
                }
                None => output::print_warning(&format!("Not found: {}", name)),
            },
            Err(e) => output::print_error(&format!("{}: {}", name, e)),
        }
    }

    output::print_done(&format!(
        "{} of {} item(s) resolved in '{}'",
        found,
        items.len(),
        source.display()
    ));

    Ok(if found == items.len() {
        RunStatus::Clean
    } else {
        RunStatus::ItemsFailed
    })
}

fn resolve_all(
    source: &Path,
    items: &[String],
    ignore_extensions: bool,
) -> Vec<Result<ResolvedItem>> {
    items
        .iter()
        .map(|name| resolve_item(source, name, ignore_extensions))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::copy::ItemsArgs;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_all_preserves_order() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("report.csv"), "x").unwrap();
        fs::create_dir(dir.path().join("project")).unwrap();

        let items = vec![
            "project".to_string(),
            "report".to_string(),
            "ghost".to_string(),
        ];
        let resolved = resolve_all(dir.path(), &items, true);

        let names: Vec<Option<String>> = resolved
            .iter()
            .map(|r| r.as_ref().unwrap().matched_name())
            .collect();
        assert_eq!(
            names,
            vec![Some("project".to_string()), Some("report.csv".to_string()), None]
        );
    }

    #[test]
    fn test_execute_does_not_copy() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();

        let args = ResolveArgs {
            items: ItemsArgs {
                source: dir.path().to_path_buf(),
                items: None,
                item: vec!["a".to_string(), "b".to_string()],
                ignore_extensions: true,
            },
        };

        assert_eq!(execute(args).unwrap(), RunStatus::ItemsFailed);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_execute_missing_source() {
        let dir = tempdir().unwrap();
        let args = ResolveArgs {
            items: ItemsArgs {
                source: dir.path().join("missing"),
                items: None,
                item: vec!["a".to_string()],
                ignore_extensions: false,
            },
        };

        assert!(matches!(
            execute(args),
            Err(ItemCopyError::DirectoryRead { .. })
        ));
    }
}
