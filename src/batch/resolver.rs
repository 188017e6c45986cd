//! # 条目解析器
//!
//! 在源目录（仅一层，不递归）中为请求的名称查找对应条目。
//!
//! ## 匹配策略
//! 1. 完整文件名精确匹配，优先级最高（即使忽略扩展名也是如此）
//! 2. 忽略扩展名时，对非目录条目去掉扩展名后比较
//! 3. 多个条目同时匹配时，按文件系统列举顺序取第一个，不做排序
//!
//! 目录没有扩展名语义，只能通过精确匹配命中。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 和 `commands/resolve.rs` 调用

use crate::error::{ItemCopyError, Result};
use crate::models::ResolvedItem;

use std::fs;
use std::path::{Path, PathBuf};

/// 在 `source_root` 中查找 `requested_name`
pub fn resolve(
    source_root: &Path,
    requested_name: &str,
    ignore_extensions: bool,
) -> Result<Option<PathBuf>> {
    let read_error = |e| ItemCopyError::DirectoryRead {
        path: source_root.display().to_string(),
        source: e,
    };

    let entries = fs::read_dir(source_root)
        .map_err(read_error)?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(read_error)?;

    if let Some(entry) = entries.iter().find(|e| e.file_name() == requested_name) {
        return Ok(Some(entry.path()));
    }

    if !ignore_extensions {
        return Ok(None);
    }

    for entry in &entries {
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir {
            continue;
        }

        let path = entry.path();
        if path.file_stem().is_some_and(|stem| stem == requested_name) {
            return Ok(Some(path));
        }
    }

    Ok(None)
}

/// 解析单个条目，附带请求名称
pub fn resolve_item(
    source_root: &Path,
    requested_name: &str,
    ignore_extensions: bool,
) -> Result<ResolvedItem> {
    let matched_path = resolve(source_root, requested_name, ignore_extensions)?;
    Ok(ResolvedItem {
        requested_name: requested_name.to_string(),
        matched_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn test_exact_match_wins_over_basename() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "report.csv");
        touch(dir.path(), "report.txt");

        let found = resolve(dir.path(), "report.txt", true).unwrap();
        assert_eq!(found, Some(dir.path().join("report.txt")));
    }

    #[test]
    fn test_basename_only_when_ignoring_extensions() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "report.csv");

        assert_eq!(
            resolve(dir.path(), "report", true).unwrap(),
            Some(dir.path().join("report.csv"))
        );
        assert_eq!(resolve(dir.path(), "report", false).unwrap(), None);
    }

    #[test]
    fn test_strips_only_last_extension() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "archive.tar.gz");

        assert_eq!(
            resolve(dir.path(), "archive.tar", true).unwrap(),
            Some(dir.path().join("archive.tar.gz"))
        );
        assert_eq!(resolve(dir.path(), "archive", true).unwrap(), None);
    }

    #[test]
    fn test_leading_dot_is_not_an_extension() {
        let dir = tempdir().unwrap();
        touch(dir.path(), ".bashrc");

        assert_eq!(resolve(dir.path(), "", true).unwrap(), None);
        assert_eq!(
            resolve(dir.path(), ".bashrc", true).unwrap(),
            Some(dir.path().join(".bashrc"))
        );
    }

    #[test]
    fn test_directory_never_basename_matched() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("photos.d")).unwrap();

        assert_eq!(resolve(dir.path(), "photos", true).unwrap(), None);
        assert_eq!(
            resolve(dir.path(), "photos.d", true).unwrap(),
            Some(dir.path().join("photos.d"))
        );
    }

    #[test]
    fn test_does_not_search_subdirectories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        touch(&dir.path().join("nested"), "deep.txt");

        assert_eq!(resolve(dir.path(), "deep.txt", true).unwrap(), None);
    }

    #[test]
    fn test_missing_source_is_read_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");

        let err = resolve(&missing, "a", false).unwrap_err();
        assert!(matches!(err, ItemCopyError::DirectoryRead { .. }));
    }

    #[test]
    fn test_resolve_item_keeps_requested_name() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "notes.md");

        let item = resolve_item(dir.path(), "notes", true).unwrap();
        assert_eq!(item.requested_name, "notes");
        assert_eq!(item.matched_path, Some(dir.path().join("notes.md")));
    }
}
