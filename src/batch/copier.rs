//! # 复制引擎
//!
//! 将单个文件或整个目录树复制到目标位置。
//!
//! ## 行为
//! - 目录：创建目标目录（含缺失的上级目录），遍历整棵子树，逐一复制
//! - 文件：确保目标父目录存在后按字节复制，已存在的同名文件直接覆盖
//! - 符号链接沿用宿主文件系统的复制语义（`fs::copy` 跟随链接）
//! - 源与目标为同一条目时不做任何写入（`fs::copy` 会先截断目标）
//! - 不允许把目录复制到它自身内部
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{ItemCopyError, Result};
use crate::models::ItemKind;

use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// 复制 `source` 到 `dest`，返回复制的条目类型
pub fn copy_tree(source: &Path, dest: &Path) -> Result<ItemKind> {
    let metadata = fs::metadata(source).map_err(|e| copy_error(source, e))?;
    let kind = if metadata.is_dir() {
        ItemKind::Directory
    } else {
        ItemKind::File
    };

    // 内容已经在原位
    if is_same_entry(source, dest) {
        return Ok(kind);
    }

    match kind {
        ItemKind::Directory => {
            ensure_not_nested(source, dest)?;
            copy_directory(source, dest)?;
        }
        ItemKind::File => copy_file(source, dest)?,
    }
    Ok(kind)
}

/// `source` 与 `dest` 解析后指向同一个文件系统条目
fn is_same_entry(source: &Path, dest: &Path) -> bool {
    match (fs::canonicalize(source), fs::canonicalize(dest)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// 目标不能位于源目录内部
fn ensure_not_nested(source: &Path, dest: &Path) -> Result<()> {
    let Some(parent) = dest.parent() else {
        return Ok(());
    };
    if let (Ok(src), Ok(parent)) = (fs::canonicalize(source), fs::canonicalize(parent)) {
        if parent.starts_with(&src) {
            return Err(copy_error(
                dest,
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "cannot copy a directory into itself",
                ),
            ));
        }
    }
    Ok(())
}

/// 递归复制目录
fn copy_directory(source: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest).map_err(|e| copy_error(dest, e))?;

    for entry in WalkDir::new(source).min_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(source).to_path_buf();
            copy_error(&path, io::Error::from(e))
        })?;

        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| copy_error(entry.path(), io::Error::new(io::ErrorKind::Other, e)))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| copy_error(&target, e))?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| copy_error(entry.path(), e))?;
        }
    }

    Ok(())
}

/// 复制单个文件（覆盖已存在的目标）
fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| copy_error(parent, e))?;
    }
    fs::copy(source, dest).map_err(|e| copy_error(source, e))?;
    Ok(())
}

fn copy_error(path: &Path, source: io::Error) -> ItemCopyError {
    ItemCopyError::Copy {
        path: path.display().to_string(),
        source,
    }
}
