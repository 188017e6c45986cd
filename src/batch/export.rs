//! # 结果导出
//!
//! 将批次中每个条目的结果导出为 CSV。
//!
//! ## 列
//! `index, requested, matched, kind, error`
//!
//! ## 依赖关系
//! - 被 `commands/copy.rs` 调用
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{ItemCopyError, Result};
use crate::models::BatchResult;

use std::path::Path;

/// 导出结果清单到 CSV 文件
pub fn to_csv(result: &BatchResult, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["index", "requested", "matched", "kind", "error"])?;

    for (i, outcome) in result.outcomes.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            outcome.requested_name.clone(),
            outcome
                .matched_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            outcome.kind.to_string(),
            outcome.error.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush().map_err(|e| ItemCopyError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
