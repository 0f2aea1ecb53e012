//! HTML 文件扫描
//!
//! 递归收集目录树下的全部 .html 文件。

use crate::error::{AppError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// 递归查找目录下的所有 HTML 文件
///
/// 每层目录项按文件名排序，保证重复运行得到相同的文件顺序。
pub fn find_html_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect(dir, &mut files)?;
    Ok(files)
}

fn collect(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| AppError::FileRead {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    entries.sort();

    for path in entries {
        if path.is_dir() {
            collect(&path, files)?;
        } else if path.extension().and_then(|s| s.to_str()) == Some("html") {
            files.push(path);
        }
    }

    Ok(())
}
