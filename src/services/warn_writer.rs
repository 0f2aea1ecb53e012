//! 诊断写入服务 - 业务能力层
//!
//! 只负责"写诊断文件"能力，不关心提取流程

use crate::error::{AppError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 诊断写入服务
///
/// 职责：
/// - 追加单条诊断日志行
/// - 写出未处理文件清单，方便用户复查
pub struct WarnWriter {
    file_path: PathBuf,
}

impl WarnWriter {
    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: path.into(),
        }
    }

    /// 追加一条诊断信息
    pub fn append_line(&self, message: &str) -> Result<()> {
        debug!("写入诊断: {}", message);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)
            .map_err(|e| AppError::FileWrite {
                path: self.file_path.display().to_string(),
                source: e,
            })?;

        writeln!(file, "{}", message).map_err(|e| AppError::FileWrite {
            path: self.file_path.display().to_string(),
            source: e,
        })?;

        Ok(())
    }

    /// 写出未处理文件清单（覆盖写入，每行一个路径）
    pub fn write_paths(&self, paths: &[PathBuf]) -> Result<()> {
        let mut content = String::new();
        for path in paths {
            content.push_str(&path.display().to_string());
            content.push('\n');
        }

        std::fs::write(&self.file_path, content).map_err(|e| AppError::FileWrite {
            path: self.file_path.display().to_string(),
            source: e,
        })?;

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}
