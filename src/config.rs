use crate::error::{AppError, Result};
use std::fs;
use std::path::PathBuf;

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 输出根目录
    pub output_root: String,
    /// 诊断日志文件名（位于输出根目录）
    pub output_log_file: String,
    /// 未处理文件清单文件名（位于输出根目录）
    pub unprocessed_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_root: "OutPut".to_string(),
            output_log_file: "extract.log".to_string(),
            unprocessed_file: "unprocessed.txt".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            output_root: std::env::var("OUTPUT_ROOT").unwrap_or(default.output_root),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            unprocessed_file: std::env::var("UNPROCESSED_FILE").unwrap_or(default.unprocessed_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.verbose_logging),
        }
    }

    /// 创建输出目录结构
    ///
    /// 显式初始化，由应用入口调用一次；文本结果与 Word 文档
    /// 分别写入 `Text` 和 `Word` 子目录。
    pub fn ensure_output_dirs(&self) -> Result<OutputDirs> {
        let root = PathBuf::from(&self.output_root);
        let text_dir = root.join("Text");
        let word_dir = root.join("Word");

        for dir in [&root, &text_dir, &word_dir] {
            fs::create_dir_all(dir).map_err(|e| AppError::DirectoryCreate {
                path: dir.display().to_string(),
                source: e,
            })?;
        }

        Ok(OutputDirs {
            root,
            text_dir,
            word_dir,
        })
    }
}

/// 输出目录结构
#[derive(Clone, Debug)]
pub struct OutputDirs {
    pub root: PathBuf,
    pub text_dir: PathBuf,
    pub word_dir: PathBuf,
}
