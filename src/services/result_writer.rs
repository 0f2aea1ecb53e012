//! 结果写出服务 - 业务能力层
//!
//! 只负责把题目记录渲染成文本并落盘，不关心提取流程。

use crate::error::{AppError, Result};
use crate::models::QuestionRecord;
use std::path::{Path, PathBuf};
use tracing::info;

/// 结果写出服务
pub struct ResultWriter {
    text_dir: PathBuf,
}

impl ResultWriter {
    /// 创建结果写出服务
    ///
    /// # 参数
    /// - `text_dir`: 文本结果输出目录
    pub fn new(text_dir: impl Into<PathBuf>) -> Self {
        Self {
            text_dir: text_dir.into(),
        }
    }

    /// 渲染结果文本
    ///
    /// 每条记录一个段落：1 起始的序号 + 题干、缩进的选项列表、答案，
    /// 段落之间以空行分隔。
    pub fn render(records: &[QuestionRecord]) -> String {
        let mut out = String::new();
        for (i, record) in records.iter().enumerate() {
            out.push_str(&format!("第{}题: {}\n", i + 1, record.question));
            out.push_str("选项:\n");
            for option in &record.options {
                out.push_str(&format!("  {}\n", option));
            }
            out.push_str(&format!("答案: {}\n\n", record.answer));
        }
        out
    }

    /// 写出文本结果
    ///
    /// 调用方给出的路径只取文件名部分，统一写入文本输出目录。
    ///
    /// # 返回
    /// 返回实际写入的文件路径
    pub async fn save(&self, records: &[QuestionRecord], output_name: &str) -> Result<PathBuf> {
        let path = self.resolve(output_name, None);
        let content = Self::render(records);

        tokio::fs::write(&path, content)
            .await
            .map_err(|e| AppError::FileWrite {
                path: path.display().to_string(),
                source: e,
            })?;

        info!("✓ 结果已保存: {}", path.display());
        Ok(path)
    }

    /// 写出 JSON 结果（与文本文件同名，扩展名改为 .json）
    pub async fn save_json(
        &self,
        records: &[QuestionRecord],
        output_name: &str,
    ) -> Result<PathBuf> {
        let path = self.resolve(output_name, Some("json"));
        let content = serde_json::to_string_pretty(records)?;

        tokio::fs::write(&path, content)
            .await
            .map_err(|e| AppError::FileWrite {
                path: path.display().to_string(),
                source: e,
            })?;

        info!("✓ JSON 结果已保存: {}", path.display());
        Ok(path)
    }

    fn resolve(&self, output_name: &str, extension: Option<&str>) -> PathBuf {
        let base = Path::new(output_name)
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("结果.txt"));
        let mut path = self.text_dir.join(base);
        if let Some(ext) = extension {
            path.set_extension(ext);
        }
        path
    }
}
