//! Word 导出服务 - 业务能力层
//!
//! 把结果文本转换成最小可用的 .docx 包：`[Content_Types].xml`、
//! `_rels/.rels` 和 `word/document.xml`，文本每行一个段落。

use crate::error::{AppError, Result};
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

/// Word 导出服务
pub struct WordExporter {
    word_dir: PathBuf,
}

impl WordExporter {
    pub fn new(word_dir: impl Into<PathBuf>) -> Self {
        Self {
            word_dir: word_dir.into(),
        }
    }

    /// 把已写出的文本结果转换为 Word 文档
    ///
    /// # 参数
    /// - `txt_path`: 结果文本文件路径
    ///
    /// # 返回
    /// 返回写入 Word 输出目录的 .docx 路径
    pub fn convert_txt_to_word(&self, txt_path: &Path) -> Result<PathBuf> {
        let content = fs::read_to_string(txt_path).map_err(|e| AppError::FileRead {
            path: txt_path.display().to_string(),
            source: e,
        })?;

        let stem = txt_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "结果".to_string());
        let out_path = self.word_dir.join(format!("{}.docx", stem));

        let bytes = build_docx(&content)?;
        fs::write(&out_path, bytes).map_err(|e| AppError::FileWrite {
            path: out_path.display().to_string(),
            source: e,
        })?;

        info!("✓ Word 文档已保存: {}", out_path.display());
        Ok(out_path)
    }
}

/// 把纯文本打包成 .docx 字节流
fn build_docx(text: &str) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    zip.start_file("[Content_Types].xml", options)?;
    zip.write_all(CONTENT_TYPES.as_bytes())?;

    zip.start_file("_rels/.rels", options)?;
    zip.write_all(RELS.as_bytes())?;

    zip.start_file("word/document.xml", options)?;
    zip.write_all(build_document_xml(text).as_bytes())?;

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

fn build_document_xml(text: &str) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#,
    );
    for line in text.lines() {
        xml.push_str(r#"<w:p><w:r><w:t xml:space="preserve">"#);
        xml.push_str(&xml_escape(line));
        xml.push_str("</w:t></w:r></w:p>");
    }
    xml.push_str("</w:body></w:document>");
    xml
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
