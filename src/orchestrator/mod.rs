//! 应用编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责串联完整流程：
//!
//! 1. **应用初始化**：创建输出目录、写日志文件头
//! 2. **输入扫描**：递归收集待处理的 HTML 文件
//! 3. **后台提取**：把同步的提取任务放到阻塞线程，
//!    进度回调接到进度条、诊断回调接到日志
//! 4. **结果写出**：文本结果、可选 JSON / Word 导出、未处理清单
//! 5. **全局统计**：汇总提取数量与未处理文件数量
//!
//! 提取核心自身是纯同步函数，编排层只负责把它搬下交互线程。

use crate::config::{Config, OutputDirs};
use crate::models::ExtractionOutcome;
use crate::services::{QuestionExtractor, ResultWriter, WarnWriter, WordExporter};
use crate::utils::{html_files, logging};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    dirs: OutputDirs,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        // 显式创建输出目录结构
        let dirs = config.ensure_output_dirs()?;

        // 初始化日志文件
        let log_path = dirs.root.join(&config.output_log_file);
        logging::init_log_file(&log_path.display().to_string())?;

        log_startup(&config);

        Ok(Self { config, dirs })
    }

    /// 运行应用主逻辑
    ///
    /// # 参数
    /// - `input_dir`: 待扫描的 HTML 目录
    /// - `output_name`: 结果文本文件名
    /// - `export_word`: 是否同时导出 Word 文档
    /// - `export_json`: 是否同时导出 JSON 结果
    pub async fn run(
        &self,
        input_dir: &Path,
        output_name: &str,
        export_word: bool,
        export_json: bool,
    ) -> Result<()> {
        // 扫描输入目录
        info!("\n📁 正在扫描待处理的 HTML 文件...");
        let files = html_files::find_html_files(input_dir)?;

        if files.is_empty() {
            warn!("⚠️ 没有找到待处理的HTML文件，程序结束");
            return Ok(());
        }
        log_files_found(files.len());

        // 后台提取
        let outcome = self.extract_all(files).await?;

        // 写出结果
        let writer = ResultWriter::new(&self.dirs.text_dir);
        let txt_path = writer.save(&outcome.records, output_name).await?;

        if export_json {
            writer.save_json(&outcome.records, output_name).await?;
        }

        if export_word {
            let exporter = WordExporter::new(&self.dirs.word_dir);
            exporter.convert_txt_to_word(&txt_path)?;
        }

        // 写出未处理清单
        if !outcome.unprocessed.is_empty() {
            let unprocessed_path = self.dirs.root.join(&self.config.unprocessed_file);
            let warn_writer = WarnWriter::with_path(unprocessed_path);
            warn_writer.write_paths(&outcome.unprocessed)?;
            info!("⚠️ 未处理清单已保存: {}", warn_writer.path().display());

            if self.config.verbose_logging {
                for path in &outcome.unprocessed {
                    warn!("未处理: {}", path.display());
                }
            }
        }

        // 输出最终统计
        print_final_stats(&outcome, &txt_path);

        Ok(())
    }

    /// 在阻塞线程上执行提取，进度与诊断回调接回编排层
    async fn extract_all(&self, files: Vec<PathBuf>) -> Result<ExtractionOutcome> {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} 文件")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let log_path = self.dirs.root.join(&self.config.output_log_file);
        let pb_task = pb.clone();

        let outcome = tokio::task::spawn_blocking(
            move || -> crate::error::Result<ExtractionOutcome> {
                let extractor = QuestionExtractor::new()?;
                let diagnostics = WarnWriter::with_path(log_path);

                let mut on_progress =
                    |done: usize, _total: usize| pb_task.set_position(done as u64);
                let mut on_log = |message: &str| {
                    warn!("{}", message);
                    if let Err(e) = diagnostics.append_line(message) {
                        warn!("写入诊断日志失败: {}", e);
                    }
                };

                Ok(extractor.extract(&files, Some(&mut on_progress), Some(&mut on_log)))
            },
        )
        .await??;

        pb.finish_and_clear();
        Ok(outcome)
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 试题 HTML 批量提取模式");
    info!("📂 输出根目录: {}", config.output_root);
    info!("{}", "=".repeat(60));
}

fn log_files_found(total: usize) {
    info!("✓ 找到 {} 个待处理的 HTML 文件", total);
    info!("💡 逐个文件处理，单文件失败不影响批次\n");
}

fn print_final_stats(outcome: &ExtractionOutcome, txt_path: &Path) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 提取题目: {} 道", outcome.records.len());
    info!("❌ 未处理文件: {} 个", outcome.unprocessed.len());
    info!("{}", "=".repeat(60));
    info!("\n结果已保存至: {}", txt_path.display());
}
