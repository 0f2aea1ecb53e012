//! # Exam Extract
//!
//! 一个用于从保存的试题 HTML 页面中批量提取题目的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 数据模型层（Models）
//! - `models/` - 题目记录与提取结果的数据结构
//! - `QuestionRecord` - 单个题目（题干 + 选项 + 答案）
//! - `ExtractionOutcome` - 一次提取的全部记录与未处理文件列表
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单一职责
//! - `QuestionExtractor` - 解析 HTML、按标记类提取题目的核心能力
//! - `ResultWriter` - 写结果文本 / JSON 能力
//! - `WordExporter` - 文本转 Word 文档能力
//! - `WarnWriter` - 写诊断与未处理清单能力
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/` - 应用入口，串联扫描 → 提取 → 写出
//! - 持有进度条，将提取任务放到阻塞线程执行
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::{Config, OutputDirs};
pub use error::{AppError, Result};
pub use models::{ExtractionOutcome, QuestionRecord, UNKNOWN_ANSWER};
pub use orchestrator::App;
pub use services::html_extractor::QuestionExtractor;
pub use services::result_writer::ResultWriter;
