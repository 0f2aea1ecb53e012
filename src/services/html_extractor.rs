//! 题目提取服务 - 业务能力层
//!
//! 核心能力：把一批保存下来的试题 HTML 页面转换为结构化题目数据。
//! 输入是第三方站点抓取的页面，结构参差不齐，因此采用三级容错：
//!
//! - 文件级：读取 / 解码失败只记入未处理清单，不中断批次
//! - 块级：缺少题干标记的块直接跳过，不影响同文件的其他块
//! - 字段级：答案缺失时落到占位值 [`UNKNOWN_ANSWER`]
//!
//! 对畸形数据 `extract` 永不返回错误，坏文件只体现为
//! `unprocessed` 成员加一条诊断日志。

use crate::error::{AppError, Result};
use crate::models::{ExtractionOutcome, QuestionRecord, UNKNOWN_ANSWER};
use crate::utils::logging::truncate_text;
use scraper::{ElementRef, Html, Selector};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// 题目块容器的标记类
const BLOCK_SELECTOR: &str = "div.answerCon";
/// 题干元素的标记类
const PROMPT_SELECTOR: &str = "i.qtContent";
/// 选项元素的标记类
const OPTION_SELECTOR: &str = "div.optionCon";
/// 答案信息容器的标记类
const ANSWER_SELECTOR: &str = "div.answerInfo";
/// 答案文本所在的段落元素
const PARAGRAPH_SELECTOR: &str = "p";

/// 进度回调：`(已完成文件数, 文件总数)`，每个输入文件恰好触发一次
pub type ProgressFn<'a> = &'a mut dyn FnMut(usize, usize);
/// 诊断回调：每条未处理诊断触发一次
pub type LogFn<'a> = &'a mut dyn FnMut(&str);

/// 题目提取服务
///
/// 职责：
/// - 按标记类定位题目块、题干、选项、答案
/// - 逐文件处理，单文件失败不影响批次
/// - 不持有运行间状态，每次 `extract` 相互独立
pub struct QuestionExtractor {
    block: Selector,
    prompt: Selector,
    option: Selector,
    answer_info: Selector,
    paragraph: Selector,
}

impl QuestionExtractor {
    /// 创建提取服务，预编译全部选择器
    pub fn new() -> Result<Self> {
        Ok(Self {
            block: parse_selector(BLOCK_SELECTOR)?,
            prompt: parse_selector(PROMPT_SELECTOR)?,
            option: parse_selector(OPTION_SELECTOR)?,
            answer_info: parse_selector(ANSWER_SELECTOR)?,
            paragraph: parse_selector(PARAGRAPH_SELECTOR)?,
        })
    }

    /// 批量提取题目
    ///
    /// # 参数
    /// - `file_paths`: HTML 文件路径列表，按给定顺序处理；空列表合法
    /// - `on_progress`: 可选进度回调，每个文件处理完毕后触发一次
    /// - `on_log`: 可选诊断回调，文件读取失败或未找到题目时触发
    ///
    /// # 返回
    /// 返回本次运行的全部记录与未处理文件列表
    pub fn extract(
        &self,
        file_paths: &[PathBuf],
        mut on_progress: Option<ProgressFn<'_>>,
        mut on_log: Option<LogFn<'_>>,
    ) -> ExtractionOutcome {
        let total = file_paths.len();
        let mut outcome = ExtractionOutcome::default();

        for (idx, path) in file_paths.iter().enumerate() {
            // 非 UTF-8 内容在这里表现为 InvalidData 错误，与 I/O 失败同样处理
            match fs::read_to_string(path) {
                Ok(content) => {
                    let scan = self.extract_document(&content);
                    if scan.blocks_found == 0 {
                        outcome.unprocessed.push(path.clone());
                        if let Some(log) = &mut on_log {
                            log(&format!("未找到题目: {}", path.display()));
                        }
                    } else {
                        debug!(
                            "{}: {} 个题目块, {} 条记录",
                            path.display(),
                            scan.blocks_found,
                            scan.records.len()
                        );
                        outcome.records.extend(scan.records);
                    }
                }
                Err(e) => {
                    outcome.unprocessed.push(path.clone());
                    if let Some(log) = &mut on_log {
                        log(&format!("处理失败 {}: {}", path.display(), e));
                    }
                }
            }

            if let Some(progress) = &mut on_progress {
                progress(idx + 1, total);
            }
        }

        outcome
    }

    /// 从单个 HTML 文档中提取题目
    fn extract_document(&self, content: &str) -> DocumentScan {
        // 解析器对残缺标记全量容错，畸形页面也能得到文档树
        let document = Html::parse_document(content);

        let mut blocks_found = 0;
        let mut records = Vec::new();

        for block in document.select(&self.block) {
            blocks_found += 1;
            if let Some(record) = self.extract_block(block) {
                debug!("提取题目: {}", truncate_text(&record.question, 40));
                records.push(record);
            }
        }

        DocumentScan {
            blocks_found,
            records,
        }
    }

    /// 从单个题目块中提取一条记录
    ///
    /// 块内没有题干标记时返回 `None`（装饰性块与题目块共用容器类），
    /// 答案缺失不算失败，落到占位值。
    fn extract_block(&self, block: ElementRef<'_>) -> Option<QuestionRecord> {
        let prompt = block.select(&self.prompt).next()?;
        let question = element_text(prompt);

        // 选项里可能有装饰性空格，去掉全部空格字符
        let options = block
            .select(&self.option)
            .map(|el| element_text(el).replace(' ', ""))
            .collect();

        let answer = block
            .select(&self.answer_info)
            .next()
            .and_then(|info| info.select(&self.paragraph).next())
            .map(element_text)
            .unwrap_or_else(|| UNKNOWN_ANSWER.to_string());

        Some(QuestionRecord {
            question,
            options,
            answer,
        })
    }
}

/// 单个文档的扫描结果
struct DocumentScan {
    blocks_found: usize,
    records: Vec<QuestionRecord>,
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| AppError::SelectorParse {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
