use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 答案缺失时使用的占位值
///
/// 与空字符串不同：空字符串表示答案块存在但内容为空，
/// 占位值表示页面里根本没有可解析的答案块。
pub const UNKNOWN_ANSWER: &str = "未知";

/// 单个题目记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// 题干文本（已去除首尾空白）
    pub question: String,
    /// 选项列表，按文档顺序；允许重复
    pub options: Vec<String>,
    /// 答案文本，缺失时为 [`UNKNOWN_ANSWER`]
    pub answer: String,
}

impl QuestionRecord {
    pub fn has_answer(&self) -> bool {
        self.answer != UNKNOWN_ANSWER
    }
}

/// 一次提取运行的完整结果
///
/// 每次调用 `QuestionExtractor::extract` 都会产生一个新的结果，
/// 提取器自身不在多次运行之间保留任何状态。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionOutcome {
    /// 全部题目记录：先按文件处理顺序，再按块在文件中的出现顺序
    pub records: Vec<QuestionRecord>,
    /// 未产出任何题目或处理出错的文件
    pub unprocessed: Vec<PathBuf>,
}

impl ExtractionOutcome {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.unprocessed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_answer_is_not_empty_string() {
        let record = QuestionRecord {
            question: "题干".to_string(),
            options: vec![],
            answer: UNKNOWN_ANSWER.to_string(),
        };
        assert!(!record.has_answer());
        assert_ne!(record.answer, "");
    }
}
