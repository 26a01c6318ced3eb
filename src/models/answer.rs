use serde::{Deserialize, Serialize};

/// 知识库返回的候选答案
///
/// 按服务给出的顺序打印，本地不重新排序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerCandidate {
    pub answer: String,
    /// 置信度
    pub confidence: f64,
    /// 答案来源
    pub source: String,
}

impl AnswerCandidate {
    pub fn new(answer: impl Into<String>, confidence: f64, source: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            confidence,
            source: source.into(),
        }
    }
}
