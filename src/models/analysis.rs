use serde::{Deserialize, Serialize};
use std::fmt;

/// 检测出的主要语言
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedLanguage {
    /// 语言名称，例如 "English"
    pub name: String,
    #[serde(default)]
    pub iso6391_name: String,
    #[serde(default)]
    pub confidence: f64,
}

/// 情感标签
///
/// 服务返回未知标签时原样保留
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
    Mixed,
    Other(String),
}

impl From<String> for Sentiment {
    fn from(label: String) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "positive" => Sentiment::Positive,
            "neutral" => Sentiment::Neutral,
            "negative" => Sentiment::Negative,
            "mixed" => Sentiment::Mixed,
            _ => Sentiment::Other(label),
        }
    }
}

impl From<Sentiment> for String {
    fn from(sentiment: Sentiment) -> Self {
        sentiment.to_string()
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Neutral => write!(f, "neutral"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Mixed => write!(f, "mixed"),
            Sentiment::Other(label) => write!(f, "{}", label),
        }
    }
}

/// 命名实体 (文本, 类别)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub category: String,
}

/// 链接实体 (名称, 参考 URL)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedEntity {
    pub name: String,
    pub url: String,
}

/// 单个文档的分析报告
///
/// 只在打印期间存在，打印完即丢弃
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub file_name: String,
    pub text: String,
    pub language: DetectedLanguage,
    pub sentiment: Sentiment,
    /// 保持服务返回的顺序
    pub key_phrases: Vec<String>,
    pub entities: Vec<Entity>,
    pub linked_entities: Vec<LinkedEntity>,
}
