//! 文档分析流程 - 流程层
//!
//! 核心职责：定义"一个文档"的完整分析流程
//!
//! 流程顺序：
//! 1. 语言检测
//! 2. 情感分析
//! 3. 关键短语提取
//! 4. 命名实体识别
//! 5. 实体链接
//!
//! 任一步失败，整个文档即失败，不做重试。

use tracing::debug;

use crate::clients::TextAnalyzer;
use crate::error::AppResult;
use crate::models::{AnalysisReport, Document};

/// 文档分析流程
///
/// - 不持有任何资源，只依赖分析能力
/// - 每次调用都重新请求服务，不缓存结果
pub struct DocumentFlow<'a, A: TextAnalyzer + ?Sized> {
    analyzer: &'a A,
}

impl<'a, A: TextAnalyzer + ?Sized> DocumentFlow<'a, A> {
    pub fn new(analyzer: &'a A) -> Self {
        Self { analyzer }
    }

    pub async fn analyze(&self, document: &Document) -> AppResult<AnalysisReport> {
        let text = document.text.as_str();

        let language = self.analyzer.detect_language(text).await?;
        debug!("[{}] 语言: {}", document.file_name, language.name);

        let sentiment = self.analyzer.analyze_sentiment(text).await?;
        debug!("[{}] 情感: {}", document.file_name, sentiment);

        let key_phrases = self.analyzer.extract_key_phrases(text).await?;
        let entities = self.analyzer.recognize_entities(text).await?;
        let linked_entities = self.analyzer.recognize_linked_entities(text).await?;

        debug!(
            "[{}] 关键短语 {} 个, 实体 {} 个, 链接实体 {} 个",
            document.file_name,
            key_phrases.len(),
            entities.len(),
            linked_entities.len()
        );

        Ok(AnalysisReport {
            file_name: document.file_name.clone(),
            text: document.text.clone(),
            language,
            sentiment,
            key_phrases,
            entities,
            linked_entities,
        })
    }
}
