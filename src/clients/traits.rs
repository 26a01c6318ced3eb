use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{AnswerCandidate, DetectedLanguage, Entity, LinkedEntity, Sentiment};

/// 文本分析能力
///
/// 每个方法只处理一个文档，对应一次远程调用
#[async_trait]
pub trait TextAnalyzer: Send + Sync {
    async fn detect_language(&self, text: &str) -> AppResult<DetectedLanguage>;

    async fn analyze_sentiment(&self, text: &str) -> AppResult<Sentiment>;

    async fn extract_key_phrases(&self, text: &str) -> AppResult<Vec<String>>;

    async fn recognize_entities(&self, text: &str) -> AppResult<Vec<Entity>>;

    async fn recognize_linked_entities(&self, text: &str) -> AppResult<Vec<LinkedEntity>>;
}

/// 知识库问答能力
#[async_trait]
pub trait KnowledgeBase: Send + Sync {
    /// 返回的候选答案保持服务给出的顺序
    async fn get_answers(
        &self,
        question: &str,
        project_name: &str,
        deployment_name: &str,
    ) -> AppResult<Vec<AnswerCandidate>>;
}
