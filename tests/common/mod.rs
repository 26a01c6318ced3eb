#![allow(dead_code)]

use ai_language_console::error::{ApiError, AppResult};
use ai_language_console::models::{DetectedLanguage, Entity, LinkedEntity, Sentiment};
use ai_language_console::{AnswerCandidate, KnowledgeBase, TextAnalyzer};
use async_trait::async_trait;
use std::sync::Mutex;

/// 确定性的桩服务
///
/// - 文本包含 `FAIL` 时情感分析报错
/// - 文本包含 `plain` 时关键短语、实体、链接实体都为空
/// - 问题包含 `nothing` 时返回零个答案
#[derive(Default)]
pub struct StubService {
    pub analyzed: Mutex<Vec<String>>,
    pub questions: Mutex<Vec<(String, String, String)>>,
}

impl StubService {
    pub fn analyzed_count(&self) -> usize {
        self.analyzed.lock().unwrap().len()
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions
            .lock()
            .unwrap()
            .iter()
            .map(|(q, _, _)| q.clone())
            .collect()
    }
}

#[async_trait]
impl TextAnalyzer for StubService {
    async fn detect_language(&self, text: &str) -> AppResult<DetectedLanguage> {
        self.analyzed.lock().unwrap().push(text.to_string());
        Ok(DetectedLanguage {
            name: "English".to_string(),
            iso6391_name: "en".to_string(),
            confidence: 1.0,
        })
    }

    async fn analyze_sentiment(&self, text: &str) -> AppResult<Sentiment> {
        if text.contains("FAIL") {
            return Err(ApiError::RateLimited {
                endpoint: "language/:analyze-text".to_string(),
                retry_after: Some(1),
            }
            .into());
        }
        Ok(Sentiment::Mixed)
    }

    async fn extract_key_phrases(&self, text: &str) -> AppResult<Vec<String>> {
        if text.contains("plain") {
            return Ok(vec![]);
        }
        Ok(vec!["room".to_string(), "breakfast".to_string()])
    }

    async fn recognize_entities(&self, text: &str) -> AppResult<Vec<Entity>> {
        if text.contains("plain") {
            return Ok(vec![]);
        }
        Ok(vec![Entity {
            text: "London".to_string(),
            category: "Location".to_string(),
        }])
    }

    async fn recognize_linked_entities(&self, text: &str) -> AppResult<Vec<LinkedEntity>> {
        if text.contains("plain") {
            return Ok(vec![]);
        }
        Ok(vec![LinkedEntity {
            name: "London".to_string(),
            url: "https://en.wikipedia.org/wiki/London".to_string(),
        }])
    }
}

#[async_trait]
impl KnowledgeBase for StubService {
    async fn get_answers(
        &self,
        question: &str,
        project_name: &str,
        deployment_name: &str,
    ) -> AppResult<Vec<AnswerCandidate>> {
        self.questions.lock().unwrap().push((
            question.to_string(),
            project_name.to_string(),
            deployment_name.to_string(),
        ));

        if question.contains("nothing") {
            return Ok(vec![]);
        }
        if question.contains("FAIL") {
            return Err(ApiError::Unauthorized {
                endpoint: "language/:query-knowledgebases".to_string(),
                status: 401,
                message: Some("Access denied".to_string()),
            }
            .into());
        }

        Ok(vec![
            AnswerCandidate::new(format!("Answer to {}", question), 0.9, "faq.tsv"),
            AnswerCandidate::new("Fallback", 0.2, "chitchat"),
        ])
    }
}
