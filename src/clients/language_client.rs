//! 语言服务客户端
//!
//! 封装所有与远程语言服务相关的调用逻辑
use crate::api::question_answering::{
    QueryKnowledgeBaseRequest, QueryKnowledgeBaseResponse, QUERY_KNOWLEDGEBASES_PATH,
    QUESTION_ANSWERING_API_VERSION,
};
use crate::api::text_analysis::{
    AnalysisKind, AnalyzeTextRequest, AnalyzeTextResponse, EntityDocument, KeyPhraseDocument,
    LanguageDocument, LinkedEntityDocument, SentimentDocument, ANALYZE_TEXT_PATH,
    TEXT_ANALYSIS_API_VERSION,
};
use crate::api::ErrorEnvelope;
use crate::clients::traits::{KnowledgeBase, TextAnalyzer};
use crate::config::Config;
use crate::error::{ApiError, AppError, AppResult};
use crate::models::{AnswerCandidate, DetectedLanguage, Entity, LinkedEntity, Sentiment};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// 语言服务客户端
///
/// 创建时不做任何校验，端点或密钥有问题会在第一次调用时暴露
pub struct LanguageClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl LanguageClient {
    /// 创建新的语言服务客户端
    pub fn new(config: &Config) -> Self {
        Self::with_credentials(&config.ai_service_endpoint, &config.ai_service_key)
    }

    /// 使用指定端点和密钥创建客户端
    pub fn with_credentials(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// 拼接请求 URL
    fn build_url(&self, path: &str, query: &[(&str, &str)]) -> AppResult<Url> {
        let base = self.endpoint.trim().trim_end_matches('/');
        let url = Url::parse_with_params(&format!("{}/{}", base, path), query)
            .map_err(|e| AppError::invalid_endpoint(self.endpoint.clone(), e))?;

        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::invalid_endpoint(
                self.endpoint.clone(),
                "endpoint must be an http(s) URL",
            ));
        }

        Ok(url)
    }

    /// 发送一次 POST 请求并解析 JSON 响应
    ///
    /// 不做任何重试，失败直接返回
    async fn post_json<B, R>(&self, path: &str, query: &[(&str, &str)], body: &B) -> AppResult<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = self.build_url(path, query)?;

        debug!("POST {}", url.path());

        let response = self
            .http
            .post(url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!("语言服务请求失败: {}", e);
                AppError::api_request_failed(path, e)
            })?;

        let status = response.status();
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());

        let text = response
            .text()
            .await
            .map_err(|e| AppError::api_request_failed(path, e))?;

        debug!("响应状态: {}, 长度: {} 字节", status, text.len());

        if !status.is_success() {
            return Err(status_error(path, status, retry_after, &text).into());
        }

        serde_json::from_str(&text).map_err(|source| {
            ApiError::JsonParseFailed {
                endpoint: path.to_string(),
                source,
            }
            .into()
        })
    }

    /// 对单个文档执行一种文本分析
    async fn analyze<D>(&self, kind: AnalysisKind, text: &str) -> AppResult<D>
    where
        D: DeserializeOwned,
    {
        debug!("文本分析: {}, 文本长度: {} 字符", kind.as_str(), text.chars().count());

        let request = AnalyzeTextRequest::single(kind, text);
        let response: AnalyzeTextResponse<D> = self
            .post_json(
                ANALYZE_TEXT_PATH,
                &[("api-version", TEXT_ANALYSIS_API_VERSION)],
                &request,
            )
            .await?;

        response.into_single(ANALYZE_TEXT_PATH)
    }
}

/// 把非 2xx 响应转换为对应的错误类型
fn status_error(path: &str, status: StatusCode, retry_after: Option<u64>, body: &str) -> ApiError {
    let service_error = ErrorEnvelope::parse(body);
    let endpoint = path.to_string();

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized {
            endpoint,
            status: status.as_u16(),
            message: service_error.map(|e| e.message),
        },
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited {
            endpoint,
            retry_after,
        },
        _ => ApiError::BadResponse {
            endpoint,
            status: status.as_u16(),
            code: service_error.as_ref().map(|e| e.code.clone()),
            message: service_error.map(|e| e.message),
        },
    }
}

#[async_trait]
impl TextAnalyzer for LanguageClient {
    async fn detect_language(&self, text: &str) -> AppResult<DetectedLanguage> {
        let doc: LanguageDocument = self.analyze(AnalysisKind::LanguageDetection, text).await?;
        Ok(doc.into())
    }

    async fn analyze_sentiment(&self, text: &str) -> AppResult<Sentiment> {
        let doc: SentimentDocument = self.analyze(AnalysisKind::SentimentAnalysis, text).await?;
        Ok(doc.into())
    }

    async fn extract_key_phrases(&self, text: &str) -> AppResult<Vec<String>> {
        let doc: KeyPhraseDocument = self.analyze(AnalysisKind::KeyPhraseExtraction, text).await?;
        Ok(doc.into())
    }

    async fn recognize_entities(&self, text: &str) -> AppResult<Vec<Entity>> {
        let doc: EntityDocument = self.analyze(AnalysisKind::EntityRecognition, text).await?;
        Ok(doc.into())
    }

    async fn recognize_linked_entities(&self, text: &str) -> AppResult<Vec<LinkedEntity>> {
        let doc: LinkedEntityDocument = self.analyze(AnalysisKind::EntityLinking, text).await?;
        Ok(doc.into())
    }
}

#[async_trait]
impl KnowledgeBase for LanguageClient {
    async fn get_answers(
        &self,
        question: &str,
        project_name: &str,
        deployment_name: &str,
    ) -> AppResult<Vec<AnswerCandidate>> {
        debug!(
            "知识库查询: 项目 {}, 部署 {}, 问题长度: {} 字符",
            project_name,
            deployment_name,
            question.chars().count()
        );

        let response: QueryKnowledgeBaseResponse = self
            .post_json(
                QUERY_KNOWLEDGEBASES_PATH,
                &[
                    ("projectName", project_name),
                    ("deploymentName", deployment_name),
                    ("api-version", QUESTION_ANSWERING_API_VERSION),
                ],
                &QueryKnowledgeBaseRequest { question },
            )
            .await?;

        Ok(response.into())
    }
}
