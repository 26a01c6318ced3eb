//! 文本分析接口
//!
//! `POST {endpoint}/language/:analyze-text?api-version=2023-04-01`
//!
//! 协议本身支持一次提交多个文档，这里始终只提交一个（id 固定为 "1"）。

use serde::{Deserialize, Serialize};

use super::ServiceError;
use crate::error::{ApiError, AppResult};
use crate::models::{DetectedLanguage, Entity, LinkedEntity, Sentiment};

pub const ANALYZE_TEXT_PATH: &str = "language/:analyze-text";
pub const TEXT_ANALYSIS_API_VERSION: &str = "2023-04-01";

const DOCUMENT_ID: &str = "1";

/// 分析类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    LanguageDetection,
    SentimentAnalysis,
    KeyPhraseExtraction,
    EntityRecognition,
    EntityLinking,
}

impl AnalysisKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::LanguageDetection => "LanguageDetection",
            AnalysisKind::SentimentAnalysis => "SentimentAnalysis",
            AnalysisKind::KeyPhraseExtraction => "KeyPhraseExtraction",
            AnalysisKind::EntityRecognition => "EntityRecognition",
            AnalysisKind::EntityLinking => "EntityLinking",
        }
    }
}

// ========== 请求 ==========

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeTextRequest<'a> {
    kind: &'static str,
    parameters: Parameters,
    analysis_input: AnalysisInput<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Parameters {
    model_version: &'static str,
}

#[derive(Debug, Serialize)]
struct AnalysisInput<'a> {
    documents: Vec<InputDocument<'a>>,
}

#[derive(Debug, Serialize)]
struct InputDocument<'a> {
    id: &'static str,
    text: &'a str,
}

impl<'a> AnalyzeTextRequest<'a> {
    /// 构建单文档请求
    pub fn single(kind: AnalysisKind, text: &'a str) -> Self {
        Self {
            kind: kind.as_str(),
            parameters: Parameters {
                model_version: "latest",
            },
            analysis_input: AnalysisInput {
                documents: vec![InputDocument {
                    id: DOCUMENT_ID,
                    text,
                }],
            },
        }
    }
}

// ========== 响应 ==========

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextResponse<D> {
    results: AnalysisResults<D>,
}

#[derive(Debug, Deserialize)]
struct AnalysisResults<D> {
    #[serde(default = "Vec::new")]
    documents: Vec<D>,
    #[serde(default)]
    errors: Vec<DocumentError>,
}

#[derive(Debug, Deserialize)]
struct DocumentError {
    #[allow(dead_code)]
    id: String,
    error: ServiceError,
}

impl<D> AnalyzeTextResponse<D> {
    /// 取出唯一文档的结果；文档级错误转换为 [`ApiError::DocumentRejected`]
    pub fn into_single(self, endpoint: &str) -> AppResult<D> {
        if let Some(rejected) = self.results.errors.into_iter().next() {
            return Err(ApiError::DocumentRejected {
                endpoint: endpoint.to_string(),
                code: rejected.error.code,
                message: rejected.error.message,
            }
            .into());
        }

        self.results.documents.into_iter().next().ok_or_else(|| {
            ApiError::EmptyResponse {
                endpoint: endpoint.to_string(),
            }
            .into()
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDocument {
    detected_language: WireLanguage,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireLanguage {
    name: String,
    #[serde(default)]
    iso6391_name: String,
    #[serde(default)]
    confidence_score: f64,
}

impl From<LanguageDocument> for DetectedLanguage {
    fn from(doc: LanguageDocument) -> Self {
        DetectedLanguage {
            name: doc.detected_language.name,
            iso6391_name: doc.detected_language.iso6391_name,
            confidence: doc.detected_language.confidence_score,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SentimentDocument {
    sentiment: String,
}

impl From<SentimentDocument> for Sentiment {
    fn from(doc: SentimentDocument) -> Self {
        Sentiment::from(doc.sentiment)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPhraseDocument {
    #[serde(default)]
    key_phrases: Vec<String>,
}

impl From<KeyPhraseDocument> for Vec<String> {
    fn from(doc: KeyPhraseDocument) -> Self {
        doc.key_phrases
    }
}

#[derive(Debug, Deserialize)]
pub struct EntityDocument {
    #[serde(default)]
    entities: Vec<WireEntity>,
}

#[derive(Debug, Deserialize)]
struct WireEntity {
    text: String,
    category: String,
}

impl From<EntityDocument> for Vec<Entity> {
    fn from(doc: EntityDocument) -> Self {
        doc.entities
            .into_iter()
            .map(|e| Entity {
                text: e.text,
                category: e.category,
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct LinkedEntityDocument {
    #[serde(default)]
    entities: Vec<WireLinkedEntity>,
}

#[derive(Debug, Deserialize)]
struct WireLinkedEntity {
    name: String,
    #[serde(default)]
    url: String,
}

impl From<LinkedEntityDocument> for Vec<LinkedEntity> {
    fn from(doc: LinkedEntityDocument) -> Self {
        doc.entities
            .into_iter()
            .map(|e| LinkedEntity {
                name: e.name,
                url: e.url,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use serde_json::json;

    #[test]
    fn test_request_is_single_document_batch() {
        let request = AnalyzeTextRequest::single(AnalysisKind::KeyPhraseExtraction, "The rooms were clean.");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "kind": "KeyPhraseExtraction",
                "parameters": { "modelVersion": "latest" },
                "analysisInput": {
                    "documents": [{ "id": "1", "text": "The rooms were clean." }]
                }
            })
        );
    }

    #[test]
    fn test_language_response_into_domain() {
        let body = json!({
            "kind": "LanguageDetectionResults",
            "results": {
                "documents": [{
                    "id": "1",
                    "detectedLanguage": { "name": "French", "iso6391Name": "fr", "confidenceScore": 0.98 },
                    "warnings": []
                }],
                "errors": [],
                "modelVersion": "2022-10-01"
            }
        });
        let response: AnalyzeTextResponse<LanguageDocument> = serde_json::from_value(body).unwrap();
        let language: DetectedLanguage = response.into_single("analyze-text").unwrap().into();

        assert_eq!(language.name, "French");
        assert_eq!(language.iso6391_name, "fr");
        assert!((language.confidence - 0.98).abs() < f64::EPSILON);
    }

    #[test]
    fn test_linked_entities_keep_service_order() {
        let body = json!({
            "results": {
                "documents": [{
                    "id": "1",
                    "entities": [
                        { "name": "Seattle", "url": "https://en.wikipedia.org/wiki/Seattle", "dataSource": "Wikipedia", "matches": [] },
                        { "name": "Space Needle", "url": "https://en.wikipedia.org/wiki/Space_Needle", "dataSource": "Wikipedia", "matches": [] }
                    ]
                }],
                "errors": []
            }
        });
        let response: AnalyzeTextResponse<LinkedEntityDocument> = serde_json::from_value(body).unwrap();
        let linked: Vec<LinkedEntity> = response.into_single("analyze-text").unwrap().into();

        let names: Vec<&str> = linked.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Seattle", "Space Needle"]);
    }

    #[test]
    fn test_document_error_is_rejected() {
        let body = json!({
            "results": {
                "documents": [],
                "errors": [{
                    "id": "1",
                    "error": { "code": "InvalidArgument", "message": "Document text is empty." }
                }]
            }
        });
        let response: AnalyzeTextResponse<SentimentDocument> = serde_json::from_value(body).unwrap();
        let err = response.into_single("analyze-text").unwrap_err();

        match err {
            AppError::Api(ApiError::DocumentRejected { code, message, .. }) => {
                assert_eq!(code, "InvalidArgument");
                assert_eq!(message, "Document text is empty.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_document_is_empty_response() {
        let body = json!({ "results": { "documents": [], "errors": [] } });
        let response: AnalyzeTextResponse<KeyPhraseDocument> = serde_json::from_value(body).unwrap();

        assert!(matches!(
            response.into_single("analyze-text"),
            Err(AppError::Api(ApiError::EmptyResponse { .. }))
        ));
    }
}
