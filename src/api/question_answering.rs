//! 知识库问答接口
//!
//! `POST {endpoint}/language/:query-knowledgebases?projectName=..&deploymentName=..&api-version=2021-10-01`

use serde::{Deserialize, Serialize};

use crate::models::AnswerCandidate;

pub const QUERY_KNOWLEDGEBASES_PATH: &str = "language/:query-knowledgebases";
pub const QUESTION_ANSWERING_API_VERSION: &str = "2021-10-01";

#[derive(Debug, Serialize)]
pub struct QueryKnowledgeBaseRequest<'a> {
    pub question: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct QueryKnowledgeBaseResponse {
    #[serde(default)]
    answers: Vec<WireAnswer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireAnswer {
    #[serde(default)]
    answer: String,
    #[serde(default)]
    confidence_score: f64,
    #[serde(default)]
    source: Option<String>,
}

impl From<QueryKnowledgeBaseResponse> for Vec<AnswerCandidate> {
    fn from(response: QueryKnowledgeBaseResponse) -> Self {
        response
            .answers
            .into_iter()
            .map(|a| AnswerCandidate {
                answer: a.answer,
                confidence: a.confidence_score,
                source: a.source.unwrap_or_default(),
            })
            .collect()
    }
}
