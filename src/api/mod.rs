//! API 模块
//!
//! 远程语言服务的请求/响应格式。这里的类型只在客户端内部使用，
//! 对外统一转换为 `models` 中的领域类型。

pub mod question_answering;
pub mod text_analysis;

use serde::Deserialize;

/// 服务返回的错误信息
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// 非 2xx 响应的错误包装 `{"error": {...}}`
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ServiceError,
}

impl ErrorEnvelope {
    /// 尽量从响应体中解析出错误信息，解析不了时返回 None
    pub fn parse(body: &str) -> Option<ServiceError> {
        serde_json::from_str::<ErrorEnvelope>(body).ok().map(|e| e.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_envelope() {
        let body = r#"{"error":{"code":"401","message":"Access denied due to invalid subscription key."}}"#;
        let err = ErrorEnvelope::parse(body).unwrap();

        assert_eq!(err.code, "401");
        assert!(err.message.starts_with("Access denied"));
    }

    #[test]
    fn test_parse_error_envelope_non_json() {
        assert!(ErrorEnvelope::parse("<html>Bad Gateway</html>").is_none());
    }
}
