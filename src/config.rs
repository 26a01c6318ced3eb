use std::fmt;

/// 程序配置
///
/// 启动时读取一次，之后以引用方式传给客户端和各个驱动
#[derive(Clone)]
pub struct Config {
    // --- 语言服务配置 ---
    /// 服务端点 URL
    pub ai_service_endpoint: String,
    /// API 密钥
    pub ai_service_key: String,
    // --- 问答项目配置 ---
    pub qa_project_name: String,
    pub qa_deployment_name: String,
    /// 待分析文本所在目录
    pub reviews_folder: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ai_service_endpoint: String::new(),
            ai_service_key: String::new(),
            qa_project_name: String::new(),
            qa_deployment_name: String::new(),
            reviews_folder: "reviews".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 先加载本地 `.env` 文件（不存在时忽略），再读取进程环境变量
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 从任意键值来源构建配置
    ///
    /// 缺失的必填项不在这里校验，首次调用远程服务时才会暴露为错误
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            ai_service_endpoint: lookup("AI_SERVICE_ENDPOINT").unwrap_or(default.ai_service_endpoint),
            ai_service_key: lookup("AI_SERVICE_KEY").unwrap_or(default.ai_service_key),
            qa_project_name: lookup("QA_PROJECT_NAME").unwrap_or(default.qa_project_name),
            qa_deployment_name: lookup("QA_DEPLOYMENT_NAME").unwrap_or(default.qa_deployment_name),
            reviews_folder: lookup("REVIEWS_FOLDER").unwrap_or(default.reviews_folder),
            verbose_logging: lookup("VERBOSE_LOGGING").and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let masked_key = if self.ai_service_key.is_empty() { "" } else { "***" };
        f.debug_struct("Config")
            .field("ai_service_endpoint", &self.ai_service_endpoint)
            .field("ai_service_key", &masked_key)
            .field("qa_project_name", &self.qa_project_name)
            .field("qa_deployment_name", &self.qa_deployment_name)
            .field("reviews_folder", &self.reviews_folder)
            .field("verbose_logging", &self.verbose_logging)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_reads_all_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("AI_SERVICE_ENDPOINT", "https://example.cognitiveservices.azure.com/"),
            ("AI_SERVICE_KEY", "secret"),
            ("QA_PROJECT_NAME", "faq"),
            ("QA_DEPLOYMENT_NAME", "production"),
            ("REVIEWS_FOLDER", "data/reviews"),
            ("VERBOSE_LOGGING", "true"),
        ]));

        assert_eq!(config.ai_service_endpoint, "https://example.cognitiveservices.azure.com/");
        assert_eq!(config.ai_service_key, "secret");
        assert_eq!(config.qa_project_name, "faq");
        assert_eq!(config.qa_deployment_name, "production");
        assert_eq!(config.reviews_folder, "data/reviews");
        assert!(config.verbose_logging);
    }

    #[test]
    fn test_missing_values_fall_back_without_error() {
        let config = Config::from_lookup(lookup_from(&[("VERBOSE_LOGGING", "not-a-bool")]));

        assert!(config.ai_service_endpoint.is_empty());
        assert!(config.ai_service_key.is_empty());
        assert!(config.qa_project_name.is_empty());
        assert_eq!(config.reviews_folder, "reviews");
        assert!(!config.verbose_logging);
    }

    #[test]
    fn test_debug_masks_key() {
        let config = Config::from_lookup(lookup_from(&[("AI_SERVICE_KEY", "super-secret")]));
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("***"));
    }
}
