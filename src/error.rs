use thiserror::Error;

/// 应用程序错误类型
///
/// 内部按类别区分，只在顶层驱动处合并为一条打印出来的错误信息
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// 远程服务调用错误
    #[error(transparent)]
    Api(#[from] ApiError),
    /// 文件操作错误
    #[error(transparent)]
    File(#[from] FileError),
    /// 控制台读写错误
    #[error("控制台读写失败: {0}")]
    Io(#[from] std::io::Error),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 服务端点无法解析为 URL（包括未配置的情况）
    #[error("无效的服务端点 '{value}': {reason}")]
    InvalidEndpoint { value: String, reason: String },
}

/// 远程服务调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 认证或授权被拒绝
    #[error("API认证失败 ({endpoint}): status={status}, message={message:?}")]
    Unauthorized {
        endpoint: String,
        status: u16,
        message: Option<String>,
    },
    /// 请求频率限制
    #[error("API请求频率限制 ({endpoint}), 建议等待: {retry_after:?}秒")]
    RateLimited {
        endpoint: String,
        retry_after: Option<u64>,
    },
    /// API 返回错误响应
    #[error("API返回错误响应 ({endpoint}): status={status}, code={code:?}, message={message:?}")]
    BadResponse {
        endpoint: String,
        status: u16,
        code: Option<String>,
        message: Option<String>,
    },
    /// JSON 解析失败
    #[error("JSON解析失败 ({endpoint}): {source}")]
    JsonParseFailed {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
    /// 响应中没有对应文档的结果
    #[error("API返回空结果: {endpoint}")]
    EmptyResponse { endpoint: String },
    /// 服务拒绝处理单个文档
    #[error("文档被服务拒绝 ({endpoint}): code={code}, message={message}")]
    DocumentRejected {
        endpoint: String,
        code: String,
        message: String,
    },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 目录不存在
    #[error("目录不存在: {path}")]
    DirectoryNotFound { path: String },
    /// 读取目录失败
    #[error("无法读取目录 ({path}): {source}")]
    ReadDirFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 读取文件失败（子目录也会落到这里）
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 文件内容不是合法的 UTF-8
    #[error("文件不是有效的 UTF-8 文本: {path}")]
    NotUtf8 { path: String },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建无效端点错误
    pub fn invalid_endpoint(value: impl Into<String>, reason: impl ToString) -> Self {
        AppError::Config(ConfigError::InvalidEndpoint {
            value: value.into(),
            reason: reason.to_string(),
        })
    }

    /// 创建API请求失败错误
    pub fn api_request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
