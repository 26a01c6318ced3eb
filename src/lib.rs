//! # AI Language Console
//!
//! 两个调用远程语言服务的命令行程序：
//!
//! - `analyze_text`：批量分析 `reviews` 目录中的文本文件（语言、情感、关键短语、实体、链接实体）
//! - `qna_app`：交互式知识库问答，输入 `quit` 退出
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - `LanguageClient` 持有端点和密钥，每个操作一次 HTTP 请求
//! - `api/` - 服务的请求/响应格式，只在客户端内部使用
//!
//! ### ② 业务能力层（Services）
//! - `ConsoleWriter` - 打印报告、答案和错误
//!
//! ### ③ 流程层（Workflow）
//! - `DocumentFlow` - 单个文档的五步分析
//! - `SessionState` - 问答会话的两状态状态机
//!
//! ### ④ 编排层（Orchestration）
//! - `BatchAnalyzer` - 遍历目录
//! - `QnaConsole` - 问答循环
//!
//! ## 模块结构

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{KnowledgeBase, LanguageClient, TextAnalyzer};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{AnalysisReport, AnswerCandidate, Document};
pub use orchestrator::{BatchAnalyzer, BatchStats, QnaConsole, SessionStats};
pub use services::ConsoleWriter;
pub use workflow::{DocumentFlow, SessionState, Transition};
