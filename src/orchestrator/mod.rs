//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_analyzer` - 批量文档分析
//! - 枚举文件夹中的文档，逐个读取、分析、打印
//! - 任一文档出错即停止处理剩余文档
//!
//! ### `qna_console` - 交互式问答
//! - 读一行问题 → 查询知识库 → 打印候选答案，直到输入 `quit`
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator (驱动循环)
//!     ↓
//! workflow (DocumentFlow / SessionState)
//!     ↓
//! clients (LanguageClient) + services (ConsoleWriter)
//! ```

pub mod batch_analyzer;
pub mod qna_console;

pub use batch_analyzer::{BatchAnalyzer, BatchStats};
pub use qna_console::{QnaConsole, SessionStats};
