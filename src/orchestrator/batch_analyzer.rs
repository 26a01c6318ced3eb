//! 批量文档分析 - 编排层
//!
//! 1. 枚举文件夹中的条目（保持文件系统顺序）
//! 2. 逐个读取文档并执行完整分析流程
//! 3. 每个文档分析完立即打印报告
//!
//! 全程串行。任何一个文档出错都会中止剩余文档，错误交给调用方处理，
//! 已经打印的报告保留在输出中。

use std::io::Write;

use tracing::{info, warn};

use crate::clients::TextAnalyzer;
use crate::config::Config;
use crate::error::AppResult;
use crate::models::{list_documents, load_document};
use crate::services::ConsoleWriter;
use crate::workflow::DocumentFlow;

/// 批量分析器
pub struct BatchAnalyzer<'a, A: TextAnalyzer + ?Sized> {
    config: &'a Config,
    analyzer: &'a A,
}

/// 处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    pub processed: usize,
    pub total: usize,
}

impl<'a, A: TextAnalyzer + ?Sized> BatchAnalyzer<'a, A> {
    pub fn new(config: &'a Config, analyzer: &'a A) -> Self {
        Self { config, analyzer }
    }

    /// 运行批量分析
    pub async fn run<W: Write>(&self, writer: &mut ConsoleWriter<W>) -> AppResult<BatchStats> {
        let folder = &self.config.reviews_folder;
        info!("📁 正在扫描目录: {}", folder);

        let paths = list_documents(folder).await?;
        let mut stats = BatchStats {
            total: paths.len(),
            ..Default::default()
        };

        if paths.is_empty() {
            warn!("⚠️ 目录 {} 中没有待分析的文件", folder);
            return Ok(stats);
        }

        log_documents_found(stats.total);

        let flow = DocumentFlow::new(self.analyzer);

        for (index, path) in paths.iter().enumerate() {
            let document = load_document(path).await?;
            log_document_start(index + 1, stats.total, &document.file_name);

            let report = flow.analyze(&document).await?;
            writer.write_report(&report)?;

            stats.processed += 1;
        }

        log_complete(&stats);

        Ok(stats)
    }
}

// ========== 日志辅助函数 ==========

fn log_documents_found(total: usize) {
    info!("✓ 找到 {} 个待分析的文件", total);
}

fn log_document_start(index: usize, total: usize, file_name: &str) {
    info!("[文档 {}/{}] 开始分析: {}", index, total, file_name);
}

fn log_complete(stats: &BatchStats) {
    info!("{}", "─".repeat(60));
    info!("✅ 分析完成: {}/{}", stats.processed, stats.total);
    info!("{}", "─".repeat(60));
}
