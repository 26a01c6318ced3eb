use ai_language_console::utils::logging;
use ai_language_console::{BatchAnalyzer, Config, ConsoleWriter, LanguageClient};
use anyhow::Result;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load();

    // 初始化日志
    logging::init(config.verbose_logging);
    logging::log_startup("文本分析", &config.ai_service_endpoint);

    let client = LanguageClient::new(&config);
    let mut writer = ConsoleWriter::new(std::io::stdout());

    // 唯一的错误边界：打印错误后正常退出，已输出的报告保留
    if let Err(e) = BatchAnalyzer::new(&config, &client).run(&mut writer).await {
        error!("❌ 分析中止: {}", e);
        writer.write_error(&e)?;
    }

    Ok(())
}
