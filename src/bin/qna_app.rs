use ai_language_console::utils::logging;
use ai_language_console::{Config, ConsoleWriter, LanguageClient, QnaConsole};
use anyhow::Result;
use tokio::io::BufReader;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load();

    // 初始化日志
    logging::init(config.verbose_logging);
    logging::log_startup("知识库问答", &config.ai_service_endpoint);

    let client = LanguageClient::new(&config);
    let mut input = BufReader::new(tokio::io::stdin());
    let mut writer = ConsoleWriter::new(std::io::stdout());

    // 唯一的错误边界：任何错误都结束会话
    if let Err(e) = QnaConsole::new(&config, &client).run(&mut input, &mut writer).await {
        error!("❌ 会话中止: {}", e);
        writer.write_error(&e)?;
    }

    Ok(())
}
