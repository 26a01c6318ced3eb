//! 日志工具模块
//!
//! 日志统一写到标准错误，标准输出只留给报告和答案
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// `RUST_LOG` 优先；否则默认只显示 warn，详细模式下本 crate 输出 debug
pub fn init(verbose: bool) {
    let default_directive = if verbose {
        "warn,ai_language_console=debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `program`: 程序名称
/// - `endpoint`: 服务端点
pub fn log_startup(program: &str, endpoint: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 {} 启动 - {}", program, chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("🌐 服务端点: {}", if endpoint.is_empty() { "(未配置)" } else { endpoint });
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
