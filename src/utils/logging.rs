// 日志系统模块

use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统
///
/// RUST_LOG 优先，否则使用传入的默认过滤规则。日志写入 stderr，
/// 不干扰处理器的标准输出。
pub fn init_logging(default_filter: &str) -> Result<(), String> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .try_init()
        .map_err(|e| format!("Log system initialization failed: {e}"))?;

    debug!("日志系统初始化完成");
    Ok(())
}
