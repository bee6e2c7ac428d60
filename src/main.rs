//! cmdroute 入口程序，注册示例分组用于手动测试

use std::process::ExitCode;

use cmdroute::utils::{app_error, init_logging, AppResult};
use cmdroute::{demo, registry, DispatchConfig, DispatchError, Dispatcher, Registry};

#[tokio::main]
async fn main() -> AppResult<ExitCode> {
    let config = DispatchConfig::from_env();
    config
        .validate()
        .map_err(|e| app_error(format!("Invalid configuration: {e}")))?;

    // 日志初始化失败不影响命令执行
    if let Err(e) = init_logging(&config.log_filter) {
        eprintln!("{e}");
    }

    let registry = match registry::init_global(Registry::builder().register(demo::register)) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("\nError: {e}\n");
            return Ok(exit_code(config.parser_error_exit_code));
        }
    };

    let dispatcher = Dispatcher::new(registry);
    match dispatcher.run(std::env::args().skip(1)).await {
        Ok(outcome) => Ok(exit_code(outcome.code(&config))),
        Err(DispatchError::Parser(e)) => {
            eprintln!("\nError: {e}\n");
            Ok(exit_code(config.parser_error_exit_code))
        }
        // 处理器错误原样交给进程边界
        Err(DispatchError::Handler(e)) => Err(e.into_inner()),
    }
}

fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map(ExitCode::from).unwrap_or(ExitCode::FAILURE)
}
