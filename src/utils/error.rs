/*!
 * 错误处理模块
 *
 * 处理器与入口程序统一使用 anyhow，模块内部的错误类型用 thiserror 定义。
 */

use anyhow::{anyhow, Result as AnyhowResult};

/// 统一的应用程序结果类型
pub type AppResult<T> = AnyhowResult<T>;

/// 统一的应用程序错误类型
pub type AppError = anyhow::Error;

/// 创建简单的应用程序错误
pub fn app_error(msg: impl Into<String>) -> AppError {
    anyhow!(msg.into())
}

/// 返回一个闭包，把任意错误转换为带上下文前缀的 AppError
pub fn app_error_with_context<T>(msg: &str) -> impl FnOnce(T) -> AppError + '_
where
    T: std::fmt::Display + std::fmt::Debug + Send + Sync + 'static,
{
    move |err| anyhow!("{}: {}", msg, err)
}

/// 快速创建错误并返回
#[macro_export]
macro_rules! app_bail {
    ($msg:literal $(,)?) => {
        return Err(anyhow::anyhow!($msg))
    };
    ($err:expr $(,)?) => {
        return Err(anyhow::anyhow!($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err(anyhow::anyhow!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fails() -> AppResult<()> {
        app_bail!("boom {}", 7);
    }

    #[test]
    fn test_error_helpers() {
        assert_eq!(app_error("plain").to_string(), "plain");

        let err = app_error_with_context::<std::num::ParseIntError>("parse repeat")(
            "x".parse::<i32>().unwrap_err(),
        );
        assert!(err.to_string().starts_with("parse repeat: "));

        assert_eq!(fails().unwrap_err().to_string(), "boom 7");
    }
}
