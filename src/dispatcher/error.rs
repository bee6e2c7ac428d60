/*!
 * 调度错误
 *
 * 区分命令解析失败（用户输入问题）与处理器自身的失败（业务逻辑问题）。
 */

use std::fmt;

use thiserror::Error;

use crate::parser::CommandParserError;
use crate::utils::error::AppError;

pub type DispatchResult<T> = Result<T, DispatchError>;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Parser(#[from] CommandParserError),

    #[error(transparent)]
    Handler(#[from] HandlerError),
}

impl DispatchError {
    pub fn is_parser_error(&self) -> bool {
        matches!(self, DispatchError::Parser(_))
    }

    pub fn is_handler_error(&self) -> bool {
        matches!(self, DispatchError::Handler(_))
    }

    pub fn as_parser_error(&self) -> Option<&CommandParserError> {
        match self {
            DispatchError::Parser(e) => Some(e),
            DispatchError::Handler(_) => None,
        }
    }

    pub fn as_handler_error(&self) -> Option<&HandlerError> {
        match self {
            DispatchError::Handler(e) => Some(e),
            DispatchError::Parser(_) => None,
        }
    }
}

/// 处理器抛出的原始错误
///
/// Display 与错误链都是处理器原始错误本身，不附加任何包装信息；
/// 可以通过 `downcast_ref` / `into_inner` 取回原始类型。
pub struct HandlerError {
    group: String,
    entry_point: String,
    source: AppError,
}

impl HandlerError {
    pub fn new(group: impl Into<String>, entry_point: impl Into<String>, source: AppError) -> Self {
        Self {
            group: group.into(),
            entry_point: entry_point.into(),
            source,
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    pub fn inner(&self) -> &AppError {
        &self.source
    }

    pub fn into_inner(self) -> AppError {
        self.source
    }

    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.source.downcast_ref::<E>()
    }

    pub fn is<E>(&self) -> bool
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.source.is::<E>()
    }
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.source, f)
    }
}

impl fmt::Debug for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerError")
            .field("group", &self.group)
            .field("entry_point", &self.entry_point)
            .field("source", &self.source)
            .finish()
    }
}

impl std::error::Error for HandlerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.source()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::app_error;

    #[derive(Debug, Error)]
    #[error("insufficient funds: {0}")]
    struct InsufficientFunds(u32);

    #[test]
    fn test_handler_error_keeps_original() {
        let err = HandlerError::new("bank", "pay", AppError::new(InsufficientFunds(5)));
        assert_eq!(err.to_string(), "insufficient funds: 5");
        assert!(err.is::<InsufficientFunds>());
        assert_eq!(err.downcast_ref::<InsufficientFunds>().unwrap().0, 5);
        assert_eq!(err.group(), "bank");
        assert_eq!(err.entry_point(), "pay");

        let dispatch: DispatchError = err.into();
        assert!(dispatch.is_handler_error());
        assert_eq!(dispatch.to_string(), "insufficient funds: 5");
    }

    #[test]
    fn test_parser_error_is_distinguishable() {
        let dispatch: DispatchError = CommandParserError::UnknownGroup {
            group: "bogus".to_string(),
        }
        .into();
        assert!(dispatch.is_parser_error());
        assert!(dispatch.as_handler_error().is_none());
        assert_eq!(dispatch.to_string(), "Controller 'bogus' is unknown.");

        let handler: DispatchError = HandlerError::new("a", "b", app_error("plain")).into();
        assert!(handler.as_parser_error().is_none());
    }
}
