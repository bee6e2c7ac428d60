use thiserror::Error;

pub type CommandParserResult<T> = Result<T, CommandParserError>;

/// 由用户输入引起的命令错误，面向终端用户展示
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandParserError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Controller '{group}' is unknown.")]
    UnknownGroup { group: String },

    #[error("Controller '{group}' has no entry point '{entry_point}'.")]
    UnknownEntryPoint { group: String, entry_point: String },

    #[error("Missing parameter '{parameter}'.")]
    MissingParameter {
        group: String,
        entry_point: String,
        parameter: String,
    },
}
