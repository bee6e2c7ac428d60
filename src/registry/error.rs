use thiserror::Error;

use crate::metadata::ValueType;

pub type MetadataResult<T> = Result<T, MetadataError>;

/// 注册表构建阶段的元数据错误，出现在任何调度之前
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MetadataError {
    #[error(
        "In group '{group}' entry point '{entry_point}' there are 2 parameter declarations with the same name: '{parameter}'."
    )]
    DuplicateParameter {
        group: String,
        entry_point: String,
        parameter: String,
    },

    #[error("In group '{group}' entry point '{entry_point}' the parameter '{parameter}' has no declaration.")]
    UndeclaredParameter {
        group: String,
        entry_point: String,
        parameter: String,
    },

    #[error("In group '{group}' entry point '{entry_point}' the formal parameter '{parameter}' is listed twice.")]
    DuplicateFormal {
        group: String,
        entry_point: String,
        parameter: String,
    },

    #[error(
        "In group '{group}' entry point '{entry_point}' the default of parameter '{parameter}' is not a {expected} value."
    )]
    DefaultTypeMismatch {
        group: String,
        entry_point: String,
        parameter: String,
        expected: ValueType,
    },

    #[error("The entry point {group}/{entry_point} has no handler.")]
    MissingHandler { group: String, entry_point: String },
}

impl MetadataError {
    pub fn group(&self) -> &str {
        match self {
            MetadataError::DuplicateParameter { group, .. }
            | MetadataError::UndeclaredParameter { group, .. }
            | MetadataError::DuplicateFormal { group, .. }
            | MetadataError::DefaultTypeMismatch { group, .. }
            | MetadataError::MissingHandler { group, .. } => group,
        }
    }
}
