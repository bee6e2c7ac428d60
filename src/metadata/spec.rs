/*!
 * 注册声明
 *
 * 每个处理器分组通过一个注册函数返回 `GroupSpec`，
 * RegistryBuilder 在启动时统一校验并转换为只读描述符。
 */

use std::future::Future;
use std::sync::Arc;

use super::value::{Value, ValueType};
use crate::handler::{Arguments, AsyncHandler, Handler, HandlerResult, SyncHandler};

/// 分组注册函数
pub type GroupRegistration = fn() -> GroupSpec;

/// 参数声明（名称、说明、是否可省略）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDecl {
    pub name: String,
    pub description: String,
    /// 为 false 时命令行必须提供该参数
    pub optional: bool,
}

impl ParameterDecl {
    /// 默认可省略
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            optional: true,
        }
    }

    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, description).with_optional(false)
    }

    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(name, description)
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }
}

/// 处理器的形参：名称、类型与可选的默认值
#[derive(Debug, Clone, PartialEq)]
pub struct FormalParameter {
    pub name: String,
    pub value_type: ValueType,
    pub default: Option<Value>,
}

impl FormalParameter {
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// 入口点声明
#[derive(Clone)]
pub struct EntryPointSpec {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ParameterDecl>,
    pub formals: Vec<FormalParameter>,
    pub handler: Option<Arc<dyn Handler>>,
}

impl EntryPointSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
            formals: Vec::new(),
            handler: None,
        }
    }

    pub fn parameter(mut self, decl: ParameterDecl) -> Self {
        self.parameters.push(decl);
        self
    }

    pub fn formal(mut self, formal: FormalParameter) -> Self {
        self.formals.push(formal);
        self
    }

    pub fn handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handler = Some(handler);
        self
    }

    /// 同步处理器，在调度任务内直接执行
    pub fn sync_handler<F>(self, func: F) -> Self
    where
        F: Fn(Arguments) -> HandlerResult + Send + Sync + 'static,
    {
        self.handler(Arc::new(SyncHandler::new(func)))
    }

    pub fn async_handler<F, Fut>(self, func: F) -> Self
    where
        F: Fn(Arguments) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        self.handler(Arc::new(AsyncHandler::new(func)))
    }
}

impl std::fmt::Debug for EntryPointSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryPointSpec")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .field("formals", &self.formals)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

/// 处理器分组声明
#[derive(Debug, Clone)]
pub struct GroupSpec {
    pub name: String,
    pub description: String,
    pub entry_points: Vec<EntryPointSpec>,
}

impl GroupSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            entry_points: Vec::new(),
        }
    }

    pub fn entry_point(mut self, entry_point: EntryPointSpec) -> Self {
        self.entry_points.push(entry_point);
        self
    }
}
