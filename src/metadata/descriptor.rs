use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::value::{Value, ValueType};
use crate::handler::Handler;

/// 处理器分组描述符，命令路径的第一段
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupDescriptor {
    name: String,
    description: String,
}

impl GroupDescriptor {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// 一个形参的完整绑定信息：声明元数据 + 形参类型/默认值
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterBinding {
    name: String,
    description: String,
    optional: bool,
    value_type: ValueType,
    default: Option<Value>,
}

impl ParameterBinding {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        optional: bool,
        value_type: ValueType,
        default: Option<Value>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            optional,
            value_type,
            default,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn is_required(&self) -> bool {
        !self.optional
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// 仅可省略参数的默认值有意义
    pub fn default_value(&self) -> Option<&Value> {
        if self.optional {
            self.default.as_ref()
        } else {
            None
        }
    }
}

/// 入口点描述符，命令路径的第二段
#[derive(Clone)]
pub struct EntryPointDescriptor {
    name: String,
    description: String,
    handler: Arc<dyn Handler>,
    parameters: Vec<ParameterBinding>,
}

impl EntryPointDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: Arc<dyn Handler>,
        parameters: Vec<ParameterBinding>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            handler,
            parameters,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn handler(&self) -> &Arc<dyn Handler> {
        &self.handler
    }

    /// 按形参顺序排列
    pub fn parameters(&self) -> &[ParameterBinding] {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterBinding> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn required_parameters(&self) -> impl Iterator<Item = &ParameterBinding> {
        self.parameters.iter().filter(|p| p.is_required())
    }
}

impl fmt::Debug for EntryPointDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryPointDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("is_async", &self.handler.is_async())
            .field("parameters", &self.parameters)
            .finish()
    }
}
