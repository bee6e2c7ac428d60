/*!
 * 处理器注册表
 *
 * 分组名 -> 入口点名 -> (处理器, 有序参数绑定)。构建一次，之后只读，
 * 多个调度可以无锁并发查询。
 */

pub mod builder;
pub mod error;

pub use builder::RegistryBuilder;
pub use error::{MetadataError, MetadataResult};

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::metadata::{EntryPointDescriptor, GroupDescriptor, Value, ValueType};

/// 一个分组及其入口点
#[derive(Debug)]
pub struct GroupEntry {
    pub(crate) descriptor: GroupDescriptor,
    pub(crate) entry_points: HashMap<String, EntryPointDescriptor>,
}

impl GroupEntry {
    pub fn descriptor(&self) -> &GroupDescriptor {
        &self.descriptor
    }

    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    pub fn entry_point(&self, name: &str) -> Option<&EntryPointDescriptor> {
        self.entry_points.get(name)
    }

    /// 按名称排序
    pub fn entry_points(&self) -> Vec<&EntryPointDescriptor> {
        let mut entries: Vec<&EntryPointDescriptor> = self.entry_points.values().collect();
        entries.sort_by(|a, b| a.name().cmp(b.name()));
        entries
    }

    pub fn entry_point_names(&self) -> Vec<&str> {
        self.entry_points().into_iter().map(|e| e.name()).collect()
    }
}

#[derive(Debug, Default)]
pub struct Registry {
    pub(crate) groups: HashMap<String, GroupEntry>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn group(&self, name: &str) -> Option<&GroupEntry> {
        self.groups.get(name)
    }

    pub fn entry_point(&self, group: &str, entry_point: &str) -> Option<&EntryPointDescriptor> {
        self.group(group)?.entry_point(entry_point)
    }

    /// 按名称排序
    pub fn groups(&self) -> Vec<&GroupEntry> {
        let mut groups: Vec<&GroupEntry> = self.groups.values().collect();
        groups.sort_by(|a, b| a.name().cmp(b.name()));
        groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// 可序列化的元数据概览，供调用方自行渲染帮助信息
    pub fn summary(&self) -> Vec<GroupSummary> {
        self.groups()
            .into_iter()
            .map(|group| GroupSummary {
                name: group.name().to_string(),
                description: group.descriptor().description().to_string(),
                entry_points: group
                    .entry_points()
                    .into_iter()
                    .map(|entry| EntryPointSummary {
                        name: entry.name().to_string(),
                        description: entry.description().to_string(),
                        is_async: entry.handler().is_async(),
                        parameters: entry
                            .parameters()
                            .iter()
                            .map(|p| ParameterSummary {
                                name: p.name().to_string(),
                                description: p.description().to_string(),
                                optional: p.is_optional(),
                                value_type: p.value_type(),
                                default: p.default_value().cloned(),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub name: String,
    pub description: String,
    pub entry_points: Vec<EntryPointSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPointSummary {
    pub name: String,
    pub description: String,
    pub is_async: bool,
    pub parameters: Vec<ParameterSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSummary {
    pub name: String,
    pub description: String,
    pub optional: bool,
    pub value_type: ValueType,
    pub default: Option<Value>,
}

/// 进程级注册表
static GLOBAL_REGISTRY: OnceCell<Arc<Registry>> = OnceCell::new();

/// 构建并返回进程级注册表
///
/// 只有第一次调用会执行构建，后续调用直接返回同一个实例，传入的 builder 被丢弃。
/// 并发调用会等待首次构建完成。构建失败时不保存任何状态，可以再次尝试。
pub fn init_global(builder: RegistryBuilder) -> MetadataResult<Arc<Registry>> {
    GLOBAL_REGISTRY
        .get_or_try_init(|| builder.build().map(Arc::new))
        .map(Arc::clone)
}

/// 已初始化的进程级注册表
pub fn global() -> Option<Arc<Registry>> {
    GLOBAL_REGISTRY.get().map(Arc::clone)
}

pub fn is_global_initialized() -> bool {
    GLOBAL_REGISTRY.get().is_some()
}
