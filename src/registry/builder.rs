/*!
 * RegistryBuilder - 注册表构建
 * 负责：收集分组注册函数、校验元数据、生成只读索引
 */

use std::collections::{HashMap, HashSet};

use tracing::{debug, info, warn};

use super::error::{MetadataError, MetadataResult};
use super::{GroupEntry, Registry};
use crate::metadata::{
    EntryPointDescriptor, EntryPointSpec, GroupDescriptor, GroupRegistration, GroupSpec,
    ParameterBinding, ParameterDecl,
};

enum GroupSource {
    Registration(GroupRegistration),
    Spec(GroupSpec),
}

/// 注册表构建器，按注册顺序处理分组
#[derive(Default)]
pub struct RegistryBuilder {
    sources: Vec<GroupSource>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加分组注册函数，build 时调用一次
    pub fn register(mut self, registration: GroupRegistration) -> Self {
        self.sources.push(GroupSource::Registration(registration));
        self
    }

    /// 直接添加分组声明（处理器需要捕获状态时使用）
    pub fn group(mut self, spec: GroupSpec) -> Self {
        self.sources.push(GroupSource::Spec(spec));
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn build(self) -> MetadataResult<Registry> {
        let mut groups: HashMap<String, GroupEntry> = HashMap::new();

        for source in self.sources {
            let spec = match source {
                GroupSource::Registration(registration) => registration(),
                GroupSource::Spec(spec) => spec,
            };
            add_group(&mut groups, spec)?;
        }

        let entry_count: usize = groups.values().map(|g| g.entry_points.len()).sum();
        info!(
            "注册表构建完成: {} 个分组, {} 个入口点",
            groups.len(),
            entry_count
        );

        Ok(Registry { groups })
    }
}

fn add_group(groups: &mut HashMap<String, GroupEntry>, spec: GroupSpec) -> MetadataResult<()> {
    let GroupSpec {
        name,
        description,
        entry_points,
    } = spec;

    // 同名分组合并入口点，分组描述以第一次注册为准
    let group = groups.entry(name.clone()).or_insert_with(|| {
        debug!("注册分组: {}", name);
        GroupEntry {
            descriptor: GroupDescriptor::new(name.clone(), description),
            entry_points: HashMap::new(),
        }
    });

    for entry_point in entry_points {
        let descriptor = build_entry_point(&name, entry_point)?;
        debug!(
            "注册入口点: {}/{} ({} 个参数)",
            name,
            descriptor.name(),
            descriptor.parameters().len()
        );
        if let Some(previous) = group
            .entry_points
            .insert(descriptor.name().to_string(), descriptor)
        {
            warn!("入口点 {}/{} 被后注册的同名入口点替换", name, previous.name());
        }
    }

    Ok(())
}

fn build_entry_point(group: &str, spec: EntryPointSpec) -> MetadataResult<EntryPointDescriptor> {
    let EntryPointSpec {
        name,
        description,
        parameters,
        formals,
        handler,
    } = spec;

    let mut declarations: HashMap<String, ParameterDecl> = HashMap::new();
    for decl in parameters {
        if declarations.contains_key(&decl.name) {
            return Err(MetadataError::DuplicateParameter {
                group: group.to_string(),
                entry_point: name,
                parameter: decl.name,
            });
        }
        declarations.insert(decl.name.clone(), decl);
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut bindings = Vec::with_capacity(formals.len());
    for formal in formals {
        if !seen.insert(formal.name.clone()) {
            return Err(MetadataError::DuplicateFormal {
                group: group.to_string(),
                entry_point: name,
                parameter: formal.name,
            });
        }

        let Some(decl) = declarations.remove(&formal.name) else {
            return Err(MetadataError::UndeclaredParameter {
                group: group.to_string(),
                entry_point: name,
                parameter: formal.name,
            });
        };

        if let Some(default) = &formal.default {
            if default.value_type() != Some(formal.value_type) {
                return Err(MetadataError::DefaultTypeMismatch {
                    group: group.to_string(),
                    entry_point: name,
                    parameter: formal.name,
                    expected: formal.value_type,
                });
            }
        }

        bindings.push(ParameterBinding::new(
            formal.name,
            decl.description,
            decl.optional,
            formal.value_type,
            formal.default,
        ));
    }

    for unused in declarations.keys() {
        warn!(
            "入口点 {}/{} 的参数声明 '{}' 没有对应的形参，已忽略",
            group, name, unused
        );
    }

    let Some(handler) = handler else {
        return Err(MetadataError::MissingHandler {
            group: group.to_string(),
            entry_point: name,
        });
    };

    Ok(EntryPointDescriptor::new(name, description, handler, bindings))
}
