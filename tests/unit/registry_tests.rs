//! 注册表构建测试

#[cfg(test)]
mod tests {
    use cmdroute::registry::{self, GroupSummary};
    use cmdroute::{
        demo, EntryPointSpec, FormalParameter, GroupSpec, MetadataError, ParameterDecl, Registry,
        Value, ValueType,
    };

    fn broken_group() -> GroupSpec {
        GroupSpec::new("broken", "Duplicate declaration").entry_point(
            EntryPointSpec::new("mult", "Multiply two numbers")
                .parameter(ParameterDecl::required("left", "First number"))
                .parameter(ParameterDecl::required("left", "First number again"))
                .formal(FormalParameter::new("left", ValueType::Float))
                .sync_handler(|_args| Ok(())),
        )
    }

    #[test]
    fn test_demo_registry_lookup() {
        let registry = Registry::builder()
            .register(demo::register)
            .build()
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.entry_point("test", "mult").is_some());
        assert!(registry.entry_point("test", "out").is_some());
        assert!(registry.entry_point("Test", "mult").is_none());
        assert!(registry.entry_point("test", "Mult").is_none());
        assert!(registry.group("bogus").is_none());
    }

    #[test]
    fn test_duplicate_declaration_fails_before_dispatch() {
        let err = Registry::builder()
            .register(demo::register)
            .group(broken_group())
            .build()
            .unwrap_err();

        assert_eq!(err.group(), "broken");
        assert!(matches!(err, MetadataError::DuplicateParameter { .. }));
        assert_eq!(
            err.to_string(),
            "In group 'broken' entry point 'mult' there are 2 parameter declarations with the same name: 'left'."
        );
    }

    #[test]
    fn test_summary_is_sorted_and_serializable() {
        let registry = Registry::builder()
            .group(
                GroupSpec::new("zeta", "Last group")
                    .entry_point(EntryPointSpec::new("ping", "").sync_handler(|_args| Ok(()))),
            )
            .register(demo::register)
            .build()
            .unwrap();

        let summary: Vec<GroupSummary> = registry.summary();
        let names: Vec<&str> = summary.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["test", "zeta"]);

        let out = &summary[0].entry_points[1];
        assert_eq!(out.name, "out");
        assert!(out.is_async);
        assert_eq!(out.parameters[1].default, Some(Value::Int(3)));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json[0]["entryPoints"][0]["name"], "mult");
        assert_eq!(json[0]["entryPoints"][0]["parameters"][0]["valueType"], "float");
        assert_eq!(json[0]["entryPoints"][1]["parameters"][0]["optional"], false);
    }

    #[test]
    fn test_global_registry_is_built_once() {
        // 失败的构建不会占用全局实例
        assert!(registry::init_global(Registry::builder().group(broken_group())).is_err());
        assert!(!registry::is_global_initialized());

        let first = registry::init_global(Registry::builder().register(demo::register)).unwrap();
        // 第二次调用返回同一实例，传入的 builder 被忽略
        let second = registry::init_global(Registry::builder().group(broken_group())).unwrap();

        assert!(std::sync::Arc::ptr_eq(&first, &second));
        assert!(second.group("broken").is_none());
        assert!(std::sync::Arc::ptr_eq(&first, &registry::global().unwrap()));
    }
}
