// 参数绑定：把命令行字符串转换为按形参顺序排列的调用参数

use std::collections::HashMap;

use tracing::debug;

use crate::handler::Arguments;
use crate::metadata::{ParameterBinding, Value};

/// 按声明顺序生成调用参数，不会失败
///
/// - 提供了值：按形参类型转换，转换失败绑定为 `Value::Absent`
/// - 未提供且可省略、有默认值：使用默认值
/// - 其他情况：`Value::Absent`
pub fn bind(params: &[ParameterBinding], supplied: &HashMap<String, String>) -> Arguments {
    params
        .iter()
        .map(|param| {
            let value = match supplied.get(param.name()) {
                Some(raw) => coerce(param, raw),
                None => param.default_value().cloned().unwrap_or(Value::Absent),
            };
            (param.name().to_string(), value)
        })
        .collect()
}

/// 转换失败不作为错误上报，交由处理器在读取参数时处理
pub fn coerce(param: &ParameterBinding, raw: &str) -> Value {
    match param.value_type().parse(raw) {
        Some(value) => value,
        None => {
            debug!(
                "参数 '{}' 的值 '{}' 无法转换为 {}，按未设置处理",
                param.name(),
                raw,
                param.value_type()
            );
            Value::Absent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::ValueType;

    fn params() -> Vec<ParameterBinding> {
        vec![
            ParameterBinding::new("text", "Text to output", false, ValueType::String, None),
            ParameterBinding::new(
                "repeat",
                "How many times",
                true,
                ValueType::Int,
                Some(Value::Int(3)),
            ),
            ParameterBinding::new("scale", "Optional, no default", true, ValueType::Float, None),
        ]
    }

    fn supplied(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_and_absent() {
        let args = bind(&params(), &supplied(&[("text", "hi")]));
        let values: Vec<&Value> = args.values().collect();
        assert_eq!(
            values,
            vec![&Value::Str("hi".to_string()), &Value::Int(3), &Value::Absent]
        );
    }

    #[test]
    fn test_supplied_values_are_coerced() {
        let args = bind(
            &params(),
            &supplied(&[("scale", "0.5"), ("repeat", "7"), ("text", "x")]),
        );
        let names: Vec<&str> = args.names().collect();
        assert_eq!(names, vec!["text", "repeat", "scale"]);
        assert_eq!(args.value("repeat"), Some(&Value::Int(7)));
        assert_eq!(args.value("scale"), Some(&Value::Float(0.5)));
    }

    #[test]
    fn test_coercion_failure_binds_absent() {
        // 提供了无法解析的值时不使用默认值
        let args = bind(&params(), &supplied(&[("text", "x"), ("repeat", "many")]));
        assert_eq!(args.value("repeat"), Some(&Value::Absent));
    }

    #[test]
    fn test_required_default_is_ignored() {
        let params = vec![ParameterBinding::new(
            "left",
            "",
            false,
            ValueType::Float,
            Some(Value::Float(1.0)),
        )];
        let args = bind(&params, &HashMap::new());
        assert_eq!(args.value("left"), Some(&Value::Absent));
    }

    #[test]
    fn test_unknown_supplied_names_are_ignored() {
        let args = bind(&params(), &supplied(&[("text", "x"), ("other", "1")]));
        assert_eq!(args.len(), 3);
        assert_eq!(args.value("other"), None);
    }
}
