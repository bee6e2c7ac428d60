/*!
 * Handler trait & 参数访问
 *
 * 所有入口点统一为可等待的 `Handler::invoke`，同步处理器在调用任务内直接执行。
 */

use std::future::Future;

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use thiserror::Error;

use crate::metadata::Value;
use crate::utils::error::AppResult;

/// 处理器返回值，错误原样传递给调用方
pub type HandlerResult = AppResult<()>;

#[async_trait]
pub trait Handler: Send + Sync {
    async fn invoke(&self, args: Arguments) -> HandlerResult;

    /// 处理器体是否可能挂起
    fn is_async(&self) -> bool {
        true
    }
}

/// 同步闭包适配器
pub struct SyncHandler<F> {
    func: F,
}

impl<F> SyncHandler<F>
where
    F: Fn(Arguments) -> HandlerResult + Send + Sync + 'static,
{
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

#[async_trait]
impl<F> Handler for SyncHandler<F>
where
    F: Fn(Arguments) -> HandlerResult + Send + Sync + 'static,
{
    async fn invoke(&self, args: Arguments) -> HandlerResult {
        (self.func)(args)
    }

    fn is_async(&self) -> bool {
        false
    }
}

type BoxedAsyncFn = Box<dyn Fn(Arguments) -> BoxFuture<'static, HandlerResult> + Send + Sync>;

/// 异步闭包适配器
pub struct AsyncHandler {
    func: BoxedAsyncFn,
}

impl AsyncHandler {
    pub fn new<F, Fut>(func: F) -> Self
    where
        F: Fn(Arguments) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        Self {
            func: Box::new(move |args| func(args).boxed()),
        }
    }
}

#[async_trait]
impl Handler for AsyncHandler {
    async fn invoke(&self, args: Arguments) -> HandlerResult {
        (self.func)(args).await
    }
}

/// 处理器内读取参数时的类型错误，属于处理器自身的失败
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Argument '{0}' is not declared by this entry point.")]
    Unknown(String),

    #[error("Argument '{0}' has no value.")]
    Absent(String),

    #[error("Argument '{name}' expected a {expected} value, got {found}.")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Argument index {0} is out of range.")]
    OutOfRange(usize),
}

/// 从绑定值中提取具体类型
pub trait FromValue: Sized {
    const EXPECTED: &'static str;

    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for String {
    const EXPECTED: &'static str = "string";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromValue for i64 {
    const EXPECTED: &'static str = "int";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl FromValue for i32 {
    const EXPECTED: &'static str = "int";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(i) => i32::try_from(*i).ok(),
            _ => None,
        }
    }
}

impl FromValue for u32 {
    const EXPECTED: &'static str = "int";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(i) => u32::try_from(*i).ok(),
            _ => None,
        }
    }
}

impl FromValue for f64 {
    const EXPECTED: &'static str = "float";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(*v),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }
}

impl FromValue for bool {
    const EXPECTED: &'static str = "bool";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromValue for char {
    const EXPECTED: &'static str = "char";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Char(c) => Some(*c),
            _ => None,
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Absent => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}

/// 按形参顺序排列的调用参数
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    entries: Vec<(String, Value)>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: Value) {
        self.entries.push((name.into(), value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, value)| value)
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    /// 按名称读取并转换参数
    ///
    /// 缺省值为 `Absent` 时只有 `Option<T>` 能读取成功。
    pub fn get<T: FromValue>(&self, name: &str) -> Result<T, ArgumentError> {
        let value = self
            .value(name)
            .ok_or_else(|| ArgumentError::Unknown(name.to_string()))?;
        convert(name, value)
    }

    /// 按位置读取并转换参数
    pub fn at<T: FromValue>(&self, index: usize) -> Result<T, ArgumentError> {
        let (name, value) = self
            .entries
            .get(index)
            .ok_or(ArgumentError::OutOfRange(index))?;
        convert(name, value)
    }
}

fn convert<T: FromValue>(name: &str, value: &Value) -> Result<T, ArgumentError> {
    T::from_value(value).ok_or_else(|| {
        if value.is_absent() {
            ArgumentError::Absent(name.to_string())
        } else {
            ArgumentError::TypeMismatch {
                name: name.to_string(),
                expected: T::EXPECTED,
                found: value.type_name(),
            }
        }
    })
}

impl FromIterator<(String, Value)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn sample() -> Arguments {
        let mut args = Arguments::new();
        args.push("left", Value::Float(3.0));
        args.push("repeat", Value::Int(3));
        args.push("label", Value::Absent);
        args
    }

    #[test]
    fn test_get_by_name() {
        let args = sample();
        assert_eq!(args.get::<f64>("left").unwrap(), 3.0);
        assert_eq!(args.get::<u32>("repeat").unwrap(), 3);
        assert_eq!(args.get::<Option<String>>("label").unwrap(), None);
        assert_eq!(args.at::<i64>(1).unwrap(), 3);
    }

    #[test]
    fn test_get_errors() {
        let args = sample();
        assert_eq!(
            args.get::<String>("label"),
            Err(ArgumentError::Absent("label".to_string()))
        );
        assert_eq!(
            args.get::<bool>("left"),
            Err(ArgumentError::TypeMismatch {
                name: "left".to_string(),
                expected: "bool",
                found: "float",
            })
        );
        assert_eq!(
            args.get::<f64>("missing"),
            Err(ArgumentError::Unknown("missing".to_string()))
        );
        assert_eq!(args.at::<f64>(9), Err(ArgumentError::OutOfRange(9)));
    }

    #[tokio::test]
    async fn test_sync_and_async_handlers() {
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        let sync = SyncHandler::new(move |_args| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });
        assert!(!sync.is_async());
        sync.invoke(Arguments::new()).await.unwrap();

        let counter = Arc::clone(&calls);
        let asynchronous = AsyncHandler::new(move |_args| {
            let counter = Arc::clone(&counter);
            async move {
                tokio::task::yield_now().await;
                counter.fetch_add(1, Ordering::SeqCst);
                HandlerResult::Ok(())
            }
        });
        assert!(asynchronous.is_async());
        asynchronous.invoke(Arguments::new()).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
