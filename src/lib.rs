//! cmdroute 命令调度框架
//!
//! 根据声明式注册的处理器分组（group）与入口点（entry point）解析命令行参数，
//! 绑定并转换参数类型后调用对应的处理器。
//! 主要组成：
//! - 元数据模型与注册表构建
//! - 命令行解析与参数绑定
//! - 调度与错误区分（解析错误 / 处理器错误）

// 模块声明
pub mod binder; // 参数绑定与类型转换
pub mod config; // 调度配置
pub mod demo; // 开发用示例分组
pub mod dispatcher; // 命令调度
pub mod handler; // 处理器抽象与参数访问
pub mod metadata; // 描述符与注册声明
pub mod parser; // 命令行解析
pub mod registry; // 处理器注册表
pub mod utils; // 日志与错误工具

pub use config::DispatchConfig;
pub use dispatcher::{DispatchError, DispatchResult, Dispatcher, ExitOutcome, HandlerError};
pub use handler::{
    ArgumentError, Arguments, AsyncHandler, FromValue, Handler, HandlerResult, SyncHandler,
};
pub use metadata::{
    EntryPointDescriptor, EntryPointSpec, FormalParameter, GroupDescriptor, GroupRegistration,
    GroupSpec, ParameterBinding, ParameterDecl, Value, ValueType,
};
pub use parser::{CommandLineParser, CommandParserError, ParsedCommand};
pub use registry::{MetadataError, Registry, RegistryBuilder};
