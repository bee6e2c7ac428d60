// 元数据模型：注册声明、只读描述符与参数值

pub mod descriptor;
pub mod spec;
pub mod value;

pub use descriptor::{EntryPointDescriptor, GroupDescriptor, ParameterBinding};
pub use spec::{EntryPointSpec, FormalParameter, GroupRegistration, GroupSpec, ParameterDecl};
pub use value::{Value, ValueType};
