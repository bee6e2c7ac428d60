/*!
 * 配置模块
 *
 * 只有进程内配置：默认值 + 环境变量覆盖，不读写配置文件。
 */

pub mod dispatch;

pub use dispatch::DispatchConfig;
