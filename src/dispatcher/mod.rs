/*!
 * Dispatcher - 命令调度
 *
 * Start → Parsed → Resolved → Validated → Bound → Invoked
 *   → {Succeeded | HandlerFailed | ParserFailed}
 *
 * 解析失败只会出现在 Parsed / Resolved / Validated 阶段，处理器失败只会出现在 Invoked 之后。
 */

pub mod error;

pub use error::{DispatchError, DispatchResult, HandlerError};

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info};

use crate::binder;
use crate::config::DispatchConfig;
use crate::handler::Arguments;
use crate::parser::{CommandLineParser, CommandParserError, ParsedCommand};
use crate::registry::Registry;

/// 调度的终止状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    Success,
    /// 没有可执行的命令，未调用任何处理器
    ShowHelp,
}

impl ExitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExitOutcome::Success)
    }

    /// 成功为 0，帮助模式使用配置的退出码
    pub fn code(&self, config: &DispatchConfig) -> i32 {
        match self {
            ExitOutcome::Success => 0,
            ExitOutcome::ShowHelp => config.help_exit_code,
        }
    }
}

/// 命令调度器，持有只读注册表，可被多个任务共享
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<Registry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// 解析参数列表（不含程序名）并调度
    pub async fn run<I, S>(&self, args: I) -> DispatchResult<ExitOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = CommandLineParser::parse(args)?;
        self.dispatch(&parsed).await
    }

    pub async fn dispatch(&self, parsed: &ParsedCommand) -> DispatchResult<ExitOutcome> {
        if parsed.show_help {
            return Ok(ExitOutcome::ShowHelp);
        }

        let group = self.registry.group(&parsed.group_name).ok_or_else(|| {
            CommandParserError::UnknownGroup {
                group: parsed.group_name.clone(),
            }
        })?;

        let entry_point = group.entry_point(&parsed.entry_point_name).ok_or_else(|| {
            CommandParserError::UnknownEntryPoint {
                group: parsed.group_name.clone(),
                entry_point: parsed.entry_point_name.clone(),
            }
        })?;

        if let Some(missing) = entry_point
            .required_parameters()
            .find(|p| !parsed.has_param(p.name()))
        {
            return Err(CommandParserError::MissingParameter {
                group: parsed.group_name.clone(),
                entry_point: parsed.entry_point_name.clone(),
                parameter: missing.name().to_string(),
            }
            .into());
        }

        let args = if entry_point.parameters().is_empty() {
            Arguments::new()
        } else {
            binder::bind(entry_point.parameters(), &parsed.named_params)
        };
        debug!("调用参数: {:?}", args);

        let command = parsed.command_path();
        info!("执行入口点: {}", command);
        let start = Instant::now();

        match entry_point.handler().invoke(args).await {
            Ok(()) => {
                debug!(
                    "入口点 {} 执行完成, 耗时 {}ms",
                    command,
                    start.elapsed().as_millis()
                );
                Ok(ExitOutcome::Success)
            }
            Err(e) => {
                error!("入口点 {} 执行失败: {}", command, e);
                Err(HandlerError::new(
                    parsed.group_name.clone(),
                    parsed.entry_point_name.clone(),
                    e,
                )
                .into())
            }
        }
    }
}
