use tracing::{debug, warn};

use crate::utils::error::app_error_with_context;

pub const ENV_LOG_FILTER: &str = "CMDROUTE_LOG";
pub const ENV_HELP_EXIT_CODE: &str = "CMDROUTE_HELP_EXIT_CODE";
pub const ENV_PARSER_ERROR_EXIT_CODE: &str = "CMDROUTE_PARSER_ERROR_EXIT_CODE";

/// 调度配置：退出码映射与默认日志级别
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    /// 进入帮助模式时的退出码
    pub help_exit_code: i32,
    /// 命令解析失败时的退出码
    pub parser_error_exit_code: i32,
    /// RUST_LOG 未设置时使用的过滤规则
    pub log_filter: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            help_exit_code: 1,
            parser_error_exit_code: 1,
            log_filter: "info".to_string(),
        }
    }
}

impl DispatchConfig {
    /// 默认配置 + 环境变量覆盖
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.override_from_env();
        config
    }

    /// 从环境变量覆盖配置，无法解析的值保持原样
    pub fn override_from_env(&mut self) {
        self.override_with(|key| std::env::var(key).ok());
    }

    pub(crate) fn override_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(filter) = lookup(ENV_LOG_FILTER) {
            if !filter.trim().is_empty() {
                debug!("从环境变量设置 log_filter = {}", filter);
                self.log_filter = filter;
            }
        }

        for (key, slot) in [
            (ENV_HELP_EXIT_CODE, &mut self.help_exit_code),
            (ENV_PARSER_ERROR_EXIT_CODE, &mut self.parser_error_exit_code),
        ] {
            let Some(raw) = lookup(key) else {
                continue;
            };
            match raw
                .trim()
                .parse::<i32>()
                .map_err(app_error_with_context(key))
            {
                Ok(code) => {
                    debug!("从环境变量设置 {} = {}", key, code);
                    *slot = code;
                }
                Err(e) => warn!("忽略无效的退出码配置: {}", e),
            }
        }
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=255).contains(&self.help_exit_code) {
            return Err(format!(
                "help_exit_code 超出范围 1..=255: {}",
                self.help_exit_code
            ));
        }
        if !(1..=255).contains(&self.parser_error_exit_code) {
            return Err(format!(
                "parser_error_exit_code 超出范围 1..=255: {}",
                self.parser_error_exit_code
            ));
        }
        Ok(())
    }
}
