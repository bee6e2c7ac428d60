/*!
 * 命令行解析
 *
 * 第一个位置参数为 `<group>/<entryPoint>`，形如 `--name=value`、`-name "value"`
 * 的参数作为命名参数，其余参数按位置保留但不参与调度。
 */

pub mod error;

pub use error::{CommandParserError, CommandParserResult};

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// 命名参数：可选的 `-`/`--` 前缀、标识符、`=` 或空白、可带引号的值
static NAMED_PARAM_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^-{0,2}([a-zA-Z0-9_]+)[=\s]+"?([^"]+)"?$"#)
        .expect("named parameter pattern must compile")
});

/// 一次调用的解析结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    /// 没有可用的命令参数，应进入帮助模式
    pub show_help: bool,
    pub group_name: String,
    pub entry_point_name: String,
    /// 同名参数以最后一次出现为准
    pub named_params: HashMap<String, String>,
    /// 位置参数，保持输入顺序
    pub arguments: Vec<String>,
}

impl ParsedCommand {
    pub fn help() -> Self {
        Self {
            show_help: true,
            ..Self::default()
        }
    }

    /// `<group>/<entryPoint>`
    pub fn command_path(&self) -> String {
        format!("{}/{}", self.group_name, self.entry_point_name)
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.named_params.get(name).map(String::as_str)
    }

    pub fn has_param(&self, name: &str) -> bool {
        self.named_params.contains_key(name)
    }
}

pub struct CommandLineParser;

impl CommandLineParser {
    /// 解析参数列表（不含程序名）
    ///
    /// 没有位置参数时返回帮助模式；第一个位置参数不含 `/` 时返回错误。
    pub fn parse<I, S>(tokens: I) -> CommandParserResult<ParsedCommand>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = ParsedCommand::default();

        for token in tokens {
            let token = token.as_ref();
            match Self::parse_named(token) {
                Some((name, value)) => {
                    debug!("命名参数: {} = {}", name, value);
                    parsed.named_params.insert(name, value);
                }
                None => parsed.arguments.push(token.to_string()),
            }
        }

        let Some(command) = parsed.arguments.first() else {
            debug!("没有命令参数，进入帮助模式");
            parsed.show_help = true;
            return Ok(parsed);
        };

        let (group, entry_point) = Self::split_command(command)
            .ok_or_else(|| CommandParserError::InvalidArgument(command.clone()))?;
        parsed.group_name = group;
        parsed.entry_point_name = entry_point;

        debug!("解析命令: {}", parsed.command_path());
        Ok(parsed)
    }

    /// 识别单个命名参数，返回 (名称, 去引号并 trim 后的值)
    pub fn parse_named(token: &str) -> Option<(String, String)> {
        let captures = NAMED_PARAM_PATTERN.captures(token.trim())?;
        let name = captures.get(1)?.as_str().to_string();
        let value = captures.get(2)?.as_str().trim().to_string();
        Some((name, value))
    }

    /// `<group>/<entryPoint>[/...]`，多余的段被忽略
    fn split_command(command: &str) -> Option<(String, String)> {
        let mut parts = command.trim().split('/');
        let group = parts.next()?;
        let entry_point = parts.next()?;
        Some((group.trim().to_string(), entry_point.trim().to_string()))
    }
}
