//! 命令行解析测试

#[cfg(test)]
mod tests {
    use cmdroute::{CommandLineParser, CommandParserError, ParsedCommand};

    #[test]
    fn test_empty_input_shows_help() {
        let parsed = CommandLineParser::parse(Vec::<String>::new()).unwrap();
        assert!(parsed.show_help);
        assert_eq!(parsed, ParsedCommand::help());
    }

    #[test]
    fn test_command_path_and_named_params() {
        let parsed =
            CommandLineParser::parse(["test/mult", "--left=3", "-right 4", "extra"]).unwrap();

        assert!(!parsed.show_help);
        assert_eq!(parsed.group_name, "test");
        assert_eq!(parsed.entry_point_name, "mult");
        assert_eq!(parsed.command_path(), "test/mult");
        assert_eq!(parsed.param("left"), Some("3"));
        assert_eq!(parsed.param("right"), Some("4"));
        // 多余的位置参数保留但不影响命令
        assert_eq!(parsed.arguments, vec!["test/mult", "extra"]);
    }

    #[test]
    fn test_named_params_may_precede_command() {
        let parsed = CommandLineParser::parse(["--text=\"hi there\"", "test/out"]).unwrap();
        assert_eq!(parsed.command_path(), "test/out");
        assert_eq!(parsed.param("text"), Some("hi there"));
    }

    #[test]
    fn test_command_parts_are_trimmed() {
        let parsed = CommandLineParser::parse([" test/ out "]).unwrap();
        assert!(!parsed.show_help);
        assert_eq!(parsed.group_name, "test");
        assert_eq!(parsed.entry_point_name, "out");
    }

    #[test]
    fn test_spaced_command_is_named_param() {
        // "名称 + 空白 + 值" 的形式优先按命名参数识别
        let parsed = CommandLineParser::parse(["  test / out  "]).unwrap();
        assert!(parsed.show_help);
        assert_eq!(parsed.group_name, "");
        assert_eq!(parsed.param("test"), Some("/ out"));
        assert!(parsed.arguments.is_empty());
    }

    #[test]
    fn test_invalid_command_token() {
        let err = CommandParserError::InvalidArgument("mult".to_string());
        assert_eq!(CommandLineParser::parse(["mult"]), Err(err));

        // 只有第一个位置参数参与判断
        let parsed = CommandLineParser::parse(["test/mult", "plain"]).unwrap();
        assert_eq!(parsed.entry_point_name, "mult");
    }

    #[test]
    fn test_last_duplicate_wins() {
        let parsed =
            CommandLineParser::parse(["test/out", "--repeat=1", "--repeat=\"9\""]).unwrap();
        assert_eq!(parsed.param("repeat"), Some("9"));
        assert_eq!(parsed.named_params.len(), 1);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let parsed = CommandLineParser::parse(["test/out", "--Text=a", "--text=b"]).unwrap();
        assert_eq!(parsed.param("Text"), Some("a"));
        assert_eq!(parsed.param("text"), Some("b"));
    }
}
