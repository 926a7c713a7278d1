use crate::shell::command::Command;

/// 把一行输入解析成命令。
/// 返回 None 表示命令不认识或缺少参数，shell 给统一提示，不进动作日志；
/// create 的大小参数存在但不是正整数时，算可识别命令，按 InvalidArgument 处理。
pub fn parse_command(input: &str) -> Option<Command> {
    let tokens: Vec<&str> = input.trim().split_ascii_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    let cmd = tokens[0];
    let args = &tokens[1..];

    match cmd {
        "help" => Some(Command::Help),
        "ls" => Some(Command::Ls),
        "tree" => Some(Command::Tree),
        "info" => Some(Command::Info),
        "mkdir" => args.first().map(|&name| Command::Mkdir(name.to_string())),
        "cd" => args.first().map(|&path| Command::Cd(path.to_string())),
        "delete" => args.first().map(|&name| Command::Delete(name.to_string())),
        "read" => args.first().map(|&name| Command::Read(name.to_string())),
        "create" => {
            if args.len() < 2 {
                return None;
            }
            match args[1].parse::<usize>() {
                Ok(size) if size > 0 => Some(Command::Create(args[0].to_string(), size)),
                _ => Some(Command::Invalid(
                    format!("create {}", args.join(" ")),
                    format!("size '{}' must be a positive integer", args[1]),
                )),
            }
        }
        "write" => {
            if args.len() >= 2 {
                Some(Command::Write(args[0].to_string(), args[1..].join(" ")))
            } else {
                None
            }
        }
        "exit" => Some(Command::Exit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_create_with_name_and_size() {
        match parse_command("create notes 5") {
            Some(Command::Create(name, size)) => {
                assert_eq!(name, "notes");
                assert_eq!(size, 5);
            }
            other => panic!("unexpected parse result: {:?}", other),
        }
    }

    #[test]
    fn bad_size_is_invalid_argument_not_unknown() {
        // 大小参数在但不合法：可识别命令，要进日志
        assert!(matches!(
            parse_command("create notes five"),
            Some(Command::Invalid(_, _))
        ));
        assert!(matches!(
            parse_command("create notes 0"),
            Some(Command::Invalid(_, _))
        ));
    }

    #[test]
    fn missing_arguments_yield_none() {
        assert!(parse_command("mkdir").is_none());
        assert!(parse_command("create notes").is_none());
        assert!(parse_command("write notes").is_none());
        assert!(parse_command("").is_none());
    }

    #[test]
    fn unknown_command_yields_none() {
        assert!(parse_command("format").is_none());
        assert!(parse_command("touch a").is_none());
    }

    #[test]
    fn write_joins_remaining_tokens_into_one_payload() {
        match parse_command("write notes hello block world") {
            Some(Command::Write(name, data)) => {
                assert_eq!(name, "notes");
                assert_eq!(data, "hello block world");
            }
            other => panic!("unexpected parse result: {:?}", other),
        }
    }

    #[test]
    fn cd_takes_the_raw_path_token() {
        match parse_command("cd a/b/c") {
            Some(Command::Cd(path)) => assert_eq!(path, "a/b/c"),
            other => panic!("unexpected parse result: {:?}", other),
        }
    }
}
