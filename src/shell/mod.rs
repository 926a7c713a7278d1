pub mod command;
pub mod log;
pub mod parse;

use crate::fs::config::DEFAULT_DISK_BLOCKS;
use crate::fs::FileSystem;
use crate::shell::command::execute_command;
use crate::shell::log::{ActionLog, LOG_PATH};
use crate::shell::parse::parse_command;
use colored::*;
use crossterm::{
    cursor, execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::{io::stdout, path::PathBuf, thread, time::Duration};

pub fn start_shell() {
    boot_animation();

    // 磁盘容量是唯一的启动参数，回车取默认值
    let capacity = prompt_capacity();
    let mut fs = FileSystem::new(capacity);
    let mut action_log = ActionLog::new();

    let username = whoami::username();
    let hostname = whoami::hostname();

    println!(
        "{}",
        "Type 'help' for available commands. Use ↑↓ for history, Tab for auto-completion.\n"
            .bright_black()
    );

    // 初始化 reedline
    let history_path = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".contigfs_history");

    let mut line_editor = Reedline::create().with_history(Box::new(
        reedline::FileBackedHistory::with_file(100, history_path).unwrap(),
    ));

    // 命令补全
    let commands: Vec<String> = [
        "help", "ls", "tree", "info", "mkdir", "create", "cd", "delete", "read", "write", "exit",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    let completer = reedline::DefaultCompleter::new_with_wordlen(commands, 2);
    line_editor = line_editor.with_completer(Box::new(completer));

    loop {
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(format!(
                "{}@{}:{}",
                username,
                hostname,
                fs.current_path()
            )),
            DefaultPromptSegment::Basic("ContigFS".to_string()),
        );

        match line_editor.read_line(&prompt) {
            Ok(Signal::Success(buffer)) => {
                let trimmed = buffer.trim();
                if trimmed.is_empty() {
                    continue;
                }

                match parse_command(trimmed) {
                    Some(cmd) => {
                        if let Err(e) = execute_command(&cmd, &mut fs, &mut action_log) {
                            println!("{} {}", "❌ Error:".red().bold(), e);
                        }
                        if matches!(cmd, command::Command::Exit) {
                            break;
                        }
                    }
                    None => println!(
                        "{}",
                        "⚠️  Unknown command or missing arguments. Type 'help' for command list."
                            .yellow()
                    ),
                }
            }
            Ok(Signal::CtrlC) => {
                println!();
                continue;
            }
            Ok(Signal::CtrlD) => {
                println!("{}", "Exiting ContigFS...".yellow());
                break;
            }
            Err(e) => {
                println!("Error reading line: {}", e);
                break;
            }
        }
    }

    // 会话结束才把动作日志一次性落盘
    flush_log(&action_log);
    println!("{}", "GoodBye!".bright_yellow());
}

fn flush_log(action_log: &ActionLog) {
    match action_log.flush(LOG_PATH) {
        Ok(()) => println!(
            "💾 {}",
            format!(
                "Action log written to {} ({} records)",
                LOG_PATH,
                action_log.len()
            )
            .green()
        ),
        Err(e) => println!(
            "{} Failed to write {}: {}",
            "❌".red(),
            LOG_PATH,
            e
        ),
    }
}

fn prompt_capacity() -> usize {
    Input::new()
        .with_prompt("Disk capacity (blocks)")
        .default(DEFAULT_DISK_BLOCKS)
        .validate_with(|value: &usize| {
            if *value > 0 {
                Ok(())
            } else {
                Err("capacity must be positive")
            }
        })
        .interact_text()
        .unwrap_or(DEFAULT_DISK_BLOCKS)
}

/// 开机动画，纯展示
fn boot_animation() {
    let mut stdout = stdout();

    execute!(stdout, Clear(ClearType::All), cursor::MoveTo(0, 0)).unwrap();
    println!("{}", "[ContigFS Booting...]".bright_yellow().bold());
    thread::sleep(Duration::from_millis(200));

    let steps = vec![
        "🧠 Initializing virtual disk...",
        "⚙️  Preparing block allocator...",
        "📁 Loading shell...",
    ];

    for step in steps {
        println!("{}", step);
        thread::sleep(Duration::from_millis(300));
    }

    // 模拟进度条
    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos:>3}% {msg}")
            .unwrap()
            .progress_chars("=> "),
    );

    for i in 0..100 {
        pb.set_position(i);
        thread::sleep(Duration::from_millis(5));
    }
    pb.finish_with_message("✅ Ready!");

    thread::sleep(Duration::from_millis(200));
    execute!(
        stdout,
        Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        SetForegroundColor(Color::Cyan),
        Print("Welcome to ContigFS v0.1.0\n"),
        ResetColor
    )
    .unwrap();
}
