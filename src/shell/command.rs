use colored::*;
use std::error::Error;

use crate::disk::Disk;
use crate::fs::config::BLOCKS_PER_ROW;
use crate::fs::directory::EntryKind;
use crate::fs::error::FsError;
use crate::fs::{FileSystem, Removed};
use crate::shell::log::{ActionLog, ActionRecord};

#[derive(Debug)]
pub enum Command {
    Help,
    Ls,
    Tree,
    Info,
    Mkdir(String),
    Create(String, usize),
    Cd(String),
    Delete(String),
    Read(String),
    Write(String, String),
    Invalid(String, String), // 原始命令 + 拒绝原因
    Exit,
}

/// 执行一条命令：调核心操作，打印结果，把结果组装成一条动作记录。
/// 错误都在这里消化掉，不向上冒泡，命令循环继续运行。
pub fn execute_command(
    cmd: &Command,
    fs: &mut FileSystem,
    log: &mut ActionLog,
) -> Result<(), Box<dyn Error>> {
    match cmd {
        Command::Help => print_help(),
        Command::Ls => {
            let entries = fs.list();
            if entries.is_empty() {
                println!("{}", "(empty directory)".bright_black());
            }
            for entry in &entries {
                match entry.kind {
                    EntryKind::Directory => println!("📁  {}", entry.name.blue()),
                    EntryKind::File => println!(
                        "📄  {} {}",
                        entry.name,
                        format!("({} blocks)", entry.blocks.unwrap_or_default()).bright_black()
                    ),
                }
            }
            log.append(ActionRecord::new("ls"));
        }
        Command::Tree => {
            for entry in fs.tree() {
                let indent = "  ".repeat(entry.depth);
                match entry.kind {
                    EntryKind::Directory => println!("{}📁 {}", indent, entry.name.blue()),
                    EntryKind::File => println!("{}📄 {}", indent, entry.name),
                }
            }
            log.append(ActionRecord::new("tree"));
        }
        Command::Info => {
            let usage = fs.usage();
            println!("💽 Disk size: {} blocks", usage.total);
            println!("   Used: {} blocks", usage.used);
            println!("   Free: {} blocks", usage.free);
            log.append(
                ActionRecord::new("info")
                    .detail(format!("Total: {} blocks", usage.total))
                    .detail(format!("Used: {} blocks", usage.used))
                    .detail(format!("Free: {} blocks", usage.free)),
            );
            print_disk(&fs.disk);
        }
        Command::Mkdir(name) => {
            let record = ActionRecord::new(format!("mkdir {}", name));
            match fs.mkdir(name) {
                Ok(()) => {
                    println!("✅ Created directory: {}", name.green());
                    log.append(record.detail(format!("Directory created: {}", name)));
                }
                Err(e) => {
                    print_error(&e);
                    log.append(record.detail(format!("Error: {}", e)));
                }
            }
        }
        Command::Create(name, size) => {
            let record = ActionRecord::new(format!("create {} {}", name, size));
            match fs.create(name, *size) {
                Ok(blocks) => {
                    println!("✅ Created file: {}", name.green());
                    log.append(
                        record
                            .detail(format!("File created: {}", name))
                            .detail(format!("Blocks allocated: {:?}", blocks)),
                    );
                    print_disk(&fs.disk);
                }
                Err(e) => {
                    print_error(&e);
                    log.append(record.detail(format!("Error: {}", e)));
                    // 分配类失败也展示磁盘快照帮助诊断；重名冲突不展示
                    if matches!(
                        e,
                        FsError::InsufficientSpace { .. } | FsError::ExternalFragmentation { .. }
                    ) {
                        print_disk(&fs.disk);
                    }
                }
            }
        }
        Command::Cd(path) => {
            let record = ActionRecord::new(format!("cd {}", path));
            match fs.change_dir(path) {
                Ok(()) => {
                    println!("📂 Moved to {}", fs.current_path().blue());
                    log.append(record.detail(format!("Moved to {}", fs.current_path())));
                }
                Err(e) => {
                    print_error(&e);
                    log.append(record.detail(format!("Error: {}", e)));
                }
            }
        }
        Command::Delete(name) => {
            let record = ActionRecord::new(format!("delete {}", name));
            match fs.delete(name) {
                Ok(Removed::File { blocks }) => {
                    println!("🗑️  Deleted file: {}", name.red());
                    log.append(
                        record
                            .detail(format!("File '{}' deleted", name))
                            .detail(format!("Blocks freed: {:?}", blocks)),
                    );
                }
                Ok(Removed::Directory) => {
                    println!("🗑️  Deleted directory: {}", name.red());
                    log.append(record.detail(format!("Directory '{}' deleted", name)));
                }
                Err(e) => {
                    print_error(&e);
                    log.append(record.detail(format!("Error: {}", e)));
                }
            }
            // delete 无论成败都展示磁盘状态
            print_disk(&fs.disk);
        }
        Command::Read(name) => match fs.read(name) {
            Ok(content) => {
                println!("📖 {}: {}", name.cyan(), content);
                log.append(ActionRecord::new(format!("read {}", name)));
            }
            Err(e) => {
                print_error(&e);
                log.append(
                    ActionRecord::new(format!("read {}", name)).detail(format!("Error: {}", e)),
                );
            }
        },
        Command::Write(name, data) => {
            let record = ActionRecord::new(format!("write {} {}", name, data));
            match fs.write(name, data) {
                Ok(()) => {
                    println!("✏️  Wrote to {}", name.cyan());
                    log.append(record.detail(format!("Data written: {}", data)));
                }
                Err(e) => {
                    print_error(&e);
                    log.append(record.detail(format!("Error: {}", e)));
                }
            }
        }
        Command::Invalid(raw, reason) => {
            let e = FsError::InvalidArgument(reason.clone());
            print_error(&e);
            log.append(ActionRecord::new(raw.clone()).detail(format!("Error: {}", e)));
        }
        Command::Exit => println!("{}", "👋 Exiting ContigFS shell...".yellow().bold()),
    }

    Ok(())
}

fn print_error(e: &FsError) {
    println!("{} {}", "❌ Error:".red().bold(), e);
}

// 按每行 10 块渲染磁盘快照：空闲 [  ]，占用显示文件名缩写
fn print_disk(disk: &Disk) {
    println!("{}", "Current disk state:".bold());
    println!(
        "{}",
        "Legend: [  ] = free | tag = owning file (abbreviated)".bright_black()
    );
    let mut row = String::new();
    for (i, block) in disk.blocks().iter().enumerate() {
        let cell = match block.tag.as_deref() {
            Some(tag) if block.occupied => format!("[{:<2}]", tag),
            _ => String::from("[  ]"),
        };
        row.push_str(&cell);
        if (i + 1) % BLOCKS_PER_ROW == 0 || i + 1 == disk.capacity() {
            println!("{}", row);
            row.clear();
        }
    }
    println!("{}", "-".repeat(40).bright_black());
}

fn print_help() {
    println!("{}", "📘 ContigFS Commands".bright_cyan().bold());
    println!(
        "{}",
        "
  ls                   List current directory contents
  tree                 Dump the whole directory tree
  info                 Show disk usage and block map
  mkdir <dir>          Create directory
  create <file> <n>    Create file occupying n contiguous blocks
  delete <name>        Delete file (or directory) in current directory
  cd <path>            Change directory ('..' returns to root)
  read <file>          Read file content
  write <file> <str>   Replace file content
  help                 Show this help message
  exit                 Quit the shell (writes log.txt)
"
        .bright_black()
    );
}
