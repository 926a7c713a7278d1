use chrono::{DateTime, Local};
use std::io;
use std::path::Path;

/// 会话结束时动作日志落盘的位置
pub const LOG_PATH: &str = "log.txt";

/// 一条动作记录：一条命令、它的结果和相关细节。
/// 由 shell 在命令执行完后根据核心返回值组装，核心自己不写日志。
#[derive(Debug, Clone)]
pub struct ActionRecord {
    timestamp: DateTime<Local>,
    command: String,
    details: Vec<String>,
}

impl ActionRecord {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            command: command.into(),
            details: Vec::new(),
        }
    }

    pub fn detail(mut self, line: impl Into<String>) -> Self {
        self.details.push(line.into());
        self
    }
}

/// 会话级的动作日志累加器，退出时按顺序一次性写出。
#[derive(Debug, Default)]
pub struct ActionLog {
    records: Vec<ActionRecord>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: ActionRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // 每条记录一行命令头，细节行以 "- " 开头
    fn render(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(&format!(
                "[{}] Command: {}\n",
                record.timestamp.format("%Y-%m-%d %H:%M:%S"),
                record.command
            ));
            for line in &record.details {
                out.push_str("- ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }

    pub fn flush(&self, path: impl AsRef<Path>) -> io::Result<()> {
        std::fs::write(path, self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_keeps_one_record_per_line_group() {
        let mut log = ActionLog::new();
        log.append(
            ActionRecord::new("create a 2")
                .detail("File created: a")
                .detail("Blocks allocated: [0, 1]"),
        );
        log.append(ActionRecord::new("ls"));

        let text = log.render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].ends_with("Command: create a 2"));
        assert_eq!(lines[1], "- File created: a");
        assert_eq!(lines[2], "- Blocks allocated: [0, 1]");
        assert!(lines[3].ends_with("Command: ls"));
    }

    #[test]
    fn records_keep_append_order() {
        let mut log = ActionLog::new();
        assert!(log.is_empty());

        log.append(ActionRecord::new("mkdir a"));
        log.append(ActionRecord::new("cd a"));
        log.append(ActionRecord::new("info"));
        assert_eq!(log.len(), 3);

        let text = log.render();
        let mkdir_at = text.find("mkdir a").expect("mkdir logged");
        let cd_at = text.find("cd a").expect("cd logged");
        let info_at = text.find("info").expect("info logged");
        assert!(mkdir_at < cd_at && cd_at < info_at);
    }
}
