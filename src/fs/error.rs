use std::fmt;

/// 文件系统错误类型。
/// 全部是局部可恢复错误：只中止当前命令，不影响既有状态。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    FileExists(String),      // 当前目录下已有同名文件
    DirectoryExists(String), // 当前目录下已有同名子目录
    NotFound(String),        // 文件、目录或路径段不存在
    /// 空闲块总量就不够
    InsufficientSpace { free: usize, required: usize },
    /// 总量够，但没有一段足够长的连续空闲块
    ExternalFragmentation { free: usize, required: usize },
    InvalidArgument(String), // 大小不是正整数之类的非法参数
}

// 实现 Display trait，用于打印错误信息
impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileExists(name) => {
                write!(f, "File '{}' already exists in this directory", name)
            }
            Self::DirectoryExists(name) => {
                write!(f, "Directory '{}' already exists in this directory", name)
            }
            Self::NotFound(what) => write!(f, "'{}' not found", what),
            Self::InsufficientSpace { free, required } => write!(
                f,
                "Insufficient space ({} free blocks, {} required)",
                free, required
            ),
            Self::ExternalFragmentation { free, required } => write!(
                f,
                "External fragmentation ({} free blocks, {} required, no contiguous run)",
                free, required
            ),
            Self::InvalidArgument(reason) => write!(f, "Invalid argument: {}", reason),
        }
    }
}

impl std::error::Error for FsError {}

/// 文件系统统一结果类型
pub type Result<T> = std::result::Result<T, FsError>;
