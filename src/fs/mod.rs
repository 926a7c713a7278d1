use crate::disk::Disk;
use crate::fs::directory::{DirId, DirTree, EntryKind, ROOT};
use crate::fs::error::{FsError, Result};
use crate::fs::file::File;

pub mod config;
pub mod directory;
pub mod error;
pub mod file;

/// delete 的结果：删的是文件（连同释放的块）还是目录
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removed {
    File { blocks: Vec<usize> },
    Directory,
}

/// ls 使用的只读条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub name: String,
    pub kind: EntryKind,
    pub blocks: Option<usize>, // 文件声明的块数，目录为 None
}

/// tree 使用的只读条目，depth 决定缩进层级
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub depth: usize,
    pub name: String,
    pub kind: EntryKind,
}

// 磁盘占用统计
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    pub total: usize,
    pub used: usize,
    pub free: usize,
}

/// 文件系统：磁盘 + 目录树 + 当前目录游标。
/// 每个操作都返回明确的结果值（数据或错误），
/// 动作日志由外部的 shell 层根据返回值汇总，核心不持有日志。
#[derive(Debug)]
pub struct FileSystem {
    pub disk: Disk,
    tree: DirTree,
    current: DirId,
    path: String, // 展示路径，始终以 '/' 结尾
}

impl FileSystem {
    pub fn new(capacity: usize) -> Self {
        Self {
            disk: Disk::new(capacity),
            tree: DirTree::new(),
            current: ROOT,
            path: String::from("/"),
        }
    }

    pub fn current_path(&self) -> &str {
        &self.path
    }

    /// 在当前目录下新建子目录。
    /// 只检查子目录命名空间，同名文件不算冲突。
    pub fn mkdir(&mut self, name: &str) -> Result<()> {
        if self.tree.node(self.current).has_subdir(name) {
            return Err(FsError::DirectoryExists(name.to_string()));
        }
        self.tree.add_directory(self.current, name);
        Ok(())
    }

    /// 在当前目录下新建文件，返回分配到的块下标。
    /// 找不到连续空闲段时按空闲总量区分两种失败：
    /// 总量够 -> 外部碎片，总量不够 -> 空间不足。
    pub fn create(&mut self, name: &str, size: usize) -> Result<Vec<usize>> {
        if size == 0 {
            return Err(FsError::InvalidArgument(
                "size must be a positive integer".to_string(),
            ));
        }
        if self.tree.node(self.current).has_file(name) {
            // 只查文件命名空间，同名子目录不算冲突
            return Err(FsError::FileExists(name.to_string()));
        }
        let blocks = match self.disk.find_free_run(size) {
            Some(blocks) => blocks,
            None => {
                let free = self.disk.free_blocks();
                if free >= size {
                    return Err(FsError::ExternalFragmentation {
                        free,
                        required: size,
                    });
                }
                return Err(FsError::InsufficientSpace {
                    free,
                    required: size,
                });
            }
        };
        self.disk.allocate(&blocks, name);
        self.tree
            .node_mut(self.current)
            .add_file(File::new(name, size, blocks.clone()));
        Ok(blocks)
    }

    /// 删除当前目录下的文件或子目录，文件优先。
    /// 删除目录不会递归释放其中文件占用的块，被占块成为孤儿，
    /// 这是模拟器保留的已知简化。
    pub fn delete(&mut self, name: &str) -> Result<Removed> {
        if let Some(file) = self.tree.node_mut(self.current).remove_file(name) {
            self.disk.release(&file.blocks);
            return Ok(Removed::File {
                blocks: file.blocks,
            });
        }
        if self.tree.node_mut(self.current).remove_subdir(name).is_some() {
            return Ok(Removed::Directory);
        }
        Err(FsError::NotFound(name.to_string()))
    }

    /// 路径导航。".." 一律跳回根目录（扁平化的上级导航）；
    /// 其余输入按 '/' 切分，逐段在子目录命名空间里解析，
    /// 任何一段缺失立即失败并报告该段，游标保持不动。
    pub fn change_dir(&mut self, path: &str) -> Result<()> {
        if path == ".." {
            self.current = ROOT;
            self.path = String::from("/");
            return Ok(());
        }
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            return Err(FsError::InvalidArgument(format!("invalid path '{}'", path)));
        }
        let mut cursor = self.current;
        for segment in &segments {
            cursor = self
                .tree
                .node(cursor)
                .subdir(segment)
                .ok_or_else(|| FsError::NotFound(segment.to_string()))?;
        }
        // 全部段解析成功才提交游标和展示路径
        for segment in &segments {
            self.path.push_str(segment);
            self.path.push('/');
        }
        self.current = cursor;
        Ok(())
    }

    /// 整体覆盖文件内容。没有追加模式，长度也不和声明块数挂钩。
    pub fn write(&mut self, name: &str, data: &str) -> Result<()> {
        let file = self
            .tree
            .node_mut(self.current)
            .file_mut(name)
            .ok_or_else(|| FsError::NotFound(name.to_string()))?;
        file.content = data.to_string();
        Ok(())
    }

    /// 原样读出文件内容
    pub fn read(&self, name: &str) -> Result<&str> {
        let file = self
            .tree
            .node(self.current)
            .file(name)
            .ok_or_else(|| FsError::NotFound(name.to_string()))?;
        Ok(file.content.as_str())
    }

    /// 当前目录的直接子项：先子目录后文件，保持插入顺序，不递归
    pub fn list(&self) -> Vec<ListEntry> {
        let dir = self.tree.node(self.current);
        let mut entries = Vec::new();
        for entry in dir.subdirs() {
            entries.push(ListEntry {
                name: entry.name.clone(),
                kind: EntryKind::Directory,
                blocks: None,
            });
        }
        for file in dir.files() {
            entries.push(ListEntry {
                name: file.name.clone(),
                kind: EntryKind::File,
                blocks: Some(file.declared_size),
            });
        }
        entries
    }

    /// 全盘扫描得到占用统计
    pub fn usage(&self) -> Usage {
        let total = self.disk.capacity();
        let used = self.disk.used_blocks();
        Usage {
            total,
            used,
            free: total - used,
        }
    }

    /// 从根目录开始的深度优先全树转储，
    /// 每个目录先列完所有子目录（递归展开）再列自己的文件。
    pub fn tree(&self) -> Vec<TreeEntry> {
        let mut entries = Vec::new();
        self.walk(ROOT, 0, &mut entries);
        entries
    }

    fn walk(&self, id: DirId, depth: usize, out: &mut Vec<TreeEntry>) {
        let dir = self.tree.node(id);
        out.push(TreeEntry {
            depth,
            name: dir.name.clone(),
            kind: EntryKind::Directory,
        });
        for entry in dir.subdirs() {
            self.walk(entry.node, depth + 1, out);
        }
        for file in dir.files() {
            out.push(TreeEntry {
                depth: depth + 1,
                name: file.name.clone(),
                kind: EntryKind::File,
            });
        }
    }
}
