use std::collections::HashMap;

use crate::fs::file::File;

/// 目录树节点编号（DirTree.nodes 的下标）
pub type DirId = usize;

/// 根目录固定占 0 号位
pub const ROOT: DirId = 0;

// 目录项类型，ls / tree 输出时区分展示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

// 指向子目录节点的目录项
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub name: String,
    pub node: DirId,
}

/// 目录：两个互相独立的命名空间（子目录、文件）。
/// 同名文件和子目录可以合法共存，create/mkdir 只检查各自的命名空间。
/// 条目保持插入顺序，name -> 下标的索引在删除后重建。
#[derive(Debug, Clone)]
pub struct Directory {
    pub name: String,
    subdirs: Vec<DirEntry>,
    files: Vec<File>,
    subdir_index: HashMap<String, usize>,
    file_index: HashMap<String, usize>,
}

impl Directory {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            subdirs: Vec::new(),
            files: Vec::new(),
            subdir_index: HashMap::new(),
            file_index: HashMap::new(),
        }
    }

    pub fn has_subdir(&self, name: &str) -> bool {
        self.subdir_index.contains_key(name)
    }

    pub fn has_file(&self, name: &str) -> bool {
        self.file_index.contains_key(name)
    }

    // 查子目录，返回节点编号
    pub fn subdir(&self, name: &str) -> Option<DirId> {
        self.subdir_index.get(name).map(|&i| self.subdirs[i].node)
    }

    pub fn file(&self, name: &str) -> Option<&File> {
        self.file_index.get(name).map(|&i| &self.files[i])
    }

    pub fn file_mut(&mut self, name: &str) -> Option<&mut File> {
        match self.file_index.get(name) {
            Some(&i) => self.files.get_mut(i),
            None => None,
        }
    }

    // 重名检查由调用方负责
    pub fn add_subdir(&mut self, name: &str, node: DirId) {
        self.subdirs.push(DirEntry {
            name: name.to_string(),
            node,
        });
        self.subdir_index
            .insert(name.to_string(), self.subdirs.len() - 1);
    }

    pub fn add_file(&mut self, file: File) {
        self.file_index
            .insert(file.name.clone(), self.files.len());
        self.files.push(file);
    }

    // 删除文件条目并重建索引，返回被删的文件
    pub fn remove_file(&mut self, name: &str) -> Option<File> {
        if let Some(&idx) = self.file_index.get(name) {
            let file = self.files.remove(idx);
            self.rebuild_file_index();
            Some(file)
        } else {
            None
        }
    }

    // 删除子目录条目并重建索引，返回节点编号
    pub fn remove_subdir(&mut self, name: &str) -> Option<DirId> {
        if let Some(&idx) = self.subdir_index.get(name) {
            let entry = self.subdirs.remove(idx);
            self.rebuild_subdir_index();
            Some(entry.node)
        } else {
            None
        }
    }

    pub fn subdirs(&self) -> &[DirEntry] {
        &self.subdirs
    }

    pub fn files(&self) -> &[File] {
        &self.files
    }

    fn rebuild_file_index(&mut self) {
        self.file_index.clear();
        for (i, file) in self.files.iter().enumerate() {
            self.file_index.insert(file.name.clone(), i);
        }
    }

    fn rebuild_subdir_index(&mut self) {
        self.subdir_index.clear();
        for (i, entry) in self.subdirs.iter().enumerate() {
            self.subdir_index.insert(entry.name.clone(), i);
        }
    }
}

/// 目录树：所有节点放在一个 Vec 里，用下标互相引用。
/// 根目录 "/" 固定在 0 号位；没有任何操作会制造环或跨链接。
/// 被删除子树的节点留在 Vec 里不再可达，模拟器不回收节点槽位。
#[derive(Debug)]
pub struct DirTree {
    nodes: Vec<Directory>,
}

impl DirTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Directory::new("/")],
        }
    }

    pub fn node(&self, id: DirId) -> &Directory {
        &self.nodes[id]
    }

    pub fn node_mut(&mut self, id: DirId) -> &mut Directory {
        &mut self.nodes[id]
    }

    // 新建一个空目录节点并挂到 parent 下，返回新节点编号
    pub fn add_directory(&mut self, parent: DirId, name: &str) -> DirId {
        let id = self.nodes.len();
        self.nodes.push(Directory::new(name));
        self.nodes[parent].add_subdir(name, id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_insertion_order() {
        let mut dir = Directory::new("d");
        dir.add_subdir("b", 1);
        dir.add_subdir("a", 2);
        dir.add_file(File::new("z", 1, vec![0]));
        dir.add_file(File::new("y", 1, vec![1]));

        let subdirs: Vec<&str> = dir.subdirs().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(subdirs, ["b", "a"]);
        let files: Vec<&str> = dir.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(files, ["z", "y"]);
    }

    #[test]
    fn index_is_rebuilt_after_removal() {
        let mut dir = Directory::new("d");
        dir.add_file(File::new("a", 1, vec![0]));
        dir.add_file(File::new("b", 1, vec![1]));
        dir.add_file(File::new("c", 1, vec![2]));

        let removed = dir.remove_file("b").expect("b exists");
        assert_eq!(removed.blocks, vec![1]);
        assert!(dir.file("b").is_none());
        // 剩余条目仍能按名字找到
        assert_eq!(dir.file("c").map(|f| f.blocks[0]), Some(2));
        assert!(dir.has_file("a"));
    }

    #[test]
    fn same_name_file_and_subdir_coexist() {
        let mut dir = Directory::new("d");
        dir.add_subdir("x", 1);
        dir.add_file(File::new("x", 1, vec![0]));

        assert!(dir.has_subdir("x"));
        assert!(dir.has_file("x"));
    }

    #[test]
    fn tree_starts_with_root_node() {
        let tree = DirTree::new();
        assert_eq!(tree.node(ROOT).name, "/");

        let mut tree = tree;
        let id = tree.add_directory(ROOT, "home");
        assert_eq!(tree.node(ROOT).subdir("home"), Some(id));
        assert_eq!(tree.node(id).name, "home");
    }
}
