/// 文件：名字在父目录内唯一，占用一段连续的块区间。
/// content 是模拟用的文本负载，长度与块数无关（块只建模分配，不建模字节存储）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub name: String,
    pub declared_size: usize, // 申请的块数
    pub blocks: Vec<usize>,   // 占用的块下标，严格递增且连续
    pub content: String,
}

impl File {
    pub fn new(name: &str, declared_size: usize, blocks: Vec<usize>) -> Self {
        Self {
            name: name.to_string(),
            declared_size,
            blocks,
            content: String::new(),
        }
    }
}
