/// 虚拟磁盘默认容量（块数），启动时可以覆盖
pub const DEFAULT_DISK_BLOCKS: usize = 100;

/// 磁盘快照每行展示的块数
pub const BLOCKS_PER_ROW: usize = 10;
