//! # 磁盘数据结构层
//!
//! 镜像的保留块布局：
//!
//! 超级块 | inode位图 | 数据块位图 | inode区 | 数据区

pub mod bitmap;

mod inode;
pub use inode::{
    DiskInode, INODE_PTR_COUNT, INODE_SIZE, INODES_PER_BLOCK, InodeFlag, disk_inode_pos,
};

/// 超级块，由格式化工具写入，本层不触碰
pub const SUPER_BLOCK: usize = 0;
/// inode 空闲位图所在块
pub const INODE_BITMAP_BLOCK: usize = 1;
/// 数据块空闲位图所在块，由数据块分配器使用
pub const DATA_BITMAP_BLOCK: usize = 2;
/// inode 区的起始块
pub const INODE_FIRST_BLOCK: usize = 3;
/// inode 区占用块数
pub const INODE_TABLE_BLOCKS: usize = 4;
