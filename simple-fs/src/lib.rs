/* simple-fs 的整体架构，自上而下 */

// inode 生命周期管理层：实现 ialloc、iget、iput 等操作
mod fs;
pub use fs::SimpleFileSystem;

// 内存 inode 表：固定容量的槽位池，按引用计数复用
mod incore;
pub use incore::{InodeHandle, MAX_SYS_OPEN_FILES};

// 磁盘数据结构层：表示磁盘文件系统的数据结构
mod layout;
pub use layout::{
    DATA_BITMAP_BLOCK, DiskInode, INODE_BITMAP_BLOCK, INODE_FIRST_BLOCK, INODE_PTR_COUNT,
    INODE_SIZE, INODE_TABLE_BLOCKS, INODES_PER_BLOCK, InodeFlag, SUPER_BLOCK, disk_inode_pos,
};

// 定宽整数存取层：块缓冲区内多字节字段的编解码
mod pack;

// 磁盘镜像块设备驱动
mod block_file;
pub use block_file::BlockFile;

mod error;
pub use error::{FsError, Result};

pub use block_dev::{BlockDevice, BlockError};

pub const BLOCK_SIZE: usize = 4096;
pub const BLOCK_BITS: usize = BLOCK_SIZE * 8;
/// 镜像的总块数
pub const TOTAL_BLOCKS: usize = 1024;

type DataBlock = [u8; BLOCK_SIZE];
