use block_dev::BlockError;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, FsError>;

#[derive(Debug, Error)]
pub enum FsError {
    /// 磁盘上已无空闲的 inode 编号
    #[error("no free inode left on disk")]
    NoFreeInode,
    /// 内存 inode 表的槽位全部被占用
    #[error("in-core inode table is full")]
    IncoreExhausted,
    /// 底层块传输失败
    #[error(transparent)]
    Block(#[from] BlockError),
}
