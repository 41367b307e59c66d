//! # 块设备接口层
//!
//! 块设备是以**块**为单位存储数据的设备，例如磁盘、磁盘镜像文件等；
//! [`BlockDevice`] 就是对读写块设备的抽象，
//! 实现了此特质的类型称为**块设备驱动**。
//!
//! 读写一律整块进行，不存在部分传输：
//! 传输不完整即 [`BlockError`]，由调用者向上传播。

use thiserror::Error;

pub type Result<T> = core::result::Result<T, BlockError>;

/// 块传输失败。
///
/// 半个块的状态无法安全解释，所以不重试，直接上报。
#[derive(Debug, Error)]
#[error("block {block_id} transfer failed")]
pub struct BlockError {
    /// 出错的块
    pub block_id: usize,
    #[source]
    pub source: std::io::Error,
}

/// 块设备驱动特质
pub trait BlockDevice: Send + Sync {
    /// 把编号对应的块整块读入 `buf`
    fn read_block(&self, block_id: usize, buf: &mut [u8]) -> Result<()>;

    /// 把 `buf` 整块写到编号对应的块
    fn write_block(&self, block_id: usize, buf: &[u8]) -> Result<()>;
}
