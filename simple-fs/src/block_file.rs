//! # 磁盘镜像块设备驱动
//!
//! 把宿主机上的普通文件当作磁盘使用，
//! 块号线性映射到文件内偏移。

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::Mutex;

use block_dev::{BlockDevice, BlockError};

use crate::BLOCK_SIZE;

pub struct BlockFile(Mutex<File>);

impl BlockFile {
    /// 打开既有镜像
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        Ok(Self(Mutex::new(file)))
    }

    /// 新建 `total_blocks` 块的全零镜像。
    /// 位图、超级块等内容由格式化工具另行写入。
    pub fn create(path: impl AsRef<Path>, total_blocks: usize) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        file.set_len((total_blocks * BLOCK_SIZE) as u64)?;

        Ok(Self(Mutex::new(file)))
    }

    fn read_at(file: &mut File, block_id: usize, buf: &mut [u8]) -> std::io::Result<()> {
        file.seek(SeekFrom::Start((block_id * BLOCK_SIZE) as u64))?;
        file.read_exact(buf)
    }

    fn write_at(file: &mut File, block_id: usize, buf: &[u8]) -> std::io::Result<()> {
        file.seek(SeekFrom::Start((block_id * BLOCK_SIZE) as u64))?;
        file.write_all(buf)
    }
}

impl BlockDevice for BlockFile {
    fn read_block(&self, block_id: usize, buf: &mut [u8]) -> block_dev::Result<()> {
        let mut file = self.0.lock().unwrap();
        Self::read_at(&mut file, block_id, buf).map_err(|source| BlockError { block_id, source })
    }

    fn write_block(&self, block_id: usize, buf: &[u8]) -> block_dev::Result<()> {
        let mut file = self.0.lock().unwrap();
        Self::write_at(&mut file, block_id, buf).map_err(|source| BlockError { block_id, source })
    }
}
