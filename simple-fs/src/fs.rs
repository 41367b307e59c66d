//! # inode 生命周期管理层
//!
//! 把位图、磁盘布局与内存 inode 表组合成公开接口：
//! `ialloc` 分配新编号，`iget` 取得（或复用）内存副本，
//! `iput` 释放并在最后一个引用消失时写回磁盘。
//!
//! 整层为单线程同步设计：所有方法在调用者线程上跑完才返回，
//! 单一调用者这一前提由 `&mut self` 的方法签名固定下来。

use std::sync::Arc;

use block_dev::BlockDevice;

use crate::error::{FsError, Result};
use crate::incore::{InodeHandle, InodeTable};
use crate::layout::{self, DiskInode, bitmap, disk_inode_pos};
use crate::{BLOCK_SIZE, DataBlock};

pub struct SimpleFileSystem {
    block_device: Arc<dyn BlockDevice>,
    incore: InodeTable,
}

impl SimpleFileSystem {
    /// 接管一个已格式化的镜像设备
    pub fn new(block_device: Arc<dyn BlockDevice>) -> Self {
        Self {
            block_device,
            incore: InodeTable::new(),
        }
    }

    /// 在磁盘上分配新的 inode 编号。
    /// 位图的改动同步写回，不做任何延迟提交。
    pub fn ialloc(&mut self) -> Result<u32> {
        let mut bitmap_block: DataBlock = [0; BLOCK_SIZE];
        self.block_device
            .read_block(layout::INODE_BITMAP_BLOCK, &mut bitmap_block)?;

        let Some(inode_num) = bitmap::find_free(&bitmap_block) else {
            return Err(FsError::NoFreeInode);
        };

        bitmap::set_bit(&mut bitmap_block, inode_num, true);
        self.block_device
            .write_block(layout::INODE_BITMAP_BLOCK, &bitmap_block)?;
        log::debug!("ialloc: inode {inode_num}");

        Ok(inode_num)
    }

    /// 从磁盘读出编号对应的 inode 记录
    pub fn read_inode(&self, inode_num: u32) -> Result<DiskInode> {
        let (block_id, offset) = disk_inode_pos(inode_num);

        let mut block: DataBlock = [0; BLOCK_SIZE];
        self.block_device.read_block(block_id, &mut block)?;

        Ok(DiskInode::decode(&block, offset))
    }

    /// 把 inode 记录写回磁盘。
    /// 同块内还排布着相邻的 inode，必须整块先读后改再写。
    pub fn write_inode(&self, inode_num: u32, inode: &DiskInode) -> Result<()> {
        let (block_id, offset) = disk_inode_pos(inode_num);

        let mut block: DataBlock = [0; BLOCK_SIZE];
        self.block_device.read_block(block_id, &mut block)?;
        inode.encode(&mut block, offset);
        self.block_device.write_block(block_id, &block)?;

        Ok(())
    }

    /// 取得编号对应的内存 inode 句柄。
    /// 已在表内则共享同一槽位并递增引用计数，此路径不碰磁盘；
    /// 否则占用一个空闲槽位并从磁盘装载。
    pub fn iget(&mut self, inode_num: u32) -> Result<InodeHandle> {
        if let Some(handle) = self.incore.find_by_number(inode_num) {
            let slot = self.incore.slot_mut(handle);
            slot.ref_count += 1;
            log::trace!("iget({inode_num}): hit, ref={}", slot.ref_count);
            return Ok(handle);
        }

        let Some(handle) = self.incore.find_free() else {
            return Err(FsError::IncoreExhausted);
        };
        let disk = self.read_inode(inode_num)?;

        let slot = self.incore.slot_mut(handle);
        slot.disk = disk;
        slot.ref_count = 1;
        slot.inode_num = inode_num;
        log::trace!("iget({inode_num}): loaded");

        Ok(handle)
    }

    /// 释放句柄。
    /// 引用计数降到 0 时把槽位内容写回磁盘，槽位随即空闲；
    /// 对已空闲槽位的重复释放视作无操作。
    pub fn iput(&mut self, handle: InodeHandle) -> Result<()> {
        if self.incore.slot(handle).ref_count == 0 {
            return Ok(());
        }

        let slot = self.incore.slot_mut(handle);
        slot.ref_count -= 1;
        if slot.ref_count > 0 {
            return Ok(());
        }

        let inode_num = slot.inode_num;
        let disk = slot.disk.clone();
        log::trace!("iput({inode_num}): flush");
        self.write_inode(inode_num, &disk)
    }

    /// 只读访问句柄指向的 inode 记录
    #[inline]
    pub fn inode(&self, handle: InodeHandle) -> &DiskInode {
        &self.incore.slot(handle).disk
    }

    /// 可写访问句柄指向的 inode 记录。
    /// 改动对共享同一槽位的句柄立即可见，但只在最后一次 `iput` 时落盘。
    #[inline]
    pub fn inode_mut(&mut self, handle: InodeHandle) -> &mut DiskInode {
        &mut self.incore.slot_mut(handle).disk
    }

    /// 句柄所指槽位当前的引用计数
    #[inline]
    pub fn ref_count(&self, handle: InodeHandle) -> u32 {
        self.incore.slot(handle).ref_count
    }
}
