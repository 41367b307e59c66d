//! # 磁盘索引节点
//!
//! inode 记录定宽 64 字节，在 inode 区内连续排布。
//!
//! ## 记录内字段布局
//!
//! | 字段     | 偏移 | 宽度        |
//! |----------|------|-------------|
//! | size     | 0    | u32         |
//! | owner_id | 4    | u16         |
//! | 权限     | 6    | u8          |
//! | 标志     | 7    | u8          |
//! | 硬链接数 | 8    | u8          |
//! | 块指针   | 9    | 16 × u16    |
//!
//! 41 字节起到 64 字节为填充，编解码均不触碰。
//! 编解码独立于内存里结构体的布局，正确性由往返测试保证。

use enumflags2::{BitFlags, bitflags};

use super::INODE_FIRST_BLOCK;
use crate::BLOCK_SIZE;
use crate::pack;

/// 磁盘上一条 inode 记录的字节数
pub const INODE_SIZE: usize = 64;
/// 每块可容纳的 inode 记录数
pub const INODES_PER_BLOCK: usize = BLOCK_SIZE / INODE_SIZE;
/// 直接块指针的槽数，文件大小受此上限约束
pub const INODE_PTR_COUNT: usize = 16;

// 记录内各字段的字节偏移
const SIZE_OFFSET: usize = 0;
const OWNER_OFFSET: usize = 4;
const PERMISSIONS_OFFSET: usize = 6;
const FLAGS_OFFSET: usize = 7;
const LINKS_OFFSET: usize = 8;
const PTRS_OFFSET: usize = 9;

/// inode 记录的磁盘字段。
/// 引用计数等只存在于内存的状态见 [`crate::incore`]，不在此列。
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DiskInode {
    pub size: u32,
    pub owner_id: u16,
    pub permissions: u8,
    pub flags: u8,
    pub links: u8,
    /// 直接块指针，指向数据块
    pub block_ptrs: [u16; INODE_PTR_COUNT],
}

/// 标志字节内的位
#[bitflags]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InodeFlag {
    Directory = 0b10,
}

/// 通过编号获取 inode 在磁盘上的位置：**块ID**以及**块内字节偏移**
#[inline]
pub fn disk_inode_pos(inode_num: u32) -> (usize, usize) {
    let block_id = inode_num as usize / INODES_PER_BLOCK + INODE_FIRST_BLOCK;
    let block_inoffset = inode_num as usize % INODES_PER_BLOCK * INODE_SIZE;

    (block_id, block_inoffset)
}

impl DiskInode {
    /// 从块缓冲区的指定偏移处解码一条记录
    pub fn decode(block: &[u8], offset: usize) -> Self {
        let mut block_ptrs = [0; INODE_PTR_COUNT];
        for (i, ptr) in block_ptrs.iter_mut().enumerate() {
            *ptr = pack::read_u16(block, offset + PTRS_OFFSET + i * 2);
        }

        Self {
            size: pack::read_u32(block, offset + SIZE_OFFSET),
            owner_id: pack::read_u16(block, offset + OWNER_OFFSET),
            permissions: pack::read_u8(block, offset + PERMISSIONS_OFFSET),
            flags: pack::read_u8(block, offset + FLAGS_OFFSET),
            links: pack::read_u8(block, offset + LINKS_OFFSET),
            block_ptrs,
        }
    }

    /// 把记录编码进块缓冲区的指定偏移处，记录之外的字节保持原样
    pub fn encode(&self, block: &mut [u8], offset: usize) {
        pack::write_u32(block, offset + SIZE_OFFSET, self.size);
        pack::write_u16(block, offset + OWNER_OFFSET, self.owner_id);
        pack::write_u8(block, offset + PERMISSIONS_OFFSET, self.permissions);
        pack::write_u8(block, offset + FLAGS_OFFSET, self.flags);
        pack::write_u8(block, offset + LINKS_OFFSET, self.links);
        for (i, &ptr) in self.block_ptrs.iter().enumerate() {
            pack::write_u16(block, offset + PTRS_OFFSET + i * 2, ptr);
        }
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        BitFlags::<InodeFlag>::from_bits_truncate(self.flags).contains(InodeFlag::Directory)
    }
}
