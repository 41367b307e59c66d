//! # 内存 inode 表
//!
//! 操作系统为打开的文件维护一批**内存 inode**；
//! 这里用固定容量的槽位池来承载，容量即全系统可同时打开的 inode 上限。
//!
//! 槽位的生命周期只有两态：
//! 引用计数为 0 即空闲，可被复用；大于 0 即在用，
//! 是对应编号 inode 的唯一权威副本。
//! 「同一编号至多占一个在用槽位」由调用方（见 [`crate::fs`]）维持。
//!
//! 槽位不外借指针，外部一律经由 [`InodeHandle`] 间接访问。

use crate::layout::DiskInode;

/// 全系统可同时打开的 inode 上限
pub const MAX_SYS_OPEN_FILES: usize = 64;

/// 指向表内槽位的不透明句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InodeHandle(usize);

/// 内存中的 inode：磁盘字段外加两个**不落盘**的字段
#[derive(Debug, Default)]
pub(crate) struct IncoreInode {
    pub disk: DiskInode,
    /// 引用计数，为 0 表示槽位空闲
    pub ref_count: u32,
    /// 当前代表的 inode 编号，仅当 ref_count > 0 时有意义
    pub inode_num: u32,
}

pub(crate) struct InodeTable {
    slots: [IncoreInode; MAX_SYS_OPEN_FILES],
}

impl InodeTable {
    /// 全部槽位零初始化为空闲
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| IncoreInode::default()),
        }
    }

    /// 线性扫描第一个空闲槽位。
    /// 容量小且有界，O(n) 足够。
    pub fn find_free(&self) -> Option<InodeHandle> {
        self.slots
            .iter()
            .position(|slot| slot.ref_count == 0)
            .map(InodeHandle)
    }

    /// 线性扫描持有指定编号的在用槽位
    pub fn find_by_number(&self, inode_num: u32) -> Option<InodeHandle> {
        self.slots
            .iter()
            .position(|slot| slot.ref_count > 0 && slot.inode_num == inode_num)
            .map(InodeHandle)
    }

    #[inline]
    pub fn slot(&self, InodeHandle(index): InodeHandle) -> &IncoreInode {
        &self.slots[index]
    }

    #[inline]
    pub fn slot_mut(&mut self, InodeHandle(index): InodeHandle) -> &mut IncoreInode {
        &mut self.slots[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_table_is_all_free() {
        let table = InodeTable::new();
        assert_eq!(Some(InodeHandle(0)), table.find_free());
        assert_eq!(None, table.find_by_number(0));
    }

    #[test]
    fn find_by_number_skips_free_slots() {
        let mut table = InodeTable::new();

        // 空闲槽位即使编号碰巧一致也不算命中
        let free = table.find_free().unwrap();
        table.slot_mut(free).inode_num = 7;
        assert_eq!(None, table.find_by_number(7));

        table.slot_mut(free).ref_count = 1;
        assert_eq!(Some(free), table.find_by_number(7));
        assert_eq!(Some(InodeHandle(1)), table.find_free());
    }

    #[test]
    fn exhausted_table_has_no_free_slot() {
        let mut table = InodeTable::new();
        for index in 0..MAX_SYS_OPEN_FILES {
            let handle = table.find_free().unwrap();
            let slot = table.slot_mut(handle);
            slot.ref_count = 1;
            slot.inode_num = index as u32;
        }
        assert_eq!(None, table.find_free());
    }
}
