//! # 空闲位图
//!
//! 一个块就是一整张位图，每个 bit 指示一个编号的分配情况：
//! 1 为已分配，0 为空闲。
//!
//! 这里只做纯内存的位操作，位图块的读出与写回由调用者负责。

use crate::DataBlock;

/// 扫描位图，返回编号最小的空闲位。
/// 扫描顺序：低字节在前，字节内低位在前。
pub fn find_free(block: &DataBlock) -> Option<u32> {
    block.iter().enumerate().find_map(|(byte_index, &byte)| {
        (byte != u8::MAX).then(|| (byte_index * 8) as u32 + byte.trailing_ones())
    })
}

/// 就地改写编号对应的位。
/// 编号超出块的位容量由调用者保证不会发生。
pub fn set_bit(block: &mut DataBlock, index: u32, value: bool) {
    let byte_index = index as usize / 8;
    let mask = 1 << (index % 8);

    if value {
        block[byte_index] |= mask;
    } else {
        block[byte_index] &= !mask;
    }
}
