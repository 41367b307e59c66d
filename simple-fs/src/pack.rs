//! # 定宽整数存取层
//!
//! 在块缓冲区内按字节偏移读写定宽无符号整数，
//! 多字节字段一律小端编码。
//! 磁盘布局的编解码（见 [`crate::layout`]）只经由这里访问字节。

#[inline]
pub fn read_u8(buf: &[u8], offset: usize) -> u8 {
    buf[offset]
}

#[inline]
pub fn read_u16(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}

#[inline]
pub fn read_u32(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}

#[inline]
pub fn write_u8(buf: &mut [u8], offset: usize, value: u8) {
    buf[offset] = value;
}

#[inline]
pub fn write_u16(buf: &mut [u8], offset: usize, value: u16) {
    buf[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

#[inline]
pub fn write_u32(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn little_endian() {
        let mut buf = [0u8; 8];
        write_u32(&mut buf, 1, 0x11223344);
        assert_eq!([0, 0x44, 0x33, 0x22, 0x11, 0, 0, 0], buf);
        assert_eq!(0x11223344, read_u32(&buf, 1));
        assert_eq!(0x3344, read_u16(&buf, 1));
        assert_eq!(0x44, read_u8(&buf, 1));
    }
}
