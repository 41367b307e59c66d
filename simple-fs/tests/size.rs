use simple_fs::{
    BLOCK_BITS, BLOCK_SIZE, INODE_PTR_COUNT, INODE_SIZE, INODES_PER_BLOCK, MAX_SYS_OPEN_FILES,
    TOTAL_BLOCKS,
};

#[test]
fn geometry() {
    assert_eq!(4096, BLOCK_SIZE);
    assert_eq!(1024, TOTAL_BLOCKS);
    assert_eq!(64, INODE_SIZE);
    assert_eq!(64, INODES_PER_BLOCK);
    assert_eq!(BLOCK_SIZE, INODE_SIZE * INODES_PER_BLOCK);
    assert_eq!(32768, BLOCK_BITS);
    assert_eq!(16, INODE_PTR_COUNT);
    assert_eq!(64, MAX_SYS_OPEN_FILES);
    // 定宽字段排到填充区之前：4 + 2 + 1 + 1 + 1 + 16 * 2 = 41
    assert!(9 + INODE_PTR_COUNT * 2 <= INODE_SIZE);
}
