//! 文件镜像上的持久化：关掉再打开，状态还在。

use std::sync::Arc;

use simple_fs::{
    BLOCK_SIZE, BlockDevice, BlockFile, DiskInode, INODE_BITMAP_BLOCK, SimpleFileSystem,
    TOTAL_BLOCKS,
};

#[test]
fn state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let image = dir.path().join("fs.img");

    {
        let device = Arc::new(BlockFile::create(&image, TOTAL_BLOCKS).unwrap());
        let mut fs = SimpleFileSystem::new(device);

        assert_eq!(0, fs.ialloc().unwrap());
        let inode_num = fs.ialloc().unwrap();
        assert_eq!(1, inode_num);

        let handle = fs.iget(inode_num).unwrap();
        let record = fs.inode_mut(handle);
        record.size = 512;
        record.links = 1;
        fs.iput(handle).unwrap();
    }

    let device = Arc::new(BlockFile::open(&image).unwrap());
    let fs = SimpleFileSystem::new(device.clone());

    let mut bitmap_block = [0u8; BLOCK_SIZE];
    device
        .read_block(INODE_BITMAP_BLOCK, &mut bitmap_block)
        .unwrap();
    assert_eq!(0b11, bitmap_block[0]);

    let expected = DiskInode {
        size: 512,
        links: 1,
        ..Default::default()
    };
    assert_eq!(expected, fs.read_inode(1).unwrap());
}

#[test]
fn read_past_image_end_is_a_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    let image = dir.path().join("tiny.img");

    let device = Arc::new(BlockFile::create(&image, 1).unwrap());
    let fs = SimpleFileSystem::new(device);

    // inode 区落在镜像之外，读取必须报错而不是补零
    assert!(fs.read_inode(0).is_err());
}
