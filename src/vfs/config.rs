/// Construction parameters of a [`MemoryFS`](crate::MemoryFS).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemFsConfig {
    /// Permission bits reported for the root directory.
    pub root_mode: u32,
    /// Size reported by `stat` for every directory.
    pub dir_size: u64,
}

impl Default for MemFsConfig {
    fn default() -> Self {
        Self {
            root_mode: 0o700,
            dir_size: 0x100,
        }
    }
}
