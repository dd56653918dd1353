mod config;
mod dir_node;
mod entry;
mod file;
mod memory_fs;
mod walk;

pub use config::MemFsConfig;
pub use entry::{DirEntry, EntryType, Metadata};
pub use file::{DirHandle, File, FileHandle};
pub use memory_fs::{MemoryFS, ROOT_NAME};
pub use walk::walk_dir;
