//! This module provides the in-memory file system: the root handle over a tree of directory nodes.

use tracing::debug;

use crate::core::{Error, ErrorKind, FsBackend, Result, utils};
use crate::vfs::dir_node::DirectoryNode;
use crate::{DirEntry, File, MemFsConfig, Metadata};

/// Name of the root directory as reported by `stat`.
pub const ROOT_NAME: &str = ".";

/// A file system that keeps every directory and file in process memory.
///
/// `MemoryFS` owns a single root directory node; each node owns its child
/// directories and file records. All operations cleanse the incoming path
/// first (see [`cleanse`](crate::cleanse)) and then walk the tree one segment at a time.
///
/// ### Paths
///
/// * Paths are slash separated and relative to the root. A leading `/` is
///   accepted and ignored.
/// * `""`, `"."` and `"/"` name the root directory.
/// * Names are matched exactly: no case folding, no wildcards.
///
/// ### Semantics
///
/// * `write_file()` never creates parent directories; call `mkdir_all()` first.
/// * `write_file()` copies the content and replaces any previous file completely.
/// * `mkdir_all()` is idempotent for directories but fails when a segment is a file.
/// * `read_dir()` returns entries sorted by name (byte order).
/// * There is no removal: entries live as long as the file system.
///
/// ### Thread Safety
///
/// No internal locking is done. Mutating methods take `&mut self`, so the
/// compiler enforces a single writer; wrap the value in `RwLock<MemoryFS>` if
/// it has to be shared between threads. Open handles hold their own reference
/// to the content and are unaffected by later writes.
///
/// ### Example
///
/// ```
/// use memfs_kit::{FsBackend, MemoryFS};
///
/// let mut fs = MemoryFS::new();
/// fs.mkdir_all("docs", 0o755).unwrap();
/// fs.write_file("docs/note.txt", b"Hello", 0o644).unwrap();
///
/// assert_eq!(fs.read_file("/docs/note.txt").unwrap(), b"Hello");
/// assert_eq!(fs.stat("docs/note.txt").unwrap().len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct MemoryFS {
    config: MemFsConfig,
    root: DirectoryNode,
}

impl MemoryFS {
    /// Creates an empty file system with the default configuration.
    pub fn new() -> Self {
        Self::with_config(MemFsConfig::default())
    }

    pub fn with_config(config: MemFsConfig) -> Self {
        let root = DirectoryNode::new(ROOT_NAME, config.root_mode, config.dir_size);
        Self { config, root }
    }

    pub fn config(&self) -> &MemFsConfig {
        &self.config
    }
}

/// Attaches the failing path to an inner error; the root is reported as `.`.
fn with_path(path: String) -> impl FnOnce(ErrorKind) -> Error {
    move |kind| {
        if path.is_empty() {
            Error::new(kind, ROOT_NAME)
        } else {
            Error::new(kind, path)
        }
    }
}

impl Default for MemoryFS {
    fn default() -> Self {
        Self::new()
    }
}

impl FsBackend for MemoryFS {
    /// Opens a regular file or a directory.
    ///
    /// Regular files come back as a fresh cursor at offset 0; directories as a
    /// handle whose reads fail with [`Error::ReadNotSupported`].
    fn open(&self, path: &str) -> Result<File> {
        let path = utils::cleanse(path);
        debug!(path = %path, "open");
        self.root.open(&path).map_err(with_path(path))
    }

    fn stat(&self, path: &str) -> Result<Metadata> {
        let path = utils::cleanse(path);
        debug!(path = %path, "stat");
        self.root.stat(&path).map_err(with_path(path))
    }

    /// Lists the immediate children of a directory.
    ///
    /// # Returns
    /// * `Ok(Vec<DirEntry>)` - files and directories sorted by name.
    /// * `Err(Error::NotExist)` - the path is missing or names a file.
    fn read_dir(&self, path: &str) -> Result<Vec<DirEntry>> {
        let path = utils::cleanse(path);
        debug!(path = %path, "read_dir");
        self.root.read_dir(&path).map_err(with_path(path))
    }

    /// Stores a private copy of `content` at `path`.
    ///
    /// # Returns
    /// * `Err(Error::NotExist)` - a parent directory is missing.
    /// * `Err(Error::AlreadyExists)` - `path` is a directory (including the root).
    fn write_file(&mut self, path: &str, content: &[u8], mode: u32) -> Result<()> {
        let path = utils::cleanse(path);
        debug!(path = %path, len = content.len(), mode, "write_file");
        self.root
            .write_file(&path, content, mode)
            .map_err(with_path(path))
    }

    /// Creates the directory at `path` and every missing parent with `mode`.
    ///
    /// # Returns
    /// * `Err(Error::AlreadyExists)` - a segment of `path` is a file. The tree is left untouched.
    fn mkdir_all(&mut self, path: &str, mode: u32) -> Result<()> {
        let path = utils::cleanse(path);
        debug!(path = %path, mode, "mkdir_all");
        self.root
            .mkdir_all(&path, mode, self.config.dir_size)
            .map_err(with_path(path))
    }
}
