//! Recursive directory node: the tree that backs [`MemoryFS`](crate::MemoryFS).
//!
//! Every operation takes an already cleansed, relative path, consumes its
//! first segment and hands the rest to the matching child. Errors are reported
//! as bare [`ErrorKind`]s; the caller adds the path.

use std::collections::HashMap;

use tracing::trace;

use crate::core::ErrorKind;
use crate::core::utils::{is_root, split_first};
use crate::vfs::file::{DirHandle, FileRecord};
use crate::{DirEntry, EntryType, File, Metadata, ROOT_NAME};

pub(crate) type NodeResult<T> = std::result::Result<T, ErrorKind>;

/// One directory level.
///
/// ### Invariants
///
/// 1. A name is either a key of `dirs` or of `files`, never both.
/// 2. Keys are single path segments (no separator, not empty, not `.` or `..`).
/// 3. Children are exclusively owned; there are no back-references to the parent.
#[derive(Debug, Clone)]
pub(crate) struct DirectoryNode {
    info: Metadata,
    dirs: HashMap<String, DirectoryNode>,
    files: HashMap<String, FileRecord>,
}

impl DirectoryNode {
    pub(crate) fn new(name: &str, mode: u32, size: u64) -> Self {
        Self {
            info: Metadata::new(name, size, EntryType::Directory, mode),
            dirs: HashMap::new(),
            files: HashMap::new(),
        }
    }

    pub(crate) fn info(&self) -> &Metadata {
        &self.info
    }

    /// Resolves `path` to a file record below this node.
    pub(crate) fn get_file(&self, path: &str) -> NodeResult<&FileRecord> {
        let (head, rest) = split_first(path);
        if rest.is_empty() {
            return self.files.get(head).ok_or(ErrorKind::NotExist);
        }
        self.dirs
            .get(head)
            .ok_or(ErrorKind::NotExist)?
            .get_file(rest)
    }

    /// Resolves `path` to a directory below this node. An empty path is the node itself.
    pub(crate) fn get_dir(&self, path: &str) -> NodeResult<&DirectoryNode> {
        if path.is_empty() {
            return Ok(self);
        }
        let (head, rest) = split_first(path);
        self.dirs
            .get(head)
            .ok_or(ErrorKind::NotExist)?
            .get_dir(rest)
    }

    /// Opens `path`, trying the file namespace first and the directory namespace second.
    pub(crate) fn open(&self, path: &str) -> NodeResult<File> {
        if is_root(path) {
            return Ok(File::Directory(self.handle(ROOT_NAME)));
        }
        match self.get_file(path) {
            Ok(record) => return Ok(File::Regular(record.open())),
            Err(ErrorKind::NotExist) => {}
            Err(kind) => return Err(kind),
        }
        let dir = self.get_dir(path)?;
        Ok(File::Directory(dir.handle(path)))
    }

    /// Metadata of `path`, file namespace first.
    pub(crate) fn stat(&self, path: &str) -> NodeResult<Metadata> {
        if is_root(path) {
            return Ok(self.info.clone());
        }
        match self.get_file(path) {
            Ok(record) => return Ok(record.info().clone()),
            Err(ErrorKind::NotExist) => {}
            Err(kind) => return Err(kind),
        }
        self.get_dir(path).map(|dir| dir.info.clone())
    }

    /// Immediate children of the directory at `path`, sorted by name.
    pub(crate) fn read_dir(&self, path: &str) -> NodeResult<Vec<DirEntry>> {
        if path.is_empty() {
            return Ok(self.list());
        }
        let (head, rest) = split_first(path);
        self.dirs
            .get(head)
            .ok_or(ErrorKind::NotExist)?
            .read_dir(rest)
    }

    /// Ensures that every segment of `path` exists as a directory.
    ///
    /// A segment that names a file fails with `AlreadyExists`. Segments below
    /// a newly created directory cannot collide with anything, so a failure
    /// always happens before the first mutation.
    pub(crate) fn mkdir_all(&mut self, path: &str, mode: u32, dir_size: u64) -> NodeResult<()> {
        if path.is_empty() {
            return Ok(());
        }
        let (head, rest) = split_first(path);
        if self.files.contains_key(head) {
            return Err(ErrorKind::AlreadyExists);
        }
        if !self.dirs.contains_key(head) {
            trace!(name = head, mode, "created directory");
            self.dirs
                .insert(head.to_string(), DirectoryNode::new(head, mode, dir_size));
            self.info.touch();
        }
        if rest.is_empty() {
            return Ok(());
        }
        self.dirs
            .get_mut(head)
            .ok_or(ErrorKind::NotExist)?
            .mkdir_all(rest, mode, dir_size)
    }

    /// Stores a copy of `content` as the file at `path`, replacing an existing file.
    /// Intermediate directories must already exist.
    pub(crate) fn write_file(&mut self, path: &str, content: &[u8], mode: u32) -> NodeResult<()> {
        let (head, rest) = split_first(path);
        if !rest.is_empty() {
            return self
                .dirs
                .get_mut(head)
                .ok_or(ErrorKind::NotExist)?
                .write_file(rest, content, mode);
        }
        if head.is_empty() || self.dirs.contains_key(head) {
            return Err(ErrorKind::AlreadyExists);
        }
        let record = FileRecord::new(head, content, mode);
        if self.files.insert(head.to_string(), record).is_some() {
            trace!(name = head, len = content.len(), "replaced file");
        } else {
            trace!(name = head, len = content.len(), "created file");
            self.info.touch();
        }
        Ok(())
    }

    fn list(&self) -> Vec<DirEntry> {
        let mut entries: Vec<DirEntry> = self
            .files
            .values()
            .map(|file| DirEntry::from(file.info().clone()))
            .chain(self.dirs.values().map(|dir| DirEntry::from(dir.info.clone())))
            .collect();
        entries.sort_by(|a, b| a.name().as_bytes().cmp(b.name().as_bytes()));
        entries
    }

    fn handle(&self, path: &str) -> DirHandle {
        DirHandle::new(path, self.info.clone(), self.list())
    }
}
