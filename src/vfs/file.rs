//! File records stored in the tree and the handles returned by `open`.

use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::sync::Arc;

use crate::core::{Error, ErrorKind, Result};
use crate::{DirEntry, EntryType, Metadata};

/// Leaf of the tree: immutable content plus its metadata.
#[derive(Debug, Clone)]
pub(crate) struct FileRecord {
    info: Metadata,
    content: Arc<[u8]>,
}

impl FileRecord {
    /// Copies `content` into a private buffer, so later changes to the
    /// caller's slice are never observed by the store.
    pub(crate) fn new(name: &str, content: &[u8], mode: u32) -> Self {
        Self {
            info: Metadata::new(name, content.len() as u64, EntryType::File, mode),
            content: Arc::from(content),
        }
    }

    pub(crate) fn info(&self) -> &Metadata {
        &self.info
    }

    /// A fresh cursor positioned at the start. Handles never share position.
    pub(crate) fn open(&self) -> FileHandle {
        FileHandle {
            info: self.info.clone(),
            cursor: Cursor::new(Arc::clone(&self.content)),
        }
    }
}

/// Read cursor over the content of a regular file.
#[derive(Debug, Clone)]
pub struct FileHandle {
    info: Metadata,
    cursor: Cursor<Arc<[u8]>>,
}

impl FileHandle {
    pub fn metadata(&self) -> &Metadata {
        &self.info
    }

    /// The full content, independent of the cursor position.
    pub fn content(&self) -> &[u8] {
        self.cursor.get_ref()
    }

    pub fn position(&self) -> u64 {
        self.cursor.position()
    }
}

impl Read for FileHandle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.cursor.read(buf)
    }
}

impl Seek for FileHandle {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.cursor.seek(pos)
    }
}

/// Handle of an opened directory. It carries a snapshot of the listing taken at open time.
#[derive(Debug, Clone)]
pub struct DirHandle {
    path: String,
    info: Metadata,
    entries: Vec<DirEntry>,
}

impl DirHandle {
    pub(crate) fn new(path: &str, info: Metadata, entries: Vec<DirEntry>) -> Self {
        Self {
            path: path.to_string(),
            info,
            entries,
        }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.info
    }

    /// Immediate children, sorted by name.
    pub fn entries(&self) -> &[DirEntry] {
        &self.entries
    }

    fn read_error(&self) -> Error {
        Error::new(ErrorKind::ReadNotSupported, self.path.as_str())
    }
}

/// Result of `open`: either a regular file or a directory.
#[derive(Debug, Clone)]
pub enum File {
    Regular(FileHandle),
    Directory(DirHandle),
}

impl File {
    pub fn metadata(&self) -> &Metadata {
        match self {
            File::Regular(file) => file.metadata(),
            File::Directory(dir) => dir.metadata(),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, File::Directory(_))
    }

    /// Reads everything from the current position to the end.
    /// Directories fail with [`Error::ReadNotSupported`].
    pub fn read_all(&mut self) -> Result<Vec<u8>> {
        match self {
            File::Regular(file) => {
                let end = file.content().len();
                let start = usize::try_from(file.position()).map_or(end, |pos| pos.min(end));
                let rest = file.content()[start..].to_vec();
                file.cursor.set_position(end as u64);
                Ok(rest)
            }
            File::Directory(dir) => Err(dir.read_error()),
        }
    }

    /// Nothing is held open, closing always succeeds.
    pub fn close(self) -> Result<()> {
        Ok(())
    }
}

impl Read for File {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            File::Regular(file) => file.read(buf),
            File::Directory(dir) => Err(dir.read_error().into()),
        }
    }
}
