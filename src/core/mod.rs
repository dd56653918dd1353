mod error;
pub(crate) mod utils;

pub use error::{Error, ErrorKind};

use crate::{DirEntry, File, Metadata};

pub type Result<T> = std::result::Result<T, Error>;

/// Filesystem-shaped API over slash separated, relative paths.
///
/// Paths are cleansed by the implementation, so `"/a/b/"`, `"a/./b"` and
/// `"a/b"` name the same entry and `""`/`"."` name the root.
pub trait FsBackend {
    /// Opens a file or a directory. Files are tried first.
    fn open(&self, path: &str) -> Result<File>;

    /// Returns metadata of a file or a directory without its content.
    fn stat(&self, path: &str) -> Result<Metadata>;

    /// Lists the immediate children of a directory, sorted by name.
    fn read_dir(&self, path: &str) -> Result<Vec<DirEntry>>;

    /// Stores `content` at `path`, replacing an existing file.
    /// The parent directory must exist.
    fn write_file(&mut self, path: &str, content: &[u8], mode: u32) -> Result<()>;

    /// Creates the directory and all missing parents.
    fn mkdir_all(&mut self, path: &str, mode: u32) -> Result<()>;

    /// Reads the whole content of a file.
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let mut file = self.open(path)?;
        let content = file.read_all()?;
        file.close()?;
        Ok(content)
    }
}
