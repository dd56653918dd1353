use std::io;

use thiserror::Error;

/// Failure classes produced while resolving or mutating the tree.
///
/// Inner tree operations report only the kind; the root handle attaches the
/// requested path when it builds the public [`Error`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A path segment does not name an entry where one is required.
    NotExist,
    /// A directory and a file would share the same name.
    AlreadyExists,
    /// Content was read from a directory handle.
    ReadNotSupported,
}

/// Errors returned by the file system.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no such file or directory: {path}")]
    NotExist { path: String },
    #[error("file exists: {path}")]
    AlreadyExists { path: String },
    #[error("cannot read directory: {path}")]
    ReadNotSupported { path: String },
}

impl Error {
    pub fn new(kind: ErrorKind, path: impl Into<String>) -> Self {
        let path = path.into();
        match kind {
            ErrorKind::NotExist => Self::NotExist { path },
            ErrorKind::AlreadyExists => Self::AlreadyExists { path },
            ErrorKind::ReadNotSupported => Self::ReadNotSupported { path },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotExist { .. } => ErrorKind::NotExist,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::ReadNotSupported { .. } => ErrorKind::ReadNotSupported,
        }
    }

    /// The cleansed path the failing operation was called with.
    pub fn path(&self) -> &str {
        match self {
            Self::NotExist { path }
            | Self::AlreadyExists { path }
            | Self::ReadNotSupported { path } => path,
        }
    }

    pub fn is_not_exist(&self) -> bool {
        self.kind() == ErrorKind::NotExist
    }

    pub fn is_already_exists(&self) -> bool {
        self.kind() == ErrorKind::AlreadyExists
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        let kind = match err.kind() {
            ErrorKind::NotExist => io::ErrorKind::NotFound,
            ErrorKind::AlreadyExists => io::ErrorKind::AlreadyExists,
            ErrorKind::ReadNotSupported => io::ErrorKind::Unsupported,
        };
        io::Error::new(kind, err)
    }
}
