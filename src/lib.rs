//! An in-memory, hierarchical file system for Rust.
//! Provides a filesystem-shaped API whose contents live entirely in process
//! memory. Ideal for testing, isolated sandboxing and embedding static or
//! virtual content.
//!
//! ### Overview
//!
//! `memfs-kit` lets you open, read, stat, list and write files and create
//! directories without touching the disk. The generic [`FsBackend`] trait
//! describes the operations; [`MemoryFS`] implements them on a tree of
//! directory nodes that own their children.
//!
//! **Key ideas**:
//! - **Tree storage**: every directory owns its subdirectories and files; paths
//!   are resolved one segment at a time.
//! - **Copy on write-in**: written content is copied, open handles share it read-only.
//! - **Deterministic listings**: `read_dir` is always sorted by name.
//! - **Typed errors**: [`Error`] tells "missing" apart from "already exists" and
//!   "cannot read a directory".
//!
//! ### Example
//!
//! ```
//! use memfs_kit::{FsBackend, MemoryFS};
//!
//! let mut fs = MemoryFS::new();
//! fs.mkdir_all("files/a/b/c", 0o700).unwrap();
//! fs.write_file("test.txt", b"hello world", 0o644).unwrap();
//! fs.write_file("files/a/b/c/note.txt", b":)", 0o644).unwrap();
//!
//! let names: Vec<_> = fs
//!     .read_dir(".")
//!     .unwrap()
//!     .iter()
//!     .map(|e| e.name().to_string())
//!     .collect();
//! assert_eq!(names, ["files", "test.txt"]);
//! assert_eq!(fs.stat("test.txt").unwrap().len(), 11);
//! ```

mod core;
mod vfs;

pub use crate::core::utils::cleanse;
pub use crate::core::{Error, ErrorKind, FsBackend, Result};
pub use vfs::{
    DirEntry, DirHandle, EntryType, File, FileHandle, MemFsConfig, MemoryFS, Metadata, ROOT_NAME,
    walk_dir,
};
