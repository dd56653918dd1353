//! Whole-tree traversal built only from `stat` and `read_dir`.

use crate::core::{FsBackend, Result, utils};
use crate::DirEntry;

/// Walks the tree rooted at `root` in pre-order and calls `visit` for every entry.
///
/// The root itself is visited first, then its children in listing order,
/// descending into each directory before moving on to the next sibling.
/// Paths passed to `visit` are `root` joined with the child names; children of
/// the root directory (`"."` or `""`) are reported without a `./` prefix.
///
/// The walk stops at the first error returned by the backend or by `visit`.
///
/// # Example:
/// ```
/// use memfs_kit::{FsBackend, MemoryFS, walk_dir};
///
/// let mut fs = MemoryFS::new();
/// fs.mkdir_all("docs/api", 0o755).unwrap();
/// fs.write_file("docs/readme.md", b"# Docs", 0o644).unwrap();
///
/// let mut seen = Vec::new();
/// walk_dir(&fs, ".", |path, _entry| {
///     seen.push(path.to_string());
///     Ok(())
/// })
/// .unwrap();
///
/// assert_eq!(seen, [".", "docs", "docs/api", "docs/readme.md"]);
/// ```
pub fn walk_dir<B, F>(fs: &B, root: &str, mut visit: F) -> Result<()>
where
    B: FsBackend + ?Sized,
    F: FnMut(&str, &DirEntry) -> Result<()>,
{
    let entry = DirEntry::from(fs.stat(root)?);
    walk_entry(fs, root, &entry, &mut visit)
}

fn walk_entry<B, F>(fs: &B, path: &str, entry: &DirEntry, visit: &mut F) -> Result<()>
where
    B: FsBackend + ?Sized,
    F: FnMut(&str, &DirEntry) -> Result<()>,
{
    visit(path, entry)?;
    if !entry.is_dir() {
        return Ok(());
    }
    for child in fs.read_dir(path)? {
        let child_path = utils::join(path, child.name());
        walk_entry(fs, &child_path, &child, visit)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, MemoryFS};

    /// Helper to create a pre‑populated MemoryFS instance for testing
    fn setup_test_vfs() -> MemoryFS {
        let mut vfs = MemoryFS::new();
        vfs.mkdir_all("files/a/b/c", 0o700).unwrap();
        vfs.write_file("test.txt", b"hello world", 0o644).unwrap();
        vfs.write_file("files/a/b/c/.secret", b"secret file!", 0o644)
            .unwrap();
        vfs.write_file("files/a/b/c/note.txt", b":)", 0o644).unwrap();
        vfs.write_file("files/a/middle.txt", b":(", 0o644).unwrap();
        vfs
    }

    fn collect(fs: &MemoryFS, root: &str) -> Result<Vec<(String, bool)>> {
        let mut entries = Vec::new();
        walk_dir(fs, root, |path, entry| {
            entries.push((path.to_string(), entry.is_dir()));
            Ok(())
        })?;
        Ok(entries)
    }

    #[test]
    fn test_walk_from_root() -> anyhow::Result<()> {
        let vfs = setup_test_vfs();
        let entries = collect(&vfs, ".")?;

        let expected = [
            (".", true),
            ("files", true),
            ("files/a", true),
            ("files/a/b", true),
            ("files/a/b/c", true),
            ("files/a/b/c/.secret", false),
            ("files/a/b/c/note.txt", false),
            ("files/a/middle.txt", false),
            ("test.txt", false),
        ];
        let expected: Vec<(String, bool)> = expected
            .iter()
            .map(|(path, is_dir)| (path.to_string(), *is_dir))
            .collect();
        assert_eq!(entries, expected);
        Ok(())
    }

    #[test]
    fn test_walk_subtree() -> anyhow::Result<()> {
        let vfs = setup_test_vfs();
        let paths: Vec<String> = collect(&vfs, "files/a/b")?
            .into_iter()
            .map(|(path, _)| path)
            .collect();
        assert_eq!(
            paths,
            ["files/a/b", "files/a/b/c", "files/a/b/c/.secret", "files/a/b/c/note.txt"]
        );
        Ok(())
    }

    #[test]
    fn test_walk_single_file() -> anyhow::Result<()> {
        let vfs = setup_test_vfs();
        assert_eq!(collect(&vfs, "test.txt")?, vec![("test.txt".to_string(), false)]);
        Ok(())
    }

    #[test]
    fn test_walk_missing_root() {
        let vfs = setup_test_vfs();
        assert!(collect(&vfs, "nope").unwrap_err().is_not_exist());
    }

    #[test]
    fn test_walk_stops_on_visitor_error() {
        let vfs = setup_test_vfs();
        let mut visited = 0;
        let result = walk_dir(&vfs, ".", |path, _| {
            visited += 1;
            if path == "files/a" {
                return Err(Error::NotExist { path: path.into() });
            }
            Ok(())
        });
        assert_eq!(result.unwrap_err().path(), "files/a");
        assert_eq!(visited, 3);
    }
}
