pub(crate) const SEPARATOR: char = '/';

/// Normalizes a caller supplied path into the inner form used by the tree.
///
/// Leading, trailing and repeated separators are removed, `.` segments are
/// skipped and `..` pops the previous segment (it never climbs above the root).
/// The root itself becomes an empty string.
///
/// ```
/// use memfs_kit::cleanse;
///
/// assert_eq!(cleanse("/files/./a/../b/"), "files/b");
/// assert_eq!(cleanse("."), "");
/// ```
pub fn cleanse(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split(SEPARATOR) {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            _ => parts.push(part),
        }
    }
    parts.join("/")
}

/// Splits off the first segment: `"a/b/c"` gives `("a", "b/c")`, `"a"` gives `("a", "")`.
pub(crate) fn split_first(path: &str) -> (&str, &str) {
    path.split_once(SEPARATOR).unwrap_or((path, ""))
}

/// Joins a child name onto a directory path; children of the root are not prefixed.
pub(crate) fn join(dir: &str, name: &str) -> String {
    if dir.is_empty() || dir == "." {
        name.to_string()
    } else {
        format!("{}{}{}", dir.trim_end_matches(SEPARATOR), SEPARATOR, name)
    }
}

pub(crate) fn is_root(path: &str) -> bool {
    path.is_empty() || path == "."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanse() {
        assert_eq!(cleanse(""), "");
        assert_eq!(cleanse("."), "");
        assert_eq!(cleanse("/"), "");
        assert_eq!(cleanse("./"), "");
        assert_eq!(cleanse("test.txt"), "test.txt");
        assert_eq!(cleanse("/files/a/"), "files/a");
        assert_eq!(cleanse("files//a///b"), "files/a/b");
        assert_eq!(cleanse("./files/./a"), "files/a");
        assert_eq!(cleanse("files/a/../b"), "files/b");
        assert_eq!(cleanse("../../files"), "files");
        assert_eq!(cleanse("files/a/b/c/.secret"), "files/a/b/c/.secret");
    }

    #[test]
    fn test_split_first() {
        assert_eq!(split_first("a/b/c"), ("a", "b/c"));
        assert_eq!(split_first("a"), ("a", ""));
        assert_eq!(split_first(""), ("", ""));
    }

    #[test]
    fn test_join() {
        assert_eq!(join(".", "files"), "files");
        assert_eq!(join("", "files"), "files");
        assert_eq!(join("files", "a"), "files/a");
        assert_eq!(join("files/a/", "b"), "files/a/b");
    }

    #[test]
    fn test_is_root() {
        assert!(is_root(""));
        assert!(is_root("."));
        assert!(!is_root("files"));
    }
}
