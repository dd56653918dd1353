use std::time::SystemTime;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntryType {
    File,
    Directory,
}

/// File info of a single entry: what `stat` returns and what every listing item carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    name: String,
    len: u64,
    modified: SystemTime,
    entry_type: EntryType,
    mode: u32,
}

impl Metadata {
    pub(crate) fn new(name: &str, len: u64, entry_type: EntryType, mode: u32) -> Metadata {
        Metadata {
            name: name.to_string(),
            len,
            modified: SystemTime::now(),
            entry_type,
            mode,
        }
    }

    /// Base name of the entry. The root directory is called `.`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Content length for files, a synthetic constant for directories.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn modified(&self) -> SystemTime {
        self.modified
    }

    /// Permission bits as given on creation. They are stored, never enforced.
    pub fn mode(&self) -> u32 {
        self.mode
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::File
    }

    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Directory
    }

    pub(crate) fn touch(&mut self) {
        self.modified = SystemTime::now();
    }
}

/// One item of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    info: Metadata,
}

impl DirEntry {
    pub fn name(&self) -> &str {
        self.info.name()
    }

    pub fn entry_type(&self) -> EntryType {
        self.info.entry_type()
    }

    pub fn is_file(&self) -> bool {
        self.info.is_file()
    }

    pub fn is_dir(&self) -> bool {
        self.info.is_dir()
    }

    pub fn metadata(&self) -> &Metadata {
        &self.info
    }
}

impl From<Metadata> for DirEntry {
    fn from(info: Metadata) -> Self {
        DirEntry { info }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_metadata() {
        let info = Metadata::new("note.txt", 2, EntryType::File, 0o644);
        assert_eq!(info.name(), "note.txt");
        assert_eq!(info.len(), 2);
        assert_eq!(info.mode(), 0o644);
        assert!(info.is_file());
        assert!(!info.is_dir());
        assert!(!info.is_empty());
    }

    #[test]
    fn test_touch_moves_modified_forward() {
        let mut info = Metadata::new("docs", 0x100, EntryType::Directory, 0o700);
        let before = info.modified();
        std::thread::sleep(std::time::Duration::from_millis(5));
        info.touch();
        assert!(info.modified() > before);
    }

    #[test]
    fn test_dir_entry_from_metadata() {
        let entry = DirEntry::from(Metadata::new("docs", 0x100, EntryType::Directory, 0o700));
        assert_eq!(entry.name(), "docs");
        assert_eq!(entry.entry_type(), EntryType::Directory);
        assert!(entry.is_dir());
        assert_eq!(entry.metadata().len(), 0x100);
    }
}
