use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntryType {
    File,
    Directory,
}

/// Stored node of an in-memory tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    entry_type: EntryType,
    content: Option<Vec<u8>>,
}

impl Entry {
    pub fn new(entry_type: EntryType) -> Entry {
        Entry {
            entry_type,
            content: None,
        }
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

    pub fn content(&self) -> Option<&Vec<u8>> {
        self.content.as_ref()
    }

    pub fn set_content(&mut self, content: &[u8]) {
        self.content = Some(content.to_vec());
    }
}

/// One child of a directory as reported by a backend listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child {
    pub name: String,
    pub entry_type: EntryType,
}

impl Child {
    pub fn new<S: Into<String>>(name: S, entry_type: EntryType) -> Child {
        Child {
            name: name.into(),
            entry_type,
        }
    }
}

/// A listed file or directory.
///
/// `name` is the base name, `path` is the containing directory: absolute, forward slashes,
/// one trailing `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirEntry {
    File { name: String, path: String },
    Directory { name: String, path: String },
}

impl DirEntry {
    pub fn new<N: Into<String>, P: Into<String>>(name: N, path: P, kind: EntryType) -> DirEntry {
        let (name, path) = (name.into(), path.into());
        match kind {
            EntryType::File => DirEntry::File { name, path },
            EntryType::Directory => DirEntry::Directory { name, path },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            DirEntry::File { name, .. } | DirEntry::Directory { name, .. } => name,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            DirEntry::File { path, .. } | DirEntry::Directory { path, .. } => path,
        }
    }

    pub fn entry_type(&self) -> EntryType {
        match self {
            DirEntry::File { .. } => EntryType::File,
            DirEntry::Directory { .. } => EntryType::Directory,
        }
    }

    pub fn is_file(&self) -> bool {
        self.entry_type() == EntryType::File
    }

    pub fn is_dir(&self) -> bool {
        self.entry_type() == EntryType::Directory
    }

    /// Containing directory joined with the name.
    pub fn full_path(&self) -> String {
        format!("{}{}", self.path(), self.name())
    }
}

impl fmt::Display for DirEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirEntry::File { .. } => write!(f, "{}", self.full_path()),
            DirEntry::Directory { .. } => write!(f, "{}/", self.full_path()),
        }
    }
}
