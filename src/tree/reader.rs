//! Directory listing: the one filesystem primitive the walker needs.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

use crate::error::ReadError;

/// One child of a directory, as seen by a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: OsString,
    is_dir: bool,
}

impl Entry {
    pub fn new(name: impl Into<OsString>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            is_dir,
        }
    }

    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Name for display; invalid UTF-8 is replaced.
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    pub fn is_hidden(&self) -> bool {
        self.name.as_encoded_bytes().first() == Some(&b'.')
    }
}

/// Read, filter, and sort the immediate children of `path`.
///
/// Hidden entries are dropped unless `show_all` is set. The result is sorted
/// byte-wise by name. Symlinks are reported as files: the entry type comes
/// from the directory listing and is never followed.
pub fn read_entries(path: &Path, show_all: bool) -> Result<Vec<Entry>, ReadError> {
    let unavailable = |source| ReadError::Unavailable {
        path: path.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for dir_entry in fs::read_dir(path).map_err(unavailable)? {
        let dir_entry = dir_entry.map_err(unavailable)?;
        let file_type = dir_entry.file_type().map_err(unavailable)?;
        let entry = Entry::new(dir_entry.file_name(), file_type.is_dir());
        if !show_all && entry.is_hidden() {
            continue;
        }
        entries.push(entry);
    }

    sort_entries(&mut entries);
    Ok(entries)
}

/// Sort by raw name bytes, case-sensitive.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| a.name.as_encoded_bytes().cmp(b.name.as_encoded_bytes()));
}
