//! Shared utility functions for output formatting

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Connector drawn before an entry in branch art.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}

/// Calculate the branch prefix for entries below a child directory.
pub fn continuation_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}

/// Escape spaces with a backslash so names stay shell- and editor-friendly.
pub fn escape(s: &str) -> String {
    s.replace(' ', "\\ ")
}

/// Lexically clean a path: drop `.` segments and trailing separators,
/// collapse `name/..` pairs, and return `.` for an empty result.
///
/// The filesystem is never consulted, so symlinks are not resolved.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Join `name` onto `base` and clean the result.
pub fn join_clean(base: &Path, name: &OsStr) -> PathBuf {
    clean_path(&base.join(name))
}
