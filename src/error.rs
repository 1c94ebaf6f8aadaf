//! Error types for twig.
//!
//! Two kinds of failure exist. A directory that cannot be listed is a
//! [`ReadError`]: it is rendered in place and the walk moves on. A sink that
//! refuses bytes is a [`WalkError`]: it aborts the whole run.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A directory could not be opened or listed.
///
/// The display text is the short marker embedded in rendered output; the
/// underlying OS error stays available through [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("opening dir")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReadError {
    pub fn path(&self) -> &Path {
        match self {
            ReadError::Unavailable { path, .. } => path,
        }
    }
}

/// Unrecoverable failure during a walk.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

/// Specialized Result type for walks.
pub type Result<T> = std::result::Result<T, WalkError>;

/// Map an error to its exit code.
pub fn exit_code(error: &WalkError) -> i32 {
    match error {
        WalkError::Output(_) => 1,
    }
}
