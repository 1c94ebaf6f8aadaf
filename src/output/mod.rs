//! Output formatting for walked trees
//!
//! Every format implements [`Outputter`]. One outputter exists per directory
//! node; the walker creates the root one, derives children with
//! [`Outputter::child`] and drops each when its subtree is done. For every
//! outputter the walker makes exactly this sequence of calls:
//!
//! 1. `output_parent` (or `output_error` when the directory cannot be read)
//! 2. zero or more `output_file` / `child` calls in sorted name order
//! 3. `terminate`
//!
//! Outputters never own the sink. It is passed into each call, so only the
//! active outputter writes to it.
//!
//! - [`TreeOutputter`]: branch art, the default
//! - [`JsonOutputter`]: one JSON array per root
//! - [`FoldOutputter`]: paths with fold markers for tree.vim

mod fold;
mod json;
mod json_types;
mod tree;
pub mod utils;

use std::io;
use std::path::Path;

use termcolor::WriteColor;

use crate::error::ReadError;
use crate::tree::{Entry, WalkerConfig};

pub use fold::FoldOutputter;
pub use json::JsonOutputter;
pub use json_types::{JsonContent, JsonNode};
pub use tree::TreeOutputter;

/// Renders one directory node and its immediate children.
pub trait Outputter: Sized {
    /// Create the outputter for a root path.
    fn root(path: &Path, config: &WalkerConfig) -> Self;

    /// Path of the directory this outputter renders.
    fn path(&self) -> &Path;

    /// Announce a directory that could not be read.
    fn output_error<W: WriteColor>(
        &mut self,
        out: &mut W,
        err: &ReadError,
        depth: usize,
    ) -> io::Result<()>;

    /// Announce this directory. `depth` is 0 for a root.
    fn output_parent<W: WriteColor>(&mut self, out: &mut W, depth: usize) -> io::Result<()>;

    /// Emit a non-directory entry.
    fn output_file<W: WriteColor>(
        &mut self,
        out: &mut W,
        entry: &Entry,
        is_last: bool,
    ) -> io::Result<()>;

    /// Close this directory.
    fn terminate<W: WriteColor>(&mut self, out: &mut W, depth: usize) -> io::Result<()>;

    /// Derive the outputter for subdirectory `entry`.
    fn child(&self, entry: &Entry, is_last: bool) -> Self;
}
