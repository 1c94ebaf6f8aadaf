//! Branch-art formatter
//!
//! Draws the classic `tree` layout:
//!
//! ```text
//! root
//! ├── a
//! │   └── a1
//! └── b
//! ```
//!
//! Spaces in names are escaped with a backslash. Directory names are painted
//! when the sink supports color.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::error::ReadError;
use crate::tree::{Entry, WalkerConfig};

use super::Outputter;
use super::utils::{connector, continuation_prefix, escape};

/// Branch-art outputter for one directory node.
#[derive(Debug, Clone)]
pub struct TreeOutputter {
    path: PathBuf,
    /// Escaped text shown for this directory: the full path for a root,
    /// the base name otherwise.
    name: String,
    /// Prefix of this directory's own line.
    parent_branch: String,
    /// Prefix of the lines of this directory's children.
    branch: String,
}

impl TreeOutputter {
    fn write_dir_name<W: WriteColor>(&self, out: &mut W) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(out, "{}", self.name)?;
        out.reset()
    }
}

impl Outputter for TreeOutputter {
    fn root(path: &Path, _config: &WalkerConfig) -> Self {
        Self {
            path: path.to_path_buf(),
            name: escape(&path.to_string_lossy()),
            parent_branch: String::new(),
            branch: String::new(),
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn output_error<W: WriteColor>(
        &mut self,
        out: &mut W,
        err: &ReadError,
        _depth: usize,
    ) -> io::Result<()> {
        write!(out, "{}", self.parent_branch)?;
        self.write_dir_name(out)?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        write!(out, " [error {}]", err)?;
        out.reset()?;
        writeln!(out)
    }

    fn output_parent<W: WriteColor>(&mut self, out: &mut W, _depth: usize) -> io::Result<()> {
        write!(out, "{}", self.parent_branch)?;
        self.write_dir_name(out)?;
        writeln!(out)
    }

    fn output_file<W: WriteColor>(
        &mut self,
        out: &mut W,
        entry: &Entry,
        is_last: bool,
    ) -> io::Result<()> {
        writeln!(
            out,
            "{}{}{}",
            self.branch,
            connector(is_last),
            escape(&entry.display_name())
        )
    }

    /// Branch art has no closing delimiter.
    fn terminate<W: WriteColor>(&mut self, _out: &mut W, _depth: usize) -> io::Result<()> {
        Ok(())
    }

    fn child(&self, entry: &Entry, is_last: bool) -> Self {
        Self {
            path: self.path.join(entry.name()),
            name: escape(&entry.display_name()),
            parent_branch: format!("{}{}", self.branch, connector(is_last)),
            branch: continuation_prefix(&self.branch, is_last),
        }
    }
}
