//! Editor-fold output for tree.vim
//!
//! Every line is a full path so the editor can open it directly. Directories
//! end with a separator and open a `{{{` fold that their last line closes
//! with `}}}`. The root contributes two navigation lines, `<root>/../` and
//! `<root>/./`.
//!
//! Unreadable directories produce no output at all in this format, not even
//! their own line.

use std::io::{self, Write};
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use termcolor::WriteColor;

use crate::error::ReadError;
use crate::tree::{DepthLimit, Entry, WalkerConfig};

use super::Outputter;
use super::utils::{clean_path, escape, join_clean};

const FOLD_OPEN: &str = "{{{";
const FOLD_CLOSE: &str = "}}}";

/// Fold-marker outputter for one directory node.
#[derive(Debug, Clone)]
pub struct FoldOutputter {
    path: PathBuf,
    /// Indent of this directory's own line.
    parent_indent: String,
    /// Indent of this directory's children.
    indent: String,
    max_depth: DepthLimit,
    failed: bool,
}

impl FoldOutputter {
    fn display_path(&self) -> String {
        escape(&self.path.to_string_lossy())
    }
}

impl Outputter for FoldOutputter {
    fn root(path: &Path, config: &WalkerConfig) -> Self {
        Self {
            path: clean_path(path),
            parent_indent: String::new(),
            indent: String::new(),
            max_depth: config.max_depth,
            failed: false,
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn output_error<W: WriteColor>(
        &mut self,
        _out: &mut W,
        _err: &ReadError,
        _depth: usize,
    ) -> io::Result<()> {
        // tree.vim has no error representation; the node is skipped entirely.
        self.failed = true;
        Ok(())
    }

    fn output_parent<W: WriteColor>(&mut self, out: &mut W, depth: usize) -> io::Result<()> {
        let path = self.display_path();
        if depth == 0 {
            return write!(
                out,
                "{path}{sep}..{sep}\n{path}{sep}.{sep}",
                sep = MAIN_SEPARATOR
            );
        }

        write!(out, "\n{}{}{}", self.parent_indent, path, MAIN_SEPARATOR)?;
        if !self.max_depth.reached(depth) {
            out.write_all(FOLD_OPEN.as_bytes())?;
        }
        Ok(())
    }

    fn output_file<W: WriteColor>(
        &mut self,
        out: &mut W,
        entry: &Entry,
        _is_last: bool,
    ) -> io::Result<()> {
        let path = join_clean(&self.path, entry.name());
        write!(out, "\n{}{}", self.indent, escape(&path.to_string_lossy()))
    }

    fn terminate<W: WriteColor>(&mut self, out: &mut W, depth: usize) -> io::Result<()> {
        if self.failed {
            return Ok(());
        }
        if depth == 0 {
            return out.write_all(b"\n");
        }
        if self.max_depth.reached(depth) {
            return Ok(());
        }
        out.write_all(FOLD_CLOSE.as_bytes())
    }

    fn child(&self, entry: &Entry, _is_last: bool) -> Self {
        Self {
            path: join_clean(&self.path, entry.name()),
            parent_indent: self.indent.clone(),
            indent: format!("{}  ", self.indent),
            max_depth: self.max_depth,
            failed: false,
        }
    }
}
