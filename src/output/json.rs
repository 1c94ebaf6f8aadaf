//! JSON output formatting
//!
//! Each root is wrapped in its own top-level array, so several roots produce
//! several arrays one after another. Objects are indented two spaces per
//! level and commas are placed using the last-sibling flag.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use termcolor::WriteColor;

use crate::error::ReadError;
use crate::tree::{Entry, WalkerConfig};

use super::Outputter;
use super::json_types::JsonNode;

/// JSON outputter for one directory node.
#[derive(Debug, Clone)]
pub struct JsonOutputter {
    path: PathBuf,
    /// `"name"` value: the full path for a root, the base name otherwise.
    name: String,
    indent: String,
    is_last: bool,
}

impl JsonOutputter {
    fn write_header<W: WriteColor>(&self, out: &mut W, depth: usize) -> io::Result<()> {
        if depth == 0 {
            out.write_all(b"[\n")?;
        }
        write!(out, "{}{{\"type\":\"directory\",\"name\":", self.indent)?;
        serde_json::to_writer(&mut *out, &self.name)?;
        out.write_all(b",\"contents\":[")
    }

    fn write_separator<W: WriteColor>(out: &mut W, is_last: bool) -> io::Result<()> {
        if is_last {
            out.write_all(b"\n")
        } else {
            out.write_all(b",\n")
        }
    }
}

impl Outputter for JsonOutputter {
    fn root(path: &Path, _config: &WalkerConfig) -> Self {
        Self {
            path: path.to_path_buf(),
            name: path.to_string_lossy().into_owned(),
            indent: "  ".to_string(),
            is_last: true,
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn output_error<W: WriteColor>(
        &mut self,
        out: &mut W,
        err: &ReadError,
        depth: usize,
    ) -> io::Result<()> {
        self.write_header(out, depth)?;
        out.write_all(b"{\"error\": ")?;
        serde_json::to_writer(&mut *out, &err.to_string())?;
        out.write_all(b"}\n")
    }

    fn output_parent<W: WriteColor>(&mut self, out: &mut W, depth: usize) -> io::Result<()> {
        self.write_header(out, depth)?;
        out.write_all(b"\n")
    }

    fn output_file<W: WriteColor>(
        &mut self,
        out: &mut W,
        entry: &Entry,
        is_last: bool,
    ) -> io::Result<()> {
        write!(out, "{}  ", self.indent)?;
        let node = JsonNode::File {
            name: entry.display_name(),
        };
        serde_json::to_writer(&mut *out, &node)?;
        Self::write_separator(out, is_last)
    }

    /// Close `contents` and the object. A depth-limited or unreadable
    /// directory is closed here too, leaving its array empty.
    fn terminate<W: WriteColor>(&mut self, out: &mut W, depth: usize) -> io::Result<()> {
        write!(out, "{}]}}", self.indent)?;
        Self::write_separator(out, self.is_last)?;
        if depth == 0 {
            out.write_all(b"]\n")?;
        }
        Ok(())
    }

    fn child(&self, entry: &Entry, is_last: bool) -> Self {
        Self {
            path: self.path.join(entry.name()),
            name: entry.display_name(),
            indent: format!("{}  ", self.indent),
            is_last,
        }
    }
}
