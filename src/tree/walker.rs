//! TreeWalker - depth-first traversal that drives an outputter

use std::io;
use std::path::Path;

use termcolor::WriteColor;
use tracing::{debug, trace, warn};

use crate::error::{ReadError, Result};
use crate::output::{FoldOutputter, JsonOutputter, Outputter, TreeOutputter};

use super::config::{OutputFormat, WalkerConfig};
use super::reader::read_entries;

/// Tree walker that streams each node to the configured outputter as soon as
/// it is read. Memory use is proportional to depth, not tree size.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Walk every root in order.
    ///
    /// A root that cannot be read is rendered as an error node and the next
    /// root is still walked. A failed write to `out` stops everything.
    pub fn walk<P, W>(&self, roots: &[P], out: &mut W) -> Result<()>
    where
        P: AsRef<Path>,
        W: WriteColor,
    {
        for root in roots {
            self.walk_root(root.as_ref(), out)?;
        }
        Ok(())
    }

    /// Walk a single root and flush the sink.
    pub fn walk_root<W: WriteColor>(&self, root: &Path, out: &mut W) -> Result<()> {
        debug!(root = %root.display(), format = ?self.config.format, "walking root");
        match self.config.format {
            OutputFormat::Tree => self.walk_with::<TreeOutputter, W>(root, out)?,
            OutputFormat::Json => self.walk_with::<JsonOutputter, W>(root, out)?,
            OutputFormat::Fold => self.walk_with::<FoldOutputter, W>(root, out)?,
        }
        out.flush()?;
        debug!(root = %root.display(), "finished root");
        Ok(())
    }

    fn walk_with<O: Outputter, W: WriteColor>(&self, root: &Path, out: &mut W) -> io::Result<()> {
        let mut outputter = O::root(root, &self.config);
        self.process(&mut outputter, out, 0)
    }

    fn process<O: Outputter, W: WriteColor>(
        &self,
        outputter: &mut O,
        out: &mut W,
        depth: usize,
    ) -> io::Result<()> {
        match read_entries(outputter.path(), self.config.show_all) {
            Err(err) => {
                let ReadError::Unavailable { path, source } = &err;
                warn!(path = %path.display(), error = %source, "cannot read directory");
                outputter.output_error(out, &err, depth)?;
            }
            Ok(entries) => {
                trace!(path = %outputter.path().display(), entries = entries.len(), depth, "read directory");
                outputter.output_parent(out, depth)?;

                if !self.config.max_depth.reached(depth) {
                    let count = entries.len();
                    for (i, entry) in entries.iter().enumerate() {
                        let is_last = i + 1 == count;
                        if entry.is_dir() {
                            let mut child = outputter.child(entry, is_last);
                            self.process(&mut child, out, depth + 1)?;
                        } else {
                            outputter.output_file(out, entry, is_last)?;
                        }
                    }
                }
            }
        }
        outputter.terminate(out, depth)
    }
}
