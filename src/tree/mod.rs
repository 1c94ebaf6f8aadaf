//! Directory tree walking logic
//!
//! The walker owns traversal: reading directories, filtering hidden entries,
//! sorting, and enforcing the depth limit. Everything about presentation is
//! delegated to an [`Outputter`](crate::output::Outputter).

mod config;
mod reader;
mod walker;

pub use config::{DepthLimit, OutputFormat, WalkerConfig};
pub use reader::{Entry, read_entries, sort_entries};
pub use walker::TreeWalker;
