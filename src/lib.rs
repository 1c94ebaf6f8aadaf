//! Twig - print directory trees as branch art, JSON, or tree.vim folds

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ReadError, WalkError, exit_code};
pub use output::{
    FoldOutputter, JsonContent, JsonNode, JsonOutputter, Outputter, TreeOutputter,
};
pub use tree::{DepthLimit, Entry, OutputFormat, TreeWalker, WalkerConfig, read_entries};
