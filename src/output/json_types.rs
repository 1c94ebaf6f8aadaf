//! Typed model of the JSON output
//!
//! [`JsonOutputter`](super::JsonOutputter) streams text directly, but every
//! array it produces parses into `Vec<JsonNode>`. File objects are serialized
//! through this model so the wire shape has a single definition.

use serde::{Deserialize, Serialize};

/// A file or directory object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JsonNode {
    File {
        name: String,
    },
    Directory {
        name: String,
        contents: Vec<JsonContent>,
    },
}

/// An element of a directory's `contents` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonContent {
    /// Marker for a directory that could not be read
    Error { error: String },
    Node(JsonNode),
}

impl JsonNode {
    pub fn name(&self) -> &str {
        match self {
            JsonNode::File { name } => name,
            JsonNode::Directory { name, .. } => name,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, JsonNode::Directory { .. })
    }

    /// Child nodes of a directory, skipping error markers.
    pub fn children(&self) -> impl Iterator<Item = &JsonNode> {
        let contents: &[JsonContent] = match self {
            JsonNode::Directory { contents, .. } => contents,
            JsonNode::File { .. } => &[],
        };
        contents.iter().filter_map(|c| match c {
            JsonContent::Node(node) => Some(node),
            JsonContent::Error { .. } => None,
        })
    }

    /// Error message recorded for a directory that could not be read.
    pub fn error(&self) -> Option<&str> {
        match self {
            JsonNode::Directory { contents, .. } => contents.iter().find_map(|c| match c {
                JsonContent::Error { error } => Some(error.as_str()),
                JsonContent::Node(_) => None,
            }),
            JsonNode::File { .. } => None,
        }
    }
}
