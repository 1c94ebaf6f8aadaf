//! Configuration types for tree walkers

/// Maximum traversal depth. The root sits at depth 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthLimit(Option<usize>);

impl DepthLimit {
    /// A limit of `n` levels; 0 means unlimited.
    pub fn new(levels: usize) -> Self {
        Self((levels > 0).then_some(levels))
    }

    pub fn unlimited() -> Self {
        Self(None)
    }

    pub fn get(&self) -> Option<usize> {
        self.0
    }

    /// True when a directory at `depth` must not list its contents.
    pub fn reached(&self, depth: usize) -> bool {
        self.0.is_some_and(|max| depth >= max)
    }
}

/// Output format, chosen once per run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Branch art with `├──` / `└──` connectors
    #[default]
    Tree,
    /// One JSON array per root
    Json,
    /// Paths with `{{{` / `}}}` fold markers for tree.vim
    Fold,
}

/// Configuration for tree walking behavior.
///
/// Built once before a walk and never mutated while it runs.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Include entries whose name starts with `.`
    pub show_all: bool,
    pub max_depth: DepthLimit,
    pub format: OutputFormat,
}

impl WalkerConfig {
    pub fn with_all_files(mut self) -> Self {
        self.show_all = true;
        self
    }

    pub fn with_level(mut self, levels: usize) -> Self {
        self.max_depth = DepthLimit::new(levels);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
