use crate::domain::{ColumnPolicy, EmojiResolver, FacadConfig};
use crate::ports::GitPort;

/// Application context holding dependencies for command execution.
pub struct AppContext<G: GitPort> {
    git: G,
    config: FacadConfig,
    resolver: EmojiResolver,
    columns: ColumnPolicy,
    term_width: usize,
}

impl<G: GitPort> AppContext<G> {
    /// Create a new application context; emoji and column tables are derived
    /// from `config`.
    pub fn new(git: G, config: FacadConfig, term_width: usize) -> Self {
        let resolver = EmojiResolver::new(&config.emoji);
        let columns = ColumnPolicy::from_config(&config);
        Self { git, config, resolver, columns, term_width }
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    pub fn config(&self) -> &FacadConfig {
        &self.config
    }

    pub fn resolver(&self) -> &EmojiResolver {
        &self.resolver
    }

    pub fn columns(&self) -> &ColumnPolicy {
        &self.columns
    }

    /// Terminal width the grid is laid out for.
    pub fn term_width(&self) -> usize {
        self.term_width
    }
}
