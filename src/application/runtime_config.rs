use std::path::PathBuf;

use crate::cli::Cli;

#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// Directory names to descend through before reporting
    pub navigate: Vec<String>,
    /// Tree description file, the demo tree when absent
    pub description: Option<PathBuf>,
    pub highlight: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            navigate: cli.navigate,
            description: cli.tree,
            highlight: cli.color.should_highlight(),
        }
    }
}
