use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{ColorChoice, LogLevel};

/// Print the size, item count and listing of an in-memory directory tree.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Directory names to descend through, one level per name
    pub navigate: Vec<String>,

    /// YAML tree description to load instead of the demo tree
    #[clap(long, short)]
    pub tree: Option<PathBuf>,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// Highlight directory names
    #[clap(long, default_value = "auto", value_enum)]
    pub color: ColorChoice,
}
