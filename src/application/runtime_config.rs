use std::path::PathBuf;

use crate::cli::Cli;

/// Maximum nesting depth used when neither the command line nor the
/// settings file sets one
pub const DEFAULT_MAX_DEPTH: i64 = 20;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Inline tree drawing, `-` meaning stdin
    pub structure: Option<String>,
    pub input_file: Option<PathBuf>,
    pub max_depth: Option<i64>,
    /// Directory the tree is created in
    pub root: PathBuf,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            structure: None,
            input_file: None,
            max_depth: None,
            root: PathBuf::from("."),
        }
    }
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            structure: cli.structure,
            input_file: cli.input_file,
            max_depth: cli.max_depth,
            root: cli.root,
        }
    }
}
