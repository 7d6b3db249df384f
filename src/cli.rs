//! Clap adapter for config-file-finder.
//!
//! Compiled only with the `clap` Cargo feature (on by default). [`FindArgs`]
//! is a clap derive struct an application can flatten into its own parser to
//! expose a "find my config file" command. [`FindArgs::into_finder()`] is the
//! only bridge to the core; everything after that goes through
//! [`ConfigFinder`].

use std::path::PathBuf;

use clap::Args;

use crate::finder::ConfigFinder;
use crate::patterns::RootPatterns;
use crate::types::SearchResult;

/// Clap-derived arguments for a config file search.
#[derive(Debug, Clone, Args)]
pub struct FindArgs {
    /// Name of the config file to look for (e.g. ".config.yml").
    pub file_name: String,

    /// Extra root marker, relative to each directory (repeatable).
    #[arg(short = 'r', long = "root-pattern", value_name = "PATTERN")]
    pub root_patterns: Vec<String>,

    /// Only use the markers given with --root-pattern.
    #[arg(long)]
    pub no_default_patterns: bool,

    /// Start the search here instead of the current directory.
    #[arg(long, value_name = "DIR")]
    pub from: Option<PathBuf>,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

impl FindArgs {
    /// Build a finder configured from these arguments.
    pub fn into_finder(self) -> ConfigFinder {
        let mut finder = ConfigFinder::new(self.file_name);
        if self.no_default_patterns {
            finder.set_root_patterns(RootPatterns::empty());
        }
        finder.add_root_patterns(self.root_patterns);
        finder
    }
}

/// One-line, human-readable rendering: the found path on success, the
/// failure message otherwise.
pub fn render_human(result: &SearchResult) -> String {
    match result {
        SearchResult::Found { path, .. } => path.display().to_string(),
        SearchResult::NotFound { message, .. } => message.clone(),
    }
}
