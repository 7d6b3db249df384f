//! Find a named config file by walking up from the working directory.
//!
//! ```ignore
//! let result = ConfigFinder::new(".config.yml").find()?;
//! match result {
//!     SearchResult::Found { path, .. } => load(&path),
//!     SearchResult::NotFound { message, .. } => eprintln!("{message}"),
//! }
//! ```
//!
//! That call looks for `.config.yml` in the current directory, then in each
//! parent, until it finds the file or reaches a directory where searching
//! should stop.
//!
//! # Where the walk stops
//!
//! A walk ends at the first directory that satisfies any of:
//!
//! - **Project root**: one of the configured root markers exists in it.
//! - **User root**: it is the current user's home directory.
//! - **System root**: it is the filesystem root.
//!
//! The file is checked *before* the stop test, so a config file sitting in
//! the project root (or home, or `/`) is still found. Nothing above a project
//! root is ever examined: a repository's settings never leak in from a
//! directory that happens to contain it.
//!
//! # Root markers
//!
//! The default markers cover version control directories, conventional
//! source layouts, and README files:
//!
//! ```text
//! .git/ .hg/ .svn/ lib/ bin/ src/ test/ README.md README.txt README.markdown README
//! ```
//!
//! [`add_root_patterns()`](ConfigFinder::add_root_patterns) takes either one
//! pattern or a collection and skips duplicates;
//! [`set_root_patterns()`](ConfigFinder::set_root_patterns) replaces the set.
//! Each finder owns its own copy, so mutating one never affects another.
//!
//! # Results
//!
//! A search returns [`SearchResult`]: `Found` carries the absolute path of
//! the config file, `NotFound` carries the directory the walk stopped in and
//! a message such as
//!
//! ```text
//! Couldn't find config file .config.yml, stopping search at project root directory
//! ```
//!
//! Both variants carry the [`DirKind`] of that directory. A result
//! serializes to the report shape
//! `{"result": "failed", "files": [{"project_root": "/path"}], "message": "..."}`.
//!
//! Not finding the file is an ordinary result, never an error. The only
//! [`FinderError`] is failing to learn the current working directory.
//!
//! # Testing
//!
//! The walk reads the outside world only through [`Environment`]. Supply
//! your own implementation with [`with_env()`](ConfigFinder::with_env) to
//! run searches against a synthetic directory tree.
//!
//! # Logging
//!
//! Each step of a walk emits a `tracing` event at `debug` level. Nothing is
//! printed unless the application installs a subscriber.

pub mod env;
pub mod error;
pub mod patterns;
pub mod types;

#[cfg(feature = "clap")]
mod cli;
mod finder;
mod options;

#[cfg(test)]
mod fixtures;

#[cfg(feature = "clap")]
pub use cli::{FindArgs, render_human};
pub use env::{Environment, SystemEnv};
pub use error::FinderError;
pub use finder::ConfigFinder;
pub use options::FinderOptions;
pub use patterns::{DEFAULT_ROOT_PATTERNS, IntoRootPatterns, RootPatterns};
pub use types::{DirKind, Outcome, SearchResult, Tag};
