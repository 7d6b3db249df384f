//! The upward walk.
//!
//! Starting from a directory, each step checks `{dir}/{file_name}`. If the
//! file is there the search succeeds. Otherwise the walk stops when `dir`
//! is a project root, the user's home directory, or the filesystem root,
//! and moves to the parent in every other case. Because every directory
//! eventually reaches the filesystem root, a walk takes at most as many
//! steps as the start directory is deep.
//!
//! The directory the walk ends in is classified with [`DirKind`], in this
//! order of precedence:
//!
//! 1. [`ProjectRoot`](DirKind::ProjectRoot): any root marker exists in it
//! 2. [`SystemRoot`](DirKind::SystemRoot): it has no parent
//! 3. [`UserRoot`](DirKind::UserRoot): it is the home directory
//! 4. [`Unknown`](DirKind::Unknown)
//!
//! A home directory that also holds a `.git/` is therefore a project root.

use std::path::{Path, PathBuf};

use crate::env::{self, Environment, SystemEnv};
use crate::error::FinderError;
use crate::options::FinderOptions;
use crate::patterns::{IntoRootPatterns, RootPatterns};
use crate::types::{DirKind, SearchResult};

/// Locates one named config file by walking up from a start directory.
///
/// ```no_run
/// use config_file_finder::ConfigFinder;
///
/// let mut finder = ConfigFinder::new(".config.yml");
/// finder.add_root_patterns(["Cargo.toml", "package.json"]);
/// let result = finder.find()?;
/// if result.is_success() {
///     println!("{}", result.path().display());
/// }
/// # Ok::<(), config_file_finder::FinderError>(())
/// ```
///
/// Searches borrow the finder immutably, so the pattern set cannot change
/// while a walk is in progress. Share a finder across threads only after it
/// is fully configured.
#[derive(Debug, Clone)]
pub struct ConfigFinder<E = SystemEnv> {
    file_name: String,
    options: FinderOptions,
    root_patterns: RootPatterns,
    env: E,
}

impl ConfigFinder<SystemEnv> {
    /// A finder for `file_name` using the default root markers and the real
    /// process environment.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self::with_options(file_name, FinderOptions::default())
    }

    pub fn with_options(file_name: impl Into<String>, options: FinderOptions) -> Self {
        Self {
            file_name: file_name.into(),
            options,
            root_patterns: RootPatterns::default(),
            env: SystemEnv,
        }
    }
}

impl<E: Environment> ConfigFinder<E> {
    /// Replace the environment the finder consults for cwd, home, and path
    /// existence.
    pub fn with_env<F: Environment>(self, env: F) -> ConfigFinder<F> {
        ConfigFinder {
            file_name: self.file_name,
            options: self.options,
            root_patterns: self.root_patterns,
            env,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn options(&self) -> &FinderOptions {
        &self.options
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn root_patterns(&self) -> &RootPatterns {
        &self.root_patterns
    }

    /// Replace the root markers wholesale.
    pub fn set_root_patterns(&mut self, patterns: RootPatterns) -> &mut Self {
        self.root_patterns = patterns;
        self
    }

    /// Add one or many root markers. Patterns already present are skipped.
    pub fn add_root_patterns<P: IntoRootPatterns>(&mut self, patterns: P) -> &mut Self {
        self.root_patterns.add(patterns);
        self
    }

    /// Whether any root marker exists relative to `dir`.
    pub fn is_project_root(&self, dir: &Path) -> bool {
        has_marker(&self.env, &self.root_patterns, dir)
    }

    /// Absolute paths of the root markers that exist relative to `dir`, in
    /// pattern order.
    pub fn detect_project_root_markers(&self, dir: &Path) -> Vec<PathBuf> {
        self.root_patterns
            .iter()
            .map(|pattern| env::resolve(dir, pattern))
            .filter(|marker| {
                let found = self.env.exists(marker);
                if found {
                    tracing::trace!(marker = %marker.display(), "root marker present");
                }
                found
            })
            .collect()
    }

    /// Classify `dir` as it is right now.
    pub fn dir_kind(&self, dir: &Path) -> DirKind {
        let home = self.home_dir();
        self.walk_context(home.as_deref()).classify(dir)
    }

    /// Search upward from the current working directory.
    pub fn find(&self) -> Result<SearchResult, FinderError> {
        let cwd = self.env.current_dir()?;
        Ok(self.walk(env::resolve(&cwd, "")))
    }

    /// Search upward from `start`. A relative `start` is taken relative to
    /// the current working directory.
    pub fn find_from(&self, start: impl AsRef<Path>) -> Result<SearchResult, FinderError> {
        let start = start.as_ref();
        let start = if start.is_absolute() {
            env::resolve(start, "")
        } else {
            env::resolve(&self.env.current_dir()?, start)
        };
        Ok(self.walk(start))
    }

    fn walk(&self, start: PathBuf) -> SearchResult {
        let home = self.home_dir();
        let ctx = self.walk_context(home.as_deref());
        let mut dir = start;

        loop {
            let candidate = env::resolve(&dir, &self.file_name);
            tracing::debug!(path = %candidate.display(), "checking for config file");
            if self.env.exists(&candidate) {
                let kind = ctx.classify(&dir);
                tracing::debug!(path = %candidate.display(), %kind, "found config file");
                return SearchResult::Found {
                    kind,
                    path: candidate,
                };
            }

            if ctx.is_boundary(&dir) {
                break;
            }

            match dir.parent() {
                Some(parent) => dir = parent.to_path_buf(),
                None => break,
            }
        }

        let kind = ctx.classify(&dir);
        tracing::debug!(dir = %dir.display(), %kind, "stopped without finding config file");
        SearchResult::not_found(&self.file_name, kind, dir)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.env.home_dir().map(|home| env::resolve(&home, ""))
    }

    fn walk_context<'a>(&'a self, home: Option<&'a Path>) -> WalkContext<'a, E> {
        WalkContext {
            env: &self.env,
            patterns: &self.root_patterns,
            home,
        }
    }
}

/// Everything one walk reads, fixed for the duration of the walk so the stop
/// test and the final classification agree.
struct WalkContext<'a, E> {
    env: &'a E,
    patterns: &'a RootPatterns,
    home: Option<&'a Path>,
}

impl<E: Environment> WalkContext<'_, E> {
    fn is_project_root(&self, dir: &Path) -> bool {
        has_marker(self.env, self.patterns, dir)
    }

    fn is_home(&self, dir: &Path) -> bool {
        self.home.is_some_and(|home| home == dir)
    }

    fn is_boundary(&self, dir: &Path) -> bool {
        self.is_project_root(dir) || self.is_home(dir) || env::is_system_root(dir)
    }

    fn classify(&self, dir: &Path) -> DirKind {
        if self.is_project_root(dir) {
            DirKind::ProjectRoot
        } else if env::is_system_root(dir) {
            DirKind::SystemRoot
        } else if self.is_home(dir) {
            DirKind::UserRoot
        } else {
            DirKind::Unknown
        }
    }
}

fn has_marker<E: Environment>(env: &E, patterns: &RootPatterns, dir: &Path) -> bool {
    patterns
        .iter()
        .any(|pattern| env.exists(&env::resolve(dir, pattern)))
}
