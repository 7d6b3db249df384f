//! The outside world a search depends on.
//!
//! [`Environment`] is the seam between the walk and the process: where the
//! walk starts, where the user's home is, and whether a path exists. The
//! walk itself does no other I/O, so swapping in a synthetic environment
//! makes every scenario testable without touching the real filesystem or
//! the process working directory.

use std::path::{Component, Path, PathBuf};

use crate::error::FinderError;

/// Capabilities a [`ConfigFinder`](crate::ConfigFinder) needs from its
/// surroundings.
pub trait Environment {
    /// Directory the walk starts from when no explicit start is given.
    fn current_dir(&self) -> Result<PathBuf, FinderError>;

    /// The current user's home directory, if one can be determined. When
    /// `None`, the user-root stop never triggers.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Whether a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

impl<E: Environment + ?Sized> Environment for &E {
    fn current_dir(&self) -> Result<PathBuf, FinderError> {
        (**self).current_dir()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        (**self).home_dir()
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

/// The real process environment and filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl Environment for SystemEnv {
    fn current_dir(&self) -> Result<PathBuf, FinderError> {
        std::env::current_dir().map_err(|source| FinderError::CurrentDir { source })
    }

    fn home_dir(&self) -> Option<PathBuf> {
        let user = directories::UserDirs::new()?;
        Some(user.home_dir().to_path_buf())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Join `relative` onto `base` and normalise the result lexically.
///
/// `..` removes the previous component (never climbing above the root), `.`
/// and trailing separators are dropped, and an absolute `relative` replaces
/// `base` entirely. Symlinks are not resolved.
pub fn resolve(base: &Path, relative: impl AsRef<Path>) -> PathBuf {
    let joined = base.join(relative);
    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Whether `dir` is the filesystem root, i.e. has no parent.
pub fn is_system_root(dir: &Path) -> bool {
    dir.parent().is_none()
}
