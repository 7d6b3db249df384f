#[cfg(test)]
pub mod test {
    use std::collections::HashSet;
    use std::io;
    use std::path::{Path, PathBuf};

    use crate::env::Environment;
    use crate::error::FinderError;

    /// In-memory environment: a fixed cwd and home, and an explicit list of
    /// paths that exist. Everything else does not.
    #[derive(Debug, Clone, Default)]
    pub struct FakeEnv {
        pub cwd: Option<PathBuf>,
        pub home: Option<PathBuf>,
        pub existing: HashSet<PathBuf>,
    }

    impl FakeEnv {
        pub fn new(cwd: &str, home: &str) -> Self {
            Self {
                cwd: Some(cwd.into()),
                home: Some(home.into()),
                existing: HashSet::new(),
            }
        }

        pub fn with(mut self, path: &str) -> Self {
            self.existing.insert(path.into());
            self
        }
    }

    impl Environment for FakeEnv {
        fn current_dir(&self) -> Result<PathBuf, FinderError> {
            self.cwd.clone().ok_or_else(|| FinderError::CurrentDir {
                source: io::Error::new(io::ErrorKind::NotFound, "no cwd"),
            })
        }

        fn home_dir(&self) -> Option<PathBuf> {
            self.home.clone()
        }

        fn exists(&self, path: &Path) -> bool {
            self.existing.contains(path)
        }
    }

    /// The layout used throughout the finder tests.
    pub const USER_ROOT: &str = "/users/me";
    pub const PROJECT_ROOT: &str = "/users/me/project/root";
    pub const PROJECT_CHILD: &str = "/users/me/project/root/child";
    pub const CONFIG_NAME: &str = ".config.yml";
}
