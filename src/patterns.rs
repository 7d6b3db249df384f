//! The set of root markers that identify a project root.
//!
//! A pattern is a path relative to the directory being tested. A trailing
//! `/` is accepted for readability (`.git/`) and does not restrict the match
//! to directories.

/// Markers checked when no custom set is configured.
pub const DEFAULT_ROOT_PATTERNS: &[&str] = &[
    ".git/",
    ".hg/",
    ".svn/",
    "lib/",
    "bin/",
    "src/",
    "test/",
    "README.md",
    "README.txt",
    "README.markdown",
    "README",
];

/// Ordered, duplicate-free list of root markers.
///
/// Each [`ConfigFinder`](crate::ConfigFinder) owns its own copy; mutating it
/// never affects other finders or [`DEFAULT_ROOT_PATTERNS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootPatterns {
    patterns: Vec<String>,
}

impl Default for RootPatterns {
    fn default() -> Self {
        DEFAULT_ROOT_PATTERNS.iter().copied().collect()
    }
}

impl RootPatterns {
    /// A set with no markers. Only the home directory and the filesystem root
    /// stop a walk driven by an empty set.
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Append one or many patterns, skipping any already present.
    pub fn add<P: IntoRootPatterns>(&mut self, patterns: P) {
        for pattern in patterns.into_root_patterns() {
            self.insert(pattern);
        }
    }

    fn insert(&mut self, pattern: String) {
        if !self.contains(&pattern) {
            self.patterns.push(pattern);
        }
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.patterns.iter().any(|p| p == pattern)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for RootPatterns {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for RootPatterns {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for pattern in iter {
            self.insert(pattern.into());
        }
    }
}

/// Anything that can be added to a [`RootPatterns`] set: a single pattern or
/// a collection of them.
pub trait IntoRootPatterns {
    fn into_root_patterns(self) -> Vec<String>;
}

impl IntoRootPatterns for &str {
    fn into_root_patterns(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoRootPatterns for String {
    fn into_root_patterns(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoRootPatterns for &String {
    fn into_root_patterns(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl<S: Into<String>> IntoRootPatterns for Vec<S> {
    fn into_root_patterns(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<S: AsRef<str>> IntoRootPatterns for &[S] {
    fn into_root_patterns(self) -> Vec<String> {
        self.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: Into<String>, const N: usize> IntoRootPatterns for [S; N] {
    fn into_root_patterns(self) -> Vec<String> {
        self.into_iter().map(Into::into).collect()
    }
}

impl IntoRootPatterns for RootPatterns {
    fn into_root_patterns(self) -> Vec<String> {
        self.patterns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_copies_default_patterns() {
        let set = RootPatterns::default();
        assert_eq!(set.len(), DEFAULT_ROOT_PATTERNS.len());
        assert!(set.iter().eq(DEFAULT_ROOT_PATTERNS.iter().copied()));
    }

    #[test]
    fn add_single_pattern() {
        let mut set = RootPatterns::default();
        set.add(".foo");
        assert!(set.contains(".foo"));
        assert_eq!(set.len(), DEFAULT_ROOT_PATTERNS.len() + 1);
    }

    #[test]
    fn add_many_patterns() {
        let mut set = RootPatterns::empty();
        set.add(vec![".foo", ".bar"]);
        set.add([String::from("Cargo.toml")]);
        set.add(&["go.mod"][..]);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            [".foo", ".bar", "Cargo.toml", "go.mod"]
        );
    }

    #[test]
    fn adding_existing_pattern_is_a_noop() {
        let mut set = RootPatterns::default();
        set.add(".git/");
        set.add(vec![".git/", "src/"]);
        assert_eq!(set, RootPatterns::default());
    }

    #[test]
    fn duplicates_within_one_add_collapse() {
        let mut set = RootPatterns::empty();
        set.add(vec![".foo", ".foo", ".bar", ".foo"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn mutation_does_not_leak_into_fresh_defaults() {
        let mut set = RootPatterns::default();
        set.add(".foo");
        assert!(!RootPatterns::default().contains(".foo"));
    }

    #[test]
    fn collect_dedupes() {
        let set: RootPatterns = [".a", ".b", ".a"].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }
}
