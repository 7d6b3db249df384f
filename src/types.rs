//! Classification of the directories a search visits, and the value a search
//! returns.
//!
//! Every search ends in exactly one directory. That directory is classified
//! by [`DirKind`]; the kind is then paired with either the config file found
//! there ([`SearchResult::Found`]) or with the directory itself when the walk
//! gave up ([`SearchResult::NotFound`]).
//!
//! The string tags used by reports (`project_root_config`, `user_root`, ...)
//! are derived from [`Tag`] rather than stored, so callers can match on the
//! enum and still print the familiar keys.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

/// What kind of directory a search stopped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DirKind {
    /// Contains at least one root marker (`.git/`, `src/`, `README.md`, ...).
    ProjectRoot,
    /// The current user's home directory.
    UserRoot,
    /// The filesystem root.
    SystemRoot,
    /// None of the above.
    Unknown,
}

impl DirKind {
    /// Snake-case tag, e.g. `"project_root"`.
    pub fn as_str(self) -> &'static str {
        match self {
            DirKind::ProjectRoot => "project_root",
            DirKind::UserRoot => "user_root",
            DirKind::SystemRoot => "system_root",
            DirKind::Unknown => "unknown",
        }
    }

    /// Human form used in messages, e.g. `"project root"`.
    pub fn describe(self) -> &'static str {
        match self {
            DirKind::ProjectRoot => "project root",
            DirKind::UserRoot => "user root",
            DirKind::SystemRoot => "system root",
            DirKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DirKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Key of a result entry: a directory kind, optionally in its config-file form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag {
    pub kind: DirKind,
    /// `true` when the entry points at the found config file rather than at
    /// the stopping directory.
    pub config: bool,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.config {
            write!(f, "{}_config", self.kind.as_str())
        } else {
            f.write_str(self.kind.as_str())
        }
    }
}

/// Coarse outcome of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failed,
}

/// The result of one walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The config file exists at `path`, inside a directory of kind `kind`.
    Found { kind: DirKind, path: PathBuf },
    /// The walk stopped at `dir` without finding the file.
    NotFound {
        kind: DirKind,
        dir: PathBuf,
        message: String,
    },
}

impl SearchResult {
    pub(crate) fn not_found(file_name: &str, kind: DirKind, dir: PathBuf) -> Self {
        let message = format!(
            "Couldn't find config file {file_name}, stopping search at {kind} directory"
        );
        SearchResult::NotFound { kind, dir, message }
    }

    pub fn outcome(&self) -> Outcome {
        match self {
            SearchResult::Found { .. } => Outcome::Success,
            SearchResult::NotFound { .. } => Outcome::Failed,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome() == Outcome::Success
    }

    pub fn is_failure(&self) -> bool {
        self.outcome() == Outcome::Failed
    }

    /// Kind of the directory the search ended in.
    pub fn kind(&self) -> DirKind {
        match self {
            SearchResult::Found { kind, .. } | SearchResult::NotFound { kind, .. } => *kind,
        }
    }

    pub fn tag(&self) -> Tag {
        Tag {
            kind: self.kind(),
            config: self.is_success(),
        }
    }

    /// The found config file on success, the stopping directory on failure.
    pub fn path(&self) -> &Path {
        match self {
            SearchResult::Found { path, .. } => path,
            SearchResult::NotFound { dir, .. } => dir,
        }
    }

    /// Failure message. Always `None` on success.
    pub fn message(&self) -> Option<&str> {
        match self {
            SearchResult::Found { .. } => None,
            SearchResult::NotFound { message, .. } => Some(message.as_str()),
        }
    }

    /// The single `tag => path` entry, as a one-element slice-like array.
    pub fn entries(&self) -> [(Tag, &Path); 1] {
        [(self.tag(), self.path())]
    }

    /// Process exit code for command-line callers.
    pub fn exit_code(&self) -> u8 {
        match self.outcome() {
            Outcome::Success => 0,
            Outcome::Failed => 1,
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    result: Outcome,
    files: [BTreeMap<String, &'a Path>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

impl Serialize for SearchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entry = BTreeMap::from([(self.tag().to_string(), self.path())]);
        Report {
            result: self.outcome(),
            files: [entry],
            message: self.message(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn found() -> SearchResult {
        SearchResult::Found {
            kind: DirKind::ProjectRoot,
            path: "/users/me/project/root/.config.yml".into(),
        }
    }

    #[test]
    fn tags_render_snake_case() {
        let bare = Tag {
            kind: DirKind::UserRoot,
            config: false,
        };
        let config = Tag {
            kind: DirKind::SystemRoot,
            config: true,
        };
        assert_eq!(bare.to_string(), "user_root");
        assert_eq!(config.to_string(), "system_root_config");
        assert_eq!(
            Tag {
                kind: DirKind::Unknown,
                config: true
            }
            .to_string(),
            "unknown_config"
        );
    }

    #[test]
    fn kind_display_uses_spaces() {
        assert_eq!(DirKind::ProjectRoot.to_string(), "project root");
        assert_eq!(DirKind::Unknown.to_string(), "unknown");
    }

    #[test]
    fn found_is_success_without_message() {
        let result = found();
        assert!(result.is_success());
        assert!(!result.is_failure());
        assert_eq!(result.message(), None);
        assert_eq!(result.exit_code(), 0);
        let [(tag, path)] = result.entries();
        assert_eq!(tag.to_string(), "project_root_config");
        assert_eq!(path, Path::new("/users/me/project/root/.config.yml"));
    }

    #[test]
    fn not_found_builds_message() {
        let result = SearchResult::not_found(".config.yml", DirKind::UserRoot, "/users/me".into());
        assert!(result.is_failure());
        assert_eq!(result.outcome(), Outcome::Failed);
        assert_eq!(
            result.message(),
            Some("Couldn't find config file .config.yml, stopping search at user root directory")
        );
        assert_eq!(result.exit_code(), 1);
        assert_eq!(result.tag().to_string(), "user_root");
    }

    #[test]
    fn serializes_success_report() {
        let value = serde_json::to_value(found()).unwrap();
        assert_eq!(
            value,
            json!({
                "result": "success",
                "files": [{"project_root_config": "/users/me/project/root/.config.yml"}],
            })
        );
    }

    #[test]
    fn serializes_failure_report_with_message() {
        let result =
            SearchResult::not_found("app.toml", DirKind::ProjectRoot, "/work/repo".into());
        let value = serde_json::to_value(result).unwrap();
        assert_eq!(value["result"], "failed");
        assert_eq!(value["files"][0]["project_root"], "/work/repo");
        assert_eq!(
            value["message"],
            "Couldn't find config file app.toml, stopping search at project root directory"
        );
    }
}
