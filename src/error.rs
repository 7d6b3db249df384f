use thiserror::Error;

/// Failures of the environment a search runs in.
///
/// Not finding the config file is not an error: that is reported as
/// [`SearchResult::NotFound`](crate::SearchResult::NotFound).
#[derive(Debug, Error)]
pub enum FinderError {
    #[error("Failed to determine the current working directory: {source}")]
    CurrentDir { source: std::io::Error },
}
