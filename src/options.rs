use serde::Deserialize;
use serde_json::{Map, Value};

/// Extra construction options for a [`ConfigFinder`](crate::ConfigFinder).
///
/// No option currently changes how a search behaves. Any keys supplied are
/// kept in [`extra`](Self::extra) and otherwise ignored, so options written
/// for a newer release still load.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[non_exhaustive]
pub struct FinderOptions {
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FinderOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_are_accepted() {
        let opts: FinderOptions =
            serde_json::from_str(r#"{"follow_symlinks": true, "depth": 3}"#).unwrap();
        assert_eq!(opts.extra.len(), 2);
        assert_eq!(opts.extra["depth"], 3);
    }

    #[test]
    fn empty_object_is_default() {
        let opts: FinderOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, FinderOptions::new());
    }
}
