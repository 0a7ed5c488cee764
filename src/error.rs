use std::path::PathBuf;

pub type Result<T, E = LexiconError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// A heuristic pattern in the rule table is not a valid regular expression.
    #[error("invalid heuristic pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A rule table refers to a tag outside the part-of-speech set.
    #[error("unknown part-of-speech tag '{0}'")]
    UnknownTag(String),

    #[error("malformed rule description: {0}")]
    Rules(#[source] serde_json::Error),

    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[source] serde_json::Error),

    /// The snapshot decoded but its indexes do not fit its entries.
    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(String),
}

impl LexiconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LexiconError::Io {
            path: path.into(),
            source,
        }
    }
}
