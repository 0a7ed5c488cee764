use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::pos::PartOfSpeech;
use crate::roman::roman_to_int;

/// Feature name to feature value, e.g. `tijd -> vt`.
pub type Features = BTreeMap<String, String>;

pub const VORM: &str = "vorm";
pub const TIJD: &str = "tijd";

/// Unions `overlay` into `base`; on a shared key the overlay value wins.
pub fn merge_features(mut base: Features, overlay: Features) -> Features {
    base.extend(overlay);
    base
}

/// One occurrence of a word with its tag and features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    word: String,
    pos: PartOfSpeech,
    features: Features,
    source: Option<String>,
    line: Option<usize>,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, pos: PartOfSpeech, features: Features) -> Self {
        Self {
            word: word.into(),
            pos,
            features,
            source: None,
            line: None,
        }
    }

    /// Attaches provenance. The line is dropped when there is no source.
    pub fn with_source(mut self, source: Option<String>, line: Option<usize>) -> Self {
        self.line = if source.is_some() { line } else { None };
        self.source = source;
        self
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn pos(&self) -> PartOfSpeech {
        self.pos
    }

    pub fn features(&self) -> &Features {
        &self.features
    }

    pub fn feature(&self, name: &str) -> Option<&str> {
        self.features.get(name).map(String::as_str)
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// Integer value of entries marked as Roman numerals.
    pub fn roman_value(&self) -> Option<u32> {
        if self.feature(VORM) == Some("romeins") {
            roman_to_int(&self.word)
        } else {
            None
        }
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {{", self.word, self.pos)?;
        for (i, (key, value)) in self.features.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")?;
        if let Some(source) = &self.source {
            write!(f, " (bron: {source})")?;
        }
        Ok(())
    }
}
