use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LexiconError;

/// Part-of-speech tags known to the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Verb,
    Noun,
    Adj,
    Adv,
    Pronoun,
    Prep,
    Conj,
    Det,
    Num,
    Interj,
    Aux,
    Part,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 12] = [
        PartOfSpeech::Verb,
        PartOfSpeech::Noun,
        PartOfSpeech::Adj,
        PartOfSpeech::Adv,
        PartOfSpeech::Pronoun,
        PartOfSpeech::Prep,
        PartOfSpeech::Conj,
        PartOfSpeech::Det,
        PartOfSpeech::Num,
        PartOfSpeech::Interj,
        PartOfSpeech::Aux,
        PartOfSpeech::Part,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Adj => "adj",
            PartOfSpeech::Adv => "adv",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Prep => "prep",
            PartOfSpeech::Conj => "conj",
            PartOfSpeech::Det => "det",
            PartOfSpeech::Num => "num",
            PartOfSpeech::Interj => "interj",
            PartOfSpeech::Aux => "aux",
            PartOfSpeech::Part => "part",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartOfSpeech {
    type Err = LexiconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartOfSpeech::ALL
            .into_iter()
            .find(|pos| pos.as_str() == s)
            .ok_or_else(|| LexiconError::UnknownTag(s.to_string()))
    }
}
