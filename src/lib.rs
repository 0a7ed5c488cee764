pub mod conjugation;
pub mod data;
pub mod database;
pub mod entry;
pub mod error;
pub mod lookup;
pub mod pos;
pub mod roman;
pub mod rules;
mod snapshot;

pub use conjugation::ConjugationTable;
pub use database::WordDatabase;
pub use entry::{Features, WordEntry};
pub use error::{LexiconError, Result};
pub use lookup::WordLookup;
pub use pos::PartOfSpeech;
pub use roman::{is_valid_roman_numeral, roman_to_int};
pub use rules::LexiconRules;
