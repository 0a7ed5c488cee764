use crate::conjugation::ConjugationTable;
use crate::database::WordDatabase;
use crate::entry::WordEntry;
use crate::pos::PartOfSpeech;

/// Read-only queries for sentence-level consumers.
///
/// Unknown words yield empty results. Homographs come back as separate
/// entries; choosing between them is up to the caller.
pub trait WordLookup {
    fn entries(&self, word: &str, pos: Option<PartOfSpeech>) -> Vec<&WordEntry>;
    fn entries_by_pos(&self, pos: PartOfSpeech) -> Vec<&WordEntry>;
    fn stem(&self, infinitive: &str) -> Option<String>;
    fn conjugations(&self, verb: &str) -> ConjugationTable<'_>;

    fn is_known(&self, word: &str) -> bool {
        !self.entries(word, None).is_empty()
    }
}

impl WordLookup for WordDatabase {
    fn entries(&self, word: &str, pos: Option<PartOfSpeech>) -> Vec<&WordEntry> {
        self.get_entries(word, pos)
    }

    fn entries_by_pos(&self, pos: PartOfSpeech) -> Vec<&WordEntry> {
        self.get_by_pos(pos)
    }

    fn stem(&self, infinitive: &str) -> Option<String> {
        self.find_stem(infinitive)
    }

    fn conjugations(&self, verb: &str) -> ConjugationTable<'_> {
        self.get_conjugation_table(verb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tags each whitespace-separated token the way a sentence analyser would.
    fn tag_tokens<L: WordLookup>(lookup: &L, sentence: &str) -> Vec<(String, Vec<PartOfSpeech>)> {
        sentence
            .split_whitespace()
            .map(|token| {
                let tags = lookup.entries(token, None).iter().map(|e| e.pos()).collect();
                (token.to_string(), tags)
            })
            .collect()
    }

    #[test]
    fn test_consumer_sees_all_homographs() {
        let mut db = WordDatabase::new(false).unwrap();
        db.ingest_source(["lopen", "werken"], Some(PartOfSpeech::Verb), "werkwoorden_infinitief.txt");
        db.ingest_source(["werken"], Some(PartOfSpeech::Noun), "zelfstandigenaamwoorden_mv.txt");
        db.ingest_source(["ik", "jij"], Some(PartOfSpeech::Pronoun), "voornaamwoorden.txt");

        let tagged = tag_tokens(&db, "ik werken graag");
        assert_eq!(tagged[0].1, vec![PartOfSpeech::Pronoun]);
        assert_eq!(tagged[1].1, vec![PartOfSpeech::Verb, PartOfSpeech::Noun]);
        assert!(tagged[2].1.is_empty());

        assert!(db.is_known("jij"));
        assert!(!db.is_known("graag"));
        assert_eq!(db.stem("werken").as_deref(), Some("werk"));
        assert_eq!(db.entries_by_pos(PartOfSpeech::Verb).len(), 2);
        assert_eq!(db.conjugations("werken").keys().collect::<Vec<_>>(), vec!["infinitief"]);
    }
}
