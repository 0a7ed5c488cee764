use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::conjugation::{ConjugationTable, regular_stem};
use crate::entry::{Features, VORM, WordEntry, merge_features};
use crate::error::{LexiconError, Result};
use crate::pos::PartOfSpeech;
use crate::rules::{LexiconRules, features_for_word};

pub const WORDLIST_EXTENSION: &str = "txt";

/// In-memory word database.
///
/// Entries live in one list in ingestion order; `by_word` and `by_pos` hold
/// positions into that list, so every entry sits in exactly one bucket of each.
pub struct WordDatabase {
    rules: LexiconRules,
    debug: bool,
    pub(crate) entries: Vec<WordEntry>,
    pub(crate) by_word: HashMap<String, Vec<usize>>,
    pub(crate) by_pos: BTreeMap<PartOfSpeech, Vec<usize>>,
    pub(crate) provenance: BTreeMap<String, Vec<(usize, String)>>,
}

impl WordDatabase {
    /// Database backed by the built-in Dutch rules.
    pub fn new(debug: bool) -> Result<Self> {
        Ok(Self::with_rules(LexiconRules::default_dutch()?, debug))
    }

    pub fn with_rules(rules: LexiconRules, debug: bool) -> Self {
        Self {
            rules,
            debug,
            entries: Vec::new(),
            by_word: HashMap::new(),
            by_pos: BTreeMap::new(),
            provenance: BTreeMap::new(),
        }
    }

    pub fn rules(&self) -> &LexiconRules {
        &self.rules
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn infer_pos(&self, name: &str) -> Option<PartOfSpeech> {
        self.rules.infer_pos(name)
    }

    pub fn infer_features_from_path(&self, path: &str) -> Features {
        self.rules.features_for_path(path)
    }

    pub fn infer_features_from_word(&self, word: &str) -> Features {
        features_for_word(word)
    }

    /// Stores a new entry. No deduplication: adding the same word twice
    /// yields two entries.
    pub fn add_word(
        &mut self,
        word: &str,
        pos: PartOfSpeech,
        features: Features,
        source: Option<&str>,
        line: Option<usize>,
    ) {
        let entry = WordEntry::new(word, pos, features).with_source(source.map(str::to_string), line);
        let idx = self.entries.len();
        self.entries.push(entry);

        self.by_word.entry(word.to_string()).or_default().push(idx);
        self.by_pos.entry(pos).or_default().push(idx);
        if let (Some(source), Some(line)) = (source.filter(|s| !s.is_empty()), line) {
            self.provenance
                .entry(source.to_string())
                .or_default()
                .push((line, word.to_string()));
        }
    }

    /// Classifies and stores every non-blank line. Returns the number of
    /// entries added.
    pub fn ingest_source<I, S>(&mut self, lines: I, default_pos: Option<PartOfSpeech>, source_name: &str) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let path_features = self.infer_features_from_path(source_name);
        let mut added = 0;

        for (i, line) in lines.into_iter().enumerate() {
            let word = line.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            let Some(pos) = self.rules.fixed_pos(word).or(default_pos) else {
                continue;
            };
            let features = merge_features(path_features.clone(), self.infer_features_from_word(word));
            self.add_word(word, pos, features, Some(source_name), Some(i + 1));
            added += 1;
        }
        added
    }

    /// Ingests one word list, taking its default tag from the file name.
    pub fn ingest_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let default_pos = self.infer_pos(&name);
        if default_pos.is_none() && self.debug {
            warn!("no recognizable part of speech for source {}", path.display());
        }

        let content = std::fs::read_to_string(path).map_err(|e| LexiconError::io(path, e))?;
        let added = self.ingest_source(content.lines(), default_pos, &name);
        debug!(source = %name, added, "ingested word list");
        Ok(added)
    }

    /// Recursively ingests every `.txt` file under `root`, in path order.
    pub fn ingest_folder(&mut self, root: impl AsRef<Path>) -> Result<usize> {
        let root = root.as_ref();
        info!("loading word lists from {}", root.display());

        let mut files = Vec::new();
        collect_wordlists(root, &mut files)?;
        files.sort();

        let mut added = 0;
        for file in &files {
            added += self.ingest_file(file)?;
        }
        debug!(sources = files.len(), added, "finished loading word lists");
        Ok(added)
    }

    pub fn get_entries(&self, word: &str, pos: Option<PartOfSpeech>) -> Vec<&WordEntry> {
        self.by_word
            .get(word)
            .map(|idxs| {
                idxs.iter()
                    .map(|&i| &self.entries[i])
                    .filter(|e| pos.is_none_or(|p| e.pos() == p))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn get_by_pos(&self, pos: PartOfSpeech) -> Vec<&WordEntry> {
        self.by_pos
            .get(&pos)
            .map(|idxs| idxs.iter().map(|&i| &self.entries[i]).collect())
            .unwrap_or_default()
    }

    /// Irregular verbs come from the rule table; regular ones need a stored
    /// infinitive entry before their ending is stripped.
    pub fn find_stem(&self, infinitive: &str) -> Option<String> {
        if let Some(stem) = self.rules.irregular_stem(infinitive) {
            return Some(stem.to_string());
        }

        let known_infinitive = self
            .get_entries(infinitive, Some(PartOfSpeech::Verb))
            .iter()
            .any(|e| e.feature(VORM) == Some("infinitief"));
        if !known_infinitive {
            return None;
        }
        regular_stem(infinitive)
    }

    pub fn get_conjugation_table(&self, verb: &str) -> ConjugationTable<'_> {
        ConjugationTable::from_entries(self.get_entries(verb, Some(PartOfSpeech::Verb)))
    }

    /// Tags that have at least one entry, sorted.
    pub fn pos_tags(&self) -> Vec<PartOfSpeech> {
        self.by_pos.keys().copied().collect()
    }

    pub fn pos_counts(&self) -> Vec<(PartOfSpeech, usize)> {
        self.by_pos.iter().map(|(pos, idxs)| (*pos, idxs.len())).collect()
    }

    pub fn unique_word_count(&self) -> usize {
        self.by_word.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.provenance.keys().map(String::as_str)
    }

    /// `(line, word)` pairs recorded for a source, in ingestion order.
    pub fn provenance(&self, source: &str) -> &[(usize, String)] {
        self.provenance.get(source).map(Vec::as_slice).unwrap_or(&[])
    }
}

fn collect_wordlists(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| LexiconError::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| LexiconError::io(dir, e))?;
        let path = entry.path();
        // DirEntry::file_type does not follow symlinks, so linked directories are not walked.
        let file_type = entry.file_type().map_err(|e| LexiconError::io(&path, e))?;
        if file_type.is_dir() {
            collect_wordlists(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == WORDLIST_EXTENSION) && path.is_file() {
            out.push(path);
        }
    }
    Ok(())
}
