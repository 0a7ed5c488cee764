use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::database::WordDatabase;
use crate::entry::WordEntry;
use crate::error::{LexiconError, Result};
use crate::pos::PartOfSpeech;

const SNAPSHOT_VERSION: u32 = 1;

// Index buckets are stored as sequences so their order survives the trip.
#[derive(Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    entries: Vec<WordEntry>,
    by_word: Vec<(String, Vec<usize>)>,
    by_pos: Vec<(PartOfSpeech, Vec<usize>)>,
}

impl WordDatabase {
    /// Encodes the word and tag indexes. Provenance is not included.
    pub fn to_snapshot_bytes(&self) -> Result<Vec<u8>> {
        let mut by_word: Vec<(String, Vec<usize>)> = self
            .by_word
            .iter()
            .map(|(word, idxs)| (word.clone(), idxs.clone()))
            .collect();
        by_word.sort_by(|a, b| a.0.cmp(&b.0));

        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            entries: self.entries.clone(),
            by_word,
            by_pos: self
                .by_pos
                .iter()
                .map(|(pos, idxs)| (*pos, idxs.clone()))
                .collect(),
        };
        serde_json::to_vec(&snapshot).map_err(LexiconError::Snapshot)
    }

    /// Replaces both indexes with the snapshot contents and clears provenance.
    pub fn load_snapshot_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let snapshot: Snapshot = serde_json::from_slice(bytes).map_err(LexiconError::Snapshot)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(LexiconError::CorruptSnapshot(format!(
                "unsupported version {}",
                snapshot.version
            )));
        }

        let len = snapshot.entries.len();
        let mut by_word = HashMap::with_capacity(snapshot.by_word.len());
        for (word, idxs) in snapshot.by_word {
            check_bucket(&idxs, len, |i| snapshot.entries[i].word() == word)?;
            by_word.insert(word, idxs);
        }
        let mut by_pos = BTreeMap::new();
        for (pos, idxs) in snapshot.by_pos {
            check_bucket(&idxs, len, |i| snapshot.entries[i].pos() == pos)?;
            by_pos.insert(pos, idxs);
        }

        self.entries = snapshot.entries;
        self.by_word = by_word;
        self.by_pos = by_pos;
        self.provenance.clear();
        Ok(())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_snapshot_bytes()?;
        std::fs::write(path, bytes).map_err(|e| LexiconError::io(path, e))
    }

    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| LexiconError::io(path, e))?;
        self.load_snapshot_bytes(&bytes)
    }
}

fn check_bucket(idxs: &[usize], len: usize, belongs: impl Fn(usize) -> bool) -> Result<()> {
    for &i in idxs {
        if i >= len {
            return Err(LexiconError::CorruptSnapshot(format!(
                "index {i} out of range for {len} entries"
            )));
        }
        if !belongs(i) {
            return Err(LexiconError::CorruptSnapshot(format!(
                "entry {i} is filed under the wrong key"
            )));
        }
    }
    Ok(())
}
