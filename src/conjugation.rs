use crate::entry::{TIJD, VORM, WordEntry};

/// Group key for verb forms that carry neither `vorm` nor `tijd`.
pub const UNCATEGORIZED: &str = "anders";

/// Strips the infinitive ending. Spelling changes such as consonant
/// doubling are not handled: "zitten" yields "zitt".
pub fn regular_stem(infinitive: &str) -> Option<String> {
    if let Some(base) = infinitive.strip_suffix("iëren") {
        Some(format!("{base}eer"))
    } else if let Some(base) = infinitive.strip_suffix("eren") {
        Some(format!("{base}er"))
    } else if let Some(base) = infinitive.strip_suffix("ën") {
        Some(base.to_string())
    } else {
        infinitive.strip_suffix("en").map(str::to_string)
    }
}

/// Verb entries grouped by form, in order of first appearance.
#[derive(Debug, Default)]
pub struct ConjugationTable<'a> {
    groups: Vec<(String, Vec<&'a WordEntry>)>,
}

impl<'a> ConjugationTable<'a> {
    pub fn from_entries(entries: impl IntoIterator<Item = &'a WordEntry>) -> Self {
        let mut table = Self::default();
        for entry in entries {
            let key = entry
                .feature(VORM)
                .filter(|v| !v.is_empty())
                .or_else(|| entry.feature(TIJD).filter(|v| !v.is_empty()))
                .unwrap_or(UNCATEGORIZED);
            let slot = table.groups.iter().position(|(k, _)| k == key);
            match slot {
                Some(i) => table.groups[i].1.push(entry),
                None => table.groups.push((key.to_string(), vec![entry])),
            }
        }
        table
    }

    pub fn get(&self, key: &str) -> Option<&[&'a WordEntry]> {
        self.groups
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, group)| group.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[&'a WordEntry])> {
        self.groups.iter().map(|(k, group)| (k.as_str(), group.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
