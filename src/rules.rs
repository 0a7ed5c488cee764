//! Rule tables that drive classification.
//!
//! Order matters for the pattern table and the path feature rules, so both
//! are kept as sequences (JSON arrays), never as maps.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::entry::{Features, TIJD, VORM, merge_features};
use crate::error::{LexiconError, Result};
use crate::pos::PartOfSpeech;
use crate::roman::is_valid_roman_numeral;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternRule {
    pub pattern: String,
    pub pos: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureRule {
    pub substring: String,
    pub features: Features,
}

/// Serialized form of [`LexiconRules`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default)]
    pub heuristics: Vec<PatternRule>,
    #[serde(default)]
    pub fixed_pos: HashMap<String, String>,
    #[serde(default)]
    pub form_features: Vec<FeatureRule>,
    #[serde(default)]
    pub irregular_stems: HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct LexiconRules {
    heuristics: Vec<(Regex, PartOfSpeech)>,
    fixed_pos: HashMap<String, PartOfSpeech>,
    form_features: Vec<(String, Features)>,
    irregular_stems: HashMap<String, String>,
}

impl LexiconRules {
    pub fn from_config(config: RulesConfig) -> Result<Self> {
        let heuristics = config
            .heuristics
            .into_iter()
            .map(|rule| -> Result<(Regex, PartOfSpeech)> {
                let regex = Regex::new(&rule.pattern).map_err(|source| LexiconError::InvalidPattern {
                    pattern: rule.pattern.clone(),
                    source,
                })?;
                Ok((regex, rule.pos.parse()?))
            })
            .collect::<Result<Vec<_>>>()?;

        let fixed_pos = config
            .fixed_pos
            .into_iter()
            .map(|(word, tag)| -> Result<(String, PartOfSpeech)> { Ok((word, tag.parse()?)) })
            .collect::<Result<HashMap<_, _>>>()?;

        let form_features = config
            .form_features
            .into_iter()
            .map(|rule| (rule.substring, rule.features))
            .collect();

        Ok(Self {
            heuristics,
            fixed_pos,
            form_features,
            irregular_stems: config.irregular_stems,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: RulesConfig = serde_json::from_str(json).map_err(LexiconError::Rules)?;
        Self::from_config(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| LexiconError::io(path, e))?;
        Self::from_json(&json)
    }

    /// The built-in Dutch rule set.
    pub fn default_dutch() -> Result<Self> {
        crate::data::default_rules()
    }

    /// First pattern that matches anywhere in the normalized name wins.
    pub fn infer_pos(&self, name: &str) -> Option<PartOfSpeech> {
        let name = normalize_name(name);
        self.heuristics
            .iter()
            .find(|(regex, _)| regex.is_match(&name))
            .map(|(_, pos)| *pos)
    }

    pub fn features_for_path(&self, name: &str) -> Features {
        let name = normalize_name(name);
        self.form_features
            .iter()
            .filter(|(substring, _)| name.contains(substring.as_str()))
            .fold(Features::new(), |acc, (_, feats)| {
                merge_features(acc, feats.clone())
            })
    }

    pub fn fixed_pos(&self, word: &str) -> Option<PartOfSpeech> {
        self.fixed_pos.get(word).copied()
    }

    pub fn irregular_stem(&self, infinitive: &str) -> Option<&str> {
        self.irregular_stems.get(infinitive).map(String::as_str)
    }
}

/// Lowercases and turns underscores into hyphens.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace('_', "-")
}

/// Shape heuristics. Later checks overwrite earlier ones on the same key.
pub fn features_for_word(word: &str) -> Features {
    let mut features = Features::new();
    if word.ends_with("de") || word.ends_with("den") {
        features.insert(TIJD.to_string(), "vt".to_string());
    } else if word.ends_with('t') {
        features.insert(TIJD.to_string(), "tt".to_string());
    }
    if word.ends_with('d') || word.ends_with('t') {
        features.insert(VORM.to_string(), "stam".to_string());
    }
    if is_valid_roman_numeral(word) {
        features.insert(VORM.to_string(), "romeins".to_string());
    }
    features
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> LexiconRules {
        LexiconRules::default_dutch().unwrap()
    }

    #[test]
    fn test_infer_pos_from_file_names() {
        let rules = rules();
        assert_eq!(rules.infer_pos("werkwoorden.txt"), Some(PartOfSpeech::Verb));
        assert_eq!(rules.infer_pos("Lidwoorden_DE.txt"), Some(PartOfSpeech::Det));
        assert_eq!(rules.infer_pos("romeinse_cijfers.txt"), Some(PartOfSpeech::Num));
        assert_eq!(rules.infer_pos("boodschappen.txt"), None);
    }

    #[test]
    fn test_first_pattern_wins() {
        // "werkwoord" is declared before "hulpwerkwoord".
        assert_eq!(rules().infer_pos("hulpwerkwoorden.txt"), Some(PartOfSpeech::Verb));

        let reordered = LexiconRules::from_json(
            r#"{"heuristics": [
                {"pattern": "hulpwerkwoord", "pos": "aux"},
                {"pattern": "werkwoord", "pos": "verb"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(reordered.infer_pos("hulpwerkwoorden.txt"), Some(PartOfSpeech::Aux));
        assert_eq!(reordered.infer_pos("werkwoorden.txt"), Some(PartOfSpeech::Verb));
    }

    #[test]
    fn test_underscores_normalize_to_hyphens() {
        let rules = LexiconRules::from_json(
            r#"{"heuristics": [{"pattern": "^zelfstandig-naamwoord", "pos": "noun"}]}"#,
        )
        .unwrap();
        assert_eq!(rules.infer_pos("Zelfstandig_Naamwoord.txt"), Some(PartOfSpeech::Noun));
    }

    #[test]
    fn test_path_features_merge_in_rule_order() {
        let feats = rules().features_for_path("werkwoorden_infinitief.txt");
        assert_eq!(feats.get("vorm").map(String::as_str), Some("infinitief"));

        // "voltooid" comes after "stam" in the table, so its vorm wins.
        let feats = rules().features_for_path("stam_voltooid.txt");
        assert_eq!(feats.get("vorm").map(String::as_str), Some("vd"));

        let feats = rules().features_for_path("ikvorm_tegenwoordig.txt");
        assert_eq!(feats.get("persoon").map(String::as_str), Some("1"));
        assert_eq!(feats.get("getal").map(String::as_str), Some("ev"));
        assert_eq!(feats.get("tijd").map(String::as_str), Some("tt"));
    }

    #[test]
    fn test_word_shape_features() {
        let feats = features_for_word("leerde");
        assert_eq!(feats.get("tijd").map(String::as_str), Some("vt"));
        assert_eq!(feats.get("vorm"), None);

        let feats = features_for_word("leerden");
        assert_eq!(feats.get("tijd").map(String::as_str), Some("vt"));

        let feats = features_for_word("werkt");
        assert_eq!(feats.get("tijd").map(String::as_str), Some("tt"));
        assert_eq!(feats.get("vorm").map(String::as_str), Some("stam"));

        let feats = features_for_word("hond");
        assert_eq!(feats.get("tijd"), None);
        assert_eq!(feats.get("vorm").map(String::as_str), Some("stam"));

        assert!(features_for_word("lopen").is_empty());
    }

    #[test]
    fn test_roman_shape_overrides_vorm() {
        let feats = features_for_word("MD");
        assert_eq!(feats.get("vorm").map(String::as_str), Some("romeins"));

        let feats = features_for_word("CD");
        assert_eq!(feats.get("vorm").map(String::as_str), Some("romeins"));
    }

    #[test]
    fn test_fixed_words_and_irregular_stems() {
        let rules = rules();
        assert_eq!(rules.fixed_pos("ik"), Some(PartOfSpeech::Pronoun));
        assert_eq!(rules.fixed_pos("zal"), Some(PartOfSpeech::Aux));
        assert_eq!(rules.fixed_pos("huis"), None);
        assert_eq!(rules.irregular_stem("zijn"), Some("ben"));
        assert_eq!(rules.irregular_stem("werken"), None);
    }

    #[test]
    fn test_invalid_pattern_fails_fast() {
        let err = LexiconRules::from_json(r#"{"heuristics": [{"pattern": "werk(", "pos": "verb"}]}"#)
            .unwrap_err();
        assert!(matches!(err, LexiconError::InvalidPattern { ref pattern, .. } if pattern == "werk("));
    }

    #[test]
    fn test_unknown_tag_fails_fast() {
        let err = LexiconRules::from_json(r#"{"fixed_pos": {"ik": "voornaamwoord"}}"#).unwrap_err();
        assert!(matches!(err, LexiconError::UnknownTag(_)));

        let err = LexiconRules::from_json("{ not json").unwrap_err();
        assert!(matches!(err, LexiconError::Rules(_)));
    }
}
