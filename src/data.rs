use crate::error::Result;
use crate::rules::LexiconRules;

const NL_RULES: &str = include_str!("../data/nl_rules.json");

pub fn default_rules_json() -> &'static str {
    NL_RULES
}

pub fn default_rules() -> Result<LexiconRules> {
    LexiconRules::from_json(NL_RULES)
}
