//! Drug/target term extraction.

use std::collections::BTreeSet;

use crate::lexicon::LexiconSet;

/// Every lexicon drug term occurring as a whole word or phrase in `text`.
pub fn extract(lexicon: &LexiconSet, text: &str) -> BTreeSet<String> {
    let matcher = &lexicon.drug_matcher;
    matcher
        .find_all(text)
        .into_iter()
        .map(|idx| matcher.phrase(idx).to_string())
        .collect()
}
