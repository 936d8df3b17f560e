//! Whole-word multi-phrase matching over an Aho-Corasick automaton.
//!
//! A phrase matches when it occurs with no word character (Unicode alphanumeric
//! or `_`) immediately before or after it, i.e. `(?<!\w)phrase(?!\w)`. The
//! automaton is built once per phrase table and scans a text in a single pass,
//! independent of the number of phrases.

use std::collections::{BTreeMap, BTreeSet};

use aho_corasick::AhoCorasick;
use indexmap::IndexMap;

/// Pre-compiled phrase table. Match results are reported as indices into the
/// phrase list the matcher was built from.
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    automaton: AhoCorasick,
    /// Automaton pattern id -> caller indices sharing that phrase.
    owners: Vec<Vec<usize>>,
    phrases: Vec<String>,
    fold_case: bool,
}

impl PhraseMatcher {
    /// Case-insensitive matcher.
    pub fn new<I, S>(phrases: I) -> Result<Self, aho_corasick::BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(phrases, true)
    }

    /// Case-sensitive matcher, used for upper-case acronyms.
    pub fn exact<I, S>(phrases: I) -> Result<Self, aho_corasick::BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(phrases, false)
    }

    fn build<I, S>(phrases: I, fold_case: bool) -> Result<Self, aho_corasick::BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: Vec<String> = phrases
            .into_iter()
            .map(|p| {
                let p = p.as_ref().trim();
                if fold_case {
                    p.to_lowercase()
                } else {
                    p.to_string()
                }
            })
            .collect();

        // Empty phrases would match at every boundary; skip them.
        let mut unique: IndexMap<&str, Vec<usize>> = IndexMap::new();
        for (idx, phrase) in phrases.iter().enumerate() {
            if !phrase.is_empty() {
                unique.entry(phrase.as_str()).or_default().push(idx);
            }
        }
        let automaton = AhoCorasick::new(unique.keys())?;
        let owners = unique.into_values().collect();

        Ok(Self {
            automaton,
            owners,
            phrases,
            fold_case,
        })
    }

    /// Number of phrases the matcher was built from.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// The normalised phrase at `idx`.
    pub fn phrase(&self, idx: usize) -> &str {
        &self.phrases[idx]
    }

    /// Indices of every phrase occurring as a whole word in `text`.
    pub fn find_all(&self, text: &str) -> BTreeSet<usize> {
        self.spans(text)
            .into_iter()
            .flat_map(|span| self.owners[span.pattern].iter().copied())
            .collect()
    }

    /// Like [`find_all`](Self::find_all), but a match lying strictly inside a
    /// longer match is dropped ("guinea" inside "papua new guinea").
    pub fn find_outermost(&self, text: &str) -> BTreeSet<usize> {
        let spans = self.spans(text);
        spans
            .iter()
            .filter(|inner| {
                !spans.iter().any(|outer| {
                    outer.start <= inner.start
                        && inner.end <= outer.end
                        && (outer.end - outer.start) > (inner.end - inner.start)
                })
            })
            .flat_map(|span| self.owners[span.pattern].iter().copied())
            .collect()
    }

    fn spans(&self, text: &str) -> Vec<Span> {
        if text.is_empty() || self.owners.is_empty() {
            return Vec::new();
        }
        let folded;
        let haystack = if self.fold_case {
            folded = text.to_lowercase();
            folded.as_str()
        } else {
            text
        };
        self.automaton
            .find_overlapping_iter(haystack)
            .filter(|mat| is_bounded(haystack, mat.start(), mat.end()))
            .map(|mat| Span {
                pattern: mat.pattern().as_usize(),
                start: mat.start(),
                end: mat.end(),
            })
            .collect()
    }

    /// Whether any phrase occurs as a whole word in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        !self.find_all(text).is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
struct Span {
    pattern: usize,
    start: usize,
    end: usize,
}

/// Phrase matcher whose phrases belong to labelled groups (keyword lists,
/// country alias lists). Group order is the declaration order.
#[derive(Debug, Clone)]
pub struct GroupedMatcher {
    matcher: PhraseMatcher,
    group_of: Vec<usize>,
    groups: usize,
}

impl GroupedMatcher {
    /// Case-insensitive grouped matcher.
    pub fn new<G, P, S>(groups: G) -> Result<Self, aho_corasick::BuildError>
    where
        G: IntoIterator<Item = P>,
        P: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(groups, true)
    }

    /// Case-sensitive grouped matcher.
    pub fn exact<G, P, S>(groups: G) -> Result<Self, aho_corasick::BuildError>
    where
        G: IntoIterator<Item = P>,
        P: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(groups, false)
    }

    fn build<G, P, S>(groups: G, fold_case: bool) -> Result<Self, aho_corasick::BuildError>
    where
        G: IntoIterator<Item = P>,
        P: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut phrases = Vec::new();
        let mut group_of = Vec::new();
        let mut count = 0;
        for (group, members) in groups.into_iter().enumerate() {
            for phrase in members {
                phrases.push(phrase.as_ref().to_string());
                group_of.push(group);
            }
            count = group + 1;
        }
        let matcher = PhraseMatcher::build(phrases, fold_case)?;
        Ok(Self {
            matcher,
            group_of,
            groups: count,
        })
    }

    /// Number of groups, including groups without phrases.
    pub fn groups(&self) -> usize {
        self.groups
    }

    /// Matched phrases keyed by group index, phrases in declaration order.
    pub fn find_groups(&self, text: &str) -> BTreeMap<usize, Vec<String>> {
        self.collect_groups(self.matcher.find_all(text))
    }

    /// Grouped variant of [`PhraseMatcher::find_outermost`].
    pub fn find_groups_outermost(&self, text: &str) -> BTreeMap<usize, Vec<String>> {
        self.collect_groups(self.matcher.find_outermost(text))
    }

    fn collect_groups(&self, found: BTreeSet<usize>) -> BTreeMap<usize, Vec<String>> {
        let mut hits: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        for idx in found {
            hits.entry(self.group_of[idx])
                .or_default()
                .push(self.matcher.phrase(idx).to_string());
        }
        hits
    }
}

/// Word characters in the sense of Unicode `\w`.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}
