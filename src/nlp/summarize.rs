//! Extractive summaries and raw text cleanup.

use once_cell::sync::Lazy;
use regex::Regex;

/// Returned when there is no text to summarise.
pub const NO_SUMMARY: &str = "No summary available";

/// A partial sentence is only appended when at least this many words fit.
const MIN_PARTIAL_WORDS: usize = 3;

static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+\s+").expect("valid sentence regex"));

/// Split on terminal punctuation followed by whitespace; the punctuation stays
/// with its sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for mat in SENTENCE_END.find_iter(text) {
        let sentence = text[start..mat.end()].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = mat.end();
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

/// Greedy whole-sentence summary of at most `word_limit` words.
///
/// When the next sentence does not fit and at least three words of budget are
/// left, its leading words are appended with a trailing `...`.
pub fn summarize(text: &str, word_limit: usize) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut used = 0usize;

    for sentence in split_sentences(text) {
        let words: Vec<&str> = sentence.split_whitespace().collect();
        if used + words.len() <= word_limit {
            used += words.len();
            parts.push(words.join(" "));
            continue;
        }
        let remaining = word_limit - used;
        if remaining >= MIN_PARTIAL_WORDS {
            parts.push(format!("{}...", words[..remaining].join(" ")));
        }
        break;
    }

    if parts.is_empty() {
        NO_SUMMARY.to_string()
    } else {
        parts.join(" ")
    }
}

/// Collapse `&nbsp;` and whitespace runs, trim lines and drop blank ones.
pub fn clean_text(raw: &str) -> String {
    raw.replace("&nbsp;", " ")
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
