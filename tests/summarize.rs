use proptest::prelude::*;
use regnews::nlp::summarize::{clean_text, split_sentences, summarize, NO_SUMMARY};

#[test]
fn splits_after_terminal_punctuation() {
    let sentences = split_sentences("First one. Second?! Third without end");
    assert_eq!(sentences, vec!["First one.", "Second?!", "Third without end"]);
    assert_eq!(split_sentences("Version 2.5 released."), vec!["Version 2.5 released."]);
}

#[test]
fn keeps_whole_sentences_within_budget() {
    let text = "One two three. Four five six. Seven eight nine ten.";
    assert_eq!(summarize(text, 6), "One two three. Four five six.");
}

#[test]
fn appends_partial_sentence_with_ellipsis() {
    let text = "One two. Three four five six seven eight.";
    assert_eq!(summarize(text, 5), "One two. Three four five...");
}

#[test]
fn skips_partial_sentence_under_three_words() {
    let text = "One two three four. Five six seven eight.";
    assert_eq!(summarize(text, 6), "One two three four.");
}

#[test]
fn empty_input_yields_placeholder() {
    assert_eq!(summarize("", 40), NO_SUMMARY);
    assert_eq!(summarize("   \n ", 40), NO_SUMMARY);
}

#[test]
fn clean_text_collapses_whitespace_and_entities() {
    let raw = "  Title&nbsp;&nbsp;here \n\n\t body   text\u{a0}ends \n   ";
    assert_eq!(clean_text(raw), "Title here\nbody text ends");
}

proptest! {
    #[test]
    fn summary_respects_word_budget(
        text in "([A-Za-z]{1,8}[ .!?]{1,2}){0,80}",
        limit in 3usize..60,
    ) {
        let summary = summarize(&text, limit);
        prop_assert!(summary.split_whitespace().count() <= limit);
    }
}
