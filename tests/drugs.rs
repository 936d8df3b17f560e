use std::collections::BTreeSet;

use proptest::prelude::*;
use regnews::{lexicon::LexiconSet, nlp::drugs::extract};

fn lexicon() -> LexiconSet {
    LexiconSet::new(
        [
            "paracetamol",
            "imatinib",
            "tyrosine-protein kinase abl1",
            "insulin glargine",
            "insulin",
        ]
        .into_iter()
        .map(str::to_string)
        .collect(),
    )
    .unwrap()
}

#[test]
fn finds_single_and_multi_word_terms() {
    let found = extract(
        &lexicon(),
        "Imatinib targets Tyrosine-protein kinase ABL1; paracetamol was co-administered.",
    );
    let expected: BTreeSet<String> = ["imatinib", "paracetamol", "tyrosine-protein kinase abl1"]
        .into_iter()
        .map(str::to_string)
        .collect();
    assert_eq!(found, expected);
}

#[test]
fn overlapping_terms_are_both_reported() {
    let found = extract(&lexicon(), "a new insulin glargine biosimilar");
    assert!(found.contains("insulin"));
    assert!(found.contains("insulin glargine"));
}

#[test]
fn partial_tokens_do_not_match() {
    assert!(extract(&lexicon(), "paracetamolum and preimatinib").is_empty());
    assert!(extract(&lexicon(), "").is_empty());
}

proptest! {
    #[test]
    fn extraction_is_deterministic(words in prop::collection::vec(
        prop_oneof![
            Just("paracetamol"),
            Just("insulin"),
            Just("glargine"),
            Just("imatinib,"),
            Just("the"),
            Just("x"),
        ],
        0..30,
    )) {
        let lexicon = lexicon();
        let text = words.join(" ");
        let first = extract(&lexicon, &text);
        prop_assert_eq!(&first, &extract(&lexicon, &text));
        prop_assert!(first.iter().all(|term| lexicon.drug_terms().contains(term)));
    }
}
