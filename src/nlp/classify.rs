//! First-match document and product classification.
//!
//! Both classifiers walk their keyword table in declaration order and stop at
//! the first label with a whole-word hit.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{
    lexicon::{LexiconSet, DRUG_PRODUCT, OTHER_DOCUMENT_TYPE, OTHER_PRODUCT_TYPE},
    nlp::drugs,
};

/// Matched keywords kept as evidence per classification.
pub const MAX_EVIDENCE: usize = 3;

/// Assigned label plus the keywords that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub label: String,
    pub keywords: Vec<String>,
}

impl Classification {
    fn fallback(label: &str) -> Self {
        Self {
            label: label.to_string(),
            keywords: Vec::new(),
        }
    }
}

/// Product label, its keywords and the drug terms behind a `Drug Product` verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductClassification {
    pub label: String,
    pub keywords: Vec<String>,
    pub drug_names: BTreeSet<String>,
}

pub fn classify_document(lexicon: &LexiconSet, text: &str) -> Classification {
    let hits = lexicon.document_matcher.find_groups(text);
    match hits.into_iter().next() {
        Some((idx, keywords)) => Classification {
            label: lexicon.document_types()[idx].label.clone(),
            keywords: keywords.into_iter().take(MAX_EVIDENCE).collect(),
        },
        None => Classification::fallback(OTHER_DOCUMENT_TYPE),
    }
}

pub fn classify_product(lexicon: &LexiconSet, text: &str) -> ProductClassification {
    let drugs = drugs::extract(lexicon, text);
    classify_product_with_drugs(lexicon, text, &drugs)
}

/// Product classification reusing an already extracted drug set.
///
/// `Drug Product` is never taken from keywords: it is assigned only when no
/// other product type matched and `drugs` is non-empty.
pub fn classify_product_with_drugs(
    lexicon: &LexiconSet,
    text: &str,
    drugs: &BTreeSet<String>,
) -> ProductClassification {
    let hits = lexicon.product_matcher.find_groups(text);
    let first = hits
        .into_iter()
        .find(|(idx, _)| lexicon.product_types()[*idx].label != DRUG_PRODUCT);
    if let Some((idx, keywords)) = first {
        return ProductClassification {
            label: lexicon.product_types()[idx].label.clone(),
            keywords: keywords.into_iter().take(MAX_EVIDENCE).collect(),
            drug_names: BTreeSet::new(),
        };
    }

    if drugs.is_empty() {
        return ProductClassification {
            label: OTHER_PRODUCT_TYPE.to_string(),
            keywords: Vec::new(),
            drug_names: BTreeSet::new(),
        };
    }
    ProductClassification {
        label: DRUG_PRODUCT.to_string(),
        keywords: drugs.iter().take(MAX_EVIDENCE).cloned().collect(),
        drug_names: drugs.clone(),
    }
}
