//! Country and region detection, plus publishing-country inference.

use std::collections::BTreeSet;

use serde::Serialize;
use url::Url;

use crate::{
    lexicon::{
        geo::{DOMAIN_COUNTRIES, LANGUAGE_COUNTRIES},
        LexiconSet,
    },
    nlp::language::Language,
};

/// Catch-all country/region for articles without any country mention.
pub const GLOBAL: &str = "Global";

/// Countries mentioned in a text and the regions they belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeoMatch {
    pub countries: BTreeSet<String>,
    pub regions: BTreeSet<String>,
}

/// Countries whose aliases occur in `text`.
///
/// Full-name aliases count on their own; a match nested inside a longer alias
/// ("guinea" in "papua new guinea") is ignored. Acronyms count only when
/// written in upper case on a line that also has lower-case letters, so
/// "who" and "un" in running text and all-caps headings register nothing.
pub fn detect_countries(lexicon: &LexiconSet, text: &str) -> BTreeSet<String> {
    let strong = lexicon.country_matcher.find_groups_outermost(text);
    let upper: BTreeSet<usize> = text
        .lines()
        .filter(|line| line.chars().any(char::is_lowercase))
        .flat_map(|line| lexicon.acronym_upper.find_groups(line).into_keys())
        .collect();

    (0..lexicon.country_patterns().len())
        .filter(|idx| strong.contains_key(idx) || upper.contains(idx))
        .filter_map(|idx| lexicon.country_name(idx))
        .map(str::to_string)
        .collect()
}

/// Regions of `countries`. Countries without a region are skipped; an empty
/// country set yields `{"Global"}` when `global_fallback` is set.
pub fn regions_of(
    lexicon: &LexiconSet,
    countries: &BTreeSet<String>,
    global_fallback: bool,
) -> BTreeSet<String> {
    if countries.is_empty() {
        return if global_fallback {
            BTreeSet::from([GLOBAL.to_string()])
        } else {
            BTreeSet::new()
        };
    }
    countries
        .iter()
        .filter_map(|country| lexicon.region_of(country))
        .map(str::to_string)
        .collect()
}

/// Detect countries and regions in one go, applying the `Global` fallback to
/// both sets.
pub fn locate(lexicon: &LexiconSet, text: &str, global_fallback: bool) -> GeoMatch {
    let mut countries = detect_countries(lexicon, text);
    let regions = regions_of(lexicon, &countries, global_fallback);
    if countries.is_empty() && global_fallback {
        countries.insert(GLOBAL.to_string());
    }
    GeoMatch { countries, regions }
}

/// Publishing country from the article URL's domain, else from the language.
pub fn infer_country(article_url: &str, language: &Language) -> Option<String> {
    country_from_url(article_url).or_else(|| country_from_language(language))
}

fn country_from_url(article_url: &str) -> Option<String> {
    let url = Url::parse(article_url.trim()).ok()?;
    let host = url.host_str()?.trim_end_matches('.').to_ascii_lowercase();
    DOMAIN_COUNTRIES
        .iter()
        .filter(|(suffix, _)| host.ends_with(suffix))
        .max_by_key(|(suffix, _)| suffix.len())
        .map(|(_, country)| country.to_string())
}

fn country_from_language(language: &Language) -> Option<String> {
    let Language::Known { name, .. } = language else {
        return None;
    };
    let name = name.to_lowercase();
    LANGUAGE_COUNTRIES
        .iter()
        .find(|(lang, _)| *lang == name)
        .map(|(_, country)| country.to_string())
}
