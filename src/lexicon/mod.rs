//! Lexicon store: keyword tables, country aliases, regions and drug terms.
//!
//! A [`LexiconSet`] is built once per run and shared read-only by every
//! enrichment stage. All phrase matchers are compiled at construction time.

pub mod drugs;
pub mod geo;
pub mod keywords;

use std::collections::{BTreeSet, HashMap};

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    error::LexiconError,
    nlp::matcher::{GroupedMatcher, PhraseMatcher},
};

pub use keywords::{DRUG_PRODUCT, OTHER_DOCUMENT_TYPE, OTHER_PRODUCT_TYPE};

/// One labelled row of an ordered keyword table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordGroup {
    pub label: String,
    pub keywords: Vec<String>,
}

impl KeywordGroup {
    pub fn new<S: AsRef<str>>(label: &str, keywords: &[S]) -> Self {
        Self {
            label: label.to_string(),
            keywords: keywords.iter().map(|k| k.as_ref().to_string()).collect(),
        }
    }
}

/// Country (or bloc) entry with its region and alias lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountrySpec {
    pub name: String,
    /// `None` leaves the country out of every region set.
    pub region: Option<String>,
    /// Full names, capitals and native spellings; each counts on its own.
    pub aliases: Vec<String>,
    /// Short acronyms that only count when written in upper case inside
    /// mixed-case text.
    pub acronyms: Vec<String>,
}

/// Table sizes reported by the `lexicon` command.
#[derive(Debug, Clone, Serialize)]
pub struct LexiconStats {
    pub document_types: usize,
    pub document_keywords: usize,
    pub product_types: usize,
    pub product_keywords: usize,
    pub countries: usize,
    pub country_aliases: usize,
    pub acronyms: usize,
    pub regions: usize,
    pub drug_terms: usize,
}

/// Immutable, process-wide dictionaries plus their compiled matchers.
#[derive(Debug, Clone)]
pub struct LexiconSet {
    document_types: Vec<KeywordGroup>,
    product_types: Vec<KeywordGroup>,
    country_patterns: IndexMap<String, Vec<String>>,
    acronyms: IndexMap<String, Vec<String>>,
    region_of: HashMap<String, String>,
    drug_terms: BTreeSet<String>,
    pub(crate) document_matcher: GroupedMatcher,
    pub(crate) product_matcher: GroupedMatcher,
    pub(crate) country_matcher: GroupedMatcher,
    pub(crate) acronym_upper: GroupedMatcher,
    pub(crate) drug_matcher: PhraseMatcher,
}

impl LexiconSet {
    /// Build the lexicon from the compiled-in tables and the given drug terms.
    pub fn new(drug_terms: BTreeSet<String>) -> Result<Self, LexiconError> {
        let document_types = keywords::DOCUMENT_TYPES
            .iter()
            .map(|(label, kws)| KeywordGroup::new(label, kws))
            .collect();
        let product_types = keywords::PRODUCT_TYPES
            .iter()
            .map(|(label, kws)| KeywordGroup::new(label, kws))
            .collect();
        let countries = geo::COUNTRIES
            .iter()
            .map(|(name, region, aliases)| CountrySpec {
                name: name.to_string(),
                region: Some(region.to_string()),
                aliases: aliases.iter().map(|a| a.to_string()).collect(),
                acronyms: geo::ACRONYMS
                    .iter()
                    .filter(|(owner, _)| owner == name)
                    .flat_map(|(_, acr)| acr.iter().map(|a| a.to_string()))
                    .collect(),
            })
            .collect();
        Self::from_parts(document_types, product_types, countries, drug_terms)
    }

    /// Build a lexicon from explicit tables. Table order is preserved and is
    /// the classification priority.
    pub fn from_parts(
        document_types: Vec<KeywordGroup>,
        product_types: Vec<KeywordGroup>,
        countries: Vec<CountrySpec>,
        drug_terms: BTreeSet<String>,
    ) -> Result<Self, LexiconError> {
        let drug_terms: BTreeSet<String> = drug_terms
            .into_iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        let mut country_patterns = IndexMap::new();
        let mut acronyms = IndexMap::new();
        let mut region_of = HashMap::new();
        for country in countries {
            if let Some(region) = country.region {
                region_of.insert(country.name.clone(), region);
            }
            acronyms.insert(country.name.clone(), country.acronyms);
            country_patterns.insert(country.name, country.aliases);
        }

        let document_matcher = GroupedMatcher::new(document_types.iter().map(|g| &g.keywords))?;
        let product_matcher = GroupedMatcher::new(product_types.iter().map(|g| &g.keywords))?;
        let country_matcher = GroupedMatcher::new(country_patterns.values())?;
        let acronym_upper = GroupedMatcher::exact(
            acronyms
                .values()
                .map(|acr: &Vec<String>| acr.iter().map(|a| a.to_uppercase()).collect::<Vec<_>>()),
        )?;
        let drug_matcher = PhraseMatcher::new(&drug_terms)?;

        Ok(Self {
            document_types,
            product_types,
            country_patterns,
            acronyms,
            region_of,
            drug_terms,
            document_matcher,
            product_matcher,
            country_matcher,
            acronym_upper,
            drug_matcher,
        })
    }

    pub fn document_types(&self) -> &[KeywordGroup] {
        &self.document_types
    }

    pub fn product_types(&self) -> &[KeywordGroup] {
        &self.product_types
    }

    /// Country name to alias list, in declaration order.
    pub fn country_patterns(&self) -> &IndexMap<String, Vec<String>> {
        &self.country_patterns
    }

    pub fn acronyms(&self) -> &IndexMap<String, Vec<String>> {
        &self.acronyms
    }

    /// Region of a country, if it has one.
    pub fn region_of(&self, country: &str) -> Option<&str> {
        self.region_of.get(country).map(String::as_str)
    }

    pub fn drug_terms(&self) -> &BTreeSet<String> {
        &self.drug_terms
    }

    /// Country name at position `idx` of the country table.
    pub(crate) fn country_name(&self, idx: usize) -> Option<&str> {
        self.country_patterns
            .get_index(idx)
            .map(|(name, _)| name.as_str())
    }

    pub fn stats(&self) -> LexiconStats {
        LexiconStats {
            document_types: self.document_types.len(),
            document_keywords: self.document_types.iter().map(|g| g.keywords.len()).sum(),
            product_types: self.product_types.len(),
            product_keywords: self.product_types.iter().map(|g| g.keywords.len()).sum(),
            countries: self.country_patterns.len(),
            country_aliases: self.country_patterns.values().map(Vec::len).sum(),
            acronyms: self.acronyms.values().map(Vec::len).sum(),
            regions: self.region_of.values().collect::<BTreeSet<_>>().len(),
            drug_terms: self.drug_terms.len(),
        }
    }
}

/// Load the drug table from `source` (path or http(s) URL) and build the
/// lexicon. Any failure here is fatal for the run.
#[instrument(skip(columns))]
pub async fn load(source: &str, columns: &[String]) -> Result<LexiconSet, LexiconError> {
    let bytes = drugs::read_source(source).await?;
    let terms = drugs::parse_terms(&bytes, columns)?;
    if terms.is_empty() {
        return Err(LexiconError::Empty);
    }
    let lexicon = LexiconSet::new(terms)?;
    info!(stats = ?lexicon.stats(), "lexicon ready");
    Ok(lexicon)
}
