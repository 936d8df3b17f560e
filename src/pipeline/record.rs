//! Pipeline input/output records and the flattened export row.

use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

use super::dates::DateOrder;
use crate::nlp::language::Language;

/// Written for empty sets and missing values in export rows.
pub const NONE: &str = "None";

/// One scraped article as handed over by a crawler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleInput {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "text")]
    pub body: String,
    /// Listing summary extracted by the crawler, if any.
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub source_url: String,
    #[serde(default, alias = "url")]
    pub article_url: String,
    #[serde(default)]
    pub date: String,
    /// Reading order for numeric dates; inferred from the URL when absent.
    #[serde(default)]
    pub date_order: Option<DateOrder>,
}

/// Pipeline states, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Received,
    LanguageDetected,
    Translated,
    SkippedTranslation,
    Classified,
    GeoDetected,
    DrugsExtracted,
    Summarized,
    Assembled,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Received => "received",
            Self::LanguageDetected => "language_detected",
            Self::Translated => "translated",
            Self::SkippedTranslation => "skipped_translation",
            Self::Classified => "classified",
            Self::GeoDetected => "geo_detected",
            Self::DrugsExtracted => "drugs_extracted",
            Self::Summarized => "summarized",
            Self::Assembled => "assembled",
        };
        f.write_str(name)
    }
}

/// Enrichment result for one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedRecord {
    pub title: String,
    /// English summary.
    pub summary: String,
    pub original_body: String,
    pub translated_body: String,
    /// `dd/mm/yyyy` when the scraped date could be parsed.
    pub date: String,
    pub document_type: String,
    pub document_keywords: Vec<String>,
    pub product_type: String,
    pub product_keywords: Vec<String>,
    pub countries: BTreeSet<String>,
    pub regions: BTreeSet<String>,
    pub drug_names: BTreeSet<String>,
    pub language: Language,
    pub inferred_country: Option<String>,
    pub source_url: String,
    pub article_url: String,
    /// Stages whose output fell back to a sentinel value.
    pub degraded: Vec<Stage>,
}

impl EnrichedRecord {
    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }
}

/// Spreadsheet-shaped row with the column names crawlers historically wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Summary")]
    pub summary: String,
    #[serde(rename = "Article URL")]
    pub article_url: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Document_Type")]
    pub document_type: String,
    #[serde(rename = "Product_Type")]
    pub product_type: String,
    #[serde(rename = "Countries")]
    pub countries: String,
    #[serde(rename = "Regions")]
    pub regions: String,
    #[serde(rename = "Drug_names")]
    pub drug_names: String,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Source URL")]
    pub source_url: String,
    #[serde(rename = "Document_Keywords")]
    pub document_keywords: String,
    #[serde(rename = "Product_Keywords")]
    pub product_keywords: String,
    #[serde(rename = "Inferred_Country")]
    pub inferred_country: String,
}

impl From<&EnrichedRecord> for ExportRow {
    fn from(record: &EnrichedRecord) -> Self {
        Self {
            title: record.title.clone(),
            summary: record.summary.clone(),
            article_url: record.article_url.clone(),
            date: record.date.clone(),
            document_type: record.document_type.clone(),
            product_type: record.product_type.clone(),
            countries: join_or_none(&record.countries),
            regions: join_or_none(&record.regions),
            drug_names: join_or_none(&record.drug_names),
            language: record.language.to_string(),
            source_url: record.source_url.clone(),
            document_keywords: join_or_none(&record.document_keywords),
            product_keywords: join_or_none(&record.product_keywords),
            inferred_country: record
                .inferred_country
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

/// Join with `", "`, writing [`NONE`] for an empty collection.
pub fn join_or_none<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let joined = items
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        NONE.to_string()
    } else {
        joined
    }
}
