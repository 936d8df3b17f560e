//! Drug/target reference table ingestion.

use std::{borrow::Cow, collections::BTreeSet};

use reqwest::Client;
use tracing::{info, warn};

use crate::error::LexiconError;

/// Column that must be present in both the allow-list and the table header.
pub const PRIMARY_COLUMN: &str = "DRUG_NAME";

/// Terms must be longer than this many characters to enter the lexicon.
pub const MIN_TERM_CHARS: usize = 3;

/// Read the raw table bytes from a local path or an http(s) URL.
pub async fn read_source(source: &str) -> Result<Vec<u8>, LexiconError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        return fetch(source).await;
    }
    tokio::fs::read(source)
        .await
        .map_err(|source_err| LexiconError::Io {
            path: source.to_string(),
            source: source_err,
        })
}

async fn fetch(url: &str) -> Result<Vec<u8>, LexiconError> {
    let wrap = |source| LexiconError::Fetch {
        url: url.to_string(),
        source,
    };
    let client = Client::builder()
        .user_agent("regnews/0.1")
        .gzip(true)
        .build()
        .map_err(wrap)?;
    info!(%url, "downloading drug table");
    let resp = client
        .get(url)
        .send()
        .await
        .and_then(|resp| resp.error_for_status())
        .map_err(wrap)?;
    let bytes = resp.bytes().await.map_err(wrap)?;
    info!(%url, size = bytes.len(), "downloaded drug table");
    Ok(bytes.to_vec())
}

/// Harvest lower-cased terms from the allowed columns of a tab-separated table.
///
/// The bytes are decoded as UTF-8 and fall back to Latin-1 when that fails.
pub fn parse_terms(bytes: &[u8], columns: &[String]) -> Result<BTreeSet<String>, LexiconError> {
    if !columns.iter().any(|c| c == PRIMARY_COLUMN) {
        return Err(LexiconError::PrimaryColumnNotAllowed(PRIMARY_COLUMN));
    }
    let text = decode(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut selected = Vec::new();
    for column in columns {
        match headers.iter().position(|h| h.trim() == column) {
            Some(idx) => selected.push(idx),
            None if column == PRIMARY_COLUMN => {
                return Err(LexiconError::MissingPrimaryColumn(PRIMARY_COLUMN))
            }
            None => warn!(%column, "drug table lacks allowed column; skipping"),
        }
    }

    let mut terms = BTreeSet::new();
    let mut rows = 0usize;
    for record in reader.records() {
        let record = record?;
        rows += 1;
        for &idx in &selected {
            if let Some(term) = record.get(idx).and_then(normalise_term) {
                terms.insert(term);
            }
        }
    }
    info!(rows, columns = selected.len(), terms = terms.len(), "parsed drug table");
    Ok(terms)
}

fn normalise_term(raw: &str) -> Option<String> {
    let term = raw.trim().to_lowercase();
    (term.chars().count() > MIN_TERM_CHARS).then_some(term)
}

fn decode(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text.strip_prefix('\u{feff}').unwrap_or(text)),
        Err(err) => {
            warn!(offset = err.valid_up_to(), "drug table is not UTF-8; decoding as Latin-1");
            // Latin-1 maps every byte to the code point of the same value.
            Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect())
        }
    }
}
