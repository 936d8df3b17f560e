//! Error types raised by the enrichment components.

use thiserror::Error;

/// Failures while building the lexicon. These abort the run.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("reading drug table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("fetching drug table {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("parsing drug table: {0}")]
    Csv(#[from] csv::Error),
    #[error("column allow-list must include the primary column {0}")]
    PrimaryColumnNotAllowed(&'static str),
    #[error("drug table has no {0} column")]
    MissingPrimaryColumn(&'static str),
    #[error("drug table yielded no usable terms")]
    Empty,
    #[error("building phrase matcher: {0}")]
    Matcher(#[from] aho_corasick::BuildError),
}

/// Failures of the language identification backend.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("language could not be determined")]
    Undetermined,
}

/// Failures of the translation backend.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("no translation endpoint configured")]
    NotConfigured,
    #[error("translation request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("translation service answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("translation timed out after {0:?}")]
    Timeout(std::time::Duration),
    #[error("translation service returned no text")]
    EmptyResponse,
}

impl TranslateError {
    /// Whether retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout(_) => true,
            Self::Http(err) => err.is_timeout() || err.is_connect() || err.is_request(),
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::NotConfigured | Self::EmptyResponse => false,
        }
    }
}

/// Unrecognised `TRANSLATION_FALLBACK` value.
#[derive(Debug, Error)]
#[error("unknown translation fallback {0:?}; expected `original` or `sentinel`")]
pub struct ParseFallbackError(pub String);
