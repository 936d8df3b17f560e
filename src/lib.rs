//! Enrichment of scraped regulatory-agency news articles: language detection,
//! translation, document/product classification, country and drug detection,
//! and summarisation over a shared lexicon.

pub mod cli;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod logging;
pub mod nlp;
pub mod pipeline;

pub use error::{DetectError, LexiconError, TranslateError};
pub use lexicon::LexiconSet;
pub use pipeline::{ArticleInput, EnrichedRecord, Pipeline, PipelineOptions};
