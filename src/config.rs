//! Runtime configuration utilities for regnews.

use std::{
    env,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use anyhow::Context;
use serde::Deserialize;

use crate::nlp::translate::TranslationFallback;

/// Drug/target table columns harvested into the drug lexicon by default.
pub const DEFAULT_DRUG_COLUMNS: &[&str] = &[
    "DRUG_NAME",
    "GENE",
    "SWISSPROT",
    "ACTION_TYPE",
    "TARGET_CLASS",
    "TARGET_NAME",
];

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Root folder for cached inputs.
    pub data_dir: PathBuf,
    /// Root folder for exported rows.
    pub outputs_dir: PathBuf,
    /// Path or http(s) URL of the tab-separated drug/target table.
    pub drug_table: String,
    /// Allow-list of table columns feeding the drug lexicon.
    pub drug_columns: Vec<String>,
    /// LibreTranslate-compatible endpoint; `None` disables translation.
    pub translate_url: Option<String>,
    pub translate_api_key: Option<String>,
    pub translate_timeout: Duration,
    pub translate_max_attempts: usize,
    pub translate_chunk_chars: usize,
    pub translate_chunk_threshold: usize,
    pub translation_fallback: TranslationFallback,
    /// Word budget of the extractive summary.
    pub summary_word_limit: usize,
    /// Tag articles without any country mention as `Global`.
    pub global_fallback: bool,
    /// Articles enriched concurrently by the batch command.
    pub workers: usize,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let outputs_dir = env::var("OUTPUTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./outputs"));
        let drug_table = env::var("DRUG_TABLE").unwrap_or_else(|_| {
            data_dir
                .join("drug.target.interaction.tsv")
                .to_string_lossy()
                .into_owned()
        });
        let drug_columns = env::var("DRUG_COLUMNS")
            .ok()
            .map(|raw| parse_list(&raw))
            .filter(|cols| !cols.is_empty())
            .unwrap_or_else(|| DEFAULT_DRUG_COLUMNS.iter().map(|c| c.to_string()).collect());
        let translate_url = env::var("TRANSLATE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let translate_api_key = env::var("TRANSLATE_API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty());
        let translation_fallback = match env::var("TRANSLATION_FALLBACK") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("parsing TRANSLATION_FALLBACK={raw}"))?,
            Err(_) => TranslationFallback::default(),
        };

        std::fs::create_dir_all(&outputs_dir).context("creating outputs dir")?;

        Ok(Self {
            data_dir,
            outputs_dir,
            drug_table,
            drug_columns,
            translate_url,
            translate_api_key,
            translate_timeout: Duration::from_secs(env_or("TRANSLATE_TIMEOUT_SECS", 20)),
            translate_max_attempts: env_or("TRANSLATE_MAX_ATTEMPTS", 3),
            translate_chunk_chars: env_or("TRANSLATE_CHUNK_CHARS", 4000),
            translate_chunk_threshold: env_or("TRANSLATE_CHUNK_THRESHOLD", 5000),
            translation_fallback,
            summary_word_limit: env_or("SUMMARY_WORD_LIMIT", 40),
            global_fallback: env_or("GLOBAL_FALLBACK", true),
            workers: env_or("ENRICH_WORKERS", 4usize).max(1),
        })
    }

    /// Convenience helper for derived output path segments.
    pub fn join_output<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.outputs_dir.join(path)
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
