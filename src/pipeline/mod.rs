//! Enrichment orchestrator.
//!
//! `Received -> LanguageDetected -> (Translated | SkippedTranslation) ->
//! Classified -> GeoDetected -> DrugsExtracted -> Summarized -> Assembled`.
//! [`Pipeline::enrich`] always produces a record; a failing stage degrades its
//! field to a sentinel and is listed in [`EnrichedRecord::degraded`].

pub mod dates;
pub mod record;

use std::{sync::Arc, time::Duration};

use tracing::{debug, instrument, warn};

use crate::{
    config::Settings,
    lexicon::LexiconSet,
    nlp::{
        classify, drugs, geo,
        language::{
            detect_language, DetectLanguage, Language, WhatlangDetector, MIN_DETECT_CHARS,
        },
        summarize::{clean_text, summarize, NO_SUMMARY},
        translate::{
            EnglishTranslator, HttpTranslator, RetryTranslator, Translate, TranslationOutcome,
        },
    },
};

pub use dates::{format_date, format_date_with, DateOrder};
pub use record::{ArticleInput, EnrichedRecord, ExportRow, Stage};

/// Orchestrator knobs that do not belong to a single component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    pub summary_word_limit: usize,
    pub global_fallback: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            summary_word_limit: 40,
            global_fallback: true,
        }
    }
}

impl From<&Settings> for PipelineOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            summary_word_limit: settings.summary_word_limit,
            global_fallback: settings.global_fallback,
        }
    }
}

/// Production pipeline: `whatlang` detection and LibreTranslate with retries.
pub type DefaultPipeline = Pipeline<WhatlangDetector, RetryTranslator<HttpTranslator>>;

/// Article enrichment over a shared, read-only lexicon.
#[derive(Debug)]
pub struct Pipeline<D, T> {
    lexicon: Arc<LexiconSet>,
    detector: D,
    translator: EnglishTranslator<T>,
    options: PipelineOptions,
}

impl DefaultPipeline {
    pub fn from_settings(lexicon: Arc<LexiconSet>, settings: &Settings) -> anyhow::Result<Self> {
        let http = HttpTranslator::from_settings(settings)?;
        let backend = RetryTranslator::new(
            http,
            settings.translate_max_attempts,
            Duration::from_secs(1),
        );
        let translator = EnglishTranslator::new(backend)
            .with_chunking(settings.translate_chunk_chars, settings.translate_chunk_threshold)
            .with_fallback(settings.translation_fallback);
        Ok(Pipeline::new(
            lexicon,
            WhatlangDetector,
            translator,
            PipelineOptions::from(settings),
        ))
    }
}

impl<D: DetectLanguage, T: Translate> Pipeline<D, T> {
    pub fn new(
        lexicon: Arc<LexiconSet>,
        detector: D,
        translator: EnglishTranslator<T>,
        options: PipelineOptions,
    ) -> Self {
        Self {
            lexicon,
            detector,
            translator,
            options,
        }
    }

    pub fn lexicon(&self) -> &LexiconSet {
        &self.lexicon
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Enrich one article. Never fails.
    #[instrument(level = "debug", skip_all, fields(url = %article.article_url))]
    pub async fn enrich(&self, article: &ArticleInput) -> EnrichedRecord {
        let url = article.article_url.as_str();
        let mut degraded = Vec::new();
        debug!(stage = %Stage::Received);

        let title = clean_text(&article.title).replace('\n', " ");
        let body = clean_text(&article.body);
        let sample = if body.is_empty() { &title } else { &body };

        let language = detect_language(&self.detector, sample);
        if language == Language::Unknown && sample.trim().chars().count() >= MIN_DETECT_CHARS {
            self.degrade(&mut degraded, Stage::LanguageDetected, url);
        }
        debug!(stage = %Stage::LanguageDetected, %language);

        let mut translation_failed = false;
        let mut english = |outcome: TranslationOutcome| {
            translation_failed |= outcome.is_fallback();
            outcome.into_text()
        };
        let title_en = english(self.translator.translate_from(&title, &language).await);
        let body_en = english(self.translator.translate_from(&body, &language).await);
        let listing_summary = match article.summary.as_deref().map(clean_text) {
            Some(summary) if !summary.is_empty() => {
                Some(english(self.translator.translate_from(&summary, &language).await))
            }
            _ => None,
        };
        if translation_failed {
            self.degrade(&mut degraded, Stage::Translated, url);
        } else if language.is_unknown() || language.is_english() {
            debug!(stage = %Stage::SkippedTranslation);
        } else {
            debug!(stage = %Stage::Translated);
        }

        let analysis = format!("{title_en}\n{body_en}");
        let drug_names = drugs::extract(&self.lexicon, &analysis);
        let document = classify::classify_document(&self.lexicon, &analysis);
        let product = classify::classify_product_with_drugs(&self.lexicon, &analysis, &drug_names);
        debug!(
            stage = %Stage::Classified,
            document_type = %document.label,
            product_type = %product.label
        );

        let located = geo::locate(&self.lexicon, &analysis, self.options.global_fallback);
        debug!(stage = %Stage::GeoDetected, countries = located.countries.len());
        debug!(stage = %Stage::DrugsExtracted, drugs = drug_names.len());

        let summary = match listing_summary {
            Some(summary) => summary,
            None => summarize(&body_en, self.options.summary_word_limit),
        };
        if summary == NO_SUMMARY && !body_en.trim().is_empty() {
            self.degrade(&mut degraded, Stage::Summarized, url);
        }
        debug!(stage = %Stage::Summarized);

        let origin = if article.article_url.trim().is_empty() {
            &article.source_url
        } else {
            &article.article_url
        };
        let inferred_country = geo::infer_country(origin, &language);
        let date_order = article
            .date_order
            .unwrap_or_else(|| DateOrder::for_url(origin));

        let record = EnrichedRecord {
            title: title_en,
            summary,
            original_body: body,
            translated_body: body_en,
            date: format_date_with(&article.date, date_order),
            document_type: document.label,
            document_keywords: document.keywords,
            product_type: product.label,
            product_keywords: product.keywords,
            countries: located.countries,
            regions: located.regions,
            drug_names,
            language,
            inferred_country,
            source_url: article.source_url.clone(),
            article_url: article.article_url.clone(),
            degraded,
        };
        debug!(stage = %Stage::Assembled, degraded = record.degraded.len());
        record
    }

    fn degrade(&self, degraded: &mut Vec<Stage>, stage: Stage, url: &str) {
        warn!(%stage, %url, "stage degraded to sentinel");
        degraded.push(stage);
    }
}
