use std::{collections::BTreeSet, sync::Arc};

use regnews::{
    lexicon::{LexiconSet, OTHER_DOCUMENT_TYPE, OTHER_PRODUCT_TYPE},
    nlp::{
        language::{DetectLanguage, Language, WhatlangDetector},
        summarize::NO_SUMMARY,
        translate::{EnglishTranslator, Translate, TranslationFallback, TRANSLATION_UNAVAILABLE},
    },
    pipeline::{record::ExportRow, DateOrder, Stage},
    ArticleInput, DetectError, Pipeline, PipelineOptions, TranslateError,
};

struct Declared(Option<&'static str>);

impl DetectLanguage for Declared {
    fn detect(&self, _text: &str) -> Result<Language, DetectError> {
        self.0
            .map(Language::from_code)
            .ok_or(DetectError::Undetermined)
    }
}

/// Pretends every source text is this English text.
struct Canned(&'static str);

impl Translate for Canned {
    async fn translate(&self, _text: &str, _source: &str) -> Result<String, TranslateError> {
        Ok(self.0.to_string())
    }
}

struct Down;

impl Translate for Down {
    async fn translate(&self, _text: &str, _source: &str) -> Result<String, TranslateError> {
        Err(TranslateError::NotConfigured)
    }
}

fn lexicon() -> Arc<LexiconSet> {
    Arc::new(
        LexiconSet::new(BTreeSet::from([
            "paracetamol".to_string(),
            "ibuprofen".to_string(),
        ]))
        .unwrap(),
    )
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn pipeline<D: DetectLanguage, T: Translate>(
    detector: D,
    translator: EnglishTranslator<T>,
) -> Pipeline<D, T> {
    Pipeline::new(lexicon(), detector, translator, PipelineOptions::default())
}

#[tokio::test]
async fn english_article_is_fully_enriched() {
    let pipeline = pipeline(Declared(Some("en")), EnglishTranslator::new(Down));
    let article = ArticleInput {
        title: "EMA adopts new guideline on COVID-19 vaccine labelling for Germany".to_string(),
        body: "Regulators reviewed a monoclonal antibody alongside paracetamol.".to_string(),
        source_url: "https://www.ema.europa.eu".to_string(),
        article_url: "https://www.ema.europa.eu/en/news/guideline".to_string(),
        date: "21 July 2025".to_string(),
        ..ArticleInput::default()
    };

    let record = pipeline.enrich(&article).await;
    assert_eq!(record.document_type, "Directive");
    assert_eq!(record.document_keywords, vec!["guideline"]);
    assert_eq!(record.product_type, "Biological");
    assert!(record.countries.contains("Germany"));
    assert!(record.regions.contains("Central Europe"));
    assert_eq!(record.drug_names, set(&["paracetamol"]));
    assert_eq!(record.language, Language::ENGLISH);
    assert_eq!(record.date, "21/07/2025");
    assert_eq!(record.inferred_country.as_deref(), Some("European Union"));
    assert_eq!(
        record.summary,
        "Regulators reviewed a monoclonal antibody alongside paracetamol."
    );
    assert!(record.degraded.is_empty());

    let row = ExportRow::from(&record);
    assert_eq!(row.drug_names, "paracetamol");
    assert_eq!(row.language, "English");
}

#[tokio::test]
async fn empty_article_degrades_to_sentinels() {
    let pipeline = pipeline(Declared(None), EnglishTranslator::new(Down));
    let record = pipeline.enrich(&ArticleInput::default()).await;

    assert_eq!(record.language, Language::Unknown);
    assert_eq!(record.summary, NO_SUMMARY);
    assert_eq!(record.countries, set(&["Global"]));
    assert_eq!(record.regions, set(&["Global"]));
    assert!(record.drug_names.is_empty());
    assert_eq!(record.document_type, OTHER_DOCUMENT_TYPE);
    assert_eq!(record.product_type, OTHER_PRODUCT_TYPE);
    assert_eq!(record.date, "Unknown");
    assert_eq!(record.inferred_country, None);
    assert!(record.degraded.is_empty());

    let row = ExportRow::from(&record);
    assert_eq!(row.drug_names, "None");
    assert_eq!(row.language, "Unknown");
    assert_eq!(row.inferred_country, "Unknown");
}

#[tokio::test]
async fn foreign_article_is_analysed_in_english() {
    let translator = EnglishTranslator::new(Canned(
        "Press release: shortage of ibuprofen in Denmark. Supplies recover next month.",
    ));
    let pipeline = pipeline(Declared(Some("da")), translator);
    let article = ArticleInput {
        title: "Mangel på ibuprofen".to_string(),
        body: "Lægemiddelstyrelsen meddeler mangel. Forsyningen normaliseres.".to_string(),
        article_url: "https://laegemiddelstyrelsen.dk/da/nyheder".to_string(),
        ..ArticleInput::default()
    };

    let record = pipeline.enrich(&article).await;
    assert_eq!(record.language.to_string(), "Danish");
    assert_eq!(record.document_type, "Press Release");
    assert_eq!(record.product_type, "Drug Product");
    assert_eq!(record.drug_names, set(&["ibuprofen"]));
    assert_eq!(record.countries, set(&["Denmark"]));
    assert_eq!(record.regions, set(&["Northern Europe"]));
    assert_eq!(record.inferred_country.as_deref(), Some("Denmark"));
    assert_eq!(record.original_body, article.body);
    assert!(record.translated_body.starts_with("Press release"));
    assert!(record.degraded.is_empty());
}

#[tokio::test]
async fn listing_summary_takes_precedence() {
    let pipeline = pipeline(Declared(Some("en")), EnglishTranslator::new(Down));
    let article = ArticleInput {
        title: "Safety update".to_string(),
        body: "Long body text that would otherwise be summarised.".to_string(),
        summary: Some("  Crawler supplied   summary ".to_string()),
        ..ArticleInput::default()
    };
    let record = pipeline.enrich(&article).await;
    assert_eq!(record.summary, "Crawler supplied summary");
}

#[tokio::test]
async fn translation_failure_keeps_original_text_by_default() {
    let pipeline = pipeline(Declared(Some("de")), EnglishTranslator::new(Down));
    let article = ArticleInput {
        title: "Neue Leitlinie".to_string(),
        body: "Das Arzneimittel Paracetamol ist in Deutschland knapp.".to_string(),
        ..ArticleInput::default()
    };
    let record = pipeline.enrich(&article).await;

    assert_eq!(record.degraded, vec![Stage::Translated]);
    assert_eq!(record.translated_body, article.body);
    assert_eq!(record.drug_names, set(&["paracetamol"]));
    assert!(record.countries.contains("Germany"));
}

#[tokio::test]
async fn sentinel_fallback_is_applied_uniformly() {
    let translator = EnglishTranslator::new(Down).with_fallback(TranslationFallback::Sentinel);
    let pipeline = pipeline(Declared(Some("de")), translator);
    let article = ArticleInput {
        title: "Neue Leitlinie".to_string(),
        body: "Das Arzneimittel Paracetamol ist knapp.".to_string(),
        ..ArticleInput::default()
    };
    let record = pipeline.enrich(&article).await;

    assert_eq!(record.title, TRANSLATION_UNAVAILABLE);
    assert_eq!(record.translated_body, TRANSLATION_UNAVAILABLE);
    assert_eq!(record.document_type, OTHER_DOCUMENT_TYPE);
    assert!(record.drug_names.is_empty());
    assert_eq!(record.degraded, vec![Stage::Translated]);
}

#[tokio::test]
async fn detector_failure_is_recorded() {
    let pipeline = pipeline(Declared(None), EnglishTranslator::new(Down));
    let article = ArticleInput {
        body: "A bulletin about paracetamol supply.".to_string(),
        ..ArticleInput::default()
    };
    let record = pipeline.enrich(&article).await;

    assert_eq!(record.language, Language::Unknown);
    assert_eq!(record.degraded, vec![Stage::LanguageDetected]);
    assert_eq!(record.document_type, "Announcement");
    assert_eq!(record.drug_names, set(&["paracetamol"]));
}

#[tokio::test]
async fn global_fallback_can_be_disabled() {
    let options = PipelineOptions {
        global_fallback: false,
        ..PipelineOptions::default()
    };
    let pipeline = Pipeline::new(
        lexicon(),
        Declared(Some("en")),
        EnglishTranslator::new(Down),
        options,
    );
    let article = ArticleInput {
        body: "Nothing geographic is mentioned here.".to_string(),
        ..ArticleInput::default()
    };
    let record = pipeline.enrich(&article).await;
    assert!(record.countries.is_empty());
    assert!(record.regions.is_empty());
    assert_eq!(ExportRow::from(&record).countries, "None");
}

#[tokio::test]
async fn serbian_article_is_translated() {
    let translator = EnglishTranslator::new(Canned(
        "The Medicines Agency of Serbia informs health workers about ibuprofen safety.",
    ));
    let pipeline = pipeline(WhatlangDetector, translator);
    let article = ArticleInput {
        title: "Безбедносне информације".to_string(),
        body: "Агенција за лекове и медицинска средства Србије обавештава здравствене \
               раднике о новим безбедносним информацијама за лек који се користи у лечењу."
            .to_string(),
        ..ArticleInput::default()
    };

    let record = pipeline.enrich(&article).await;
    assert!(!record.language.is_unknown(), "detected {}", record.language);
    assert!(record.translated_body.starts_with("The Medicines Agency"));
    assert_eq!(record.drug_names, set(&["ibuprofen"]));
    assert_eq!(record.countries, set(&["Serbia"]));
    assert!(record.degraded.is_empty());
}

#[tokio::test]
async fn federal_sites_read_numeric_dates_month_first() {
    let pipeline = pipeline(Declared(Some("en")), EnglishTranslator::new(Down));
    let mut article = ArticleInput {
        title: "FDA approves new treatment".to_string(),
        article_url: "https://www.fda.gov/news-events/press-announcements/x".to_string(),
        date: "04/03/2025".to_string(),
        ..ArticleInput::default()
    };
    assert_eq!(pipeline.enrich(&article).await.date, "03/04/2025");

    article.date_order = Some(DateOrder::DayFirst);
    assert_eq!(pipeline.enrich(&article).await.date, "04/03/2025");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn enrichment_runs_on_spawned_tasks() {
    let pipeline = Arc::new(pipeline(Declared(Some("en")), EnglishTranslator::new(Down)));
    let handles: Vec<_> = ["Germany", "Japan"]
        .into_iter()
        .map(|country| {
            let pipeline = Arc::clone(&pipeline);
            let article = ArticleInput {
                body: format!("A bulletin issued in {country}."),
                ..ArticleInput::default()
            };
            tokio::spawn(async move { pipeline.enrich(&article).await })
        })
        .collect();

    let mut countries = BTreeSet::new();
    for handle in handles {
        countries.extend(handle.await.unwrap().countries);
    }
    assert_eq!(countries, set(&["Germany", "Japan"]));
}
