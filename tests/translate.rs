use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
    time::Duration,
};

use futures::executor::block_on;
use proptest::prelude::*;
use regnews::{
    nlp::{
        language::Language,
        translate::{
            split_chunks, EnglishTranslator, HttpTranslator, RetryTranslator, Translate,
            TranslationFallback, TranslationOutcome, TRANSLATION_UNAVAILABLE,
        },
    },
    TranslateError,
};

/// Upper-cases its input and records every call.
#[derive(Default)]
struct Shouting {
    calls: Mutex<Vec<(String, String)>>,
}

impl Translate for Shouting {
    async fn translate(&self, text: &str, source: &str) -> Result<String, TranslateError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), source.to_string()));
        Ok(text.to_uppercase())
    }
}

/// Fails `failures` times with the given status, then echoes.
struct Flaky {
    failures: usize,
    status: u16,
    calls: AtomicUsize,
}

impl Flaky {
    fn new(failures: usize, status: u16) -> Self {
        Self {
            failures,
            status,
            calls: AtomicUsize::new(0),
        }
    }
}

impl Translate for &Flaky {
    async fn translate(&self, text: &str, _source: &str) -> Result<String, TranslateError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            Err(TranslateError::Status {
                status: self.status,
                body: "busy".to_string(),
            })
        } else {
            Ok(format!("en:{text}"))
        }
    }
}

#[test]
fn english_and_empty_inputs_are_untouched() {
    let translator = EnglishTranslator::new(Shouting::default());
    assert_eq!(block_on(translator.to_english("hello", "english")), "hello");
    assert_eq!(block_on(translator.to_english("", "danish")), "");
    assert_eq!(block_on(translator.to_english("hej", "Unknown")), "hej");
    assert!(translator.backend().calls.lock().unwrap().is_empty());
}

#[test]
fn language_names_resolve_to_codes() {
    let translator = EnglishTranslator::new(Shouting::default());
    assert_eq!(block_on(translator.to_english("hej", "Danish")), "HEJ");
    assert_eq!(block_on(translator.to_english("olá", "pt")), "OLÁ");
    let calls = translator.backend().calls.lock().unwrap();
    assert_eq!(calls[0].1, "da");
    assert_eq!(calls[1].1, "pt");
}

#[test]
fn less_common_detector_languages_are_translated() {
    let translator = EnglishTranslator::new(Shouting::default());
    let out = block_on(translator.translate_from("Агенција", &Language::from_code("sr")));
    assert!(matches!(out, TranslationOutcome::Translated(_)));
    assert_eq!(block_on(translator.to_english("gamarjoba", "Georgian")), "GAMARJOBA");
    let calls = translator.backend().calls.lock().unwrap();
    assert_eq!(calls[0].1, "sr");
    assert_eq!(calls[1].1, "ka");
}

#[test]
fn long_texts_are_chunked_and_rejoined() {
    let translator = EnglishTranslator::new(Shouting::default()).with_chunking(10, 20);
    let text = "alpha beta gamma delta epsilon zeta";
    let out = block_on(translator.translate_from(text, &Language::from_code("de")));
    assert!(matches!(out, TranslationOutcome::Translated(_)));
    assert_eq!(out.text(), "ALPHA BETA GAMMA DELTA EPSILON ZETA");
    let calls = translator.backend().calls.lock().unwrap();
    assert!(calls.len() > 1);
    assert!(calls.iter().all(|(chunk, _)| chunk.chars().count() <= 10));
}

#[test]
fn split_chunks_prefers_whitespace() {
    assert_eq!(split_chunks("aaaa bbbb cccc", 9), vec!["aaaa bbbb", "cccc"]);
    assert_eq!(split_chunks("aaaa bbbb cccc", 7), vec!["aaaa", "bbbb", "cccc"]);
    assert_eq!(split_chunks("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    assert_eq!(split_chunks("ééééé", 2), vec!["éé", "éé", "é"]);
    assert!(split_chunks("   ", 4).is_empty());
}

#[tokio::test]
async fn transient_failures_are_retried() {
    let flaky = Flaky::new(2, 503);
    let retry = RetryTranslator::new(&flaky, 3, Duration::from_millis(1));
    let out = retry.translate("hallo", "de").await.unwrap();
    assert_eq!(out, "en:hallo");
    assert_eq!(flaky.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn retries_stop_at_max_attempts() {
    let flaky = Flaky::new(10, 429);
    let retry = RetryTranslator::new(&flaky, 3, Duration::from_millis(1));
    let err = retry.translate("hallo", "de").await.unwrap_err();
    assert!(matches!(err, TranslateError::Status { status: 429, .. }));
    assert_eq!(flaky.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn permanent_failures_are_not_retried() {
    let flaky = Flaky::new(10, 400);
    let retry = RetryTranslator::new(&flaky, 3, Duration::from_millis(1));
    assert!(retry.translate("hallo", "de").await.is_err());
    assert_eq!(flaky.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failures_apply_the_configured_fallback() {
    let flaky = Flaky::new(10, 400);
    let german = Language::from_code("de");

    let keep = EnglishTranslator::new(&flaky);
    let out = keep.translate_from("Guten Tag", &german).await;
    assert!(out.is_fallback());
    assert_eq!(out.text(), "Guten Tag");

    let sentinel = EnglishTranslator::new(&flaky).with_fallback(TranslationFallback::Sentinel);
    let out = sentinel.translate_from("Guten Tag", &german).await;
    assert!(out.is_fallback());
    assert_eq!(out.into_text(), TRANSLATION_UNAVAILABLE);
}

#[tokio::test]
async fn unconfigured_http_translator_reports_it() {
    let http = HttpTranslator::new(None, None, Duration::from_secs(1)).unwrap();
    let err = http.translate("hallo", "de").await.unwrap_err();
    assert!(matches!(err, TranslateError::NotConfigured));
    assert!(!err.is_transient());
}

#[test]
fn http_endpoint_appends_translate_path() {
    let base = url::Url::parse("http://localhost:5000/").unwrap();
    let http = HttpTranslator::new(Some(base), None, Duration::from_secs(1)).unwrap();
    assert_eq!(
        http.endpoint().map(|u| u.as_str()),
        Some("http://localhost:5000/translate")
    );
}

#[test]
fn fallback_policy_parses() {
    assert_eq!(
        "Sentinel".parse::<TranslationFallback>().unwrap(),
        TranslationFallback::Sentinel
    );
    assert_eq!(
        "original".parse::<TranslationFallback>().unwrap(),
        TranslationFallback::Original
    );
    assert!("drop".parse::<TranslationFallback>().is_err());
    assert_eq!(TranslationFallback::default(), TranslationFallback::Original);
}

proptest! {
    #[test]
    fn english_source_is_identity(text in "\\PC{0,300}") {
        let translator = EnglishTranslator::new(Shouting::default());
        prop_assert_eq!(block_on(translator.to_english(&text, "english")), text.clone());
        prop_assert_eq!(block_on(translator.to_english("", "german")), "");
    }

    #[test]
    fn chunks_never_exceed_limit(text in "[a-z ]{0,200}", max in 1usize..30) {
        for chunk in split_chunks(&text, max) {
            prop_assert!(!chunk.is_empty());
            prop_assert!(chunk.chars().count() <= max);
        }
    }
}
