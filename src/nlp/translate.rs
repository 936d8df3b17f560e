//! Translation into English through an external service.
//!
//! [`HttpTranslator`] speaks the LibreTranslate JSON API, [`RetryTranslator`]
//! adds exponential backoff for transient failures and [`EnglishTranslator`]
//! applies the no-op rules, chunking and the fallback policy on top of any
//! [`Translate`] backend.

use std::{
    fmt,
    future::Future,
    str::FromStr,
    time::{Duration, Instant},
};

use rand::Rng;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::time::{sleep, timeout};
use tracing::{debug, error, instrument, warn};
use url::Url;

use crate::{
    config::Settings,
    error::{ParseFallbackError, TranslateError},
    nlp::language::Language,
};

/// Placeholder used by [`TranslationFallback::Sentinel`].
pub const TRANSLATION_UNAVAILABLE: &str = "[Translation Not Available]";

/// What a failed translation degrades to. Chosen once per run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationFallback {
    /// Keep the source-language text.
    #[default]
    Original,
    /// Replace the text with [`TRANSLATION_UNAVAILABLE`].
    Sentinel,
}

impl TranslationFallback {
    pub fn apply(self, original: &str) -> String {
        match self {
            Self::Original => original.to_string(),
            Self::Sentinel => TRANSLATION_UNAVAILABLE.to_string(),
        }
    }
}

impl FromStr for TranslationFallback {
    type Err = ParseFallbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "original" => Ok(Self::Original),
            "sentinel" => Ok(Self::Sentinel),
            other => Err(ParseFallbackError(other.to_string())),
        }
    }
}

/// Translation backend. `source` is an ISO 639-1 code; the target is English.
///
/// Implementations may be written as `async fn`; the returned future must be
/// `Send` so enrichment can run on spawned tasks.
pub trait Translate: Send + Sync {
    fn translate(
        &self,
        text: &str,
        source: &str,
    ) -> impl Future<Output = Result<String, TranslateError>> + Send;
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

/// LibreTranslate-compatible HTTP client. Without an endpoint every call
/// fails with [`TranslateError::NotConfigured`].
#[derive(Debug, Clone)]
pub struct HttpTranslator {
    client: Client,
    endpoint: Option<Url>,
    api_key: Option<String>,
    timeout: Duration,
}

impl HttpTranslator {
    pub fn new(
        base_url: Option<Url>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .user_agent("regnews/0.1")
            .gzip(true)
            .build()?;
        let endpoint = base_url.map(|base| {
            let mut endpoint = base;
            let path = format!("{}/translate", endpoint.path().trim_end_matches('/'));
            endpoint.set_path(&path);
            endpoint
        });
        Ok(Self {
            client,
            endpoint,
            api_key,
            timeout,
        })
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        use anyhow::Context;

        let base = settings
            .translate_url
            .as_deref()
            .map(Url::parse)
            .transpose()
            .context("parsing TRANSLATE_URL")?;
        Ok(Self::new(
            base,
            settings.translate_api_key.clone(),
            settings.translate_timeout,
        )?)
    }

    pub fn endpoint(&self) -> Option<&Url> {
        self.endpoint.as_ref()
    }
}

impl Translate for HttpTranslator {
    async fn translate(&self, text: &str, source: &str) -> Result<String, TranslateError> {
        let endpoint = self.endpoint.as_ref().ok_or(TranslateError::NotConfigured)?;
        let body = TranslateRequest {
            q: text,
            source,
            target: "en",
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        timeout(self.timeout, self.request(endpoint, &body))
            .await
            .map_err(|_| TranslateError::Timeout(self.timeout))?
    }
}

impl HttpTranslator {
    async fn request(
        &self,
        endpoint: &Url,
        body: &TranslateRequest<'_>,
    ) -> Result<String, TranslateError> {
        let resp = self.client.post(endpoint.clone()).json(body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TranslateError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let payload: TranslateResponse = resp.json().await?;
        payload
            .translated_text
            .filter(|t| !t.trim().is_empty())
            .ok_or(TranslateError::EmptyResponse)
    }
}

/// Retries transient failures of the wrapped backend with exponential backoff.
///
/// ```text
/// delay = min(base_delay * 2^(attempt-1), max_delay) + jitter(0..=250ms)
/// ```
pub struct RetryTranslator<T> {
    inner: T,
    max_attempts: usize,
    base_delay: Duration,
    max_delay: Duration,
}

impl<T: Translate> RetryTranslator<T> {
    /// `max_attempts` counts the first call; values below 1 are treated as 1.
    pub fn new(inner: T, max_attempts: usize, base_delay: Duration) -> Self {
        Self {
            inner,
            max_attempts: max_attempts.max(1),
            base_delay,
            max_delay: Duration::from_secs(30),
        }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }
}

impl<T> fmt::Debug for RetryTranslator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryTranslator")
            .field("max_attempts", &self.max_attempts)
            .field("base_delay", &self.base_delay)
            .field("max_delay", &self.max_delay)
            .finish()
    }
}

impl<T: Translate> Translate for RetryTranslator<T> {
    #[instrument(level = "debug", skip_all, fields(source = %source))]
    async fn translate(&self, text: &str, source: &str) -> Result<String, TranslateError> {
        let total_t0 = Instant::now();
        let mut attempt = 0usize;

        loop {
            match self.inner.translate(text, source).await {
                Ok(out) => return Ok(out),
                Err(err) => {
                    attempt += 1;
                    if !err.is_transient() || attempt >= self.max_attempts {
                        error!(
                            attempt,
                            max = self.max_attempts,
                            elapsed_ms_total = total_t0.elapsed().as_millis() as u64,
                            error = %err,
                            "translation failed"
                        );
                        return Err(err);
                    }

                    let delay = self
                        .base_delay
                        .saturating_mul(1 << (attempt - 1).min(16))
                        .min(self.max_delay);
                    let jitter_ms: u64 = rand::thread_rng().gen_range(0..=250);
                    let delay = delay + Duration::from_millis(jitter_ms);

                    warn!(
                        attempt,
                        max = self.max_attempts,
                        ?delay,
                        error = %err,
                        "translation attempt failed; backing off"
                    );
                    sleep(delay).await;
                }
            }
        }
    }
}

/// Result of [`EnglishTranslator::translate_from`].
#[derive(Debug)]
pub enum TranslationOutcome {
    /// Nothing to do: empty text, English or unknown source.
    Unchanged(String),
    Translated(String),
    /// The backend failed and the fallback policy produced the text.
    Fallback { text: String, error: TranslateError },
}

impl TranslationOutcome {
    pub fn text(&self) -> &str {
        match self {
            Self::Unchanged(text) | Self::Translated(text) | Self::Fallback { text, .. } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Unchanged(text) | Self::Translated(text) | Self::Fallback { text, .. } => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// English-normalising front end over a [`Translate`] backend.
#[derive(Debug)]
pub struct EnglishTranslator<T> {
    backend: T,
    chunk_chars: usize,
    chunk_threshold: usize,
    fallback: TranslationFallback,
}

impl<T: Translate> EnglishTranslator<T> {
    pub fn new(backend: T) -> Self {
        Self {
            backend,
            chunk_chars: 4000,
            chunk_threshold: 5000,
            fallback: TranslationFallback::default(),
        }
    }

    /// Texts longer than `threshold` characters are sent in pieces of at most
    /// `chunk_chars` characters.
    pub fn with_chunking(mut self, chunk_chars: usize, threshold: usize) -> Self {
        self.chunk_chars = chunk_chars.max(1);
        self.chunk_threshold = threshold;
        self
    }

    pub fn with_fallback(mut self, fallback: TranslationFallback) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn fallback(&self) -> TranslationFallback {
        self.fallback
    }

    pub fn backend(&self) -> &T {
        &self.backend
    }

    /// Translate `text` given a language label such as `"da"`, `"Danish"`
    /// or `"Unknown"`.
    pub async fn to_english(&self, text: &str, source: &str) -> String {
        let lang = Language::from_name(source).unwrap_or(Language::Unknown);
        self.translate_from(text, &lang).await.into_text()
    }

    /// Translate `text` written in `source`, applying the fallback policy on failure.
    pub async fn translate_from(&self, text: &str, source: &Language) -> TranslationOutcome {
        let code = match source.code() {
            Some(code) if code != "en" && !text.trim().is_empty() => code,
            _ => return TranslationOutcome::Unchanged(text.to_string()),
        };

        match self.translate_chunked(text, code).await {
            Ok(out) => TranslationOutcome::Translated(out),
            Err(error) => {
                warn!(%error, source = code, fallback = ?self.fallback, "translation unavailable");
                TranslationOutcome::Fallback {
                    text: self.fallback.apply(text),
                    error,
                }
            }
        }
    }

    async fn translate_chunked(&self, text: &str, code: &str) -> Result<String, TranslateError> {
        if text.chars().count() <= self.chunk_threshold {
            return self.backend.translate(text, code).await;
        }
        let chunks = split_chunks(text, self.chunk_chars);
        debug!(chunks = chunks.len(), "translating in chunks");
        let mut out = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            out.push(self.backend.translate(chunk, code).await?);
        }
        Ok(out.join(" "))
    }
}

/// Split `text` into pieces of at most `max_chars` characters, cutting at the
/// last whitespace of a window when there is one. Pieces are trimmed and
/// never empty.
pub fn split_chunks(text: &str, max_chars: usize) -> Vec<&str> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut rest = text.trim();
    while !rest.is_empty() {
        let window_end = rest
            .char_indices()
            .nth(max_chars)
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        if window_end == rest.len() {
            chunks.push(rest);
            break;
        }
        if rest[window_end..].starts_with(char::is_whitespace) {
            chunks.push(rest[..window_end].trim());
            rest = rest[window_end..].trim_start();
            continue;
        }
        let window = &rest[..window_end];
        let cut = window
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(idx, _)| idx)
            .filter(|&idx| idx > 0)
            .unwrap_or(window_end);
        let (head, tail) = rest.split_at(cut);
        let head = head.trim();
        if !head.is_empty() {
            chunks.push(head);
        }
        rest = tail.trim_start();
    }
    chunks
}
