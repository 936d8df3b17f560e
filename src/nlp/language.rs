//! Language identification and ISO 639 code/name resolution.

use std::fmt;

use serde::Serialize;
use strsim::jaro_winkler;
use tracing::{debug, warn};

use crate::error::DetectError;

/// Inputs with fewer non-blank characters than this are not analysed.
pub const MIN_DETECT_CHARS: usize = 3;

/// Minimum Jaro-Winkler similarity for a misspelt language name to resolve.
const NAME_SIMILARITY: f64 = 0.9;

/// ISO 639-1 code to display name. Covers every code `ISO_639_3_TO_1` emits.
const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("ak", "Akan"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("az", "Azerbaijani"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("eo", "Esperanto"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("jv", "Javanese"),
    ("ka", "Georgian"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("la", "Latin"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mr", "Marathi"),
    ("my", "Burmese"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("or", "Odia"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sn", "Shona"),
    ("so", "Somali"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tk", "Turkmen"),
    ("tl", "Tagalog"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
    ("yi", "Yiddish"),
    ("zh", "Chinese"),
    ("zu", "Zulu"),
];

/// ISO 639-3 codes reported by `whatlang` that have a 639-1 equivalent.
const ISO_639_3_TO_1: &[(&str, &str)] = &[
    ("afr", "af"),
    ("aka", "ak"),
    ("amh", "am"),
    ("ara", "ar"),
    ("aze", "az"),
    ("bel", "be"),
    ("ben", "bn"),
    ("bul", "bg"),
    ("cat", "ca"),
    ("ces", "cs"),
    ("cmn", "zh"),
    ("dan", "da"),
    ("deu", "de"),
    ("ell", "el"),
    ("eng", "en"),
    ("epo", "eo"),
    ("est", "et"),
    ("fin", "fi"),
    ("fra", "fr"),
    ("guj", "gu"),
    ("heb", "he"),
    ("hin", "hi"),
    ("hrv", "hr"),
    ("hun", "hu"),
    ("hye", "hy"),
    ("ind", "id"),
    ("ita", "it"),
    ("jav", "jv"),
    ("jpn", "ja"),
    ("kan", "kn"),
    ("kat", "ka"),
    ("khm", "km"),
    ("kor", "ko"),
    ("lat", "la"),
    ("lav", "lv"),
    ("lit", "lt"),
    ("mal", "ml"),
    ("mar", "mr"),
    ("mkd", "mk"),
    ("mya", "my"),
    ("nep", "ne"),
    ("nld", "nl"),
    ("nob", "no"),
    ("ori", "or"),
    ("pan", "pa"),
    ("pes", "fa"),
    ("pol", "pl"),
    ("por", "pt"),
    ("ron", "ro"),
    ("rus", "ru"),
    ("sin", "si"),
    ("slk", "sk"),
    ("slv", "sl"),
    ("sna", "sn"),
    ("spa", "es"),
    ("srp", "sr"),
    ("swe", "sv"),
    ("tam", "ta"),
    ("tel", "te"),
    ("tgl", "tl"),
    ("tha", "th"),
    ("tuk", "tk"),
    ("tur", "tr"),
    ("ukr", "uk"),
    ("urd", "ur"),
    ("uzb", "uz"),
    ("vie", "vi"),
    ("yid", "yi"),
    ("zul", "zu"),
];

/// Detected or declared language of a text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Language {
    /// Code with a display name.
    Known {
        code: &'static str,
        name: &'static str,
    },
    /// Detector returned a code without a display name.
    Unmapped(String),
    Unknown,
}

impl Language {
    /// English, as declared by callers that already know the text is English.
    pub const ENGLISH: Language = Language::Known {
        code: "en",
        name: "English",
    };

    /// Resolve an ISO 639-1 code; codes without a display name stay visible
    /// as [`Language::Unmapped`].
    pub fn from_code(code: &str) -> Self {
        let code = code.trim().to_ascii_lowercase();
        if code.is_empty() {
            return Self::Unknown;
        }
        match LANGUAGE_NAMES.iter().copied().find(|(c, _)| *c == code) {
            Some((code, name)) => Self::Known { code, name },
            None => Self::Unmapped(code),
        }
    }

    /// Resolve a free-form code or language name ("pt", "Danish", "portugese").
    pub fn from_name(raw: &str) -> Option<Self> {
        let needle = raw.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        let exact = LANGUAGE_NAMES
            .iter()
            .copied()
            .find(|(code, name)| *code == needle || name.to_lowercase() == needle);
        if let Some((code, name)) = exact {
            return Some(Self::Known { code, name });
        }

        let (code, name, score) = LANGUAGE_NAMES
            .iter()
            .copied()
            .map(|(code, name)| (code, name, jaro_winkler(&needle, &name.to_lowercase())))
            .max_by(|a, b| a.2.total_cmp(&b.2))?;
        debug!(%raw, %name, score, "fuzzy language name match");
        (score >= NAME_SIMILARITY).then_some(Self::Known { code, name })
    }

    /// ISO 639-1 code, when known.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Known { code, .. } => Some(*code),
            Self::Unmapped(_) | Self::Unknown => None,
        }
    }

    pub fn is_english(&self) -> bool {
        self.code() == Some("en")
    }

    /// Unknown or unmapped languages carry no usable code.
    pub fn is_unknown(&self) -> bool {
        self.code().is_none()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known { name, .. } => f.write_str(name),
            Self::Unmapped(code) => write!(f, "Unknown ({code})"),
            Self::Unknown => f.write_str("Unknown"),
        }
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.to_string()
    }
}

/// Statistical language identification backend.
pub trait DetectLanguage: Send + Sync {
    fn detect(&self, text: &str) -> Result<Language, DetectError>;
}

/// Trigram-based detector from the `whatlang` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangDetector;

impl DetectLanguage for WhatlangDetector {
    fn detect(&self, text: &str) -> Result<Language, DetectError> {
        let info = whatlang::detect(text).ok_or(DetectError::Undetermined)?;
        let iso3 = info.lang().code();
        debug!(lang = iso3, confidence = info.confidence(), "whatlang verdict");
        Ok(match ISO_639_3_TO_1.iter().copied().find(|(three, _)| *three == iso3) {
            Some((_, iso1)) => Language::from_code(iso1),
            None => Language::Unmapped(iso3.to_string()),
        })
    }
}

/// Detect the language of `text`, degrading to [`Language::Unknown`] for
/// near-empty input or detector failure.
pub fn detect_language<D: DetectLanguage + ?Sized>(detector: &D, text: &str) -> Language {
    if text.trim().chars().count() < MIN_DETECT_CHARS {
        return Language::Unknown;
    }
    match detector.detect(text) {
        Ok(lang) => lang,
        Err(err) => {
            warn!(%err, "language detection failed");
            Language::Unknown
        }
    }
}
