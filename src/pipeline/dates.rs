//! Publication date normalisation to `dd/mm/yyyy`.

use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

/// Returned for an empty date.
pub const UNKNOWN_DATE: &str = "Unknown";

const OUTPUT_FORMAT: &str = "%d/%m/%Y";

const INPUT_FORMATS: &[&str] = &[
    "%d %B %Y",
    "%d %b %Y",
    "%d-%B-%Y",
    "%d-%b-%Y",
    "%Y-%m-%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d/%m/%Y",
    "%Y/%m/%d",
];

/// Numeric month-first layouts used by US federal sites ("07/21/2025").
const MONTH_FIRST_FORMATS: &[&str] = &["%m/%d/%Y", "%m-%d-%Y"];

/// How to read an all-numeric date such as `04/03/2025`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// `dd/mm/yyyy` first; month-first only when that cannot parse.
    #[default]
    DayFirst,
    /// `mm/dd/yyyy` first.
    MonthFirst,
}

impl DateOrder {
    /// Month-first for `.gov` and `.mil` hosts, day-first otherwise.
    pub fn for_url(url: &str) -> Self {
        let host = Url::parse(url.trim())
            .ok()
            .and_then(|u| u.host_str().map(|h| h.trim_end_matches('.').to_ascii_lowercase()));
        match host {
            Some(host) if host.ends_with(".gov") || host.ends_with(".mil") => Self::MonthFirst,
            _ => Self::DayFirst,
        }
    }
}

/// Labels some sites put in front of the date.
const PREFIXES: &[&str] = &[
    "published on",
    "published:",
    "published",
    "publicerad:",
    "publicerades:",
    "publicerades",
    "updated:",
    "last updated:",
    "date:",
    "posted:",
    "publié le",
    "veröffentlicht am",
    "gepubliceerd op",
    "publicado em",
    "publicado el",
    "pubblicato il",
];

/// Non-English month names and abbreviations.
const MONTHS: &[(&str, &str)] = &[
    // Swedish, Danish, Norwegian
    ("januari", "January"),
    ("januar", "January"),
    ("februari", "February"),
    ("februar", "February"),
    ("mars", "March"),
    ("marts", "March"),
    ("maj", "May"),
    ("mai", "May"),
    ("juni", "June"),
    ("juli", "July"),
    ("augusti", "August"),
    ("oktober", "October"),
    ("desember", "December"),
    // German
    ("jänner", "January"),
    ("märz", "March"),
    ("dezember", "December"),
    // French
    ("janvier", "January"),
    ("février", "February"),
    ("fevrier", "February"),
    ("avril", "April"),
    ("juin", "June"),
    ("juillet", "July"),
    ("août", "August"),
    ("aout", "August"),
    ("septembre", "September"),
    ("octobre", "October"),
    ("novembre", "November"),
    ("décembre", "December"),
    ("decembre", "December"),
    // Portuguese
    ("janeiro", "January"),
    ("fevereiro", "February"),
    ("março", "March"),
    ("abril", "April"),
    ("maio", "May"),
    ("junho", "June"),
    ("julho", "July"),
    ("agosto", "August"),
    ("setembro", "September"),
    ("outubro", "October"),
    ("novembro", "November"),
    ("dezembro", "December"),
    // Spanish
    ("enero", "January"),
    ("febrero", "February"),
    ("mayo", "May"),
    ("junio", "June"),
    ("julio", "July"),
    ("septiembre", "September"),
    ("setiembre", "September"),
    ("octubre", "October"),
    ("noviembre", "November"),
    ("diciembre", "December"),
    // Dutch
    ("maart", "March"),
    ("mei", "May"),
    ("augustus", "August"),
    // Italian
    ("gennaio", "January"),
    ("febbraio", "February"),
    ("marzo", "March"),
    ("aprile", "April"),
    ("maggio", "May"),
    ("giugno", "June"),
    ("luglio", "July"),
    ("settembre", "September"),
    ("ottobre", "October"),
    ("dicembre", "December"),
    // Abbreviations
    ("okt", "Oct"),
    ("dez", "Dec"),
    ("des", "Dec"),
    ("mrt", "Mar"),
    ("mär", "Mar"),
];

/// Connectives dropped from "21 de julho de 2025" and "3 de julio del 2024".
const FILLER_WORDS: &[&str] = &["de", "del", "den", "le", "il"];

static ORDINAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})(st|nd|rd|th)\b").expect("valid ordinal regex"));
static DAY_DOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})\.\s+").expect("valid day regex"));

/// Normalise a scraped publication date to `dd/mm/yyyy`, reading numeric
/// dates day-first.
///
/// Empty input yields `"Unknown"`; input no format understands is returned
/// trimmed but otherwise unchanged.
pub fn format_date(raw: &str) -> String {
    format_date_with(raw, DateOrder::DayFirst)
}

/// [`format_date`] with an explicit reading order for numeric dates.
pub fn format_date_with(raw: &str, order: DateOrder) -> String {
    let trimmed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if trimmed.is_empty() {
        return UNKNOWN_DATE.to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(&trimmed) {
        return dt.format(OUTPUT_FORMAT).to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(&trimmed) {
        return dt.format(OUTPUT_FORMAT).to_string();
    }

    let candidate = normalise(&trimmed);
    // "2025-04-03T00:00:00" without an offset
    let candidate = match candidate.split_once('t') {
        Some((day, _)) if day.len() == 10 && day.as_bytes()[4] == b'-' => day.to_string(),
        _ => candidate,
    };
    let (first, second) = match order {
        DateOrder::DayFirst => (INPUT_FORMATS, MONTH_FIRST_FORMATS),
        DateOrder::MonthFirst => (MONTH_FIRST_FORMATS, INPUT_FORMATS),
    };
    first
        .iter()
        .chain(second)
        .find_map(|fmt| NaiveDate::parse_from_str(&candidate, fmt).ok())
        .map(|date| date.format(OUTPUT_FORMAT).to_string())
        .unwrap_or(trimmed)
}

fn normalise(date: &str) -> String {
    let mut lower = date.to_lowercase();
    for prefix in PREFIXES {
        if let Some(rest) = lower.strip_prefix(prefix) {
            lower = rest.trim_start().to_string();
            break;
        }
    }
    let lower = ORDINAL.replace_all(&lower, "$1");
    let lower = DAY_DOT.replace(&lower, "$1 ");

    lower
        .split_whitespace()
        .filter(|word| !FILLER_WORDS.contains(word))
        .map(|word| {
            let bare = word.trim_end_matches(['.', ',']);
            let suffix = &word[bare.len()..];
            match MONTHS.iter().find(|(foreign, _)| *foreign == bare) {
                Some((_, english)) => format!("{english}{}", suffix.trim_end_matches('.')),
                None => word.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
