//! Language tags, per-language segmentation thresholds and the translation
//! edition catalogue.
//!
//! All tables here are immutable process-wide data; nothing in this module
//! holds state.

use std::fmt;

/// Edition identifier of the original Arabic text served by the Scripture Source.
pub const ORIGINAL_EDITION: &str = "quran-uthmani";

/// Translation name to Scripture Source edition identifier, in catalogue order.
const EDITIONS: &[(&str, &str)] = &[
    ("arabic", "ar"),
    ("english", "en.sahih"),
    ("urdu", "ur.jalandhry"),
    ("french", "fr.hamidullah"),
    ("german", "de.aburida"),
    ("spanish", "es.cortes"),
    ("turkish", "tr.diyanet"),
    ("indonesian", "id.muntakhab"),
    ("russian", "ru.kuliev"),
    ("chinese", "zh.jian"),
    ("bengali", "bn.bengali"),
];

/// Edition used when a requested translation is not in the catalogue.
const FALLBACK_EDITION: &str = "en.sahih";

/// A normalized language tag.
///
/// Arabic and English get dedicated segmentation strategies; every other
/// language is chunked by word count with a per-language threshold.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Language {
    /// Arabic (`arabic`, `ar`)
    Arabic,
    /// English (`english`, `en`)
    English,
    /// French (`french`, `fr`)
    French,
    /// German (`german`, `de`)
    German,
    /// Spanish (`spanish`, `es`)
    Spanish,
    /// Urdu (`urdu`, `ur`)
    Urdu,
    /// Turkish (`turkish`, `tr`)
    Turkish,
    /// Any other tag, stored lower-cased
    Other(String),
}

impl Language {
    /// Normalize a free-form language tag.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim().to_lowercase();
        match tag.as_str() {
            "arabic" | "ar" => Language::Arabic,
            "english" | "en" => Language::English,
            "french" | "fr" => Language::French,
            "german" | "de" => Language::German,
            "spanish" | "es" => Language::Spanish,
            "urdu" | "ur" => Language::Urdu,
            "turkish" | "tr" => Language::Turkish,
            _ => Language::Other(tag),
        }
    }

    /// Word threshold used by word-count chunking for this language.
    pub fn max_words_per_segment(&self) -> usize {
        match self {
            Language::German | Language::Urdu => 8,
            Language::Spanish => 12,
            Language::French | Language::Turkish => 10,
            Language::Arabic | Language::English | Language::Other(_) => 10,
        }
    }

    /// Canonical tag for this language.
    pub fn tag(&self) -> &str {
        match self {
            Language::Arabic => "arabic",
            Language::English => "english",
            Language::French => "french",
            Language::German => "german",
            Language::Spanish => "spanish",
            Language::Urdu => "urdu",
            Language::Turkish => "turkish",
            Language::Other(tag) => tag,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<&str> for Language {
    fn from(tag: &str) -> Self {
        Language::from_tag(tag)
    }
}

/// Look up the Scripture Source edition for a translation name.
///
/// Unknown names fall back to the English edition.
///
/// # Examples
///
/// ```
/// use mushaf_lines::language::edition_for;
///
/// assert_eq!(edition_for("Urdu"), "ur.jalandhry");
/// assert_eq!(edition_for("klingon"), "en.sahih");
/// ```
pub fn edition_for(translation: &str) -> &'static str {
    let name = translation.trim().to_lowercase();
    EDITIONS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, edition)| *edition)
        .unwrap_or(FALLBACK_EDITION)
}

/// Translation names known to the edition catalogue.
pub fn available_translations() -> Vec<&'static str> {
    EDITIONS.iter().map(|(name, _)| *name).collect()
}
