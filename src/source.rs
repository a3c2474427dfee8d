//! Adapter from raw Scripture Source responses to typed [`Verse`] records.
//!
//! The Scripture Source serves one edition (original text or a translation)
//! of one printed page per request, as a JSON envelope:
//!
//! ```text
//! { "data": { "ayahs": [ { "text": "...", "numberInSurah": 1,
//!                          "surah": { "number": 1, "englishName": "Al-Faatiha" } }, ... ] } }
//! ```
//!
//! This module performs the untyped-to-typed conversion once; the rest of
//! the crate only ever sees [`Verse`] values. Fetching the responses is the
//! caller's concern.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::language::{edition_for, ORIGINAL_EDITION};
use crate::verse::Verse;

/// Request context copied onto every verse of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    /// Printed page number.
    pub page: u32,
    /// Surah whose verses are kept; others on the same page are dropped.
    pub surah: u32,
    /// Hizb number.
    pub hizb: u32,
}

impl PageQuery {
    /// Create a query for a page of a surah.
    pub fn new(page: u32, surah: u32, hizb: u32) -> Self {
        Self { page, surah, hizb }
    }

    /// Request path of the original-text edition for this page.
    pub fn original_path(&self) -> String {
        edition_url_path(self.page, ORIGINAL_EDITION)
    }

    /// Request path of a translation edition for this page.
    ///
    /// Unknown translation names resolve to the English edition.
    pub fn translation_path(&self, translation: &str) -> String {
        edition_url_path(self.page, edition_for(translation))
    }
}

/// Relative request path for one edition of one page.
pub fn edition_url_path(page: u32, edition: &str) -> String {
    format!("page/{}/{}", page, edition)
}

#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<PageData>,
}

#[derive(Debug, Deserialize)]
struct PageData {
    ayahs: Option<Vec<AyahRecord>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AyahRecord {
    #[serde(default)]
    text: String,
    number_in_surah: Option<u32>,
    surah: Option<SurahRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SurahRecord {
    number: u32,
    #[serde(default)]
    english_name: String,
}

/// One verse of one edition, as read from a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditionAyah {
    /// Verse text in this edition.
    pub text: String,
    /// Verse number within its surah.
    pub number: u32,
    /// Surah number.
    pub surah_number: u32,
    /// Surah name in English transliteration.
    pub surah_name: String,
}

/// Parse one edition response, keeping only the verses of `surah`.
///
/// Records without surah information are never kept. A record without
/// `numberInSurah` is numbered by its position among the kept records.
pub fn parse_edition(json: &str, surah: u32) -> Result<Vec<EditionAyah>> {
    let envelope: Envelope = serde_json::from_str(json)?;
    let ayahs = envelope
        .data
        .and_then(|data| data.ayahs)
        .ok_or_else(|| Error::MalformedResponse("missing data.ayahs".to_string()))?;

    let mut kept = Vec::new();
    for (index, record) in ayahs.into_iter().enumerate() {
        let Some(surah_record) = record.surah else {
            log::trace!("skipping ayah {} without surah information", index);
            continue;
        };
        if surah_record.number != surah {
            continue;
        }

        let number = match record.number_in_surah {
            Some(0) => {
                return Err(Error::InvalidVerse {
                    index,
                    reason: "numberInSurah is zero".to_string(),
                })
            },
            Some(number) => number,
            None => kept.len() as u32 + 1,
        };

        kept.push(EditionAyah {
            text: record.text,
            number,
            surah_number: surah_record.number,
            surah_name: surah_record.english_name,
        });
    }

    log::debug!("parsed {} ayahs of surah {}", kept.len(), surah);
    Ok(kept)
}

/// Zip an original edition with a translation edition into verses.
///
/// Pairing is positional. Missing translation entries produce an empty
/// translation text; extra translation entries are ignored.
pub fn pair_editions(original: Vec<EditionAyah>, translation: Vec<EditionAyah>, query: PageQuery) -> Vec<Verse> {
    if translation.len() < original.len() {
        log::warn!(
            "translation edition has {} verses for page {}, original has {}",
            translation.len(),
            query.page,
            original.len()
        );
    }

    let mut translation = translation.into_iter();
    original
        .into_iter()
        .map(|ayah| Verse {
            original_text: ayah.text,
            translation_text: translation.next().map(|t| t.text).unwrap_or_default(),
            number: ayah.number,
            surah_number: query.surah,
            surah_name: ayah.surah_name,
            page_number: query.page,
            hizb_number: query.hizb,
        })
        .collect()
}

/// Build page verses from an original-edition and a translation-edition response.
pub fn verses_from_editions(original_json: &str, translation_json: &str, query: PageQuery) -> Result<Vec<Verse>> {
    let original = parse_edition(original_json, query.surah)?;
    let translation = parse_edition(translation_json, query.surah)?;
    Ok(pair_editions(original, translation, query))
}
