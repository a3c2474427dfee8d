//! Verse records consumed by the segmentation and layout core.

use serde::{Deserialize, Serialize};

/// One verse (ayah) with its original text and a parallel translation.
///
/// Produced once at the Scripture Source boundary (see [`crate::source`])
/// and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Verse {
    /// Original (Arabic) text.
    pub original_text: String,

    /// Translated text.
    pub translation_text: String,

    /// Verse number within its surah (1-based).
    pub number: u32,

    /// Surah (chapter) number.
    pub surah_number: u32,

    /// Surah name as reported by the source.
    pub surah_name: String,

    /// Printed page number.
    pub page_number: u32,

    /// Hizb number.
    pub hizb_number: u32,
}

impl Verse {
    /// Create a verse with texts and number; metadata defaults to zero/empty.
    pub fn new(
        original_text: impl Into<String>,
        translation_text: impl Into<String>,
        number: u32,
    ) -> Self {
        Self {
            original_text: original_text.into(),
            translation_text: translation_text.into(),
            number,
            ..Self::default()
        }
    }

    /// Set surah number and name.
    pub fn with_surah(mut self, number: u32, name: impl Into<String>) -> Self {
        self.surah_number = number;
        self.surah_name = name.into();
        self
    }

    /// Set the printed page number.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page_number = page;
        self
    }

    /// Set the hizb number.
    pub fn with_hizb(mut self, hizb: u32) -> Self {
        self.hizb_number = hizb;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_metadata() {
        let verse = Verse::new("بِسْمِ ٱللَّهِ", "In the name of Allah", 1)
            .with_surah(1, "Al-Faatiha")
            .with_page(1)
            .with_hizb(1);

        assert_eq!(verse.number, 1);
        assert_eq!(verse.surah_number, 1);
        assert_eq!(verse.surah_name, "Al-Faatiha");
        assert_eq!(verse.page_number, 1);
        assert_eq!(verse.hizb_number, 1);
    }

    #[test]
    fn test_serializes_to_json() {
        let verse = Verse::new("نص", "text", 7).with_surah(2, "Al-Baqara");
        let json = serde_json::to_string(&verse).unwrap();
        assert!(json.contains("\"number\":7"));
        assert!(json.contains("\"surah_name\":\"Al-Baqara\""));

        let back: Verse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, verse);
    }
}
