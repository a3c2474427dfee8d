//! Configuration for Mushaf page composition.

/// Default packing width for original-language (Arabic) lines, in characters.
pub const DEFAULT_ORIGINAL_WIDTH: usize = 70;

/// Default packing width for translation lines, in characters.
pub const DEFAULT_TRANSLATION_WIDTH: usize = 80;

/// Default per-verse segment cap used while composing a page.
pub const DEFAULT_MAX_SEGMENTS_PER_VERSE: usize = 10;

/// Default number of lines on a printed Mushaf page.
pub const DEFAULT_LINES_PER_PAGE: usize = 15;

/// Page composition configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Target width of original-language lines.
    pub original_width: usize,

    /// Target width of translation lines.
    pub translation_width: usize,

    /// Maximum segments produced per verse and language.
    pub max_segments_per_verse: usize,

    /// Maximum number of lines emitted per page.
    pub lines_per_page: usize,

    /// Language tag of the original text.
    pub original_language: String,

    /// Language tag of the translation text.
    pub translation_language: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            original_width: DEFAULT_ORIGINAL_WIDTH,
            translation_width: DEFAULT_TRANSLATION_WIDTH,
            max_segments_per_verse: DEFAULT_MAX_SEGMENTS_PER_VERSE,
            lines_per_page: DEFAULT_LINES_PER_PAGE,
            original_language: "arabic".to_string(),
            translation_language: "english".to_string(),
        }
    }

    /// Set the original-language line width.
    pub fn with_original_width(mut self, width: usize) -> Self {
        self.original_width = width;
        self
    }

    /// Set the translation line width.
    pub fn with_translation_width(mut self, width: usize) -> Self {
        self.translation_width = width;
        self
    }

    /// Set the per-verse segment cap.
    pub fn with_max_segments_per_verse(mut self, max: usize) -> Self {
        self.max_segments_per_verse = max;
        self
    }

    /// Set the page line budget.
    pub fn with_lines_per_page(mut self, lines: usize) -> Self {
        self.lines_per_page = lines;
        self
    }

    /// Set the original-language tag.
    pub fn with_original_language(mut self, language: impl Into<String>) -> Self {
        self.original_language = language.into();
        self
    }

    /// Set the translation language tag.
    pub fn with_translation_language(mut self, language: impl Into<String>) -> Self {
        self.translation_language = language.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.original_width, 70);
        assert_eq!(config.translation_width, 80);
        assert_eq!(config.max_segments_per_verse, 10);
        assert_eq!(config.lines_per_page, 15);
        assert_eq!(config.original_language, "arabic");
        assert_eq!(config.translation_language, "english");
    }

    #[test]
    fn test_builder() {
        let config = LayoutConfig::new()
            .with_original_width(40)
            .with_translation_width(50)
            .with_max_segments_per_verse(4)
            .with_lines_per_page(12)
            .with_translation_language("urdu");

        assert_eq!(config.original_width, 40);
        assert_eq!(config.translation_width, 50);
        assert_eq!(config.max_segments_per_verse, 4);
        assert_eq!(config.lines_per_page, 12);
        assert_eq!(config.translation_language, "urdu");
        assert_eq!(config.original_language, "arabic");
    }
}
