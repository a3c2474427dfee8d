//! Word-count chunking for languages without a dedicated strategy.

use super::SegmentStrategy;
use crate::language::Language;

/// Splits text into runs of at most `max_words` words.
#[derive(Debug, Clone)]
pub struct WordCountSegmenter {
    max_words: usize,
}

impl WordCountSegmenter {
    /// Create a segmenter emitting runs of `max_words` words (at least one).
    pub fn new(max_words: usize) -> Self {
        Self {
            max_words: max_words.max(1),
        }
    }

    /// Create a segmenter with the threshold configured for `language`.
    pub fn for_language(language: &Language) -> Self {
        Self::new(language.max_words_per_segment())
    }

    /// Maximum words per emitted segment.
    pub fn max_words(&self) -> usize {
        self.max_words
    }
}

impl SegmentStrategy for WordCountSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let words: Vec<&str> = text.split_whitespace().collect();
        words
            .chunks(self.max_words)
            .map(|chunk| chunk.join(" "))
            .collect()
    }

    fn name(&self) -> &'static str {
        "WordCountSegmenter"
    }
}
