//! English segmentation on sentence terminators and connector words.

use lazy_static::lazy_static;
use regex::Regex;

use super::{char_len, push_trimmed, SegmentStrategy};

/// Connector words that close the segment they appear in.
pub const ENGLISH_CONNECTORS: [&str; 8] = [
    "and",
    "but",
    "because",
    "however",
    "therefore",
    "moreover",
    "furthermore",
    "nevertheless",
];

/// Characters that end a sentence.
const SENTENCE_TERMINATORS: [char; 4] = ['.', ';', '!', '?'];

lazy_static! {
    /// Whole-word, case-insensitive match of any English connector
    static ref RE_CONNECTOR: Regex = Regex::new(&format!(
        r"(?i)\b({})\b",
        ENGLISH_CONNECTORS.join("|")
    ))
    .unwrap();
}

/// Segmentation strategy for English translation text.
#[derive(Debug, Clone)]
pub struct EnglishSegmenter {
    /// Sentences longer than this (in characters) are split on connectors
    max_sentence_len: usize,

    /// An accumulating segment longer than this is closed at the next piece
    overflow_len: usize,
}

impl Default for EnglishSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl EnglishSegmenter {
    /// Create a segmenter with default thresholds (80 and 60 chars).
    pub fn new() -> Self {
        Self {
            max_sentence_len: 80,
            overflow_len: 60,
        }
    }

    /// Set the length above which a sentence is split on connectors.
    pub fn with_max_sentence_len(mut self, len: usize) -> Self {
        self.max_sentence_len = len;
        self
    }

    /// Set the accumulated length that forces a segment to close.
    pub fn with_overflow_len(mut self, len: usize) -> Self {
        self.overflow_len = len;
        self
    }

    /// Split a long sentence at connector words.
    ///
    /// The sentence is broken into alternating plain and connector pieces.
    /// Pieces accumulate into a segment that closes right after a connector,
    /// or as soon as it grows past the overflow length.
    pub fn split_by_connectors(&self, sentence: &str) -> Vec<String> {
        let mut segments = Vec::new();
        let mut current = String::new();

        for piece in split_keeping_connectors(sentence) {
            if piece.trim().is_empty() {
                continue;
            }

            current.push_str(piece);

            let is_connector = ENGLISH_CONNECTORS.contains(&piece.trim().to_lowercase().as_str());
            if is_connector || char_len(&current) > self.overflow_len {
                push_trimmed(&mut segments, &current);
                current.clear();
            }
        }

        push_trimmed(&mut segments, &current);
        segments
    }
}

/// Split on connector matches, keeping each matched connector as its own piece.
fn split_keeping_connectors(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut last = 0;

    for m in RE_CONNECTOR.find_iter(text) {
        pieces.push(&text[last..m.start()]);
        pieces.push(m.as_str());
        last = m.end();
    }
    pieces.push(&text[last..]);

    pieces
}

impl SegmentStrategy for EnglishSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut segments = Vec::new();
        for sentence in text
            .split(&SENTENCE_TERMINATORS[..])
            .filter(|sentence| !sentence.is_empty())
        {
            if char_len(sentence) <= self.max_sentence_len {
                push_trimmed(&mut segments, sentence);
            } else {
                segments.extend(self.split_by_connectors(sentence));
            }
        }

        segments
    }

    fn name(&self) -> &'static str {
        "EnglishSegmenter"
    }
}
