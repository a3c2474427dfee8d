//! Arabic verse segmentation driven by Quranic stop marks.
//!
//! Text is first cut after every stop mark (the mark stays at the end of the
//! segment it closes). Pieces that are still long are then cut on connector
//! words or after a fixed number of words.

use super::{char_len, push_trimmed, SegmentStrategy};

/// Quranic pause/stop glyphs that terminate a segment.
pub const QURANIC_STOP_MARKS: [char; 7] = [
    '\u{06DA}', // ۚ small high jeem
    '\u{06DB}', // ۛ small high three dots
    '\u{06D6}', // ۖ small high ligature sad with lam with alef maksura
    '\u{06D7}', // ۗ small high ligature qaf with lam with alef maksura
    '\u{06D8}', // ۘ small high meem initial form
    '\u{06D9}', // ۙ small high lam alef
    '\u{06DE}', // ۞ start of rub el hizb
];

/// Arabic connector words that may open a new segment.
///
/// Matched as substrings of a word, so short connectors such as waw also hit
/// inside longer words.
pub const ARABIC_CONNECTORS: [&str; 9] = ["و", "أو", "إذا", "إذ", "إن", "أن", "كان", "قال", "قل"];

/// Segmentation strategy for Arabic verse text.
#[derive(Debug, Clone)]
pub struct ArabicSegmenter {
    /// Pieces longer than this (in characters) are split on connectors
    max_segment_len: usize,

    /// A connector only cuts once the working group has more words than this
    min_words_before_connector: usize,

    /// A working group is cut when it reaches this many words
    max_words_per_group: usize,
}

impl Default for ArabicSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ArabicSegmenter {
    /// Create a segmenter with default thresholds (50 chars, 3 words, 8 words).
    pub fn new() -> Self {
        Self {
            max_segment_len: 50,
            min_words_before_connector: 3,
            max_words_per_group: 8,
        }
    }

    /// Set the length above which a stop-mark piece is split further.
    pub fn with_max_segment_len(mut self, len: usize) -> Self {
        self.max_segment_len = len;
        self
    }

    /// Set the group size a connector must exceed before it cuts.
    pub fn with_min_words_before_connector(mut self, words: usize) -> Self {
        self.min_words_before_connector = words;
        self
    }

    /// Set the hard word limit of a group.
    pub fn with_max_words_per_group(mut self, words: usize) -> Self {
        self.max_words_per_group = words.max(1);
        self
    }

    /// Split after every stop mark, keeping the mark as a suffix.
    ///
    /// Whitespace-only pieces are dropped; pieces are not trimmed here.
    pub fn split_by_stop_marks(text: &str) -> Vec<String> {
        let mut pieces = Vec::new();
        let mut current = String::new();

        for ch in text.chars() {
            current.push(ch);
            if QURANIC_STOP_MARKS.contains(&ch) {
                pieces.push(std::mem::take(&mut current));
            }
        }
        pieces.push(current);

        pieces.retain(|piece| !piece.trim().is_empty());
        pieces
    }

    /// Split a long piece word by word on connectors or the group word limit.
    pub fn split_by_connectors(&self, text: &str) -> Vec<String> {
        let mut segments = Vec::new();
        let mut group: Vec<&str> = Vec::new();

        for word in text.split_whitespace() {
            group.push(word);

            let at_connector = ARABIC_CONNECTORS.iter().any(|conn| word.contains(conn));
            if (at_connector && group.len() > self.min_words_before_connector)
                || group.len() >= self.max_words_per_group
            {
                segments.push(group.join(" "));
                group.clear();
            }
        }

        if !group.is_empty() {
            segments.push(group.join(" "));
        }

        segments
    }
}

impl SegmentStrategy for ArabicSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut segments = Vec::new();
        for piece in Self::split_by_stop_marks(text) {
            if char_len(&piece) <= self.max_segment_len {
                push_trimmed(&mut segments, &piece);
            } else {
                for sub in self.split_by_connectors(&piece) {
                    push_trimmed(&mut segments, &sub);
                }
            }
        }

        segments
    }

    fn name(&self) -> &'static str {
        "ArabicSegmenter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input() {
        let segmenter = ArabicSegmenter::new();
        assert!(segmenter.segment("").is_empty());
        assert!(segmenter.segment("   ").is_empty());
    }

    #[test]
    fn test_stop_mark_stays_with_segment() {
        let text = "بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ ۚ ٱلْحَمْدُ لِلَّهِ رَبِّ ٱلْعَٰلَمِينَ";
        let segments = ArabicSegmenter::new().segment(text);

        assert_eq!(segments.len(), 2);
        assert!(segments[0].ends_with('\u{06DA}'));
        assert_eq!(segments[1], "ٱلْحَمْدُ لِلَّهِ رَبِّ ٱلْعَٰلَمِينَ");
    }

    #[test]
    fn test_split_by_stop_marks_drops_blank_tail() {
        let pieces = ArabicSegmenter::split_by_stop_marks("ذَٰلِكَ ٱلْكِتَٰبُ لَا رَيْبَ ۛ ");
        assert_eq!(pieces.len(), 1);
        assert!(pieces[0].ends_with('\u{06DB}'));
    }

    #[test]
    fn test_every_stop_mark_cuts() {
        let text: String = QURANIC_STOP_MARKS
            .iter()
            .map(|mark| format!("كلمة{}", mark))
            .collect::<Vec<_>>()
            .join(" ");
        let pieces = ArabicSegmenter::split_by_stop_marks(&text);
        assert_eq!(pieces.len(), QURANIC_STOP_MARKS.len());
    }

    #[test]
    fn test_long_piece_cut_at_word_limit() {
        // Ten words with no connector letters; the group closes at eight.
        let words = ["بسم", "الله", "الرحمن", "الرحيم", "الحمد", "لله", "رب", "العلمين", "مالك", "يوم"];
        let text = words.join(" ");
        assert!(text.chars().count() > 50);

        let segments = ArabicSegmenter::new().segment(&text);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].split(' ').count(), 8);
        assert_eq!(segments[1], "مالك يوم");
    }

    #[test]
    fn test_connector_cuts_after_three_words() {
        let segmenter = ArabicSegmenter::new();
        let segments = segmenter.split_by_connectors("١ ٢ ٣ قال ٤ ٥");
        assert_eq!(segments, vec!["١ ٢ ٣ قال".to_string(), "٤ ٥".to_string()]);
    }

    #[test]
    fn test_connector_ignored_in_short_group() {
        let segmenter = ArabicSegmenter::new();
        let segments = segmenter.split_by_connectors("١ قال ٢ ٣");
        assert_eq!(segments, vec!["١ قال ٢ ٣".to_string()]);
    }

    #[test]
    fn test_connector_matches_inside_word() {
        let segmenter = ArabicSegmenter::new();
        // "ٱلْمُؤْمِنُونَ"-style word carrying a waw triggers the cut.
        let segments = segmenter.split_by_connectors("١ ٢ ٣ يؤمنون ٤");
        assert_eq!(segments.len(), 2);
        assert!(segments[0].ends_with("يؤمنون"));
    }

    #[test]
    fn test_short_piece_not_split() {
        let segmenter = ArabicSegmenter::new().with_max_segment_len(1000);
        let text = "١ ٢ ٣ ٤ ٥ ٦ ٧ ٨ ٩ ١٠";
        assert_eq!(segmenter.segment(text), vec![text.to_string()]);
    }
}
