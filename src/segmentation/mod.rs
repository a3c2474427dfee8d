//! Heuristic segmentation of a single verse text into display-sized segments.
//!
//! This module provides pluggable strategies for splitting the text of one
//! verse, in one language, into an ordered sequence of trimmed, non-empty
//! segments.
//!
//! # Available Strategies
//!
//! - [`ArabicSegmenter`]: Quranic stop marks, then connector words for long pieces
//! - [`EnglishSegmenter`]: sentence terminators, then connector words for long sentences
//! - [`WordCountSegmenter`]: fixed word-count chunks for every other language
//!
//! The split is heuristic and makes no claim of grammatical correctness.

mod arabic;
mod english;
mod word_count;

pub use arabic::{ArabicSegmenter, ARABIC_CONNECTORS, QURANIC_STOP_MARKS};
pub use english::{EnglishSegmenter, ENGLISH_CONNECTORS};
pub use word_count::WordCountSegmenter;

use crate::language::Language;

/// Default segment cap used by [`smart_segment_default`].
pub const DEFAULT_MAX_SEGMENTS: usize = 5;

/// Trait for splitting one text unit into segments.
///
/// Implementations must return segments in reading order, each trimmed and
/// non-empty. Blank input yields an empty sequence.
pub trait SegmentStrategy: Send + Sync {
    /// Split `text` into segments.
    fn segment(&self, text: &str) -> Vec<String>;

    /// Return the name of this strategy for debugging.
    fn name(&self) -> &'static str;
}

/// Create the segmentation strategy for a language.
pub fn create_strategy(language: &Language) -> Box<dyn SegmentStrategy> {
    match language {
        Language::Arabic => Box::new(ArabicSegmenter::new()),
        Language::English => Box::new(EnglishSegmenter::new()),
        other => Box::new(WordCountSegmenter::for_language(other)),
    }
}

/// Segment `text` with the strategy selected by `language`, without a cap.
pub fn segment(text: &str, language: &Language) -> Vec<String> {
    create_strategy(language).segment(text)
}

/// Segment `text` for a free-form language tag and cap the result at
/// `max_segments` entries.
///
/// When the strategy produces more than `max_segments` segments, adjacent
/// segments are merged with [`merge_segments`].
///
/// # Examples
///
/// ```
/// use mushaf_lines::segmentation::smart_segment;
///
/// let segments = smart_segment("one. two. three. four.", "en", 2);
/// assert_eq!(segments, vec!["one two", "three four"]);
/// ```
pub fn smart_segment(text: &str, language: &str, max_segments: usize) -> Vec<String> {
    let language = Language::from_tag(language);
    let strategy = create_strategy(&language);
    let segments = strategy.segment(text);

    log::trace!(
        "{} produced {} segments for {}",
        strategy.name(),
        segments.len(),
        language
    );

    if segments.len() > max_segments {
        merge_segments(segments, max_segments)
    } else {
        segments
    }
}

/// [`smart_segment`] with the default cap of [`DEFAULT_MAX_SEGMENTS`].
pub fn smart_segment_default(text: &str, language: &str) -> Vec<String> {
    smart_segment(text, language, DEFAULT_MAX_SEGMENTS)
}

/// Merge adjacent segments so that at most `max_segments` remain.
///
/// Segments are grouped in runs of `ceil(len / max_segments)` and each run
/// is joined with single spaces. Order and content are preserved. A cap of
/// zero yields an empty sequence.
pub fn merge_segments(segments: Vec<String>, max_segments: usize) -> Vec<String> {
    if segments.len() <= max_segments {
        return segments;
    }
    if max_segments == 0 {
        return Vec::new();
    }

    let group_size = segments.len().div_ceil(max_segments);
    segments
        .chunks(group_size)
        .map(|group| group.join(" "))
        .collect()
}

/// Push `segment` trimmed, dropping it if nothing remains.
fn push_trimmed(segments: &mut Vec<String>, segment: &str) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        segments.push(trimmed.to_string());
    }
}

/// Length in Unicode scalar values.
fn char_len(text: &str) -> usize {
    text.chars().count()
}
