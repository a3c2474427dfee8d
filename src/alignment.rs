//! Positional alignment of original-language and translation segments.
//!
//! [`balance`] compresses the longer of two per-verse segment sequences so
//! both have the same length, giving a 1:1 correspondence between original
//! and translation segments for side-by-side display.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::segmentation::{smart_segment, DEFAULT_MAX_SEGMENTS};
use crate::verse::Verse;

/// Reduce the longer sequence to the length of the shorter one.
///
/// The shorter sequence is returned unchanged and is never padded. Adjacent
/// segments of the longer sequence are joined with single spaces, so order
/// and content are preserved. If either side is empty, both results are
/// empty.
///
/// # Examples
///
/// ```
/// use mushaf_lines::alignment::balance;
///
/// let original = vec!["a".to_string(), "b".to_string()];
/// let translation = vec!["w".into(), "x".into(), "y".into(), "z".into()];
///
/// let (original, translation) = balance(original, translation);
/// assert_eq!(original, vec!["a", "b"]);
/// assert_eq!(translation, vec!["w x", "y z"]);
/// ```
pub fn balance(a: Vec<String>, b: Vec<String>) -> (Vec<String>, Vec<String>) {
    use std::cmp::Ordering;

    match a.len().cmp(&b.len()) {
        Ordering::Equal => (a, b),
        Ordering::Less => {
            let target = a.len();
            log::trace!("balancing: merging {} segments into {}", b.len(), target);
            (a, merge_into(b, target))
        },
        Ordering::Greater => {
            let target = b.len();
            log::trace!("balancing: merging {} segments into {}", a.len(), target);
            (merge_into(a, target), b)
        },
    }
}

/// Merge adjacent segments into exactly `target` groups.
///
/// Runs of `ceil(len / target)` segments are used when that yields exactly
/// `target` groups. Otherwise the segments are spread evenly, earlier groups
/// taking one extra segment each until the remainder is used up. Sequences
/// already at or under `target` are returned unchanged.
pub fn merge_into(segments: Vec<String>, target: usize) -> Vec<String> {
    let len = segments.len();
    if len <= target {
        return segments;
    }
    if target == 0 {
        return Vec::new();
    }

    let group_size = len.div_ceil(target);
    if len.div_ceil(group_size) == target {
        return segments
            .chunks(group_size)
            .map(|group| group.join(" "))
            .collect();
    }

    let base = len / target;
    let extra = len % target;
    let mut merged = Vec::with_capacity(target);
    let mut start = 0;
    for group in 0..target {
        let size = base + usize::from(group < extra);
        merged.push(segments[start..start + size].join(" "));
        start += size;
    }
    merged
}

/// A verse with balanced original and translation segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentedVerse {
    /// The source verse.
    pub verse: Verse,

    /// Original-language segments.
    pub original_segments: Vec<String>,

    /// Translation segments, positionally aligned with `original_segments`.
    pub translation_segments: Vec<String>,
}

/// Segment both texts of a verse and balance the results.
///
/// The original text is segmented as Arabic; the translation with the
/// strategy for `translation_language`. Each side is capped at
/// `max_segments` before balancing.
pub fn segment_verse(verse: &Verse, translation_language: &str, max_segments: usize) -> SegmentedVerse {
    let original = smart_segment(&verse.original_text, "arabic", max_segments);
    let translation = smart_segment(&verse.translation_text, translation_language, max_segments);
    let (original_segments, translation_segments) = balance(original, translation);

    SegmentedVerse {
        verse: verse.clone(),
        original_segments,
        translation_segments,
    }
}

/// Segment and balance every verse of a page with the default cap.
pub fn segment_verses(verses: &[Verse], translation_language: &str) -> Vec<SegmentedVerse> {
    verses
        .iter()
        .map(|verse| segment_verse(verse, translation_language, DEFAULT_MAX_SEGMENTS))
        .collect()
}

/// One verse segmented against several translations at once.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MultiTranslationVerse {
    /// The source verse (identity and original text).
    pub verse: Verse,

    /// Raw translation text per language, in request order.
    pub translations: IndexMap<String, String>,

    /// Original-language segments.
    pub original_segments: Vec<String>,

    /// Per-language translation segments, in request order.
    pub translation_segments: IndexMap<String, Vec<String>>,
}

impl MultiTranslationVerse {
    /// Segments for a translation language, if present.
    pub fn segments_for(&self, language: &str) -> Option<&[String]> {
        self.translation_segments
            .iter()
            .find(|(lang, _)| lang.eq_ignore_ascii_case(language))
            .map(|(_, segments)| segments.as_slice())
    }

    /// Languages present, in request order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.translations.keys().map(String::as_str)
    }
}

/// Segment a verse's original text and each of several translations
/// independently.
///
/// Translations are not balanced against each other or against the
/// original; each keeps its own `smart_segment` output. A language given
/// twice keeps its first position and its last text.
pub fn segment_translations<'a, I>(verse: &Verse, translations: I, max_segments: usize) -> MultiTranslationVerse
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let original_segments = smart_segment(&verse.original_text, "arabic", max_segments);

    let mut texts = IndexMap::new();
    let mut segments = IndexMap::new();
    for (language, text) in translations {
        texts.insert(language.to_string(), text.to_string());
        segments.insert(language.to_string(), smart_segment(text, language, max_segments));
    }

    log::trace!(
        "verse {}:{} segmented against {} translations",
        verse.surah_number,
        verse.number,
        texts.len()
    );

    MultiTranslationVerse {
        verse: verse.clone(),
        translations: texts,
        original_segments,
        translation_segments: segments,
    }
}
