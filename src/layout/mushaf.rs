//! Mushaf page composition: verses in, bounded page lines out.
//!
//! ```text
//! Verse[]
//!     ↓  smart_segment (original + translation, per verse)
//! all_original[] / all_translation[]
//!     ↓  pack_lines (original width / translation width)
//! DisplayLine[] / DisplayLine[]
//!     ↓  zip, cap at lines_per_page, estimate verse windows
//! MushafLine[]
//! ```
//!
//! The two streams are packed independently and then zipped by line index,
//! so an original line and its translation line are not guaranteed to cover
//! the same verses. The verse numbers attached to each line are an estimate
//! obtained by spreading the verses evenly over the produced lines; they are
//! not an exact segment-to-verse mapping. They count verse positions within
//! the page starting at 1; the record's own number is kept in [`VerseSpan`].

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::packer::{pack_lines, DisplayLine};
use crate::config::LayoutConfig;
use crate::segmentation::smart_segment;
use crate::verse::Verse;

/// One composed page line: an original line, its translation line and the
/// estimated verses it covers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MushafLine {
    /// Line index within the page (1-based).
    pub line_number: usize,

    /// Packed original-language line (empty when that stream ran out).
    pub original: DisplayLine,

    /// Packed translation line (empty when that stream ran out).
    pub translation: DisplayLine,

    /// Estimated page positions (1-based) of the verses covered by this line.
    pub verse_numbers: Vec<u32>,

    /// Surah number of the page's first verse.
    pub surah_number: u32,

    /// Surah name of the page's first verse.
    pub surah_name: String,

    /// Page number of the page's first verse.
    pub page_number: u32,

    /// Hizb number of the page's first verse.
    pub hizb_number: u32,
}

impl MushafLine {
    /// Original-language text of the line.
    pub fn original_text(&self) -> &str {
        &self.original.text
    }

    /// Translation text of the line.
    pub fn translation_text(&self) -> &str {
        &self.translation.text
    }
}

/// Where one verse's original segments sit in the page-wide segment sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseSpan {
    /// Verse number.
    pub verse_number: u32,

    /// Half-open index range into the page's original segments.
    pub segments: Range<usize>,
}

/// A composed page with its bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MushafPage {
    /// Composed lines, at most the configured line budget.
    pub lines: Vec<MushafLine>,

    /// Per-verse position of original segments, in input order.
    pub verse_spans: Vec<VerseSpan>,

    /// Number of lines emitted.
    pub total_lines: usize,

    /// Number of input verses.
    pub total_verses: usize,
}

/// Composes Mushaf pages from verse records.
#[derive(Debug, Clone, Default)]
pub struct MushafComposer {
    config: LayoutConfig,
}

impl MushafComposer {
    /// Create a composer with default configuration.
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    /// Create a composer with custom configuration.
    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Compose the lines of one page using the configured line budget.
    pub fn compose(&self, verses: &[Verse]) -> Vec<MushafLine> {
        self.compose_page(verses).lines
    }

    /// Compose one page, returning lines together with verse spans and totals.
    pub fn compose_page(&self, verses: &[Verse]) -> MushafPage {
        if verses.is_empty() {
            return MushafPage::default();
        }

        let config = &self.config;
        let mut all_original: Vec<String> = Vec::new();
        let mut all_translation: Vec<String> = Vec::new();
        let mut verse_spans = Vec::with_capacity(verses.len());

        for verse in verses {
            let original = smart_segment(
                &verse.original_text,
                &config.original_language,
                config.max_segments_per_verse,
            );
            let translation = smart_segment(
                &verse.translation_text,
                &config.translation_language,
                config.max_segments_per_verse,
            );

            let start = all_original.len();
            all_original.extend(original);
            all_translation.extend(translation);
            verse_spans.push(VerseSpan {
                verse_number: verse.number,
                segments: start..all_original.len(),
            });
        }

        let original_lines = pack_lines(&all_original, config.original_width);
        let translation_lines = pack_lines(&all_translation, config.translation_width);

        let line_count = original_lines
            .len()
            .max(translation_lines.len())
            .min(config.lines_per_page);

        log::debug!(
            "composing page: {} verses, {} original / {} translation segments, {} original / {} translation lines, emitting {}",
            verses.len(),
            all_original.len(),
            all_translation.len(),
            original_lines.len(),
            translation_lines.len(),
            line_count
        );

        let first = &verses[0];
        let mut original_lines = original_lines.into_iter();
        let mut translation_lines = translation_lines.into_iter();

        let lines = (0..line_count)
            .map(|index| MushafLine {
                line_number: index + 1,
                original: original_lines
                    .next()
                    .unwrap_or_else(|| DisplayLine::empty(config.original_width)),
                translation: translation_lines
                    .next()
                    .unwrap_or_else(|| DisplayLine::empty(config.translation_width)),
                verse_numbers: estimate_verse_window(index, line_count, verses.len())
                    .map(|position| position as u32 + 1)
                    .collect(),
                surah_number: first.surah_number,
                surah_name: first.surah_name.clone(),
                page_number: first.page_number,
                hizb_number: first.hizb_number,
            })
            .collect();

        MushafPage {
            lines,
            verse_spans,
            total_lines: line_count,
            total_verses: verses.len(),
        }
    }
}

/// Compose one page with default widths and languages and the given line budget.
///
/// An empty verse list yields no lines.
pub fn compose(verses: &[Verse], lines_per_page: usize) -> Vec<MushafLine> {
    MushafComposer::with_config(LayoutConfig::default().with_lines_per_page(lines_per_page))
        .compose(verses)
}

/// Estimate which verse positions (0-based) line `index` covers.
///
/// Verses are spread evenly: each line gets `max(1, total_verses / line_count)`
/// consecutive verses and the last line takes whatever remains. Window starts
/// are clamped to the last verse, so pages with more lines than verses repeat
/// the final verse rather than reporting an empty window.
pub fn estimate_verse_window(index: usize, line_count: usize, total_verses: usize) -> Range<usize> {
    if total_verses == 0 || line_count == 0 {
        return 0..0;
    }

    let per_line = (total_verses / line_count).max(1);
    let last = total_verses - 1;
    let start = (index * per_line).min(last);
    let end = if index + 1 == line_count {
        last
    } else {
        (start + per_line - 1).min(last)
    };

    start..end + 1
}
