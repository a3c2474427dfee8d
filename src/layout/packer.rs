//! Greedy packing of segments into fixed-width display lines.

use serde::{Deserialize, Serialize};

/// One packed output line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayLine {
    /// Line content: the packed segments joined by single spaces.
    pub text: String,

    /// Width budget the line was packed against, in characters.
    pub width: usize,

    /// Source segments placed on this line, in order.
    pub segments: Vec<String>,
}

impl DisplayLine {
    /// An empty line for the given budget.
    pub fn empty(width: usize) -> Self {
        Self {
            text: String::new(),
            width,
            segments: Vec::new(),
        }
    }

    /// Length of the line in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the line exceeds its budget.
    ///
    /// Only a line holding a single oversized segment can do so.
    pub fn is_over_budget(&self) -> bool {
        self.char_len() > self.width
    }

    /// Whether the line holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Accumulates segments for the line under construction.
struct LineBuffer {
    text: String,
    len: usize,
    segments: Vec<String>,
}

impl LineBuffer {
    fn new() -> Self {
        Self {
            text: String::new(),
            len: 0,
            segments: Vec::new(),
        }
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn push(&mut self, segment: &str, segment_len: usize) {
        if !self.is_empty() {
            self.text.push(' ');
            self.len += 1;
        }
        self.text.push_str(segment);
        self.len += segment_len;
        self.segments.push(segment.to_string());
    }

    fn flush(&mut self, width: usize) -> DisplayLine {
        self.len = 0;
        DisplayLine {
            text: std::mem::take(&mut self.text),
            width,
            segments: std::mem::take(&mut self.segments),
        }
    }
}

/// Pack segments greedily into lines of at most `width` characters.
///
/// A segment is appended (after a single space) while the line stays within
/// `width`; otherwise the current line is closed and the segment opens the
/// next one. A segment longer than `width` is never split and ends up alone
/// on an over-budget line. Order is preserved and nothing is dropped except
/// segments that are blank after trimming.
pub fn pack_lines<S: AsRef<str>>(segments: &[S], width: usize) -> Vec<DisplayLine> {
    let mut lines = Vec::new();
    let mut buffer = LineBuffer::new();

    for segment in segments {
        let segment = segment.as_ref().trim();
        if segment.is_empty() {
            continue;
        }

        let segment_len = segment.chars().count();
        if !buffer.is_empty() && buffer.len + segment_len + 1 > width {
            lines.push(buffer.flush(width));
        }
        buffer.push(segment, segment_len);
    }

    if !buffer.is_empty() {
        lines.push(buffer.flush(width));
    }

    log::trace!(
        "packed {} segments into {} lines at width {}",
        segments.len(),
        lines.len(),
        width
    );

    lines
}

/// Pack segments and return only the line texts.
///
/// # Examples
///
/// ```
/// use mushaf_lines::layout::pack;
///
/// let lines = pack(&["alpha", "beta", "gamma"], 10);
/// assert_eq!(lines, vec!["alpha beta", "gamma"]);
/// ```
pub fn pack<S: AsRef<str>>(segments: &[S], width: usize) -> Vec<String> {
    pack_lines(segments, width)
        .into_iter()
        .map(|line| line.text)
        .collect()
}
