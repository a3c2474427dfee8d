// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::type_complexity)]
#![allow(clippy::too_many_arguments)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # Mushaf Lines
//!
//! Turns a page of Quranic verses and a parallel translation into aligned,
//! width-bounded display lines resembling a printed Mushaf page.
//!
//! ## Pipeline
//!
//! ```text
//! Scripture Source JSON ──[source]──▶ Verse[]
//!     ↓
//! [segmentation] per verse, per language (stop marks, connectors, word counts)
//!     ↓
//! [alignment]    per-verse balancing of original vs translation segments
//!     ↓
//! [layout]       greedy line packing + page composition (MushafLine[])
//! ```
//!
//! Everything after [`source`] is pure and synchronous: no I/O, no shared
//! mutable state, no failure modes. Blank text and empty verse lists yield
//! empty output.
//!
//! ## Quick Start
//!
//! ```
//! use mushaf_lines::layout::compose;
//! use mushaf_lines::segmentation::smart_segment;
//! use mushaf_lines::Verse;
//!
//! let segments = smart_segment(
//!     "In the name of Allah, the Entirely Merciful. Praise to Allah, Lord of the worlds.",
//!     "english",
//!     5,
//! );
//! assert_eq!(segments.len(), 2);
//!
//! let verses = vec![Verse::new(
//!     "بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ",
//!     "In the name of Allah, the Entirely Merciful, the Especially Merciful.",
//!     1,
//! )];
//! let lines = compose(&verses, 15);
//! assert!(!lines.is_empty());
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Input records
pub mod language;
pub mod verse;

// Segmentation and alignment
pub mod alignment;
pub mod segmentation;

// Line packing and page composition
pub mod layout;

// Scripture Source boundary
pub mod source;

pub use config::LayoutConfig;
pub use error::{Error, Result};
pub use language::Language;
pub use layout::{compose, pack, DisplayLine, MushafComposer, MushafLine, MushafPage};
pub use verse::Verse;
