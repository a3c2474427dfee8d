//! Line layout: packing segments into width-bounded lines and composing
//! Mushaf pages from verses.
//!
//! # Example
//!
//! ```
//! use mushaf_lines::layout::{MushafComposer, pack};
//! use mushaf_lines::{LayoutConfig, Verse};
//!
//! let lines = pack(&["بِسْمِ ٱللَّهِ", "ٱلرَّحْمَٰنِ ٱلرَّحِيمِ"], 40);
//! assert_eq!(lines.len(), 1);
//!
//! let verses = vec![
//!     Verse::new("بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ", "In the name of Allah.", 1)
//!         .with_surah(1, "Al-Faatiha")
//!         .with_page(1),
//! ];
//! let composer = MushafComposer::with_config(LayoutConfig::new().with_lines_per_page(15));
//! let page = composer.compose_page(&verses);
//! assert_eq!(page.total_lines, 1);
//! assert_eq!(page.lines[0].verse_numbers, vec![1]);
//! ```

mod mushaf;
mod packer;

pub use mushaf::*;
pub use packer::*;
