//! Integration tests for line packing and Mushaf page composition.
//!
//! The fixtures mirror one printed page (Al-Faatiha) as the Scripture Source
//! would serve it, for both the original and a translation edition.

use mushaf_lines::layout::{compose, estimate_verse_window, pack, pack_lines, MushafComposer};
use mushaf_lines::source::{verses_from_editions, PageQuery};
use mushaf_lines::{LayoutConfig, Verse};

// ============================================================================
// Fixtures
// ============================================================================

const FATIHA: [(&str, &str); 7] = [
    (
        "بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ",
        "In the name of Allah, the Entirely Merciful, the Especially Merciful.",
    ),
    (
        "ٱلْحَمْدُ لِلَّهِ رَبِّ ٱلْعَٰلَمِينَ",
        "[All] praise is [due] to Allah, Lord of the worlds -",
    ),
    ("ٱلرَّحْمَٰنِ ٱلرَّحِيمِ", "The Entirely Merciful, the Especially Merciful,"),
    ("مَٰلِكِ يَوْمِ ٱلدِّينِ", "Sovereign of the Day of Recompense."),
    (
        "إِيَّاكَ نَعْبُدُ وَإِيَّاكَ نَسْتَعِينُ",
        "It is You we worship and You we ask for help.",
    ),
    ("ٱهْدِنَا ٱلصِّرَٰطَ ٱلْمُسْتَقِيمَ", "Guide us to the straight path -"),
    (
        "صِرَٰطَ ٱلَّذِينَ أَنْعَمْتَ عَلَيْهِمْ غَيْرِ ٱلْمَغْضُوبِ عَلَيْهِمْ وَلَا ٱلضَّآلِّينَ",
        "The path of those upon whom You have bestowed favor, not of those who have evoked [Your] anger or of those who are astray.",
    ),
];

fn fatiha_verses() -> Vec<Verse> {
    FATIHA
        .iter()
        .enumerate()
        .map(|(i, (original, translation))| {
            Verse::new(*original, *translation, i as u32 + 1)
                .with_surah(1, "Al-Faatiha")
                .with_page(1)
                .with_hizb(1)
        })
        .collect()
}

fn edition_json(texts: &[&str]) -> String {
    let ayahs: Vec<serde_json::Value> = texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            serde_json::json!({
                "number": i + 1,
                "text": text,
                "numberInSurah": i + 1,
                "surah": { "number": 1, "englishName": "Al-Faatiha" }
            })
        })
        .collect();
    serde_json::json!({ "code": 200, "data": { "ayahs": ayahs } }).to_string()
}

// ============================================================================
// Line packing
// ============================================================================

mod packing {
    use super::*;

    #[test]
    fn test_arabic_segments_within_budget() {
        let segments = [
            "بِسْمِ ٱللَّهِ",
            "ٱلرَّحْمَٰنِ ٱلرَّحِيمِ",
            "ٱلْحَمْدُ لِلَّهِ",
            "رَبِّ ٱلْعَٰلَمِينَ",
        ];
        let lines = pack(&segments, 40);
        assert!(!lines.is_empty());
        assert!(lines.iter().all(|line| line.chars().count() <= 50));
    }

    #[test]
    fn test_lines_record_their_segments() {
        let segments = ["alpha", "beta", "gamma", "delta"];
        let lines = pack_lines(&segments, 11);
        let flattened: Vec<&str> = lines
            .iter()
            .flat_map(|line| line.segments.iter().map(String::as_str))
            .collect();
        assert_eq!(flattened, segments);
        for line in &lines {
            assert_eq!(line.text, line.segments.join(" "));
        }
    }
}

// ============================================================================
// Page composition
// ============================================================================

mod composition {
    use super::*;

    #[test]
    fn test_fatiha_page() {
        let verses = fatiha_verses();
        let lines = compose(&verses, 15);

        assert!(!lines.is_empty());
        assert!(lines.len() <= 15);
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(line.line_number, i + 1);
            assert_eq!(line.surah_number, 1);
            assert_eq!(line.page_number, 1);
            assert!(!line.verse_numbers.is_empty());
            assert!(line.original.char_len() <= 70 || line.original.segments.len() == 1);
            assert!(line.translation.char_len() <= 80 || line.translation.segments.len() == 1);
        }
    }

    #[test]
    fn test_verse_windows_cover_every_verse_once() {
        let verses = fatiha_verses();
        let lines = compose(&verses, 15);
        let covered: Vec<u32> = lines
            .iter()
            .flat_map(|line| line.verse_numbers.iter().copied())
            .collect();
        if lines.len() <= verses.len() {
            assert_eq!(covered, (1..=7).collect::<Vec<u32>>());
        } else {
            assert_eq!(covered.first(), Some(&1));
            assert_eq!(covered.last(), Some(&7));
        }
    }

    #[test]
    fn test_all_text_survives_when_under_budget() {
        let verses = fatiha_verses();
        let page = MushafComposer::with_config(LayoutConfig::new().with_lines_per_page(20))
            .compose_page(&verses);
        let original: Vec<&str> = page
            .lines
            .iter()
            .flat_map(|line| line.original.text.split_whitespace())
            .collect();
        let expected: Vec<&str> = FATIHA
            .iter()
            .flat_map(|(text, _)| text.split_whitespace())
            .collect();
        assert_eq!(original, expected);
        assert_eq!(page.verse_spans.len(), 7);
        assert_eq!(page.verse_spans.last().map(|s| s.segments.end), {
            let total: usize = page.lines.iter().map(|l| l.original.segments.len()).sum();
            Some(total)
        });
    }

    #[test]
    fn test_narrow_widths_hit_line_budget() {
        let config = LayoutConfig::new()
            .with_original_width(10)
            .with_translation_width(10)
            .with_lines_per_page(10);
        let lines = MushafComposer::with_config(config).compose(&fatiha_verses());
        assert!(lines.len() <= 10);
        assert!(lines.len() >= 7);
        assert_eq!(lines.last().and_then(|l| l.verse_numbers.last()), Some(&7));
    }

    #[test]
    fn test_translation_language_is_configurable() {
        let verses = vec![Verse::new(
            "بِسْمِ ٱللَّهِ",
            "Im Namen Allahs, des Allerbarmers, des Barmherzigen. Lob sei Allah.",
            1,
        )];
        let config = LayoutConfig::new()
            .with_translation_language("german")
            .with_translation_width(30);
        let lines = MushafComposer::with_config(config).compose(&verses);
        // German chunks by eight words and never splits on the period.
        assert_eq!(lines[0].translation.segments[0].split_whitespace().count(), 8);
    }

    #[test]
    fn test_empty_input() {
        assert!(compose(&[], 10).is_empty());
    }

    #[test]
    fn test_window_estimate_is_contiguous() {
        let line_count = 6;
        let total = 20;
        let mut next = 0;
        for index in 0..line_count {
            let window = estimate_verse_window(index, line_count, total);
            assert_eq!(window.start, next);
            assert!(!window.is_empty());
            next = window.end;
        }
        assert_eq!(next, total);
    }
}

// ============================================================================
// End to end from Scripture Source responses
// ============================================================================

mod end_to_end {
    use super::*;

    #[test]
    fn test_compose_from_edition_json() {
        let originals: Vec<&str> = FATIHA.iter().map(|(o, _)| *o).collect();
        let translations: Vec<&str> = FATIHA.iter().map(|(_, t)| *t).collect();

        let verses = verses_from_editions(
            &edition_json(&originals),
            &edition_json(&translations),
            PageQuery::new(1, 1, 1),
        )
        .unwrap();
        assert_eq!(verses, fatiha_verses());

        let page = MushafComposer::new().compose_page(&verses);
        assert_eq!(page.total_verses, 7);
        assert_eq!(page.total_lines, page.lines.len());

        let json = serde_json::to_value(&page).unwrap();
        assert!(json["lines"][0]["original"]["text"].is_string());
        assert_eq!(json["lines"][0]["surah_name"], "Al-Faatiha");
    }
}
