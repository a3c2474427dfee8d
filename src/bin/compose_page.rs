//! Compose a Mushaf page from saved Scripture Source responses.
//!
//! Reads an original-edition page response and a translation-edition page
//! response from disk and prints the composed page as JSON.
//!
//! Usage:
//!   cargo run --bin compose_page -- original.json translation.json
//!   cargo run --bin compose_page -- original.json translation.json --surah 2 --page 2 --lines 15

use mushaf_lines::source::{verses_from_editions, PageQuery};
use mushaf_lines::{LayoutConfig, MushafComposer};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

struct ComposeArgs {
    original: PathBuf,
    translation: PathBuf,
    query: PageQuery,
    lines_per_page: usize,
    translation_language: String,
}

impl ComposeArgs {
    fn from_args() -> Option<Self> {
        let args: Vec<String> = std::env::args().collect();
        let mut files = Vec::new();
        let mut query = PageQuery::new(1, 1, 1);
        let mut lines_per_page = 15;
        let mut translation_language = "english".to_string();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--surah" => {
                    i += 1;
                    query.surah = args.get(i)?.parse().ok()?;
                },
                "--page" => {
                    i += 1;
                    query.page = args.get(i)?.parse().ok()?;
                },
                "--hizb" => {
                    i += 1;
                    query.hizb = args.get(i)?.parse().ok()?;
                },
                "--lines" => {
                    i += 1;
                    lines_per_page = args.get(i)?.parse().ok()?;
                },
                "--translation" => {
                    i += 1;
                    translation_language = args.get(i)?.clone();
                },
                other => files.push(PathBuf::from(other)),
            }
            i += 1;
        }

        if files.len() != 2 {
            return None;
        }
        let translation = files.pop()?;
        let original = files.pop()?;

        Some(Self {
            original,
            translation,
            query,
            lines_per_page,
            translation_language,
        })
    }
}

fn run(args: ComposeArgs) -> mushaf_lines::Result<String> {
    let original = fs::read_to_string(&args.original)?;
    let translation = fs::read_to_string(&args.translation)?;
    let verses = verses_from_editions(&original, &translation, args.query)?;

    let config = LayoutConfig::new()
        .with_lines_per_page(args.lines_per_page)
        .with_translation_language(args.translation_language);
    let page = MushafComposer::with_config(config).compose_page(&verses);

    Ok(serde_json::to_string_pretty(&page)?)
}

fn main() -> ExitCode {
    env_logger::init();

    let Some(args) = ComposeArgs::from_args() else {
        eprintln!(
            "Usage: compose_page <original.json> <translation.json> \
             [--surah N] [--page N] [--hizb N] [--lines N] [--translation LANG]"
        );
        return ExitCode::from(2);
    };

    match run(args) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
