// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use versicle::{
    execute, BookRef, LookupError, MemoryStore, QueryResponse, VerseRequest, VerseStore, Version,
};

mod cli;
use cli::{display, Cli, Commands, Format};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&cli, &err);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays a clean JSON channel.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("VERSICLE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let request = match &cli.command {
        Commands::Query { request } => read_request(request.as_deref())?,
        Commands::Lookup {
            book,
            chapter,
            verse,
            version_key,
            footnotes,
        } => VerseRequest {
            book_ref: Some(BookRef::infer(book)),
            chapter: Some(*chapter),
            verse_expr: Some(verse.clone()),
            version_key: Some(version_key.clone()),
            footnotes: *footnotes,
            ..VerseRequest::default()
        },
        Commands::Chapters { book } => VerseRequest {
            book_ref: Some(BookRef::infer(book)),
            chapters_check: true,
            ..VerseRequest::default()
        },
        Commands::Verses { book, chapter } => VerseRequest {
            book_ref: Some(BookRef::infer(book)),
            chapter: Some(*chapter),
            verses_check: true,
            ..VerseRequest::default()
        },
        Commands::Search {
            phrase,
            version_key,
            footnotes,
            limit,
        } => VerseRequest {
            search_text: Some(phrase.clone()),
            version_key: Some(version_key.clone()),
            footnotes: *footnotes,
            limit: *limit,
            ..VerseRequest::default()
        },
        Commands::Inspect => {
            let store = open_store(&cli.db)?;
            return inspect(store.as_ref());
        }
        #[cfg(feature = "sqlite")]
        Commands::Import { input, output } => return import(input, output),
    };

    let store = open_store(&cli.db)?;
    let response = execute(store.as_ref(), &request)?;
    print_response(cli.format, &response)
}

fn read_request(inline: Option<&str>) -> Result<VerseRequest> {
    let raw = match inline {
        Some(json) => json.to_string(),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read request from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).map_err(|e| {
        anyhow::Error::from(LookupError::InvalidRequest(format!(
            "malformed request JSON: {}",
            e
        )))
    })
}

/// `.json` files load into memory; anything else is opened as SQLite.
fn open_store(path: &Path) -> Result<Box<dyn VerseStore>> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        let store = MemoryStore::from_json_file(path).map_err(LookupError::from)?;
        info!(path = %path.display(), records = store.len(), "opened JSON corpus");
        return Ok(Box::new(store));
    }

    open_sqlite(path)
}

#[cfg(feature = "sqlite")]
fn open_sqlite(path: &Path) -> Result<Box<dyn VerseStore>> {
    let store = versicle::SqliteStore::open(path).map_err(LookupError::from)?;
    info!(path = %path.display(), versions = ?store.versions(), "opened SQLite corpus");
    Ok(Box::new(store))
}

#[cfg(not(feature = "sqlite"))]
fn open_sqlite(path: &Path) -> Result<Box<dyn VerseStore>> {
    anyhow::bail!(
        "{} is not a JSON corpus and SQLite support is not compiled in",
        path.display()
    )
}

fn print_response(format: Format, response: &QueryResponse) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(response)?),
        Format::Pretty => match response {
            QueryResponse::ChapterCount(count) => display::chapter_count(count),
            QueryResponse::VerseCount(count) => display::verse_count(count),
            QueryResponse::Verses(verses) => display::verses(verses),
            QueryResponse::Search(search) => display::search(search),
        },
    }
    Ok(())
}

/// Query failures print their status/kind body; anything else is a plain
/// error line on stderr.
fn report(cli: &Cli, err: &anyhow::Error) {
    let Some(lookup) = err.downcast_ref::<LookupError>() else {
        eprintln!("error: {:#}", err);
        return;
    };
    let body = lookup.to_body();
    debug!(status = body.status, kind = %body.kind, "query failed");
    match cli.format {
        Format::Json => match serde_json::to_string_pretty(&body) {
            Ok(json) => println!("{}", json),
            Err(_) => eprintln!("error: {}", body.detail),
        },
        Format::Pretty => display::error(&body),
    }
}

struct BookSummary {
    book: String,
    book_name: String,
    chapters: u32,
    verses: usize,
}

fn inspect(store: &dyn VerseStore) -> Result<()> {
    let mut books: Vec<BookSummary> = Vec::new();
    let mut versions = BTreeSet::new();
    let mut total = 0usize;

    store
        .scan(&mut |record| {
            total += 1;
            versions.extend(record.content.keys().copied());
            match books.last_mut() {
                Some(last) if last.book == record.book => {
                    last.chapters = last.chapters.max(record.chapter);
                    last.verses += 1;
                }
                _ => books.push(BookSummary {
                    book: record.book.clone(),
                    book_name: record.book_name.clone(),
                    chapters: record.chapter,
                    verses: 1,
                }),
            }
        })
        .map_err(LookupError::from)?;

    display::section_top("CORPUS");
    display::row(&format!(" {} verses in {} books", total, books.len()));
    let present: Vec<&str> = Version::ALL
        .iter()
        .filter(|v| versions.contains(*v))
        .map(|v| v.key())
        .collect();
    display::row(&format!(" versions: {}", present.join(", ")));
    display::section_bot();

    display::section_top("BOOKS");
    for summary in &books {
        display::row(&format!(
            " {} {} {:>4} chapters {:>6} verses",
            display::pad_right(&summary.book, 16),
            display::pad_right(&summary.book_name, 12),
            summary.chapters,
            summary.verses
        ));
    }
    display::section_bot();
    Ok(())
}

#[cfg(feature = "sqlite")]
fn import(input: &Path, output: &Path) -> Result<()> {
    anyhow::ensure!(
        !output.exists(),
        "{} already exists; refusing to overwrite",
        output.display()
    );
    let store = MemoryStore::from_json_file(input)
        .with_context(|| format!("failed to load {}", input.display()))?;
    versicle::create_corpus(output, store.records())
        .with_context(|| format!("failed to write {}", output.display()))?;
    eprintln!("✓ Wrote {} verses to {}", store.len(), output.display());
    Ok(())
}
