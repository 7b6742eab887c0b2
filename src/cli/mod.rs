// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the versicle command-line interface.
//!
//! `query` is the raw surface: one JSON request in, one JSON response out.
//! The other subcommands are shorthands that build the same request from
//! positional arguments. `inspect` and `import` work on the corpus itself.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "versicle",
    about = "Verse lookup and phrase search over a versified corpus",
    version
)]
pub struct Cli {
    /// Corpus to read: a SQLite database, or a `.json` array of verse records
    #[arg(long, global = true, env = "VERSICLE_DB", default_value = "bible.db")]
    pub db: PathBuf,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Response JSON, exactly as a service would return it
    Json,
    /// Human-readable, colored when stdout is a terminal
    Pretty,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one JSON request
    Query {
        /// Request JSON; read from stdin when omitted
        #[arg(short, long)]
        request: Option<String>,
    },

    /// Look up verses of one chapter
    Lookup {
        /// Canonical id (e.g. "John") or display name (e.g. "约翰福音")
        book: String,

        chapter: u32,

        /// "16", "3-5", or "0" for the whole chapter
        verse: String,

        /// Version key: rev_eng, rev_cn or cuv_cn
        #[arg(short, long = "version", default_value = "rev_eng")]
        version_key: String,

        /// Attach footnotes
        #[arg(long)]
        footnotes: bool,
    },

    /// Print the highest chapter number of a book
    Chapters { book: String },

    /// Print the highest verse number of a chapter
    Verses { book: String, chapter: u32 },

    /// Ranked phrase search across the whole corpus
    Search {
        /// Phrase; every whitespace-separated term must occur
        phrase: String,

        /// Version key: rev_eng, rev_cn or cuv_cn
        #[arg(short, long = "version", default_value = "rev_eng")]
        version_key: String,

        /// Also match in, and attach, footnotes
        #[arg(long)]
        footnotes: bool,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Summarize the corpus: books, chapters per book, versions present
    Inspect,

    /// Write a JSON array of verse records into a new SQLite corpus
    #[cfg(feature = "sqlite")]
    Import {
        /// JSON file holding the records
        input: PathBuf,

        /// Database to create
        output: PathBuf,
    },
}
