// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for `--format pretty`.
//!
//! OneDark on dark terminals, One Light on light ones. Detection tries
//! `VERSICLE_THEME` first, then `COLORFGBG`, then falls back to dark.
//! `NO_COLOR` and non-TTY stdout turn color off entirely, so piped output
//! is plain text.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use versicle::search::{BASE_SCORE, PHRASE_BONUS};
use versicle::{
    ChapterCount, ErrorBody, MatchResult, SearchResponse, VerseCount, VerseEntry, VersesResponse,
};

/// Width between the box borders.
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("VERSICLE_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": backgrounds 7 and up are light, except 8 (dark gray)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            rgb(match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            })
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors are on when `NO_COLOR` is unset and `stream` is a terminal.
fn colors_on(stream: atty::Stream) -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(stream)
}

pub fn use_colors() -> bool {
    colors_on(atty::Stream::Stdout)
}

fn paint(colored: bool, color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if colored {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Apply theme color with optional modifiers when stdout takes colors.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    paint(use_colors(), color_fn, modifiers, text)
}

/// Visible width, skipping ANSI escapes. CJK characters count as two
/// columns so boxes line up around Chinese book names.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += if is_wide(c) { 2 } else { 1 };
        }
    }
    len
}

fn is_wide(c: char) -> bool {
    matches!(c,
        '\u{1100}'..='\u{115F}'
        | '\u{2E80}'..='\u{A4CF}'
        | '\u{AC00}'..='\u{D7A3}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{FE30}'..='\u{FE4F}'
        | '\u{FF00}'..='\u{FF60}'
        | '\u{FFE0}'..='\u{FFE6}')
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let border = themed(GRAY, &[], "│");
    println!("{}{}{}", border, pad_right(content, BOX_WIDTH), border);
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        themed(GRAY, &[], "┌"),
        label_part,
        themed(GRAY, &[], &format!("{}┐", "─".repeat(remaining)))
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", themed(GRAY, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// RESPONSES
// ═══════════════════════════════════════════════════════════════════════════

fn reference(book_name: &str, chapter: u32, verse: u32) -> String {
    themed(BLUE, &[BOLD], &format!("{} {}:{}", book_name, chapter, verse))
}

fn footnotes(notes: Option<&BTreeMap<u8, String>>) {
    for (slot, text) in notes.into_iter().flatten() {
        println!("    {} {}", themed(GRAY, &[], &format!("[{}]", slot)), themed(GRAY, &[DIM], text));
    }
}

pub fn chapter_count(count: &ChapterCount) {
    println!("{} has {} chapters", themed(BLUE, &[BOLD], &count.book), count.chapters_number);
}

pub fn verse_count(count: &VerseCount) {
    println!(
        "{} {} has {} verses",
        themed(BLUE, &[BOLD], &count.book),
        count.chapter,
        count.verses_number
    );
}

pub fn verses(response: &VersesResponse) {
    for entry in &response.verses {
        match entry {
            VerseEntry::Found(row) => {
                println!("{}  {}", reference(&row.book_name, row.chapter, row.verse), row.content);
                footnotes(row.footnotes.as_ref());
            }
            VerseEntry::Missing(missing) => {
                println!(
                    "{}  {}",
                    themed(YELLOW, &[BOLD], &format!("v{}", missing.verse)),
                    themed(GRAY, &[DIM], &missing.content)
                );
            }
        }
    }
}

/// `★` for whole-phrase hits, `·` for scattered-term hits.
fn score_badge(hit: &MatchResult) -> String {
    if hit.score >= BASE_SCORE + PHRASE_BONUS {
        themed(GREEN, &[BOLD], "★")
    } else {
        themed(GRAY, &[], "·")
    }
}

pub fn search(response: &SearchResponse) {
    println!("{}", themed(CYAN, &[BOLD], &response.message));
    for hit in &response.verses {
        println!(
            "{} {}  {}",
            score_badge(hit),
            reference(&hit.book_name, hit.chapter, hit.verse),
            hit.content
        );
        footnotes(hit.footnotes.as_ref());
    }
}

fn error_line(body: &ErrorBody, colored: bool) -> String {
    format!(
        "{} {}",
        paint(colored, RED, &[BOLD], &format!("{} {}:", body.status, body.kind)),
        body.detail
    )
}

/// Errors go to stderr, so color follows stderr's terminal, not stdout's.
pub fn error(body: &ErrorBody) {
    eprintln!("{}", error_line(body, colors_on(atty::Stream::Stderr)));
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
