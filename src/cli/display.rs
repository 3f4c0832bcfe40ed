// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the truckdiag CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `TRUCKDIAG_THEME` first, then `COLORFGBG`, then defaults to dark. Respects `NO_COLOR` and non-TTY stdout.

use std::sync::OnceLock;
use std::time::Duration;

use truckdiag::RankedResult;

use super::inspect::CorpusStats;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

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
    if let Ok(theme) = std::env::var("TRUCKDIAG_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; bg 7+ (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
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

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const WHITE: (u8, u8, u8) = (171, 178, 191);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const WHITE: (u8, u8, u8) = (56, 58, 66);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(WHITE);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Border color, or nothing when colors are off.
fn border(color_fn: fn() -> String) -> (String, &'static str) {
    if use_colors() {
        (color_fn(), RESET)
    } else {
        (String::new(), "")
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut plain text to `max` chars, ending with … when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Right-pad a styled string to a fixed visible width
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

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let (b, reset) = border(GRAY);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{b}│{reset}{}{}{b}│{reset}", content, " ".repeat(pad));
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let (b, reset) = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{b}┌{reset}{}{b}{}┐{reset}", label_part, "─".repeat(remaining));
}

/// Print section divider: ├──────────────────┤
pub fn section_mid() {
    let (b, reset) = border(GRAY);
    println!("{b}├{}┤{reset}", "─".repeat(BOX_WIDTH));
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let (b, reset) = border(GRAY);
    println!("{b}└{}┘{reset}", "─".repeat(BOX_WIDTH));
}

/// Print a centered title between double lines
pub fn title(text: &str) {
    let (b, reset) = border(BLUE);
    let colored = themed(BRIGHT_CYAN, &[BOLD], text);
    let total_pad = BOX_WIDTH.saturating_sub(visible_len(&colored));
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    println!("{b}╔{}╗{reset}", "═".repeat(BOX_WIDTH));
    println!(
        "{b}║{reset}{}{}{}{b}║{reset}",
        " ".repeat(left_pad),
        colored,
        " ".repeat(right_pad)
    );
    println!("{b}╚{}╝{reset}", "═".repeat(BOX_WIDTH));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded score value
pub fn score_value(score: u32) -> String {
    let text = format!("{:>4}", score);
    if !use_colors() {
        return text;
    }
    let color = if score >= 20 {
        BRIGHT_GREEN()
    } else if score >= 10 {
        GREEN()
    } else if score >= 5 {
        YELLOW()
    } else {
        GRAY()
    };
    format!("{}{}{}", color, text, RESET)
}

/// Color-coded timing value in ms
pub fn timing_ms(elapsed: Duration) -> String {
    let ms = elapsed.as_secs_f64() * 1000.0;
    let text = format!("{:.3} ms", ms);
    if ms < 16.0 {
        themed(GREEN, &[], &text)
    } else {
        themed(YELLOW, &[], &text)
    }
}

/// `#N` for the zero-based `rank`, right-aligned in four columns.
fn rank_label(rank: usize) -> String {
    format!("{:>4}", format!("#{}", rank + 1))
}

/// What to call a guide in a one-line listing: its topic, else its first
/// problem title, else its id.
fn headline(result: &RankedResult<'_>) -> String {
    let guide = result.guide;
    guide
        .topic()
        .or_else(|| guide.problems.iter().find_map(|p| p.problem_title.as_deref()))
        .unwrap_or(guide.id.as_str())
        .to_string()
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

/// Shown instead of results while the query is too short.
pub fn print_hint(hint: &str) {
    println!("{}", themed(GRAY, &[], hint));
}

/// Ranked results table.
pub fn print_results(query: &str, results: &[RankedResult<'_>], total: usize, elapsed: Duration) {
    title(&format!("truckdiag search: \"{}\"", truncate(query, 50)));

    section_top(&format!("RESULTS {} of {}", results.len(), total));
    if results.is_empty() {
        row(&format!("  {}", themed(GRAY, &[], "No results, try different terms")));
    }

    for (rank, result) in results.iter().enumerate() {
        if rank > 0 {
            section_mid();
        }
        let position = themed(WHITE, &[BOLD], &rank_label(rank));
        let id = themed(GRAY, &[], &truncate(&result.guide.id, 20));
        let line = format!(
            "  {} {}  {}  {}",
            position,
            score_value(result.relevance_score),
            pad_right(&id, 20),
            truncate(&headline(result), 44),
        );
        row(&line);

        let fields: Vec<&str> = result.matched_fields.iter().map(String::as_str).collect();
        let matched = truncate(&fields.join(", "), BOX_WIDTH - 12);
        row(&format!("           {}", themed(CYAN, &[], &matched)));
    }
    section_bot();

    println!("  searched in {}", timing_ms(elapsed));
}

/// Corpus summary for `inspect`.
pub fn print_stats(input: &str, stats: &CorpusStats) {
    title(&format!("truckdiag inspect: {}", truncate(input, 50)));

    section_top("CONTENTS");
    stat_row("Guides", stats.guides);
    stat_row("Problems", stats.problems);
    stat_row("Activities", stats.activities);
    stat_row("Solutions", stats.solutions);
    stat_row("Searchable fields", stats.searchable_fields);
    section_mid();
    stat_row("Missing topic", stats.missing_topic);
    stat_row("Missing truck data", stats.missing_truck_data);
    stat_row("Missing work order", stats.missing_work_order);
    stat_row("Unsearchable guides", stats.unsearchable);
    section_bot();
}

fn stat_row(label: &str, value: usize) {
    let label = pad_right(&themed(WHITE, &[], label), 24);
    row(&format!("  {}{}", label, themed(BRIGHT_GREEN, &[BOLD], &value.to_string())));
}
