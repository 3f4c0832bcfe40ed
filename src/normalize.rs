// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization shared by queries and guide fields.
//!
//! Both sides of every comparison go through [`normalize`], so "dirección" in a
//! query matches "Direccion" in a guide and vice versa. Matching is plain
//! substring containment on the normalized text.

use unicode_normalization::UnicodeNormalization;

/// Terms shorter than this (in chars, after normalization) are dropped from queries.
pub const MIN_TERM_CHARS: usize = 3;

/// Callers should not search until the raw query has at least this many chars.
pub const MIN_QUERY_CHARS: usize = 3;

/// Hint shown while the query is still too short to search.
pub const SEARCH_HINT: &str = "Escribe al menos 3 caracteres para buscar";

/// Normalize text for matching: lowercase, NFD, strip combining diacritics.
///
/// - "Dirección" → "direccion"
/// - "MOTOR" → "motor"
/// - "pingüino" → "pinguino"
///
/// Only the Combining Diacritical Marks block (U+0300..=U+036F) is stripped.
/// Whitespace is preserved; splitting into terms is [`query_terms`]' job.
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Normalize an optional field value. Absent fields become the empty string,
/// which never contains a (non-empty) query term.
pub fn normalize_field(value: Option<&str>) -> String {
    value.map(normalize).unwrap_or_default()
}

/// Split a raw query into searchable terms.
///
/// Normalizes, splits on whitespace runs and drops terms of two chars or fewer.
/// Order is kept and duplicates are not removed: every term scores on its own.
pub fn query_terms(query: &str) -> Vec<String> {
    normalize(query)
        .split_whitespace()
        .filter(|term| term.chars().count() >= MIN_TERM_CHARS)
        .map(str::to_string)
        .collect()
}

/// Whether a raw query is long enough to be worth searching.
///
/// This is the gate the input layer applies before calling the engine. It does
/// not guarantee [`query_terms`] is non-empty ("ab cd" passes the gate but has
/// no terms), the engine handles that case on its own.
pub fn is_searchable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_CHARS
}

fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}
