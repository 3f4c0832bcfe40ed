// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: query in, ranked guides out.
//!
//! The pipeline is short. Normalize the query into terms, score every guide,
//! drop the ones that scored zero, stable-sort by score. No state survives a
//! call and the input slice is never touched, so any number of callers can
//! search the same guides at once.

mod engine;

pub use engine::*;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::scoring::MatchedFields;
use crate::types::DiagnosticGuide;

/// Keys a result adds on top of its guide.
const RESULT_KEYS: [&str; 2] = ["relevanceScore", "matchedFields"];

/// A guide that matched, with its score and match attribution.
///
/// Serializes as the original guide's fields plus `relevanceScore` and
/// `matchedFields`, ready for list rendering. If the stored guide already
/// carries either key (say, from an earlier export), the freshly computed
/// value replaces it.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult<'a> {
    pub guide: &'a DiagnosticGuide,
    pub relevance_score: u32,
    pub matched_fields: MatchedFields,
}

impl Serialize for RankedResult<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        self.guide.serialize_entries(&mut map, &RESULT_KEYS)?;
        map.serialize_entry(RESULT_KEYS[0], &self.relevance_score)?;
        map.serialize_entry(RESULT_KEYS[1], &self.matched_fields)?;
        map.end()
    }
}
