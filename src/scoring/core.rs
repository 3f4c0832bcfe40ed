// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind guide relevance.
//!
//! A guide's score is a plain sum: every (term, field) pair where the normalized
//! field contains the term adds that field's weight. Weights stack across terms
//! and across repeated sub-items, so two problems whose titles both contain
//! "motor" contribute the title weight twice.
//!
//! # Default weights
//!
//! | Field                     | Weight | Label                          |
//! |---------------------------|--------|--------------------------------|
//! | `problemTitle`            | 10     | "Título del problema {i+1}"    |
//! | `problemDescription`      | 5      | "Descripción del problema {i+1}" |
//! | `solutions[j].title`      | 8      | "Solución {j+1}"               |
//! | `generalData.topic`       | 6      | "Tópico"                       |
//! | `activities[k].title`     | 4      | "Actividad {k+1}"              |
//! | `generalData.truckData`   | 3      | "Datos del camión"             |
//! | `generalData.workOrder`   | 3      | "Work Order"                   |
//! | `otherData`               | 2      | "Otros datos"                  |
//!
//! # Scan order
//!
//! Fields are visited per term in this order, and it decides the order of
//! `matchedFields`:
//!
//! 1. each problem: title, description, then each solution
//! 2. topic
//! 3. each problem: each activity
//! 4. truck data, then work order
//! 5. each problem: other data

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::normalize::normalize_field;
use crate::types::DiagnosticGuide;

/// Which part of a guide a term matched, with its 1-based position baked into
/// the label where the label carries one.
///
/// Indices are stored 0-based. Solution and activity labels only carry the
/// item's position inside its problem, so "Solución 1" of two different problems
/// is the same label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    ProblemTitle { problem: usize },
    ProblemDescription { problem: usize },
    Solution { position: usize },
    Topic,
    Activity { position: usize },
    TruckData,
    WorkOrder,
    OtherData,
}

impl FieldKind {
    /// Weight added per matching term.
    pub fn weight(&self, weights: &FieldWeights) -> u32 {
        match self {
            FieldKind::ProblemTitle { .. } => weights.problem_title,
            FieldKind::ProblemDescription { .. } => weights.problem_description,
            FieldKind::Solution { .. } => weights.solution,
            FieldKind::Topic => weights.topic,
            FieldKind::Activity { .. } => weights.activity,
            FieldKind::TruckData => weights.truck_data,
            FieldKind::WorkOrder => weights.work_order,
            FieldKind::OtherData => weights.other_data,
        }
    }

    /// Human-readable label shown to the user as match justification.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::ProblemTitle { problem } => write!(f, "Título del problema {}", problem + 1),
            FieldKind::ProblemDescription { problem } => {
                write!(f, "Descripción del problema {}", problem + 1)
            }
            FieldKind::Solution { position } => write!(f, "Solución {}", position + 1),
            FieldKind::Topic => f.write_str("Tópico"),
            FieldKind::Activity { position } => write!(f, "Actividad {}", position + 1),
            FieldKind::TruckData => f.write_str("Datos del camión"),
            FieldKind::WorkOrder => f.write_str("Work Order"),
            FieldKind::OtherData => f.write_str("Otros datos"),
        }
    }
}

// =============================================================================
// WEIGHTS
// =============================================================================

pub const PROBLEM_TITLE_WEIGHT: u32 = 10;
pub const PROBLEM_DESCRIPTION_WEIGHT: u32 = 5;
pub const SOLUTION_WEIGHT: u32 = 8;
pub const TOPIC_WEIGHT: u32 = 6;
pub const ACTIVITY_WEIGHT: u32 = 4;
pub const TRUCK_DATA_WEIGHT: u32 = 3;
pub const WORK_ORDER_WEIGHT: u32 = 3;
pub const OTHER_DATA_WEIGHT: u32 = 2;

/// Per-field weights. `Default` is the production table; a JSON override only
/// needs the keys it changes.
///
/// ```json
/// { "topic": 12, "otherData": 0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FieldWeights {
    pub problem_title: u32,
    pub problem_description: u32,
    pub solution: u32,
    pub topic: u32,
    pub activity: u32,
    pub truck_data: u32,
    pub work_order: u32,
    pub other_data: u32,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            problem_title: PROBLEM_TITLE_WEIGHT,
            problem_description: PROBLEM_DESCRIPTION_WEIGHT,
            solution: SOLUTION_WEIGHT,
            topic: TOPIC_WEIGHT,
            activity: ACTIVITY_WEIGHT,
            truck_data: TRUCK_DATA_WEIGHT,
            work_order: WORK_ORDER_WEIGHT,
            other_data: OTHER_DATA_WEIGHT,
        }
    }
}

// =============================================================================
// MATCH BOOKKEEPING
// =============================================================================

/// Labels of the fields that contributed to a score.
///
/// Insertion-ordered and duplicate-free: a label is recorded the first time any
/// term hits that field and never again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchedFields(Vec<String>);

impl MatchedFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a label. Returns `false` if it was already present.
    pub fn insert(&mut self, label: String) -> bool {
        if self.0.contains(&label) {
            return false;
        }
        self.0.push(label);
        true
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|l| l == label)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a MatchedFields {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Score and attribution for one guide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuideScore {
    pub relevance_score: u32,
    pub matched_fields: MatchedFields,
}

impl GuideScore {
    /// Guides are only returned when at least one term matched somewhere.
    pub fn is_match(&self) -> bool {
        self.relevance_score > 0
    }
}

// =============================================================================
// FIELD EXTRACTION
// =============================================================================

/// A guide's searchable text, normalized once and laid out in scan order.
///
/// Absent and empty fields are left out: they can't contain a query term.
#[derive(Debug, Clone, Default)]
pub struct GuideFields {
    fields: Vec<(FieldKind, String)>,
}

impl GuideFields {
    pub fn collect(guide: &DiagnosticGuide) -> Self {
        let mut out = Self::default();

        for (problem, p) in guide.problems.iter().enumerate() {
            out.push(FieldKind::ProblemTitle { problem }, p.problem_title.as_deref());
            out.push(
                FieldKind::ProblemDescription { problem },
                p.problem_description.as_deref(),
            );
            for (position, solution) in p.solutions.iter().enumerate() {
                out.push(FieldKind::Solution { position }, solution.title.as_deref());
            }
        }

        out.push(FieldKind::Topic, guide.topic());

        for p in &guide.problems {
            for (position, activity) in p.activities.iter().enumerate() {
                out.push(FieldKind::Activity { position }, activity.title.as_deref());
            }
        }

        out.push(FieldKind::TruckData, guide.truck_data());
        out.push(FieldKind::WorkOrder, guide.work_order());

        for p in &guide.problems {
            out.push(FieldKind::OtherData, p.other_data.as_deref());
        }

        out
    }

    fn push(&mut self, kind: FieldKind, value: Option<&str>) {
        let text = normalize_field(value);
        if !text.is_empty() {
            self.fields.push((kind, text));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKind, &str)> {
        self.fields.iter().map(|(kind, text)| (*kind, text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// =============================================================================
// SCORERS
// =============================================================================

/// Computes a guide's relevance for a list of normalized query terms.
///
/// Implementations must be pure: the same guide and terms always give the same
/// score. `terms` are already normalized (see [`crate::query_terms`]).
pub trait Scorer {
    fn score(&self, guide: &DiagnosticGuide, terms: &[String]) -> GuideScore;
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn score(&self, guide: &DiagnosticGuide, terms: &[String]) -> GuideScore {
        (**self).score(guide, terms)
    }
}

/// Substring matching with per-field weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeightedScorer {
    weights: FieldWeights,
}

impl WeightedScorer {
    pub fn new(weights: FieldWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &FieldWeights {
        &self.weights
    }
}

impl Scorer for WeightedScorer {
    fn score(&self, guide: &DiagnosticGuide, terms: &[String]) -> GuideScore {
        let mut score = GuideScore::default();
        if terms.is_empty() {
            return score;
        }

        let fields = GuideFields::collect(guide);
        for term in terms {
            for (kind, text) in fields.iter() {
                if text.contains(term.as_str()) {
                    score.relevance_score =
                        score.relevance_score.saturating_add(kind.weight(&self.weights));
                    score.matched_fields.insert(kind.label());
                }
            }
        }
        score
    }
}

/// Score one guide with the default weights.
pub fn score_guide(guide: &DiagnosticGuide, terms: &[String]) -> GuideScore {
    WeightedScorer::default().score(guide, terms)
}
