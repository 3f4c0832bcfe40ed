// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use super::RankedResult;
use crate::normalize::query_terms;
use crate::scoring::ranking::rank;
use crate::scoring::{FieldWeights, Scorer, WeightedScorer};
use crate::types::DiagnosticGuide;

/// Query normalizer, scorer and ranker wired together.
///
/// The scorer is pluggable; [`WeightedScorer`] with default weights is what
/// [`search`] uses.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine<S = WeightedScorer> {
    scorer: S,
}

impl SearchEngine<WeightedScorer> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: FieldWeights) -> Self {
        Self::with_scorer(WeightedScorer::new(weights))
    }
}

impl<S: Scorer> SearchEngine<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Rank `guides` against a raw query.
    ///
    /// Returns an empty list without looking at a single guide when the query
    /// yields no terms (everything was two chars or shorter).
    pub fn search<'a>(&self, guides: &'a [DiagnosticGuide], query: &str) -> Vec<RankedResult<'a>> {
        let terms = query_terms(query);
        if terms.is_empty() {
            debug!(query, "no searchable terms, skipping scan");
            return Vec::new();
        }

        let mut results: Vec<RankedResult<'a>> = guides
            .iter()
            .filter_map(|guide| self.score_one(guide, &terms))
            .collect();
        rank(&mut results);

        debug!(
            query,
            terms = terms.len(),
            scanned = guides.len(),
            matched = results.len(),
            "search complete"
        );
        results
    }

    /// Same results as [`SearchEngine::search`], scoring guides on the rayon pool.
    ///
    /// Rayon's indexed collect keeps input order, so ties rank exactly as in
    /// the sequential path.
    #[cfg(feature = "parallel")]
    pub fn search_parallel<'a>(
        &self,
        guides: &'a [DiagnosticGuide],
        query: &str,
    ) -> Vec<RankedResult<'a>>
    where
        S: Sync,
    {
        let terms = query_terms(query);
        if terms.is_empty() {
            debug!(query, "no searchable terms, skipping scan");
            return Vec::new();
        }

        let scored: Vec<Option<RankedResult<'a>>> = guides
            .par_iter()
            .map(|guide| self.score_one(guide, &terms))
            .collect();
        let mut results: Vec<RankedResult<'a>> = scored.into_iter().flatten().collect();
        rank(&mut results);

        debug!(
            query,
            terms = terms.len(),
            scanned = guides.len(),
            matched = results.len(),
            "parallel search complete"
        );
        results
    }

    fn score_one<'a>(&self, guide: &'a DiagnosticGuide, terms: &[String]) -> Option<RankedResult<'a>> {
        let score = self.scorer.score(guide, terms);
        score.is_match().then(|| RankedResult {
            guide,
            relevance_score: score.relevance_score,
            matched_fields: score.matched_fields,
        })
    }
}

/// Rank `guides` against `query` with the default weights.
pub fn search<'a>(guides: &'a [DiagnosticGuide], query: &str) -> Vec<RankedResult<'a>> {
    SearchEngine::new().search(guides, query)
}
