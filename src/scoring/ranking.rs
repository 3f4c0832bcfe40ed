// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored guides get sorted.
//!
//! Higher relevance first. There is no secondary key: guides with equal scores
//! stay in the order the repository supplied them, which relies on the sort
//! being stable. Recency or alphabetical tie-breaks are deliberately absent.

use std::cmp::Ordering;

use crate::search::RankedResult;

/// Compare two results for ranking: relevance score, descending.
pub fn compare_results(a: &RankedResult<'_>, b: &RankedResult<'_>) -> Ordering {
    b.relevance_score.cmp(&a.relevance_score)
}

/// Sort results in place. Stable, so ties keep their input order.
pub fn rank(results: &mut [RankedResult<'_>]) {
    results.sort_by(compare_results);
}
