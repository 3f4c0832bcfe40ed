//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::sync::LazyLock;

use truckdiag::repository::read_json;
use truckdiag::DiagnosticGuide;

// Re-export canonical test builders from truckdiag::testing
pub use truckdiag::testing::{make_guide, make_item, make_problem, make_topic_guide, set_general};

// ============================================================================
// FIXTURE PATHS
// ============================================================================

/// Four realistic guides in a single JSON array.
pub const GUIDES_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/fixtures/guides.json");

/// Directory layout: manifest.json listing 0002.json before 0001.json.
pub const GUIDES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/fixtures/guides-dir");

static FIXTURE_GUIDES: LazyLock<Vec<DiagnosticGuide>> = LazyLock::new(|| {
    read_json(std::path::Path::new(GUIDES_FILE)).expect("Failed to read guides fixture")
});

/// The guides in `data/fixtures/guides.json`.
pub fn fixture_guides() -> Vec<DiagnosticGuide> {
    FIXTURE_GUIDES.clone()
}

// ============================================================================
// SCENARIO BUILDERS
// ============================================================================

/// Record A: only its problem title mentions the motor.
pub fn record_a() -> DiagnosticGuide {
    make_guide("A", vec![make_problem("Motor no arranca")])
}

/// Record B: topic "motor", unrelated problem title.
pub fn record_b() -> DiagnosticGuide {
    let mut guide = make_guide("B", vec![make_problem("Cambio de aceite")]);
    set_general(&mut guide, Some("motor"), None, None);
    guide
}

/// Ids of ranked results, in order.
pub fn ids(results: &[truckdiag::RankedResult<'_>]) -> Vec<String> {
    results.iter().map(|r| r.guide.id.clone()).collect()
}

/// (id, score) pairs of ranked results, in order.
pub fn scored_ids(results: &[truckdiag::RankedResult<'_>]) -> Vec<(String, u32)> {
    results
        .iter()
        .map(|r| (r.guide.id.clone(), r.relevance_score))
        .collect()
}
