//! Corpus summary for `truckdiag inspect`.

use truckdiag::{DiagnosticGuide, GuideFields};

/// Counts over a guide collection.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CorpusStats {
    pub guides: usize,
    pub problems: usize,
    pub activities: usize,
    pub solutions: usize,
    /// Non-empty searchable fields across all guides.
    pub searchable_fields: usize,
    pub missing_topic: usize,
    pub missing_truck_data: usize,
    pub missing_work_order: usize,
    /// Guides with no searchable text at all; no query can ever match them.
    pub unsearchable: usize,
}

impl CorpusStats {
    pub fn collect(guides: &[DiagnosticGuide]) -> Self {
        let mut stats = CorpusStats {
            guides: guides.len(),
            ..Self::default()
        };

        for guide in guides {
            stats.problems += guide.problems.len();
            for problem in &guide.problems {
                stats.activities += problem.activities.len();
                stats.solutions += problem.solutions.len();
            }

            let fields = GuideFields::collect(guide).len();
            stats.searchable_fields += fields;
            if fields == 0 {
                stats.unsearchable += 1;
            }

            if is_blank(guide.topic()) {
                stats.missing_topic += 1;
            }
            if is_blank(guide.truck_data()) {
                stats.missing_truck_data += 1;
            }
            if is_blank(guide.work_order()) {
                stats.missing_work_order += 1;
            }
        }

        stats
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
