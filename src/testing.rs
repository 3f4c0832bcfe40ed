//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical builders so tests don't spell out every optional field.

#![doc(hidden)]

use crate::types::{DiagnosticGuide, GeneralData, Item, Problem};

/// Create a guide with the given problems and no general data.
pub fn make_guide(id: &str, problems: Vec<Problem>) -> DiagnosticGuide {
    DiagnosticGuide {
        id: id.to_string(),
        problems,
        ..DiagnosticGuide::default()
    }
}

/// Create a guide whose only searchable text is its topic.
pub fn make_topic_guide(id: &str, topic: &str) -> DiagnosticGuide {
    let mut guide = make_guide(id, vec![]);
    set_general(&mut guide, Some(topic), None, None);
    guide
}

/// Create a problem with just a title.
pub fn make_problem(title: &str) -> Problem {
    Problem {
        problem_title: Some(title.to_string()),
        ..Problem::default()
    }
}

/// Create an activity or solution item.
pub fn make_item(title: &str) -> Item {
    Item {
        title: Some(title.to_string()),
        ..Item::default()
    }
}

/// Replace a guide's general data.
pub fn set_general(
    guide: &mut DiagnosticGuide,
    topic: Option<&str>,
    truck_data: Option<&str>,
    work_order: Option<&str>,
) {
    guide.general_data = Some(GeneralData {
        topic: topic.map(str::to_string),
        truck_data: truck_data.map(str::to_string),
        work_order: work_order.map(str::to_string),
        ..GeneralData::default()
    });
}
