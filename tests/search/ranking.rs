//! Ranking order: score descending, ties in input order.

use super::common::{fixture_guides, ids, make_topic_guide, scored_ids};
use truckdiag::search;

#[test]
fn test_ties_keep_input_order() {
    let guides = vec![
        make_topic_guide("first", "motor"),
        make_topic_guide("second", "motor"),
        make_topic_guide("third", "motor"),
    ];
    assert_eq!(ids(&search(&guides, "motor")), vec!["first", "second", "third"]);

    let reversed: Vec<_> = guides.into_iter().rev().collect();
    assert_eq!(ids(&search(&reversed, "motor")), vec!["third", "second", "first"]);
}

#[test]
fn test_ties_interleaved_with_higher_scores() {
    let guides = vec![
        make_topic_guide("low-1", "motor"),
        make_topic_guide("high", "motor motor"),
        make_topic_guide("low-2", "motor"),
    ];
    // One term, one field: "motor motor" still matches the topic once
    let results = search(&guides, "motor");
    assert_eq!(ids(&results), vec!["low-1", "high", "low-2"]);

    // Two identical terms score twice
    let results = search(&guides, "motor motor");
    assert_eq!(
        scored_ids(&results),
        vec![
            ("low-1".to_string(), 12),
            ("high".to_string(), 12),
            ("low-2".to_string(), 12)
        ]
    );
}

#[test]
fn test_fixture_work_order_tie() {
    let guides = fixture_guides();
    let results = search(&guides, "WO-2024");

    assert_eq!(
        scored_ids(&results),
        vec![
            ("gd-001".to_string(), 3),
            ("gd-002".to_string(), 3),
            ("gd-003".to_string(), 3),
            ("gd-004".to_string(), 3)
        ]
    );
    assert!(results.iter().all(|r| r.matched_fields.as_slice() == ["Work Order"]));
}

#[test]
fn test_scores_non_increasing() {
    let guides = fixture_guides();
    for query in ["motor", "voltaje", "reemplazar freno", "revisar medir aceite"] {
        let results = search(&guides, query);
        for pair in results.windows(2) {
            assert!(
                pair[0].relevance_score >= pair[1].relevance_score,
                "query {:?}: {} ranked above {}",
                query,
                pair[0].relevance_score,
                pair[1].relevance_score
            );
        }
    }
}
