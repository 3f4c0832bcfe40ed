//! Empty queries, missing fields, odd input.

use super::common::{fixture_guides, make_guide, make_problem};
use truckdiag::{search, DiagnosticGuide, Problem};

#[test]
fn test_short_query_returns_nothing() {
    let guides = fixture_guides();
    assert!(search(&guides, "ab").is_empty());
    assert!(search(&guides, "").is_empty());
    assert!(search(&guides, "   ").is_empty());
}

#[test]
fn test_only_short_terms_returns_nothing() {
    let guides = vec![make_guide("x", vec![make_problem("de la el")])];
    assert!(search(&guides, "de la el").is_empty());
}

#[test]
fn test_no_match_excluded() {
    let guides = fixture_guides();
    assert!(search(&guides, "hidráulico").is_empty());
}

#[test]
fn test_guide_without_any_text() {
    let guides = vec![
        DiagnosticGuide::default(),
        make_guide("x", vec![Problem::default()]),
    ];
    assert!(search(&guides, "motor").is_empty());
}

#[test]
fn test_malformed_fields_never_match() {
    let guides: Vec<DiagnosticGuide> = serde_json::from_str(
        r#"[
            {"id": "bad", "generalData": {"topic": 123, "truckData": {"motor": true}},
             "problems": [{"problemTitle": null, "activities": "motor"}]},
            {"id": "good", "problems": [{"problemTitle": "motor"}]}
        ]"#,
    )
    .unwrap();
    let results = search(&guides, "motor");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].guide.id, "good");
}

#[test]
fn test_empty_topic_uses_legacy_key() {
    let guides: Vec<DiagnosticGuide> = serde_json::from_str(
        r#"[{"id": "x", "generalData": {"topic": "", "diagnosticGuide": "Motor"}}]"#,
    )
    .unwrap();
    let results = search(&guides, "motor");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].relevance_score, 6);
    assert_eq!(results[0].matched_fields.as_slice(), ["Tópico"]);
}

#[test]
fn test_substring_inside_longer_word() {
    let guides = vec![make_guide("x", vec![make_problem("Motores en paralelo")])];
    assert_eq!(search(&guides, "motor").len(), 1);
}

#[test]
fn test_term_spanning_words_does_not_match() {
    // terms are split on whitespace, so no term ever contains a space
    let guides = vec![make_guide("x", vec![make_problem("motor arranca")])];
    assert!(search(&guides, "orarr").is_empty());
}
