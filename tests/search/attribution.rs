//! Matched-field labels: which fields, in which order, never twice.

use super::common::{make_guide, make_item, make_problem, set_general};
use truckdiag::search;

#[test]
fn test_label_recorded_once_across_terms() {
    let guides = vec![make_guide("x", vec![make_problem("Motor no arranca")])];
    let results = search(&guides, "motor arranca");
    assert_eq!(results[0].matched_fields.len(), 1);
}

#[test]
fn test_labels_follow_scan_order_not_term_order() {
    let mut problem = make_problem("Fuga de aceite");
    problem.other_data = Some("Revisar motor".to_string());
    let mut guide = make_guide("x", vec![problem]);
    set_general(&mut guide, Some("Motor"), None, None);

    // "motor" hits topic and other data; "aceite" hits the title.
    // The first term decides first insertion: Tópico, Otros datos, then the title.
    let guides = [guide];
    let results = search(&guides, "motor aceite");
    assert_eq!(
        results[0].matched_fields.as_slice(),
        ["Tópico", "Otros datos", "Título del problema 1"]
    );
    assert_eq!(results[0].relevance_score, 6 + 2 + 10);
}

#[test]
fn test_problem_indices_are_one_based() {
    let guide = make_guide(
        "x",
        vec![
            make_problem("Luces"),
            make_problem("Frenos"),
            make_problem("Motor sobrecalentado"),
        ],
    );
    let guides = [guide];
    let results = search(&guides, "sobrecalentado");
    assert_eq!(results[0].matched_fields.as_slice(), ["Título del problema 3"]);
}

#[test]
fn test_item_labels_use_position_within_problem() {
    let mut first = make_problem("uno");
    first.activities = vec![make_item("Medir presión"), make_item("Purgar aire")];
    let mut second = make_problem("dos");
    second.activities = vec![make_item("Purgar líneas")];
    let guide = make_guide("x", vec![first, second]);

    let guides = [guide];
    let results = search(&guides, "purgar");
    assert_eq!(results[0].relevance_score, 8);
    assert_eq!(
        results[0].matched_fields.as_slice(),
        ["Actividad 2", "Actividad 1"]
    );
}

#[test]
fn test_all_field_kinds() {
    let mut problem = make_problem("turbo");
    problem.problem_description = Some("turbo".to_string());
    problem.activities = vec![make_item("turbo")];
    problem.solutions = vec![make_item("turbo")];
    problem.other_data = Some("turbo".to_string());
    let mut guide = make_guide("x", vec![problem]);
    set_general(&mut guide, Some("turbo"), Some("turbo"), Some("turbo"));

    let guides = [guide];
    let results = search(&guides, "turbo");
    assert_eq!(results[0].relevance_score, 10 + 5 + 8 + 6 + 4 + 3 + 3 + 2);
    assert_eq!(
        results[0].matched_fields.as_slice(),
        [
            "Título del problema 1",
            "Descripción del problema 1",
            "Solución 1",
            "Tópico",
            "Actividad 1",
            "Datos del camión",
            "Work Order",
            "Otros datos"
        ]
    );
}
