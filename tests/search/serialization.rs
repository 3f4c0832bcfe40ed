//! JSON shape of results: the original guide plus two attributes.

use super::common::{fixture_guides, record_a};
use serde_json::{json, Value};
use truckdiag::{search, DiagnosticGuide};

#[test]
fn test_result_is_guide_plus_score_fields() {
    let guides = vec![record_a()];
    let results = search(&guides, "motor");
    let value = serde_json::to_value(&results).unwrap();

    assert_eq!(value[0]["id"], "A");
    assert_eq!(value[0]["problems"][0]["problemTitle"], "Motor no arranca");
    assert_eq!(value[0]["relevanceScore"], 10);
    assert_eq!(
        value[0]["matchedFields"],
        Value::Array(vec![Value::String("Título del problema 1".to_string())])
    );
}

#[test]
fn test_unknown_fields_survive_into_results() {
    let guides = fixture_guides();
    let results = search(&guides, "arranque");
    let value = serde_json::to_value(&results).unwrap();

    assert_eq!(value[0]["id"], "gd-001");
    assert_eq!(value[0]["user"]["name"], "Técnico Turno A");
    assert_eq!(value[0]["createdAt"], "2024-02-11T15:20:00Z");
    assert_eq!(value[0]["problems"][0]["images"][0], "gd-001/arranque.jpg");
}

#[test]
fn test_non_string_values_survive_into_results() {
    let record = json!({
        "id": 42,
        "generalData": {"topic": "motor", "workOrder": 20240113},
        "problems": [{"problemTitle": "x"}, "nota"]
    });
    let guides: Vec<DiagnosticGuide> = vec![serde_json::from_value(record.clone()).unwrap()];
    let results = search(&guides, "motor");
    assert_eq!(results.len(), 1);

    let mut value = serde_json::to_value(&results[0]).unwrap();
    assert_eq!(value["relevanceScore"], 6);
    let fields = value.as_object_mut().unwrap();
    fields.remove("relevanceScore");
    fields.remove("matchedFields");
    assert_eq!(value, record);
}

#[test]
fn test_stored_score_keys_are_replaced() {
    let record = json!({
        "id": "old-export",
        "generalData": {"topic": "motor"},
        "relevanceScore": 999,
        "matchedFields": ["Título del problema 1"]
    });
    let guides: Vec<DiagnosticGuide> = vec![serde_json::from_value(record).unwrap()];
    let results = search(&guides, "motor");

    let text = serde_json::to_string(&results[0]).unwrap();
    assert_eq!(text.matches("\"relevanceScore\"").count(), 1);
    assert_eq!(text.matches("\"matchedFields\"").count(), 1);

    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["relevanceScore"], 6);
    assert_eq!(value["matchedFields"], json!(["Tópico"]));
    assert_eq!(value["id"], "old-export");
}
