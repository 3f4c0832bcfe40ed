//! Accent-insensitive matching, in both directions.

use super::common::{fixture_guides, make_guide, make_problem, scored_ids};
use truckdiag::search;

#[test]
fn test_unaccented_query_matches_accented_field() {
    let guides = vec![make_guide("x", vec![make_problem("Dirección equivocada")])];
    let results = search(&guides, "direccion");
    assert_eq!(scored_ids(&results), vec![("x".to_string(), 10)]);
}

#[test]
fn test_accented_and_unaccented_queries_agree() {
    let guides = vec![make_guide("x", vec![make_problem("Dirección equivocada")])];
    assert_eq!(search(&guides, "direccion"), search(&guides, "dirección"));
}

#[test]
fn test_accented_query_matches_unaccented_field() {
    let guides = vec![make_guide("x", vec![make_problem("Camion sin frenos")])];
    let results = search(&guides, "CAMIÓN");
    assert_eq!(results.len(), 1);
}

#[test]
fn test_case_insensitive() {
    let guides = vec![make_guide("x", vec![make_problem("FUGA DE ACEITE")])];
    assert_eq!(search(&guides, "Aceite").len(), 1);
}

#[test]
fn test_fixture_direccion() {
    let guides = fixture_guides();
    let plain = search(&guides, "direccion");
    let accented = search(&guides, "Dirección");

    assert_eq!(scored_ids(&plain), vec![("gd-002".to_string(), 16)]);
    assert_eq!(plain, accented);
    assert_eq!(
        plain[0].matched_fields.as_slice(),
        ["Título del problema 1", "Tópico"]
    );
}

#[test]
fn test_enye_matches_plain_n() {
    let guides = vec![make_guide("x", vec![make_problem("Daño en la señal del sensor")])];
    assert_eq!(search(&guides, "senal").len(), 1);
    assert_eq!(search(&guides, "señal").len(), 1);
}
