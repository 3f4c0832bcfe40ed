//! Same input, same output. Also: searching never touches the input.

use super::common::fixture_guides;
use truckdiag::{search, SearchEngine};

#[test]
fn test_repeated_searches_identical() {
    let guides = fixture_guides();
    for query in ["motor", "voltaje reemplazar", "dirección", "wo-2024"] {
        let first = search(&guides, query);
        for _ in 0..10 {
            assert_eq!(search(&guides, query), first, "query {:?} changed", query);
        }
    }
}

#[test]
fn test_fresh_engines_agree() {
    let guides = fixture_guides();
    let a = SearchEngine::new().search(&guides, "motor voltaje");
    let b = SearchEngine::new().search(&guides, "motor voltaje");
    assert_eq!(a, b);
}

#[test]
fn test_input_not_mutated() {
    let guides = fixture_guides();
    let before = guides.clone();
    let _ = search(&guides, "motor");
    let _ = search(&guides, "freno aceite voltaje");
    assert_eq!(guides, before);
}

#[test]
fn test_concurrent_searches_share_input() {
    let guides = fixture_guides();
    let expected = search(&guides, "motor");

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| search(&guides, "motor")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_search_matches_sequential() {
    let guides = fixture_guides();
    let engine = SearchEngine::new();
    for query in ["motor", "wo-2024", "reemplazar voltaje", "xyz"] {
        assert_eq!(
            engine.search_parallel(&guides, query),
            engine.search(&guides, query)
        );
    }
}
