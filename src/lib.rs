//! Relevance-ranked search over truck repair diagnostic guides.
//!
//! A diagnostic guide logs a repair case: general data (topic, truck, work
//! order) and one or more problems, each with a description, activities and
//! solutions. This crate finds the guides that match a free-text query and
//! explains why each one matched.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  repository  │────▶│  normalize   │────▶│   scoring    │────▶│   ranking   │
//! │ (GuideSource,│     │ (query_terms,│     │ (FieldKind,  │     │   (rank)    │
//! │  GuideCache) │     │  normalize)  │     │  Scorer)     │     │             │
//! └──────────────┘     └──────────────┘     └──────────────┘     └─────────────┘
//!                                  ╲                                   ╱
//!                                   ▼                                 ▼
//!                              ┌──────────────────────────────────────┐
//!                              │     search (SearchEngine, search)    │
//!                              └──────────────────────────────────────┘
//! ```
//!
//! Matching is accent-insensitive substring containment: "direccion" finds
//! "Dirección equivocada", and "motor" also finds "motores". Every matching
//! (term, field) pair adds that field's weight; results are ordered by score
//! with ties left in input order.
//!
//! # Usage
//!
//! ```
//! use truckdiag::{search, DiagnosticGuide};
//!
//! let guides: Vec<DiagnosticGuide> = serde_json::from_str(r#"[
//!     {"id": "a", "problems": [{"problemTitle": "Motor no arranca"}]},
//!     {"id": "b", "generalData": {"topic": "motor"},
//!      "problems": [{"problemTitle": "Cambio de aceite"}]}
//! ]"#).unwrap();
//!
//! let results = search(&guides, "motor");
//! assert_eq!(results[0].guide.id, "a");
//! assert_eq!(results[0].relevance_score, 10);
//! assert_eq!(results[1].matched_fields.as_slice(), ["Tópico"]);
//! ```

pub mod error;
pub mod normalize;
pub mod repository;
pub mod scoring;
mod search;
pub mod testing;
mod types;

pub use error::{Error, Result};
pub use normalize::{
    is_searchable, normalize, normalize_field, query_terms, MIN_QUERY_CHARS, MIN_TERM_CHARS,
    SEARCH_HINT,
};
pub use repository::{open_source, GuideCache, GuideSource, JsonFileSource, ManifestDirSource};
pub use scoring::ranking::{compare_results, rank};
pub use scoring::{
    score_guide, FieldKind, FieldWeights, GuideFields, GuideScore, MatchedFields, Scorer,
    WeightedScorer,
};
pub use search::{search, RankedResult, SearchEngine};
pub use types::{DiagnosticGuide, GeneralData, Item, Problem};
