//! mindcare-dsm
//!
//! DSM-5 symptom checklist reference data and the disorder matcher.
//! Pure data and pure functions with no I/O, cheap enough to call on every toggle.

pub mod catalog;
pub mod dsm5;
pub mod error;
pub mod matching;

use std::collections::BTreeSet;

use mindcare_core::models::assessment::SuggestedDisorder;

use catalog::{Disorder, DsmCategory, Symptom};

/// Rank the built-in disorders against a symptom selection.
pub fn compute_matches(selected: &BTreeSet<String>) -> Vec<SuggestedDisorder> {
    dsm5::catalog().compute_matches(selected)
}

/// Built-in symptoms filed under `category`.
pub fn symptoms_by_category(category: DsmCategory) -> Vec<&'static Symptom> {
    dsm5::catalog().symptoms_in(category).collect()
}

/// Built-in disorders filed under `category`.
pub fn disorders_by_category(category: DsmCategory) -> Vec<&'static Disorder> {
    dsm5::catalog().disorders_in(category).collect()
}
