//! Symptom checklist to ranked disorder suggestions.
//!
//! Percentages round half up in integer arithmetic, so 2 of 3 is 67 and
//! 1 of 8 is 13. A disorder is `High` exactly when its minimum is met.

use std::collections::BTreeSet;

use mindcare_core::models::assessment::{Confidence, SuggestedDisorder};

use crate::catalog::{Catalog, Disorder};

/// Lowest rounded percentage that counts as `Moderate`.
pub const MODERATE_THRESHOLD: u64 = 60;

impl Catalog {
    /// Rank every disorder with at least one selected symptom.
    ///
    /// Unknown ids are ignored. Sorted by percentage descending; equal
    /// percentages keep catalog order.
    pub fn compute_matches(&self, selected: &BTreeSet<String>) -> Vec<SuggestedDisorder> {
        let mut matches: Vec<SuggestedDisorder> = self
            .disorders()
            .iter()
            .filter_map(|disorder| match_disorder(disorder, selected))
            .collect();
        matches.sort_by(|a, b| b.percentage.cmp(&a.percentage));
        matches
    }
}

/// Score a single disorder, or `None` when none of its symptoms are selected.
pub fn match_disorder(
    disorder: &Disorder,
    selected: &BTreeSet<String>,
) -> Option<SuggestedDisorder> {
    let matched_symptoms: Vec<String> = disorder
        .required_symptoms
        .iter()
        .filter(|id| selected.contains(id.as_str()))
        .cloned()
        .collect();

    if matched_symptoms.is_empty() {
        return None;
    }

    let (percentage, confidence) = score(matched_symptoms.len() as u32, disorder.minimum_symptoms);

    Some(SuggestedDisorder {
        disorder_id: disorder.id.clone(),
        name: disorder.name.clone(),
        code: disorder.code.clone(),
        matched_symptoms,
        total_required: disorder.required_symptoms.len() as u32,
        minimum_required: disorder.minimum_symptoms,
        confidence,
        percentage,
    })
}

/// Percentage of `minimum` reached by `matched` (capped at 100) and the
/// resulting confidence tier.
///
/// A zero minimum cannot come out of a validated [`Catalog`]; for a
/// hand-built disorder it scores `(0, Low)`.
pub fn score(matched: u32, minimum: u32) -> (u8, Confidence) {
    if minimum == 0 {
        return (0, Confidence::Low);
    }
    let matched = u64::from(matched);
    let minimum = u64::from(minimum);
    let unclamped = (200 * matched + minimum) / (2 * minimum);

    let confidence = if matched >= minimum {
        Confidence::High
    } else if unclamped >= MODERATE_THRESHOLD {
        Confidence::Moderate
    } else {
        Confidence::Low
    };

    (unclamped.min(100) as u8, confidence)
}
