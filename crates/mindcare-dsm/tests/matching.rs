use std::collections::BTreeSet;

use mindcare_core::models::assessment::Confidence;
use mindcare_dsm::catalog::{Catalog, Disorder, DsmCategory, Symptom};
use mindcare_dsm::matching::{match_disorder, score};

fn symptom(id: &str, category: DsmCategory) -> Symptom {
    Symptom {
        id: id.to_string(),
        name: format!("Symptom {id}"),
        description: String::new(),
        category,
    }
}

fn disorder(id: &str, required: &[&str], minimum: u32) -> Disorder {
    Disorder {
        id: id.to_string(),
        name: format!("Disorder {id}"),
        code: format!("X{id}"),
        category: DsmCategory::Anxiety,
        description: String::new(),
        required_symptoms: required.iter().map(|s| s.to_string()).collect(),
        minimum_symptoms: minimum,
        duration: None,
        exclusion_criteria: Vec::new(),
    }
}

/// gad needs 4 of anx-1..anx-8; phobia needs its single symptom; worry-pair
/// overlaps gad on anx-1 and anx-2.
fn fixture() -> Catalog {
    let mut symptoms: Vec<Symptom> = (1..=8)
        .map(|n| symptom(&format!("anx-{n}"), DsmCategory::Anxiety))
        .collect();
    symptoms.push(symptom("x", DsmCategory::Anxiety));
    symptoms.push(symptom("slp-1", DsmCategory::Sleep));

    let gad_required: Vec<String> = (1..=8).map(|n| format!("anx-{n}")).collect();
    let gad_required: Vec<&str> = gad_required.iter().map(String::as_str).collect();

    Catalog::new(
        symptoms,
        vec![
            disorder("gad", &gad_required, 4),
            disorder("phobia", &["x"], 1),
            disorder("worry-pair", &["anx-2", "anx-1", "slp-1"], 3),
        ],
    )
    .unwrap()
}

fn select(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn minimum_met_is_high_at_100() {
    let matches = fixture().compute_matches(&select(&["anx-1", "anx-3", "anx-6", "anx-8"]));
    let gad = matches.iter().find(|m| m.disorder_id == "gad").unwrap();

    assert_eq!(gad.matched_symptoms, ["anx-1", "anx-3", "anx-6", "anx-8"]);
    assert_eq!(gad.percentage, 100);
    assert_eq!(gad.confidence, Confidence::High);
    assert_eq!(gad.total_required, 8);
    assert_eq!(gad.minimum_required, 4);
    assert_eq!(gad.name, "Disorder gad");
    assert_eq!(gad.code, "Xgad");
}

#[test]
fn half_of_minimum_is_low() {
    let matches = fixture().compute_matches(&select(&["anx-1", "anx-3"]));
    let gad = matches.iter().find(|m| m.disorder_id == "gad").unwrap();

    assert_eq!(gad.matched_symptoms.len(), 2);
    assert_eq!(gad.percentage, 50);
    assert_eq!(gad.confidence, Confidence::Low);
}

#[test]
fn three_quarters_of_minimum_is_moderate() {
    let matches = fixture().compute_matches(&select(&["anx-1", "anx-3", "anx-6"]));
    let gad = matches.iter().find(|m| m.disorder_id == "gad").unwrap();

    assert_eq!(gad.percentage, 75);
    assert_eq!(gad.confidence, Confidence::Moderate);
}

#[test]
fn empty_selection_matches_nothing() {
    assert!(fixture().compute_matches(&BTreeSet::new()).is_empty());
}

#[test]
fn single_symptom_disorder() {
    let catalog = fixture();

    let matches = catalog.compute_matches(&select(&["x"]));
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].disorder_id, "phobia");
    assert_eq!(matches[0].percentage, 100);
    assert_eq!(matches[0].confidence, Confidence::High);

    let matches = catalog.compute_matches(&select(&[]));
    assert!(matches.iter().all(|m| m.disorder_id != "phobia"));
}

#[test]
fn exceeding_minimum_stays_at_100() {
    let all: Vec<String> = (1..=8).map(|n| format!("anx-{n}")).collect();
    let selected: BTreeSet<String> = all.into_iter().collect();
    let matches = fixture().compute_matches(&selected);
    let gad = matches.iter().find(|m| m.disorder_id == "gad").unwrap();

    assert_eq!(gad.matched_symptoms.len(), 8);
    assert_eq!(gad.percentage, 100);
    assert_eq!(gad.confidence, Confidence::High);
}

#[test]
fn unknown_ids_are_ignored() {
    let catalog = fixture();
    let with_noise = catalog.compute_matches(&select(&["anx-1", "nope", "", "ANX-1"]));
    let without = catalog.compute_matches(&select(&["anx-1"]));

    assert_eq!(with_noise, without);
}

#[test]
fn matched_symptoms_follow_disorder_order() {
    let matches = fixture().compute_matches(&select(&["anx-1", "anx-2"]));
    let pair = matches
        .iter()
        .find(|m| m.disorder_id == "worry-pair")
        .unwrap();

    assert_eq!(pair.matched_symptoms, ["anx-2", "anx-1"]);
    assert_eq!(pair.percentage, 67);
    assert_eq!(pair.confidence, Confidence::Moderate);
}

#[test]
fn sorted_by_percentage_descending() {
    let matches = fixture().compute_matches(&select(&["anx-1", "anx-2", "x", "slp-1"]));
    let ids: Vec<&str> = matches.iter().map(|m| m.disorder_id.as_str()).collect();

    // phobia 100, worry-pair 100, gad 50
    assert_eq!(ids, ["phobia", "worry-pair", "gad"]);
    assert!(matches.windows(2).all(|w| w[0].percentage >= w[1].percentage));
}

#[test]
fn ties_keep_catalog_order() {
    let catalog = Catalog::new(
        vec![symptom("a", DsmCategory::Sleep)],
        vec![
            disorder("first", &["a"], 1),
            disorder("second", &["a"], 1),
            disorder("third", &["a"], 1),
        ],
    )
    .unwrap();
    let ids: Vec<String> = catalog
        .compute_matches(&select(&["a"]))
        .into_iter()
        .map(|m| m.disorder_id)
        .collect();
    assert_eq!(ids, ["first", "second", "third"]);
}

#[test]
fn repeated_calls_are_identical() {
    let catalog = fixture();
    let selected = select(&["anx-1", "anx-4", "x", "slp-1"]);

    assert_eq!(catalog.compute_matches(&selected), catalog.compute_matches(&selected));
}

#[test]
fn adding_symptoms_never_removes_matches() {
    let catalog = fixture();
    let smaller = select(&["anx-2", "anx-5"]);
    let larger = select(&["anx-2", "anx-5", "anx-7", "slp-1"]);

    for d in catalog.disorders() {
        let before = match_disorder(d, &smaller)
            .map(|m| m.matched_symptoms)
            .unwrap_or_default();
        let after = match_disorder(d, &larger)
            .map(|m| m.matched_symptoms)
            .unwrap_or_default();
        assert!(before.iter().all(|id| after.contains(id)), "{}", d.id);
    }
}

#[test]
fn score_rounds_half_up() {
    assert_eq!(score(1, 8), (13, Confidence::Low));
    assert_eq!(score(2, 3), (67, Confidence::Moderate));
    assert_eq!(score(1, 3), (33, Confidence::Low));
    assert_eq!(score(3, 5), (60, Confidence::Moderate));
    assert_eq!(score(5, 9), (56, Confidence::Low));
    assert_eq!(score(0, 4), (0, Confidence::Low));
    assert_eq!(score(9, 6), (100, Confidence::High));
}

#[test]
fn match_disorder_none_without_overlap() {
    let d = disorder("d", &["a", "b"], 1);
    assert!(match_disorder(&d, &select(&["c"])).is_none());
}

#[test]
fn zero_minimum_scores_low_instead_of_panicking() {
    assert_eq!(score(0, 0), (0, Confidence::Low));
    assert_eq!(score(3, 0), (0, Confidence::Low));

    let unchecked = disorder("unchecked", &["a"], 0);
    let m = match_disorder(&unchecked, &select(&["a"])).unwrap();
    assert_eq!(m.matched_symptoms, ["a"]);
    assert_eq!(m.percentage, 0);
    assert_eq!(m.confidence, Confidence::Low);
}
