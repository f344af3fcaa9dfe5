use std::collections::BTreeSet;

use mindcare_dsm::catalog::{Catalog, DsmCategory};
use mindcare_dsm::error::CatalogError;

const VALID: &str = r#"{
  "symptoms": [
    { "id": "s1", "name": "One", "description": "first", "category": "sleep" },
    { "id": "s2", "name": "Two", "description": "second", "category": "sleep" },
    { "id": "s3", "name": "Three", "description": "third", "category": "eating" }
  ],
  "disorders": [
    {
      "id": "d1",
      "name": "Sleepy",
      "code": "Z00",
      "category": "sleep",
      "description": "tired",
      "requiredSymptoms": ["s1", "s2"],
      "minimumSymptoms": 1,
      "duration": "3 months"
    },
    {
      "id": "d2",
      "name": "Hungry",
      "code": "Z01",
      "category": "eating",
      "description": "hungry",
      "requiredSymptoms": ["s3"],
      "minimumSymptoms": 1,
      "exclusionCriteria": ["not explained by d1"]
    }
  ]
}"#;

#[test]
fn loads_valid_json() {
    let catalog = Catalog::from_json(VALID).unwrap();

    assert_eq!(catalog.symptoms().len(), 3);
    assert_eq!(catalog.disorders().len(), 2);
    assert_eq!(catalog.symptom("s3").unwrap().name, "Three");
    assert_eq!(
        catalog.disorder("d1").unwrap().duration.as_deref(),
        Some("3 months")
    );
    assert_eq!(
        catalog.disorder("d2").unwrap().exclusion_criteria,
        ["not explained by d1"]
    );
    assert!(catalog.disorder("d3").is_none());
}

#[test]
fn json_survives_a_dump_and_reload() {
    let catalog = Catalog::from_json(VALID).unwrap();
    let reloaded = Catalog::from_json(&catalog.to_json().unwrap()).unwrap();

    assert_eq!(catalog.symptoms(), reloaded.symptoms());
    assert_eq!(catalog.disorders(), reloaded.disorders());
}

#[test]
fn rejects_unknown_required_symptom() {
    let json = VALID.replace(r#"["s3"]"#, r#"["s9"]"#);
    let err = Catalog::from_json(&json).unwrap_err();

    assert!(matches!(
        err,
        CatalogError::UnknownSymptom { ref disorder_id, ref symptom_id }
            if disorder_id == "d2" && symptom_id == "s9"
    ));
}

#[test]
fn rejects_duplicate_symptom_ids() {
    let json = VALID.replace(r#""id": "s2""#, r#""id": "s1""#);
    let err = Catalog::from_json(&json).unwrap_err();

    assert!(matches!(err, CatalogError::DuplicateSymptom(ref id) if id == "s1"));
}

#[test]
fn rejects_duplicate_disorder_ids() {
    let json = VALID.replace(r#""id": "d2""#, r#""id": "d1""#);
    let err = Catalog::from_json(&json).unwrap_err();

    assert!(matches!(err, CatalogError::DuplicateDisorder(ref id) if id == "d1"));
}

#[test]
fn rejects_repeated_requirement() {
    let json = VALID.replace(r#"["s1", "s2"]"#, r#"["s1", "s1"]"#);
    let err = Catalog::from_json(&json).unwrap_err();

    assert!(matches!(err, CatalogError::RepeatedRequirement { .. }));
}

fn with_minimum(disorder: usize, minimum: u32) -> String {
    let mut value: serde_json::Value = serde_json::from_str(VALID).unwrap();
    value["disorders"][disorder]["minimumSymptoms"] = minimum.into();
    value.to_string()
}

#[test]
fn rejects_unreachable_or_zero_minimum() {
    let err = Catalog::from_json(&with_minimum(0, 3)).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::InvalidMinimum { minimum: 3, required: 2, .. }
    ));

    let err = Catalog::from_json(&with_minimum(1, 0)).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidMinimum { minimum: 0, .. }));
}

#[test]
fn rejects_malformed_json() {
    let err = Catalog::from_json("{\"symptoms\": []}").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn category_filters_and_counts() {
    let catalog = Catalog::from_json(VALID).unwrap();

    let sleep: Vec<&str> = catalog
        .symptoms_in(DsmCategory::Sleep)
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(sleep, ["s1", "s2"]);

    let eating: Vec<&str> = catalog
        .disorders_in(DsmCategory::Eating)
        .map(|d| d.id.as_str())
        .collect();
    assert_eq!(eating, ["d2"]);
    assert_eq!(catalog.disorders_in(DsmCategory::Bipolar).count(), 0);

    let selected: BTreeSet<String> = ["s1", "s2", "s3", "ghost"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(catalog.selected_in_category(&selected, DsmCategory::Sleep), 2);
    assert_eq!(catalog.selected_in_category(&selected, DsmCategory::Eating), 1);
    assert_eq!(catalog.selected_in_category(&selected, DsmCategory::Trauma), 0);
    assert_eq!(catalog.unknown_symptoms(&selected), ["ghost"]);
}

#[test]
fn category_parsing() {
    assert_eq!("ocd".parse::<DsmCategory>().unwrap(), DsmCategory::Ocd);
    assert_eq!(
        " Neurodevelopmental ".parse::<DsmCategory>().unwrap(),
        DsmCategory::Neurodevelopmental
    );
    assert!(matches!(
        "mood".parse::<DsmCategory>(),
        Err(CatalogError::UnknownCategory(_))
    ));
    for category in DsmCategory::ALL {
        assert_eq!(category.as_str().parse::<DsmCategory>().unwrap(), category);
    }
}
