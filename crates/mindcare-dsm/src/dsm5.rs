//! Built-in DSM-5 reference tables.
//!
//! DISCLAIMER: clinical decision support only, not a diagnostic instrument.

mod disorders;
mod symptoms;

use std::sync::LazyLock;

use crate::catalog::{Catalog, Disorder, DsmCategory, Symptom};

pub(crate) struct DisorderRow {
    id: &'static str,
    name: &'static str,
    code: &'static str,
    category: DsmCategory,
    description: &'static str,
    required: &'static [&'static str],
    minimum: u32,
    duration: Option<&'static str>,
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    let symptoms = symptoms::SYMPTOMS
        .iter()
        .flat_map(|(category, rows)| {
            rows.iter().map(move |(id, name, description)| Symptom {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                category: *category,
            })
        })
        .collect();

    let disorders = disorders::DISORDERS
        .iter()
        .map(|row| Disorder {
            id: row.id.to_string(),
            name: row.name.to_string(),
            code: row.code.to_string(),
            category: row.category,
            description: row.description.to_string(),
            required_symptoms: row.required.iter().map(|s| s.to_string()).collect(),
            minimum_symptoms: row.minimum,
            duration: row.duration.map(str::to_string),
            exclusion_criteria: Vec::new(),
        })
        .collect();

    Catalog::from_parts(symptoms, disorders)
});

/// The built-in catalog, built on first use.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}
