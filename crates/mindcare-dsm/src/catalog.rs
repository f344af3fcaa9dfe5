use std::collections::{BTreeSet, HashMap, HashSet};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CatalogError;

/// DSM-5 chapter a symptom or disorder is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum DsmCategory {
    Depressive,
    Anxiety,
    Trauma,
    Ocd,
    Bipolar,
    Psychotic,
    Personality,
    Eating,
    Substance,
    Neurodevelopmental,
    Sleep,
    Dissociative,
}

impl DsmCategory {
    /// All categories, in checklist tab order.
    pub const ALL: [DsmCategory; 12] = [
        Self::Depressive,
        Self::Anxiety,
        Self::Trauma,
        Self::Ocd,
        Self::Bipolar,
        Self::Psychotic,
        Self::Personality,
        Self::Eating,
        Self::Substance,
        Self::Neurodevelopmental,
        Self::Sleep,
        Self::Dissociative,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Depressive => "depressive",
            Self::Anxiety => "anxiety",
            Self::Trauma => "trauma",
            Self::Ocd => "ocd",
            Self::Bipolar => "bipolar",
            Self::Psychotic => "psychotic",
            Self::Personality => "personality",
            Self::Eating => "eating",
            Self::Substance => "substance",
            Self::Neurodevelopmental => "neurodevelopmental",
            Self::Sleep => "sleep",
            Self::Dissociative => "dissociative",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Depressive => "Depressive Disorders",
            Self::Anxiety => "Anxiety Disorders",
            Self::Trauma => "Trauma & Stressor-Related",
            Self::Ocd => "OCD & Related Disorders",
            Self::Bipolar => "Bipolar & Related",
            Self::Psychotic => "Psychotic Disorders",
            Self::Personality => "Personality Disorders",
            Self::Eating => "Eating Disorders",
            Self::Substance => "Substance Use Disorders",
            Self::Neurodevelopmental => "Neurodevelopmental",
            Self::Sleep => "Sleep-Wake Disorders",
            Self::Dissociative => "Dissociative Disorders",
        }
    }
}

impl std::fmt::Display for DsmCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DsmCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// An atomic clinical indicator on the checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Symptom {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: DsmCategory,
}

/// A condition suggested once enough of its symptoms are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Disorder {
    pub id: String,
    pub name: String,
    /// DSM-5 / ICD-10-CM diagnostic code.
    pub code: String,
    pub category: DsmCategory,
    pub description: String,
    pub required_symptoms: Vec<String>,
    pub minimum_symptoms: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Informational only; never consulted by the matcher.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclusion_criteria: Vec<String>,
}

/// Read-only symptom and disorder reference data.
///
/// Construct through [`Catalog::new`] or [`Catalog::from_json`], both of
/// which enforce referential integrity, so every disorder held here has a
/// minimum between 1 and its number of required symptoms.
#[derive(Debug, Clone)]
pub struct Catalog {
    symptoms: Vec<Symptom>,
    disorders: Vec<Disorder>,
    symptom_index: HashMap<String, usize>,
    disorder_index: HashMap<String, usize>,
}

/// On-disk shape of a catalog file.
#[derive(Serialize, Deserialize)]
struct CatalogFile {
    symptoms: Vec<Symptom>,
    disorders: Vec<Disorder>,
}

impl Catalog {
    pub fn new(symptoms: Vec<Symptom>, disorders: Vec<Disorder>) -> Result<Self, CatalogError> {
        let catalog = Self::from_parts(symptoms, disorders);
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a `{ "symptoms": [...], "disorders": [...] }` document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.symptoms, file.disorders)
    }

    pub fn to_json(&self) -> Result<String, CatalogError> {
        let file = CatalogFile {
            symptoms: self.symptoms.clone(),
            disorders: self.disorders.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Build without validation. Only for data whose integrity is covered
    /// by tests, such as the built-in DSM-5 tables.
    pub(crate) fn from_parts(symptoms: Vec<Symptom>, disorders: Vec<Disorder>) -> Self {
        let symptom_index = symptoms
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect();
        let disorder_index = disorders
            .iter()
            .enumerate()
            .map(|(i, d)| (d.id.clone(), i))
            .collect();
        Self {
            symptoms,
            disorders,
            symptom_index,
            disorder_index,
        }
    }

    /// Check ids are unique, every required symptom exists, and every
    /// minimum is reachable.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for symptom in &self.symptoms {
            if !seen.insert(symptom.id.as_str()) {
                return Err(CatalogError::DuplicateSymptom(symptom.id.clone()));
            }
        }

        let mut seen_disorders = HashSet::new();
        for disorder in &self.disorders {
            if !seen_disorders.insert(disorder.id.as_str()) {
                return Err(CatalogError::DuplicateDisorder(disorder.id.clone()));
            }

            let mut required = HashSet::new();
            for symptom_id in &disorder.required_symptoms {
                if !seen.contains(symptom_id.as_str()) {
                    return Err(CatalogError::UnknownSymptom {
                        disorder_id: disorder.id.clone(),
                        symptom_id: symptom_id.clone(),
                    });
                }
                if !required.insert(symptom_id.as_str()) {
                    return Err(CatalogError::RepeatedRequirement {
                        disorder_id: disorder.id.clone(),
                        symptom_id: symptom_id.clone(),
                    });
                }
            }

            let count = disorder.required_symptoms.len();
            if disorder.minimum_symptoms == 0 || disorder.minimum_symptoms as usize > count {
                return Err(CatalogError::InvalidMinimum {
                    disorder_id: disorder.id.clone(),
                    minimum: disorder.minimum_symptoms,
                    required: count,
                });
            }
        }
        Ok(())
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn disorders(&self) -> &[Disorder] {
        &self.disorders
    }

    pub fn symptom(&self, id: &str) -> Option<&Symptom> {
        self.symptom_index.get(id).map(|&i| &self.symptoms[i])
    }

    pub fn disorder(&self, id: &str) -> Option<&Disorder> {
        self.disorder_index.get(id).map(|&i| &self.disorders[i])
    }

    pub fn symptoms_in(&self, category: DsmCategory) -> impl Iterator<Item = &Symptom> {
        self.symptoms.iter().filter(move |s| s.category == category)
    }

    pub fn disorders_in(&self, category: DsmCategory) -> impl Iterator<Item = &Disorder> {
        self.disorders.iter().filter(move |d| d.category == category)
    }

    /// How many of `selected` are symptoms filed under `category`.
    /// Ids the catalog does not know are not counted.
    pub fn selected_in_category(
        &self,
        selected: &BTreeSet<String>,
        category: DsmCategory,
    ) -> usize {
        selected
            .iter()
            .filter_map(|id| self.symptom(id))
            .filter(|s| s.category == category)
            .count()
    }

    /// Selected ids that name no symptom in this catalog.
    pub fn unknown_symptoms<'a>(&self, selected: &'a BTreeSet<String>) -> Vec<&'a str> {
        selected
            .iter()
            .filter(|id| !self.symptom_index.contains_key(id.as_str()))
            .map(String::as_str)
            .collect()
    }
}
