//! Assessment record builder: run the matcher over a clinician's symptom
//! selection and persist the result as an immutable `Assessment`.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::info;
use uuid::Uuid;

use mindcare_core::models::assessment::Assessment;
use mindcare_dsm::catalog::Catalog;

use crate::collections;
use crate::error::StorageError;

/// What the clinician supplies when saving a review.
#[derive(Debug, Clone)]
pub struct NewAssessment {
    pub client_id: Uuid,
    pub selected_symptoms: BTreeSet<String>,
    pub clinician_notes: String,
}

/// Build and persist an assessment stamped with the current time.
pub fn create_assessment(
    root: &Path,
    catalog: &Catalog,
    new: NewAssessment,
) -> Result<Assessment, StorageError> {
    create_assessment_at(root, catalog, new, jiff::Timestamp::now())
}

/// Build and persist an assessment stamped with `now`.
///
/// `date` is the UTC calendar day of `now`. The matcher output is stored
/// exactly as computed.
pub fn create_assessment_at(
    root: &Path,
    catalog: &Catalog,
    new: NewAssessment,
    now: jiff::Timestamp,
) -> Result<Assessment, StorageError> {
    if new.selected_symptoms.is_empty() {
        return Err(StorageError::EmptySelection);
    }
    collections::get_client(root, new.client_id)?;

    let suggested_disorders = catalog.compute_matches(&new.selected_symptoms);

    let assessment = Assessment {
        id: Uuid::new_v4(),
        client_id: new.client_id,
        date: now.to_zoned(jiff::tz::TimeZone::UTC).date(),
        selected_symptoms: new.selected_symptoms,
        suggested_disorders,
        clinician_notes: new.clinician_notes,
        created_at: now,
        updated_at: now,
    };

    collections::insert_assessment(root, &assessment)?;

    info!(
        assessment_id = %assessment.id,
        client_id = %assessment.client_id,
        selected = assessment.selected_symptoms.len(),
        suggestions = assessment.suggested_disorders.len(),
        "assessment saved"
    );
    Ok(assessment)
}
