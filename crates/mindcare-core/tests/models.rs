use mindcare_core::error::CoreError;
use mindcare_core::keys;
use mindcare_core::models::assessment::{Assessment, Confidence};
use mindcare_core::models::client::{Client, ClientStatus};
use mindcare_core::models::session::{RiskLevel, Session, SessionStatus, SessionType};
use uuid::Uuid;

const CLIENT: &str = r#"{
  "id": "6f1c1d2e-8a9b-4c3d-9e0f-112233445566",
  "firstName": "Jordan",
  "lastName": "Reyes",
  "dateOfBirth": "1990-07-15",
  "email": "jordan@example.com",
  "phone": "555-0199",
  "insuranceProvider": "Acme Health",
  "emergencyContact": { "name": "Sam", "relationship": "Partner", "phone": "555-0198" },
  "startDate": "2024-01-02",
  "status": "discharged",
  "createdAt": "2024-01-02T15:04:05.000Z",
  "updatedAt": "2024-01-02T15:04:05.000Z"
}"#;

const ASSESSMENT: &str = r#"{
  "id": "9e8d7c6b-5a49-4382-9170-abcdefabcdef",
  "clientId": "6f1c1d2e-8a9b-4c3d-9e0f-112233445566",
  "date": "2024-03-01",
  "selectedSymptoms": ["anx-3", "anx-1", "eat-4"],
  "suggestedDisorders": [
    {
      "disorderId": "bed",
      "name": "Binge-Eating Disorder",
      "code": "F50.81",
      "matchedSymptoms": ["eat-4"],
      "totalRequired": 1,
      "minimumRequired": 1,
      "confidence": "high",
      "percentage": 100
    },
    {
      "disorderId": "gad",
      "name": "Generalized Anxiety Disorder",
      "code": "F41.1",
      "matchedSymptoms": ["anx-1", "anx-3"],
      "totalRequired": 8,
      "minimumRequired": 4,
      "confidence": "low",
      "percentage": 50
    }
  ],
  "clinicianNotes": "",
  "createdAt": "2024-03-01T16:20:00.000Z",
  "updatedAt": "2024-03-01T16:20:00.000Z"
}"#;

fn date(s: &str) -> jiff::civil::Date {
    s.parse().unwrap()
}

#[test]
fn client_reads_camel_case() {
    let client: Client = serde_json::from_str(CLIENT).unwrap();

    assert_eq!(client.full_name(), "Jordan Reyes");
    assert_eq!(client.sort_name(), "Reyes, Jordan");
    assert_eq!(client.status, ClientStatus::Discharged);
    assert!(!client.is_active());
    assert_eq!(client.insurance_provider.as_deref(), Some("Acme Health"));
    assert!(client.address.is_none());
    client.validate().unwrap();

    let json = serde_json::to_value(&client).unwrap();
    assert_eq!(json["dateOfBirth"], "1990-07-15");
    assert_eq!(json["emergencyContact"]["relationship"], "Partner");
    assert!(json.get("address").is_none());
}

#[test]
fn age_counts_birthdays() {
    let client: Client = serde_json::from_str(CLIENT).unwrap();

    assert_eq!(client.age_on(date("2024-07-14")), 33);
    assert_eq!(client.age_on(date("2024-07-15")), 34);
    assert_eq!(client.age_on(date("2025-01-01")), 34);
}

#[test]
fn search_matches_full_name_or_email() {
    let client: Client = serde_json::from_str(CLIENT).unwrap();

    assert!(client.matches_search(""));
    assert!(client.matches_search("jordan r"));
    assert!(client.matches_search("REYES"));
    assert!(client.matches_search("@example.COM"));
    assert!(!client.matches_search("reyes jordan"));
    assert!(!client.matches_search("acme"));
}

#[test]
fn blank_name_fails_validation() {
    let mut client: Client = serde_json::from_str(CLIENT).unwrap();
    client.last_name = "  ".to_string();

    assert!(matches!(
        client.validate(),
        Err(CoreError::Invalid { entity: "client", .. })
    ));
}

#[test]
fn session_enums_use_app_spelling() {
    let json = r#"{
      "id": "0a0b0c0d-1111-4222-8333-444455556666",
      "clientId": "6f1c1d2e-8a9b-4c3d-9e0f-112233445566",
      "date": "2024-02-14",
      "startTime": "14:00",
      "duration": 50,
      "type": "telehealth",
      "status": "no-show",
      "notes": "",
      "mood": 4,
      "riskLevel": "moderate",
      "goals": ["sleep hygiene"],
      "createdAt": "2024-02-14T13:00:00.000Z",
      "updatedAt": "2024-02-14T13:00:00.000Z"
    }"#;
    let mut session: Session = serde_json::from_str(json).unwrap();

    assert_eq!(session.session_type, SessionType::Telehealth);
    assert_eq!(session.status, SessionStatus::NoShow);
    assert_eq!(session.risk_level, Some(RiskLevel::Moderate));
    session.validate().unwrap();

    let value = serde_json::to_value(&session).unwrap();
    assert_eq!(value["type"], "telehealth");
    assert_eq!(value["status"], "no-show");

    session.session_type = SessionType::FollowUp;
    assert_eq!(serde_json::to_value(&session).unwrap()["type"], "follow-up");

    session.mood = Some(0);
    assert!(session.validate().is_err());
}

#[test]
fn assessment_snapshot_and_checks() {
    let assessment: Assessment = serde_json::from_str(ASSESSMENT).unwrap();

    let selected: Vec<&str> = assessment
        .selected_symptoms
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(selected, ["anx-1", "anx-3", "eat-4"]);
    let top = assessment.top_suggestion().unwrap();
    assert_eq!(top.disorder_id, "bed");
    assert_eq!(top.confidence, Confidence::High);
    assessment.validate().unwrap();

    let value = serde_json::to_value(&assessment).unwrap();
    assert_eq!(value["suggestedDisorders"][1]["confidence"], "low");
    assert_eq!(value["suggestedDisorders"][1]["minimumRequired"], 4);
}

#[test]
fn assessment_rejects_unranked_or_stray_matches() {
    let mut unranked: Assessment = serde_json::from_str(ASSESSMENT).unwrap();
    unranked.suggested_disorders.reverse();
    assert!(unranked.validate().is_err());

    let mut stray: Assessment = serde_json::from_str(ASSESSMENT).unwrap();
    stray.selected_symptoms.remove("eat-4");
    assert!(stray.validate().is_err());
}

#[test]
fn confidence_orders_low_to_high() {
    assert!(Confidence::Low < Confidence::Moderate);
    assert!(Confidence::Moderate < Confidence::High);
    assert_eq!(Confidence::Moderate.to_string(), "moderate");
}

#[test]
fn storage_keys() {
    let id = Uuid::nil();
    assert_eq!(
        keys::client(id),
        "clients/00000000-0000-0000-0000-000000000000.json"
    );
    assert!(keys::session(id).starts_with(keys::SESSIONS_PREFIX));
    assert!(keys::assessment(id).starts_with(keys::ASSESSMENTS_PREFIX));
}
