#![allow(dead_code)]

use mindcare_core::models::client::{Client, ClientStatus, EmergencyContact};
use mindcare_core::models::session::{Session, SessionStatus, SessionType};
use uuid::Uuid;

pub fn ts(s: &str) -> jiff::Timestamp {
    s.parse().unwrap()
}

pub fn date(s: &str) -> jiff::civil::Date {
    s.parse().unwrap()
}

pub fn client(first: &str, last: &str) -> Client {
    Client {
        id: Uuid::new_v4(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        date_of_birth: date("1988-04-12"),
        email: format!("{}@example.com", first.to_lowercase()),
        phone: "555-0100".to_string(),
        address: None,
        emergency_contact: EmergencyContact {
            name: "Pat".to_string(),
            relationship: "Sibling".to_string(),
            phone: "555-0101".to_string(),
        },
        insurance_provider: None,
        insurance_id: None,
        referral_source: None,
        start_date: date("2024-01-08"),
        status: ClientStatus::Active,
        notes: None,
        created_at: ts("2024-01-08T09:00:00Z"),
        updated_at: ts("2024-01-08T09:00:00Z"),
    }
}

pub fn session(client_id: Uuid, on: &str) -> Session {
    Session {
        id: Uuid::new_v4(),
        client_id,
        date: date(on),
        start_time: "10:00".to_string(),
        end_time: Some("10:50".to_string()),
        duration: 50,
        session_type: SessionType::FollowUp,
        status: SessionStatus::Completed,
        notes: "Reviewed sleep diary.".to_string(),
        mood: Some(6),
        risk_level: None,
        goals: None,
        interventions: None,
        homework: None,
        created_at: ts("2024-02-01T10:55:00Z"),
        updated_at: ts("2024-02-01T10:55:00Z"),
    }
}

pub fn symptoms(ids: &[&str]) -> std::collections::BTreeSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}
