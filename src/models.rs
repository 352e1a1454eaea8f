//! Frontend Models
//!
//! Data structures matching the GraphQL backend entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Phone number attached to a contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub number: String,
}

impl PhoneNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self { number: number.into() }
    }
}

/// Contact data structure (matches backend)
///
/// `is_favorite` is client-only. The view-model derives it from the
/// favorites set on every read; snapshots only carry it when set so older
/// cached lists can be migrated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phones: Vec<PhoneNumber>,
    #[serde(rename = "isFavorite", default, skip_serializing_if = "is_false")]
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Contact {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Avatar image seeded by first name
    pub fn avatar_url(&self) -> String {
        format!("https://api.dicebear.com/6.x/lorelei/svg?seed={}", self.first_name)
    }
}

/// Payload for creating a contact with nested phones
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub phones: Vec<PhoneNumber>,
}

/// Editable scalar fields of a contact
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactPatch {
    pub first_name: String,
    pub last_name: String,
}

/// Backend ordering for contact lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    #[default]
    CreatedAtDesc,
    CreatedAtAsc,
    FirstNameAsc,
}

impl OrderBy {
    /// `order_by` variable in the backend's `[{column: direction}]` form
    pub fn to_variable(self) -> Value {
        match self {
            OrderBy::CreatedAtDesc => json!([{ "created_at": "desc" }]),
            OrderBy::CreatedAtAsc => json!([{ "created_at": "asc" }]),
            OrderBy::FirstNameAsc => json!([{ "first_name": "asc" }]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_from_backend_json() {
        let raw = r#"{
            "id": 7,
            "first_name": "Jane",
            "last_name": "Doe",
            "created_at": "2023-07-28T08:37:30.454285+00:00",
            "phones": [{"number": "0812345678"}, {"number": "0899999999"}]
        }"#;
        let contact: Contact = serde_json::from_str(raw).unwrap();

        assert_eq!(contact.id, 7);
        assert_eq!(contact.phones.len(), 2);
        assert_eq!(contact.phones[1].number, "0899999999");
        assert!(!contact.is_favorite);
    }

    #[test]
    fn test_favorite_flag_only_serialized_when_set() {
        let mut contact: Contact = serde_json::from_str(
            r#"{"id":1,"first_name":"Ann","last_name":"Lee","created_at":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(!serde_json::to_string(&contact).unwrap().contains("isFavorite"));

        contact.is_favorite = true;
        assert!(serde_json::to_string(&contact).unwrap().contains(r#""isFavorite":true"#));
    }

    #[test]
    fn test_order_by_variable() {
        assert_eq!(OrderBy::default().to_variable(), json!([{ "created_at": "desc" }]));
        assert_eq!(OrderBy::FirstNameAsc.to_variable(), json!([{ "first_name": "asc" }]));
    }
}
