//! Form Validation
//!
//! Pure validators for contact names and phone numbers, plus the
//! `ContactDraft` form model that aggregates them.

use std::fmt;

use crate::models::{Contact, ContactPatch, NewContact, PhoneNumber};

const NAME_LENGTH: (usize, usize) = (3, 20);
const PHONE_LENGTH: (usize, usize) = (7, 20);

/// Field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Required { field: String },
    Format { field: String, allowed: &'static str },
    Length { field: String, min: usize, max: usize, unit: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required { field } => write!(f, "{} is required", field),
            ValidationError::Format { field, allowed } => {
                write!(f, "Only {} are allowed for {}", allowed, field)
            }
            ValidationError::Length { field, min, max, unit } => {
                write!(f, "{} must be between {} and {} {}", field, min, max, unit)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a first or last name: ASCII letters only, 3..=20 characters
pub fn validate_name(value: &str, field_label: &str) -> Result<(), ValidationError> {
    validate(
        value,
        field_label,
        |c| c.is_ascii_alphabetic(),
        "letters",
        NAME_LENGTH,
        "characters",
    )
}

/// Validate a phone number: ASCII digits only, 7..=20 digits
pub fn validate_phone(value: &str, field_label: &str) -> Result<(), ValidationError> {
    validate(
        value,
        field_label,
        |c| c.is_ascii_digit(),
        "numbers",
        PHONE_LENGTH,
        "digits",
    )
}

fn validate(
    value: &str,
    field_label: &str,
    allowed: impl Fn(char) -> bool,
    allowed_name: &'static str,
    (min, max): (usize, usize),
    unit: &'static str,
) -> Result<(), ValidationError> {
    let field = field_label.to_string();
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    if !value.chars().all(allowed) {
        return Err(ValidationError::Format { field, allowed: allowed_name });
    }
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ValidationError::Length { field, min, max, unit });
    }
    Ok(())
}

/// Per-field errors of a contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub first_name: Option<ValidationError>,
    pub last_name: Option<ValidationError>,
    /// One slot per phone entry, same order as the draft
    pub phones: Vec<Option<ValidationError>>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.phones.iter().all(Option::is_none)
    }

    pub fn phone(&self, index: usize) -> Option<&ValidationError> {
        self.phones.get(index).and_then(Option::as_ref)
    }

    fn all(&self) -> impl Iterator<Item = &ValidationError> {
        self.first_name
            .iter()
            .chain(self.last_name.iter())
            .chain(self.phones.iter().flatten())
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.all().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Contact form input shared by the add and edit views
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub phones: Vec<String>,
}

impl ContactDraft {
    /// Empty draft with a single phone slot
    pub fn blank() -> Self {
        Self {
            phones: vec![String::new()],
            ..Default::default()
        }
    }

    /// Run every validator, collecting all field errors
    pub fn validate(&self) -> Result<(), FormErrors> {
        let errors = FormErrors {
            first_name: validate_name(&self.first_name, "First name").err(),
            last_name: validate_name(&self.last_name, "Last name").err(),
            phones: self
                .phones
                .iter()
                .map(|phone| validate_phone(phone, "Phone number").err())
                .collect(),
        };
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn to_new_contact(&self) -> NewContact {
        NewContact {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phones: self.phones.iter().map(PhoneNumber::new).collect(),
        }
    }

    pub fn to_patch(&self) -> ContactPatch {
        ContactPatch {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

impl From<&Contact> for ContactDraft {
    /// Prefill the edit form
    fn from(contact: &Contact) -> Self {
        Self {
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            phones: contact.phones.iter().map(|p| p.number.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_required() {
        assert_eq!(
            validate_name("", "First name"),
            Err(ValidationError::Required { field: "First name".into() })
        );
    }

    #[test]
    fn test_name_length_bounds() {
        let just_over = "a".repeat(21);
        let far_over = "Z".repeat(40);
        for name in ["Al", "Bo", just_over.as_str(), far_over.as_str()] {
            assert!(matches!(
                validate_name(name, "Name"),
                Err(ValidationError::Length { min: 3, max: 20, .. })
            ));
        }
        assert!(validate_name("Amy", "Name").is_ok());
        assert!(validate_name(&"b".repeat(20), "Name").is_ok());
    }

    #[test]
    fn test_name_format_checked_before_length() {
        // Too short and containing a digit: format wins
        assert!(matches!(validate_name("a1", "Name"), Err(ValidationError::Format { .. })));
        assert!(matches!(validate_name("Mary Ann", "Name"), Err(ValidationError::Format { .. })));
        assert!(matches!(validate_name("José", "Name"), Err(ValidationError::Format { .. })));
    }

    #[test]
    fn test_phone_rules() {
        assert!(matches!(validate_phone("", "Phone"), Err(ValidationError::Required { .. })));
        assert!(matches!(validate_phone("+62812345", "Phone"), Err(ValidationError::Format { .. })));
        assert!(matches!(validate_phone("081-234-567", "Phone"), Err(ValidationError::Format { .. })));
        assert!(matches!(validate_phone("123456", "Phone"), Err(ValidationError::Length { .. })));
        assert!(validate_phone("1234567", "Phone").is_ok());
        assert!(validate_phone(&"9".repeat(20), "Phone").is_ok());
        assert!(matches!(
            validate_phone(&"9".repeat(21), "Phone"),
            Err(ValidationError::Length { min: 7, max: 20, .. })
        ));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            validate_name("ab", "Last name").unwrap_err().to_string(),
            "Last name must be between 3 and 20 characters"
        );
        assert_eq!(
            validate_phone("12ab", "Phone number").unwrap_err().to_string(),
            "Only numbers are allowed for Phone number"
        );
        assert_eq!(
            validate_name("x_y", "First name").unwrap_err().to_string(),
            "Only letters are allowed for First name"
        );
    }

    #[test]
    fn test_draft_collects_every_error() {
        let draft = ContactDraft {
            first_name: "Jo".into(),
            last_name: "Smith".into(),
            phones: vec!["0812345678".into(), "12".into()],
        };
        let errors = draft.validate().unwrap_err();

        assert!(errors.first_name.is_some());
        assert!(errors.last_name.is_none());
        assert!(errors.phone(0).is_none());
        assert!(errors.phone(1).is_some());
        assert!(errors.to_string().contains("First name"));
    }

    #[test]
    fn test_valid_draft_converts() {
        let draft = ContactDraft {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            phones: vec!["0812345678".into()],
        };
        assert!(draft.validate().is_ok());
        assert_eq!(draft.to_new_contact().phones, vec![PhoneNumber::new("0812345678")]);
        assert_eq!(draft.to_patch().last_name, "Doe");
    }

    #[test]
    fn test_draft_from_contact_prefills_every_phone() {
        let contact: Contact = serde_json::from_value(serde_json::json!({
            "id": 4,
            "first_name": "Jane",
            "last_name": "Doe",
            "phones": [{ "number": "0811111111" }, { "number": "0822222222" }],
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        let draft = ContactDraft::from(&contact);
        assert_eq!(draft.first_name, "Jane");
        assert_eq!(draft.phones, vec!["0811111111".to_string(), "0822222222".to_string()]);
    }
}
