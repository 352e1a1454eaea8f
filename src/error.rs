//! Error Types
//!
//! Every failure the UI can report. None of them is fatal: the view
//! turns each into a transient toast and stays interactive.

use std::fmt;

use crate::validation::FormErrors;

/// Common result type for contact operations
pub type ContactResult<T> = Result<T, ContactError>;

#[derive(Debug, Clone, PartialEq)]
pub enum ContactError {
    /// Form input rejected before any request was sent
    Invalid(FormErrors),
    /// Transport failure (request never completed or non-2xx status)
    Network(String),
    /// Backend answered with GraphQL errors
    Backend(String),
    /// Response body did not match the expected shape
    Decode(String),
    NotFound(u32),
    /// A contact with this first name already exists
    DuplicateName(String),
    /// `confirm_delete` called for an id that was never requested
    NoPendingDelete(u32),
}

impl ContactError {
    /// Short heading for the notification
    pub fn title(&self) -> &'static str {
        match self {
            ContactError::Invalid(_) => "Invalid input",
            ContactError::Network(_) => "Network error",
            ContactError::Backend(_) | ContactError::Decode(_) => "Error occurred",
            ContactError::NotFound(_) => "Contact not found",
            ContactError::DuplicateName(_) => "Duplicate contact",
            ContactError::NoPendingDelete(_) => "Nothing to delete",
        }
    }

    /// Warnings block the action but are not failures of the system
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            ContactError::Invalid(_) | ContactError::DuplicateName(_) | ContactError::NotFound(_)
        )
    }
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::Invalid(errors) => write!(f, "Invalid input: {}", errors),
            ContactError::Network(msg) => write!(f, "Network error: {}", msg),
            ContactError::Backend(msg) => write!(f, "Backend error: {}", msg),
            ContactError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
            ContactError::NotFound(id) => write!(f, "Contact #{} was not found", id),
            ContactError::DuplicateName(name) => {
                write!(f, "A contact named {} already exists", name)
            }
            ContactError::NoPendingDelete(id) => {
                write!(f, "Deletion of contact #{} was not requested", id)
            }
        }
    }
}

impl std::error::Error for ContactError {}

impl From<FormErrors> for ContactError {
    fn from(errors: FormErrors) -> Self {
        ContactError::Invalid(errors)
    }
}

impl From<reqwest::Error> for ContactError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ContactError::Decode(err.to_string())
        } else {
            ContactError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ContactError {
    fn from(err: serde_json::Error) -> Self {
        ContactError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ContactError::NotFound(4).to_string(), "Contact #4 was not found");
        assert_eq!(
            ContactError::DuplicateName("Jane".into()).to_string(),
            "A contact named Jane already exists"
        );
    }

    #[test]
    fn test_warning_classification() {
        assert!(ContactError::DuplicateName("Jane".into()).is_warning());
        assert!(!ContactError::Network("offline".into()).is_warning());
        assert!(!ContactError::Backend("constraint".into()).is_warning());
    }

    #[test]
    fn test_from_json_error_is_decode() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(ContactError::from(err), ContactError::Decode(_)));
    }
}
