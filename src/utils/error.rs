use crate::domain::entity::EntityKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HotelSystemError {
    #[error("Validation error on '{field}': {reason}")]
    ValidationError { field: String, reason: String },

    #[error("{kind} with ID {id} already exists")]
    DuplicateKeyError { kind: EntityKind, id: String },

    #[error("{kind} with ID {id} not found")]
    NotFoundError { kind: EntityKind, id: String },

    #[error("Reference error: {message}")]
    ReferenceError { message: String },

    #[error("Hotel {hotel_id} has no rooms available")]
    CapacityError { hotel_id: String },

    #[error("Invalid state: {message}")]
    InvalidStateError { message: String },

    #[error("Persistence error at {}: {message}", .path.display())]
    PersistenceError { path: PathBuf, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HotelSystemError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Integrity,
    State,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl HotelSystemError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFoundError {
            kind,
            id: id.into(),
        }
    }

    pub fn reference(message: impl Into<String>) -> Self {
        Self::ReferenceError {
            message: message.into(),
        }
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidStateError {
            message: message.into(),
        }
    }

    pub fn persistence(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::PersistenceError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationError { .. } => ErrorCategory::Validation,
            Self::DuplicateKeyError { .. } => ErrorCategory::Conflict,
            Self::NotFoundError { .. } => ErrorCategory::NotFound,
            Self::ReferenceError { .. } => ErrorCategory::Integrity,
            Self::CapacityError { .. } | Self::InvalidStateError { .. } => ErrorCategory::State,
            Self::PersistenceError { .. } | Self::SerializationError(_) => ErrorCategory::Storage,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::NotFound => ErrorSeverity::Low,
            ErrorCategory::Validation | ErrorCategory::Conflict | ErrorCategory::State => {
                ErrorSeverity::Medium
            }
            ErrorCategory::Integrity | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ValidationError { field, .. } => {
                format!("Correct the value of '{}' and try again", field)
            }
            Self::DuplicateKeyError { kind, .. } => {
                format!("Choose a different {} ID or update the existing record", kind)
            }
            Self::NotFoundError { kind, .. } => {
                format!("List the stored {} records to find a valid ID", kind)
            }
            Self::ReferenceError { .. } => {
                "Create the referenced records first, or cancel the reservations that depend on this one"
                    .to_string()
            }
            Self::CapacityError { .. } => {
                "Pick another hotel or cancel an existing reservation".to_string()
            }
            Self::InvalidStateError { .. } => {
                "Check the current status of the record before retrying".to_string()
            }
            Self::PersistenceError { path, .. } => format!(
                "Check permissions on {} or restore it from a backup",
                path.display()
            ),
            Self::ConfigError { .. } => "Check the configuration file and CLI flags".to_string(),
            Self::SerializationError(_) => "Make sure the data is valid JSON".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ValidationError { field, reason } => format!("Invalid {}: {}", field, reason),
            Self::DuplicateKeyError { kind, id } => format!("A {} with ID '{}' already exists", kind, id),
            Self::NotFoundError { kind, id } => format!("No {} with ID '{}' was found", kind, id),
            Self::ReferenceError { message } => message.clone(),
            Self::CapacityError { hotel_id } => format!("Hotel '{}' is fully booked", hotel_id),
            Self::InvalidStateError { message } => message.clone(),
            Self::PersistenceError { path, .. } => {
                format!("Stored data in {} could not be read or written", path.display())
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let err = HotelSystemError::validation("email", "missing '@'");
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.severity(), ErrorSeverity::Medium);

        let err = HotelSystemError::not_found(EntityKind::Hotel, "H404");
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.severity(), ErrorSeverity::Low);

        let err = HotelSystemError::persistence("hotels.json", "truncated");
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_messages_name_the_field() {
        let err = HotelSystemError::validation("total_rooms", "must be at least 1");
        assert!(err.to_string().contains("total_rooms"));
        assert!(err.recovery_suggestion().contains("total_rooms"));

        let err = HotelSystemError::CapacityError {
            hotel_id: "H001".to_string(),
        };
        assert_eq!(err.user_friendly_message(), "Hotel 'H001' is fully booked");
    }
}
