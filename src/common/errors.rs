use thiserror::Error;

use crate::web::helpers::{GENERIC_RESERVE_FAILURE, RESERVATION_FAILED};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("Storage error: {0}")]
    Backend(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("Invalid response body: {0}")]
    Decode(String),
}

/// Reasons a reservation confirmation did not go through.
///
/// The `Display` text is what the user sees in the notification.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReservationError {
    #[error("Sign in to reserve this car")]
    NotAuthenticated,

    #[error("Pick start/end dates")]
    MissingDates,

    #[error("A reservation is already being submitted")]
    Busy,

    #[error("No car selected")]
    NoActiveDraft,

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("{}", or_generic(.0))]
    Network(String),
}

/// The request's own message, or "Reservation failed" when it has none.
fn or_generic(message: &str) -> &str {
    if message.trim().is_empty() {
        RESERVATION_FAILED
    } else {
        message
    }
}

impl From<ApiError> for ReservationError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { status, detail } => ReservationError::Rejected {
                status,
                message: detail
                    .filter(|d| !d.trim().is_empty())
                    .unwrap_or_else(|| GENERIC_RESERVE_FAILURE.to_string()),
            },
            ApiError::Network(msg) | ApiError::Decode(msg) => ReservationError::Network(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_uses_server_detail() {
        let err = ReservationError::from(ApiError::Status {
            status: 409,
            detail: Some("Car not available for selected dates".into()),
        });
        assert_eq!(err.to_string(), "Car not available for selected dates");
    }

    #[test]
    fn test_rejected_falls_back_without_detail() {
        let err = ReservationError::from(ApiError::Status {
            status: 500,
            detail: None,
        });
        assert_eq!(err.to_string(), "Failed to reserve");
    }

    #[test]
    fn test_network_failure_shows_request_message() {
        let err = ReservationError::from(ApiError::Network("Failed to fetch".into()));
        assert_eq!(err.to_string(), "Failed to fetch");
    }

    #[test]
    fn test_network_failure_falls_back_without_message() {
        let err = ReservationError::from(ApiError::Network("  ".into()));
        assert_eq!(err.to_string(), "Reservation failed");
    }
}
