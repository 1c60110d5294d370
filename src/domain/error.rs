use crate::core::error_bus::BusError;
use thiserror::Error;

/// Every fault a contributor use case can surface.
///
/// Not-found is deliberately absent: it is an [`Outcome`](crate::domain::outcome::Outcome).
#[derive(Debug, Error, PartialEq, Clone)]
pub enum DomainError {
    #[error("DomainError: Validation failed: {0}")]
    Validation(String),

    #[error("DomainError: Storage failure: {0}")]
    Storage(String),

    #[error("DomainError: Notification failure: {0}")]
    Notification(String),

    #[error("DomainError: {0}")]
    Bus(#[from] BusError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_variants() {
        let cases: Vec<(DomainError, &str)> = vec![
            (
                DomainError::Validation("name is required".into()),
                "DomainError: Validation failed: name is required",
            ),
            (
                DomainError::Storage("disk full".into()),
                "DomainError: Storage failure: disk full",
            ),
            (
                DomainError::Notification("smtp down".into()),
                "DomainError: Notification failure: smtp down",
            ),
            (
                DomainError::from(BusError::RequestHandlerNotFound("Ping".into())),
                "DomainError: BusError: No request handler found for request type 'Ping'",
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }
}
