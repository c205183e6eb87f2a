//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.
//! All of them are recoverable; none should take the process down.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The requested category has no books to pick from
    EmptyPool,
    /// The catalog feed could not be fetched or parsed
    DataUnavailable(String),
    /// The audit sink failed to record an event
    Audit(String),
    /// Validation error with message
    Validation(String),
}

impl DomainError {
    /// Message suitable for showing to an end user.
    pub fn user_message(&self) -> &'static str {
        match self {
            DomainError::EmptyPool => "There are no books to recommend in this category yet!",
            DomainError::DataUnavailable(_) => {
                "The book list is empty or could not be loaded. Please check the data link."
            }
            DomainError::Audit(_) => "The event could not be logged.",
            DomainError::Validation(_) => "Please choose a category first.",
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::EmptyPool => write!(f, "No books available in the selected category"),
            DomainError::DataUnavailable(msg) => write!(f, "Catalog unavailable: {}", msg),
            DomainError::Audit(msg) => write!(f, "Audit sink error: {}", msg),
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Feed parsing failures surface as missing data
impl From<csv::Error> for DomainError {
    fn from(e: csv::Error) -> Self {
        DomainError::DataUnavailable(format!("CSV parse error: {}", e))
    }
}
