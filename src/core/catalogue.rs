use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum CatalogueError {
    // The remote API answered with a status the operation does not accept.
    // The message is already phrased for the shared error page.
    Remote {
        message: String,
        reason_code: Option<String>,
    },
    // The request never produced a response, e.g. connect or timeout failures.
    Gateway {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
}

impl CatalogueError {
    pub fn remote(message: &str, reason_code: Option<String>) -> CatalogueError {
        CatalogueError::Remote { message: message.to_string(), reason_code }
    }

    pub fn gateway(message: &str, reason_code: Option<String>, retryable: bool) -> CatalogueError {
        CatalogueError::Gateway { message: message.to_string(), reason_code, retryable }
    }

    pub fn not_found(message: &str) -> CatalogueError {
        CatalogueError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> CatalogueError {
        CatalogueError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> CatalogueError {
        CatalogueError::Serialization { message: message.to_string() }
    }

    pub fn retryable(&self) -> bool {
        match self {
            CatalogueError::Remote { .. } => { false }
            CatalogueError::Gateway { retryable, .. } => { *retryable }
            CatalogueError::NotFound { .. } => { false }
            CatalogueError::Validation { .. } => { false }
            CatalogueError::Serialization { .. } => { false }
        }
    }
}

impl From<serde_json::Error> for CatalogueError {
    fn from(err: serde_json::Error) -> Self {
        CatalogueError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for CatalogueError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CatalogueError::Remote { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            CatalogueError::Gateway { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            CatalogueError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CatalogueError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            CatalogueError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

/// A specialized Result type for catalogue operations.
pub type CatalogueResult<T> = Result<T, CatalogueError>;
