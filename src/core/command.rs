use async_trait::async_trait;
use crate::core::catalogue::CatalogueError;

#[derive(Debug)]
pub enum CommandError {
    Remote {
        message: String,
        reason_code: Option<String>,
    },
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
    Other {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<CatalogueError> for CommandError {
    fn from(other: CatalogueError) -> Self {
        match other {
            CatalogueError::Remote { message, reason_code } => {
                CommandError::Remote { message, reason_code }
            }
            CatalogueError::Gateway { message, reason_code, retryable } => {
                CommandError::Gateway { message, reason_code, retryable }
            }
            CatalogueError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            CatalogueError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            CatalogueError::Serialization { message } => {
                CommandError::Serialization { message }
            }
        }
    }
}
