use thiserror::Error;
use crate::actor_framework::FrameworkError;

/// Errors that can occur during seller operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SellerError {
    #[error("Seller not found: {0}")]
    NotFound(String),
    #[error("Seller validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for SellerError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => SellerError::NotFound(id),
            FrameworkError::Rejected(reason) => SellerError::ValidationError(reason),
            other => SellerError::ActorCommunicationError(other.to_string()),
        }
    }
}
