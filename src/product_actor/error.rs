use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::ProductId;
use crate::forms::ValidationErrors;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),
    #[error("Product validation error: {0}")]
    ValidationError(ValidationErrors),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(#[from] FrameworkError),
}
