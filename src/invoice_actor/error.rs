use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::UnknownStatus;
use crate::forms::ValidationErrors;

/// Errors that can occur during invoice operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvoiceError {
    #[error("Invoice validation error: {0}")]
    ValidationError(ValidationErrors),
    #[error("Invoice status error: {0}")]
    StatusError(#[from] UnknownStatus),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(#[from] FrameworkError),
}
