//! System orchestration, configuration, startup, and shutdown logic.

pub mod back_office;
pub mod config;
pub mod error;
pub mod tracing;

pub use back_office::*;
pub use config::*;
pub use error::*;
pub use self::tracing::*;
