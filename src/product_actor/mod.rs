//! Product catalog: search, sort and shallow-merge updates.

pub mod entity;
pub mod error;
mod query;

pub use error::*;
pub use query::*;
