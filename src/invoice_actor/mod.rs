//! Invoice ledger: paginated listing and partial updates. Invoices have no
//! search, no sort and no delete.

pub mod entity;
pub mod error;

pub use error::*;
