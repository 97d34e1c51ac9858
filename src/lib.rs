//! # Back Office Store
//!
//! In-process store behind a small e-commerce back office: a product catalog
//! with search, sort and pagination, an invoice ledger with status updates,
//! and the aggregate counts of the dashboard.
//!
//! ## Layout
//!
//! - **Actor framework** - a generic [`ResourceActor`](actor_framework::ResourceActor)
//!   owns one ordered collection and serves requests one at a time; the
//!   cloneable [`ResourceClient`](actor_framework::ResourceClient) talks to it
//!   over a channel.
//! - **Domain types** - [`Product`](domain::Product) and [`Invoice`](domain::Invoice)
//!   with their create payloads and partial-update patches.
//! - **Collections** - [`product_actor`] and [`invoice_actor`] plug the domain
//!   types into the framework.
//! - **Clients** - [`ProductClient`](clients::ProductClient) and
//!   [`InvoiceClient`](clients::InvoiceClient), instrumented with `tracing`.
//! - **Forms** - caller-side validation and the invoice draft that turns
//!   selected products and quantities into a create payload.
//! - **System** - [`BackOffice`](app_system::BackOffice) starts, seeds and
//!   stops the actors.
//!
//! ## Example Usage
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use backoffice::app_system::{BackOffice, StoreConfig};
//! use backoffice::product_actor::ProductQuery;
//! use backoffice::query::PageRequest;
//!
//! let system = BackOffice::start(StoreConfig::default());
//! let page = system
//!     .products
//!     .list_products(PageRequest::default(), ProductQuery::new().search("electronics"))
//!     .await?;
//! println!("{} of {} products", page.items.len(), page.total);
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod dashboard;
pub mod domain;
pub mod fixtures;
pub mod forms;
pub mod invoice_actor;
pub mod product_actor;
pub mod query;

#[cfg(test)]
mod mock_framework;
