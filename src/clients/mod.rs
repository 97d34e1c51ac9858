//! Typed clients the view layer holds. Each wraps a `ResourceClient` and maps
//! transport failures into the collection's error type.

#[macro_use]
mod macros;

pub mod invoice_client;
pub mod product_client;

pub use invoice_client::InvoiceClient;
pub use product_client::ProductClient;
