pub mod invoice;
pub mod product;

pub use invoice::*;
pub use product::*;
