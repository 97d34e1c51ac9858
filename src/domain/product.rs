use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-assigned product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub price: f64,
    pub description: String,
}

impl Product {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        category: impl Into<String>,
        stock: u32,
        price: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            category: category.into(),
            stock,
            price,
            description: description.into(),
        }
    }
}

/// Payload for creating a new product. The store picks the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub price: f64,
    pub description: String,
}

/// Partial update for a product. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub stock: Option<u32>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

impl From<ProductCreate> for ProductPatch {
    fn from(params: ProductCreate) -> Self {
        Self {
            name: Some(params.name),
            category: Some(params.category),
            stock: Some(params.stock),
            price: Some(params.price),
            description: Some(params.description),
        }
    }
}
