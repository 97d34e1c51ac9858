use crate::actor_framework::{Entity, SequentialId};
use crate::domain::{Product, ProductCreate, ProductId, ProductPatch};
use super::query::{matches_search, ProductQuery};

impl SequentialId for ProductId {
    fn first() -> Self {
        ProductId(1)
    }

    fn next(self) -> Self {
        ProductId(self.0 + 1)
    }
}

impl Entity for Product {
    type Id = ProductId;
    type CreateParams = ProductCreate;
    type Patch = ProductPatch;
    type Query = ProductQuery;

    fn id(&self) -> ProductId {
        self.id
    }

    fn from_create_params(id: ProductId, params: ProductCreate) -> Self {
        Self {
            id,
            name: params.name,
            category: params.category,
            stock: params.stock,
            price: params.price,
            description: params.description,
        }
    }

    /// Updates any subset of name, category, stock, price and description.
    fn apply_patch(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }

    /// Filters by the search text, then sorts. The sort is stable, so
    /// products with equal keys keep their stored order.
    fn select(records: &[Self], query: &ProductQuery) -> Vec<Self> {
        let needle = query.needle();
        let mut selected: Vec<Product> = records
            .iter()
            .filter(|product| needle.as_deref().map_or(true, |n| matches_search(product, n)))
            .cloned()
            .collect();

        if let Some(sort) = query.sort {
            selected.sort_by(|a, b| sort.compare(a, b));
        }
        selected
    }
}
