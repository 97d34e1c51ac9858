use std::cmp::Ordering;
use std::str::FromStr;

use crate::domain::Product;
use crate::query::{ParseQueryError, SortDirection};

/// Product fields a list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSortField {
    Id,
    Name,
    Category,
    Stock,
    Price,
    Description,
}

impl FromStr for ProductSortField {
    type Err = ParseQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(ProductSortField::Id),
            "name" => Ok(ProductSortField::Name),
            "category" => Ok(ProductSortField::Category),
            "stock" => Ok(ProductSortField::Stock),
            "price" => Ok(ProductSortField::Price),
            "description" => Ok(ProductSortField::Description),
            other => Err(ParseQueryError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductSort {
    pub field: ProductSortField,
    pub direction: SortDirection,
}

impl ProductSort {
    /// Text fields compare case-sensitively, prices by `f64::total_cmp`.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let ordering = match self.field {
            ProductSortField::Id => a.id.cmp(&b.id),
            ProductSortField::Name => a.name.cmp(&b.name),
            ProductSortField::Category => a.category.cmp(&b.category),
            ProductSortField::Stock => a.stock.cmp(&b.stock),
            ProductSortField::Price => a.price.total_cmp(&b.price),
            ProductSortField::Description => a.description.cmp(&b.description),
        };
        self.direction.apply(ordering)
    }
}

/// Search and sort options for a product list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub search: Option<String>,
    pub sort: Option<ProductSort>,
}

impl ProductQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn sort_by(mut self, field: ProductSortField, direction: SortDirection) -> Self {
        self.sort = Some(ProductSort { field, direction });
        self
    }

    /// Builds a query from the loosely typed list parameters: an empty
    /// search or sort field means "none", an empty direction means ascending.
    pub fn from_params(search: &str, sort_field: &str, direction: &str) -> Result<Self, ParseQueryError> {
        let mut query = Self::new();
        if !search.is_empty() {
            query = query.search(search);
        }
        if !sort_field.is_empty() {
            let direction = if direction.is_empty() { SortDirection::Asc } else { direction.parse()? };
            query = query.sort_by(sort_field.parse()?, direction);
        }
        Ok(query)
    }

    /// Lowercased search text, or `None` when every product matches.
    pub(crate) fn needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|text| !text.is_empty())
            .map(str::to_lowercase)
    }
}

/// Case-insensitive substring match against name or category. `needle`
/// must already be lowercase.
pub(crate) fn matches_search(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle) || product.category.to_lowercase().contains(needle)
}
