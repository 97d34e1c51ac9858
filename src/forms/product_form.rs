use crate::domain::{Product, ProductCreate, ProductPatch};
use super::{parse_number, ValidationErrors};

/// Raw text of the product create/edit screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub stock: String,
    pub price: String,
    pub description: String,
}

impl ProductForm {
    /// Prefills the edit screen.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            stock: product.stock.to_string(),
            price: product.price.to_string(),
            description: product.description.clone(),
        }
    }

    /// Checks every field and, if all pass, builds the create payload.
    /// Text fields are submitted untrimmed.
    pub fn validate(&self) -> Result<ProductCreate, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.add("name", "Name is required");
        }
        if self.category.trim().is_empty() {
            errors.add("category", "Category is required");
        }

        let stock = if self.stock.trim().is_empty() {
            errors.add("stock", "Stock is required");
            None
        } else {
            let stock = parse_number(&self.stock)
                .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n <= f64::from(u32::MAX))
                .map(|n| n as u32);
            if stock.is_none() {
                errors.add("stock", "Stock must be a positive number");
            }
            stock
        };

        let price = if self.price.trim().is_empty() {
            errors.add("price", "Price is required");
            None
        } else {
            let price = parse_number(&self.price).filter(|n| *n > 0.0);
            if price.is_none() {
                errors.add("price", "Price must be a positive number");
            }
            price
        };

        if self.description.trim().is_empty() {
            errors.add("description", "Description is required");
        }

        errors.into_result(|| ProductCreate {
            name: self.name.clone(),
            category: self.category.clone(),
            stock: stock.unwrap_or_default(),
            price: price.unwrap_or_default(),
            description: self.description.clone(),
        })
    }

    /// Same checks as [`ProductForm::validate`]; the edit screen always
    /// submits every field.
    pub fn validate_patch(&self) -> Result<ProductPatch, ValidationErrors> {
        self.validate().map(ProductPatch::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ProductForm {
        ProductForm {
            name: "Desk".into(),
            category: "Furniture".into(),
            stock: "4".into(),
            price: "250000".into(),
            description: "Standing desk".into(),
        }
    }

    #[test]
    fn test_valid_form() {
        let params = form().validate().unwrap();
        assert_eq!(params.stock, 4);
        assert_eq!(params.price, 250_000.0);
        assert_eq!(params.name, "Desk");
    }

    #[test]
    fn test_blank_fields_are_required() {
        let errors = ProductForm { name: "  ".into(), ..ProductForm::default() }
            .validate()
            .unwrap_err();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("category"), Some("Category is required"));
        assert_eq!(errors.get("stock"), Some("Stock is required"));
        assert_eq!(errors.get("price"), Some("Price is required"));
        assert_eq!(errors.get("description"), Some("Description is required"));
    }

    #[test]
    fn test_numeric_ranges() {
        let errors = ProductForm { stock: "-1".into(), price: "0".into(), ..form() }
            .validate()
            .unwrap_err();
        assert_eq!(errors.get("stock"), Some("Stock must be a positive number"));
        assert_eq!(errors.get("price"), Some("Price must be a positive number"));

        let errors = ProductForm { stock: "2.5".into(), price: "ten".into(), ..form() }
            .validate()
            .unwrap_err();
        assert_eq!(errors.len(), 2);

        assert_eq!(ProductForm { stock: "0".into(), ..form() }.validate().unwrap().stock, 0);
    }

    #[test]
    fn test_edit_round_trip() {
        let product = Product::new(3, "T-shirt", "Clothing", 50, 150_000.0, "Cotton t-shirt");
        let patch = ProductForm::from_product(&product).validate_patch().unwrap();
        assert_eq!(patch.stock, Some(50));
        assert_eq!(patch.price, Some(150_000.0));
    }
}
