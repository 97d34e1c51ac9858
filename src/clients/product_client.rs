use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Product, ProductCreate, ProductId};
use crate::forms::ProductForm;
use crate::product_actor::{ProductError, ProductQuery};
use crate::query::{Page, PageRequest};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    /// `total` counts every product matching the query, not just this page.
    #[instrument(skip(self))]
    pub async fn list_products(&self, page: PageRequest, query: ProductQuery) -> Result<Page<Product>, ProductError> {
        debug!("Sending request");
        Ok(self.inner.list(query, page).await?)
    }

    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    /// `false` when no product had this id.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<bool, ProductError> {
        debug!("Sending request");
        Ok(self.inner.delete(id).await?)
    }

    /// Create screen submit: validate, then create.
    #[instrument(skip(self, form))]
    pub async fn create_product_from_form(&self, form: &ProductForm) -> Result<Product, ProductError> {
        let params = form.validate().map_err(ProductError::ValidationError)?;
        let product = self.create_product(params).await?;
        info!(product_id = %product.id, "Product created from form");
        Ok(product)
    }

    /// Edit screen submit: validate, then overwrite every editable field.
    #[instrument(skip(self, form))]
    pub async fn edit_product(&self, id: ProductId, form: &ProductForm) -> Result<Product, ProductError> {
        let patch = form.validate_patch().map_err(ProductError::ValidationError)?;
        self.update_product(id, patch).await?.ok_or(ProductError::NotFound(id))
    }
}
