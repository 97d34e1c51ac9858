use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Invoice, InvoiceCreate, InvoiceId, InvoicePatch, InvoiceStatus};
use crate::forms::{InvoiceDraft, OrderNumber};
use crate::invoice_actor::InvoiceError;
use crate::query::{Page, PageRequest};

/// Client for interacting with the Invoice actor. There is deliberately no
/// delete: invoices are kept once issued.
#[derive(Clone)]
pub struct InvoiceClient {
    inner: ResourceClient<Invoice>,
}

impl_basic_client!(InvoiceClient, Invoice, InvoiceError, invoice);

impl InvoiceClient {
    #[instrument(skip(self))]
    pub async fn list_invoices(&self, page: PageRequest) -> Result<Page<Invoice>, InvoiceError> {
        debug!("Sending request");
        Ok(self.inner.list((), page).await?)
    }

    #[instrument(skip(self, params), fields(order_number = %params.order_number, items = params.items.len()))]
    pub async fn create_invoice(&self, params: InvoiceCreate) -> Result<Invoice, InvoiceError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_invoice_status(&self, id: InvoiceId, status: InvoiceStatus) -> Result<Option<Invoice>, InvoiceError> {
        self.update_invoice(id, InvoicePatch::status(status)).await
    }

    /// Status select on the detail screen: the choice arrives by name.
    #[instrument(skip(self))]
    pub async fn change_status(&self, id: InvoiceId, status: &str) -> Result<Option<Invoice>, InvoiceError> {
        let status: InvoiceStatus = status.parse()?;
        self.update_invoice_status(id, status).await
    }

    /// Create screen submit: validate the draft against `today`, assign a
    /// random order number, then create.
    #[instrument(skip(self, draft), fields(lines = draft.lines().len()))]
    pub async fn submit_draft(&self, draft: &InvoiceDraft, today: NaiveDate) -> Result<Invoice, InvoiceError> {
        let params = draft
            .validate(OrderNumber::random(), today)
            .map_err(InvoiceError::ValidationError)?;
        let invoice = self.create_invoice(params).await?;
        info!(invoice_id = %invoice.id, order_number = %invoice.order_number, "Invoice created from draft");
        Ok(invoice)
    }
}
