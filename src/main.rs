use backoffice::app_system::{setup_tracing, BackOffice, StoreConfig};
use backoffice::forms::InvoiceDraft;
use backoffice::product_actor::{ProductQuery, ProductSortField};
use backoffice::query::{PageRequest, SortDirection};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = StoreConfig::from_env()?;
    info!(?config, "Starting back office demo");

    let system = BackOffice::start(config);

    let span = tracing::info_span!("product_search");
    let electronics = async {
        info!("Listing electronics, most expensive first");
        let query = ProductQuery::new()
            .search("electronics")
            .sort_by(ProductSortField::Price, SortDirection::Desc);
        system.products.list_products(PageRequest::default(), query).await
    }
    .instrument(span)
    .await?;

    let request = PageRequest::default();
    info!(
        shown = electronics.items.len(),
        total = electronics.total,
        pages = request.page_count(electronics.total),
        "Electronics listed"
    );

    let today = chrono::Local::now().date_naive();
    let mut draft = InvoiceDraft::new(today);
    draft.customer_name = "Alice".to_string();
    for product in electronics.items.iter().take(2) {
        draft.add_product(product);
    }

    let span = tracing::info_span!("invoice_creation");
    let invoice = async {
        info!(total = draft.total(), "Submitting invoice draft");
        system.invoices.submit_draft(&draft, today).await
    }
    .instrument(span)
    .await?;

    match system.invoices.change_status(invoice.id, "Paid").await? {
        Some(paid) => info!(invoice_id = %paid.id, status = %paid.status, "Invoice marked paid"),
        None => warn!(invoice_id = %invoice.id, "Invoice vanished before it could be marked paid"),
    }

    let stats = system.dashboard().await?;
    info!(
        total_products = stats.total_products,
        total_invoices = stats.total_invoices,
        total_revenue = stats.total_revenue,
        pending_invoices = stats.pending_invoices,
        "Dashboard"
    );

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
