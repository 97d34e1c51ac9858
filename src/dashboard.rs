//! Aggregate counts shown on the home screen.

use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument};

use crate::clients::{InvoiceClient, ProductClient};
use crate::domain::{Invoice, InvoiceStatus};
use crate::invoice_actor::InvoiceError;
use crate::product_actor::{ProductError, ProductQuery};
use crate::query::PageRequest;

/// Invoices fetched per list request while collecting stats.
const INVOICE_BATCH: usize = 1000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_products: usize,
    pub total_invoices: usize,
    /// Billed amount of every Paid invoice.
    pub total_revenue: f64,
    pub pending_invoices: usize,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DashboardError {
    #[error("failed to count products: {0}")]
    Products(#[from] ProductError),
    #[error("failed to load invoices: {0}")]
    Invoices(#[from] InvoiceError),
}

impl DashboardStats {
    pub fn from_invoices(total_products: usize, invoices: &[Invoice]) -> Self {
        let total_revenue = invoices
            .iter()
            .filter(|invoice| invoice.status == InvoiceStatus::Paid)
            .map(Invoice::billed_amount)
            .sum();
        let pending_invoices = invoices
            .iter()
            .filter(|invoice| invoice.status == InvoiceStatus::Pending)
            .count();

        Self {
            total_products,
            total_invoices: invoices.len(),
            total_revenue,
            pending_invoices,
        }
    }

    #[instrument(name = "dashboard", skip_all)]
    pub async fn collect(products: &ProductClient, invoices: &InvoiceClient) -> Result<Self, DashboardError> {
        let total_products = products
            .list_products(PageRequest::new(1, 1), ProductQuery::new())
            .await?
            .total;

        let mut all = Vec::new();
        let mut page = 1;
        loop {
            let batch = invoices.list_invoices(PageRequest::new(page, INVOICE_BATCH)).await?;
            let done = batch.items.is_empty() || all.len() + batch.items.len() >= batch.total;
            all.extend(batch.items);
            if done {
                break;
            }
            page += 1;
        }

        let stats = Self::from_invoices(total_products, &all);
        info!(
            total_products = stats.total_products,
            total_invoices = stats.total_invoices,
            total_revenue = stats.total_revenue,
            pending_invoices = stats.pending_invoices,
            "Dashboard stats collected"
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_stats_over_reference_data() {
        let stats = DashboardStats::from_invoices(10, &fixtures::invoices());
        assert_eq!(stats.total_invoices, 3);
        assert_eq!(stats.pending_invoices, 1);
        // ORD-001 bills its custom price, ORD-003 has none and bills its total.
        assert_eq!(stats.total_revenue, 15_000_000.0 + 1_250_000.0);
    }

    #[test]
    fn test_cancelled_invoices_bring_no_revenue() {
        let mut invoices = fixtures::invoices();
        for invoice in &mut invoices {
            invoice.status = InvoiceStatus::Cancelled;
        }
        let stats = DashboardStats::from_invoices(0, &invoices);
        assert_eq!(stats.total_revenue, 0.0);
        assert_eq!(stats.pending_invoices, 0);
    }
}
