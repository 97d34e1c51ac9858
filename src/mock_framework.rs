//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_list`] to assert what
//! the client sent and to script the actor's reply, failures included.

use crate::actor_framework::{Entity, ResourceClient, ResourceRequest, Response};
use crate::query::{Page, PageRequest};
use tokio::sync::mpsc;

/// Creates a mock client and a receiver for asserting requests.
///
/// No `ResourceActor` runs behind the client: the test plays the actor by
/// reading requests from `receiver` and answering on their reply channels.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Query, PageRequest, Response<Page<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { query, page, respond_to }) => Some((query, page, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::CreateParams, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, T::Patch, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { id, patch, respond_to }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::FrameworkError;
    use crate::clients::{InvoiceClient, ProductClient};
    use crate::dashboard::{DashboardError, DashboardStats};
    use crate::domain::{Invoice, InvoiceId, InvoiceStatus, Product, ProductId, UnknownStatus};
    use crate::forms::{InvoiceDraft, ProductForm};
    use crate::invoice_actor::InvoiceError;
    use crate::product_actor::{ProductError, ProductQuery};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
    }

    #[tokio::test]
    async fn test_product_form_reaches_actor_only_when_valid() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(inner);

        let invalid = ProductForm { name: "Lamp".into(), ..ProductForm::default() };
        let result = client.create_product_from_form(&invalid).await;
        assert!(matches!(result, Err(ProductError::ValidationError(_))));
        assert!(receiver.try_recv().is_err());

        let form = ProductForm {
            name: "Lamp".into(),
            category: "Home".into(),
            stock: "3".into(),
            price: "45000".into(),
            description: "Desk lamp".into(),
        };
        let create_task = tokio::spawn(async move { client.create_product_from_form(&form).await });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Product Create");
        assert_eq!(params.stock, 3);
        assert_eq!(params.price, 45_000.0);
        let stored = Product::new(11, "Lamp", "Home", 3, 45_000.0, "Desk lamp");
        responder.send(Ok(stored.clone())).unwrap();

        assert_eq!(create_task.await.unwrap(), Ok(stored));
    }

    #[tokio::test]
    async fn test_edit_of_missing_product_is_not_found() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(inner);

        let form = ProductForm::from_product(&Product::new(4, "Jeans", "Clothing", 30, 300_000.0, "Denim jeans"));
        let edit_task = tokio::spawn(async move { client.edit_product(ProductId(4), &form).await });

        let (id, patch, responder) = expect_update(&mut receiver).await.expect("Expected Product Update");
        assert_eq!(id, ProductId(4));
        assert_eq!(patch.name.as_deref(), Some("Jeans"));
        responder.send(Ok(None)).unwrap();

        assert_eq!(edit_task.await.unwrap(), Err(ProductError::NotFound(ProductId(4))));
    }

    #[tokio::test]
    async fn test_draft_submission_sends_one_snapshot_per_line() {
        let (inner, mut receiver) = create_mock_client::<Invoice>(10);
        let client = InvoiceClient::new(inner);

        let mut draft = InvoiceDraft::new(today());
        draft.customer_name = "Jane Smith".into();
        let speaker = Product::new(12, "Speaker", "Electronics", 5, 100.0, "Bluetooth speaker");
        draft.add_product(&speaker);
        draft.set_quantity(speaker.id, 2);

        let submit_task = tokio::spawn(async move { client.submit_draft(&draft, today()).await });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Invoice Create");
        assert_eq!(params.items, vec![speaker]);
        assert_eq!(params.total_amount, 200.0);
        assert_eq!(params.status, InvoiceStatus::Pending);
        assert!(params.order_number.starts_with("ORD-"));
        responder.send(Err(FrameworkError::ActorDropped)).unwrap();

        assert_eq!(
            submit_task.await.unwrap(),
            Err(InvoiceError::ActorCommunicationError(FrameworkError::ActorDropped))
        );
    }

    #[tokio::test]
    async fn test_status_change_by_name() {
        let (inner, mut receiver) = create_mock_client::<Invoice>(10);
        let client = InvoiceClient::new(inner);

        let result = client.change_status(InvoiceId(1), "Refunded").await;
        assert_eq!(result, Err(InvoiceError::StatusError(UnknownStatus("Refunded".into()))));
        assert!(receiver.try_recv().is_err());

        let change_task = tokio::spawn(async move { client.change_status(InvoiceId(1), "Cancelled").await });

        let (id, patch, responder) = expect_update(&mut receiver).await.expect("Expected Invoice Update");
        assert_eq!(id, InvoiceId(1));
        assert_eq!(patch, crate::domain::InvoicePatch::status(InvoiceStatus::Cancelled));
        responder.send(Ok(None)).unwrap();

        assert_eq!(change_task.await.unwrap(), Ok(None));
    }

    #[tokio::test]
    async fn test_dashboard_reports_invoice_failure() {
        let (product_inner, mut product_rx) = create_mock_client::<Product>(10);
        let (invoice_inner, mut invoice_rx) = create_mock_client::<Invoice>(10);
        let products = ProductClient::new(product_inner);
        let invoices = InvoiceClient::new(invoice_inner);

        let stats_task = tokio::spawn(async move { DashboardStats::collect(&products, &invoices).await });

        let (query, page, responder) = expect_list(&mut product_rx).await.expect("Expected Product List");
        assert_eq!(query, ProductQuery::new());
        assert_eq!(page.page, 1);
        responder.send(Ok(Page { items: Vec::new(), total: 10 })).unwrap();

        let (_, _, responder) = expect_list(&mut invoice_rx).await.expect("Expected Invoice List");
        responder.send(Err(FrameworkError::ActorDropped)).unwrap();

        assert_eq!(
            stats_task.await.unwrap(),
            Err(DashboardError::Invoices(InvoiceError::ActorCommunicationError(FrameworkError::ActorDropped)))
        );
    }

    #[tokio::test]
    async fn test_dashboard_pages_through_all_invoices() {
        let (product_inner, mut product_rx) = create_mock_client::<Product>(10);
        let (invoice_inner, mut invoice_rx) = create_mock_client::<Invoice>(10);
        let products = ProductClient::new(product_inner);
        let invoices = InvoiceClient::new(invoice_inner);

        let stats_task = tokio::spawn(async move { DashboardStats::collect(&products, &invoices).await });

        let (_, _, responder) = expect_list(&mut product_rx).await.expect("Expected Product List");
        responder.send(Ok(Page { items: Vec::new(), total: 0 })).unwrap();

        let ledger = crate::fixtures::invoices();
        let (_, page, responder) = expect_list(&mut invoice_rx).await.expect("Expected first Invoice List");
        assert_eq!(page.page, 1);
        responder.send(Ok(Page { items: ledger[..2].to_vec(), total: 3 })).unwrap();

        let (_, page, responder) = expect_list(&mut invoice_rx).await.expect("Expected second Invoice List");
        assert_eq!(page.page, 2);
        responder.send(Ok(Page { items: ledger[2..].to_vec(), total: 3 })).unwrap();

        let stats = stats_task.await.unwrap().unwrap();
        assert_eq!(stats.total_invoices, 3);
        assert_eq!(stats.pending_invoices, 1);
    }
}
