use crate::actor_framework::{Entity, SequentialId};
use crate::domain::{Invoice, InvoiceCreate, InvoiceId, InvoicePatch};

impl SequentialId for InvoiceId {
    fn first() -> Self {
        InvoiceId(1)
    }

    fn next(self) -> Self {
        InvoiceId(self.0 + 1)
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;
    type CreateParams = InvoiceCreate;
    type Patch = InvoicePatch;
    // Invoices are listed in stored order only.
    type Query = ();

    fn id(&self) -> InvoiceId {
        self.id
    }

    /// Stores the params as given. Nothing is recomputed: the items are the
    /// caller's snapshots and `total_amount` is the caller's sum.
    fn from_create_params(id: InvoiceId, params: InvoiceCreate) -> Self {
        Self {
            id,
            order_number: params.order_number,
            customer_name: params.customer_name,
            date: params.date,
            items: params.items,
            total_amount: params.total_amount,
            custom_price: params.custom_price,
            status: params.status,
        }
    }

    fn apply_patch(&mut self, patch: InvoicePatch) {
        if let Some(order_number) = patch.order_number {
            self.order_number = order_number;
        }
        if let Some(customer_name) = patch.customer_name {
            self.customer_name = customer_name;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(items) = patch.items {
            self.items = items;
        }
        if let Some(total_amount) = patch.total_amount {
            self.total_amount = total_amount;
        }
        if let Some(custom_price) = patch.custom_price {
            self.custom_price = custom_price;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InvoiceStatus, Product};
    use chrono::NaiveDate;

    fn invoice() -> Invoice {
        Invoice {
            id: InvoiceId(1),
            order_number: "ORD-001".into(),
            customer_name: "John Doe".into(),
            date: NaiveDate::from_ymd_opt(2023, 5, 15).unwrap(),
            items: vec![Product::new(1, "Laptop", "Electronics", 10, 100.0, "x")],
            total_amount: 100.0,
            custom_price: Some(90.0),
            status: InvoiceStatus::Pending,
        }
    }

    #[test]
    fn test_status_patch_changes_only_status() {
        let before = invoice();
        let mut after = before.clone();
        after.apply_patch(InvoicePatch::status(InvoiceStatus::Paid));
        assert_eq!(after.status, InvoiceStatus::Paid);
        after.status = before.status;
        assert_eq!(after, before);
    }

    #[test]
    fn test_every_status_transition_is_allowed() {
        let mut invoice = invoice();
        for status in [InvoiceStatus::Paid, InvoiceStatus::Pending, InvoiceStatus::Cancelled, InvoiceStatus::Paid] {
            invoice.apply_patch(InvoicePatch::status(status));
            assert_eq!(invoice.status, status);
        }
    }

    #[test]
    fn test_custom_price_can_be_cleared() {
        let mut invoice = invoice();
        invoice.apply_patch(InvoicePatch { custom_price: Some(None), ..Default::default() });
        assert_eq!(invoice.custom_price, None);
        assert_eq!(invoice.billed_amount(), 100.0);
    }
}
