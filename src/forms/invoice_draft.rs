use std::fmt;

use chrono::NaiveDate;
use rand::Rng;

use crate::domain::{InvoiceCreate, InvoiceStatus, Product, ProductId};
use super::{parse_number, ValidationErrors};

/// Caller-generated order reference, `ORD-` plus four digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderNumber(String);

impl OrderNumber {
    pub fn random() -> Self {
        Self::from_number(rand::thread_rng().gen_range(0..10_000))
    }

    pub fn from_number(number: u32) -> Self {
        Self(format!("ORD-{number:04}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<OrderNumber> for String {
    fn from(number: OrderNumber) -> Self {
        number.0
    }
}

/// A selected product and how many of it are being billed.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftLine {
    pub product: Product,
    pub quantity: u32,
}

impl DraftLine {
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// State of the invoice create screen.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    pub customer_name: String,
    pub date: Option<NaiveDate>,
    pub custom_price: String,
    pub status: InvoiceStatus,
    lines: Vec<DraftLine>,
}

impl InvoiceDraft {
    /// Empty draft dated `today`, status Pending.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            customer_name: String::new(),
            date: Some(today),
            custom_price: String::new(),
            status: InvoiceStatus::default(),
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[DraftLine] {
        &self.lines
    }

    /// Adds one unit of `product`, as a new line or on top of its existing line.
    pub fn add_product(&mut self, product: &Product) {
        match self.lines.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(DraftLine {
                product: product.clone(),
                quantity: 1,
            }),
        }
        self.prefill_custom_price();
    }

    pub fn remove_product(&mut self, id: ProductId) {
        self.lines.retain(|line| line.product.id != id);
        self.prefill_custom_price();
    }

    /// Quantities below one are ignored.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) {
        if quantity < 1 {
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|line| line.product.id == id) {
            line.quantity = quantity;
        }
        self.prefill_custom_price();
    }

    /// Σ price × quantity over the selected lines.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(DraftLine::subtotal).sum()
    }

    // The custom price follows the total until the user types one.
    fn prefill_custom_price(&mut self) {
        let total = self.total();
        if total > 0.0 && self.custom_price.is_empty() {
            self.custom_price = total.to_string();
        }
    }

    /// Checks the draft against `today` and builds the create payload.
    ///
    /// Each line contributes one product snapshot to `items` with its
    /// quantity dropped; only `total_amount` reflects the quantities.
    pub fn validate(&self, order_number: OrderNumber, today: NaiveDate) -> Result<InvoiceCreate, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.customer_name.trim().is_empty() {
            errors.add("customerName", "Customer name is required");
        }

        match self.date {
            None => errors.add("date", "Date is required"),
            Some(date) if date > today => errors.add("date", "Invoice date cannot be in the future"),
            Some(_) => {}
        }

        if self.lines.is_empty() {
            errors.add("products", "At least one product must be selected");
        }

        let custom_price = if self.custom_price.trim().is_empty() {
            errors.add("customPrice", "Custom price is required");
            None
        } else {
            let price = parse_number(&self.custom_price).filter(|n| *n >= 0.0);
            if price.is_none() {
                errors.add("customPrice", "Custom price must be a positive number");
            }
            price
        };

        errors.into_result(|| InvoiceCreate {
            order_number: order_number.into(),
            customer_name: self.customer_name.clone(),
            date: self.date.unwrap_or(today),
            items: self.lines.iter().map(|line| line.product.clone()).collect(),
            total_amount: self.total(),
            custom_price,
            status: self.status,
        })
    }
}
