use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Product;

/// Store-assigned invoice identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(pub u64);

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payment state of an invoice. Any state may move to any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceStatus {
    #[default]
    Pending,
    Paid,
    Cancelled,
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Cancelled => "Cancelled",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown invoice status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for InvoiceStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(InvoiceStatus::Pending),
            "Paid" => Ok(InvoiceStatus::Paid),
            "Cancelled" => Ok(InvoiceStatus::Cancelled),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// A billed order.
///
/// `items` holds copies of the products as they were when the invoice was
/// created, one per selected line. Quantities are not kept on the items;
/// `total_amount` and `custom_price` are the only quantity-weighted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    pub order_number: String,
    pub customer_name: String,
    pub date: NaiveDate,
    pub items: Vec<Product>,
    pub total_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_price: Option<f64>,
    pub status: InvoiceStatus,
}

impl Invoice {
    /// Amount used for reporting: the custom price when one is set (and
    /// non-zero), the computed total otherwise.
    pub fn billed_amount(&self) -> f64 {
        self.custom_price
            .filter(|price| *price != 0.0)
            .unwrap_or(self.total_amount)
    }
}

/// Payload for creating a new invoice. `total_amount` is computed by the
/// caller and stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceCreate {
    pub order_number: String,
    pub customer_name: String,
    pub date: NaiveDate,
    pub items: Vec<Product>,
    pub total_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_price: Option<f64>,
    #[serde(default)]
    pub status: InvoiceStatus,
}

/// Partial update for an invoice. `custom_price: Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoicePatch {
    pub order_number: Option<String>,
    pub customer_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub items: Option<Vec<Product>>,
    pub total_amount: Option<f64>,
    pub custom_price: Option<Option<f64>>,
    pub status: Option<InvoiceStatus>,
}

impl InvoicePatch {
    pub fn status(status: InvoiceStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_names_round_trip() {
        for status in [InvoiceStatus::Pending, InvoiceStatus::Paid, InvoiceStatus::Cancelled] {
            assert_eq!(status.to_string().parse::<InvoiceStatus>(), Ok(status));
        }
        assert_eq!("paid".parse::<InvoiceStatus>(), Err(UnknownStatus("paid".into())));
    }
}
