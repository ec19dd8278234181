//! Receipt models as received over the wire.
//!
//! Every field is kept as the raw text the client sent. Parsing into dates,
//! times and amounts happens in the scoring engine, which degrades malformed
//! values to zero points instead of rejecting the receipt.

use crate::error::{ProcessorError, Result};
use serde::{Deserialize, Serialize};

/// A retail receipt submitted for scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Retailer or store name.
    pub retailer: String,

    /// Purchase date, `YYYY-MM-DD`.
    pub purchase_date: String,

    /// Purchase time, 24-hour `HH:MM`.
    pub purchase_time: String,

    /// Purchased items in receipt order.
    pub items: Vec<LineItem>,

    /// Total amount paid.
    pub total: String,
}

/// A single purchased item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Short product description.
    pub short_description: String,

    /// Price paid for the item.
    pub price: String,
}

impl LineItem {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        LineItem {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

impl Receipt {
    /// Checks that every required text field is present and non-empty.
    ///
    /// Only presence is checked here. Item fields are not inspected: an empty
    /// description still scores, and a bad price only zeroes that item.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("retailer", &self.retailer),
            ("purchaseDate", &self.purchase_date),
            ("purchaseTime", &self.purchase_time),
            ("total", &self.total),
        ];

        for (name, value) in required {
            if value.is_empty() {
                return Err(ProcessorError::InvalidReceipt(format!(
                    "field '{}' is required",
                    name
                )));
            }
        }

        Ok(())
    }
}
