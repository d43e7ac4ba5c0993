#![forbid(unsafe_code)]

//! The order record and the book that carries a list of them.
//!
//! Records are plain values: nothing in the dashboard mutates a record after
//! it has been loaded. Every display value is derived at render time (see
//! [`crate::card`]).
//!
//! The serde field names follow the spreadsheet export the dashboard was
//! built around (`industria`, `numeroERP`, ...), so a JSON dump of that sheet
//! loads without a mapping step.

use serde::{Deserialize, Serialize};

/// One customer purchase order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Industry (manufacturer) the order was placed with.
    #[serde(rename = "industria")]
    pub industry: String,
    /// Emission date, ISO-8601.
    #[serde(rename = "dataEmissao")]
    pub issued_on: String,
    /// Units already billed.
    #[serde(rename = "faturado", default)]
    pub billed: u64,
    /// Units still pending.
    #[serde(rename = "pendente", default)]
    pub pending: u64,
    /// Order number in the ERP.
    #[serde(rename = "numeroERP")]
    pub erp_number: String,
    /// Expected delivery date, ISO-8601.
    #[serde(rename = "previsaoEntrega")]
    pub expected_delivery: String,
    /// Stage label, `"<N> - <description>"`.
    #[serde(rename = "etapa", default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    /// Free-text status label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Product description.
    #[serde(rename = "produtos", default, skip_serializing_if = "Option::is_none")]
    pub products: Option<String>,
}

impl OrderRecord {
    /// Display identity of the card: ERP number followed by industry name.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}{}", self.erp_number, self.industry)
    }

    /// Status text, empty when absent.
    #[must_use]
    pub fn status_text(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }

    /// Stage text, empty when absent.
    #[must_use]
    pub fn stage_text(&self) -> &str {
        self.stage.as_deref().unwrap_or("")
    }
}

/// An ordered list of records plus the "last updated" label shown in the footer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderBook {
    pub orders: Vec<OrderRecord>,
    pub updated_at: Option<String>,
}

impl OrderBook {
    #[must_use]
    pub fn new(orders: Vec<OrderRecord>) -> Self {
        Self {
            orders,
            updated_at: None,
        }
    }

    #[must_use]
    pub fn with_updated_at(mut self, label: impl Into<String>) -> Self {
        self.updated_at = Some(label.into());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
