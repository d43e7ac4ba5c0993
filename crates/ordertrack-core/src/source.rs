#![forbid(unsafe_code)]

//! Order sources.
//!
//! A source produces the whole [`OrderBook`] at once; the dashboard never
//! edits individual records. Two sources ship: the built-in sample and a JSON
//! file using the same keys as the spreadsheet export.
//!
//! # Validation
//!
//! Every loaded record is checked with [`validate_record`]. In lenient mode a
//! bad record is logged and kept (it degrades when rendered). In strict mode
//! the first bad record fails the load.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::dates::IsoDate;
use crate::error::{SourceError, ValidationError};
use crate::order::{OrderBook, OrderRecord};
use crate::sample;
use crate::stage::STEP_COUNT;

/// Anything that can supply the dashboard's orders.
pub trait OrderSource {
    /// Produce the full, ordered book.
    fn load(&self) -> Result<OrderBook, SourceError>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// The built-in sample orders.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource;

impl OrderSource for SampleSource {
    fn load(&self) -> Result<OrderBook, SourceError> {
        Ok(sample::sample_book())
    }

    fn describe(&self) -> String {
        "built-in sample".to_string()
    }
}

/// Orders read from a JSON file.
///
/// The document is either an array of records or an object
/// `{ "updatedAt": "...", "orders": [...] }`.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    strict: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    List(Vec<OrderRecord>),
    Book {
        #[serde(rename = "updatedAt", default)]
        updated_at: Option<String>,
        orders: Vec<OrderRecord>,
    },
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            strict: false,
        }
    }

    /// Reject invalid records instead of logging them.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a document already read into memory.
    pub fn parse(&self, text: &str) -> Result<OrderBook, SourceError> {
        let document: Document =
            serde_json::from_str(text).map_err(|source| SourceError::Parse {
                path: self.path.clone(),
                source,
            })?;
        let book = match document {
            Document::List(orders) => OrderBook::new(orders),
            Document::Book { updated_at, orders } => OrderBook {
                orders,
                updated_at,
            },
        };
        check_book(&book, self.strict)?;
        Ok(book)
    }
}

impl OrderSource for JsonFileSource {
    fn load(&self) -> Result<OrderBook, SourceError> {
        let text = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let book = self.parse(&text)?;
        info!(
            path = %self.path.display(),
            orders = book.len(),
            strict = self.strict,
            "loaded order file"
        );
        Ok(book)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Check one record for the problems that make it render badly.
pub fn validate_record(order: &OrderRecord) -> Result<(), ValidationError> {
    if order.industry.trim().is_empty() {
        return Err(ValidationError::EmptyField("industria"));
    }
    if order.erp_number.trim().is_empty() {
        return Err(ValidationError::EmptyField("numeroERP"));
    }
    for (field, value) in [
        ("dataEmissao", &order.issued_on),
        ("previsaoEntrega", &order.expected_delivery),
    ] {
        if IsoDate::parse(value).is_none() {
            return Err(ValidationError::BadDate {
                field,
                value: value.clone(),
            });
        }
    }
    if let Some(stage) = &order.stage {
        let digits: String = stage.chars().take_while(char::is_ascii_digit).collect();
        let in_range = digits
            .parse::<usize>()
            .is_ok_and(|n| (1..=STEP_COUNT).contains(&n));
        if !in_range {
            return Err(ValidationError::BadStage(stage.clone()));
        }
    }
    Ok(())
}

fn check_book(book: &OrderBook, strict: bool) -> Result<(), SourceError> {
    let mut seen = HashSet::new();
    for order in &book.orders {
        let key = order.key();
        if let Err(problem) = validate_record(order) {
            if strict {
                return Err(SourceError::Invalid { key, problem });
            }
            warn!(order = %key, %problem, "keeping invalid order");
        }
        if !seen.insert(key.clone()) {
            warn!(order = %key, "duplicate order key");
        }
    }
    Ok(())
}
