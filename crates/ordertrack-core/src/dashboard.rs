#![forbid(unsafe_code)]

//! Dashboard state: the loaded book, the filter query and the filtered view.
//!
//! The query is the only mutable input. Every edit goes through a method
//! that recomputes the visible list before returning, so readers never see a
//! view that is stale relative to the query.

use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::filter::filter_indices;
use crate::order::{OrderBook, OrderRecord};

#[derive(Debug, Clone)]
pub struct Dashboard {
    book: OrderBook,
    query: String,
    visible: Vec<usize>,
}

impl Dashboard {
    #[must_use]
    pub fn new(book: OrderBook) -> Self {
        let visible = (0..book.len()).collect();
        Self {
            book,
            query: String::new(),
            visible,
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    #[must_use]
    pub fn updated_at(&self) -> Option<&str> {
        self.book.updated_at.as_deref()
    }

    /// Replace the query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.recompute();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.recompute();
    }

    pub fn push_str(&mut self, s: &str) {
        self.query.push_str(s);
        self.recompute();
    }

    /// Remove the last grapheme, so a letter typed with a combining accent
    /// goes away in one step. Returns `false` if the query was empty.
    pub fn pop_char(&mut self) -> bool {
        let Some((start, _)) = self.query.grapheme_indices(true).next_back() else {
            return false;
        };
        self.query.truncate(start);
        self.recompute();
        true
    }

    /// Clear the query. Returns `false` if it was already empty.
    pub fn clear_query(&mut self) -> bool {
        if self.query.is_empty() {
            return false;
        }
        self.query.clear();
        self.recompute();
        true
    }

    /// Orders matching the current query, in book order.
    pub fn visible(&self) -> impl ExactSizeIterator<Item = &OrderRecord> + '_ {
        self.visible.iter().map(|&i| &self.book.orders[i])
    }

    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_filtered_empty(&self) -> bool {
        self.visible.is_empty()
    }

    fn recompute(&mut self) {
        self.visible = filter_indices(&self.book.orders, &self.query);
        debug!(
            query = %self.query,
            visible = self.visible.len(),
            total = self.book.len(),
            "filter recomputed"
        );
    }
}
