#![forbid(unsafe_code)]

//! Free-text order filter.
//!
//! A plain inclusion filter: no ranking, no fuzzy matching. The query is
//! trimmed and lowercased, then matched as a substring of the searchable
//! fields joined by spaces. Survivors keep their original order.

use crate::order::OrderRecord;

/// Normalize a raw query. Returns `None` when it matches everything.
#[must_use]
pub fn normalize_query(query: &str) -> Option<String> {
    let needle = query.trim().to_lowercase();
    (!needle.is_empty()).then_some(needle)
}

/// Lowercased text a query is matched against: industry, ERP number, status
/// and stage label joined by single spaces.
#[must_use]
pub fn haystack(order: &OrderRecord) -> String {
    [
        order.industry.as_str(),
        order.erp_number.as_str(),
        order.status_text(),
        order.stage_text(),
    ]
    .join(" ")
    .to_lowercase()
}

/// Whether `order` survives the already-normalized `needle`.
#[must_use]
pub fn matches(order: &OrderRecord, needle: &str) -> bool {
    haystack(order).contains(needle)
}

/// Indices of the orders that match `query`, in original order.
#[must_use]
pub fn filter_indices(orders: &[OrderRecord], query: &str) -> Vec<usize> {
    match normalize_query(query) {
        None => (0..orders.len()).collect(),
        Some(needle) => orders
            .iter()
            .enumerate()
            .filter(|(_, o)| matches(o, &needle))
            .map(|(i, _)| i)
            .collect(),
    }
}

/// The orders that match `query`, in original order.
#[must_use]
pub fn filter_orders<'a>(orders: &'a [OrderRecord], query: &str) -> Vec<&'a OrderRecord> {
    filter_indices(orders, query)
        .into_iter()
        .map(|i| &orders[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_orders;

    #[test]
    fn empty_query_keeps_everything() {
        let orders = sample_orders();
        let all: Vec<&OrderRecord> = orders.iter().collect();
        assert_eq!(filter_orders(&orders, ""), all);
        assert_eq!(filter_orders(&orders, "   \t"), all);
    }

    #[test]
    fn matches_industry_case_insensitively() {
        let orders = sample_orders();
        let hits = filter_orders(&orders, "  luiz EUGENIO ");
        assert_eq!(hits.len(), 3);
        assert!(hits.iter().all(|o| o.industry == "Luiz Eugenio"));
    }

    #[test]
    fn matches_erp_status_and_stage() {
        let orders = sample_orders();
        assert_eq!(filter_indices(&orders, "3101"), vec![4]);
        assert_eq!(filter_indices(&orders, "tecidos"), vec![0, 3]);
        assert_eq!(filter_indices(&orders, "fila de produção"), vec![1, 2]);
    }

    #[test]
    fn products_are_not_searched() {
        let orders = sample_orders();
        assert!(filter_orders(&orders, "camisas").is_empty());
    }

    #[test]
    fn unmatched_query_is_empty() {
        let orders = sample_orders();
        assert!(filter_orders(&orders, "zzz-nothing").is_empty());
    }

    #[test]
    fn query_can_span_fields() {
        let orders = sample_orders();
        assert_eq!(filter_indices(&orders, "kdu 185128"), vec![0]);
    }

    #[test]
    fn haystack_with_missing_fields() {
        let mut order = sample_orders().remove(0);
        order.status = None;
        order.stage = None;
        assert_eq!(haystack(&order), "kdu 185128  ");
    }
}
