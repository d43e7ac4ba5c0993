#![forbid(unsafe_code)]

//! Display values of one order card.
//!
//! [`OrderCard::derive`] is recomputed for every frame; it holds no state of
//! its own beyond what it copies out of the record.

use chrono::{DateTime, Utc};

use crate::dates::{EtaStatus, days_until, format_date};
use crate::order::OrderRecord;
use crate::stage::{STEP_COUNT, StepState, progress_percent, stage_index, step_states};
use crate::tone::Tone;

/// Everything the card view draws, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCard {
    pub key: String,
    pub industry: String,
    pub erp_number: String,
    pub issued_on: String,
    pub products: Option<String>,
    pub status: String,
    pub tone: Tone,
    pub stage_index: usize,
    pub steps: [StepState; STEP_COUNT],
    pub stage_label: String,
    pub percent: u8,
    pub billed: String,
    pub pending: String,
    pub delivery: String,
    pub eta: EtaStatus,
}

impl OrderCard {
    /// Derive the card for `order` as seen at `now`.
    #[must_use]
    pub fn derive(order: &OrderRecord, now: DateTime<Utc>) -> Self {
        let idx = stage_index(order.stage.as_deref());
        Self {
            key: order.key(),
            industry: order.industry.clone(),
            erp_number: order.erp_number.clone(),
            issued_on: format_date(&order.issued_on),
            products: order.products.clone().filter(|p| !p.is_empty()),
            status: order.status_text().to_string(),
            tone: Tone::classify(order.status.as_deref()),
            stage_index: idx,
            steps: step_states(idx),
            stage_label: order.stage_text().to_string(),
            percent: progress_percent(idx),
            billed: pieces(order.billed),
            pending: pieces(order.pending),
            delivery: format_date(&order.expected_delivery),
            eta: EtaStatus::classify(days_until(&order.expected_delivery, now)),
        }
    }

    /// The subtitle line: `Nº ERP <n> • Emissão <date>[ • <products>]`.
    #[must_use]
    pub fn subtitle(&self) -> String {
        let mut line = format!("Nº ERP {} • Emissão {}", self.erp_number, self.issued_on);
        if let Some(products) = &self.products {
            line.push_str(" • ");
            line.push_str(products);
        }
        line
    }
}

fn pieces(n: u64) -> String {
    format!("{n} peças")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_orders;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 8, 15, 0, 0).unwrap()
    }

    #[test]
    fn queued_order_card() {
        let order = &sample_orders()[1];
        let card = OrderCard::derive(order, now());
        use StepState::*;
        assert_eq!(card.stage_index, 3);
        assert_eq!(
            card.steps,
            [Done, Done, Current, Pending, Pending, Pending]
        );
        assert_eq!(card.percent, 40);
        assert_eq!(card.tone, Tone::Waiting);
        assert_eq!(card.billed, "633 peças");
        assert_eq!(card.pending, "698 peças");
        assert_eq!(card.delivery, "15/12/2025");
        assert_eq!(card.stage_label, "3 - Na fila de produção");
        assert_eq!(card.key, "198745Luiz Eugenio");
    }

    #[test]
    fn subtitle_includes_products() {
        let card = OrderCard::derive(&sample_orders()[0], now());
        assert_eq!(
            card.subtitle(),
            "Nº ERP 185128 • Emissão 15/09/2025 • Calça Sarja"
        );
    }

    #[test]
    fn subtitle_without_products() {
        let mut order = sample_orders().remove(0);
        order.products = None;
        let card = OrderCard::derive(&order, now());
        assert_eq!(card.subtitle(), "Nº ERP 185128 • Emissão 15/09/2025");
    }

    #[test]
    fn eta_from_reference() {
        let card = OrderCard::derive(&sample_orders()[4], now());
        // 2025-10-25T00:00Z is 16 days and 9 hours after the reference.
        assert_eq!(card.eta, EtaStatus::Later(17));

        let later = Utc.with_ymd_and_hms(2025, 10, 20, 0, 0, 0).unwrap();
        assert_eq!(
            OrderCard::derive(&sample_orders()[4], later).eta,
            EtaStatus::Soon(5)
        );
    }

    #[test]
    fn overdue_delivery_is_due() {
        let mut order = sample_orders().remove(0);
        order.expected_delivery = "2025-10-07".into();
        let card = OrderCard::derive(&order, now());
        assert_eq!(card.eta, EtaStatus::Due);
        assert_eq!(card.eta.label(), "Entregue / vencido");
    }

    #[test]
    fn degraded_record() {
        let mut order = sample_orders().remove(0);
        order.stage = None;
        order.status = None;
        order.expected_delivery = "??".into();
        let card = OrderCard::derive(&order, now());
        assert_eq!(card.stage_index, 0);
        assert_eq!(card.percent, 0);
        assert_eq!(card.steps, [StepState::Pending; STEP_COUNT]);
        assert_eq!(card.tone, Tone::Neutral);
        assert_eq!(card.eta, EtaStatus::Unknown);
        assert_eq!(card.delivery, crate::dates::INVALID_DATE_LABEL);
    }
}
