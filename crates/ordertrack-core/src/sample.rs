#![forbid(unsafe_code)]

//! Built-in sample orders.

use crate::order::{OrderBook, OrderRecord};

/// Footer label that goes with the sample data.
pub const SAMPLE_UPDATED_AT: &str = "08/10/2025";

#[allow(clippy::too_many_arguments)]
fn order(
    industry: &str,
    issued_on: &str,
    billed: u64,
    pending: u64,
    erp_number: &str,
    expected_delivery: &str,
    stage: &str,
    status: &str,
    products: &str,
) -> OrderRecord {
    OrderRecord {
        industry: industry.into(),
        issued_on: issued_on.into(),
        billed,
        pending,
        erp_number: erp_number.into(),
        expected_delivery: expected_delivery.into(),
        stage: Some(stage.into()),
        status: Some(status.into()),
        products: Some(products.into()),
    }
}

/// The five sample orders, in display order.
#[must_use]
pub fn sample_orders() -> Vec<OrderRecord> {
    vec![
        order(
            "KDU",
            "2025-09-15",
            0,
            1202,
            "185128",
            "2026-01-30",
            "2 - Recebimento de Materiais",
            "Aguardando Tecidos",
            "Calça Sarja",
        ),
        order(
            "Luiz Eugenio",
            "2025-09-24",
            633,
            698,
            "198745",
            "2025-12-15",
            "3 - Na fila de produção",
            "Aguardando janela de produção",
            "Camisas LD",
        ),
        order(
            "Luiz Eugenio",
            "2025-08-18",
            237,
            263,
            "199548",
            "2025-12-15",
            "3 - Na fila de produção",
            "Aguardando janela de produção",
            "Camisas Lisas",
        ),
        order(
            "Luiz Eugenio",
            "2025-09-26",
            0,
            601,
            "200448",
            "2025-11-30",
            "2 - Recebimento de Materiais",
            "Aguardando Tecidos",
            "Calças Sarja",
        ),
        order(
            "Don Geuroth",
            "2025-09-20",
            0,
            641,
            "3101",
            "2025-10-25",
            "2 - Recebimento de Materiais",
            "Aguardando Etiquetas e Logos",
            "Camisetas e Polos",
        ),
    ]
}

/// The sample orders with their footer label.
#[must_use]
pub fn sample_book() -> OrderBook {
    OrderBook::new(sample_orders()).with_updated_at(SAMPLE_UPDATED_AT)
}
