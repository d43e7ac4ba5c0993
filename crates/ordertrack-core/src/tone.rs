#![forbid(unsafe_code)]

//! Status badge tone.

/// Visual category of a free-text status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    /// Waiting on materials, a production window, etc.
    Waiting,
    Cancelled,
    /// Billed or delivered.
    Delivered,
    #[default]
    Neutral,
}

impl Tone {
    /// Classify a status by case-insensitive keyword containment.
    ///
    /// Keywords are tested in priority order and the first hit wins:
    /// `aguardando`, then `cancel`, then `entrega` / `faturado`.
    #[must_use]
    pub fn classify(status: Option<&str>) -> Self {
        let s = status.unwrap_or("").to_lowercase();
        if s.contains("aguardando") {
            Self::Waiting
        } else if s.contains("cancel") {
            Self::Cancelled
        } else if s.contains("entrega") || s.contains("faturado") {
            Self::Delivered
        } else {
            Self::Neutral
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Cancelled => "cancelled",
            Self::Delivered => "delivered",
            Self::Neutral => "neutral",
        }
    }
}
