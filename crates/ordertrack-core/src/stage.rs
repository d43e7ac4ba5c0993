#![forbid(unsafe_code)]

//! Fulfillment stages and the stepper state derived from a stage label.
//!
//! A stage label has the form `"<N> - <description>"`. Only the leading
//! number matters: it selects one of the [`STEPS`], clamped into
//! `1..=STEP_COUNT`. An absent (or empty) label selects nothing and yields 0.

/// One fixed fulfillment phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub id: u8,
    pub label: &'static str,
}

/// The six phases every order passes through, in order.
pub const STEPS: [Step; 6] = [
    Step {
        id: 1,
        label: "1 - Recebimento do Pedido",
    },
    Step {
        id: 2,
        label: "2 - Recebimento de Materiais",
    },
    Step {
        id: 3,
        label: "3 - Fila de produção",
    },
    Step {
        id: 4,
        label: "4 - Em Produção",
    },
    Step {
        id: 5,
        label: "5 - Faturado",
    },
    Step {
        id: 6,
        label: "6 - Entrega Realizada",
    },
];

/// Number of steps in the stepper.
pub const STEP_COUNT: usize = STEPS.len();

/// Visual state of one stepper position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepState {
    Done,
    Current,
    Pending,
}

/// Map a stage label to a step index.
///
/// Returns 0 for an absent or empty label. Otherwise the leading ASCII digit
/// run is read (none reads as 0, overlong runs saturate) and the result is
/// clamped into `1..=STEP_COUNT`.
#[must_use]
pub fn stage_index(stage: Option<&str>) -> usize {
    let Some(label) = stage.filter(|s| !s.is_empty()) else {
        return 0;
    };
    let n = leading_digits(label).bytes().fold(0usize, |acc, d| {
        acc.saturating_mul(10).saturating_add(usize::from(d - b'0'))
    });
    n.clamp(1, STEP_COUNT)
}

/// Classify every stepper position for the given index.
///
/// Position `p` (1-based) is done when `p < idx`, current when `p == idx`
/// and pending otherwise.
#[must_use]
pub fn step_states(idx: usize) -> [StepState; STEP_COUNT] {
    std::array::from_fn(|i| {
        let position = i + 1;
        match position.cmp(&idx) {
            std::cmp::Ordering::Less => StepState::Done,
            std::cmp::Ordering::Equal => StepState::Current,
            std::cmp::Ordering::Greater => StepState::Pending,
        }
    })
}

/// Percentage of the progress bar for a step index, `0..=100`.
#[must_use]
pub fn progress_percent(idx: usize) -> u8 {
    if idx == 0 {
        return 0;
    }
    let ratio = (idx - 1) as f64 / (STEP_COUNT - 1) as f64;
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Caption of a step label with its `"<N> - "` prefix removed.
///
/// Labels without the prefix are returned unchanged.
#[must_use]
pub fn step_caption(label: &str) -> &str {
    let digits = leading_digits(label);
    if digits.is_empty() {
        return label;
    }
    let mut rest = label[digits.len()..].chars();
    match (rest.next(), rest.next(), rest.next()) {
        (Some(a), Some('-'), Some(b)) if a.is_whitespace() && b.is_whitespace() => rest.as_str(),
        _ => label,
    }
}

fn leading_digits(s: &str) -> &str {
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_empty_is_zero() {
        assert_eq!(stage_index(None), 0);
        assert_eq!(stage_index(Some("")), 0);
    }

    #[test]
    fn leading_number_selects_step() {
        assert_eq!(stage_index(Some("2 - Recebimento de Materiais")), 2);
        assert_eq!(stage_index(Some("6 - Entrega Realizada")), 6);
    }

    #[test]
    fn out_of_range_clamps() {
        assert_eq!(stage_index(Some("0 - nada")), 1);
        assert_eq!(stage_index(Some("9 - além")), 6);
        assert_eq!(stage_index(Some("99999999999999999999999 - overflow")), 6);
    }

    #[test]
    fn no_digits_clamps_to_first() {
        assert_eq!(stage_index(Some("Em Produção")), 1);
        assert_eq!(stage_index(Some(" 3 - leading space")), 1);
    }

    #[test]
    fn states_around_current() {
        use StepState::*;
        assert_eq!(
            step_states(3),
            [Done, Done, Current, Pending, Pending, Pending]
        );
        assert_eq!(step_states(0), [Pending; STEP_COUNT]);
        assert_eq!(step_states(6), [Done, Done, Done, Done, Done, Current]);
    }

    #[test]
    fn percent_per_step() {
        let got: Vec<u8> = (0..=STEP_COUNT).map(progress_percent).collect();
        assert_eq!(got, vec![0, 0, 20, 40, 60, 80, 100]);
    }

    #[test]
    fn caption_strips_prefix() {
        assert_eq!(step_caption("3 - Fila de produção"), "Fila de produção");
        assert_eq!(step_caption("12 - Doze"), "Doze");
        assert_eq!(step_caption("3-Fila"), "3-Fila");
        assert_eq!(step_caption("Sem número"), "Sem número");
    }

    #[test]
    fn step_ids_match_positions() {
        for (i, step) in STEPS.iter().enumerate() {
            assert_eq!(usize::from(step.id), i + 1);
            assert_eq!(stage_index(Some(step.label)), i + 1);
        }
    }
}
