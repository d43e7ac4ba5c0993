#![forbid(unsafe_code)]

//! Core model of the ordertrack dashboard.
//!
//! Pure derivations over immutable [`OrderRecord`]s: stage parsing, tone
//! classification, date display, ETA and filtering, plus the
//! [`Dashboard`] state that owns the filter query and the [`OrderSource`]s
//! that supply orders.
//!
//! None of the derivations fail. Malformed input is clamped, defaulted or
//! shown as a placeholder; errors exist only where data is loaded.

pub mod card;
pub mod dashboard;
pub mod dates;
pub mod error;
pub mod filter;
pub mod order;
pub mod sample;
pub mod source;
pub mod stage;
pub mod tone;

pub use card::OrderCard;
pub use dashboard::Dashboard;
pub use dates::{EtaStatus, days_until, format_date};
pub use error::{SourceError, ValidationError};
pub use filter::filter_orders;
pub use order::{OrderBook, OrderRecord};
pub use source::{JsonFileSource, OrderSource, SampleSource, validate_record};
pub use stage::{STEP_COUNT, STEPS, StepState, progress_percent, stage_index, step_states};
pub use tone::Tone;
