#![forbid(unsafe_code)]

//! Widgets specific to the dashboard, composed from the render crate's.

pub mod card;
pub mod stepper;

pub use card::{CARD_HEIGHT, CardView};
pub use stepper::Stepper;
