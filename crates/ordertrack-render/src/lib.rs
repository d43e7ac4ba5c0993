#![forbid(unsafe_code)]

//! Terminal rendering for ordertrack.
//!
//! Views draw [`widgets`] into a [`Frame`]'s [`Buffer`]; the [`Presenter`]
//! diffs consecutive buffers and writes only the changed cells through
//! crossterm.
//!
//! [`Frame`]: frame::Frame
//! [`Buffer`]: buffer::Buffer
//! [`Presenter`]: presenter::Presenter

pub mod buffer;
pub mod cell;
pub mod diff;
pub mod frame;
pub mod geometry;
pub mod presenter;
pub mod style;
pub mod text;
pub mod widgets;

pub use buffer::Buffer;
pub use cell::{Cell, PackedRgba, StyleFlags};
pub use frame::Frame;
pub use geometry::Rect;
pub use style::Style;
pub use widgets::Widget;
