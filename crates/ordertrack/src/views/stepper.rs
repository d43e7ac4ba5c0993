#![forbid(unsafe_code)]

//! Six-step progress indicator.
//!
//! Two rows: numbered markers sitting on a connector line, then the step
//! captions. Each step gets an equal column.

use ordertrack_core::{STEP_COUNT, STEPS, StepState};
use ordertrack_core::stage::step_caption;
use ordertrack_render::buffer::Buffer;
use ordertrack_render::geometry::Rect;
use ordertrack_render::widgets::{Alignment, Badge, Paragraph, Widget};

use crate::theme;

const CONNECTOR: char = '─';

#[derive(Debug, Clone, Copy)]
pub struct Stepper {
    steps: [StepState; STEP_COUNT],
}

impl Stepper {
    #[must_use]
    pub fn new(steps: [StepState; STEP_COUNT]) -> Self {
        Self { steps }
    }
}

impl Widget for Stepper {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let markers = area.row(0);
        let captions = area.row(1);

        for x in markers.x..markers.right() {
            if let Some(cell) = buf.get_mut(x, markers.y) {
                cell.content = CONNECTOR;
                theme::step_connector().apply(cell);
            }
        }

        for ((column, step), state) in markers.columns(STEP_COUNT as u16).into_iter().zip(STEPS).zip(self.steps) {
            let number = step.id.to_string();
            Badge::new(&number)
                .with_style(theme::step_marker(state))
                .with_alignment(Alignment::Center)
                .render(column, buf);

            if !captions.is_empty() {
                // One column of slack keeps neighbouring captions apart.
                let slot = Rect::new(column.x, captions.y, column.width.saturating_sub(1), 1);
                Paragraph::new(step_caption(step.label))
                    .style(theme::subtitle())
                    .alignment(Alignment::Center)
                    .render(slot, buf);
            }
        }
    }
}
