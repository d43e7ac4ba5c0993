#![forbid(unsafe_code)]

//! One order card.
//!
//! Layout inside the border (11 rows):
//!
//! ```text
//! 0   industry                                   [ status ]
//! 1   Nº ERP … • Emissão … • products
//! 3   ─( 1 )──( 2 )──( 3 )── … markers
//! 4     captions
//! 6   Etapa atual: …                          Progresso: N%
//! 7   ████████████░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
//! 9   Faturado      Pendente      Previsão de Entrega   ETA
//! 10  N peças       N peças       dd/mm/yyyy            …
//! ```

use ordertrack_core::OrderCard;
use ordertrack_render::buffer::Buffer;
use ordertrack_render::geometry::Rect;
use ordertrack_render::style::Style;
use ordertrack_render::text::display_width;
use ordertrack_render::widgets::{Alignment, Badge, Block, Paragraph, ProgressBar, Widget};

use super::Stepper;
use crate::theme;

/// Rows a card occupies, border included.
pub const CARD_HEIGHT: u16 = 13;

const ROW_HEADER: u16 = 0;
const ROW_SUBTITLE: u16 = 1;
const ROW_STEPPER: u16 = 3;
const ROW_STAGE: u16 = 6;
const ROW_BAR: u16 = 7;
const ROW_TILES: u16 = 9;

pub struct CardView<'a> {
    card: &'a OrderCard,
}

impl<'a> CardView<'a> {
    #[must_use]
    pub fn new(card: &'a OrderCard) -> Self {
        Self { card }
    }

    fn render_header(&self, row: Rect, buf: &mut Buffer) {
        let mut title_width = row.width;
        if !self.card.status.is_empty() {
            let badge = Badge::new(&self.card.status)
                .with_style(theme::badge(self.card.tone))
                .with_alignment(Alignment::Right);
            badge.render(row, buf);
            title_width = row.width.saturating_sub(badge.width().saturating_add(1));
        }
        Paragraph::new(&self.card.industry)
            .style(theme::title())
            .render(Rect::new(row.x, row.y, title_width, 1), buf);
    }

    fn render_stage_line(&self, row: Rect, buf: &mut Buffer) {
        let percent = format!("{}%", self.card.percent);
        let progress_width = display_width("Progresso: ") + display_width(&percent);
        let progress_x = row.right().saturating_sub(progress_width as u16).max(row.x);

        let x = buf.draw_text(progress_x, row.y, "Progresso: ", theme::muted(), row.right());
        buf.draw_text(x, row.y, &percent, theme::strong(), row.right());

        let limit = progress_x.saturating_sub(1);
        let x = buf.draw_text(row.x, row.y, "Etapa atual: ", theme::muted(), limit);
        let room = usize::from(limit.saturating_sub(x));
        let label = ordertrack_render::text::ellipsize(&self.card.stage_label, room);
        buf.draw_text(x, row.y, &label, theme::strong(), limit);
    }

    fn render_tiles(&self, area: Rect, buf: &mut Buffer) {
        let eta = self.card.eta.label();
        let tiles: [(&str, &str, Style); 4] = [
            ("Faturado", &self.card.billed, theme::strong()),
            ("Pendente", &self.card.pending, theme::strong()),
            ("Previsão de Entrega", &self.card.delivery, theme::strong()),
            ("ETA", &eta, theme::eta_value(self.card.eta)),
        ];
        for (column, (label, value, value_style)) in area.columns(4).into_iter().zip(tiles) {
            // Last column keeps its full width; the others leave a gap.
            let tile = Rect::new(column.x, column.y, column.width.saturating_sub(1), column.height);
            let block = Block::new()
                .style(Style::new().bg(theme::TILE_BG))
                .padding(1);
            block.render(tile, buf);
            let inner = block.inner(tile);
            Paragraph::new(label)
                .style(theme::muted())
                .render(inner.row(0), buf);
            Paragraph::new(value)
                .style(value_style)
                .render(inner.row(1), buf);
        }
    }
}

impl Widget for CardView<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .style(Style::new().bg(theme::CARD_BG))
            .border_style(theme::card_border().bg(theme::APP_BG))
            .padding(1);
        block.render(area, buf);
        let inner = block.inner(area);
        if inner.is_empty() {
            return;
        }

        self.render_header(inner.row(ROW_HEADER), buf);
        Paragraph::new(&self.card.subtitle())
            .style(theme::muted())
            .render(inner.row(ROW_SUBTITLE), buf);

        let stepper = Rect::new(inner.x, inner.y + ROW_STEPPER, inner.width, 2).intersection(&inner);
        Stepper::new(self.card.steps).render(stepper, buf);

        self.render_stage_line(inner.row(ROW_STAGE), buf);
        ProgressBar::new()
            .ratio(f64::from(self.card.percent) / 100.0)
            .style(theme::progress_track())
            .gauge_style(theme::progress_fill())
            .render(inner.row(ROW_BAR), buf);

        let tiles = Rect::new(inner.x, inner.y + ROW_TILES, inner.width, 2).intersection(&inner);
        self.render_tiles(tiles, buf);
    }
}
