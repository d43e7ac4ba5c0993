#![forbid(unsafe_code)]

//! The dashboard model: header, search field, the scrollable card list and
//! the footer.

use chrono::{DateTime, Utc};
use ordertrack_core::{Dashboard, OrderCard};
use ordertrack_render::buffer::Buffer;
use ordertrack_render::cell::Cell;
use ordertrack_render::frame::Frame;
use ordertrack_render::geometry::Rect;
use ordertrack_render::style::Style;
use ordertrack_render::widgets::{Alignment, Block, Paragraph, TextInput, Widget};

use crate::event::{Event, KeyCode, KeyEventKind};
use crate::program::{Cmd, Model};
use crate::theme::{self, palette};
use crate::views::{CARD_HEIGHT, CardView};

pub const TITLE: &str = "Rastreamento de Pedidos";
pub const SUBTITLE: &str =
    "Visual moderno estilo e-commerce para seus clientes acompanharem o andamento.";
pub const SEARCH_PLACEHOLDER: &str = "Buscar por indústria, nº ERP, status...";
pub const EMPTY_STATE: &str = "Nenhum pedido encontrado com esse filtro.";

const MAX_CONTENT_WIDTH: u16 = 120;
const SEARCH_WIDTH: u16 = 56;
/// Blank rows between cards.
const CARD_GAP: u16 = 1;
const CARD_PITCH: u16 = CARD_HEIGHT + CARD_GAP;

/// The instant ETAs are measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn now(self) -> DateTime<Utc> {
        match self {
            Self::System => Utc::now(),
            Self::Fixed(t) => t,
        }
    }
}

/// Scroll requests for the card list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Insert(char),
    Paste(String),
    Backspace,
    /// Clear the query, or quit when it is already empty.
    Escape,
    Scroll(Scroll),
    Resize { width: u16, height: u16 },
    Quit,
    Ignore,
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Release => Self::Ignore,
            Event::Key(key) if key.ctrl() => match key.code {
                KeyCode::Char('c' | 'C') => Self::Quit,
                _ => Self::Ignore,
            },
            Event::Key(key) => match key.code {
                KeyCode::Char(c) if !key.alt() && !c.is_control() => Self::Insert(c),
                KeyCode::Backspace => Self::Backspace,
                KeyCode::Escape => Self::Escape,
                KeyCode::Up => Self::Scroll(Scroll::LineUp),
                KeyCode::Down => Self::Scroll(Scroll::LineDown),
                KeyCode::PageUp => Self::Scroll(Scroll::PageUp),
                KeyCode::PageDown => Self::Scroll(Scroll::PageDown),
                KeyCode::Home => Self::Scroll(Scroll::Top),
                KeyCode::End => Self::Scroll(Scroll::Bottom),
                _ => Self::Ignore,
            },
            Event::Paste(text) => Self::Paste(text),
            Event::Resize { width, height } => Self::Resize { width, height },
            Event::Focus(_) => Self::Ignore,
        }
    }
}

/// Screen regions for a given frame size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    title: Rect,
    subtitle: Rect,
    search: Rect,
    list: Rect,
    footer: Rect,
}

impl Layout {
    fn new(area: Rect) -> Self {
        let mut content = area.inset(2, 1);
        if content.width > MAX_CONTENT_WIDTH {
            content.x += (content.width - MAX_CONTENT_WIDTH) / 2;
            content.width = MAX_CONTENT_WIDTH;
        }
        let (header, rest) = content.split_top(7);
        let (list, footer) = rest.split_bottom(2);
        let search = Rect::new(header.x, header.y + 3, header.width.min(SEARCH_WIDTH), 3)
            .intersection(&header);
        Self {
            title: header.row(0),
            subtitle: header.row(1),
            search,
            list,
            footer: footer.row(1),
        }
    }
}

pub struct AppModel {
    dashboard: Dashboard,
    clock: Clock,
    size: (u16, u16),
    /// First list row shown, in rows from the top of the first card.
    scroll: u16,
}

impl AppModel {
    #[must_use]
    pub fn new(dashboard: Dashboard, clock: Clock) -> Self {
        Self {
            dashboard,
            clock,
            size: (100, 80),
            scroll: 0,
        }
    }

    #[must_use]
    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.size = (width, height);
        self.clamp_scroll();
        self
    }

    #[must_use]
    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    #[must_use]
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    fn layout(&self) -> Layout {
        Layout::new(Rect::from_size(self.size.0, self.size.1))
    }

    /// Total rows the visible cards need.
    fn content_height(&self) -> u16 {
        let n = u16::try_from(self.dashboard.visible_len()).unwrap_or(u16::MAX);
        n.saturating_mul(CARD_PITCH).saturating_sub(CARD_GAP)
    }

    fn max_scroll(&self) -> u16 {
        self.content_height().saturating_sub(self.layout().list.height)
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn scroll_by(&mut self, scroll: Scroll) {
        let page = self.layout().list.height.max(1);
        self.scroll = match scroll {
            Scroll::LineUp => self.scroll.saturating_sub(1),
            Scroll::LineDown => self.scroll.saturating_add(1),
            Scroll::PageUp => self.scroll.saturating_sub(page),
            Scroll::PageDown => self.scroll.saturating_add(page),
            Scroll::Top => 0,
            Scroll::Bottom => u16::MAX,
        };
        self.clamp_scroll();
    }

    fn query_changed(&mut self) {
        self.scroll = 0;
    }

    fn render_search(&self, area: Rect, frame: &mut Frame) {
        let block = Block::bordered()
            .style(Style::new().bg(palette::WHITE))
            .border_style(theme::input_border().bg(theme::APP_BG))
            .padding(1);
        block.render(area, &mut frame.buffer);
        let inner = block.inner(area).row(0);
        if inner.is_empty() {
            return;
        }
        let input = TextInput::new(self.dashboard.query())
            .placeholder(SEARCH_PLACEHOLDER)
            .style(Style::new().fg(palette::SLATE_900))
            .placeholder_style(theme::muted());
        input.render(inner, &mut frame.buffer);
        let (x, y) = input.cursor_position(inner);
        frame.set_cursor(x, y);
    }

    fn render_cards(&self, list: Rect, buf: &mut Buffer) {
        if list.is_empty() {
            return;
        }
        if self.dashboard.is_filtered_empty() {
            Paragraph::new(EMPTY_STATE)
                .style(theme::muted())
                .render(list.row(0), buf);
            return;
        }

        let now = self.clock.now();
        let scroll = i32::from(self.scroll);
        let bottom = i32::from(list.height);
        for (i, order) in self.dashboard.visible().enumerate() {
            let top = i as i32 * i32::from(CARD_PITCH) - scroll;
            if top >= bottom {
                break;
            }
            if top + i32::from(CARD_HEIGHT) <= 0 {
                continue;
            }
            let card = OrderCard::derive(order, now);
            let mut scratch = Buffer::new(list.width, CARD_HEIGHT);
            CardView::new(&card).render(scratch.area(), &mut scratch);

            // Clip the card against the top and bottom of the list.
            let skip = (-top).max(0) as u16;
            let dst_y = list.y + top.max(0) as u16;
            let rows = (CARD_HEIGHT - skip).min(list.bottom() - dst_y);
            buf.blit(&scratch, Rect::new(0, skip, list.width, rows), list.x, dst_y);
        }
    }

    fn render_footer(&self, row: Rect, buf: &mut Buffer) {
        if let Some(updated_at) = self.dashboard.updated_at() {
            Paragraph::new(&format!("Atualizado em: {updated_at}"))
                .style(theme::muted())
                .render(row, buf);
        }
        let count = format!(
            "{} de {} pedidos",
            self.dashboard.visible_len(),
            self.dashboard.book().len()
        );
        Paragraph::new(&count)
            .style(theme::muted())
            .alignment(Alignment::Right)
            .render(row, buf);
    }
}

impl Model for AppModel {
    type Message = Msg;

    fn update(&mut self, msg: Msg) -> Cmd {
        match msg {
            Msg::Insert(c) => {
                self.dashboard.push_char(c);
                self.query_changed();
            }
            Msg::Paste(text) => {
                let line: String = text.chars().filter(|c| !c.is_control()).collect();
                if !line.is_empty() {
                    self.dashboard.push_str(&line);
                    self.query_changed();
                }
            }
            Msg::Backspace => {
                if self.dashboard.pop_char() {
                    self.query_changed();
                }
            }
            Msg::Escape => {
                if !self.dashboard.clear_query() {
                    return Cmd::quit();
                }
                self.query_changed();
            }
            Msg::Scroll(scroll) => self.scroll_by(scroll),
            Msg::Resize { width, height } => {
                self.size = (width, height);
                self.clamp_scroll();
            }
            Msg::Quit => return Cmd::quit(),
            Msg::Ignore => {}
        }
        Cmd::none()
    }

    fn view(&self, frame: &mut Frame) {
        let area = frame.area();
        frame
            .buffer
            .fill(area, Cell::from_char(' ').with_bg(theme::APP_BG));

        let layout = Layout::new(area);
        Paragraph::new(TITLE)
            .style(theme::title())
            .render(layout.title, &mut frame.buffer);
        Paragraph::new(SUBTITLE)
            .style(theme::subtitle())
            .render(layout.subtitle, &mut frame.buffer);
        self.render_search(layout.search, frame);
        self.render_cards(layout.list, &mut frame.buffer);
        self.render_footer(layout.footer, &mut frame.buffer);
    }
}
