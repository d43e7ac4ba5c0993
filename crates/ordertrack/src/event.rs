#![forbid(unsafe_code)]

//! Input events.
//!
//! Crossterm events are mapped into these types at the terminal boundary so
//! models and their tests never see backend types.
//!
//! - `KeyEventKind` defaults to `Press` when the terminal does not report it
//! - `Modifiers` use bitflags for easy combination

use bitflags::bitflags;
use crossterm::event as cte;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),

    /// Terminal was resized.
    Resize {
        /// New terminal width in columns.
        width: u16,
        /// New terminal height in rows.
        height: u16,
    },

    /// Pasted text (bracketed paste).
    Paste(String),

    /// Focus gained (`true`) or lost.
    Focus(bool),
}

impl Event {
    /// Convert a crossterm event. Mouse input and unsupported keys map to `None`.
    #[must_use]
    pub fn from_crossterm(event: cte::Event) -> Option<Self> {
        match event {
            cte::Event::Key(key) => KeyEvent::from_crossterm(key).map(Self::Key),
            cte::Event::Resize(width, height) => Some(Self::Resize { width, height }),
            cte::Event::Paste(text) => Some(Self::Paste(text)),
            cte::Event::FocusGained => Some(Self::Focus(true)),
            cte::Event::FocusLost => Some(Self::Focus(false)),
            cte::Event::Mouse(_) => None,
        }
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// A key press with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if Ctrl modifier is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Check if Alt modifier is held.
    #[must_use]
    pub const fn alt(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }

    fn from_crossterm(event: cte::KeyEvent) -> Option<Self> {
        let code = match event.code {
            cte::KeyCode::Backspace => KeyCode::Backspace,
            cte::KeyCode::Enter => KeyCode::Enter,
            cte::KeyCode::Up => KeyCode::Up,
            cte::KeyCode::Down => KeyCode::Down,
            cte::KeyCode::Home => KeyCode::Home,
            cte::KeyCode::End => KeyCode::End,
            cte::KeyCode::PageUp => KeyCode::PageUp,
            cte::KeyCode::PageDown => KeyCode::PageDown,
            cte::KeyCode::Tab => KeyCode::Tab,
            cte::KeyCode::Esc => KeyCode::Escape,
            cte::KeyCode::Char(c) => KeyCode::Char(c),
            _ => return None,
        };
        let kind = match event.kind {
            cte::KeyEventKind::Press => KeyEventKind::Press,
            cte::KeyEventKind::Repeat => KeyEventKind::Repeat,
            cte::KeyEventKind::Release => KeyEventKind::Release,
        };
        Some(
            Self::new(code)
                .with_modifiers(Modifiers::from_crossterm(event.modifiers))
                .with_kind(kind),
        )
    }
}

/// Keys the dashboard reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Backspace,
    Enter,
    Escape,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Tab,
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    #[default]
    Press,
    Repeat,
    Release,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const NONE = 0b0000;
        const SHIFT = 0b0001;
        const ALT = 0b0010;
        const CTRL = 0b0100;
        const SUPER = 0b1000;
    }
}

impl Modifiers {
    fn from_crossterm(modifiers: cte::KeyModifiers) -> Self {
        let mut mapped = Self::NONE;
        if modifiers.contains(cte::KeyModifiers::SHIFT) {
            mapped |= Self::SHIFT;
        }
        if modifiers.contains(cte::KeyModifiers::ALT) {
            mapped |= Self::ALT;
        }
        if modifiers.contains(cte::KeyModifiers::CONTROL) {
            mapped |= Self::CTRL;
        }
        if modifiers.intersects(
            cte::KeyModifiers::SUPER | cte::KeyModifiers::HYPER | cte::KeyModifiers::META,
        ) {
            mapped |= Self::SUPER;
        }
        mapped
    }
}
