#![forbid(unsafe_code)]

//! Dashboard palette and the styles derived from order state.

use ordertrack_core::{EtaStatus, StepState, Tone};
use ordertrack_render::{PackedRgba, Style};

pub mod palette {
    use ordertrack_render::PackedRgba;

    pub const WHITE: PackedRgba = PackedRgba::WHITE;
    pub const SLATE_50: PackedRgba = PackedRgba::hex(0xf8fafc);
    pub const SLATE_100: PackedRgba = PackedRgba::hex(0xf1f5f9);
    pub const SLATE_200: PackedRgba = PackedRgba::hex(0xe2e8f0);
    pub const SLATE_300: PackedRgba = PackedRgba::hex(0xcbd5e1);
    pub const SLATE_500: PackedRgba = PackedRgba::hex(0x64748b);
    pub const SLATE_600: PackedRgba = PackedRgba::hex(0x475569);
    pub const SLATE_700: PackedRgba = PackedRgba::hex(0x334155);
    pub const SLATE_800: PackedRgba = PackedRgba::hex(0x1e293b);
    pub const SLATE_900: PackedRgba = PackedRgba::hex(0x0f172a);
    pub const SKY_600: PackedRgba = PackedRgba::hex(0x0284c7);
    pub const EMERALD_50: PackedRgba = PackedRgba::hex(0xecfdf5);
    pub const EMERALD_500: PackedRgba = PackedRgba::hex(0x10b981);
    pub const EMERALD_700: PackedRgba = PackedRgba::hex(0x047857);
    pub const AMBER_50: PackedRgba = PackedRgba::hex(0xfffbeb);
    pub const AMBER_700: PackedRgba = PackedRgba::hex(0xb45309);
    pub const RED_50: PackedRgba = PackedRgba::hex(0xfef2f2);
    pub const RED_700: PackedRgba = PackedRgba::hex(0xb91c1c);
}

use palette::*;

/// Screen background.
pub const APP_BG: PackedRgba = SLATE_100;
/// Card surface.
pub const CARD_BG: PackedRgba = WHITE;
/// Tile surface inside a card.
pub const TILE_BG: PackedRgba = SLATE_50;

pub fn title() -> Style {
    Style::new().fg(SLATE_900).bold()
}

pub fn subtitle() -> Style {
    Style::new().fg(SLATE_600)
}

/// Labels and secondary text.
pub fn muted() -> Style {
    Style::new().fg(SLATE_500)
}

/// Emphasised values.
pub fn strong() -> Style {
    Style::new().fg(SLATE_800).bold()
}

pub fn card_border() -> Style {
    Style::new().fg(SLATE_200)
}

pub fn input_border() -> Style {
    Style::new().fg(SLATE_300)
}

/// Status badge colors by tone.
pub fn badge(tone: Tone) -> Style {
    match tone {
        Tone::Waiting => Style::new().fg(AMBER_700).bg(AMBER_50),
        Tone::Cancelled => Style::new().fg(RED_700).bg(RED_50),
        Tone::Delivered => Style::new().fg(EMERALD_700).bg(EMERALD_50),
        Tone::Neutral => Style::new().fg(SLATE_700).bg(SLATE_100),
    }
}

/// Stepper marker colors.
pub fn step_marker(state: StepState) -> Style {
    match state {
        StepState::Done => Style::new().fg(WHITE).bg(EMERALD_500).bold(),
        StepState::Current => Style::new().fg(WHITE).bg(SKY_600).bold(),
        StepState::Pending => Style::new().fg(SLATE_500).bg(WHITE),
    }
}

/// Connector line behind the stepper markers.
pub fn step_connector() -> Style {
    Style::new().fg(SLATE_200)
}

/// Filled part of the progress bar.
pub fn progress_fill() -> Style {
    Style::new().fg(SKY_600)
}

pub fn progress_track() -> Style {
    Style::new().fg(SLATE_100)
}

/// ETA tile value: emerald when due, amber when soon.
pub fn eta_value(eta: EtaStatus) -> Style {
    let fg = match eta {
        EtaStatus::Due => EMERALD_700,
        EtaStatus::Soon(_) => AMBER_700,
        EtaStatus::Later(_) | EtaStatus::Unknown => SLATE_900,
    };
    Style::new().fg(fg).bold()
}
