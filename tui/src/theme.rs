//! Color theme and glyphs for the Ubers TUI.
//!
//! Black and gold by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use ubers_types::ui::UiOptions;

mod colors {
    use super::Color;

    pub const BG_BLACK: Color = Color::Rgb(10, 10, 9);
    pub const BG_SOFT: Color = Color::Rgb(18, 17, 15);
    pub const BORDER_SOFT: Color = Color::Rgb(58, 52, 38);

    pub const GOLD: Color = Color::Rgb(201, 162, 39);
    pub const GOLD_SOFT: Color = Color::Rgb(226, 200, 120);
    pub const GOLD_DARK: Color = Color::Rgb(138, 109, 24);

    pub const TEXT_PRIMARY: Color = Color::Rgb(236, 230, 214);
    pub const TEXT_MUTED: Color = Color::Rgb(168, 160, 142);
    pub const TEXT_DIM: Color = Color::Rgb(104, 98, 86);

    pub const DANGER: Color = Color::Rgb(190, 70, 58);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub bg_panel: Color,
    pub border: Color,
    pub gold: Color,
    pub gold_soft: Color,
    pub gold_dark: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub text_dim: Color,
    pub danger: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg: colors::BG_BLACK,
            bg_panel: colors::BG_SOFT,
            border: colors::BORDER_SOFT,
            gold: colors::GOLD,
            gold_soft: colors::GOLD_SOFT,
            gold_dark: colors::GOLD_DARK,
            text_primary: colors::TEXT_PRIMARY,
            text_muted: colors::TEXT_MUTED,
            text_dim: colors::TEXT_DIM,
            danger: colors::DANGER,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            bg_panel: Color::Black,
            border: Color::Gray,
            gold: Color::Yellow,
            gold_soft: Color::LightYellow,
            gold_dark: Color::Yellow,
            text_primary: Color::White,
            text_muted: Color::Gray,
            text_dim: Color::Gray,
            danger: Color::LightRed,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for decorations and indicators.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub diamond: &'static str,
    pub bullet: &'static str,
    pub separator: &'static str,
    pub check: &'static str,
    pub cross: &'static str,
    pub arrow: &'static str,
    pub play: &'static str,
    pub pause: &'static str,
    pub bar_full: &'static str,
    pub bar_empty: &'static str,
    pub severity_on: &'static str,
    pub severity_off: &'static str,
    pub spinner_frames: &'static [&'static str],
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            diamond: "<>",
            bullet: "*",
            separator: "-",
            check: "OK",
            cross: "X",
            arrow: "->",
            play: ">",
            pause: "||",
            bar_full: "#",
            bar_empty: ".",
            severity_on: "*",
            severity_off: "o",
            spinner_frames: SPINNER_FRAMES_ASCII,
        }
    } else {
        Glyphs {
            diamond: "◆",
            bullet: "•",
            separator: "─",
            check: "✓",
            cross: "✗",
            arrow: "→",
            play: "▶",
            pause: "⏸",
            bar_full: "█",
            bar_empty: "░",
            severity_on: "●",
            severity_off: "○",
            spinner_frames: SPINNER_FRAMES,
        }
    }
}

/// When `reduced_motion` is enabled, returns a static glyph instead of cycling.
#[must_use]
pub fn spinner_frame(tick: usize, options: UiOptions) -> &'static str {
    let frames = glyphs(options).spinner_frames;
    if options.reduced_motion {
        frames[0]
    } else {
        frames[tick % frames.len()]
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.gold)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn label(palette: &Palette) -> Style {
        Style::default().fg(palette.text_dim)
    }

    #[must_use]
    pub fn body(palette: &Palette) -> Style {
        Style::default().fg(palette.text_primary)
    }

    #[must_use]
    pub fn button(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg)
            .bg(palette.gold)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button_disabled(palette: &Palette) -> Style {
        Style::default().fg(palette.text_dim).bg(palette.bg_panel)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_dim)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.gold_soft)
            .add_modifier(Modifier::BOLD)
    }
}
