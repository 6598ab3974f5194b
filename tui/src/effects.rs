//! Screen animation effects: fade-in on mount, shake on rejected input.

use ratatui::layout::Rect;
use ratatui::style::Color;

use ubers_types::ui::{ScreenEffect, ScreenEffectKind};

use crate::theme::Palette;

/// Horizontal offset for a shake at `progress`, decaying to rest.
fn shake_offset(progress: f32) -> i32 {
    let t = progress.clamp(0.0, 1.0);
    let decay = 1.0 - t;
    let oscillations = 2.5;
    let amplitude = 2.0;
    (f32::sin(t * std::f32::consts::TAU * oscillations) * amplitude * decay).round() as i32
}

/// Displace `base` for a shake effect, keeping it inside `viewport`.
/// Fade effects leave geometry untouched.
#[must_use]
pub fn apply_screen_effect(effect: &ScreenEffect, base: Rect, viewport: Rect) -> Rect {
    match effect.kind() {
        ScreenEffectKind::FadeIn => base,
        ScreenEffectKind::Shake => {
            let offset = shake_offset(effect.progress());
            let viewport_left = i32::from(viewport.x);
            let viewport_right = i32::from(viewport.x) + i32::from(viewport.width);
            let max_x = (viewport_right - i32::from(base.width)).max(viewport_left);
            let x = (i32::from(base.x) + offset).clamp(viewport_left, max_x) as u16;
            Rect { x, ..base }
        }
    }
}

/// Blend `to` over `from` by `t`. Only RGB colors can be mixed; named
/// colors switch over at the midpoint.
#[must_use]
pub fn fade_color(from: Color, to: Color, t: f32) -> Color {
    let t = ease_out_cubic(t);
    match (from, to) {
        (Color::Rgb(fr, fg, fb), Color::Rgb(tr, tg, tb)) => {
            let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
            Color::Rgb(mix(fr, tr), mix(fg, tg), mix(fb, tb))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// Every foreground color of `palette` faded in from the background by `t`.
#[must_use]
pub fn fade_palette(palette: &Palette, t: f32) -> Palette {
    let fade = |color| fade_color(palette.bg, color, t);
    Palette {
        border: fade(palette.border),
        gold: fade(palette.gold),
        gold_soft: fade(palette.gold_soft),
        gold_dark: fade(palette.gold_dark),
        text_primary: fade(palette.text_primary),
        text_muted: fade(palette.text_muted),
        text_dim: fade(palette.text_dim),
        danger: fade(palette.danger),
        ..*palette
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
