//! TUI rendering for Ubers using ratatui.

mod effects;
mod input;
mod shared;
mod stages;
mod theme;

pub use effects::{apply_screen_effect, fade_color, fade_palette};
pub use input::{InputPump, KeyCommand, apply_event, handle_events, map_key};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use ubers_engine::{App, KeyValueStore, ScreenEffectKind};

use crate::shared::DrawContext;

/// Main draw function
pub fn draw<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let options = app.options();
    let base = palette(options);
    let palette = match app.screen_effect() {
        Some(effect) if effect.kind() == ScreenEffectKind::FadeIn && !options.reduced_motion => {
            fade_palette(&base, effect.progress())
        }
        _ => base,
    };
    let ctx = DrawContext {
        palette,
        glyphs: glyphs(options),
        options,
        tick: app.tick_count(),
    };

    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(base.bg)), area);

    let body = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    stages::draw(frame, app.screen(), body, &ctx);
    draw_status_line(frame, app, area, &ctx);
}

fn draw_status_line<S: KeyValueStore>(frame: &mut Frame, app: &App<S>, area: Rect, ctx: &DrawContext) {
    if area.height == 0 {
        return;
    }
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", app.stage().label()),
            styles::key_highlight(&ctx.palette),
        ),
        Span::styled("  Ctrl+C sair ", styles::key_hint(&ctx.palette)),
    ]);
    let rect = Rect {
        y: area.y + area.height - 1,
        height: 1,
        ..area
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), rect);
}
