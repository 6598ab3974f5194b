//! Rendering helpers shared by every stage.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use ubers_types::ui::{ScreenEffect, UiOptions};

use crate::effects::apply_screen_effect;
use crate::theme::{Glyphs, Palette, styles};

pub(crate) const CARD_WIDTH: u16 = 76;

/// Everything a stage renderer needs besides its own screen state.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DrawContext {
    pub(crate) palette: Palette,
    pub(crate) glyphs: Glyphs,
    pub(crate) options: UiOptions,
    pub(crate) tick: usize,
}

/// A bordered panel with a two-sided header.
pub(crate) struct Card<'a> {
    pub(crate) header_left: &'a str,
    pub(crate) header_right: String,
    pub(crate) lines: Vec<Line<'a>>,
}

/// Centre a `width` x `height` rectangle inside `area`, clamped to fit.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Rows `lines` occupy when wrapped to `width` columns.
pub(crate) fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines
        .iter()
        .map(|line| line.width().max(1).div_ceil(width))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Draw `card` centred in `viewport`, displaced by `effect` when motion is
/// allowed. Content taller than the card scrolls so the newest lines stay
/// visible.
pub(crate) fn render_card(
    frame: &mut Frame,
    viewport: Rect,
    card: Card<'_>,
    ctx: &DrawContext,
    effect: Option<&ScreenEffect>,
) -> Rect {
    let palette = &ctx.palette;
    let width = CARD_WIDTH.min(viewport.width);
    // Word wrapping can break earlier than a hard wrap would.
    let inner_width = width.saturating_sub(8);
    let content_height = wrapped_height(&card.lines, inner_width);
    let height = content_height.saturating_add(4);

    let mut area = centered(viewport, width, height);
    if let Some(effect) = effect
        && !ctx.options.reduced_motion
    {
        area = apply_screen_effect(effect, area, viewport);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(palette.gold_dark))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::new(2, 2, 1, 1))
        .title(Line::from(Span::styled(
            format!(" {} ", card.header_left),
            styles::label(palette),
        )))
        .title(
            Line::from(Span::styled(
                format!(" {} ", card.header_right),
                styles::label(palette),
            ))
            .right_aligned(),
        );

    let inner_height = area.height.saturating_sub(4);
    let scroll = content_height.saturating_sub(inner_height);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(card.lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .scroll((scroll, 0)),
        area,
    );
    area
}

pub(crate) fn divider<'a>(ctx: &DrawContext, width: u16) -> Line<'a> {
    let width = usize::from(width.min(CARD_WIDTH).saturating_sub(16)).max(4);
    Line::from(Span::styled(
        ctx.glyphs.separator.repeat(width / ctx.glyphs.separator.width().max(1)),
        Style::default().fg(ctx.palette.gold_dark),
    ))
}

/// `[ LABEL ]`, filled when enabled.
pub(crate) fn button<'a>(ctx: &DrawContext, label: &str, enabled: bool) -> Line<'a> {
    let style = if enabled {
        styles::button(&ctx.palette)
    } else {
        styles::button_disabled(&ctx.palette)
    };
    Line::from(Span::styled(format!("[ {label} ]"), style))
}

/// A key followed by what it does, e.g. `Enter aceitar`.
pub(crate) fn key_hint<'a>(ctx: &DrawContext, keys: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, label)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("   ", styles::key_hint(&ctx.palette)));
        }
        spans.push(Span::styled(*key, styles::key_highlight(&ctx.palette)));
        spans.push(Span::styled(format!(" {label}"), styles::key_hint(&ctx.palette)));
    }
    Line::from(spans)
}

pub(crate) fn footer<'a>(ctx: &DrawContext, parts: &[String]) -> Line<'a> {
    let separator = format!(" {} ", ctx.glyphs.bullet);
    Line::from(Span::styled(
        parts.join(&separator),
        Style::default()
            .fg(ctx.palette.text_dim)
            .add_modifier(Modifier::DIM),
    ))
}

/// A text bar `width` cells wide, filled to `ratio`.
pub(crate) fn meter(ctx: &DrawContext, ratio: f64, width: usize) -> Vec<Span<'static>> {
    let filled = ((ratio.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    vec![
        Span::styled(
            ctx.glyphs.bar_full.repeat(filled),
            Style::default().fg(ctx.palette.gold),
        ),
        Span::styled(
            ctx.glyphs.bar_empty.repeat(width - filled),
            Style::default().fg(ctx.palette.border),
        ),
    ]
}

pub(crate) fn blank<'a>() -> Line<'a> {
    Line::default()
}
