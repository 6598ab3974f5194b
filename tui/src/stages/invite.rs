use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use ubers_engine::screens::InviteScreen;

use crate::shared::{CARD_WIDTH, DrawContext, blank, button, centered, divider, wrapped_height};

pub(crate) fn draw(frame: &mut Frame, screen: &InviteScreen, area: Rect, ctx: &DrawContext) {
    let palette = &ctx.palette;
    let glyphs = &ctx.glyphs;
    let width = CARD_WIDTH.min(area.width);

    let mut lines = vec![divider(ctx, width), blank()];

    if screen.badge_visible() {
        lines.push(Line::from(vec![
            Span::styled(glyphs.diamond, Style::default().fg(palette.gold_dark)),
            Span::styled(
                "  CONVITE EXCLUSIVO  ",
                Style::default()
                    .fg(palette.gold)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(glyphs.diamond, Style::default().fg(palette.gold_dark)),
        ]));
    } else {
        lines.push(blank());
    }
    lines.push(blank());

    let line_styles = [
        Style::default().fg(palette.text_primary),
        Style::default().fg(palette.gold_soft),
        Style::default()
            .fg(palette.gold)
            .add_modifier(Modifier::BOLD),
    ];
    for (text, style) in screen.visible_lines().zip(line_styles) {
        lines.push(Line::from(Span::styled(text, style)));
        lines.push(blank());
    }

    if screen.button_enabled() {
        lines.push(divider(ctx, width));
        lines.push(blank());
        lines.push(button(
            ctx,
            &format!("{}  ACEITAR CONVITE  {}", glyphs.diamond, glyphs.arrow),
            true,
        ));
        lines.push(blank());
        lines.push(Line::from(Span::styled(
            "Este convite é válido por tempo limitado",
            Style::default()
                .fg(palette.gold_dark)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let height = wrapped_height(&lines, width);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        centered(area, width, height),
    );
}
