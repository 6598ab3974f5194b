use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use ubers_engine::screens::RejectScreen;

use crate::shared::{CARD_WIDTH, Card, DrawContext, blank, button, divider, footer, render_card};

pub(crate) fn draw(frame: &mut Frame, screen: &RejectScreen, area: Rect, ctx: &DrawContext) {
    let palette = &ctx.palette;
    let glyphs = &ctx.glyphs;
    let width = CARD_WIDTH.min(area.width);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("( {} )", glyphs.cross),
            Style::default()
                .fg(palette.gold_dark)
                .add_modifier(Modifier::BOLD),
        )),
        blank(),
    ];

    if screen.elements_visible() {
        lines.push(Line::from(Span::styled(
            "DECISÃO REGISTRADA",
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(divider(ctx, width));
        lines.push(Line::from(Span::styled(
            "Você optou por não prosseguir com o contrato.",
            Style::default().fg(palette.text_muted),
        )));
        lines.push(Line::from(Span::styled(
            "O acesso ao sistema foi permanentemente revogado.",
            Style::default().fg(palette.gold_soft),
        )));
        lines.push(blank());
        lines.push(Line::from(Span::styled(
            "Algumas portas se fecham apenas uma vez.",
            Style::default()
                .fg(palette.text_dim)
                .add_modifier(Modifier::ITALIC),
        )));
        lines.push(blank());
        lines.push(Line::from(Span::styled(
            "SESSAO SENDO ENCERRADA",
            Style::default().fg(palette.text_dim),
        )));
        lines.push(Line::from(Span::styled(
            screen.countdown_label(),
            Style::default()
                .fg(palette.gold_dark)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            screen.redirect_label(),
            Style::default().fg(palette.text_dim),
        )));
        lines.push(blank());
        lines.push(button(ctx, "ENCERRAR SESSÃO AGORA", true));
    }

    lines.push(blank());
    lines.push(footer(
        ctx,
        &[
            format!("SESSÃO #{}", screen.stamp().code()),
            "STATUS: REJEITADO".to_string(),
            format!("REGISTRO: {}", screen.stamp().date()),
        ],
    ));

    render_card(
        frame,
        area,
        Card {
            header_left: "// UBERS • REJEIÇÃO",
            header_right: "ACESSO NEGADO".to_string(),
            lines,
        },
        ctx,
        None,
    );
}
