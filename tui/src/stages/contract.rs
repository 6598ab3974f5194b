use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use ubers_engine::screens::ContractScreen;

use crate::shared::{CARD_WIDTH, Card, DrawContext, blank, button, divider, footer, render_card};
use crate::theme::spinner_frame;

const MAX_SEVERITY: u8 = 5;

pub(crate) fn draw(frame: &mut Frame, screen: &ContractScreen, area: Rect, ctx: &DrawContext) {
    let palette = &ctx.palette;
    let glyphs = &ctx.glyphs;
    let width = CARD_WIDTH.min(area.width);

    let mut lines = vec![
        Line::from(Span::styled(
            "CONTRATO DE ADESÃO",
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "AO SISTEMA UBERS",
            Style::default()
                .fg(palette.gold)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "DOCUMENTO CONFIDENCIAL {} TRANSMISSÃO MONITORADA",
                glyphs.bullet
            ),
            Style::default().fg(palette.text_dim),
        )),
        divider(ctx, width),
    ];

    if let Some(status) = screen.status_text() {
        lines.push(blank());
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", spinner_frame(ctx.tick, ctx.options)),
                Style::default().fg(palette.gold),
            ),
            Span::styled(
                status,
                Style::default()
                    .fg(palette.text_muted)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));
    }

    for (index, clause) in screen.visible_clauses().iter().enumerate() {
        let severity = usize::from(clause.severity.min(MAX_SEVERITY));
        lines.push(blank());
        lines.push(Line::from(vec![
            Span::styled(
                format!("CLÁUSULA {}  ", index + 1),
                Style::default().fg(palette.text_dim),
            ),
            Span::styled(
                glyphs.severity_on.repeat(severity),
                Style::default().fg(palette.gold),
            ),
            Span::styled(
                glyphs
                    .severity_off
                    .repeat(usize::from(MAX_SEVERITY) - severity),
                Style::default().fg(palette.border),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            clause.title,
            Style::default()
                .fg(palette.gold_soft)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            clause.text,
            Style::default().fg(palette.text_muted),
        )));
    }

    if screen.seal_visible() {
        let seal = Style::default().fg(palette.gold);
        lines.push(blank());
        lines.push(divider(ctx, width));
        lines.push(Line::from(Span::styled(
            format!("{} DOCUMENTO VERIFICADO", glyphs.check),
            seal.add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled("TODAS AS CLÁUSULAS APROVADAS", seal)));
        lines.push(Line::from(Span::styled("PRONTO PARA ASSINATURA", seal)));
    }

    lines.push(blank());
    if screen.button_enabled() {
        lines.push(button(ctx, "ASSINAR CONTRATO", true));
    } else {
        lines.push(button(ctx, "AGUARDE...", false));
    }
    lines.push(blank());
    lines.push(footer(
        ctx,
        &[
            format!("TRANSAÇÃO ID: {}", screen.stamp().code()),
            "VERSÃO: 7.2".to_string(),
            "IP TRACKED".to_string(),
        ],
    ));

    render_card(
        frame,
        area,
        Card {
            header_left: "// UBERS • OMERTÀ",
            header_right: format!("NÍVEL 1 {} ACESSO RESTRITO", glyphs.bullet),
            lines,
        },
        ctx,
        None,
    );
}
