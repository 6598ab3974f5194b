use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

use ubers_engine::screens::{DECLINE_PROMPT, MIN_SIGNATURE_CHARS, SignPhase, SignScreen};

use crate::shared::{
    Card, DrawContext, blank, button, centered, footer, key_hint, render_card, wrapped_height,
};

const FIELD_WIDTH: usize = 40;
const PLACEHOLDER: &str = "DIGITE SEU NOME COMPLETO";
const WARNING: &str = "Sua assinatura será registrada permanentemente no sistema. Certifique-se de que está pronto para prosseguir.";

pub(crate) fn draw(frame: &mut Frame, screen: &SignScreen, area: Rect, ctx: &DrawContext) {
    let palette = &ctx.palette;
    let glyphs = &ctx.glyphs;
    let mut lines = Vec::new();

    if screen.phase() == SignPhase::Intro {
        lines.push(blank());
        lines.push(Line::from(Span::styled(
            "A MESA ESTÁ POSTA.",
            Style::default()
                .fg(palette.gold)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(blank());
    } else {
        lines.push(Line::from(Span::styled(
            "ÚLTIMO PASSO",
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(blank());

        let indicator = if screen.can_sign() {
            Style::default().fg(palette.gold)
        } else {
            Style::default().fg(palette.text_dim)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", glyphs.bullet), indicator),
            Span::styled("ASSINATURA DIGITAL", Style::default().fg(palette.text_dim)),
        ]));
        lines.push(signature_field(ctx, screen));

        if screen.warning_visible() {
            lines.push(Line::from(Span::styled(
                WARNING,
                Style::default()
                    .fg(palette.gold_soft)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(blank());

        let count = screen.name_len();
        let (badge, badge_style) = if screen.can_sign() {
            (
                format!("{} PRONTO PARA ASSINAR", glyphs.check),
                Style::default()
                    .fg(palette.gold)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                format!("{} INCOMPLETO", glyphs.cross),
                Style::default().fg(palette.text_dim),
            )
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{count}/{MIN_SIGNATURE_CHARS} CARACTERES MÍNIMOS   "),
                Style::default().fg(palette.text_dim),
            ),
            Span::styled(badge, badge_style),
        ]));
        lines.push(blank());
        lines.push(button(ctx, "CONFIRMAR ASSINATURA", screen.can_sign()));
        lines.push(Line::from(Span::styled(
            "RECUSAR CONTRATO E SAIR",
            Style::default()
                .fg(palette.text_dim)
                .add_modifier(Modifier::UNDERLINED),
        )));
        lines.push(blank());
        lines.push(key_hint(
            ctx,
            &[("Enter", "assinar"), ("Esc", "recusar")],
        ));
    }

    lines.push(blank());
    lines.push(footer(
        ctx,
        &[
            format!("SESSÃO {}", screen.stamp().short_code()),
            format!("ÚLTIMA ATUALIZAÇÃO: {}", screen.stamp().time()),
        ],
    ));

    render_card(
        frame,
        area,
        Card {
            header_left: "// UBERS • FINAL STEP",
            header_right: "ASSINATURA REQUERIDA".to_string(),
            lines,
        },
        ctx,
        screen.shake(),
    );

    if screen.is_confirming() {
        draw_decline_prompt(frame, area, ctx);
    }
}

fn signature_field<'a>(ctx: &DrawContext, screen: &'a SignScreen) -> Line<'a> {
    let palette = &ctx.palette;
    let border = Style::default().fg(palette.gold_dark);
    let (text, style) = if screen.name().is_empty() {
        (
            PLACEHOLDER.to_string(),
            Style::default().fg(palette.text_dim),
        )
    } else {
        (
            format!("{}_", screen.name()),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )
    };
    let pad = FIELD_WIDTH.saturating_sub(text.chars().count());
    Line::from(vec![
        Span::styled("[ ", border),
        Span::styled(text, style),
        Span::raw(" ".repeat(pad)),
        Span::styled(" ]", border),
    ])
}

fn draw_decline_prompt(frame: &mut Frame, area: Rect, ctx: &DrawContext) {
    let palette = &ctx.palette;
    let lines = vec![
        Line::from(Span::styled(
            DECLINE_PROMPT,
            Style::default().fg(palette.text_primary),
        )),
        blank(),
        key_hint(ctx, &[("S", "sim"), ("N", "não")]),
    ];
    let width = 52.min(area.width);
    let height = wrapped_height(&lines, width.saturating_sub(6)).saturating_add(4);
    let rect = centered(area, width, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.danger))
        .style(Style::default().bg(palette.bg))
        .padding(Padding::new(2, 2, 1, 1))
        .title(Line::from(Span::styled(
            " RECUSAR CONTRATO ",
            Style::default()
                .fg(palette.danger)
                .add_modifier(Modifier::BOLD),
        )));

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rect,
    );
}
