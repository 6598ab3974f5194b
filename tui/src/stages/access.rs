use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use ubers_engine::screens::{AccessScreen, format_clock};

use crate::shared::{
    CARD_WIDTH, Card, DrawContext, blank, button, divider, footer, key_hint, meter, render_card,
};
use crate::theme::spinner_frame;

const PROGRESS_WIDTH: usize = 40;
const VOLUME_WIDTH: usize = 10;

pub(crate) fn draw(frame: &mut Frame, screen: &AccessScreen, area: Rect, ctx: &DrawContext) {
    let palette = &ctx.palette;
    let glyphs = &ctx.glyphs;
    let width = CARD_WIDTH.min(area.width);
    let playback = screen.playback();

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                "ACESSO ",
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "CONCEDIDO",
                Style::default()
                    .fg(palette.gold)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "Agora você tem acesso ao que não é feito para o público comum.",
            Style::default().fg(palette.text_muted),
        )),
        Line::from(Span::styled(
            "A transmissão está preparada.",
            Style::default().fg(palette.gold),
        )),
        divider(ctx, width),
        Line::from(vec![
            Span::styled(
                "TRANSMISSÃO EXCLUSIVA",
                Style::default().fg(palette.text_dim),
            ),
            Span::styled(format!("  {}  ", glyphs.bullet), Style::default().fg(palette.border)),
            Span::styled(
                "CONFIDENCIAL",
                Style::default().fg(palette.danger),
            ),
        ]),
        Line::from(Span::styled(
            "MENSAGEM DO DON",
            Style::default()
                .fg(palette.gold_soft)
                .add_modifier(Modifier::BOLD),
        )),
        blank(),
    ];

    if screen.is_ready() {
        let toggle = if playback.is_playing() {
            glyphs.pause
        } else {
            glyphs.play
        };
        let mut bar = vec![Span::styled(
            format!("{toggle}  "),
            Style::default()
                .fg(palette.gold)
                .add_modifier(Modifier::BOLD),
        )];
        bar.extend(meter(ctx, playback.fraction(), PROGRESS_WIDTH));
        lines.push(Line::from(bar));
        lines.push(Line::from(Span::styled(
            format!(
                "{} / {}",
                format_clock(playback.position()),
                format_clock(playback.length())
            ),
            Style::default().fg(palette.text_muted),
        )));

        let mut volume = vec![Span::styled(
            "VOLUME  ",
            Style::default().fg(palette.text_dim),
        )];
        volume.extend(meter(ctx, f64::from(playback.volume()), VOLUME_WIDTH));
        volume.push(Span::styled(
            format!("  {:>3}%", (playback.volume() * 100.0).round() as u32),
            Style::default().fg(palette.text_dim),
        ));
        lines.push(Line::from(volume));
        lines.push(blank());
        lines.push(key_hint(
            ctx,
            &[
                ("Espaço", "tocar/pausar"),
                ("←/→", "avançar"),
                ("↑/↓", "volume"),
            ],
        ));
    } else {
        lines.push(Line::from(vec![
            Span::styled(
                "PREPARANDO TRANSMISSÃO  ",
                Style::default().fg(palette.text_dim),
            ),
            Span::styled(
                format!("{}%", (screen.progress() * 100.0).round() as u32),
                Style::default().fg(palette.gold),
            ),
        ]));
        lines.push(Line::from(meter(ctx, screen.progress(), PROGRESS_WIDTH)));
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", spinner_frame(ctx.tick, ctx.options)),
                Style::default().fg(palette.gold),
            ),
            Span::styled(
                screen.status_text(),
                Style::default()
                    .fg(palette.text_muted)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));
    }

    lines.push(blank());
    lines.push(footer(
        ctx,
        &[
            format!("TRANSMISSÃO ID: {}", screen.stamp().code()),
            format!("FREQUÊNCIA: {}kHz", screen.stamp().frequency_khz()),
            if playback.is_playing() {
                "TRANSMITINDO".to_string()
            } else {
                "EM ESPERA".to_string()
            },
        ],
    ));
    lines.push(blank());
    lines.push(button(ctx, "REINICIAR EXPERIÊNCIA", true));
    lines.push(key_hint(ctx, &[("R", "reiniciar")]));

    let status = if screen.is_ready() {
        "TRANSMISSÃO ATIVA"
    } else {
        "TRANSMISSÃO INICIANDO"
    };
    render_card(
        frame,
        area,
        Card {
            header_left: "// UBERS OMERTÀ",
            header_right: status.to_string(),
            lines,
        },
        ctx,
        None,
    );
}
