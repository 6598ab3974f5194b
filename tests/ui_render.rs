//! Full-frame renders through a vt100 virtual terminal.


use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ubers_engine::{App, KeyValueStore, MemoryStore, STAGE_KEY, Screen, ScreenContext};
use ubers_tui::{apply_event, draw};
use ubers_types::ui::UiOptions;

use vt100_backend::VT100Backend;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 48;

fn options() -> UiOptions {
    UiOptions {
        reduced_motion: true,
        ..UiOptions::default()
    }
}

fn app_at(stage: Option<&str>, options: UiOptions) -> App<MemoryStore> {
    let store = stage.map_or_else(MemoryStore::new, |raw| MemoryStore::with_entry(STAGE_KEY, raw));
    App::with_store(store, options, ScreenContext::default())
}

fn advance<S: KeyValueStore>(app: &mut App<S>, ms: u64) {
    for _ in 0..ms / 50 {
        app.tick(Duration::from_millis(50));
    }
}

fn press<S: KeyValueStore>(app: &mut App<S>, code: KeyCode) {
    apply_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn render<S: KeyValueStore>(app: &App<S>) -> String {
    render_sized(app, WIDTH, HEIGHT)
}

fn render_sized<S: KeyValueStore>(app: &App<S>, width: u16, height: u16) -> String {
    let backend = VT100Backend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("failed to create terminal");
    terminal.draw(|frame| draw(frame, app)).expect("failed to draw");
    terminal.backend().contents()
}

/// Render at `width` x `height`, cropped to the drawn region, with the
/// per-session stamp replaced by fixed placeholders.
fn frame<S: KeyValueStore>(app: &App<S>, width: u16, height: u16) -> String {
    let mut screen = render_sized(app, width, height);
    let masked = |code: String| "X".repeat(code.len());
    let stamps: Vec<(String, String)> = match app.screen() {
        Screen::Invite(_) => Vec::new(),
        Screen::Contract(s) => vec![(s.stamp().code(), masked(s.stamp().code()))],
        Screen::Sign(s) => vec![
            (s.stamp().short_code(), "NNNNNN".to_string()),
            (s.stamp().time(), "HH:MM".to_string()),
        ],
        Screen::Reject(s) => vec![
            (s.stamp().code(), masked(s.stamp().code())),
            (s.stamp().date(), "DD/MM/AAAA".to_string()),
        ],
        Screen::Access(s) => vec![
            (s.stamp().code(), masked(s.stamp().code())),
            (
                format!("{}kHz", s.stamp().frequency_khz()),
                "NNNNkHz".to_string(),
            ),
        ],
    };
    for (from, to) in stamps {
        screen = screen.replace(&from, &to);
    }

    let rows: Vec<&str> = screen.lines().map(str::trim_end).collect();
    let first = rows.iter().position(|row| !row.is_empty()).unwrap_or(0);
    let last = rows.iter().rposition(|row| !row.is_empty()).map_or(0, |i| i + 1);
    let rows = &rows[first..last.max(first)];
    let indent = rows
        .iter()
        .filter(|row| !row.is_empty())
        .map(|row| row.len() - row.trim_start_matches(' ').len())
        .min()
        .unwrap_or(0);
    rows.iter()
        .map(|row| row.get(indent..).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn invite_starts_empty_then_reveals_lines() {
    let mut app = app_at(None, options());
    let screen = render(&app);
    // Only the status line names the stage until the badge appears.
    assert_eq!(screen.matches("CONVITE EXCLUSIVO").count(), 1);
    assert!(!screen.contains("sentar à mesa"));
    assert!(!screen.contains("ACEITAR CONVITE"));

    advance(&mut app, 3200);
    let screen = render(&app);
    assert_eq!(screen.matches("CONVITE EXCLUSIVO").count(), 2);
    assert!(screen.contains("sentar à mesa"));
    assert!(screen.contains("decisões valem mais"));
    assert!(!screen.contains("Cada movimento"));

    advance(&mut app, 2400);
    let screen = render(&app);
    assert!(screen.contains("Cada movimento tem um preço."));
    assert!(screen.contains("ACEITAR CONVITE"));
}

#[test]
fn contract_shows_status_then_clauses_and_seal() {
    let mut app = app_at(Some("CONTRACT"), options());
    let screen = render(&app);
    assert!(screen.contains("CONTRATO DE ADESÃO"));
    assert!(screen.contains("Verificando integridade"));
    assert!(screen.contains("AGUARDE..."));
    assert!(!screen.contains("CLÁUSULA 1"));

    advance(&mut app, 10_600);
    let screen = render(&app);
    assert!(screen.contains("CLÁUSULA 4"));
    assert!(screen.contains("O RISCO"));
    assert!(screen.contains("DOCUMENTO VERIFICADO"));
    assert!(screen.contains("ASSINAR CONTRATO"));
    assert!(!screen.contains("Verificando integridade"));
}

#[test]
fn sign_intro_then_signature_field() {
    let mut app = app_at(Some("SIGN"), options());
    assert!(render(&app).contains("A MESA ESTÁ POSTA."));

    advance(&mut app, 1500);
    let screen = render(&app);
    assert!(screen.contains("ÚLTIMO PASSO"));
    assert!(screen.contains("DIGITE SEU NOME COMPLETO"));
    assert!(screen.contains("0/3 CARACTERES MÍNIMOS"));
    assert!(screen.contains("INCOMPLETO"));

    for c in "Ana".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    let screen = render(&app);
    assert!(screen.contains("Ana_"));
    assert!(screen.contains("3/3 CARACTERES MÍNIMOS"));
    assert!(screen.contains("PRONTO PARA ASSINAR"));
}

#[test]
fn sign_warning_follows_a_single_character() {
    let mut app = app_at(Some("SIGN"), options());
    advance(&mut app, 1500);
    press(&mut app, KeyCode::Char('A'));
    assert!(!render(&app).contains("registrada permanentemente"));

    advance(&mut app, 800);
    assert!(render(&app).contains("registrada permanentemente"));

    press(&mut app, KeyCode::Char('n'));
    assert!(render(&app).contains("registrada permanentemente"));

    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    assert!(!render(&app).contains("registrada permanentemente"));
}

#[test]
fn decline_prompt_overlays_the_signature_card() {
    let mut app = app_at(Some("SIGN"), options());
    advance(&mut app, 1500);
    press(&mut app, KeyCode::Esc);

    let screen = render(&app);
    assert!(screen.contains("RECUSAR CONTRATO"));
    assert!(screen.contains("sim"));
}

#[test]
fn reject_counts_down() {
    let mut app = app_at(Some("REJECT"), options());
    advance(&mut app, 500);
    let screen = render(&app);
    assert!(screen.contains("DECISÃO REGISTRADA"));
    assert!(screen.contains("00:10"));
    assert!(screen.contains("em 10 segundos"));

    advance(&mut app, 9000);
    let screen = render(&app);
    assert!(screen.contains("00:01"));
    assert!(screen.contains("em 1 segundo"));
    assert!(screen.contains("STATUS: REJEITADO"));
}

#[test]
fn access_decodes_then_shows_the_player() {
    let mut app = app_at(Some("ACCESS"), options());
    let screen = render(&app);
    assert!(screen.contains("ACESSO CONCEDIDO"));
    assert!(screen.contains("PREPARANDO TRANSMISSÃO"));
    assert!(screen.contains("0%"));

    advance(&mut app, 7800);
    let screen = render(&app);
    assert!(!screen.contains("PREPARANDO TRANSMISSÃO"));
    assert!(screen.contains("0:00 / 1:34"));
    assert!(screen.contains("EM ESPERA"));
    assert!(screen.contains("REINICIAR EXPERIÊNCIA"));

    press(&mut app, KeyCode::Char(' '));
    assert!(render(&app).contains("TRANSMITINDO"));
}

#[test]
fn status_line_names_the_stage() {
    let app = app_at(Some("REJECT"), options());
    let screen = render(&app);
    let last = screen.lines().last().unwrap_or_default();
    assert!(last.contains("ACESSO NEGADO"));
    assert!(last.contains("Ctrl+C"));
}

#[test]
fn ascii_only_avoids_block_glyphs() {
    let mut app = app_at(
        Some("ACCESS"),
        UiOptions {
            ascii_only: true,
            reduced_motion: true,
            ..UiOptions::default()
        },
    );
    advance(&mut app, 7800);
    let screen = render(&app);
    assert!(!screen.contains('▶'));
    assert!(!screen.contains('█'));
}

#[test]
fn small_terminal_keeps_the_action_visible() {
    let mut app = app_at(Some("CONTRACT"), options());
    advance(&mut app, 10_600);
    let screen = render_sized(&app, 80, 20);
    assert!(screen.contains("ASSINAR CONTRATO"));
}

#[test]
fn invite_frame_after_full_reveal() {
    let mut app = app_at(None, options());
    advance(&mut app, 5700);
    insta::assert_snapshot!(frame(&app, 80, 17), @r"
────────────────────────────────────────────────────────────

                   ◆  CONVITE EXCLUSIVO  ◆

             Você foi convidado a sentar à mesa.

           Aqui, decisões valem mais que talento.

                Cada movimento tem um preço.

────────────────────────────────────────────────────────────

                  [ ◆  ACEITAR CONVITE  → ]

          Este convite é válido por tempo limitado

                                      CONVITE EXCLUSIVO   Ctrl+C sair
");
}

#[test]
fn contract_frame_while_verifying() {
    let app = app_at(Some("CONTRACT"), options());
    insta::assert_snapshot!(frame(&app, 80, 15), @r"
╔ // UBERS • OMERTÀ ════════════════════════════ NÍVEL 1 • ACESSO RESTRITO ╗
║                                                                          ║
║                            CONTRATO DE ADESÃO                            ║
║                             AO SISTEMA UBERS                             ║
║              DOCUMENTO CONFIDENCIAL • TRANSMISSÃO MONITORADA             ║
║       ────────────────────────────────────────────────────────────       ║
║                                                                          ║
║                  ⠋ Verificando integridade do documento…                 ║
║                                                                          ║
║                              [ AGUARDE... ]                              ║
║                                                                          ║
║             TRANSAÇÃO ID: XXXXXXXX • VERSÃO: 7.2 • IP TRACKED            ║
║                                                                          ║
╚══════════════════════════════════════════════════════════════════════════╝
                                                ACESSO RESTRITO   Ctrl+C sair
");
}

#[test]
fn sign_frame_with_empty_signature() {
    let mut app = app_at(Some("SIGN"), options());
    advance(&mut app, 1600);
    insta::assert_snapshot!(frame(&app, 80, 18), @r"
╔ // UBERS • FINAL STEP ═════════════════════════════ ASSINATURA REQUERIDA ╗
║                                                                          ║
║                               ÚLTIMO PASSO                               ║
║                                                                          ║
║                           • ASSINATURA DIGITAL                           ║
║               [ DIGITE SEU NOME COMPLETO                 ]               ║
║                                                                          ║
║                   0/3 CARACTERES MÍNIMOS   ✗ INCOMPLETO                  ║
║                                                                          ║
║                         [ CONFIRMAR ASSINATURA ]                         ║
║                          RECUSAR CONTRATO E SAIR                         ║
║                                                                          ║
║                        Enter assinar   Esc recusar                       ║
║                                                                          ║
║                 SESSÃO NNNNNN • ÚLTIMA ATUALIZAÇÃO: HH:MM                ║
║                                                                          ║
╚══════════════════════════════════════════════════════════════════════════╝
                                           ASSINATURA REQUERIDA   Ctrl+C sair
");
}

#[test]
fn reject_frame_at_start_of_countdown() {
    let mut app = app_at(Some("REJECT"), options());
    advance(&mut app, 600);
    insta::assert_snapshot!(frame(&app, 80, 21), @r"
╔ // UBERS • REJEIÇÃO ══════════════════════════════════════ ACESSO NEGADO ╗
║                                                                          ║
║                                   ( ✗ )                                  ║
║                                                                          ║
║                            DECISÃO REGISTRADA                            ║
║       ────────────────────────────────────────────────────────────       ║
║               Você optou por não prosseguir com o contrato.              ║
║             O acesso ao sistema foi permanentemente revogado.            ║
║                                                                          ║
║                 Algumas portas se fecham apenas uma vez.                 ║
║                                                                          ║
║                          SESSAO SENDO ENCERRADA                          ║
║                                   00:10                                  ║
║                Redirecionamento automático em 10 segundos                ║
║                                                                          ║
║                         [ ENCERRAR SESSÃO AGORA ]                        ║
║                                                                          ║
║        SESSÃO #XXXXXXXX • STATUS: REJEITADO • REGISTRO: DD/MM/AAAA       ║
║                                                                          ║
╚══════════════════════════════════════════════════════════════════════════╝
                                                  ACESSO NEGADO   Ctrl+C sair
");
}

#[test]
fn access_frame_with_transmission_ready() {
    let mut app = app_at(Some("ACCESS"), options());
    advance(&mut app, 7800);
    insta::assert_snapshot!(frame(&app, 80, 22), @r"
╔ // UBERS OMERTÀ ══════════════════════════════════════ TRANSMISSÃO ATIVA ╗
║                                                                          ║
║                             ACESSO CONCEDIDO                             ║
║      Agora você tem acesso ao que não é feito para o público comum.      ║
║                       A transmissão está preparada.                      ║
║       ────────────────────────────────────────────────────────────       ║
║                  TRANSMISSÃO EXCLUSIVA  •  CONFIDENCIAL                  ║
║                              MENSAGEM DO DON                             ║
║                                                                          ║
║                ▶  ░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░               ║
║                                0:00 / 1:34                               ║
║                         VOLUME  ████████░░   80%                         ║
║                                                                          ║
║              Espaço tocar/pausar   ←/→ avançar   ↑/↓ volume              ║
║                                                                          ║
║        TRANSMISSÃO ID: XXXXXXXX • FREQUÊNCIA: NNNNkHz • EM ESPERA        ║
║                                                                          ║
║                         [ REINICIAR EXPERIÊNCIA ]                        ║
║                                R reiniciar                               ║
║                                                                          ║
╚══════════════════════════════════════════════════════════════════════════╝
                                               ACESSO CONCEDIDO   Ctrl+C sair
");
}
