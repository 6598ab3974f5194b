//! Terminal events driving the app, as the frame loop delivers them.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ubers_engine::Stage;
use ubers_engine::screens::Screen;
use ubers_tui::apply_event;

use crate::common::{advance, app_at, fresh_app, stored_stage};

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn typed(text: &str) -> Vec<Event> {
    text.chars().map(|c| press(KeyCode::Char(c))).collect()
}

#[test]
fn enter_accepts_invite_once_the_button_shows() {
    let mut app = fresh_app();
    advance(&mut app, 5600);
    apply_event(&mut app, press(KeyCode::Enter));
    assert_eq!(app.stage(), Stage::Contract);
}

#[test]
fn ctrl_c_requests_quit_without_changing_stage() {
    let mut app = fresh_app();
    apply_event(
        &mut app,
        Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
    );
    assert!(app.should_quit());
    assert_eq!(app.stage(), Stage::Invite);
}

#[test]
fn typing_and_enter_sign_the_contract() {
    let mut app = app_at("SIGN");
    advance(&mut app, 1500);
    for event in typed("Rosa") {
        apply_event(&mut app, event);
    }
    apply_event(&mut app, press(KeyCode::Enter));

    assert_eq!(app.stage(), Stage::Access);
    assert_eq!(stored_stage(&app).as_deref(), Some("ACCESS"));
}

#[test]
fn letters_type_into_the_signature_rather_than_acting() {
    let mut app = app_at("SIGN");
    advance(&mut app, 1500);
    // 'r' resets on the access screen; here it is just a letter.
    for event in typed("rn") {
        apply_event(&mut app, event);
    }
    let Screen::Sign(sign) = app.screen() else {
        panic!("expected the signature screen");
    };
    assert_eq!(sign.name(), "rn");
}

#[test]
fn pasted_text_is_typed_into_the_signature() {
    let mut app = app_at("SIGN");
    advance(&mut app, 1500);
    apply_event(&mut app, Event::Paste("Don\nVito".to_string()));

    let Screen::Sign(sign) = app.screen() else {
        panic!("expected the signature screen");
    };
    assert_eq!(sign.name(), "DonVito");
}

#[test]
fn escape_then_yes_declines_the_contract() {
    let mut app = app_at("SIGN");
    advance(&mut app, 1500);
    apply_event(&mut app, press(KeyCode::Esc));
    apply_event(&mut app, press(KeyCode::Char('s')));

    assert_eq!(app.stage(), Stage::Reject);
}

#[test]
fn escape_then_no_keeps_signing() {
    let mut app = app_at("SIGN");
    advance(&mut app, 1500);
    apply_event(&mut app, press(KeyCode::Esc));
    apply_event(&mut app, press(KeyCode::Char('n')));

    assert_eq!(app.stage(), Stage::Sign);
    let Screen::Sign(sign) = app.screen() else {
        panic!("expected the signature screen");
    };
    assert!(!sign.is_confirming());
    assert_eq!(sign.name(), "");
}

#[test]
fn access_keys_control_playback_and_reset() {
    let mut app = app_at("ACCESS");
    advance(&mut app, 7800);

    apply_event(&mut app, press(KeyCode::Char(' ')));
    apply_event(&mut app, press(KeyCode::Down));
    let Screen::Access(access) = app.screen() else {
        panic!("expected the access screen");
    };
    assert!(access.is_ready());
    assert!(access.playback().is_playing());
    assert!((access.playback().volume() - 0.7).abs() < 1e-6);

    apply_event(&mut app, press(KeyCode::Char('r')));
    assert_eq!(app.stage(), Stage::Invite);
    assert_eq!(stored_stage(&app), None);
}
