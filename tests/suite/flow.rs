//! End-to-end walks through the five stages.

use ubers_engine::screens::Screen;
use ubers_engine::{FlowOutcome, ScreenAction, Stage, StageComplete, Transition};

use crate::common::{advance, app_at, fresh_app, stored_stage, type_text};

#[test]
fn fresh_start_accepts_invite_into_contract() {
    let mut app = fresh_app();
    assert_eq!(app.stage(), Stage::Invite);
    assert_eq!(stored_stage(&app), None);

    advance(&mut app, 5600);
    app.handle_action(ScreenAction::Submit);

    assert_eq!(app.stage(), Stage::Contract);
    assert_eq!(stored_stage(&app).as_deref(), Some("CONTRACT"));
}

#[test]
fn invite_ignores_enter_before_the_button_appears() {
    let mut app = fresh_app();
    advance(&mut app, 5500);
    app.handle_action(ScreenAction::Submit);

    assert_eq!(app.stage(), Stage::Invite);
    assert_eq!(stored_stage(&app), None);
}

#[test]
fn full_acceptance_path_reaches_access() {
    let mut app = fresh_app();

    advance(&mut app, 5600);
    app.handle_action(ScreenAction::Submit);
    assert_eq!(app.stage(), Stage::Contract);

    advance(&mut app, 10_600);
    app.handle_action(ScreenAction::Submit);
    assert_eq!(app.stage(), Stage::Sign);
    assert_eq!(stored_stage(&app).as_deref(), Some("SIGN"));

    advance(&mut app, 1500);
    type_text(&mut app, "Ana");
    app.handle_action(ScreenAction::Submit);

    assert_eq!(app.stage(), Stage::Access);
    assert_eq!(stored_stage(&app).as_deref(), Some("ACCESS"));
}

#[test]
fn restores_stored_stage_without_writing() {
    let app = app_at("SIGN");
    assert_eq!(app.stage(), Stage::Sign);
    assert!(matches!(app.screen(), Screen::Sign(_)));
    assert_eq!(stored_stage(&app).as_deref(), Some("SIGN"));
}

#[test]
fn unrecognised_stored_value_starts_at_invite() {
    let app = app_at("signed");
    assert_eq!(app.stage(), Stage::Invite);
    assert_eq!(stored_stage(&app).as_deref(), Some("signed"));
}

#[test]
fn short_signature_does_not_advance() {
    let mut app = app_at("SIGN");
    advance(&mut app, 1500);
    type_text(&mut app, "Al");
    app.handle_action(ScreenAction::Submit);

    assert_eq!(app.stage(), Stage::Sign);
    let Screen::Sign(sign) = app.screen() else {
        panic!("expected the signature screen");
    };
    assert!(sign.shake().is_some());
}

#[test]
fn declining_signature_then_waiting_returns_to_invite() {
    let mut app = app_at("SIGN");
    advance(&mut app, 1500);

    app.handle_action(ScreenAction::Cancel);
    app.handle_action(ScreenAction::Confirm);
    assert_eq!(app.stage(), Stage::Reject);
    assert_eq!(stored_stage(&app).as_deref(), Some("REJECT"));

    advance(&mut app, 10_250);
    assert_eq!(app.stage(), Stage::Reject);
    let Screen::Reject(reject) = app.screen() else {
        panic!("expected the rejection screen");
    };
    assert_eq!(reject.countdown(), 0);

    advance(&mut app, 100);
    assert_eq!(app.stage(), Stage::Invite);
    assert_eq!(stored_stage(&app).as_deref(), Some("INVITE"));
}

#[test]
fn dismissed_decline_prompt_keeps_signature_screen() {
    let mut app = app_at("SIGN");
    advance(&mut app, 1500);

    app.handle_action(ScreenAction::Cancel);
    app.handle_action(ScreenAction::Decline);

    assert_eq!(app.stage(), Stage::Sign);
    let Screen::Sign(sign) = app.screen() else {
        panic!("expected the signature screen");
    };
    assert!(!sign.is_confirming());
}

#[test]
fn ending_rejection_early_exits_once() {
    let mut app = app_at("REJECT");
    advance(&mut app, 200);
    app.handle_action(ScreenAction::Submit);
    assert_eq!(app.stage(), Stage::Invite);

    // The old countdown was dropped with its screen.
    advance(&mut app, 11_000);
    assert_eq!(app.stage(), Stage::Invite);
    assert_eq!(stored_stage(&app).as_deref(), Some("INVITE"));
}

#[test]
fn reset_from_access_clears_the_stored_stage() {
    let mut app = app_at("ACCESS");
    app.handle_action(ScreenAction::Reset);

    assert_eq!(app.stage(), Stage::Invite);
    assert_eq!(stored_stage(&app), None);
}

#[test]
fn reset_is_honoured_before_access_is_ready() {
    let mut app = app_at("ACCESS");
    advance(&mut app, 600);
    let Screen::Access(access) = app.screen() else {
        panic!("expected the access screen");
    };
    assert!(!access.is_ready());

    assert_eq!(app.reset(), FlowOutcome::Reset { from: Stage::Access });
    assert_eq!(app.stage(), Stage::Invite);
    assert_eq!(stored_stage(&app), None);
}

#[test]
fn events_from_an_unmounted_screen_are_dropped() {
    let mut app = fresh_app();
    let stale = app.screen().mount_id();

    advance(&mut app, 5600);
    app.handle_action(ScreenAction::Submit);
    assert_eq!(app.stage(), Stage::Contract);

    let outcome = app.dispatch(StageComplete::new(stale, Transition::Accept));
    assert_eq!(outcome, FlowOutcome::Ignored);
    assert_eq!(app.stage(), Stage::Contract);
}

#[test]
fn transitions_that_do_not_leave_the_stage_are_ignored() {
    let mut app = fresh_app();
    let current = app.screen().mount_id();

    let outcome = app.dispatch(StageComplete::new(current, Transition::Confirm));

    assert_eq!(outcome, FlowOutcome::Ignored);
    assert_eq!(app.stage(), Stage::Invite);
    assert_eq!(stored_stage(&app), None);
}

#[test]
fn each_stage_change_mounts_a_new_screen() {
    let mut app = fresh_app();
    let first = app.screen().mount_id();

    advance(&mut app, 5600);
    app.handle_action(ScreenAction::Submit);

    assert_ne!(app.screen().mount_id(), first);
    assert_eq!(app.screen().stage(), Stage::Contract);
}
