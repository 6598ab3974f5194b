//! Stage persistence across restarts, using the on-disk store.

use std::fs;

use tempfile::tempdir;
use ubers_engine::{App, FileStore, ScreenAction, Stage, UbersConfig};

use crate::common::{advance, app_with, stored_stage};

#[test]
fn stage_survives_a_restart() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("state.json");

    let mut app = app_with(FileStore::open(&path));
    advance(&mut app, 5600);
    app.handle_action(ScreenAction::Submit);
    assert_eq!(app.stage(), Stage::Contract);
    drop(app);

    let restarted = app_with(FileStore::open(&path));
    assert_eq!(restarted.stage(), Stage::Contract);
    assert_eq!(stored_stage(&restarted).as_deref(), Some("CONTRACT"));
}

#[test]
fn state_file_holds_the_stage_key() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("state.json");

    let mut app = app_with(FileStore::open(&path));
    advance(&mut app, 5600);
    app.handle_action(ScreenAction::Submit);

    let raw = fs::read_to_string(&path).expect("state file written");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(json["ubers_contract_stage"], "CONTRACT");
}

#[test]
fn reset_removes_the_state_file_entry() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("state.json");
    fs::write(&path, r#"{"ubers_contract_stage":"ACCESS"}"#).expect("seed state");

    let mut app = app_with(FileStore::open(&path));
    assert_eq!(app.stage(), Stage::Access);
    app.handle_action(ScreenAction::Reset);

    assert_eq!(app.stage(), Stage::Invite);
    assert_eq!(stored_stage(&app), None);
    drop(app);

    let restarted = app_with(FileStore::open(&path));
    assert_eq!(restarted.stage(), Stage::Invite);
}

#[test]
fn corrupt_state_file_starts_at_invite_and_recovers() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("state.json");
    fs::write(&path, "{ not json").expect("seed state");

    let mut app = app_with(FileStore::open(&path));
    assert_eq!(app.stage(), Stage::Invite);

    advance(&mut app, 5600);
    app.handle_action(ScreenAction::Submit);
    assert_eq!(stored_stage(&app).as_deref(), Some("CONTRACT"));
}

#[test]
fn reset_deletes_a_corrupt_state_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("state.json");
    fs::write(&path, "{ not json").expect("seed state");

    let mut app = app_with(FileStore::open(&path));
    app.reset();

    assert!(!path.exists());
    assert_eq!(stored_stage(&app), None);
}

#[test]
fn configured_state_path_is_used() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("custom.json");
    fs::write(&path, r#"{"ubers_contract_stage":"REJECT"}"#).expect("seed state");

    let toml = format!(
        "[app]\nreduced_motion = true\n\n[storage]\nbackend = \"file\"\npath = '{}'\n",
        path.display()
    );
    let config = UbersConfig::parse(&toml).expect("valid config");
    let app = App::new(Some(&config));

    assert_eq!(app.stage(), Stage::Reject);
    assert!(app.options().reduced_motion);
}

#[test]
fn memory_backend_never_touches_disk() {
    let config = UbersConfig::parse("[storage]\nbackend = \"memory\"\n").expect("valid config");
    let mut app = App::new(Some(&config));
    assert_eq!(app.stage(), Stage::Invite);

    advance(&mut app, 5600);
    app.handle_action(ScreenAction::Submit);
    assert_eq!(app.stage(), Stage::Contract);
    assert_eq!(stored_stage(&app).as_deref(), Some("CONTRACT"));
}
