//! Shared test utilities and fixtures
//!
//! Drives an [`App`] the way the frame loop does: small fixed ticks so a
//! completion produced in one frame is delivered before the next screen's
//! timers start running.

#![allow(dead_code)]

use std::time::Duration;

use ubers_engine::{App, KeyValueStore, MemoryStore, STAGE_KEY, ScreenAction, ScreenContext};
use ubers_types::ui::UiOptions;

pub const FRAME: Duration = Duration::from_millis(50);

pub fn reduced_motion() -> UiOptions {
    UiOptions {
        reduced_motion: true,
        ..UiOptions::default()
    }
}

pub fn app_with<S: KeyValueStore>(store: S) -> App<S> {
    App::with_store(store, reduced_motion(), ScreenContext::default())
}

pub fn fresh_app() -> App<MemoryStore> {
    app_with(MemoryStore::new())
}

pub fn app_at(stored: &str) -> App<MemoryStore> {
    app_with(MemoryStore::with_entry(STAGE_KEY, stored))
}

/// Advance `ms` milliseconds of wall time in frame-sized ticks.
pub fn advance<S: KeyValueStore>(app: &mut App<S>, ms: u64) {
    let mut remaining = Duration::from_millis(ms);
    while !remaining.is_zero() {
        let step = remaining.min(FRAME);
        app.tick(step);
        remaining -= step;
    }
}

pub fn type_text<S: KeyValueStore>(app: &mut App<S>, text: &str) {
    for c in text.chars() {
        app.handle_action(ScreenAction::Input(c));
    }
}

pub fn stored_stage<S: KeyValueStore>(app: &App<S>) -> Option<String> {
    app.store()
        .get(STAGE_KEY)
        .expect("store read should succeed")
}
