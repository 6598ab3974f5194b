//! Core engine for Ubers - stage flow, screens and persistence.
//!
//! This crate contains the App state machine without TUI dependencies.
//! Everything is driven by explicit ticks, so the whole experience can be
//! replayed deterministically in tests.

mod app;
mod flow;
mod schedule;
pub mod screens;
mod store;

pub use app::App;
pub use flow::{FlowOutcome, STAGE_KEY, StageFlow};
pub use schedule::{Schedule, TaskId};
pub use screens::{Screen, ScreenAction, ScreenContext, SessionStamp};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError, UnavailableStore, open_store};

pub use ubers_config::UbersConfig;
pub use ubers_types::ui::{AnimPhase, ScreenEffect, ScreenEffectKind, UiOptions};
pub use ubers_types::{MountId, ParseStageError, Stage, StageComplete, Transition};
