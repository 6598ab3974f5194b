//! Core domain types for Ubers.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod ids;
mod stage;
mod transition;
pub mod ui;

pub use ids::MountId;
pub use stage::{ParseStageError, Stage};
pub use transition::{StageComplete, Transition};
