//! Stage transitions and the completion event screens emit.

use std::fmt;

use crate::{MountId, Stage};

/// A controller-mediated move between stages.
///
/// Each variant names the completion a screen signals. The edge table is
/// fixed: a transition is only valid from its [`Transition::source`] stage,
/// except [`Transition::Reset`], which the controller honours from any stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Invite accepted.
    Accept,
    /// Every contract clause acknowledged.
    Acknowledge,
    /// Signature confirmed.
    Confirm,
    /// Signature refused.
    Cancel,
    /// Rejection countdown elapsed, or the user left early.
    Exit,
    /// Explicit "reset experience".
    Reset,
}

impl Transition {
    pub const ALL: [Transition; 6] = [
        Transition::Accept,
        Transition::Acknowledge,
        Transition::Confirm,
        Transition::Cancel,
        Transition::Exit,
        Transition::Reset,
    ];

    /// The stage this transition leaves from in the normal flow.
    #[must_use]
    pub const fn source(self) -> Stage {
        match self {
            Transition::Accept => Stage::Invite,
            Transition::Acknowledge => Stage::Contract,
            Transition::Confirm | Transition::Cancel => Stage::Sign,
            Transition::Exit => Stage::Reject,
            Transition::Reset => Stage::Access,
        }
    }

    #[must_use]
    pub const fn target(self) -> Stage {
        match self {
            Transition::Accept => Stage::Contract,
            Transition::Acknowledge => Stage::Sign,
            Transition::Confirm => Stage::Access,
            Transition::Cancel => Stage::Reject,
            Transition::Exit | Transition::Reset => Stage::Invite,
        }
    }

    /// Whether this is an outgoing edge of `stage`.
    #[must_use]
    pub fn leaves(self, stage: Stage) -> bool {
        self.source() == stage
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Transition::Accept => "accept",
            Transition::Acknowledge => "acknowledge",
            Transition::Confirm => "confirm",
            Transition::Cancel => "cancel",
            Transition::Exit => "exit",
            Transition::Reset => "reset",
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single "stage complete" event every screen emits.
///
/// Carries the mount that produced it so the controller can drop events from
/// screens that are no longer mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageComplete {
    pub mount: MountId,
    pub transition: Transition,
}

impl StageComplete {
    #[must_use]
    pub const fn new(mount: MountId, transition: Transition) -> Self {
        Self { mount, transition }
    }
}
