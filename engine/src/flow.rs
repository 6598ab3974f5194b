//! The stage controller: a five-state machine with one persisted slot.

use ubers_types::{Stage, Transition};

use crate::store::KeyValueStore;

/// Key under which the current stage is persisted.
pub const STAGE_KEY: &str = "ubers_contract_stage";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    Advanced { from: Stage, to: Stage },
    Reset { from: Stage },
    /// Not an outgoing edge of the current stage; nothing changed.
    Ignored,
}

impl FlowOutcome {
    #[must_use]
    pub fn changed_stage(self) -> bool {
        match self {
            FlowOutcome::Advanced { from, to } => from != to,
            FlowOutcome::Reset { from } => from != Stage::Invite,
            FlowOutcome::Ignored => false,
        }
    }
}

/// Owns the current stage and keeps the store in step with it.
///
/// Every transition performs exactly one store write. Store failures never
/// surface: reads fall back to [`Stage::Invite`] and failed writes leave the
/// in-memory stage authoritative.
#[derive(Debug)]
pub struct StageFlow<S> {
    stage: Stage,
    store: S,
}

impl<S: KeyValueStore> StageFlow<S> {
    /// Resume from the stored stage, or start at the invite.
    pub fn restore(store: S) -> Self {
        let stage = match store.get(STAGE_KEY) {
            Ok(Some(raw)) => raw.parse::<Stage>().unwrap_or_default(),
            Ok(None) | Err(_) => Stage::default(),
        };
        Self { stage, store }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply a screen's completion.
    ///
    /// `Reset` is honoured from every stage; any other transition must be an
    /// outgoing edge of the current stage or it is ignored.
    pub fn apply(&mut self, transition: Transition) -> FlowOutcome {
        if transition == Transition::Reset {
            return self.reset();
        }
        if !transition.leaves(self.stage) {
            tracing::debug!(
                stage = %self.stage,
                %transition,
                "Ignoring transition that does not leave the current stage"
            );
            return FlowOutcome::Ignored;
        }

        let from = self.stage;
        let to = transition.target();
        self.stage = to;
        self.persist();
        tracing::info!(%from, %to, %transition, "Stage advanced");
        FlowOutcome::Advanced { from, to }
    }

    /// Clear the stored stage and return to the invite, whatever the current stage.
    pub fn reset(&mut self) -> FlowOutcome {
        let from = self.stage;
        if let Err(e) = self.store.remove(STAGE_KEY) {
            tracing::warn!("Failed to clear stored stage: {e}");
        }
        self.stage = Stage::Invite;
        tracing::info!(%from, "Experience reset");
        FlowOutcome::Reset { from }
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.set(STAGE_KEY, self.stage.as_str()) {
            tracing::warn!(stage = %self.stage, "Failed to persist stage: {e}");
        }
    }
}
