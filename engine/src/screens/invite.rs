use std::time::Duration;

use ubers_types::{MountId, Transition};

use super::{Completion, ScreenAction, Timed};
use crate::schedule::Schedule;

/// Revealed one by one after the badge.
pub const INVITE_LINES: [&str; 3] = [
    "Você foi convidado a sentar à mesa.",
    "Aqui, decisões valem mais que talento.",
    "Cada movimento tem um preço.",
];

/// Badge first, then each line.
const REVEAL_AT_MS: [u64; 4] = [800, 2000, 3200, 4400];
const BUTTON_DELAY: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, Copy)]
pub(super) enum InviteTask {
    Reveal(usize),
    EnableButton,
}

#[derive(Debug)]
pub struct InviteScreen {
    pub(super) completion: Completion,
    schedule: Schedule<InviteTask>,
    revealed: [bool; 4],
    button_enabled: bool,
}

impl InviteScreen {
    #[must_use]
    pub fn new(mount: MountId) -> Self {
        let mut schedule = Schedule::new();
        for (index, at) in REVEAL_AT_MS.into_iter().enumerate() {
            schedule.after(Duration::from_millis(at), InviteTask::Reveal(index));
        }
        Self {
            completion: Completion::new(mount),
            schedule,
            revealed: [false; 4],
            button_enabled: false,
        }
    }

    pub fn tick(&mut self, delta: Duration) {
        self.advance(delta);
    }

    pub fn handle(&mut self, action: ScreenAction) {
        if action != ScreenAction::Submit || !self.button_enabled {
            return;
        }
        self.button_enabled = false;
        self.completion.emit(Transition::Accept);
    }

    #[must_use]
    pub fn badge_visible(&self) -> bool {
        self.revealed[0]
    }

    pub fn visible_lines(&self) -> impl Iterator<Item = &'static str> + '_ {
        INVITE_LINES
            .iter()
            .zip(&self.revealed[1..])
            .filter(|(_, shown)| **shown)
            .map(|(line, _)| *line)
    }

    #[must_use]
    pub fn button_enabled(&self) -> bool {
        self.button_enabled
    }
}

impl Timed for InviteScreen {
    type Task = InviteTask;

    fn schedule_mut(&mut self) -> &mut Schedule<InviteTask> {
        &mut self.schedule
    }

    fn fire(&mut self, task: InviteTask) {
        match task {
            InviteTask::Reveal(index) => {
                self.revealed[index] = true;
                if index == REVEAL_AT_MS.len() - 1 {
                    self.schedule.after(BUTTON_DELAY, InviteTask::EnableButton);
                }
            }
            InviteTask::EnableButton => self.button_enabled = true,
        }
    }
}
