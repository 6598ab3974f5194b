use std::time::Duration;

use ubers_types::{MountId, Transition};

use super::{Completion, ScreenAction, SessionStamp, Timed};
use crate::schedule::Schedule;

pub const COUNTDOWN_START: u32 = 10;

const REVEAL_DELAY: Duration = Duration::from_millis(500);
const COUNTDOWN_INTERVAL: Duration = Duration::from_millis(1000);
const EXIT_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy)]
pub(super) enum RejectTask {
    ShowElements,
    CountDown,
    Exit,
}

#[derive(Debug)]
pub struct RejectScreen {
    pub(super) completion: Completion,
    schedule: Schedule<RejectTask>,
    stamp: SessionStamp,
    elements_visible: bool,
    countdown: u32,
}

impl RejectScreen {
    #[must_use]
    pub fn new(mount: MountId) -> Self {
        let mut schedule = Schedule::new();
        schedule.after(REVEAL_DELAY, RejectTask::ShowElements);
        schedule.after(COUNTDOWN_INTERVAL, RejectTask::CountDown);
        Self {
            completion: Completion::new(mount),
            schedule,
            stamp: SessionStamp::now(),
            elements_visible: false,
            countdown: COUNTDOWN_START,
        }
    }

    pub fn tick(&mut self, delta: Duration) {
        self.advance(delta);
    }

    pub fn handle(&mut self, action: ScreenAction) {
        if action == ScreenAction::Submit {
            self.exit("explicit");
        }
    }

    fn exit(&mut self, trigger: &'static str) {
        if self.completion.emit(Transition::Exit) {
            self.schedule.cancel_all();
            tracing::debug!(trigger, "Leaving rejection screen");
        }
    }

    #[must_use]
    pub fn elements_visible(&self) -> bool {
        self.elements_visible
    }

    #[must_use]
    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    /// The countdown as a clock face, e.g. `00:07`.
    #[must_use]
    pub fn countdown_label(&self) -> String {
        format!("00:{:02}", self.countdown)
    }

    #[must_use]
    pub fn redirect_label(&self) -> String {
        let plural = if self.countdown == 1 { "" } else { "s" };
        format!(
            "Redirecionamento automático em {} segundo{plural}",
            self.countdown
        )
    }

    #[must_use]
    pub fn stamp(&self) -> SessionStamp {
        self.stamp
    }
}

impl Timed for RejectScreen {
    type Task = RejectTask;

    fn schedule_mut(&mut self) -> &mut Schedule<RejectTask> {
        &mut self.schedule
    }

    fn fire(&mut self, task: RejectTask) {
        match task {
            RejectTask::ShowElements => self.elements_visible = true,
            RejectTask::CountDown => {
                if self.countdown <= 1 {
                    self.countdown = 0;
                    self.schedule.after(EXIT_DELAY, RejectTask::Exit);
                } else {
                    self.countdown -= 1;
                    self.schedule.after(COUNTDOWN_INTERVAL, RejectTask::CountDown);
                }
            }
            RejectTask::Exit => self.exit("timeout"),
        }
    }
}
