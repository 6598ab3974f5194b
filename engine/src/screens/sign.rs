use std::time::Duration;

use unicode_segmentation::UnicodeSegmentation;

use ubers_types::ui::{AnimPhase, ScreenEffect};
use ubers_types::{MountId, Transition};

use super::{Completion, ScreenAction, SessionStamp, Timed};
use crate::schedule::{Schedule, TaskId};

pub const MIN_SIGNATURE_CHARS: usize = 3;

pub const DECLINE_PROMPT: &str =
    "Você tem certeza que deseja recusar o contrato? Esta ação é irreversível.";

const INTRO_DURATION: Duration = Duration::from_millis(1500);
const READY_DELAY: Duration = Duration::from_millis(300);
const WARNING_DELAY: Duration = Duration::from_millis(800);
const SHAKE_DURATION: Duration = Duration::from_millis(500);
const MAX_SIGNATURE_CHARS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignPhase {
    /// Title card; the signature field is not shown yet.
    Intro,
    Input,
    /// Entered once the name has been long enough for a moment. Never left.
    Ready,
}

#[derive(Debug, Clone, Copy)]
pub(super) enum SignTask {
    EndIntro,
    MarkReady,
    ShowWarning,
}

#[derive(Debug)]
pub struct SignScreen {
    pub(super) completion: Completion,
    schedule: Schedule<SignTask>,
    stamp: SessionStamp,
    phase: SignPhase,
    name: String,
    ready_task: Option<TaskId>,
    warning_task: Option<TaskId>,
    warning_visible: bool,
    shake: Option<ScreenEffect>,
    confirming: bool,
}

impl SignScreen {
    #[must_use]
    pub fn new(mount: MountId) -> Self {
        let mut schedule = Schedule::new();
        schedule.after(INTRO_DURATION, SignTask::EndIntro);
        Self {
            completion: Completion::new(mount),
            schedule,
            stamp: SessionStamp::now(),
            phase: SignPhase::Intro,
            name: String::new(),
            ready_task: None,
            warning_task: None,
            warning_visible: false,
            shake: None,
            confirming: false,
        }
    }

    pub fn tick(&mut self, delta: Duration) {
        self.advance(delta);
        if let Some(shake) = &mut self.shake {
            shake.advance(delta);
            if shake.phase() == AnimPhase::Completed {
                self.shake = None;
            }
        }
    }

    pub fn handle(&mut self, action: ScreenAction) {
        if self.completion.is_settled() {
            return;
        }
        if self.confirming {
            self.handle_prompt(action);
            return;
        }
        match action {
            ScreenAction::Input(c) => self.push_char(c),
            ScreenAction::Backspace => self.pop_grapheme(),
            ScreenAction::Submit => self.submit(),
            ScreenAction::Cancel if self.phase != SignPhase::Intro => self.confirming = true,
            _ => {}
        }
    }

    fn handle_prompt(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::Confirm | ScreenAction::Submit => {
                self.confirming = false;
                if self.completion.emit(Transition::Cancel) {
                    tracing::debug!("Contract declined at signature");
                }
            }
            ScreenAction::Decline | ScreenAction::Cancel => self.confirming = false,
            _ => {}
        }
    }

    fn submit(&mut self) {
        if self.phase == SignPhase::Intro {
            return;
        }
        if !self.can_sign() {
            self.shake = Some(ScreenEffect::shake(SHAKE_DURATION));
            return;
        }
        if self.completion.emit(Transition::Confirm) {
            tracing::debug!(chars = self.name_len(), "Contract signed");
        }
    }

    fn push_char(&mut self, c: char) {
        if self.phase == SignPhase::Intro || c.is_control() {
            return;
        }
        if self.name.chars().count() >= MAX_SIGNATURE_CHARS {
            return;
        }
        let before = self.name_len();
        self.name.push(c);
        self.name_changed(before);
    }

    fn pop_grapheme(&mut self) {
        if self.phase == SignPhase::Intro {
            return;
        }
        let Some((offset, _)) = self.name.grapheme_indices(true).next_back() else {
            return;
        };
        let before = self.name_len();
        self.name.truncate(offset);
        self.name_changed(before);
    }

    fn name_changed(&mut self, before: usize) {
        let len = self.name_len();

        if self.phase == SignPhase::Input {
            if let Some(id) = self.ready_task.take() {
                self.schedule.cancel(id);
            }
            if len >= MIN_SIGNATURE_CHARS {
                self.ready_task = Some(self.schedule.after(READY_DELAY, SignTask::MarkReady));
            }
        }

        if len == before {
            return;
        }
        if let Some(id) = self.warning_task.take() {
            self.schedule.cancel(id);
        }
        match len {
            0 => self.warning_visible = false,
            1 => self.warning_task = Some(self.schedule.after(WARNING_DELAY, SignTask::ShowWarning)),
            _ => {}
        }
    }

    #[must_use]
    pub fn phase(&self) -> SignPhase {
        self.phase
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length of the name in user-perceived characters.
    #[must_use]
    pub fn name_len(&self) -> usize {
        self.name.graphemes(true).count()
    }

    #[must_use]
    pub fn can_sign(&self) -> bool {
        self.name.trim().graphemes(true).count() >= MIN_SIGNATURE_CHARS
    }

    #[must_use]
    pub fn warning_visible(&self) -> bool {
        self.warning_visible
    }

    #[must_use]
    pub fn shake(&self) -> Option<&ScreenEffect> {
        self.shake.as_ref()
    }

    #[must_use]
    pub fn is_confirming(&self) -> bool {
        self.confirming
    }

    #[must_use]
    pub fn stamp(&self) -> SessionStamp {
        self.stamp
    }
}

impl Timed for SignScreen {
    type Task = SignTask;

    fn schedule_mut(&mut self) -> &mut Schedule<SignTask> {
        &mut self.schedule
    }

    fn fire(&mut self, task: SignTask) {
        match task {
            SignTask::EndIntro => self.phase = SignPhase::Input,
            SignTask::MarkReady => {
                self.ready_task = None;
                if self.phase == SignPhase::Input {
                    self.phase = SignPhase::Ready;
                }
            }
            SignTask::ShowWarning => {
                self.warning_task = None;
                self.warning_visible = true;
            }
        }
    }
}
