//! The five screens, one per stage.
//!
//! A screen is mounted when its stage becomes current and dropped when the
//! stage changes. It owns its delayed effects as a [`Schedule`], so dropping
//! the screen cancels everything still pending. Its only output is a single
//! [`StageComplete`] per mount.

mod access;
mod contract;
mod invite;
mod reject;
mod sign;

use std::time::Duration;

use chrono::{DateTime, Local};

use ubers_types::{MountId, Stage, StageComplete, Transition};

use crate::schedule::Schedule;

pub use access::{ACCESS_STATUS_MESSAGES, AccessScreen, DECODE_STEPS, Playback, format_clock};
pub use contract::{CLAUSES, CONTRACT_STATUS_MESSAGES, Clause, ContractScreen};
pub use invite::{INVITE_LINES, InviteScreen};
pub use reject::{COUNTDOWN_START, RejectScreen};
pub use sign::{DECLINE_PROMPT, MIN_SIGNATURE_CHARS, SignPhase, SignScreen};

/// User intents, already decoded from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    Submit,
    Cancel,
    Confirm,
    Decline,
    Input(char),
    Backspace,
    TogglePlay,
    SeekForward,
    SeekBackward,
    VolumeUp,
    VolumeDown,
    Reset,
}

/// Per-run settings screens need at mount time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenContext {
    pub track_length: Duration,
    pub initial_volume: f32,
}

impl Default for ScreenContext {
    fn default() -> Self {
        Self {
            track_length: Duration::from_secs(94),
            initial_volume: 0.8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompletionState {
    Open,
    Pending(Transition),
    Delivered,
}

/// Guarantees a screen completes at most once per mount.
#[derive(Debug)]
struct Completion {
    mount: MountId,
    state: CompletionState,
}

impl Completion {
    fn new(mount: MountId) -> Self {
        Self {
            mount,
            state: CompletionState::Open,
        }
    }

    /// Record the completion; later calls are ignored.
    fn emit(&mut self, transition: Transition) -> bool {
        if self.state != CompletionState::Open {
            return false;
        }
        self.state = CompletionState::Pending(transition);
        true
    }

    fn is_settled(&self) -> bool {
        self.state != CompletionState::Open
    }

    fn take(&mut self) -> Option<StageComplete> {
        match self.state {
            CompletionState::Pending(transition) => {
                self.state = CompletionState::Delivered;
                Some(StageComplete::new(self.mount, transition))
            }
            CompletionState::Open | CompletionState::Delivered => None,
        }
    }
}

/// Screens driven by a [`Schedule`] of their own task type.
trait Timed {
    type Task;

    fn schedule_mut(&mut self) -> &mut Schedule<Self::Task>;

    fn fire(&mut self, task: Self::Task);

    /// Run every task due within `delta`, in deadline order.
    fn advance(&mut self, delta: Duration) {
        let until = self.schedule_mut().horizon(delta);
        while let Some(task) = self.schedule_mut().pop_due(until) {
            self.fire(task);
        }
        self.schedule_mut().settle(until);
    }
}

/// Wall-clock moment captured at mount, shown in screen footers.
#[derive(Debug, Clone, Copy)]
pub struct SessionStamp {
    at: DateTime<Local>,
}

impl SessionStamp {
    #[must_use]
    pub fn now() -> Self {
        Self { at: Local::now() }
    }

    #[must_use]
    pub fn at(at: DateTime<Local>) -> Self {
        Self { at }
    }

    /// Millisecond timestamp in upper-case base 36.
    #[must_use]
    pub fn code(&self) -> String {
        to_base36(self.millis()).to_ascii_uppercase()
    }

    /// Last six digits of the millisecond timestamp.
    #[must_use]
    pub fn short_code(&self) -> String {
        format!("{:06}", self.millis() % 1_000_000)
    }

    #[must_use]
    pub fn date(&self) -> String {
        self.at.format("%d/%m/%Y").to_string()
    }

    #[must_use]
    pub fn time(&self) -> String {
        self.at.format("%H:%M").to_string()
    }

    /// A four-digit "frequency" derived from the timestamp.
    #[must_use]
    pub fn frequency_khz(&self) -> u64 {
        1000 + self.millis() % 9000
    }

    fn millis(&self) -> u64 {
        u64::try_from(self.at.timestamp_millis()).unwrap_or_default()
    }
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// The mounted screen. Rendering is a total function of this enum.
#[derive(Debug)]
pub enum Screen {
    Invite(InviteScreen),
    Contract(ContractScreen),
    Sign(SignScreen),
    Reject(RejectScreen),
    Access(AccessScreen),
}

impl Screen {
    #[must_use]
    pub fn mount(stage: Stage, mount: MountId, context: &ScreenContext) -> Self {
        match stage {
            Stage::Invite => Screen::Invite(InviteScreen::new(mount)),
            Stage::Contract => Screen::Contract(ContractScreen::new(mount)),
            Stage::Sign => Screen::Sign(SignScreen::new(mount)),
            Stage::Reject => Screen::Reject(RejectScreen::new(mount)),
            Stage::Access => Screen::Access(AccessScreen::new(mount, context)),
        }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        match self {
            Screen::Invite(_) => Stage::Invite,
            Screen::Contract(_) => Stage::Contract,
            Screen::Sign(_) => Stage::Sign,
            Screen::Reject(_) => Stage::Reject,
            Screen::Access(_) => Stage::Access,
        }
    }

    #[must_use]
    pub fn mount_id(&self) -> MountId {
        self.completion().mount
    }

    pub fn tick(&mut self, delta: Duration) {
        match self {
            Screen::Invite(s) => s.tick(delta),
            Screen::Contract(s) => s.tick(delta),
            Screen::Sign(s) => s.tick(delta),
            Screen::Reject(s) => s.tick(delta),
            Screen::Access(s) => s.tick(delta),
        }
    }

    pub fn handle(&mut self, action: ScreenAction) {
        match self {
            Screen::Invite(s) => s.handle(action),
            Screen::Contract(s) => s.handle(action),
            Screen::Sign(s) => s.handle(action),
            Screen::Reject(s) => s.handle(action),
            Screen::Access(s) => s.handle(action),
        }
    }

    /// Whether the screen has already emitted its completion.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.completion().is_settled()
    }

    pub fn take_completion(&mut self) -> Option<StageComplete> {
        self.completion_mut().take()
    }

    fn completion(&self) -> &Completion {
        match self {
            Screen::Invite(s) => &s.completion,
            Screen::Contract(s) => &s.completion,
            Screen::Sign(s) => &s.completion,
            Screen::Reject(s) => &s.completion,
            Screen::Access(s) => &s.completion,
        }
    }

    fn completion_mut(&mut self) -> &mut Completion {
        match self {
            Screen::Invite(s) => &mut s.completion,
            Screen::Contract(s) => &mut s.completion,
            Screen::Sign(s) => &mut s.completion,
            Screen::Reject(s) => &mut s.completion,
            Screen::Access(s) => &mut s.completion,
        }
    }
}
