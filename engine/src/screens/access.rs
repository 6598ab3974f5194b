use std::time::Duration;

use ubers_types::{MountId, Transition};

use super::{Completion, ScreenAction, ScreenContext, SessionStamp, Timed};
use crate::schedule::Schedule;

pub const DECODE_STEPS: u32 = 12;

pub const ACCESS_STATUS_MESSAGES: [&str; 5] = [
    "Estabelecendo canal seguro…",
    "Validando credenciais…",
    "Decodificando transmissão…",
    "Sincronizando frequências…",
    "Canal seguro estabelecido",
];

const DECODE_INTERVAL: Duration = Duration::from_millis(600);
const READY_DELAY: Duration = Duration::from_millis(500);
const SEEK_STEP: Duration = Duration::from_secs(5);
const VOLUME_STEP: f32 = 0.1;

/// Format as `m:ss`, truncating fractional seconds.
#[must_use]
pub fn format_clock(time: Duration) -> String {
    let secs = time.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// The simulated transmission. No audio device is involved; position only
/// moves while playing and the screen is ticked.
#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    length: Duration,
    position: Duration,
    volume: f32,
    playing: bool,
}

impl Playback {
    #[must_use]
    pub fn new(length: Duration, volume: f32) -> Self {
        Self {
            length,
            position: Duration::ZERO,
            volume: volume.clamp(0.0, 1.0),
            playing: false,
        }
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Move the play head; reaching the end stops and rewinds.
    pub fn advance(&mut self, delta: Duration) {
        if !self.playing {
            return;
        }
        self.position = self.position.saturating_add(delta);
        if self.position >= self.length {
            self.playing = false;
            self.position = Duration::ZERO;
        }
    }

    pub fn seek_forward(&mut self) {
        self.position = self.position.saturating_add(SEEK_STEP).min(self.length);
    }

    pub fn seek_backward(&mut self) {
        self.position = self.position.saturating_sub(SEEK_STEP);
    }

    pub fn volume_up(&mut self) {
        self.set_volume(self.volume + VOLUME_STEP);
    }

    pub fn volume_down(&mut self) {
        self.set_volume(self.volume - VOLUME_STEP);
    }

    fn set_volume(&mut self, volume: f32) {
        // Round to a tenth so repeated steps land exactly on 0.0 and 1.0.
        self.volume = ((volume * 10.0).round() / 10.0).clamp(0.0, 1.0);
    }

    #[must_use]
    pub fn length(&self) -> Duration {
        self.length
    }

    #[must_use]
    pub fn position(&self) -> Duration {
        self.position
    }

    #[must_use]
    pub fn volume(&self) -> f32 {
        self.volume
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Fraction of the track already played.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.length.is_zero() {
            return 0.0;
        }
        (self.position.as_secs_f64() / self.length.as_secs_f64()).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy)]
pub(super) enum AccessTask {
    DecodeStep,
    Ready,
}

#[derive(Debug)]
pub struct AccessScreen {
    pub(super) completion: Completion,
    schedule: Schedule<AccessTask>,
    stamp: SessionStamp,
    step: u32,
    status_index: usize,
    ready: bool,
    playback: Playback,
}

impl AccessScreen {
    #[must_use]
    pub fn new(mount: MountId, context: &ScreenContext) -> Self {
        let mut schedule = Schedule::new();
        schedule.after(DECODE_INTERVAL, AccessTask::DecodeStep);
        Self {
            completion: Completion::new(mount),
            schedule,
            stamp: SessionStamp::now(),
            step: 0,
            status_index: 0,
            ready: false,
            playback: Playback::new(context.track_length, context.initial_volume),
        }
    }

    pub fn tick(&mut self, delta: Duration) {
        self.advance(delta);
        self.playback.advance(delta);
    }

    pub fn handle(&mut self, action: ScreenAction) {
        if action == ScreenAction::Reset {
            if self.completion.emit(Transition::Reset) {
                tracing::debug!("Reset requested from access screen");
            }
            return;
        }
        if !self.ready {
            return;
        }
        match action {
            ScreenAction::TogglePlay => self.playback.toggle(),
            ScreenAction::SeekForward => self.playback.seek_forward(),
            ScreenAction::SeekBackward => self.playback.seek_backward(),
            ScreenAction::VolumeUp => self.playback.volume_up(),
            ScreenAction::VolumeDown => self.playback.volume_down(),
            _ => {}
        }
    }

    /// Decoding progress in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        f64::from(self.step) / f64::from(DECODE_STEPS)
    }

    #[must_use]
    pub fn status_text(&self) -> &'static str {
        ACCESS_STATUS_MESSAGES[self.status_index]
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[must_use]
    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    #[must_use]
    pub fn stamp(&self) -> SessionStamp {
        self.stamp
    }
}

impl Timed for AccessScreen {
    type Task = AccessTask;

    fn schedule_mut(&mut self) -> &mut Schedule<AccessTask> {
        &mut self.schedule
    }

    fn fire(&mut self, task: AccessTask) {
        match task {
            AccessTask::DecodeStep => {
                self.step += 1;
                self.status_index = match self.step {
                    0..=3 => 1,
                    4..=6 => 2,
                    7..=9 => 3,
                    DECODE_STEPS => 4,
                    _ => self.status_index,
                };
                if self.step < DECODE_STEPS {
                    self.schedule.after(DECODE_INTERVAL, AccessTask::DecodeStep);
                } else {
                    self.schedule.after(READY_DELAY, AccessTask::Ready);
                }
            }
            AccessTask::Ready => {
                self.ready = true;
                tracing::debug!("Transmission ready");
            }
        }
    }
}
