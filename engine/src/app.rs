//! The application state machine: stage flow plus the mounted screen.

use std::time::{Duration, Instant};

use ubers_config::UbersConfig;
use ubers_types::ui::{AnimPhase, ScreenEffect, UiOptions};
use ubers_types::{MountId, Stage, StageComplete};

use crate::flow::{FlowOutcome, StageFlow};
use crate::screens::{Screen, ScreenAction, ScreenContext};
use crate::store::{KeyValueStore, open_store};

const FADE_IN_DURATION: Duration = Duration::from_millis(1200);

/// Owns the flow controller and exactly one mounted screen.
///
/// The screen is replaced whenever the stage changes; the old screen and all
/// of its pending timers are dropped with it.
#[derive(Debug)]
pub struct App<S: KeyValueStore = Box<dyn KeyValueStore>> {
    flow: StageFlow<S>,
    screen: Screen,
    next_mount: MountId,
    options: UiOptions,
    context: ScreenContext,
    screen_effect: Option<ScreenEffect>,
    should_quit: bool,
    tick_count: usize,
    last_frame: Instant,
}

impl App {
    /// Build from loaded configuration, opening the configured store.
    #[must_use]
    pub fn new(config: Option<&UbersConfig>) -> Self {
        let options = config.map(UbersConfig::ui_options).unwrap_or_default();
        let context = config
            .map(|config| ScreenContext {
                track_length: Duration::from_secs(u64::from(config.track_seconds())),
                initial_volume: config.initial_volume(),
            })
            .unwrap_or_default();
        Self::with_store(open_store(config), options, context)
    }
}

impl<S: KeyValueStore> App<S> {
    pub fn with_store(store: S, options: UiOptions, context: ScreenContext) -> Self {
        let flow = StageFlow::restore(store);
        let mount = MountId::new(0);
        let screen = Screen::mount(flow.stage(), mount, &context);
        tracing::info!(stage = %flow.stage(), "Session started");

        let mut app = Self {
            flow,
            screen,
            next_mount: mount.next(),
            options,
            context,
            screen_effect: None,
            should_quit: false,
            tick_count: 0,
            last_frame: Instant::now(),
        };
        app.start_fade();
        app
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.flow.stage()
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn store(&self) -> &S {
        self.flow.store()
    }

    #[must_use]
    pub fn screen_effect(&self) -> Option<&ScreenEffect> {
        self.screen_effect.as_ref()
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Frames ticked so far; drives spinners.
    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    /// Wall-clock time since the previous call.
    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed
    }

    /// Advance animations and the mounted screen's timers by `delta`, then
    /// deliver any completion the screen produced.
    pub fn tick(&mut self, delta: Duration) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if let Some(effect) = &mut self.screen_effect {
            effect.advance(delta);
            if effect.phase() == AnimPhase::Completed {
                self.screen_effect = None;
            }
        }
        self.screen.tick(delta);
        self.drain_completion();
    }

    pub fn handle_action(&mut self, action: ScreenAction) {
        self.screen.handle(action);
        self.drain_completion();
    }

    /// Apply a completion event. Events from a screen that is no longer
    /// mounted are dropped.
    pub fn dispatch(&mut self, event: StageComplete) -> FlowOutcome {
        if event.mount != self.screen.mount_id() {
            tracing::debug!(
                event_mount = %event.mount,
                current_mount = %self.screen.mount_id(),
                transition = %event.transition,
                "Dropping completion from unmounted screen"
            );
            return FlowOutcome::Ignored;
        }
        let outcome = self.flow.apply(event.transition);
        if outcome != FlowOutcome::Ignored {
            self.remount();
        }
        outcome
    }

    /// Return to the invite and forget the stored stage.
    pub fn reset(&mut self) -> FlowOutcome {
        let outcome = self.flow.reset();
        self.remount();
        outcome
    }

    fn drain_completion(&mut self) {
        if let Some(event) = self.screen.take_completion() {
            self.dispatch(event);
        }
    }

    fn remount(&mut self) {
        let mount = self.next_mount;
        self.next_mount = mount.next();
        self.screen = Screen::mount(self.flow.stage(), mount, &self.context);
        tracing::debug!(stage = %self.flow.stage(), %mount, "Screen mounted");
        self.start_fade();
    }

    fn start_fade(&mut self) {
        self.screen_effect = if self.options.reduced_motion {
            None
        } else {
            Some(ScreenEffect::fade_in(FADE_IN_DURATION))
        };
    }
}
