//! Input handling for the Ubers TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;

use ubers_engine::screens::SignPhase;
use ubers_engine::{App, KeyValueStore, Screen, ScreenAction};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking task and hands them to the frame loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close first so a sender blocked on capacity wakes up.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// What a key press means for the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Quit,
    Screen(ScreenAction),
}

/// Drain pending terminal events into `app`. Returns `true` once the app
/// should quit.
pub fn handle_events<S: KeyValueStore>(app: &mut App<S>, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };
        apply_event(app, ev);
        if app.should_quit() {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Apply a single terminal event. Exposed for driving the app in tests.
pub fn apply_event<S: KeyValueStore>(app: &mut App<S>, event: Event) {
    match event {
        Event::Key(key) => {
            if matches!(key.kind, KeyEventKind::Release) {
                return;
            }
            match map_key(app.screen(), key) {
                Some(KeyCommand::Quit) => app.request_quit(),
                Some(KeyCommand::Screen(action)) => app.handle_action(action),
                None => {}
            }
        }
        Event::Paste(text) => {
            if accepts_text(app.screen()) {
                for c in text.chars().filter(|c| !c.is_control()) {
                    app.handle_action(ScreenAction::Input(c));
                }
            }
        }
        _ => {}
    }
}

/// Translate a key press for `screen`.
#[must_use]
pub fn map_key(screen: &Screen, key: KeyEvent) -> Option<KeyCommand> {
    // AltGr arrives as CONTROL | ALT and produces ordinary characters.
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::ALT)
    {
        return match key.code {
            KeyCode::Char('c' | 'q') => Some(KeyCommand::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Enter => ScreenAction::Submit,
        KeyCode::Esc => ScreenAction::Cancel,
        code => match screen {
            Screen::Sign(sign) if sign.is_confirming() => match code {
                KeyCode::Char('y' | 'Y' | 's' | 'S') => ScreenAction::Confirm,
                KeyCode::Char('n' | 'N') => ScreenAction::Decline,
                _ => return None,
            },
            Screen::Sign(_) if accepts_text(screen) => match code {
                KeyCode::Char(c) => ScreenAction::Input(c),
                KeyCode::Backspace => ScreenAction::Backspace,
                _ => return None,
            },
            Screen::Access(_) => match code {
                KeyCode::Char(' ') => ScreenAction::TogglePlay,
                KeyCode::Right => ScreenAction::SeekForward,
                KeyCode::Left => ScreenAction::SeekBackward,
                KeyCode::Up => ScreenAction::VolumeUp,
                KeyCode::Down => ScreenAction::VolumeDown,
                KeyCode::Char('r' | 'R') => ScreenAction::Reset,
                _ => return None,
            },
            _ => return None,
        },
    };
    Some(KeyCommand::Screen(action))
}

fn accepts_text(screen: &Screen) -> bool {
    matches!(screen, Screen::Sign(sign) if sign.phase() != SignPhase::Intro && !sign.is_confirming())
}
