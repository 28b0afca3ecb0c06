//! Keyboard input: terminal key events → game keys → per-frame snapshot.
//!
//! Events arrive from the reader thread over a channel and are drained once
//! per frame, so the pressed-key map has a single owner (the frame loop) and
//! needs no locking.
//!
//! Two classes of terminal are supported:
//! * **Keyboard-enhancement capable** (kitty protocol): real `Release` events
//!   remove a key immediately.
//! * **Classic terminals**: only `Press` events, with OS auto-repeat showing
//!   up as more presses.  A key counts as held for a short window after the
//!   last one it produced.

use std::collections::HashMap;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::frames_for;

/// How long a key stays "held" without a fresh press/repeat event.
/// OS key repeat runs at ≥ 15 Hz, so this is refreshed before it expires.
pub const HOLD_TIME: Duration = Duration::from_millis(140);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameKey {
    Left,
    Right,
    Up,
    Fire,
    Start,
    Quit,
}

/// Map a terminal key event to the game key it drives, if any.
pub fn map_key(event: &KeyEvent) -> Option<GameKey> {
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(GameKey::Quit),
            _ => None,
        };
    }
    match event.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameKey::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameKey::Right),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameKey::Up),
        KeyCode::Char(' ') => Some(GameKey::Fire),
        KeyCode::Enter => Some(GameKey::Start),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(GameKey::Quit),
        _ => None,
    }
}

/// Movement keys held during one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

/// Maps each key to the frame it was last seen pressed or repeated.
#[derive(Clone, Debug)]
pub struct PressedKeys {
    last_seen: HashMap<GameKey, u64>,
    hold_window: u64,
}

impl PressedKeys {
    /// `hold_window` is measured in frames.
    pub fn new(hold_window: u64) -> Self {
        PressedKeys {
            last_seen: HashMap::new(),
            hold_window,
        }
    }

    /// Size the hold window to [`HOLD_TIME`] at the given frame cadence.
    pub fn for_cadence(cadence: Duration) -> Self {
        PressedKeys::new(u64::from(frames_for(HOLD_TIME, cadence)))
    }

    pub fn press(&mut self, key: GameKey, frame: u64) {
        self.last_seen.insert(key, frame);
    }

    pub fn release(&mut self, key: GameKey) {
        self.last_seen.remove(&key);
    }

    pub fn is_held(&self, key: GameKey, frame: u64) -> bool {
        self.last_seen
            .get(&key)
            .map(|&last| frame.saturating_sub(last) <= self.hold_window)
            .unwrap_or(false)
    }

    pub fn held(&self, frame: u64) -> HeldKeys {
        HeldKeys {
            left: self.is_held(GameKey::Left, frame),
            right: self.is_held(GameKey::Right, frame),
            up: self.is_held(GameKey::Up, frame),
        }
    }

    /// Record one terminal event.  Returns the key when the event is a press
    /// or an auto-repeat, which is what one-shot actions react to.
    pub fn apply_event(&mut self, event: &Event, frame: u64) -> Option<GameKey> {
        let Event::Key(key_event) = event else {
            return None;
        };
        let key = map_key(key_event)?;
        match key_event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.press(key, frame);
                Some(key)
            }
            KeyEventKind::Release => {
                self.release(key);
                None
            }
        }
    }
}

impl Default for PressedKeys {
    fn default() -> Self {
        PressedKeys::for_cadence(crate::config::FRAME_CADENCE)
    }
}

/// Everything the frame loop needs to know about input for one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Keys pressed or auto-repeated since the last frame, in arrival order.
    pub pressed: Vec<GameKey>,
    pub held: HeldKeys,
}

impl FrameInput {
    pub fn wants(&self, key: GameKey) -> bool {
        self.pressed.contains(&key)
    }
}

/// Drain every pending event without blocking and snapshot the result.
pub fn collect_frame_input(rx: &Receiver<Event>, keys: &mut PressedKeys, frame: u64) -> FrameInput {
    let mut pressed = Vec::new();
    while let Ok(event) = rx.try_recv() {
        if let Some(key) = keys.apply_event(&event, frame) {
            pressed.push(key);
        }
    }
    FrameInput {
        pressed,
        held: keys.held(frame),
    }
}
