/// Held-key tracking on top of terminal key events.
///
/// Terminals report key events, not which keys are down right now.
/// `KeyTracker` rebuilds that state from the event stream in one of two modes:
/// * **Release-aware**: the terminal reports `Release` (and `Repeat`) events,
///   so a key stays held from its `Press` until its `Release`.
/// * **Fallback**: only `Press` events arrive, OS auto-repeat included.  A key
///   counts as held for `HOLD_WINDOW` frames after its latest press.
///
/// The tracker switches to release-aware mode on the first `Release` or
/// `Repeat` event it sees; the driver can also enable it up front.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEventKind};

/// Fallback mode only: frames a key stays held after its latest press.
/// 8 frames @ 60 FPS ≈ 133 ms, which covers the gap between two OS
/// auto-repeats but not the longer delay before the first one.
pub const HOLD_WINDOW: u64 = 8;

#[derive(Debug, Default)]
pub struct KeyTracker {
    last_seen: HashMap<KeyCode, u64>,
    frame: u64,
    release_events: bool,
}

impl KeyTracker {
    /// A tracker in fallback mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// A tracker that trusts `Release` events from the first frame on.
    pub fn with_release_events() -> Self {
        Self {
            release_events: true,
            ..Self::default()
        }
    }

    pub fn release_events(&self) -> bool {
        self.release_events
    }

    /// Start a new frame; call once per tick before feeding its events.
    pub fn next_frame(&mut self) {
        self.frame += 1;
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Feed one key event.  Returns `true` for a fresh press, which is what
    /// one-shot actions (pause, confirm, quit) react to.
    pub fn record(&mut self, code: KeyCode, kind: KeyEventKind) -> bool {
        let code = normalize(code);
        match kind {
            KeyEventKind::Press => {
                self.last_seen.insert(code, self.frame);
                true
            }
            KeyEventKind::Repeat => {
                self.release_events = true;
                self.last_seen.insert(code, self.frame);
                false
            }
            KeyEventKind::Release => {
                self.release_events = true;
                self.last_seen.remove(&code);
                false
            }
        }
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        match self.last_seen.get(&normalize(key)) {
            Some(_) if self.release_events => true,
            Some(&last) => self.frame.saturating_sub(last) <= HOLD_WINDOW,
            None => false,
        }
    }

    pub fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|&k| self.is_held(k))
    }
}

/// Letters are tracked case-insensitively so Shift or Caps Lock don't matter.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

// ── Per-game input snapshots ──────────────────────────────────────────────────

const LEFT_KEYS: [KeyCode; 2] = [KeyCode::Char('a'), KeyCode::Left];
const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::Char('d'), KeyCode::Right];
const UP_KEYS: [KeyCode; 2] = [KeyCode::Char('w'), KeyCode::Up];
const DOWN_KEYS: [KeyCode; 2] = [KeyCode::Char('s'), KeyCode::Down];

/// Platformer controls: A/D to walk, Space to jump.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PadInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl PadInput {
    pub fn sample(keys: &KeyTracker) -> Self {
        Self {
            left: keys.any_held(&LEFT_KEYS),
            right: keys.any_held(&RIGHT_KEYS),
            jump: keys.is_held(KeyCode::Char(' ')),
        }
    }
}

/// Arena controls: WASD in four directions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl StickInput {
    pub fn sample(keys: &KeyTracker) -> Self {
        Self {
            up: keys.any_held(&UP_KEYS),
            down: keys.any_held(&DOWN_KEYS),
            left: keys.any_held(&LEFT_KEYS),
            right: keys.any_held(&RIGHT_KEYS),
        }
    }

    /// Signed unit steps per axis; opposite keys cancel out.
    pub fn axis(&self) -> (f32, f32) {
        let step = |neg: bool, pos: bool| pos as i8 as f32 - neg as i8 as f32;
        (step(self.left, self.right), step(self.up, self.down))
    }
}
