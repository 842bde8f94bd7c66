/// Adapters plugging each game's pure state functions into the frame driver.

use std::io::{self, Write};

use crossterm::event::KeyCode;
use rand::Rng;

use crate::arena;
use crate::compute::{animate, apply_input, init_classic, init_deluxe, press, tick};
use crate::config::ArenaConfig;
use crate::display::{render_arena, render_platformer};
use crate::driver::{Flow, Game};
use crate::entities::{ArenaState, Phase, PlatformerState, Trigger};
use crate::input::{KeyTracker, PadInput, StickInput};

// ── Platformers ───────────────────────────────────────────────────────────────

pub struct PlatformerGame {
    pub state: PlatformerState,
}

impl PlatformerGame {
    pub fn classic(rng: &mut impl Rng) -> Self {
        Self {
            state: init_classic(rng),
        }
    }

    pub fn deluxe(rng: &mut impl Rng) -> Self {
        Self {
            state: init_deluxe(rng),
        }
    }
}

impl Game for PlatformerGame {
    fn on_key(&mut self, key: KeyCode) -> Flow {
        match key {
            KeyCode::Enter => self.state = press(&self.state, Trigger::Confirm),
            KeyCode::Esc => self.state = press(&self.state, Trigger::TogglePause),
            _ => {}
        }
        Flow::Continue
    }

    fn update<R: Rng>(&mut self, keys: &KeyTracker, rng: &mut R) {
        let state = apply_input(&self.state, &PadInput::sample(keys));
        let state = tick(&state, rng);
        self.state = animate(&state);
    }

    fn render<W: Write>(&self, out: &mut W, cols: u16, rows: u16) -> io::Result<()> {
        render_platformer(out, &self.state, cols, rows)
    }
}

// ── Survival arena ────────────────────────────────────────────────────────────

pub struct ArenaGame {
    pub state: ArenaState,
}

impl ArenaGame {
    pub fn new(config: ArenaConfig) -> Self {
        Self {
            state: arena::init_arena(config),
        }
    }
}

impl Game for ArenaGame {
    /// ESC leaves the game once it is over; during play it does nothing.
    fn on_key(&mut self, key: KeyCode) -> Flow {
        if key == KeyCode::Esc && self.state.phase == Phase::GameOver {
            Flow::Quit
        } else {
            Flow::Continue
        }
    }

    fn update<R: Rng>(&mut self, keys: &KeyTracker, rng: &mut R) {
        let state = arena::apply_input(&self.state, &StickInput::sample(keys));
        self.state = arena::tick(&state, rng);
    }

    fn render<W: Write>(&self, out: &mut W, cols: u16, rows: u16) -> io::Result<()> {
        render_arena(out, &self.state, cols, rows)
    }
}
