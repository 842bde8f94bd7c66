/// All game entity types — plain data plus a few geometry accessors.

use crate::config::{ArenaConfig, PlatformerConfig};

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in logical screen pixels (y grows downwards).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Move the rectangle vertically so its bottom edge sits at `y`.
    pub fn set_bottom(&mut self, y: f32) {
        self.y = y - self.h;
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

// ── Game phase ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Menu,
    Playing,
    Paused,
    GameOver,
    Win,
}

/// Events that can move a game from one `Phase` to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// ENTER.
    Confirm,
    /// ESCAPE.
    TogglePause,
    LivesExhausted,
    CoinsExhausted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Classic,
    Deluxe,
}

// ── Platformer entities ───────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub vel_y: f32,
    pub on_ground: bool,
    pub lives: u32,
    pub score: u32,
}

/// A patrolling enemy.  Never removed, even after it hurts the player.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub rect: Rect,
    /// +1 = right, -1 = left.
    pub direction: i8,
    pub speed: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Platform {
    pub rect: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Coin {
    pub rect: Rect,
    /// Bounce phase in radians; only affects where the coin is drawn.
    pub bounce: f32,
}

/// Decorative cloud; `x` is fractional so slow drift stays smooth.
#[derive(Clone, Debug, PartialEq)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
}

/// Everything one platformer game owns.  Cloneable so pure update functions
/// can return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct PlatformerState {
    pub variant: Variant,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    pub clouds: Vec<Cloud>,
    pub phase: Phase,
    pub frame: u64,
    pub config: PlatformerConfig,
}

// ── Arena entities ────────────────────────────────────────────────────────────

/// The arena player, stored by centre.
#[derive(Clone, Debug, PartialEq)]
pub struct Runner {
    pub x: f32,
    pub y: f32,
}

/// A homing enemy, stored by centre.  Its speed is fixed at spawn time.
#[derive(Clone, Debug, PartialEq)]
pub struct Hunter {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
}

#[derive(Clone, Debug)]
pub struct ArenaState {
    pub player: Runner,
    pub enemies: Vec<Hunter>,
    /// Speed the next spawned hunter will get.
    pub enemy_speed: f32,
    /// Number of hunters spawned so far.
    pub spawned: u32,
    pub phase: Phase,
    pub frame: u64,
    pub config: ArenaConfig,
}
