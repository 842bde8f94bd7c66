/// Tunables for every game, grouped per game.  Nothing here is read from
/// disk: the defaults are the values the games ship with.

use crate::entities::Rect;

/// An RGB colour triple.
pub type Rgb = (u8, u8, u8);

// ── Shared palette ────────────────────────────────────────────────────────────

pub const SKY_TOP: Rgb = (120, 190, 255);
pub const WHITE: Rgb = (255, 255, 255);
pub const BRICK: Rgb = (170, 90, 60);
pub const COIN_GOLD: Rgb = (255, 215, 0);

// ── Platformer ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct PlatformerConfig {
    pub width: f32,
    pub height: f32,
    /// Player rectangle at level start (and the respawn point after a hit).
    pub spawn: Rect,
    /// Horizontal pixels per frame while A/D is held.
    pub speed: f32,
    /// Vertical velocity set on jump (negative = upwards).
    pub jump_impulse: f32,
    /// Added to the vertical velocity every frame.
    pub gravity: f32,
    pub lives: u32,
    pub coin_value: u32,
    pub enemy_speed: f32,
    /// Patrol direction flips when `rng.gen_range(0..=flip_range) == 0`.
    pub enemy_flip_range: u32,
    pub cloud_count: usize,
    pub cloud_drift: f32,
    pub cloud_y: (i32, i32),
    pub sky_bottom: Rgb,
    pub ground: Rgb,
    pub player_color: Rgb,
    pub enemy_color: Rgb,
    /// Corner radius used when drawing the player.
    pub player_corner: f32,
}

impl PlatformerConfig {
    /// "Mini Mario": 900×500, no enemies, no menu.
    pub fn classic() -> Self {
        Self {
            width: 900.0,
            height: 500.0,
            spawn: Rect::new(80.0, 350.0, 40.0, 50.0),
            speed: 5.0,
            jump_impulse: -16.0,
            gravity: 0.8,
            lives: 3,
            coin_value: 10,
            enemy_speed: 2.0,
            enemy_flip_range: 100,
            cloud_count: 5,
            cloud_drift: 0.3,
            cloud_y: (50, 200),
            sky_bottom: (180, 225, 255),
            ground: (90, 200, 120),
            player_color: (220, 60, 60),
            enemy_color: (140, 70, 160),
            player_corner: 6.0,
        }
    }

    /// "Mini Mario Deluxe": 1000×550, patrolling enemies and a menu.
    pub fn deluxe() -> Self {
        Self {
            width: 1000.0,
            height: 550.0,
            spawn: Rect::new(80.0, 380.0, 40.0, 55.0),
            cloud_count: 7,
            cloud_drift: 0.4,
            cloud_y: (60, 220),
            sky_bottom: (190, 230, 255),
            ground: (95, 205, 120),
            player_color: (225, 70, 70),
            player_corner: 8.0,
            ..Self::classic()
        }
    }
}

impl Default for PlatformerConfig {
    fn default() -> Self {
        Self::deluxe()
    }
}

// ── Survival arena ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
    pub player_radius: f32,
    pub enemy_radius: f32,
    pub player_speed: f32,
    /// Speed given to the first hunter.
    pub initial_enemy_speed: f32,
    /// Added to the hunter speed after every spawn.
    pub speed_step: f32,
    /// Frames between two spawns; 0 turns spawning off.
    pub spawn_interval: u64,
    pub background: Rgb,
    pub player_color: Rgb,
    pub enemy_color: Rgb,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            player_radius: 15.0,
            enemy_radius: 15.0,
            player_speed: 5.0,
            initial_enemy_speed: 1.5,
            speed_step: 0.05,
            spawn_interval: 90,
            background: (25, 25, 35),
            player_color: (70, 160, 255),
            enemy_color: (230, 70, 70),
        }
    }
}
