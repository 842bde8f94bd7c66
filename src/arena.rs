/// Pure logic for the survival arena: the player dodges hunters that home in
/// on them, with a new, slightly faster hunter arriving every few seconds.
///
/// Same conventions as `compute`: immutable input state, new state out,
/// randomness injected.

use log::{debug, info};
use rand::Rng;

use crate::config::ArenaConfig;
use crate::entities::{ArenaState, Hunter, Phase, Runner, Trigger};
use crate::input::StickInput;

/// Frames per second the arena clock assumes when reporting survival time.
pub const TICKS_PER_SECOND: u64 = 60;

pub fn init_arena(config: ArenaConfig) -> ArenaState {
    ArenaState {
        player: Runner {
            x: config.width / 2.0,
            y: config.height / 2.0,
        },
        enemies: Vec::new(),
        enemy_speed: config.initial_enemy_speed,
        spawned: 0,
        phase: Phase::Playing,
        frame: 0,
        config,
    }
}

/// Move the player with WASD; the whole circle stays on screen.
pub fn apply_input(state: &ArenaState, input: &StickInput) -> ArenaState {
    if !state.phase.is_active() {
        return state.clone();
    }
    let cfg = &state.config;
    let r = cfg.player_radius;
    let (dx, dy) = input.axis();

    let x = (state.player.x + dx * cfg.player_speed).clamp(r, (cfg.width - r).max(r));
    let y = (state.player.y + dy * cfg.player_speed).clamp(r, (cfg.height - r).max(r));

    ArenaState {
        player: Runner { x, y },
        ..state.clone()
    }
}

/// Advance one frame: spawn on schedule, steer every hunter straight at the
/// player, then test for contact.  Once caught, the state is frozen.
pub fn tick(state: &ArenaState, rng: &mut impl Rng) -> ArenaState {
    if !state.phase.is_active() {
        return state.clone();
    }
    let cfg = &state.config;
    let frame = state.frame + 1;
    let mut enemies = state.enemies.clone();
    let mut enemy_speed = state.enemy_speed;
    let mut spawned = state.spawned;

    // ── 1. Spawn ─────────────────────────────────────────────────────────────
    if cfg.spawn_interval > 0 && frame % cfg.spawn_interval == 0 {
        let (x, y) = edge_point(rng, cfg);
        enemies.push(Hunter {
            x,
            y,
            speed: enemy_speed,
        });
        spawned += 1;
        enemy_speed += cfg.speed_step;
        debug!(target: "arena", "hunter #{} spawned at ({:.0}, {:.0})", spawned, x, y);
    }

    // ── 2. Homing: full speed toward the player's current centre ─────────────
    let (px, py) = (state.player.x, state.player.y);
    for hunter in enemies.iter_mut() {
        let angle = (py - hunter.y).atan2(px - hunter.x);
        hunter.x += hunter.speed * angle.cos();
        hunter.y += hunter.speed * angle.sin();
    }

    // ── 3. Contact ───────────────────────────────────────────────────────────
    let reach = cfg.player_radius + cfg.enemy_radius;
    let caught = enemies
        .iter()
        .any(|h| (h.x - px).hypot(h.y - py) < reach);

    let phase = if caught {
        info!(
            target: "arena",
            "caught after {}s by one of {} hunters",
            frame / TICKS_PER_SECOND,
            enemies.len()
        );
        state.phase.on(Trigger::LivesExhausted)
    } else {
        state.phase
    };

    ArenaState {
        enemies,
        enemy_speed,
        spawned,
        phase,
        frame,
        ..state.clone()
    }
}

/// Whole seconds survived so far.
pub fn survived_seconds(state: &ArenaState) -> u64 {
    state.frame / TICKS_PER_SECOND
}

/// A random point just outside one of the four screen edges.
fn edge_point(rng: &mut impl Rng, cfg: &ArenaConfig) -> (f32, f32) {
    let r = cfg.enemy_radius;
    match rng.gen_range(0..4) {
        0 => (rng.gen_range(0.0..=cfg.width), -r),
        1 => (rng.gen_range(0.0..=cfg.width), cfg.height + r),
        2 => (-r, rng.gen_range(0.0..=cfg.height)),
        _ => (cfg.width + r, rng.gen_range(0.0..=cfg.height)),
    }
}
