/// Pure platformer logic.
///
/// Every public function takes an immutable reference to the current
/// `PlatformerState` (and, where needed, an RNG handle) and returns a brand-new
/// `PlatformerState`.  Side effects are limited to the injected RNG and log
/// records.

use log::{debug, info};
use rand::Rng;

use crate::config::PlatformerConfig;
use crate::entities::{
    Coin, Enemy, Phase, Platform, PlatformerState, Player, Rect, Trigger, Variant,
};
use crate::input::PadInput;
use crate::scenery::{drift_clouds, spawn_clouds};

/// Phase advance of a coin's bob animation per frame.
const BOUNCE_STEP: f32 = 0.1;
/// Vertical amplitude of the bob, in pixels.
const BOUNCE_AMPLITUDE: f32 = 3.0;

// ── Constructors ─────────────────────────────────────────────────────────────

/// The original "Mini Mario": three raised platforms with a coin above each,
/// no enemies, gameplay starts immediately.
pub fn init_classic(rng: &mut impl Rng) -> PlatformerState {
    let config = PlatformerConfig::classic();
    let platforms: Vec<Platform> = [
        Rect::new(0.0, 430.0, 900.0, 70.0),
        Rect::new(200.0, 340.0, 120.0, 25.0),
        Rect::new(400.0, 280.0, 120.0, 25.0),
        Rect::new(600.0, 220.0, 120.0, 25.0),
    ]
    .into_iter()
    .map(|rect| Platform { rect })
    .collect();

    // One coin hovering above the centre of every raised platform.
    let coins = platforms[1..]
        .iter()
        .map(|p| {
            let (cx, _) = p.rect.center();
            coin_at(cx - 10.0, p.rect.y - 25.0, 20.0)
        })
        .collect();

    build(Variant::Classic, config, platforms, coins, Vec::new(), Phase::Playing, rng)
}

/// "Mini Mario Deluxe": adds two patrolling enemies and opens on the menu.
pub fn init_deluxe(rng: &mut impl Rng) -> PlatformerState {
    let config = PlatformerConfig::deluxe();
    let platforms = [
        Rect::new(0.0, 450.0, 1000.0, 100.0),
        Rect::new(200.0, 360.0, 140.0, 25.0),
        Rect::new(420.0, 300.0, 140.0, 25.0),
        Rect::new(650.0, 240.0, 140.0, 25.0),
    ]
    .into_iter()
    .map(|rect| Platform { rect })
    .collect();

    let coins = [(230.0, 330.0), (450.0, 270.0), (680.0, 210.0)]
        .into_iter()
        .map(|(x, y)| coin_at(x, y, 18.0))
        .collect();

    let enemies = [(300.0, 410.0), (600.0, 410.0)]
        .into_iter()
        .map(|(x, y)| Enemy {
            rect: Rect::new(x, y, 40.0, 40.0),
            direction: if rng.gen_bool(0.5) { 1 } else { -1 },
            speed: config.enemy_speed,
        })
        .collect();

    build(Variant::Deluxe, config, platforms, coins, enemies, Phase::Menu, rng)
}

fn coin_at(x: f32, y: f32, size: f32) -> Coin {
    Coin {
        rect: Rect::new(x, y, size, size),
        bounce: 0.0,
    }
}

fn build(
    variant: Variant,
    config: PlatformerConfig,
    platforms: Vec<Platform>,
    coins: Vec<Coin>,
    enemies: Vec<Enemy>,
    phase: Phase,
    rng: &mut impl Rng,
) -> PlatformerState {
    let clouds = spawn_clouds(rng, config.cloud_count, config.width, config.cloud_y);
    PlatformerState {
        variant,
        player: Player {
            rect: config.spawn,
            vel_y: 0.0,
            on_ground: false,
            lives: config.lives,
            score: 0,
        },
        platforms,
        coins,
        enemies,
        clouds,
        phase,
        frame: 0,
        config,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Apply one frame of held keys: walk left/right and start a jump.
/// Does nothing outside `Phase::Playing`.
pub fn apply_input(state: &PlatformerState, input: &PadInput) -> PlatformerState {
    if !state.phase.is_active() {
        return state.clone();
    }
    let cfg = &state.config;
    let mut player = state.player.clone();

    if input.left {
        player.rect.x -= cfg.speed;
    }
    if input.right {
        player.rect.x += cfg.speed;
    }
    player.rect.x = player.rect.x.clamp(0.0, (cfg.width - player.rect.w).max(0.0));

    if input.jump && player.on_ground {
        player.vel_y = cfg.jump_impulse;
        player.on_ground = false;
    }

    PlatformerState {
        player,
        ..state.clone()
    }
}

/// Feed a one-shot key trigger (ENTER / ESCAPE) through the phase table.
/// Only the deluxe game has a menu and a pause screen.
pub fn press(state: &PlatformerState, trigger: Trigger) -> PlatformerState {
    if state.variant != Variant::Deluxe {
        return state.clone();
    }
    let phase = state.phase.on(trigger);
    if phase != state.phase {
        info!(target: "platformer", "{:?} -> {:?}", state.phase, phase);
    }
    PlatformerState {
        phase,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
pub fn tick(state: &PlatformerState, rng: &mut impl Rng) -> PlatformerState {
    let frame = state.frame + 1;
    if !state.phase.is_active() {
        return PlatformerState {
            frame,
            ..state.clone()
        };
    }

    let cfg = &state.config;
    let mut player = state.player.clone();
    let mut phase = state.phase;

    // ── 1. Gravity ───────────────────────────────────────────────────────────
    player.vel_y += cfg.gravity;
    player.rect.y += player.vel_y;

    // ── 2. Land on platforms (only while falling) ────────────────────────────
    player.on_ground = false;
    for platform in &state.platforms {
        if player.rect.overlaps(&platform.rect) && player.vel_y > 0.0 {
            player.rect.set_bottom(platform.rect.y);
            player.vel_y = 0.0;
            player.on_ground = true;
        }
    }

    // ── 3. Patrol enemies, then check contact ────────────────────────────────
    let mut enemies = state.enemies.clone();
    for enemy in enemies.iter_mut() {
        enemy.rect.x += enemy.direction as f32 * enemy.speed;
        if rng.gen_range(0..=cfg.enemy_flip_range) == 0 {
            enemy.direction = -enemy.direction;
        }

        // No invulnerability window: a sustained overlap keeps costing lives.
        if player.rect.overlaps(&enemy.rect) {
            player.lives = player.lives.saturating_sub(1);
            player.rect.x = cfg.spawn.x;
            player.rect.y = cfg.spawn.y;
            info!(target: "platformer", "player hit, {} lives left", player.lives);
            if player.lives == 0 {
                phase = phase.on(Trigger::LivesExhausted);
            }
        }
    }

    // ── 4. Coin pickup over a snapshot of the active set ─────────────────────
    let mut coins = state.coins.clone();
    for coin in &state.coins {
        if player.rect.overlaps(&coin.rect) {
            if let Some(i) = coins.iter().position(|c| c == coin) {
                coins.remove(i);
                player.score += cfg.coin_value;
                debug!(target: "platformer", "coin collected, score {}", player.score);
            }
        }
    }

    // ── 5. Win when the last coin is gone ────────────────────────────────────
    if coins.is_empty() {
        phase = phase.on(Trigger::CoinsExhausted);
    }

    if phase != state.phase {
        info!(target: "platformer", "{:?} -> {:?}", state.phase, phase);
    }

    PlatformerState {
        player,
        enemies,
        coins,
        phase,
        frame,
        ..state.clone()
    }
}

// ── Scenery ──────────────────────────────────────────────────────────────────

/// Cosmetic step run every frame in every phase: clouds drift, and in the
/// deluxe game the coins keep bobbing while gameplay is running.
pub fn animate(state: &PlatformerState) -> PlatformerState {
    let cfg = &state.config;
    let clouds = drift_clouds(&state.clouds, cfg.cloud_drift, cfg.width);
    let coins = if state.variant == Variant::Deluxe && state.phase.is_active() {
        state
            .coins
            .iter()
            .map(|c| Coin {
                bounce: c.bounce + BOUNCE_STEP,
                ..c.clone()
            })
            .collect()
    } else {
        state.coins.clone()
    };
    PlatformerState {
        clouds,
        coins,
        ..state.clone()
    }
}

/// Vertical draw offset of a bobbing coin, truncated towards zero.
pub fn coin_bob_offset(coin: &Coin) -> i32 {
    (coin.bounce.sin() * BOUNCE_AMPLITUDE) as i32
}
