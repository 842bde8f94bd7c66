use mini_arcade::compute::*;
use mini_arcade::config::PlatformerConfig;
use mini_arcade::entities::*;
use mini_arcade::input::PadInput;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Deluxe level, already playing, with the enemies cleared away so tests
/// only see what they set up themselves.
fn make_state() -> PlatformerState {
    let mut s = init_deluxe(&mut seeded_rng());
    s.phase = Phase::Playing;
    s.enemies.clear();
    s
}

/// Player standing on the deluxe ground (top edge y = 450).
fn on_ground(mut s: PlatformerState, x: f32) -> PlatformerState {
    s.player.rect.x = x;
    s.player.rect.set_bottom(450.0);
    s.player.vel_y = 0.0;
    s.player.on_ground = true;
    s
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

const LEFT: PadInput = PadInput { left: true, right: false, jump: false };
const RIGHT: PadInput = PadInput { left: false, right: true, jump: false };
const JUMP: PadInput = PadInput { left: false, right: false, jump: true };

// ── init ──────────────────────────────────────────────────────────────────────

#[test]
fn init_classic_level_layout() {
    let s = init_classic(&mut seeded_rng());
    assert_eq!(s.variant, Variant::Classic);
    assert_eq!(s.phase, Phase::Playing);
    assert_eq!(s.player.rect, Rect::new(80.0, 350.0, 40.0, 50.0));
    assert_eq!(s.player.lives, 3);
    assert_eq!(s.player.score, 0);
    assert_eq!(s.platforms.len(), 4);
    assert!(s.enemies.is_empty());
    assert_eq!(s.clouds.len(), 5);
}

#[test]
fn init_classic_puts_a_coin_above_each_raised_platform() {
    let s = init_classic(&mut seeded_rng());
    let positions: Vec<(f32, f32)> = s.coins.iter().map(|c| (c.rect.x, c.rect.y)).collect();
    assert_eq!(positions, vec![(250.0, 315.0), (450.0, 255.0), (650.0, 195.0)]);
    assert!(s.coins.iter().all(|c| c.rect.w == 20.0 && c.rect.h == 20.0));
}

#[test]
fn init_deluxe_starts_on_menu() {
    let s = init_deluxe(&mut seeded_rng());
    assert_eq!(s.variant, Variant::Deluxe);
    assert_eq!(s.phase, Phase::Menu);
    assert_eq!(s.player.rect, Rect::new(80.0, 380.0, 40.0, 55.0));
    assert_eq!(s.coins.len(), 3);
    assert_eq!(s.clouds.len(), 7);
    assert_eq!(s.enemies.len(), 2);
    for e in &s.enemies {
        assert!(e.direction == 1 || e.direction == -1);
        assert_eq!(e.speed, 2.0);
        assert_eq!(e.rect.y, 410.0);
    }
}

#[test]
fn init_clouds_within_configured_band() {
    let s = init_deluxe(&mut seeded_rng());
    for c in &s.clouds {
        assert!(c.x >= 0.0 && c.x <= 1000.0);
        assert!(c.y >= 60.0 && c.y <= 220.0);
    }
}

// ── apply_input ───────────────────────────────────────────────────────────────

#[test]
fn walk_left_and_right() {
    let s = on_ground(make_state(), 300.0);
    assert_eq!(apply_input(&s, &LEFT).player.rect.x, 295.0);
    assert_eq!(apply_input(&s, &RIGHT).player.rect.x, 305.0);
}

#[test]
fn opposite_keys_cancel() {
    let s = on_ground(make_state(), 300.0);
    let both = PadInput { left: true, right: true, jump: false };
    assert_eq!(apply_input(&s, &both).player.rect.x, 300.0);
}

#[test]
fn walk_clamps_at_left_edge() {
    let s = on_ground(make_state(), 2.0);
    assert_eq!(apply_input(&s, &LEFT).player.rect.x, 0.0);
}

#[test]
fn walk_clamps_at_right_edge() {
    // 1000 wide, player 40 wide → max x = 960
    let s = on_ground(make_state(), 958.0);
    assert_eq!(apply_input(&s, &RIGHT).player.rect.x, 960.0);
}

#[test]
fn clamp_holds_for_classic_width() {
    let mut s = init_classic(&mut seeded_rng());
    s.player.rect.x = 900.0;
    let s2 = apply_input(&s, &RIGHT);
    assert_eq!(s2.player.rect.x, 860.0);
}

#[test]
fn jump_from_ground_sets_impulse() {
    let s = on_ground(make_state(), 300.0);
    let s2 = apply_input(&s, &JUMP);
    assert_eq!(s2.player.vel_y, -16.0);
    assert!(!s2.player.on_ground);
}

#[test]
fn jump_in_mid_air_is_ignored() {
    let mut s = make_state();
    s.player.vel_y = 3.0;
    s.player.on_ground = false;
    let s2 = apply_input(&s, &JUMP);
    assert_eq!(s2.player.vel_y, 3.0);
}

#[test]
fn gravity_takes_over_the_frame_after_a_jump() {
    let s = on_ground(make_state(), 300.0);
    let s2 = tick(&apply_input(&s, &JUMP), &mut seeded_rng());
    assert!(close(s2.player.vel_y, -15.2));
    assert!(close(s2.player.rect.y, 395.0 - 15.2));
    assert!(!s2.player.on_ground);

    // Velocity keeps rising toward and past zero.
    let mut s3 = s2.clone();
    for _ in 0..25 {
        s3 = tick(&s3, &mut seeded_rng());
    }
    assert!(s3.player.vel_y >= 0.0 || s3.player.on_ground);
}

#[test]
fn input_ignored_outside_playing() {
    let mut s = on_ground(make_state(), 300.0);
    s.phase = Phase::Menu;
    let s2 = apply_input(&s, &RIGHT);
    assert_eq!(s2.player.rect.x, 300.0);
    s.phase = Phase::Paused;
    let s3 = apply_input(&s, &JUMP);
    assert_eq!(s3.player.vel_y, 0.0);
}

#[test]
fn apply_input_does_not_mutate_original() {
    let s = on_ground(make_state(), 300.0);
    let _ = apply_input(&s, &RIGHT);
    assert_eq!(s.player.rect.x, 300.0);
}

// ── tick — gravity & platforms ───────────────────────────────────────────────

#[test]
fn tick_increments_frame() {
    let mut s = make_state();
    s.frame = 5;
    assert_eq!(tick(&s, &mut seeded_rng()).frame, 6);
}

#[test]
fn tick_applies_gravity_in_the_air() {
    let mut s = make_state();
    s.player.rect.y = 100.0;
    s.player.vel_y = 0.0;
    let s2 = tick(&s, &mut seeded_rng());
    assert!(close(s2.player.vel_y, 0.8));
    assert!(close(s2.player.rect.y, 100.8));
    assert!(!s2.player.on_ground);
}

#[test]
fn falling_onto_platform_snaps_to_its_top() {
    let mut s = make_state();
    s.player.rect.y = 396.0; // bottom 451 after gravity 451.8, ground top 450
    s.player.vel_y = 0.0;
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.player.rect.bottom(), 450.0);
    assert_eq!(s2.player.vel_y, 0.0);
    assert!(s2.player.on_ground);
}

#[test]
fn resting_player_stays_on_ground() {
    let s = on_ground(make_state(), 300.0);
    let mut s2 = s.clone();
    for _ in 0..10 {
        s2 = tick(&s2, &mut seeded_rng());
    }
    assert_eq!(s2.player.rect.bottom(), 450.0);
    assert!(s2.player.on_ground);
}

#[test]
fn rising_through_platform_does_not_snap() {
    let mut s = make_state();
    s.player.rect.x = 250.0;
    s.player.rect.y = 350.0; // overlaps the (200, 360, 140, 25) ledge
    s.player.vel_y = -10.0;
    let s2 = tick(&s, &mut seeded_rng());
    assert!(close(s2.player.vel_y, -9.2));
    assert!(close(s2.player.rect.y, 340.8));
    assert!(!s2.player.on_ground);
}

#[test]
fn walking_off_a_ledge_clears_on_ground() {
    let mut s = make_state();
    s.player.rect.x = 100.0;
    s.player.rect.y = 200.0;
    s.player.on_ground = true;
    let s2 = tick(&s, &mut seeded_rng());
    assert!(!s2.player.on_ground);
}

#[test]
fn first_overlapping_platform_absorbs_the_fall() {
    // After the first snap the velocity is zero, so a second overlapping
    // platform no longer counts as "falling onto".
    let mut s = make_state();
    s.platforms = vec![
        Platform { rect: Rect::new(0.0, 450.0, 1000.0, 100.0) },
        Platform { rect: Rect::new(0.0, 440.0, 1000.0, 100.0) },
    ];
    s.player.rect.y = 400.0; // bottom 455.8 after gravity
    s.player.vel_y = 0.0;
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.player.rect.bottom(), 450.0);
    assert!(s2.player.on_ground);
}

// ── tick — coins & win ───────────────────────────────────────────────────────

#[test]
fn touching_a_coin_collects_it() {
    let mut s = make_state();
    s.player.rect.x = 440.0;
    s.player.rect.y = 250.0; // lands on the (420, 300) ledge, over the coin at (450, 270)
    s.player.vel_y = 0.0;
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.player.score, 10);
    assert_eq!(s2.coins.len(), 2);
    assert!(s2.coins.iter().all(|c| c.rect.x != 450.0));
    assert_eq!(s2.phase, Phase::Playing);
}

#[test]
fn two_coins_in_one_frame_both_count() {
    let mut s = make_state();
    s.player.rect = Rect::new(0.0, 0.0, 40.0, 55.0);
    s.coins = vec![
        Coin { rect: Rect::new(5.0, 10.0, 18.0, 18.0), bounce: 0.0 },
        Coin { rect: Rect::new(20.0, 30.0, 18.0, 18.0), bounce: 0.0 },
        Coin { rect: Rect::new(500.0, 30.0, 18.0, 18.0), bounce: 0.0 },
    ];
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.player.score, 20);
    assert_eq!(s2.coins.len(), 1);
    assert_eq!(s2.coins[0].rect.x, 500.0);
}

#[test]
fn collecting_the_last_coin_wins() {
    let mut s = make_state();
    s.player.rect = Rect::new(0.0, 0.0, 40.0, 55.0);
    s.coins = vec![Coin { rect: Rect::new(5.0, 10.0, 18.0, 18.0), bounce: 0.0 }];
    let s2 = tick(&s, &mut seeded_rng());
    assert!(s2.coins.is_empty());
    assert_eq!(s2.player.score, 10);
    assert_eq!(s2.phase, Phase::Win);
}

#[test]
fn no_win_while_coins_remain() {
    let s = on_ground(make_state(), 300.0);
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.coins.len(), 3);
    assert_eq!(s2.phase, Phase::Playing);
}

#[test]
fn classic_wins_too() {
    let mut s = init_classic(&mut seeded_rng());
    s.player.rect = Rect::new(250.0, 300.0, 40.0, 50.0);
    s.coins.truncate(1); // the coin at (250, 315)
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.phase, Phase::Win);
    assert_eq!(s2.player.score, 10);
}

// ── tick — enemies ────────────────────────────────────────────────────────────

#[test]
fn enemy_patrols_by_direction_times_speed() {
    let mut s = on_ground(make_state(), 80.0);
    s.enemies.push(Enemy {
        rect: Rect::new(600.0, 410.0, 40.0, 40.0),
        direction: -1,
        speed: 2.0,
    });
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.enemies[0].rect.x, 598.0);
}

#[test]
fn enemy_flips_when_the_roll_hits() {
    let mut s = on_ground(make_state(), 80.0);
    s.config.enemy_flip_range = 0; // roll is always 0
    s.enemies.push(Enemy {
        rect: Rect::new(600.0, 410.0, 40.0, 40.0),
        direction: 1,
        speed: 2.0,
    });
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.enemies[0].rect.x, 602.0);
    assert_eq!(s2.enemies[0].direction, -1);
}

#[test]
fn enemy_contact_costs_a_life_and_respawns() {
    let mut s = on_ground(make_state(), 300.0);
    s.enemies.push(Enemy {
        rect: Rect::new(300.0, 410.0, 40.0, 40.0),
        direction: 1,
        speed: 0.0,
    });
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.player.lives, 2);
    assert_eq!((s2.player.rect.x, s2.player.rect.y), (80.0, 380.0));
    assert_eq!(s2.enemies.len(), 1); // enemy survives the hit
    assert_eq!(s2.phase, Phase::Playing);
}

#[test]
fn sustained_overlap_keeps_costing_lives() {
    // An enemy parked on the respawn point hits again every frame.
    let mut s = make_state();
    s.enemies.push(Enemy {
        rect: Rect::new(80.0, 380.0, 40.0, 40.0),
        direction: 1,
        speed: 0.0,
    });
    let s1 = tick(&s, &mut seeded_rng());
    let s2 = tick(&s1, &mut seeded_rng());
    assert_eq!(s1.player.lives, 2);
    assert_eq!(s2.player.lives, 1);
    assert_eq!(s2.phase, Phase::Playing);

    let s3 = tick(&s2, &mut seeded_rng());
    assert_eq!(s3.player.lives, 0);
    assert_eq!(s3.phase, Phase::GameOver);
}

#[test]
fn game_over_beats_win_in_the_same_frame() {
    let mut s = make_state();
    s.player.lives = 1;
    s.enemies.push(Enemy {
        rect: Rect::new(80.0, 380.0, 40.0, 40.0),
        direction: 1,
        speed: 0.0,
    });
    // Overlaps the player right after the respawn.
    s.coins = vec![Coin { rect: Rect::new(90.0, 400.0, 18.0, 18.0), bounce: 0.0 }];
    let s2 = tick(&s, &mut seeded_rng());
    assert!(s2.coins.is_empty());
    assert_eq!(s2.phase, Phase::GameOver);
}

#[test]
fn lives_never_underflow() {
    let mut s = make_state();
    s.player.lives = 1;
    for x in [80.0, 80.0] {
        s.enemies.push(Enemy {
            rect: Rect::new(x, 380.0, 40.0, 40.0),
            direction: 1,
            speed: 0.0,
        });
    }
    let s2 = tick(&s, &mut seeded_rng());
    assert_eq!(s2.player.lives, 0);
    assert_eq!(s2.phase, Phase::GameOver);
}

// ── tick — halted phases ─────────────────────────────────────────────────────

#[test]
fn nothing_moves_outside_playing() {
    for phase in [Phase::Menu, Phase::Paused, Phase::GameOver, Phase::Win] {
        let mut s = make_state();
        s.phase = phase;
        s.player.rect.y = 100.0;
        let s2 = tick(&s, &mut seeded_rng());
        assert_eq!(s2.player.rect.y, 100.0);
        assert_eq!(s2.player.vel_y, 0.0);
        assert_eq!(s2.phase, phase);
        assert_eq!(s2.frame, s.frame + 1);
    }
}

// ── press ─────────────────────────────────────────────────────────────────────

#[test]
fn deluxe_menu_pause_cycle() {
    let s = init_deluxe(&mut seeded_rng());
    let s = press(&s, Trigger::Confirm);
    assert_eq!(s.phase, Phase::Playing);
    let s = press(&s, Trigger::TogglePause);
    assert_eq!(s.phase, Phase::Paused);
    let s = press(&s, Trigger::TogglePause);
    assert_eq!(s.phase, Phase::Playing);
}

#[test]
fn escape_on_menu_does_nothing() {
    let s = init_deluxe(&mut seeded_rng());
    assert_eq!(press(&s, Trigger::TogglePause).phase, Phase::Menu);
}

#[test]
fn classic_ignores_menu_keys() {
    let s = init_classic(&mut seeded_rng());
    assert_eq!(press(&s, Trigger::TogglePause).phase, Phase::Playing);
    assert_eq!(press(&s, Trigger::Confirm).phase, Phase::Playing);
}

// ── animate ───────────────────────────────────────────────────────────────────

#[test]
fn clouds_drift_in_every_phase() {
    let mut s = init_deluxe(&mut seeded_rng()); // on the menu
    s.clouds = vec![Cloud { x: 100.0, y: 80.0 }];
    let s2 = animate(&s);
    assert!(close(s2.clouds[0].x, 99.6));
    assert_eq!(s2.clouds[0].y, 80.0);
}

#[test]
fn deluxe_coins_bob_only_while_playing() {
    let s = make_state();
    let s2 = animate(&s);
    assert!(s2.coins.iter().all(|c| close(c.bounce, 0.1)));

    let mut paused = make_state();
    paused.phase = Phase::Paused;
    assert!(animate(&paused).coins.iter().all(|c| c.bounce == 0.0));
}

#[test]
fn classic_coins_stay_still() {
    let s = init_classic(&mut seeded_rng());
    assert!(animate(&s).coins.iter().all(|c| c.bounce == 0.0));
}

#[test]
fn coin_bob_offset_truncates_toward_zero() {
    let coin = |bounce| Coin { rect: Rect::new(0.0, 0.0, 18.0, 18.0), bounce };
    assert_eq!(coin_bob_offset(&coin(0.0)), 0);
    assert_eq!(coin_bob_offset(&coin(1.0)), 2); // 3 × sin(1) ≈ 2.52
    assert_eq!(coin_bob_offset(&coin(-1.0)), -2);
}

#[test]
fn config_presets_share_the_physics() {
    let classic = PlatformerConfig::classic();
    let deluxe = PlatformerConfig::deluxe();
    assert_eq!(classic.gravity, deluxe.gravity);
    assert_eq!(classic.jump_impulse, -16.0);
    assert_eq!(deluxe.coin_value, 10);
    assert_eq!(PlatformerConfig::default(), deluxe);
}
