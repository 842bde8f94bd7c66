use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

use mini_arcade::config::ArenaConfig;
use mini_arcade::driver::{is_quit_key, Flow, Game};
use mini_arcade::entities::*;
use mini_arcade::games::{ArenaGame, PlatformerGame};
use mini_arcade::input::KeyTracker;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(11)
}

fn holding(key: KeyCode) -> KeyTracker {
    let mut keys = KeyTracker::new();
    keys.next_frame();
    keys.record(key, KeyEventKind::Press);
    keys
}

// ── Quit keys ─────────────────────────────────────────────────────────────────

#[test]
fn quit_keys() {
    assert!(is_quit_key(KeyCode::Char('q'), KeyModifiers::NONE));
    assert!(is_quit_key(KeyCode::Char('Q'), KeyModifiers::SHIFT));
    assert!(is_quit_key(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!is_quit_key(KeyCode::Char('c'), KeyModifiers::NONE));
    assert!(!is_quit_key(KeyCode::Esc, KeyModifiers::NONE));
}

// ── Platformer adapter ────────────────────────────────────────────────────────

#[test]
fn deluxe_keys_drive_the_phase() {
    let mut game = PlatformerGame::deluxe(&mut seeded_rng());
    assert_eq!(game.on_key(KeyCode::Enter), Flow::Continue);
    assert_eq!(game.state.phase, Phase::Playing);
    game.on_key(KeyCode::Esc);
    assert_eq!(game.state.phase, Phase::Paused);
    game.on_key(KeyCode::Esc);
    assert_eq!(game.state.phase, Phase::Playing);
}

#[test]
fn deluxe_menu_ignores_held_keys() {
    let mut game = PlatformerGame::deluxe(&mut seeded_rng());
    let before = game.state.player.clone();
    game.update(&holding(KeyCode::Char('d')), &mut seeded_rng());
    assert_eq!(game.state.player, before);
    assert_eq!(game.state.frame, 1);
}

#[test]
fn held_key_walks_the_player() {
    let mut game = PlatformerGame::deluxe(&mut seeded_rng());
    game.on_key(KeyCode::Enter);
    game.update(&holding(KeyCode::Char('d')), &mut seeded_rng());
    assert_eq!(game.state.player.rect.x, 85.0);
}

#[test]
fn classic_never_quits_on_escape() {
    let mut game = PlatformerGame::classic(&mut seeded_rng());
    assert_eq!(game.on_key(KeyCode::Esc), Flow::Continue);
    assert_eq!(game.state.phase, Phase::Playing);
}

#[test]
fn update_animates_clouds() {
    let mut game = PlatformerGame::classic(&mut seeded_rng());
    let before: Vec<f32> = game.state.clouds.iter().map(|c| c.x).collect();
    game.update(&KeyTracker::new(), &mut seeded_rng());
    for (c, x) in game.state.clouds.iter().zip(before) {
        assert!(c.x < x || c.x > 900.0);
    }
}

// ── Arena adapter ─────────────────────────────────────────────────────────────

#[test]
fn arena_escape_only_quits_after_game_over() {
    let mut game = ArenaGame::new(ArenaConfig::default());
    assert_eq!(game.on_key(KeyCode::Esc), Flow::Continue);
    game.state.phase = Phase::GameOver;
    assert_eq!(game.on_key(KeyCode::Enter), Flow::Continue);
    assert_eq!(game.on_key(KeyCode::Esc), Flow::Quit);
}

#[test]
fn arena_update_moves_then_ticks() {
    let mut game = ArenaGame::new(ArenaConfig::default());
    game.update(&holding(KeyCode::Char('s')), &mut seeded_rng());
    assert_eq!(game.state.player.y, 305.0);
    assert_eq!(game.state.frame, 1);
}

#[test]
fn render_goes_through_the_trait() {
    let game = ArenaGame::new(ArenaConfig::default());
    let mut out = Vec::new();
    game.render(&mut out, 40, 12).unwrap();
    assert!(!out.is_empty());
}
