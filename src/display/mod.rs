/// Rendering layer — all terminal output lives here.
///
/// Each function receives a mutable writer, an immutable view of the game
/// state and the terminal size.  No game logic is performed; this module only
/// translates state into a pixel buffer plus text overlays.

mod canvas;

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Print},
    QueueableCommand,
};

pub use canvas::{term_color, Canvas};

use crate::arena::survived_seconds;
use crate::compute::coin_bob_offset;
use crate::config::{Rgb, BRICK, COIN_GOLD, SKY_TOP, WHITE};
use crate::entities::{ArenaState, Cloud, Phase, PlatformerState, Rect, Variant};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_BAR: Rgb = (0, 0, 0);
const C_TEXT_DARK: Rgb = (30, 30, 30);
const C_BANNER: Rgb = WHITE;

/// Height of the deluxe HUD bar in logical pixels.
const HUD_BAR_HEIGHT: f32 = 40.0;

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one complete platformer frame.
pub fn render_platformer<W: Write>(
    out: &mut W,
    state: &PlatformerState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let cfg = &state.config;
    let mut canvas = Canvas::new(cols, rows, cfg.width, cfg.height);

    canvas.fill_gradient(SKY_TOP, cfg.sky_bottom);
    for cloud in &state.clouds {
        draw_cloud(&mut canvas, cloud);
    }

    // The deluxe game only shows the level while it is being played.
    let show_world = state.variant == Variant::Classic || state.phase == Phase::Playing;
    if show_world {
        draw_world(&mut canvas, state);
    }
    if state.variant == Variant::Deluxe && state.phase == Phase::Playing {
        canvas.fill_rect(&Rect::new(0.0, 0.0, cfg.width, HUD_BAR_HEIGHT), C_HUD_BAR);
    }

    canvas.render(out)?;

    match state.variant {
        Variant::Classic => draw_classic_overlay(out, &canvas, state)?,
        Variant::Deluxe => draw_deluxe_overlay(out, &canvas, state)?,
    }

    finish(out, rows)
}

/// Render one complete arena frame.
pub fn render_arena<W: Write>(
    out: &mut W,
    state: &ArenaState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let cfg = &state.config;
    let mut canvas = Canvas::new(cols, rows, cfg.width, cfg.height);

    canvas.fill(cfg.background);
    for hunter in &state.enemies {
        canvas.fill_circle(hunter.x, hunter.y, cfg.enemy_radius, cfg.enemy_color);
    }
    canvas.fill_circle(state.player.x, state.player.y, cfg.player_radius, cfg.player_color);

    canvas.render(out)?;

    let hud = format!(
        "Time: {}s   Enemies: {}",
        survived_seconds(state),
        state.enemies.len()
    );
    print_at(out, &canvas, 1, 0, &hud, WHITE)?;

    if state.phase == Phase::GameOver {
        let survived = format!("You survived {}s", survived_seconds(state));
        draw_banner(
            out,
            &canvas,
            cfg.height / 2.0 - 40.0,
            &["GAME OVER", survived.as_str(), "ESC to quit"],
        )?;
    } else {
        let last_row = canvas.rows().saturating_sub(1) as u16;
        print_at(out, &canvas, 1, last_row, "WASD : Move   Q : Quit", WHITE)?;
    }

    finish(out, rows)
}

// ── World ─────────────────────────────────────────────────────────────────────

fn draw_cloud(canvas: &mut Canvas, cloud: &Cloud) {
    canvas.fill_circle(cloud.x, cloud.y, 20.0, WHITE);
    canvas.fill_circle(cloud.x + 20.0, cloud.y + 10.0, 18.0, WHITE);
    canvas.fill_circle(cloud.x - 20.0, cloud.y + 10.0, 18.0, WHITE);
}

fn draw_world(canvas: &mut Canvas, state: &PlatformerState) {
    let cfg = &state.config;

    for platform in &state.platforms {
        canvas.fill_rect(&platform.rect, cfg.ground);
        canvas.stroke_rect(&platform.rect, 3.0, BRICK);
    }

    for coin in &state.coins {
        let (cx, cy) = coin.rect.center();
        match state.variant {
            Variant::Classic => canvas.fill_circle(cx, cy, 10.0, COIN_GOLD),
            Variant::Deluxe => {
                let bob = coin_bob_offset(coin) as f32;
                canvas.fill_circle(cx, cy + bob, 9.0, COIN_GOLD);
            }
        }
    }

    for enemy in &state.enemies {
        canvas.fill_round_rect(&enemy.rect, 6.0, cfg.enemy_color);
    }

    canvas.fill_round_rect(&state.player.rect, cfg.player_corner, cfg.player_color);
}

// ── Text overlays ─────────────────────────────────────────────────────────────

fn draw_classic_overlay<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    state: &PlatformerState,
) -> std::io::Result<()> {
    let cfg = &state.config;
    let p = &state.player;

    let (col, row) = canvas.cell_of(20.0, 15.0);
    print_at(out, canvas, col, row, &format!("♥ Lives: {}", p.lives), C_TEXT_DARK)?;
    let (col, row) = canvas.cell_of(cfg.width - 160.0, 15.0);
    print_at(out, canvas, col, row, &format!("★ Score: {}", p.score), C_TEXT_DARK)?;

    if state.phase == Phase::Win {
        let (col, row) = canvas.cell_of(cfg.width / 2.0 - 80.0, cfg.height / 2.0);
        print_at(out, canvas, col, row, "YOU WIN!", C_TEXT_DARK)?;
    }
    Ok(())
}

fn draw_deluxe_overlay<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    state: &PlatformerState,
) -> std::io::Result<()> {
    let cfg = &state.config;
    let p = &state.player;

    match state.phase {
        Phase::Menu => {
            draw_banner(out, canvas, 180.0, &["MINI MARIO DELUXE", "Press ENTER to Start"])
        }
        Phase::Paused => draw_banner(out, canvas, 200.0, &["PAUSED", "Press ESC to Resume"]),
        Phase::GameOver => {
            draw_banner(out, canvas, 200.0, &["GAME OVER", "Close window to exit"])
        }
        Phase::Win => draw_banner(out, canvas, 200.0, &["YOU WIN!", "Well played"]),
        Phase::Playing => {
            let (col, row) = canvas.cell_of(20.0, 10.0);
            print_at(out, canvas, col, row, &format!("♥ Lives: {}", p.lives), WHITE)?;
            let (col, row) = canvas.cell_of(200.0, 10.0);
            print_at(out, canvas, col, row, &format!("★ Score: {}", p.score), WHITE)?;
            let (col, row) = canvas.cell_of(cfg.width - 160.0, 10.0);
            print_at(out, canvas, col, row, "ESC: Pause", WHITE)
        }
    }
}

/// Horizontally centred lines, the first one at logical height `y`, one blank
/// terminal row between lines.
fn draw_banner<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    y: f32,
    lines: &[&str],
) -> std::io::Result<()> {
    let (_, start_row) = canvas.cell_of(0.0, y);
    let cx = canvas.cols() / 2;
    for (i, line) in lines.iter().enumerate() {
        let col = cx.saturating_sub(line.chars().count() / 2) as u16;
        print_at(out, canvas, col, start_row + 2 * i as u16, line, C_BANNER)?;
    }
    Ok(())
}

/// Print `text` at a cell, each character keeping the background colour of
/// the pixel it covers.  Text past the canvas edge is dropped.
fn print_at<W: Write>(
    out: &mut W,
    canvas: &Canvas,
    col: u16,
    row: u16,
    text: &str,
    fg: Rgb,
) -> std::io::Result<()> {
    if row as usize >= canvas.rows() {
        return Ok(());
    }
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(term_color(fg)))?;
    for (i, ch) in text.chars().enumerate() {
        let c = col as usize + i;
        if c >= canvas.cols() {
            break;
        }
        out.queue(style::SetBackgroundColor(term_color(canvas.cell_color(c, row as usize))))?;
        out.queue(Print(ch))?;
    }
    Ok(())
}

fn finish<W: Write>(out: &mut W, rows: u16) -> std::io::Result<()> {
    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}
