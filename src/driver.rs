/// Terminal frame driver shared by every game binary.
///
/// Owns the terminal for the lifetime of a game: raw mode, alternate screen,
/// a dedicated input thread, and the fixed-rate loop
/// `drain events → one-shot keys → held keys → update → render → sleep`.

use std::io::{self, stdout, BufWriter, Write};
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand, QueueableCommand,
};
use log::{info, warn};
use rand::{thread_rng, Rng};

use crate::input::KeyTracker;

/// ≈60 FPS.
pub const FRAME: Duration = Duration::from_micros(16_667);

/// What the driver should do after a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One game as seen by the frame driver.
pub trait Game {
    /// React to a fresh key press (not a repeat).  Runs before `update`.
    fn on_key(&mut self, key: KeyCode) -> Flow;

    /// Advance one frame using the keys currently held.
    fn update<R: Rng>(&mut self, keys: &KeyTracker, rng: &mut R);

    /// Draw the current frame onto a `cols` × `rows` terminal.
    fn render<W: Write>(&self, out: &mut W, cols: u16, rows: u16) -> io::Result<()>;
}

/// Quit keys honoured by every game: they stand in for closing the window.
pub fn is_quit_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('c') | KeyCode::Char('C') => modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Take over the terminal, run `game` until a quit key, then restore the
/// terminal whatever the outcome.
pub fn run<G: Game>(mut game: G) -> io::Result<()> {
    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Ask for release events only where the terminal reports support for them.
    let release_events = terminal::supports_keyboard_enhancement().unwrap_or(false);
    let keyboard_enhanced = release_events
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    info!(target: "driver", "terminal ready (key release events: {})", keyboard_enhanced);

    // Blocking reads happen off the frame loop; events reach it via the channel.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // frame loop has returned
                }
            }
            Err(err) => {
                warn!(target: "driver", "input reader stopped: {}", err);
                break;
            }
        }
    });

    let keys = if keyboard_enhanced {
        KeyTracker::with_release_events()
    } else {
        KeyTracker::new()
    };
    let result = frame_loop(&mut out, &mut game, &rx, keys);

    // Teardown runs on the error path too; its own failures are ignored so
    // the loop's result is what gets reported.
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    info!(target: "driver", "terminal restored");

    result
}

// ── Frame loop ────────────────────────────────────────────────────────────────

fn frame_loop<W: Write, G: Game>(
    out: &mut W,
    game: &mut G,
    rx: &mpsc::Receiver<Event>,
    mut keys: KeyTracker,
) -> io::Result<()> {
    let mut rng = thread_rng();

    loop {
        let frame_start = Instant::now();
        keys.next_frame();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        loop {
            match rx.try_recv() {
                Ok(Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                })) => {
                    let fresh = keys.record(code, kind);
                    if !fresh {
                        continue;
                    }
                    if is_quit_key(code, modifiers) || game.on_key(code) == Flow::Quit {
                        info!(target: "driver", "quit requested");
                        return Ok(());
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    out.queue(terminal::Clear(terminal::ClearType::All))?;
                }
                Ok(_) => {}
                Err(TryRecvError::Empty) => break,
                // Input thread is gone, so no quit key can ever arrive.
                Err(TryRecvError::Disconnected) => return Ok(()),
            }
        }

        game.update(&keys, &mut rng);

        let (cols, rows) = terminal::size()?;
        game.render(out, cols, rows)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}
