mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};

use space_invaders::entities::Phase;
use space_invaders::session::Session;

/// How long to wait for input when no tick is scheduled (title / game-over
/// screens).
const IDLE_POLL: Duration = Duration::from_millis(50);

// ── Main loop ─────────────────────────────────────────────────────────────────

/// Single cooperative loop: input and ticks are applied one at a time on this
/// thread, so they never interleave.
fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> anyhow::Result<()> {
    let mut session = Session::new();
    display::render(out, session.state()).context("failed to draw title screen")?;

    loop {
        // ── Wait for input or the next tick deadline ─────────────────────────
        let timeout = match session.next_deadline() {
            Some(due) => due.saturating_duration_since(Instant::now()),
            None => IDLE_POLL,
        };
        let mut dirty = false;
        match rx.recv_timeout(timeout) {
            Ok(ev) => {
                if handle_event(&mut session, ev) == Flow::Quit {
                    session.stop();
                    return Ok(());
                }
                dirty = true;
                // Drain anything else that queued up meanwhile
                while let Ok(ev) = rx.try_recv() {
                    if handle_event(&mut session, ev) == Flow::Quit {
                        session.stop();
                        return Ok(());
                    }
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                session.stop();
                bail!("input thread stopped");
            }
        }

        // ── Advance the simulation ───────────────────────────────────────────
        dirty |= session.update(Instant::now());

        if dirty {
            display::render(out, session.state()).context("failed to draw frame")?;
        }
    }
}

#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Quit,
}

fn handle_event(session: &mut Session, ev: Event) -> Flow {
    let Event::Key(KeyEvent {
        code,
        kind,
        modifiers,
        ..
    }) = ev
    else {
        return Flow::Continue;
    };
    // Key-repeat counts as a fresh press; releases are ignored.
    if kind == KeyEventKind::Release {
        return Flow::Continue;
    }

    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Flow::Quit,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Flow::Quit,
        KeyCode::Enter if session.state().phase != Phase::Running => {
            session.start(Instant::now());
            Flow::Continue
        }
        _ => {
            session.handle_key(code);
            Flow::Continue
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let (width, height) = terminal::size().context("failed to query terminal size")?;
    if width < display::MIN_COLS || height < display::MIN_ROWS {
        bail!(
            "terminal is {}x{}, need at least {}x{}",
            width,
            height,
            display::MIN_COLS,
            display::MIN_ROWS
        );
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(err) => {
                log::warn!("input read failed: {}", err);
                break;
            }
        }
    });

    log::info!("space invaders starting");
    let result = run(&mut out, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
