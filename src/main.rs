//! Terminal runner (default binary).
//!
//! Owns the clock and the event loop: crossterm key events become session
//! commands, and a fixed cadence feeds monotonic timestamps to the gravity
//! tick. The session itself never reads a clock.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::Session;
use blockfall::input::{command_for_key, should_quit, InputHandler};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameCommand, Status, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = Session::new(startup_seed());

    let view = GameView::default();
    let mut input_handler = InputHandler::new();
    let mut fb = FrameBuffer::new(0, 0);

    let epoch = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }

                        match command_for_key(key) {
                            // Movement keys go through the DAS/ARR handler so a
                            // held key repeats without double-applying.
                            Some(
                                GameCommand::MoveLeft
                                | GameCommand::MoveRight
                                | GameCommand::SoftDrop,
                            ) => {
                                if let Some(command) = input_handler.handle_key_press(key.code) {
                                    session.apply(command);
                                }
                            }
                            Some(command) => {
                                apply_ui_command(&mut session, &mut input_handler, command);
                            }
                            None => {}
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Ignore terminal auto-repeat; DAS/ARR handles repeats.
                    }
                    KeyEventKind::Release => {
                        input_handler.handle_key_release(key.code);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for command in input_handler.update(TICK_MS) {
                session.apply(command);
            }

            session.tick(epoch.elapsed().as_millis() as u64);
        }
    }
}

/// Non-movement commands, with the UI-level conveniences: `p` toggles
/// pause/resume, and a reset also drops held-key state.
fn apply_ui_command(session: &mut Session, input: &mut InputHandler, command: GameCommand) {
    match command {
        GameCommand::Pause if session.status() == Status::Paused => {
            session.resume();
        }
        GameCommand::Reset => {
            input.reset();
            session.reset();
        }
        _ => {
            session.apply(command);
        }
    }
}

/// Seed the generator from the wall clock so each run plays a fresh
/// sequence. The clock lives out here; the core only ever sees the seed.
fn startup_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1)
}
