//! Terminal snake runner (default binary).
//!
//! Parses the command line, then drives the fixed-interval session loop:
//! keyboard dispatch to the registered observers, the wall-clock move
//! timer, the simulation step, and the render surface. The surface is
//! restored on every exit path, errors included.

use std::cell::RefCell;
use std::io::Stdout;
use std::path::Path;
use std::process::ExitCode;
use std::rc::Rc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};

use terminal_snake::core::SnakeGame;
use terminal_snake::input::{drain_events, should_quit, to_key_code, Dispatcher};
use terminal_snake::io::cli::{confirm_yes_no, CliReader};
use terminal_snake::io::highscore;
use terminal_snake::term::{GameView, Surface};
use terminal_snake::types::INPUT_POLL_MS;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let mut reader = CliReader::with_defaults();
    reader.analyse_arguments(&args);

    // Help/highscore/clear requests and malformed input have already
    // printed whatever the user needs to see.
    if !reader.game_should_start() {
        return ExitCode::FAILURE;
    }

    match run(&reader) {
        Ok(score) => {
            offer_highscore(reader.highscore_path(), score);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Run one session. The surface is terminated no matter how `play` ends,
/// including a failure halfway through `initialize` itself.
fn run(reader: &CliReader) -> Result<u32> {
    let mut surface = Surface::stdout();
    if let Err(err) = surface.initialize() {
        let _ = surface.terminate();
        return Err(err.into());
    }

    let result = play(reader, &mut surface);

    // Always try to restore terminal state.
    let _ = surface.terminate();
    result
}

fn play(reader: &CliReader, surface: &mut Surface<Stdout>) -> Result<u32> {
    let (cols, rows) = surface.grid();
    let (need_cols, need_rows) = GameView::required_grid(reader.board_size());
    if cols < need_cols || rows < need_rows {
        bail!(
            "terminal is {cols}x{rows}, but a {}x{} board needs at least {need_cols}x{need_rows}",
            reader.board_size().width,
            reader.board_size().height,
        );
    }

    let game = Rc::new(RefCell::new(SnakeGame::new(
        reader.board_size(),
        reader.speed_seconds(),
        clock_seed(),
    )));
    let mut dispatcher = Dispatcher::new();
    dispatcher.register(game.clone());
    let view = GameView::new();

    view.render(&game.borrow(), surface)?;
    let mut last_tick = Instant::now();

    loop {
        // Block on input only until the next timer check is due.
        let interval = Duration::from_secs_f32(game.borrow().state().speed_seconds());
        let timeout = interval
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO)
            .min(Duration::from_millis(INPUT_POLL_MS));

        for key in drain_events(timeout)? {
            if should_quit(key) {
                return Ok(game.borrow().state().score());
            }
            dispatcher.dispatch(to_key_code(key));
        }

        // The timer arms the move flag once per elapsed interval.
        if last_tick.elapsed() >= interval {
            last_tick = Instant::now();
            game.borrow_mut().state_mut().set_should_move(true);
        }

        // The consumer clears the flag and advances the simulation.
        let mut moved = false;
        {
            let mut game = game.borrow_mut();
            if game.state().should_move() {
                game.state_mut().set_should_move(false);
                game.step();
                moved = true;
            }
        }

        if moved {
            let game = game.borrow();
            view.render(&game, surface)?;
            if game.state().is_finished() {
                break;
            }
        }
    }

    // The game-over overlay is on screen; hold it until the quit key.
    wait_for_quit()?;
    let score = game.borrow().state().score();
    Ok(score)
}

fn wait_for_quit() -> Result<()> {
    loop {
        for key in drain_events(Duration::from_millis(10 * INPUT_POLL_MS))? {
            if should_quit(key) {
                return Ok(());
            }
        }
    }
}

/// Seed the food RNG from the wall clock.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Post-session summary on the regular screen, with an interactive offer
/// to persist a new highscore. Persistence failures are reported, never
/// fatal.
fn offer_highscore(path: &Path, score: u32) {
    println!("Final score: {score}");

    let best = highscore::load(path);
    let improved = match best {
        Some(best) => score > best,
        None => score > 0,
    };
    if !improved {
        if let Some(best) = best {
            println!("Your highscore is: {best}");
        }
        return;
    }

    println!("New highscore! Save it? Write [yes/no].");
    if confirm_yes_no(std::io::stdin().lock()) {
        match highscore::save(path, score) {
            Ok(()) => println!("Highscore saved!"),
            Err(err) => println!("Error! Highscore could not be saved: {err}"),
        }
    } else {
        println!("Highscore has not been saved.");
    }
}
