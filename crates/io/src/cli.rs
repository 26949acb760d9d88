//! Command-line argument parser with a flag-dispatch table.
//!
//! Arguments are scanned left to right; each recognized flag token is
//! looked up in [`FLAG_TABLE`] and its handler receives the reader plus
//! the following value token (empty when the next token is itself a
//! flag). Handlers either continue the scan, stop it, or report a
//! [`ConfigError`]; errors are printed with a pointer to the help page and
//! never propagate past the parser.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use thiserror::Error;

use terminal_snake_types::{BoardSize, Difficulty, DEFAULT_BOARD_SIZE, DEFAULT_SPEED_SECS};

use crate::highscore;

/// Everything that can be wrong with the command line. Consumed inside
/// the parser: printed, never raised.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Parameter -b cannot be empty!")]
    EmptyBoardSize,
    #[error("Invalid board size argument. Use pattern UINTxUINT i.e. '-b 40x20'")]
    BadBoardPattern,
    #[error("Invalid board size argument. Board size has to be at least 1x1")]
    ZeroBoardDimension,
    #[error("Difficulty argument cannot be empty. Use either e, easy, m, medium, h or hard")]
    EmptyDifficulty,
    #[error("Invalid difficulty argument. Use either e, easy, m, medium, h or hard")]
    BadDifficulty,
    #[error("Speed argument cannot be empty. Use a positive float number")]
    EmptySpeed,
    #[error("Invalid speed argument. Use a positive float number")]
    BadSpeed,
    #[error("Unrecognized parameters.")]
    UnrecognizedFlag,
}

/// Whether the scan goes on after a handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

type FlagHandler = fn(&mut CliReader, &str) -> Result<Flow, ConfigError>;

/// The flag-dispatch table. Tokens not listed here are a hard parse
/// error.
const FLAG_TABLE: &[(&str, FlagHandler)] = &[
    ("-h", handle_help),
    ("-help", handle_help),
    ("-H", handle_show_highscore),
    ("-c", handle_clear_highscore),
    ("-b", handle_board_size),
    ("-d", handle_difficulty),
    ("-s", handle_speed),
];

fn lookup(flag: &str) -> Option<FlagHandler> {
    FLAG_TABLE
        .iter()
        .find(|(name, _)| *name == flag)
        .map(|&(_, handler)| handler)
}

/// Parsed session configuration.
///
/// When [`CliReader::game_should_start`] is false the remaining fields
/// must not be trusted; the reader has already printed whatever the user
/// needs to see.
#[derive(Debug, Clone)]
pub struct CliReader {
    should_start: bool,
    board_size: BoardSize,
    speed_seconds: f32,
    highscore_path: PathBuf,
}

impl CliReader {
    pub fn new(board_size: BoardSize, speed_seconds: f32, highscore_path: PathBuf) -> Self {
        Self {
            should_start: false,
            board_size,
            speed_seconds,
            highscore_path,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(
            DEFAULT_BOARD_SIZE,
            DEFAULT_SPEED_SECS,
            highscore::default_path(),
        )
    }

    /// Scan the process arguments (`args[0]` is the program name and is
    /// skipped). On malformed input this prints a diagnostic plus a help
    /// pointer, leaves `game_should_start()` false, and stops scanning at
    /// the offending token.
    pub fn analyse_arguments(&mut self, args: &[String]) {
        self.should_start = true;
        let mut was_previous_flag = false;

        let mut i = 1;
        while i < args.len() {
            let token = args[i].as_str();

            // Skip value tokens already consumed by the preceding flag.
            if !token.starts_with('-') && was_previous_flag {
                was_previous_flag = false;
                i += 1;
                continue;
            }

            // Incorrect flags, and values not following any flag.
            let Some(handler) = lookup(token) else {
                self.fail(ConfigError::UnrecognizedFlag);
                return;
            };

            // The value is the next token, unless that is itself a flag.
            let value = match args.get(i + 1) {
                Some(next) if !next.starts_with('-') => next.as_str(),
                _ => "",
            };
            was_previous_flag = true;

            match handler(self, value) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Stop) => return,
                Err(err) => {
                    self.fail(err);
                    return;
                }
            }
            i += 1;
        }
    }

    pub fn game_should_start(&self) -> bool {
        self.should_start
    }

    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    pub fn speed_seconds(&self) -> f32 {
        self.speed_seconds
    }

    pub fn highscore_path(&self) -> &Path {
        &self.highscore_path
    }

    fn fail(&mut self, err: ConfigError) {
        println!("Error! {err}");
        print_help_hint();
        self.should_start = false;
    }
}

// ── Flag handlers ──

fn handle_help(reader: &mut CliReader, _value: &str) -> Result<Flow, ConfigError> {
    print_usage();
    reader.should_start = false;
    Ok(Flow::Stop)
}

fn handle_show_highscore(reader: &mut CliReader, _value: &str) -> Result<Flow, ConfigError> {
    match highscore::load(&reader.highscore_path) {
        None => println!("There is currently no highscore saved for this user."),
        Some(score) => println!("Your highscore is: {score}"),
    }
    reader.should_start = false;
    Ok(Flow::Stop)
}

fn handle_clear_highscore(reader: &mut CliReader, _value: &str) -> Result<Flow, ConfigError> {
    // Clearing never starts the game, whatever the outcome.
    reader.should_start = false;

    if highscore::load(&reader.highscore_path).is_none() {
        println!("There is no highscore to clear for the current user!");
        return Ok(Flow::Stop);
    }

    println!("Do you really want to clear the highscore? Write [yes/no].");
    if !confirm_yes_no(std::io::stdin().lock()) {
        println!("Highscore has not been cleared.");
        return Ok(Flow::Stop);
    }

    match highscore::clear(&reader.highscore_path) {
        Ok(()) => println!("Highscore cleared!"),
        Err(err) => println!("Error! Highscore could not be cleared: {err}"),
    }
    Ok(Flow::Stop)
}

fn handle_board_size(reader: &mut CliReader, value: &str) -> Result<Flow, ConfigError> {
    reader.board_size = parse_board_size(value)?;
    Ok(Flow::Continue)
}

fn handle_difficulty(reader: &mut CliReader, value: &str) -> Result<Flow, ConfigError> {
    reader.speed_seconds = parse_difficulty(value)?.speed_seconds();
    Ok(Flow::Continue)
}

fn handle_speed(reader: &mut CliReader, value: &str) -> Result<Flow, ConfigError> {
    reader.speed_seconds = parse_speed(value)?;
    Ok(Flow::Continue)
}

// ── Pure value parsers ──

/// Parse a `UINTxUINT` board size: digits only on both sides of a single
/// lowercase `x`, both components at least 1.
pub fn parse_board_size(value: &str) -> Result<BoardSize, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::EmptyBoardSize);
    }
    let (w, h) = value.split_once('x').ok_or(ConfigError::BadBoardPattern)?;

    let component = |s: &str| -> Result<u32, ConfigError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigError::BadBoardPattern);
        }
        s.parse().map_err(|_| ConfigError::BadBoardPattern)
    };

    let size = BoardSize::new(component(w)?, component(h)?);
    if size.width < 1 || size.height < 1 {
        return Err(ConfigError::ZeroBoardDimension);
    }
    Ok(size)
}

/// Parse a difficulty token into its preset.
pub fn parse_difficulty(value: &str) -> Result<Difficulty, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::EmptyDifficulty);
    }
    Difficulty::from_str(value).ok_or(ConfigError::BadDifficulty)
}

/// Parse a move interval: a positive, finite float in seconds.
pub fn parse_speed(value: &str) -> Result<f32, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::EmptySpeed);
    }
    let speed: f32 = value.parse().map_err(|_| ConfigError::BadSpeed)?;
    if !speed.is_finite() || speed <= 0.0 {
        return Err(ConfigError::BadSpeed);
    }
    Ok(speed)
}

// ── User-facing text ──

/// Read lines until the user answers exactly `yes` or `no` (surrounding
/// whitespace ignored). Exhausted input counts as `no`.
pub fn confirm_yes_no<R: BufRead>(input: R) -> bool {
    for line in input.lines() {
        match line.as_deref().map(str::trim) {
            Ok("yes") => return true,
            Ok("no") => return false,
            Ok(_) => continue,
            Err(_) => return false,
        }
    }
    false
}

fn print_help_hint() {
    println!("Use -h or -help to view the help page.");
}

fn print_usage() {
    println!(
        "Terminal Snake\n\
         \n\
         Controls:\n\
         WASD or arrow keys - change direction of the snake\n\
         Tab - exit the game\n\
         \n\
         Highscore:\n\
         Upon confirmation, this game saves your highscore in a text file ~/{file}.\n\
         \n\
         Available options:\n\
         -b - change game board dimensions (pattern: 'UINTxUINT' i.e. '-b 40x20').\n\
         -d - change difficulty (e - easy, m - medium, h - hard).\n\
         -s - change time duration between snake moves (seconds, positive float).\n\
         \n\
         Options that do not run the game:\n\
         -H - show highscore.\n\
         -c - clear highscore.\n\
         -h (-help) - view this page.",
        file = highscore::HIGHSCORE_FILE_NAME
    );
}
