//! Line-oriented console front end.
//!
//! Reads one command per line, plays the human side through a
//! [`GameController`] and answers for the automated side after every
//! accepted move.

mod command;

pub use command::{parse_console_command, ConsoleCommand};

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::search::log::StdoutLogger;
use crate::board::{AiEngine, Color, GameStatus, Position, SearchConfig, DEFAULT_MAX_DEPTH};
use crate::engine::GameController;

const HELP: &str = "commands: <from><to> (e.g. e2e4), moves <sq>, fen [text], board, new, quit";

/// Command-line options of the console binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleOptions {
    pub depth: u32,
    pub ai_color: Color,
    pub seed: Option<u64>,
    pub use_opening_book: bool,
    /// Print a search summary line after every automated move
    pub info: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        ConsoleOptions {
            depth: DEFAULT_MAX_DEPTH,
            ai_color: Color::Black,
            seed: None,
            use_opening_book: true,
            info: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionsError {
    MissingValue(String),
    InvalidValue { flag: String, value: String },
    UnknownFlag(String),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::MissingValue(flag) => write!(f, "missing value for {flag}"),
            OptionsError::InvalidValue { flag, value } => {
                write!(f, "invalid value '{value}' for {flag}")
            }
            OptionsError::UnknownFlag(flag) => write!(f, "unknown option {flag}"),
        }
    }
}

impl std::error::Error for OptionsError {}

impl ConsoleOptions {
    /// Parse flags, not including the program name.
    pub fn parse<I, S>(args: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = ConsoleOptions::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let flag = arg.as_ref();
            match flag {
                "--depth" => {
                    options.depth = parse_value(flag, args.next())?;
                    if options.depth == 0 {
                        return Err(OptionsError::InvalidValue {
                            flag: flag.to_string(),
                            value: "0".to_string(),
                        });
                    }
                }
                "--seed" => options.seed = Some(parse_value(flag, args.next())?),
                "--white" => options.ai_color = Color::White,
                "--no-book" => options.use_opening_book = false,
                "--info" => options.info = true,
                other => return Err(OptionsError::UnknownFlag(other.to_string())),
            }
        }
        Ok(options)
    }

    #[must_use]
    pub fn search_config(&self) -> SearchConfig {
        let config = SearchConfig::depth(self.depth)
            .with_ai_color(self.ai_color)
            .with_opening_book(self.use_opening_book);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn parse_value<T, S>(flag: &str, value: Option<S>) -> Result<T, OptionsError>
where
    T: std::str::FromStr,
    S: AsRef<str>,
{
    let value = value.ok_or_else(|| OptionsError::MissingValue(flag.to_string()))?;
    value
        .as_ref()
        .parse()
        .map_err(|_| OptionsError::InvalidValue {
            flag: flag.to_string(),
            value: value.as_ref().to_string(),
        })
}

/// Interactive session over any line source and sink.
pub struct Console {
    game: GameController,
}

impl Console {
    #[must_use]
    pub fn new(options: &ConsoleOptions) -> Self {
        let config = options.search_config();
        let engine = if options.info {
            AiEngine::with_logger(config, Box::new(StdoutLogger))
        } else {
            AiEngine::new(config)
        };
        Console {
            game: GameController::with_engine(engine),
        }
    }

    #[must_use]
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Process commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> io::Result<()> {
        self.respond(out)?;

        for line in input.lines() {
            let line = line?;
            let Some(cmd) = parse_console_command(&line) else {
                continue;
            };
            if !self.execute(cmd, out)? {
                break;
            }
            out.flush()?;
        }
        Ok(())
    }

    /// Run one command. Returns `false` on `quit`.
    pub fn execute<W: Write>(&self, cmd: ConsoleCommand, out: &mut W) -> io::Result<bool> {
        match cmd {
            ConsoleCommand::Move(text) => {
                if self.game.move_text(&text) {
                    self.respond(out)?;
                } else {
                    writeln!(out, "illegal move")?;
                }
            }
            ConsoleCommand::Moves(Some(square)) => {
                let targets: Vec<String> = self
                    .game
                    .valid_moves(square.col(), square.row())
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                writeln!(out, "moves {square}: {}", targets.join(" "))?;
            }
            ConsoleCommand::Moves(None) => writeln!(out, "usage: moves <square>")?,
            ConsoleCommand::Fen(None) => writeln!(out, "{}", self.game.snapshot().to_fen())?,
            ConsoleCommand::Fen(Some(text)) => {
                self.game.set_position(Position::from_fen(&text));
                self.respond(out)?;
            }
            ConsoleCommand::Board => write!(out, "{}", self.game.snapshot())?,
            ConsoleCommand::New => {
                self.game.reset();
                self.respond(out)?;
            }
            ConsoleCommand::Help => writeln!(out, "{HELP}")?,
            ConsoleCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Report a finished game, otherwise let the automated side move if it is its turn.
    fn respond<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.report_game_over(out)? {
            return Ok(());
        }
        if self.game.snapshot().side_to_move() != self.game.ai_color() {
            return Ok(());
        }
        if let Some(mv) = self.game.play_ai_move() {
            writeln!(out, "ai {mv}")?;
            self.report_game_over(out)?;
        }
        Ok(())
    }

    fn report_game_over<W: Write>(&self, out: &mut W) -> io::Result<bool> {
        let to_move = self.game.snapshot().side_to_move();
        match self.game.status() {
            GameStatus::Checkmate => {
                writeln!(out, "checkmate {} wins", to_move.opponent())?;
                Ok(true)
            }
            GameStatus::Stalemate => {
                writeln!(out, "stalemate")?;
                Ok(true)
            }
            GameStatus::Ongoing | GameStatus::Check => Ok(false),
        }
    }
}
