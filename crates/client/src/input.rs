//! Input processing for the terminal scorer.
//!
//! This module owns the text-to-command mapping so the rest of the client can
//! stay agnostic about the exact spellings a scorer types.

use std::str::FromStr;

use sandlot_core::{Base, PlayEvent};
use sandlot_runtime::LeaderStat;
use thiserror::Error;

/// Keyword that starts a command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumString)]
#[strum(ascii_case_insensitive)]
enum Keyword {
    #[strum(serialize = "1b", serialize = "single")]
    Single,
    #[strum(serialize = "2b", serialize = "double")]
    Double,
    #[strum(serialize = "3b", serialize = "triple")]
    Triple,
    #[strum(serialize = "hr", serialize = "homer")]
    HomeRun,
    #[strum(serialize = "k", serialize = "strike")]
    Strike,
    #[strum(serialize = "out")]
    Out,
    #[strum(serialize = "dp")]
    DoublePlay,
    #[strum(serialize = "undo")]
    Undo,
    #[strum(serialize = "score")]
    Score,
    #[strum(serialize = "leaders")]
    Leaders,
    #[strum(serialize = "history", serialize = "games")]
    History,
    #[strum(serialize = "replay")]
    Replay,
    #[strum(serialize = "delete")]
    Delete,
    #[strum(serialize = "team")]
    Team,
    #[strum(serialize = "help", serialize = "?")]
    Help,
    #[strum(serialize = "quit", serialize = "exit")]
    Quit,
}

/// High-level outcome of parsing one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Record a play.
    Play(PlayEvent),
    Undo,
    /// Reprint the scoreboard.
    Score,
    /// Print career leaders for a stat.
    Leaders(LeaderStat),
    /// List stored games, newest first.
    History,
    /// Step through a stored game's timeline.
    Replay(String),
    /// Remove a stored game.
    Delete(String),
    /// Career lines of everyone who batted for a team.
    Team(String),
    Help,
    Quit,
    /// Blank line.
    None,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command {0:?}; type `help` for the list")]
    UnknownCommand(String),

    #[error("unknown base {0:?}; use 1b, 2b or 3b")]
    UnknownBase(String),

    #[error("unknown stat {0:?}")]
    UnknownStat(String),

    #[error("`{command}` takes no arguments")]
    UnexpectedArgument { command: String },

    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: String,
        what: &'static str,
    },
}

/// Parses one line typed by the scorer. Keywords are case-insensitive.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Ok(Command::None);
    };
    let keyword =
        Keyword::from_str(first).map_err(|_| InputError::UnknownCommand(first.to_string()))?;
    let rest: Vec<&str> = words.collect();
    let command_name = || first.to_lowercase();

    // Team names may contain spaces; every other command takes one word at most.
    if keyword != Keyword::Team && rest.len() > 1 {
        return Err(InputError::UnexpectedArgument {
            command: command_name(),
        });
    }
    let argument = rest.first().copied();
    let required = |what: &'static str| {
        argument
            .map(str::to_string)
            .ok_or_else(|| InputError::MissingArgument {
                command: command_name(),
                what,
            })
    };

    let command = match keyword {
        Keyword::DoublePlay => {
            let base = argument
                .map(|arg| Base::from_str(arg).map_err(|_| InputError::UnknownBase(arg.into())))
                .transpose()?;
            return Ok(Command::Play(PlayEvent::DoublePlay { base }));
        }
        Keyword::Leaders => {
            let stat = match argument {
                Some(arg) => parse_stat(arg)?,
                None => LeaderStat::BattingAverage,
            };
            return Ok(Command::Leaders(stat));
        }
        Keyword::Team => {
            required("a team name")?;
            return Ok(Command::Team(rest.join(" ")));
        }
        Keyword::Replay => return Ok(Command::Replay(required("a game id")?)),
        Keyword::Delete => return Ok(Command::Delete(required("a game id")?)),
        Keyword::Single => Command::Play(PlayEvent::Single),
        Keyword::Double => Command::Play(PlayEvent::Double),
        Keyword::Triple => Command::Play(PlayEvent::Triple),
        Keyword::HomeRun => Command::Play(PlayEvent::HomeRun),
        Keyword::Strike => Command::Play(PlayEvent::Strike),
        Keyword::Out => Command::Play(PlayEvent::Out),
        Keyword::Undo => Command::Undo,
        Keyword::Score => Command::Score,
        Keyword::History => Command::History,
        Keyword::Help => Command::Help,
        Keyword::Quit => Command::Quit,
    };

    match argument {
        Some(_) => Err(InputError::UnexpectedArgument {
            command: command_name(),
        }),
        None => Ok(command),
    }
}

/// Matches a stat's wire name, ignoring case.
fn parse_stat(arg: &str) -> Result<LeaderStat, InputError> {
    use strum::IntoEnumIterator;

    LeaderStat::iter()
        .find(|stat| stat.as_ref().eq_ignore_ascii_case(arg))
        .ok_or_else(|| InputError::UnknownStat(arg.to_string()))
}

pub const HELP: &str = "\
plays:   1b|single  2b|double  3b|triple  hr|homer  k|strike  out  dp [1b|2b|3b]
other:   undo  score  leaders [stat]  help  quit
stored:  history  replay <id>  delete <id>  team <name>";
