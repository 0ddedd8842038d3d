//! Line-oriented scoring loop.
//!
//! [`ScorerApp`] reads commands, forwards plays to the [`GameSession`] and
//! prints the scoreboard after each one. When the last out is recorded the
//! game is stored and its stats are credited to every player's career record.

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use sandlot_core::{PlayEvent, career_deltas};
use sandlot_runtime::{
    CareerStatsRepository, GameRecordRepository, GameSession, RepositoryError, RuntimeError,
    leaders,
};

use crate::input::{Command, HELP, parse_command};
use crate::scoreboard::{
    describe_play, render_history, render_leaders, render_scoreboard, render_summary,
    render_team, render_timeline,
};

const LEADERBOARD_SIZE: usize = 10;

/// Whether the loop should keep reading input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct ScorerApp {
    session: GameSession,
    games: Arc<dyn GameRecordRepository>,
    careers: Arc<dyn CareerStatsRepository>,
    saved_game: Option<String>,
}

impl ScorerApp {
    pub fn new(
        session: GameSession,
        games: Arc<dyn GameRecordRepository>,
        careers: Arc<dyn CareerStatsRepository>,
    ) -> Self {
        Self {
            session,
            games,
            careers,
            saved_game: None,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Id the finished game was stored under, once it has been saved.
    pub fn saved_game(&self) -> Option<&str> {
        self.saved_game.as_deref()
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        writeln!(output, "{}", render_scoreboard(self.session.state(), self.session.matchup()))?;
        // A resumed session may have ended before its record was stored.
        if self.session.is_over() {
            self.complete_game(&mut output)?;
        }
        self.prompt(&mut output)?;

        for line in input.lines() {
            let line = line.context("failed to read command")?;
            if self.handle_line(&line, &mut output)? == Flow::Exit {
                break;
            }
            self.prompt(&mut output)?;
        }

        if !self.session.is_over() {
            tracing::info!(
                session = %self.session.id(),
                plays = self.session.play_count(),
                "Scorer left before the game ended"
            );
        }
        Ok(())
    }

    /// Handles one command line. Bad input is reported and never fatal.
    pub fn handle_line(&mut self, line: &str, output: &mut impl Write) -> Result<Flow> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{err}")?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::None => {}
            Command::Quit => return Ok(Flow::Exit),
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Score => writeln!(
                output,
                "{}",
                render_scoreboard(self.session.state(), self.session.matchup())
            )?,
            Command::Undo => {
                if self.session.is_over() {
                    writeln!(output, "The game is over and has been saved.")?;
                } else if self.session.undo()? {
                    writeln!(output, "Last play undone.")?;
                    writeln!(
                        output,
                        "{}",
                        render_scoreboard(self.session.state(), self.session.matchup())
                    )?;
                } else {
                    writeln!(output, "Nothing to undo.")?;
                }
            }
            Command::Leaders(stat) => {
                let players = self.careers.list().context("failed to read career stats")?;
                let board = leaders(&players, stat, LEADERBOARD_SIZE);
                write!(output, "{}", render_leaders(stat, &board))?;
            }
            Command::History => {
                let games = self.games.list().context("failed to list saved games")?;
                write!(output, "{}", render_history(&games))?;
            }
            Command::Replay(id) => match self.games.load(&id).context("failed to load game")? {
                Some(record) => write!(output, "{}", render_timeline(&record))?,
                None => writeln!(output, "No saved game {id:?}.")?,
            },
            Command::Delete(id) => match self.games.delete(&id) {
                Ok(()) => {
                    tracing::info!(game = %id, "Game deleted");
                    writeln!(output, "Deleted game {id}.")?;
                }
                Err(RepositoryError::NotFound { .. }) => {
                    writeln!(output, "No saved game {id:?}.")?;
                }
                Err(err) => return Err(err).context("failed to delete game"),
            },
            Command::Team(team) => {
                let players = self
                    .careers
                    .by_team(&team)
                    .context("failed to read career stats")?;
                write!(output, "{}", render_team(&team, &players))?;
            }
            Command::Play(event) => return self.record_play(event, output),
        }
        Ok(Flow::Continue)
    }

    fn record_play(&mut self, event: PlayEvent, output: &mut impl Write) -> Result<Flow> {
        if let PlayEvent::DoublePlay { base: None } = event
            && self.session.double_play_needs_base()
        {
            writeln!(output, "Which runner was retired? Use dp 1b, dp 2b or dp 3b.")?;
            return Ok(Flow::Continue);
        }

        let outcome = match self.session.dispatch(event) {
            Ok(outcome) => outcome,
            Err(RuntimeError::Repository(err)) => {
                return Err(err).context("failed to autosave the game");
            }
            Err(err) => {
                writeln!(output, "{err}")?;
                return Ok(Flow::Continue);
            }
        };

        writeln!(output, "{}", describe_play(event, &outcome))?;
        writeln!(
            output,
            "{}",
            render_scoreboard(self.session.state(), self.session.matchup())
        )?;

        if outcome.game_ended {
            self.complete_game(output)?;
        }
        Ok(Flow::Continue)
    }

    /// Saves the finished game and credits career stats exactly once.
    fn complete_game(&mut self, output: &mut impl Write) -> Result<()> {
        if self.saved_game.is_some() {
            return Ok(());
        }

        let record = self.session.finish().context("failed to build game record")?;
        writeln!(
            output,
            "{}",
            render_summary(&record.game_summary, self.session.matchup())
        )?;

        let id = self.games.save(&record).context("failed to save game")?;
        let deltas = career_deltas(&record.game_summary, self.session.matchup());
        let applied = self
            .careers
            .apply_game(&id, &deltas)
            .context("failed to update career stats")?;
        self.session
            .discard_snapshots()
            .context("failed to remove autosaved states")?;

        tracing::info!(game = %id, players = deltas.len(), applied, "Game stored");
        writeln!(output, "Game saved as {id}.")?;
        self.saved_game = Some(id);
        Ok(())
    }

    fn prompt(&self, output: &mut impl Write) -> Result<()> {
        if !self.session.is_over() {
            write!(output, "> ")?;
            output.flush()?;
        }
        Ok(())
    }
}
