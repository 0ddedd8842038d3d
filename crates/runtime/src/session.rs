//! Session controller for one game.
//!
//! [`GameSession`] owns the single current [`GameState`], the undo history and
//! the static matchup. Every play goes through [`GameSession::dispatch`], which
//! runs the engine on the current state and only commits the result (and its
//! pre-play snapshot) when the play is accepted.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sandlot_core::{
    GameEngine, GameEnv, GameSetup, GameState, GameSummary, HistoryStack, Matchup, PlayEvent,
    PlayOutcome, Team, can_double_play, check_invariants, double_play_needs_base,
};

use crate::api::{Result, RuntimeError};
use crate::record::GameRecord;
use crate::repository::StateRepository;

/// One game in progress.
pub struct GameSession {
    id: String,
    matchup: Matchup,
    state: GameState,
    history: HistoryStack,
    started_at: DateTime<Utc>,
    autosave: Option<Arc<dyn StateRepository>>,
}

impl GameSession {
    /// Validates `setup` and starts a game at the top of the first.
    pub fn start(setup: &GameSetup) -> Result<Self> {
        let matchup = setup.validate()?;
        Ok(Self::from_matchup(matchup))
    }

    pub fn from_matchup(matchup: Matchup) -> Self {
        let state = GameState::new(&matchup);
        let started_at = Utc::now();
        let id = default_session_id(started_at);

        tracing::info!(
            away = %matchup.team(Team::Away).name,
            home = %matchup.team(Team::Home).name,
            innings = matchup.max_innings(),
            "Game started"
        );

        Self {
            id,
            matchup,
            state,
            history: HistoryStack::new(),
            started_at,
            autosave: None,
        }
    }

    /// Resumes a game from the snapshots in `repository`.
    ///
    /// Snapshot `0` is the opening state and the highest play number the
    /// current one; every snapshot in between becomes undo history. Starts a
    /// fresh game when the repository is empty.
    pub fn resume(matchup: Matchup, repository: Arc<dyn StateRepository>) -> Result<Self> {
        let plays = repository.list_plays()?;
        let mut session = Self::from_matchup(matchup);

        let Some((&latest, earlier)) = plays.split_last() else {
            return session.with_autosave(repository);
        };

        for (expected, play) in earlier.iter().enumerate() {
            if *play != expected as u64 {
                return Err(RuntimeError::CorruptSnapshots(format!(
                    "missing snapshot for play {expected}"
                )));
            }
            let state = load_snapshot(repository.as_ref(), *play)?;
            session.history.push(state);
        }
        if latest != earlier.len() as u64 {
            return Err(RuntimeError::CorruptSnapshots(format!(
                "missing snapshot for play {}",
                earlier.len()
            )));
        }
        session.state = load_snapshot(repository.as_ref(), latest)?;
        check_invariants(&session.state, &GameEnv::new(&session.matchup)).map_err(|err| {
            RuntimeError::CorruptSnapshots(format!("snapshot {latest} does not fit this game: {err}"))
        })?;

        tracing::info!(plays = latest, "Resumed game from snapshots");

        session.autosave = Some(repository);
        Ok(session)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Persists the current state now and after every accepted play.
    pub fn with_autosave(mut self, repository: Arc<dyn StateRepository>) -> Result<Self> {
        repository.save(self.play_count(), &self.state)?;
        self.autosave = Some(repository);
        Ok(self)
    }

    /// Records one play.
    ///
    /// Rejected plays leave the state and history untouched. With autosave on,
    /// the new state is written before it is committed, so a failed write also
    /// leaves the session as it was.
    pub fn dispatch(&mut self, event: PlayEvent) -> Result<PlayOutcome> {
        if self.state.game_ended {
            tracing::warn!(session = %self.id, %event, "Play rejected: game is over");
            return Err(RuntimeError::GameOver);
        }

        let mut next = self.state.clone();
        let env = GameEnv::new(&self.matchup);
        let outcome = GameEngine::new(&mut next)
            .execute(env, &event)
            .map_err(|err| {
                tracing::warn!(session = %self.id, %event, error = %err, "Play rejected");
                err
            })?;

        if let Some(repository) = &self.autosave {
            repository.save(self.play_count() + 1, &next).map_err(|err| {
                tracing::warn!(
                    session = %self.id,
                    %event,
                    error = %err,
                    "Autosave failed, play not recorded"
                );
                err
            })?;
        }
        let before = std::mem::replace(&mut self.state, next);
        self.history.push(before);

        tracing::debug!(
            session = %self.id,
            %event,
            runs = outcome.runs_scored,
            outs = outcome.outs_recorded,
            inning = self.state.inning,
            half = %self.state.half,
            "Play recorded"
        );
        if outcome.half_inning_ended && !self.state.game_ended {
            tracing::info!(
                session = %self.id,
                inning = self.state.inning,
                half = %self.state.half,
                away = self.state.away_score(),
                home = self.state.home_score(),
                "Half-inning over"
            );
        }
        if self.state.game_ended {
            tracing::info!(
                session = %self.id,
                away = self.state.away_score(),
                home = self.state.home_score(),
                walk_off = outcome.walk_off,
                "Game over"
            );
        }

        Ok(outcome)
    }

    /// Steps back one play. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> Result<bool> {
        let discarded = self.play_count();
        let Some(previous) = self.history.pop() else {
            return Ok(false);
        };
        self.state = previous;

        if let Some(repository) = &self.autosave {
            repository.delete(discarded)?;
        }

        tracing::debug!(session = %self.id, plays = self.play_count(), "Play undone");
        Ok(true)
    }

    /// Builds the persisted document for the finished game.
    pub fn finish(&self) -> Result<GameRecord> {
        if !self.state.game_ended {
            return Err(RuntimeError::GameInProgress);
        }

        let ended_at = Utc::now();
        let minutes = (ended_at - self.started_at).num_minutes().max(0);
        let summary = GameSummary::reduce(&self.state, &self.matchup)
            .with_duration(u32::try_from(minutes).unwrap_or(u32::MAX));

        let history = self
            .history
            .snapshots()
            .iter()
            .chain(std::iter::once(&self.state));
        let record = GameRecord::new(&self.matchup, history, &self.state, summary, ended_at)
            .with_session_id(&self.id);

        tracing::info!(
            session = %self.id,
            result = %record.headline(),
            reason = %record.game_summary.game_end_reason,
            states = record.game_history_count,
            "Game finished"
        );
        Ok(record)
    }

    /// Drops the autosaved snapshots once the game has been stored elsewhere.
    pub fn discard_snapshots(&self) -> Result<usize> {
        match &self.autosave {
            Some(repository) => Ok(repository.clear()?),
            None => Ok(0),
        }
    }

    pub fn can_double_play(&self) -> bool {
        can_double_play(&self.state)
    }

    pub fn double_play_needs_base(&self) -> bool {
        double_play_needs_base(&self.state)
    }

    pub fn is_over(&self) -> bool {
        self.state.game_ended
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn matchup(&self) -> &Matchup {
        &self.matchup
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    /// Number of plays recorded and not undone.
    pub fn play_count(&self) -> u64 {
        self.history.len() as u64
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

fn load_snapshot(repository: &dyn StateRepository, play: u64) -> Result<GameState> {
    repository
        .load(play)?
        .ok_or_else(|| RuntimeError::CorruptSnapshots(format!("snapshot {play} vanished")))
}

fn default_session_id(started_at: DateTime<Utc>) -> String {
    started_at.format("%Y%m%d-%H%M%S").to_string()
}
