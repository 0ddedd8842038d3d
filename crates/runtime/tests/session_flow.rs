//! Session lifecycle: plays, undo, autosave, resume and finishing a game.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use sandlot_core::{
    GameEndReason, GameSetup, GameState, HalfInning, PlayEvent, Team, Winner, career_deltas,
};
use sandlot_runtime::{
    CareerStatsRepository, GameRecordRepository, GameSession, InMemoryCareerRepository,
    InMemoryGameRepository, InMemoryStateRepo, RepositoryError, RuntimeError, StateRepository,
};

fn setup(max_innings: u32) -> GameSetup {
    GameSetup {
        home_team: "Sharks".into(),
        away_team: "Jets".into(),
        home_abbreviation: "SHK".into(),
        away_abbreviation: "JET".into(),
        home_players: vec!["Bernardo".into(), "Chino".into()],
        away_players: vec!["Riff".into(), "Ice".into()],
        max_innings,
    }
}

/// Away homers, then both sides go down in order: 7 plays, away wins 1-0.
const SHORT_GAME: [PlayEvent; 7] = [
    PlayEvent::HomeRun,
    PlayEvent::Out,
    PlayEvent::Out,
    PlayEvent::Out,
    PlayEvent::Out,
    PlayEvent::Out,
    PlayEvent::Out,
];

fn play_all(session: &mut GameSession, events: &[PlayEvent]) {
    for event in events {
        session.dispatch(*event).expect("play should be accepted");
    }
}

#[test]
fn invalid_setup_is_rejected() {
    let mut bad = setup(1);
    bad.away_players.clear();

    assert!(matches!(
        GameSession::start(&bad),
        Err(RuntimeError::Setup(_))
    ));
}

#[test]
fn plays_build_history_and_undo_restores_it() {
    let mut session = GameSession::start(&setup(3)).unwrap();
    let opening = session.state().clone();

    let outcome = session.dispatch(PlayEvent::Double).unwrap();
    assert_eq!(outcome.runs_scored, 0);
    assert_eq!(session.play_count(), 1);
    assert_eq!(session.state().current_batter, "Ice");

    assert!(session.undo().unwrap());
    assert_eq!(session.state(), &opening);
    assert!(!session.undo().unwrap(), "nothing left to undo");
}

#[test]
fn rejected_play_leaves_session_untouched() {
    let mut session = GameSession::start(&setup(3)).unwrap();
    assert!(!session.can_double_play());

    let err = session
        .dispatch(PlayEvent::DoublePlay { base: None })
        .unwrap_err();
    assert!(matches!(err, RuntimeError::Play(_)));
    assert_eq!(session.play_count(), 0);
    assert!(!session.can_undo());
}

#[test]
fn finished_game_refuses_plays_and_produces_record() {
    let mut session = GameSession::start(&setup(1)).unwrap();
    assert!(matches!(session.finish(), Err(RuntimeError::GameInProgress)));

    play_all(&mut session, &SHORT_GAME);
    assert!(session.is_over());
    assert!(matches!(
        session.dispatch(PlayEvent::Single),
        Err(RuntimeError::GameOver)
    ));

    let record = session.finish().unwrap();
    assert_eq!(record.game_history.len(), SHORT_GAME.len() + 1);
    assert_eq!(record.game_history_count, record.game_history.len());
    assert_eq!(record.game_history[0].outs, 0);
    assert_eq!(record.game_history.last(), Some(&record.final_game_state));
    assert_eq!(record.game_summary.winner, Winner::Away);
    assert_eq!(record.game_summary.game_end_reason, GameEndReason::Regulation);
    assert_eq!(record.headline(), "JET 1, SHK 0");

    let riff = &record.game_summary.away_player_stats["Riff"];
    assert_eq!(riff.stats.homers, 1);
    assert_eq!(riff.stats.rbis, 1);
}

#[test]
fn finished_game_is_saved_and_credited_once() {
    let mut session = GameSession::start(&setup(1)).unwrap();
    play_all(&mut session, &SHORT_GAME);
    let record = session.finish().unwrap();

    let games = InMemoryGameRepository::new();
    let careers = InMemoryCareerRepository::new();

    let id = games.save(&record).unwrap();
    let deltas = career_deltas(&record.game_summary, session.matchup());
    assert!(careers.apply_game(&id, &deltas).unwrap());
    assert!(!careers.apply_game(&id, &deltas).unwrap());

    let riff = careers.get("riff").unwrap().unwrap();
    assert_eq!(riff.games_played, 1);
    assert_eq!(riff.totals.homers, 1);
    assert!(riff.played_for("Jets"));

    let sharks = careers.by_team("Sharks").unwrap();
    assert_eq!(sharks.len(), 2);

    assert_eq!(games.list().unwrap()[0].id, id);
    assert_eq!(games.load(&id).unwrap(), Some(record));
}

#[test]
fn storing_the_same_session_twice_credits_it_once() {
    let mut session = GameSession::start(&setup(1)).unwrap().with_id("opening-day");
    play_all(&mut session, &SHORT_GAME);

    let games = InMemoryGameRepository::new();
    let careers = InMemoryCareerRepository::new();

    let mut applied = Vec::new();
    for _ in 0..2 {
        let record = session.finish().unwrap();
        assert_eq!(record.session_id, "opening-day");
        let id = games.save(&record).unwrap();
        let deltas = career_deltas(&record.game_summary, session.matchup());
        applied.push((id.clone(), careers.apply_game(&id, &deltas).unwrap()));
    }

    assert_eq!(applied[0].0, applied[1].0);
    assert_eq!((applied[0].1, applied[1].1), (true, false));
    assert_eq!(games.list().unwrap().len(), 1);

    let riff = careers.get("riff").unwrap().unwrap();
    assert_eq!(riff.games_played, 1);
    assert_eq!(riff.totals.homers, 1);

    // A different session with the same teams is a separate game.
    let mut rematch = GameSession::start(&setup(1)).unwrap().with_id("rematch");
    play_all(&mut rematch, &SHORT_GAME);
    let id = games.save(&rematch.finish().unwrap()).unwrap();
    assert_ne!(id, applied[0].0);
    assert_eq!(games.list().unwrap().len(), 2);
}

/// Snapshot store whose writes can be switched off.
#[derive(Default)]
struct FlakyStates {
    inner: InMemoryStateRepo,
    failing: AtomicBool,
}

impl StateRepository for FlakyStates {
    fn save(&self, play: u64, state: &GameState) -> sandlot_runtime::repository::Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepositoryError::Io(std::io::Error::other("disk full")));
        }
        self.inner.save(play, state)
    }

    fn load(&self, play: u64) -> sandlot_runtime::repository::Result<Option<GameState>> {
        self.inner.load(play)
    }

    fn exists(&self, play: u64) -> bool {
        self.inner.exists(play)
    }

    fn delete(&self, play: u64) -> sandlot_runtime::repository::Result<()> {
        self.inner.delete(play)
    }

    fn list_plays(&self) -> sandlot_runtime::repository::Result<Vec<u64>> {
        self.inner.list_plays()
    }
}

#[test]
fn failed_autosave_does_not_record_the_play() {
    let repo = Arc::new(FlakyStates::default());
    let mut session = GameSession::start(&setup(3))
        .unwrap()
        .with_autosave(repo.clone())
        .unwrap();
    session.dispatch(PlayEvent::Single).unwrap();
    let before = session.state().clone();

    repo.failing.store(true, Ordering::SeqCst);
    let err = session.dispatch(PlayEvent::Double).unwrap_err();
    assert!(matches!(err, RuntimeError::Repository(RepositoryError::Io(_))));
    assert_eq!(session.state(), &before);
    assert_eq!(session.play_count(), 1);
    assert_eq!(repo.list_plays().unwrap(), [0, 1]);

    repo.failing.store(false, Ordering::SeqCst);
    session.dispatch(PlayEvent::Double).unwrap();
    assert_eq!(session.play_count(), 2);
    assert_eq!(repo.latest().unwrap().unwrap().1, *session.state());
}

#[test]
fn autosave_tracks_plays_and_undo() {
    let repo = Arc::new(InMemoryStateRepo::new());
    let mut session = GameSession::start(&setup(3))
        .unwrap()
        .with_autosave(repo.clone())
        .unwrap();
    assert_eq!(repo.list_plays().unwrap(), [0]);

    play_all(&mut session, &[PlayEvent::Single, PlayEvent::Strike]);
    assert_eq!(repo.list_plays().unwrap(), [0, 1, 2]);
    assert_eq!(repo.latest().unwrap().unwrap().1, *session.state());

    session.undo().unwrap();
    assert_eq!(repo.list_plays().unwrap(), [0, 1]);
}

#[test]
fn resume_rebuilds_state_and_undo_history() {
    let repo = Arc::new(InMemoryStateRepo::new());
    let mut session = GameSession::start(&setup(3))
        .unwrap()
        .with_autosave(repo.clone())
        .unwrap();
    play_all(&mut session, &[PlayEvent::Single, PlayEvent::Out, PlayEvent::Triple]);
    let matchup = session.matchup().clone();
    let expected = session.state().clone();
    drop(session);

    let mut resumed = GameSession::resume(matchup, repo.clone()).unwrap();
    assert_eq!(resumed.state(), &expected);
    assert_eq!(resumed.play_count(), 3);

    resumed.undo().unwrap();
    assert_eq!(resumed.state().outs, 1);
    assert_eq!(resumed.state().half, HalfInning::Top);
    assert_eq!(resumed.state().batting_team(), Team::Away);
    assert_eq!(repo.list_plays().unwrap(), [0, 1, 2]);
}

#[test]
fn resume_rejects_gaps_in_snapshots() {
    let repo = Arc::new(InMemoryStateRepo::new());
    let mut session = GameSession::start(&setup(3))
        .unwrap()
        .with_autosave(repo.clone())
        .unwrap();
    play_all(&mut session, &[PlayEvent::Single, PlayEvent::Single]);
    let matchup = session.matchup().clone();
    repo.delete(1).unwrap();

    assert!(matches!(
        GameSession::resume(matchup, repo),
        Err(RuntimeError::CorruptSnapshots(_))
    ));
}
