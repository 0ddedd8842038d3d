//! Drives the scorer with scripted input.

use std::io::Cursor;
use std::sync::Arc;

use sandlot_client::{Flow, ScorerApp};
use sandlot_core::{GameSetup, PlayEvent, career_deltas};
use sandlot_runtime::{
    CareerStatsRepository, GameRecordRepository, GameSession, InMemoryCareerRepository,
    InMemoryGameRepository, InMemoryStateRepo, StateRepository,
};

struct Harness {
    app: ScorerApp,
    games: Arc<InMemoryGameRepository>,
    careers: Arc<InMemoryCareerRepository>,
}

fn setup() -> GameSetup {
    GameSetup {
        home_team: "Sharks".into(),
        away_team: "Jets".into(),
        home_abbreviation: "SHK".into(),
        away_abbreviation: "JET".into(),
        home_players: vec!["Bernardo".into(), "Chino".into()],
        away_players: vec!["Riff".into(), "Ice".into(), "Action".into()],
        max_innings: 1,
    }
}

fn harness() -> Harness {
    let setup = setup();
    let games = Arc::new(InMemoryGameRepository::new());
    let careers = Arc::new(InMemoryCareerRepository::new());
    let app = ScorerApp::new(
        GameSession::start(&setup).unwrap(),
        games.clone(),
        careers.clone(),
    );
    Harness {
        app,
        games,
        careers,
    }
}

fn run(app: &mut ScorerApp, script: &str) -> String {
    let mut output = Vec::new();
    app.run(Cursor::new(script.to_string()), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn full_game_is_saved_and_credited_once() {
    let mut h = harness();
    let output = run(
        &mut h.app,
        "1b\nhr\nout\nout\nout\n\nk\nk\nk\nout\nout\nleaders homers\n",
    );

    assert!(output.contains("Home run, 2 runs score"));
    assert!(output.contains("FINAL: Jets 2, Sharks 0"));
    assert!(output.contains("Jets win"));
    assert!(output.contains("Leaders: homers"));
    assert!(h.app.session().is_over());

    let id = h.app.saved_game().unwrap().to_string();
    let stored = h.games.list().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, id);

    let ice = h.careers.get("ice").unwrap().unwrap();
    assert_eq!(ice.totals.homers, 1);
    assert_eq!(ice.totals.rbis, 2);
    assert_eq!(ice.games_played, 1);

    // Extra input after the final out changes nothing.
    let output = run(&mut h.app, "1b\nundo\n");
    assert!(output.contains("game is over"));
    assert_eq!(h.games.list().unwrap().len(), 1);
    assert_eq!(h.careers.get("ice").unwrap().unwrap().games_played, 1);
}

#[test]
fn double_play_asks_for_a_base_when_ambiguous() {
    let mut h = harness();
    let mut output = Vec::new();

    for line in ["1b", "1b", "dp"] {
        assert_eq!(h.app.handle_line(line, &mut output).unwrap(), Flow::Continue);
    }
    let text = String::from_utf8(output.clone()).unwrap();
    assert!(text.contains("Which runner was retired?"));
    assert_eq!(h.app.session().play_count(), 2);

    h.app.handle_line("dp 2b", &mut output).unwrap();
    let state = h.app.session().state();
    assert_eq!(state.outs, 2);
    assert_eq!(state.bases.runner(sandlot_core::Base::Second), None);
}

#[test]
fn bad_input_and_undo_are_reported() {
    let mut h = harness();
    let output = run(&mut h.app, "bunt\nundo\n2b\nundo\nscore\nquit\n1b\n");

    assert!(output.contains("unknown command \"bunt\""));
    assert!(output.contains("Nothing to undo."));
    assert!(output.contains("Last play undone."));
    assert_eq!(h.app.session().play_count(), 0, "input after quit is ignored");
    assert!(h.app.saved_game().is_none());
}

#[test]
fn stored_games_can_be_listed_replayed_and_deleted() {
    let mut h = harness();
    run(&mut h.app, "1b\nhr\nout\nout\nout\nk\nk\nk\nout\nout\n");
    let id = h.app.saved_game().unwrap().to_string();

    let mut output = Vec::new();
    for line in [
        "history".to_string(),
        format!("replay {id}"),
        "team Jets".to_string(),
        "replay nope".to_string(),
        format!("delete {id}"),
        format!("delete {id}"),
        "history".to_string(),
    ] {
        assert_eq!(h.app.handle_line(&line, &mut output).unwrap(), Flow::Continue);
    }
    let text = String::from_utf8(output).unwrap();

    assert!(text.contains(&format!("{id} ")));
    assert!(text.contains("JET 2, SHK 0"));
    assert!(text.contains("Jets at Sharks"));
    assert!(text.contains("  0. JET 0  SHK 0   Top 1   0 outs   0 on   Riff up"));
    assert!(text.contains("JET 2  SHK 0   Final"));
    assert!(text.lines().any(|line| line.starts_with("Ice ") && line.ends_with(".500 2.000")));
    assert!(text.contains("No saved game \"nope\"."));
    assert!(text.contains(&format!("Deleted game {id}.")));
    assert!(text.contains(&format!("No saved game \"{id}\".")));
    assert!(text.contains("No games saved yet"));
    assert!(h.games.list().unwrap().is_empty());
}

#[test]
fn resumed_game_that_was_already_stored_is_not_credited_again() {
    let games = Arc::new(InMemoryGameRepository::new());
    let careers = Arc::new(InMemoryCareerRepository::new());
    let states = Arc::new(InMemoryStateRepo::new());

    // First run: the game ends and is stored, then the scorer dies before the
    // snapshots are cleared.
    let mut session = GameSession::start(&setup())
        .unwrap()
        .with_id("session_1")
        .with_autosave(states.clone())
        .unwrap();
    for event in [
        PlayEvent::Single,
        PlayEvent::HomeRun,
        PlayEvent::Out,
        PlayEvent::Out,
        PlayEvent::Out,
        PlayEvent::Out,
        PlayEvent::Out,
        PlayEvent::Out,
    ] {
        session.dispatch(event).unwrap();
    }
    let record = session.finish().unwrap();
    let first_id = games.save(&record).unwrap();
    careers
        .apply_game(&first_id, &career_deltas(&record.game_summary, session.matchup()))
        .unwrap();
    let matchup = session.matchup().clone();
    drop(session);

    // Restart under the same session id.
    let resumed = GameSession::resume(matchup, states.clone())
        .unwrap()
        .with_id("session_1");
    assert!(resumed.is_over());
    let mut app = ScorerApp::new(resumed, games.clone(), careers.clone());
    let output = run(&mut app, "");

    assert!(output.contains(&format!("Game saved as {first_id}.")));
    assert_eq!(app.saved_game(), Some(first_id.as_str()));
    assert_eq!(games.list().unwrap().len(), 1);
    assert_eq!(careers.get("ice").unwrap().unwrap().games_played, 1);
    assert!(states.list_plays().unwrap().is_empty());
}
