//! Plain-text rendering of the scoreboard, play results and box scores.

use std::fmt::Write;

use sandlot_core::{
    Base, CareerStats, GameState, GameSummary, Matchup, PlayEvent, PlayOutcome, Team, Winner,
    display_name,
};
use sandlot_runtime::{GameRecord, LeaderStat, ReplayCursor, StateDocument, StoredGame};

/// Scoreboard shown after every play, e.g.
///
/// ```text
/// JET 2  SHK 1   Top 3   1 out   0-2
/// 1B Riff   2B -   3B Ice
/// At bat: Action
/// ```
pub fn render_scoreboard(state: &GameState, matchup: &Matchup) -> String {
    let mut out = String::new();
    let away = &matchup.team(Team::Away).abbreviation;
    let home = &matchup.team(Team::Home).abbreviation;

    let _ = write!(
        out,
        "{away} {}  {home} {}   ",
        state.away_score(),
        state.home_score()
    );
    if state.game_ended {
        let _ = writeln!(out, "Final");
        return out;
    }

    let _ = writeln!(
        out,
        "{} {}   {} out{}   {}-{}",
        state.half,
        state.inning,
        state.outs,
        if state.outs == 1 { "" } else { "s" },
        state.count.balls,
        state.count.strikes,
    );

    let bases: Vec<String> = Base::ALL
        .iter()
        .map(|&base| format!("{base} {}", state.bases.runner(base).unwrap_or("-")))
        .collect();
    let _ = writeln!(out, "{}", bases.join("   "));
    let _ = writeln!(out, "At bat: {}", state.current_batter);
    out
}

/// One-line description of an accepted play.
pub fn describe_play(event: PlayEvent, outcome: &PlayOutcome) -> String {
    let mut line = match event {
        PlayEvent::Single => "Single".to_string(),
        PlayEvent::Double => "Double".to_string(),
        PlayEvent::Triple => "Triple".to_string(),
        PlayEvent::HomeRun => "Home run".to_string(),
        PlayEvent::Strike if outcome.outs_recorded > 0 => "Strikeout".to_string(),
        PlayEvent::Strike => "Strike".to_string(),
        PlayEvent::Out => "Out".to_string(),
        PlayEvent::DoublePlay { .. } => "Double play".to_string(),
    };

    match outcome.runs_scored {
        0 => {}
        1 => line.push_str(", 1 run scores"),
        runs => {
            let _ = write!(line, ", {runs} runs score");
        }
    }
    if outcome.walk_off {
        line.push_str(". Walk-off!");
    } else if outcome.half_inning_ended && !outcome.game_ended {
        line.push_str(". Side retired.");
    }
    line
}

/// Final score, result and each team's box score in batting order.
pub fn render_summary(summary: &GameSummary, matchup: &Matchup) -> String {
    let mut out = String::new();
    let away = matchup.team(Team::Away);
    let home = matchup.team(Team::Home);

    let _ = writeln!(
        out,
        "FINAL: {} {}, {} {} ({} innings, {})",
        away.name, summary.away_score, home.name, summary.home_score, summary.total_innings,
        summary.game_end_reason
    );
    let result = match summary.winner {
        Winner::Tie => "Tie game".to_string(),
        winner => {
            let team = winner.team().map(|team| matchup.team(team).name.as_str());
            format!("{} win", team.unwrap_or_default())
        }
    };
    let _ = writeln!(out, "{result}");

    for team in Team::ALL {
        let info = matchup.team(team);
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{:<16} {:>3} {:>3} {:>3} {:>3} {:>3} {:>5} {:>5}",
            info.name, "AB", "H", "R", "RBI", "HR", "AVG", "SLG"
        );
        let lines = summary.player_stats(team);
        for player in &info.players {
            let Some(line) = lines.get(player) else {
                continue;
            };
            let stats = &line.stats;
            let _ = writeln!(
                out,
                "{:<16} {:>3} {:>3} {:>3} {:>3} {:>3} {:>5} {:>5}",
                player,
                stats.at_bats,
                stats.hits,
                stats.runs,
                stats.rbis,
                stats.homers,
                format_rate(line.batting_average),
                format_rate(line.slugging_percentage),
            );
        }
    }
    out
}

/// Career leaderboard for one stat.
pub fn render_leaders(stat: LeaderStat, board: &[(&CareerStats, f64)]) -> String {
    if board.is_empty() {
        return format!("No {stat} leaders yet\n");
    }

    let mut out = String::new();
    let _ = writeln!(out, "Leaders: {stat}");
    for (rank, (player, value)) in board.iter().enumerate() {
        let value = if stat.is_rate() {
            format_rate(*value)
        } else {
            format!("{value:.0}")
        };
        let _ = writeln!(
            out,
            "{:>2}. {:<20} {:>5}  ({} G)",
            rank + 1,
            display_name(&player.name),
            value,
            player.games_played
        );
    }
    out
}

/// Stored games, newest first.
pub fn render_history(games: &[StoredGame]) -> String {
    if games.is_empty() {
        return "No games saved yet\n".to_string();
    }

    let mut out = String::new();
    for game in games {
        let record = &game.record;
        let _ = writeln!(
            out,
            "{:<32} {}  {}  {}",
            game.id,
            record.game_date.format("%Y-%m-%d"),
            record.headline(),
            record.game_summary.game_end_reason
        );
    }
    out
}

/// Every state of a stored game, one line each, from the opening state.
pub fn render_timeline(record: &GameRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} at {}", record.away_team, record.home_team);

    let mut cursor = ReplayCursor::new(record);
    let mut state = cursor.current();
    while let Some(doc) = state {
        let _ = writeln!(
            out,
            "{:>3}. {}",
            cursor.position(),
            timeline_line(doc, record)
        );
        state = cursor.next();
    }
    out
}

fn timeline_line(doc: &StateDocument, record: &GameRecord) -> String {
    let score = format!(
        "{} {}  {} {}",
        record.away_abbreviation, doc.away_score, record.home_abbreviation, doc.home_score
    );
    if doc.game_ended {
        return format!("{score}   Final");
    }

    let half = if doc.is_top_inning { "Top" } else { "Bottom" };
    let occupied = [&doc.first_base, &doc.second_base, &doc.third_base]
        .iter()
        .filter(|runner| runner.is_some())
        .count();
    format!(
        "{score}   {half} {}   {} out{}   {} on   {} up",
        doc.inning,
        doc.outs,
        if doc.outs == 1 { "" } else { "s" },
        occupied,
        doc.current_batter
    )
}

/// Career lines of a team's players, best average first.
pub fn render_team(team: &str, players: &[CareerStats]) -> String {
    if players.is_empty() {
        return format!("No players have batted for {team}\n");
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<20} {:>3} {:>4} {:>4} {:>3} {:>4} {:>5} {:>5}",
        team, "G", "AB", "H", "HR", "RBI", "AVG", "SLG"
    );
    for player in players {
        let totals = &player.totals;
        let _ = writeln!(
            out,
            "{:<20} {:>3} {:>4} {:>4} {:>3} {:>4} {:>5} {:>5}",
            display_name(&player.name),
            player.games_played,
            totals.at_bats,
            totals.hits,
            totals.homers,
            totals.rbis,
            format_rate(player.batting_average()),
            format_rate(player.slugging_percentage()),
        );
    }
    out
}

/// Baseball-style rate: `.333`, `1.250`.
fn format_rate(value: f64) -> String {
    let text = format!("{value:.3}");
    match text.strip_prefix('0') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sandlot_core::{GameEnv, GameSetup, apply_event};

    fn matchup() -> Matchup {
        GameSetup {
            home_team: "Sharks".into(),
            away_team: "Jets".into(),
            home_abbreviation: "SHK".into(),
            away_abbreviation: "JET".into(),
            home_players: vec!["Bernardo".into()],
            away_players: vec!["Riff".into(), "Ice".into()],
            max_innings: 1,
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn scoreboard_shows_count_bases_and_batter() {
        let matchup = matchup();
        let env = GameEnv::new(&matchup);
        let state = GameState::new(&matchup);
        let state = apply_event(&state, &PlayEvent::Single, &env);
        let state = apply_event(&state, &PlayEvent::Strike, &env);

        let board = render_scoreboard(&state, &matchup);
        let lines: Vec<_> = board.lines().collect();
        assert_eq!(lines[0], "JET 0  SHK 0   Top 1   0 outs   0-1");
        assert_eq!(lines[1], "1B Riff   2B -   3B -");
        assert_eq!(lines[2], "At bat: Ice");
    }

    #[test]
    fn play_description_mentions_runs_and_inning_end() {
        let outcome = PlayOutcome {
            runs_scored: 2,
            rbis: 2,
            outs_recorded: 0,
            half_inning_ended: false,
            walk_off: true,
            game_ended: true,
        };
        assert_eq!(
            describe_play(PlayEvent::HomeRun, &outcome),
            "Home run, 2 runs score. Walk-off!"
        );

        let outcome = PlayOutcome {
            runs_scored: 0,
            rbis: 0,
            outs_recorded: 2,
            half_inning_ended: true,
            walk_off: false,
            game_ended: false,
        };
        assert_eq!(
            describe_play(PlayEvent::DoublePlay { base: None }, &outcome),
            "Double play. Side retired."
        );
    }

    #[test]
    fn timeline_lists_every_state() {
        let matchup = matchup();
        let env = GameEnv::new(&matchup);
        let opening = GameState::new(&matchup);
        let after_single = apply_event(&opening, &PlayEvent::Single, &env);
        let after_homer = apply_event(&after_single, &PlayEvent::HomeRun, &env);
        let summary = GameSummary::reduce(&after_homer, &matchup);
        let record = GameRecord::new(
            &matchup,
            [&opening, &after_single, &after_homer],
            &after_homer,
            summary,
            Utc::now(),
        );

        let timeline = render_timeline(&record);
        let lines: Vec<_> = timeline.lines().collect();
        assert_eq!(lines[0], "Jets at Sharks");
        assert_eq!(lines[1], "  0. JET 0  SHK 0   Top 1   0 outs   0 on   Riff up");
        assert_eq!(lines[2], "  1. JET 0  SHK 0   Top 1   0 outs   1 on   Ice up");
        assert_eq!(lines[3], "  2. JET 2  SHK 0   Top 1   0 outs   0 on   Riff up");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn box_score_follows_batting_order() {
        let matchup = matchup();
        let mut state = GameState::new(&matchup);
        state.game_ended = true;
        let summary = GameSummary::reduce(&state, &matchup);

        let text = render_summary(&summary, &matchup);
        let riff = text.find("\nRiff ").unwrap();
        let ice = text.find("\nIce ").unwrap();
        assert!(riff < ice, "Riff leads off even though Ice sorts first");
    }

    #[test]
    fn team_and_history_have_empty_messages() {
        assert_eq!(render_team("Sharks", &[]), "No players have batted for Sharks\n");
        assert_eq!(render_history(&[]), "No games saved yet\n");
    }

    #[test]
    fn rates_drop_the_leading_zero() {
        assert_eq!(format_rate(0.3333), ".333");
        assert_eq!(format_rate(0.0), ".000");
        assert_eq!(format_rate(1.25), "1.250");
    }
}
