//! Stored game entries and id assignment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::GameRecord;

/// A game record together with the id it is stored under.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredGame {
    pub id: String,
    pub record: GameRecord,
}

impl StoredGame {
    /// Sorts newest game first, breaking ties on id.
    pub(crate) fn sort_newest_first(games: &mut [StoredGame]) {
        games.sort_by(|a, b| {
            b.record
                .game_date
                .cmp(&a.record.game_date)
                .then_with(|| b.id.cmp(&a.id))
        });
    }
}

/// Readable id for a game: date, time and both abbreviations.
///
/// `attempt` disambiguates games saved within the same second.
pub fn game_id(record: &GameRecord, attempt: u32) -> String {
    let stamp = format_stamp(record.game_date);
    let base = format!(
        "{stamp}-{}-at-{}",
        record.away_abbreviation.to_lowercase(),
        record.home_abbreviation.to_lowercase()
    );
    if attempt == 0 {
        base
    } else {
        format!("{base}-{attempt}")
    }
}

fn format_stamp(date: DateTime<Utc>) -> String {
    date.format("%Y%m%d-%H%M%S").to_string()
}
