//! Career records plus the set of games already folded into them.

use std::collections::{BTreeMap, BTreeSet};

use sandlot_core::{CareerDelta, CareerStats};
use serde::{Deserialize, Serialize};

/// Everything a career repository persists.
///
/// `applied_games` makes [`CareerLedger::apply_game`] idempotent per game id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerLedger {
    pub players: BTreeMap<String, CareerStats>,
    pub applied_games: BTreeSet<String>,
}

impl CareerLedger {
    /// Returns `false` without touching any record if `game_id` was already
    /// applied.
    pub fn apply_game(&mut self, game_id: &str, deltas: &[CareerDelta]) -> bool {
        if !self.applied_games.insert(game_id.to_string()) {
            return false;
        }

        for delta in deltas {
            self.players
                .entry(delta.player.clone())
                .or_insert_with(|| CareerStats::new(delta.player.clone()))
                .apply(delta);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandlot_core::PlayerGameStats;

    fn delta(player: &str, hits: u32) -> CareerDelta {
        CareerDelta {
            player: player.into(),
            team: "Jets".into(),
            games_played: 1,
            stats: PlayerGameStats {
                at_bats: 4,
                hits,
                singles: hits,
                total_bases: hits,
                ..PlayerGameStats::default()
            },
        }
    }

    #[test]
    fn second_application_of_a_game_is_ignored() {
        let mut ledger = CareerLedger::default();
        let deltas = [delta("riff", 2), delta("ice", 0)];

        assert!(ledger.apply_game("g1", &deltas));
        assert!(!ledger.apply_game("g1", &deltas));
        assert!(ledger.apply_game("g2", &deltas[..1]));

        let riff = &ledger.players["riff"];
        assert_eq!(riff.games_played, 2);
        assert_eq!(riff.totals.hits, 4);
        assert_eq!(ledger.players["ice"].games_played, 1);
    }
}
