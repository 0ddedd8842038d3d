use std::collections::BTreeMap;

use super::stats::PlayerGameStats;

/// Per-team portion of the game state: runs, box score and lineup cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TeamState {
    pub score: u32,

    /// Box score keyed by roster name. Every rostered player has an entry from
    /// the first pitch, even before their first plate appearance.
    pub stats: BTreeMap<String, PlayerGameStats>,

    /// 1-based, monotonically increasing lineup slot.
    ///
    /// While the team is at bat it names the current batter; while it is in the
    /// field it names the batter who leads off its next half-inning. The roster
    /// index is always `(next_slot - 1) mod roster_len`.
    pub next_slot: u32,
}

impl TeamState {
    /// Fresh state for a roster: no runs, zeroed stats, slot 1 due up.
    pub fn new<'a>(roster: impl IntoIterator<Item = &'a String>) -> Self {
        Self {
            score: 0,
            stats: roster
                .into_iter()
                .map(|name| (name.clone(), PlayerGameStats::default()))
                .collect(),
            next_slot: 1,
        }
    }

    /// Roster index addressed by `next_slot`.
    ///
    /// `saturating_sub` keeps the formula non-negative even if a slot of 0 ever
    /// reached this point.
    pub fn lineup_index(&self, roster_len: usize) -> usize {
        if roster_len == 0 {
            return 0;
        }
        (self.next_slot.saturating_sub(1) as usize) % roster_len
    }

    pub fn player(&self, name: &str) -> Option<&PlayerGameStats> {
        self.stats.get(name)
    }

    pub fn player_mut(&mut self, name: &str) -> Option<&mut PlayerGameStats> {
        self.stats.get_mut(name)
    }

    /// Sum of individual runs credited to the team's players.
    pub fn credited_runs(&self) -> u32 {
        self.stats.values().map(|stats| stats.runs).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lineup_index_wraps_around_roster() {
        let roster = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let mut team = TeamState::new(&roster);

        assert_eq!(team.lineup_index(roster.len()), 0);
        team.next_slot = 3;
        assert_eq!(team.lineup_index(roster.len()), 2);
        team.next_slot = 4;
        assert_eq!(team.lineup_index(roster.len()), 0);
        team.next_slot = 0;
        assert_eq!(team.lineup_index(roster.len()), 0);
    }
}
