//! Career leaderboards.

use sandlot_core::CareerStats;

/// Statistic a leaderboard is ranked by.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "camelCase")]
pub enum LeaderStat {
    BattingAverage,
    SluggingPercentage,
    Hits,
    Runs,
    Rbis,
    Homers,
}

impl LeaderStat {
    pub fn value(self, player: &CareerStats) -> f64 {
        let totals = &player.totals;
        match self {
            Self::BattingAverage => player.batting_average(),
            Self::SluggingPercentage => player.slugging_percentage(),
            Self::Hits => f64::from(totals.hits),
            Self::Runs => f64::from(totals.runs),
            Self::Rbis => f64::from(totals.rbis),
            Self::Homers => f64::from(totals.homers),
        }
    }

    /// Rate stats are shown with three decimals, counting stats as integers.
    pub fn is_rate(self) -> bool {
        matches!(self, Self::BattingAverage | Self::SluggingPercentage)
    }
}

/// Top `limit` players by `stat`. Players without a positive value are left
/// out; ties keep the input order.
pub fn leaders<'a>(
    players: &'a [CareerStats],
    stat: LeaderStat,
    limit: usize,
) -> Vec<(&'a CareerStats, f64)> {
    let mut ranked: Vec<_> = players
        .iter()
        .map(|player| (player, stat.value(player)))
        .filter(|(_, value)| *value > 0.0)
        .collect();
    ranked.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn player(name: &str, at_bats: u32, hits: u32, homers: u32) -> CareerStats {
        let mut stats = CareerStats::new(name);
        stats.games_played = 1;
        stats.totals.at_bats = at_bats;
        stats.totals.hits = hits;
        stats.totals.homers = homers;
        stats.totals.singles = hits - homers;
        stats.totals.total_bases = (hits - homers) + homers * 4;
        stats
    }

    #[test]
    fn parses_wire_names() {
        assert_eq!(
            LeaderStat::from_str("battingAverage").unwrap(),
            LeaderStat::BattingAverage
        );
        assert_eq!(LeaderStat::from_str("rbis").unwrap(), LeaderStat::Rbis);
        assert_eq!(LeaderStat::SluggingPercentage.to_string(), "sluggingPercentage");
        assert!(LeaderStat::from_str("era").is_err());
    }

    #[test]
    fn ranks_descending_and_drops_zero_values() {
        let players = [
            player("ann", 4, 1, 0),
            player("bo", 4, 3, 1),
            player("cy", 4, 0, 0),
            player("di", 4, 2, 0),
        ];

        let board = leaders(&players, LeaderStat::Hits, 10);
        let names: Vec<_> = board.iter().map(|(p, _)| p.name.as_str()).collect();
        assert_eq!(names, ["bo", "di", "ann"]);

        let board = leaders(&players, LeaderStat::BattingAverage, 2);
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].1, 0.75);
        assert_eq!(board[1].1, 0.5);

        let board = leaders(&players, LeaderStat::Homers, 10);
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].0.name, "bo");
    }
}
