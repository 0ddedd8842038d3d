use core::ops::{Index, IndexMut};

/// One of the two sides in a game.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Team {
    /// Bats in the top half of every inning.
    Away,
    /// Bats in the bottom half of every inning.
    Home,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::Away, Team::Home];

    /// Returns the other team.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Team::Away => Team::Home,
            Team::Home => Team::Away,
        }
    }

    #[inline]
    pub const fn is_home(self) -> bool {
        matches!(self, Team::Home)
    }
}

/// A value held once per team, indexable by [`Team`].
///
/// Replaces parallel `home*`/`away*` fields so rule code can be written once
/// against "the batting team" instead of branching on which side is at bat.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerTeam<T> {
    pub away: T,
    pub home: T,
}

impl<T> PerTeam<T> {
    pub const fn new(away: T, home: T) -> Self {
        Self { away, home }
    }

    /// Builds both entries from a per-team constructor.
    pub fn from_fn(mut f: impl FnMut(Team) -> T) -> Self {
        Self {
            away: f(Team::Away),
            home: f(Team::Home),
        }
    }

    /// Iterates `(team, value)` pairs, away first.
    pub fn iter(&self) -> impl Iterator<Item = (Team, &T)> {
        [(Team::Away, &self.away), (Team::Home, &self.home)].into_iter()
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> PerTeam<U> {
        PerTeam {
            away: f(self.away),
            home: f(self.home),
        }
    }
}

impl<T> Index<Team> for PerTeam<T> {
    type Output = T;

    fn index(&self, team: Team) -> &T {
        match team {
            Team::Away => &self.away,
            Team::Home => &self.home,
        }
    }
}

impl<T> IndexMut<Team> for PerTeam<T> {
    fn index_mut(&mut self, team: Team) -> &mut T {
        match team {
            Team::Away => &mut self.away,
            Team::Home => &mut self.home,
        }
    }
}

/// Which half of the inning is being played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HalfInning {
    #[default]
    Top,
    Bottom,
}

impl HalfInning {
    /// Team at bat during this half.
    #[inline]
    pub const fn batting_team(self) -> Team {
        match self {
            HalfInning::Top => Team::Away,
            HalfInning::Bottom => Team::Home,
        }
    }

    /// Team in the field during this half.
    #[inline]
    pub const fn fielding_team(self) -> Team {
        self.batting_team().opponent()
    }

    #[inline]
    pub const fn is_top(self) -> bool {
        matches!(self, HalfInning::Top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_team_indexes_by_team() {
        let mut scores = PerTeam::new(1, 2);
        scores[Team::Home] += 5;

        assert_eq!(scores[Team::Away], 1);
        assert_eq!(scores[Team::Home], 7);
        assert_eq!(
            scores.iter().collect::<Vec<_>>(),
            vec![(Team::Away, &1), (Team::Home, &7)]
        );
    }

    #[test]
    fn halves_map_to_batting_teams() {
        assert_eq!(HalfInning::Top.batting_team(), Team::Away);
        assert_eq!(HalfInning::Bottom.batting_team(), Team::Home);
        assert_eq!(HalfInning::Bottom.fielding_team(), Team::Away);
    }

    #[test]
    fn team_parses_case_insensitively() {
        assert_eq!("HOME".parse::<Team>().unwrap(), Team::Home);
        assert_eq!(Team::Away.to_string(), "away");
    }
}
