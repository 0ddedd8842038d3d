//! Result of applying a single play.

/// What a play did to the scoreboard.
///
/// Returned alongside the new state so callers can log or announce the play
/// without diffing snapshots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlayOutcome {
    /// Runs that crossed the plate, batter included.
    pub runs_scored: u32,
    /// Runs batted in credited to the batter.
    pub rbis: u32,
    /// Outs recorded by the play.
    pub outs_recorded: u8,
    /// The third out was recorded and the sides switched.
    pub half_inning_ended: bool,
    /// The home team took a game-ending lead in its final turn at bat.
    pub walk_off: bool,
    /// The game is over after this play.
    pub game_ended: bool,
}

impl PlayOutcome {
    pub(crate) fn runs(runs: u32) -> Self {
        Self {
            runs_scored: runs,
            rbis: runs,
            ..Self::default()
        }
    }

    pub(crate) fn outs(outs: u8, half_inning_ended: bool) -> Self {
        Self {
            outs_recorded: outs,
            half_inning_ended,
            ..Self::default()
        }
    }
}
