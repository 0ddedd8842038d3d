//! Per-player batting line for a single game.

/// Kind of base hit, identified by the number of bases the batter gains.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum HitKind {
    Single,
    Double,
    Triple,
    HomeRun,
}

impl HitKind {
    /// Bases gained by the batter and by every runner already on base.
    #[inline]
    pub const fn bases(self) -> u8 {
        match self {
            HitKind::Single => 1,
            HitKind::Double => 2,
            HitKind::Triple => 3,
            HitKind::HomeRun => 4,
        }
    }
}

/// Counting stats accumulated by one player during one game.
///
/// Rates (average, slugging) are derived on demand and never stored here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlayerGameStats {
    pub at_bats: u32,
    pub hits: u32,
    pub runs: u32,
    pub rbis: u32,
    pub singles: u32,
    pub doubles: u32,
    pub triples: u32,
    pub homers: u32,
    pub total_bases: u32,
}

impl PlayerGameStats {
    /// Charges an official at-bat that produced a hit of `kind`.
    pub fn record_hit(&mut self, kind: HitKind) {
        self.at_bats += 1;
        self.hits += 1;
        self.total_bases += u32::from(kind.bases());
        match kind {
            HitKind::Single => self.singles += 1,
            HitKind::Double => self.doubles += 1,
            HitKind::Triple => self.triples += 1,
            HitKind::HomeRun => self.homers += 1,
        }
    }

    /// Charges an official at-bat without a hit.
    pub fn record_out(&mut self) {
        self.at_bats += 1;
    }

    /// Hits per at-bat, 0 when the player has no at-bats.
    pub fn batting_average(&self) -> f64 {
        ratio(self.hits, self.at_bats)
    }

    /// Total bases per at-bat, 0 when the player has no at-bats.
    pub fn slugging_percentage(&self) -> f64 {
        ratio(self.total_bases, self.at_bats)
    }

    /// Checks the identities that tie the counters together.
    pub fn is_consistent(&self) -> bool {
        let by_kind = self.singles + self.doubles + self.triples + self.homers;
        let bases = self.singles + 2 * self.doubles + 3 * self.triples + 4 * self.homers;
        self.hits <= self.at_bats && self.hits == by_kind && self.total_bases == bases
    }
}

fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        f64::from(numerator) / f64::from(denominator)
    }
}
