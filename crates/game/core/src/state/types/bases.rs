//! Base occupancy.

/// One of the three bases a runner can occupy.
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
#[strum(ascii_case_insensitive)]
pub enum Base {
    #[strum(to_string = "1B", serialize = "first")]
    First,
    #[strum(to_string = "2B", serialize = "second")]
    Second,
    #[strum(to_string = "3B", serialize = "third")]
    Third,
}

impl Base {
    /// Bases in running order.
    pub const ALL: [Base; 3] = [Base::First, Base::Second, Base::Third];

    /// 1 for first base, 2 for second, 3 for third.
    #[inline]
    pub const fn number(self) -> u8 {
        match self {
            Base::First => 1,
            Base::Second => 2,
            Base::Third => 3,
        }
    }

    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Base::First),
            2 => Some(Base::Second),
            3 => Some(Base::Third),
            _ => None,
        }
    }

    /// Base reached after advancing `bases` bases, or `None` if the runner
    /// crosses home plate.
    #[inline]
    pub const fn advanced_by(self, bases: u8) -> Option<Self> {
        Self::from_number(self.number().saturating_add(bases))
    }

    #[inline]
    const fn slot(self) -> usize {
        self.number() as usize - 1
    }
}

/// Occupants of first, second and third base.
///
/// Each slot holds the name of the runner standing on it. Names refer to the
/// batting team's roster; the slot does not own the player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseState {
    slots: [Option<String>; 3],
}

impl BaseState {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the runner on `base`, if any.
    pub fn runner(&self, base: Base) -> Option<&str> {
        self.slots[base.slot()].as_deref()
    }

    pub fn is_occupied(&self, base: Base) -> bool {
        self.slots[base.slot()].is_some()
    }

    /// Puts `runner` on `base`, returning whoever stood there before.
    pub fn place(&mut self, base: Base, runner: impl Into<String>) -> Option<String> {
        self.slots[base.slot()].replace(runner.into())
    }

    /// Removes and returns the runner on `base`.
    pub fn take(&mut self, base: Base) -> Option<String> {
        self.slots[base.slot()].take()
    }

    pub fn clear(&mut self) {
        self.slots = Default::default();
    }

    /// Occupied bases with their runners, first base first.
    pub fn occupied(&self) -> impl Iterator<Item = (Base, &str)> {
        Base::ALL
            .into_iter()
            .filter_map(|base| self.runner(base).map(|runner| (base, runner)))
    }

    pub fn runner_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.runner_count() == 0
    }

    /// Returns the base of the single runner when exactly one base is occupied.
    pub fn lone_runner(&self) -> Option<Base> {
        let mut occupied = self.occupied();
        match (occupied.next(), occupied.next()) {
            (Some((base, _)), None) => Some(base),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advancing_past_third_scores() {
        assert_eq!(Base::First.advanced_by(1), Some(Base::Second));
        assert_eq!(Base::First.advanced_by(2), Some(Base::Third));
        assert_eq!(Base::Second.advanced_by(2), None);
        assert_eq!(Base::Third.advanced_by(1), None);
    }

    #[test]
    fn base_labels_parse() {
        assert_eq!("1b".parse::<Base>().unwrap(), Base::First);
        assert_eq!("2B".parse::<Base>().unwrap(), Base::Second);
        assert_eq!("third".parse::<Base>().unwrap(), Base::Third);
        assert_eq!(Base::Third.to_string(), "3B");
        assert!("home".parse::<Base>().is_err());
    }

    #[test]
    fn lone_runner_requires_exactly_one() {
        let mut bases = BaseState::empty();
        assert_eq!(bases.lone_runner(), None);

        bases.place(Base::Second, "ana");
        assert_eq!(bases.lone_runner(), Some(Base::Second));

        bases.place(Base::Third, "ben");
        assert_eq!(bases.lone_runner(), None);
        assert_eq!(bases.runner_count(), 2);
    }
}
