//! Stat kinds and the fixed-key stat table.

use core::ops::{Index, IndexMut};
use core::str::FromStr;

use strum::{EnumCount, IntoEnumIterator};

use crate::error::{BattleError, ErrorSeverity};

/// The five stats every hero carries.
///
/// Displayed in SCREAMING_SNAKE_CASE (`ATTACK`, `CRIT_CHANCE`) and parsed
/// case-insensitively, so data files may write `attack` or `Attack`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum StatKind {
    /// Hit points. Zero means defeated.
    Hp,
    Attack,
    Defense,
    Speed,
    /// Percent chance (0-100) that an incoming hit is a critical hit.
    CritChance,
}

impl StatKind {
    /// Stats that stage modification may touch.
    pub const MODIFIABLE: [StatKind; 3] = [StatKind::Attack, StatKind::Defense, StatKind::Speed];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn is_modifiable(self) -> bool {
        Self::MODIFIABLE.contains(&self)
    }
}

/// Which stat a stage modification targets.
///
/// `Random` picks one of [`StatKind::MODIFIABLE`] uniformly when applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatTarget {
    Stat(StatKind),
    Random,
}

impl From<StatKind> for StatTarget {
    fn from(kind: StatKind) -> Self {
        Self::Stat(kind)
    }
}

impl FromStr for StatTarget {
    type Err = StatTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("random") {
            return Ok(Self::Random);
        }
        StatKind::from_str(s)
            .map(Self::Stat)
            .map_err(|_| StatTableError::UnknownStat(s.to_owned()))
    }
}

/// Errors raised while building a [`StatTable`] from loose data.
///
/// A hero cannot be constructed from an incomplete table, so these are fatal
/// for the hero being built.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatTableError {
    #[error("stat table is missing {0}")]
    MissingStat(StatKind),

    #[error("stat {0} is listed more than once")]
    DuplicateStat(StatKind),

    #[error("unknown stat name '{0}'")]
    UnknownStat(String),
}

impl BattleError for StatTableError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingStat(_) => "STAT_MISSING",
            Self::DuplicateStat(_) => "STAT_DUPLICATE",
            Self::UnknownStat(_) => "STAT_UNKNOWN",
        }
    }
}

/// One integer per [`StatKind`].
///
/// Value semantics: copying a table never aliases the original, so a hero's
/// base and current tables are independent from the moment they are built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatTable {
    values: [i32; StatKind::COUNT],
}

impl StatTable {
    pub const fn new(hp: i32, attack: i32, defense: i32, speed: i32, crit_chance: i32) -> Self {
        Self {
            values: [hp, attack, defense, speed, crit_chance],
        }
    }

    /// Builds a table from `(kind, value)` pairs. Every kind must appear exactly once.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (StatKind, i32)>,
    ) -> Result<Self, StatTableError> {
        let mut slots: [Option<i32>; StatKind::COUNT] = [None; StatKind::COUNT];
        for (kind, value) in pairs {
            let slot = &mut slots[kind.index()];
            if slot.is_some() {
                return Err(StatTableError::DuplicateStat(kind));
            }
            *slot = Some(value);
        }

        let mut table = Self::default();
        for kind in StatKind::iter() {
            table[kind] = slots[kind.index()].ok_or(StatTableError::MissingStat(kind))?;
        }
        Ok(table)
    }

    /// Like [`from_pairs`](Self::from_pairs) but keyed by stat name.
    pub fn from_named<'a>(
        pairs: impl IntoIterator<Item = (&'a str, i32)>,
    ) -> Result<Self, StatTableError> {
        let parsed = pairs
            .into_iter()
            .map(|(name, value)| {
                StatKind::from_str(name)
                    .map(|kind| (kind, value))
                    .map_err(|_| StatTableError::UnknownStat(name.to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_pairs(parsed)
    }
}

impl Index<StatKind> for StatTable {
    type Output = i32;

    fn index(&self, kind: StatKind) -> &i32 {
        &self.values[kind.index()]
    }
}

impl IndexMut<StatKind> for StatTable {
    fn index_mut(&mut self, kind: StatKind) -> &mut i32 {
        &mut self.values[kind.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_names_round_trip_through_strum() {
        assert_eq!(StatKind::CritChance.to_string(), "CRIT_CHANCE");
        assert_eq!(StatKind::from_str("attack"), Ok(StatKind::Attack));
        assert_eq!(StatKind::from_str("Crit_Chance"), Ok(StatKind::CritChance));
        assert_eq!("RANDOM".parse::<StatTarget>(), Ok(StatTarget::Random));
        assert_eq!(
            "speed".parse::<StatTarget>(),
            Ok(StatTarget::Stat(StatKind::Speed))
        );
    }

    #[test]
    fn only_attack_defense_speed_are_modifiable() {
        let modifiable: Vec<_> = StatKind::iter().filter(|k| k.is_modifiable()).collect();
        assert_eq!(
            modifiable,
            vec![StatKind::Attack, StatKind::Defense, StatKind::Speed]
        );
    }

    #[test]
    fn from_pairs_requires_every_stat() {
        let err = StatTable::from_pairs([
            (StatKind::Hp, 100),
            (StatKind::Attack, 50),
            (StatKind::Defense, 40),
            (StatKind::Speed, 30),
        ])
        .unwrap_err();
        assert_eq!(err, StatTableError::MissingStat(StatKind::CritChance));
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
    }

    #[test]
    fn from_pairs_rejects_duplicates() {
        let err = StatTable::from_pairs([(StatKind::Hp, 1), (StatKind::Hp, 2)]).unwrap_err();
        assert_eq!(err, StatTableError::DuplicateStat(StatKind::Hp));
    }

    #[test]
    fn from_named_parses_keys() {
        let table = StatTable::from_named([
            ("hp", 120),
            ("ATTACK", 60),
            ("defense", 45),
            ("speed", 70),
            ("crit_chance", 10),
        ])
        .unwrap();
        assert_eq!(table, StatTable::new(120, 60, 45, 70, 10));

        let err = StatTable::from_named([("luck", 7)]).unwrap_err();
        assert_eq!(err, StatTableError::UnknownStat("luck".into()));
    }

    #[test]
    fn copies_do_not_alias() {
        let base = StatTable::new(100, 50, 50, 50, 5);
        let mut current = base;
        current[StatKind::Attack] += 25;

        assert_eq!(base[StatKind::Attack], 50);
        assert_eq!(current[StatKind::Attack], 75);
    }
}
