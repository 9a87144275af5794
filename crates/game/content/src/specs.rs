//! Plain-data descriptions of heroes and skills.

use std::collections::BTreeMap;

use battle_core::{Skill, StatTable, StatTableError};

/// Data half of a skill: everything except its effect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillSpec {
    pub name: String,
    pub base_damage: i32,
    pub accuracy: f64,
    pub skill_point: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cooldown: u32,
}

impl SkillSpec {
    pub fn to_skill(&self) -> Skill {
        Skill::new(
            self.name.clone(),
            self.base_damage,
            self.accuracy,
            self.skill_point,
        )
        .with_cooldown(self.cooldown)
    }
}

/// A hero as written in a roster file.
///
/// Stats are keyed by stat name (`"HP"`, `"attack"`, `"CRIT_CHANCE"`, ...;
/// case-insensitive). Skills are referenced by catalog name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroTemplate {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    pub stats: BTreeMap<String, i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<String>,
}

impl HeroTemplate {
    /// Resolves the stat map into a full table.
    pub fn base_stats(&self) -> Result<StatTable, StatTableError> {
        StatTable::from_named(self.stats.iter().map(|(name, value)| (name.as_str(), *value)))
    }
}
