//! Heroes: the combatants of a battle.
//!
//! A hero owns its stats, skills and statuses. It does not own its team; it
//! holds a [`Team`] handle only so it can leave the roster when it falls.
//!
//! Operations are split by concern:
//! - `health`: damage, healing and the death check
//! - `stages`: buff/debuff stage modification
//! - `statuses`: status add/remove and tick dispatch
//! - `skills`: skill activation and interaction bookkeeping

mod health;
mod skills;
mod stages;
mod statuses;

use std::collections::VecDeque;

pub use health::HpChange;
pub use stages::StageChange;

use crate::stats::{StatKind, StatTable};

use super::common::{HeroId, SkillRef};
use super::skill::Skill;
use super::status::Status;
use super::team::Team;

/// A combatant with base and current stats.
#[derive(Debug)]
pub struct Hero {
    id: HeroId,
    name: String,
    title: String,

    base_stats: StatTable,
    current_stats: StatTable,

    skills: Vec<Skill>,
    statuses: Vec<Status>,
    /// Names still due an update in the running `update_statuses` pass.
    status_queue: VecDeque<String>,
    team: Team,

    is_alive: bool,
    is_suppressed: bool,

    last_skill_used: Option<SkillRef>,
    last_skill_hit: Option<SkillRef>,
    priority_target: Option<HeroId>,
    last_hero_attacker: Option<HeroId>,
}

impl Hero {
    /// Builds a hero from its base stats and skill templates.
    ///
    /// Stats and skills are copied; later changes to `skills` (or to another
    /// hero built from them) never reach this hero. The hero is *not* enlisted
    /// into `team`; call [`Team::enlist`] for that. Without a team the hero
    /// gets a fresh, empty one.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        base_stats: StatTable,
        skills: &[Skill],
        team: Option<Team>,
    ) -> Self {
        let hero = Self {
            id: HeroId::next(),
            name: name.into(),
            title: title.into(),
            base_stats,
            current_stats: base_stats,
            skills: skills.to_vec(),
            statuses: Vec::new(),
            status_queue: VecDeque::new(),
            team: team.unwrap_or_default(),
            is_alive: base_stats[StatKind::Hp] >= 1,
            is_suppressed: false,
            last_skill_used: None,
            last_skill_hit: None,
            priority_target: None,
            last_hero_attacker: None,
        };
        tracing::debug!(id = %hero.id, name = %hero.name, "hero created");
        hero
    }

    pub fn id(&self) -> HeroId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Unmodified stats; never change after construction.
    pub fn base_stats(&self) -> &StatTable {
        &self.base_stats
    }

    /// Battle-state stats.
    pub fn current_stats(&self) -> &StatTable {
        &self.current_stats
    }

    #[cfg(test)]
    pub(crate) fn current_stats_mut(&mut self) -> &mut StatTable {
        &mut self.current_stats
    }

    pub fn hp(&self) -> i32 {
        self.current_stats[StatKind::Hp]
    }

    pub fn max_hp(&self) -> i32 {
        self.base_stats[StatKind::Hp]
    }

    pub fn team(&self) -> &Team {
        &self.team
    }

    pub fn is_alive(&self) -> bool {
        self.is_alive
    }

    pub fn is_suppressed(&self) -> bool {
        self.is_suppressed
    }

    /// Gate flag owned by skill content (e.g. a silence effect).
    pub fn set_suppressed(&mut self, suppressed: bool) {
        self.is_suppressed = suppressed;
    }

    pub fn last_skill_used(&self) -> Option<SkillRef> {
        self.last_skill_used
    }

    pub fn last_skill_hit(&self) -> Option<SkillRef> {
        self.last_skill_hit
    }

    pub fn priority_target(&self) -> Option<HeroId> {
        self.priority_target
    }

    pub fn set_priority_target(&mut self, target: Option<HeroId>) {
        self.priority_target = target;
    }

    pub fn last_hero_attacker(&self) -> Option<HeroId> {
        self.last_hero_attacker
    }
}
