//! Skill activation and interaction bookkeeping.

use std::any::Any;

use crate::env::Env;
use crate::state::common::SkillRef;
use crate::state::error::SkillError;
use crate::state::skill::Skill;

use super::Hero;

impl Hero {
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn skill(&self, slot: usize) -> Option<&Skill> {
        self.skills.get(slot)
    }

    pub fn skill_mut(&mut self, slot: usize) -> Option<&mut Skill> {
        self.skills.get_mut(slot)
    }

    /// Resolves a reference to one of this hero's skills.
    pub fn skill_by_ref(&self, skill: SkillRef) -> Option<&Skill> {
        if skill.owner != self.id {
            return None;
        }
        self.skill(skill.slot)
    }

    /// False for empty slots as well as cooling-down skills.
    pub fn skill_ready(&self, slot: usize) -> bool {
        self.skill(slot).is_some_and(Skill::is_ready)
    }

    /// Advances every skill cooldown by one turn.
    pub fn tick_cooldowns(&mut self) {
        for skill in &mut self.skills {
            skill.tick_cooldown();
        }
    }

    /// Activates the skill in `slot`.
    ///
    /// `battle` is the host's battle context and is handed to the skill's
    /// effect as is. On success the skill becomes `last_skill_used` and its
    /// cooldown starts. A failed activation leaves both untouched.
    pub fn use_skill(
        &mut self,
        slot: usize,
        battle: &mut dyn Any,
        env: &mut Env,
    ) -> Result<(), SkillError> {
        if !self.is_alive {
            let name = self.name.clone();
            return Err(self.report(SkillError::UserDefeated { name }, env));
        }

        let Some(skill) = self.skills.get(slot) else {
            let len = self.skills.len();
            return Err(self.report(SkillError::SlotOutOfRange { slot, len }, env));
        };
        let skill_name = skill.name().to_owned();

        if !skill.is_ready() {
            let remaining = skill.cooldown_remaining();
            return Err(self.report(
                SkillError::OnCooldown {
                    skill: skill_name,
                    remaining,
                },
                env,
            ));
        }

        let Some(effect) = skill.effect() else {
            return Err(self.report(SkillError::NoEffect { skill: skill_name }, env));
        };

        if !effect.activate(self, slot, battle, env) {
            return Err(self.report(SkillError::Declined { skill: skill_name }, env));
        }

        self.last_skill_used = Some(SkillRef::new(self.id, slot));
        if let Some(skill) = self.skills.get_mut(slot) {
            skill.start_cooldown();
        }
        tracing::debug!(id = %self.id, skill = %skill_name, slot, "skill used");
        Ok(())
    }
}
