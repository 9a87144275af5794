//! Skills heroes can use.
//!
//! A [`Skill`] is a descriptor plus per-instance state (cooldown). Heroes
//! clone the skills they are built with, so two heroes sharing a definition
//! never share a cooldown. What a skill *does* lives in a [`SkillEffect`]
//! supplied by game content; the effect is stateless and shared between clones.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::env::Env;

use super::hero::Hero;

/// Content-side logic of a skill.
pub trait SkillEffect {
    /// Performs the skill for `user`.
    ///
    /// `slot` is the index of the skill being used in `user.skills()`;
    /// `battle` is the host's battle context, passed through untouched.
    /// Returns false when the skill could not be used (no valid target, ...).
    fn activate(&self, user: &mut Hero, slot: usize, battle: &mut dyn Any, env: &mut Env)
    -> bool;
}

/// Combat action descriptor with per-hero instance state.
#[derive(Clone)]
pub struct Skill {
    name: String,
    base_damage: i32,
    accuracy: f64,
    skill_point: i32,
    cooldown: u32,
    cooldown_remaining: u32,
    effect: Option<Rc<dyn SkillEffect>>,
}

impl Skill {
    /// # Arguments
    ///
    /// * `base_damage` - Power fed into the damage formula; below 1 means non-damaging
    /// * `accuracy` - Hit chance in `0.0..=1.0`; 0 or below means the skill never rolls to hit
    /// * `skill_point` - Cost to use
    pub fn new(name: impl Into<String>, base_damage: i32, accuracy: f64, skill_point: i32) -> Self {
        Self {
            name: name.into(),
            base_damage,
            accuracy,
            skill_point,
            cooldown: 0,
            cooldown_remaining: 0,
            effect: None,
        }
    }

    /// Turns the skill stays unavailable after each use.
    pub fn with_cooldown(mut self, cooldown: u32) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn with_effect(mut self, effect: impl SkillEffect + 'static) -> Self {
        self.effect = Some(Rc::new(effect));
        self
    }

    /// Shares an already allocated effect (e.g. from a content catalog).
    pub fn with_shared_effect(mut self, effect: Rc<dyn SkillEffect>) -> Self {
        self.effect = Some(effect);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_damage(&self) -> i32 {
        self.base_damage
    }

    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    pub fn skill_point(&self) -> i32 {
        self.skill_point
    }

    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    pub fn cooldown_remaining(&self) -> u32 {
        self.cooldown_remaining
    }

    pub fn is_damaging(&self) -> bool {
        self.base_damage >= 1
    }

    pub fn is_ready(&self) -> bool {
        self.cooldown_remaining == 0
    }

    pub fn effect(&self) -> Option<Rc<dyn SkillEffect>> {
        self.effect.clone()
    }

    pub fn start_cooldown(&mut self) {
        self.cooldown_remaining = self.cooldown;
    }

    /// Advances the cooldown by one turn.
    pub fn tick_cooldown(&mut self) {
        self.cooldown_remaining = self.cooldown_remaining.saturating_sub(1);
    }
}

impl fmt::Debug for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Skill")
            .field("name", &self.name)
            .field("base_damage", &self.base_damage)
            .field("accuracy", &self.accuracy)
            .field("skill_point", &self.skill_point)
            .field("cooldown", &self.cooldown)
            .field("cooldown_remaining", &self.cooldown_remaining)
            .field("has_effect", &self.effect.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_have_independent_cooldowns() {
        let template = Skill::new("Cleave", 60, 0.9, 2).with_cooldown(2);
        let mut a = template.clone();
        let b = template.clone();

        a.start_cooldown();
        assert_eq!(a.cooldown_remaining(), 2);
        assert!(b.is_ready());

        a.tick_cooldown();
        a.tick_cooldown();
        a.tick_cooldown();
        assert!(a.is_ready());
    }

    #[test]
    fn non_damaging_skills() {
        assert!(!Skill::new("Guard", 0, 0.0, 1).is_damaging());
        assert!(Skill::new("Jab", 1, 1.0, 0).is_damaging());
    }
}
