//! Status effects attached to heroes.
//!
//! A status is identified by its name: a hero never carries two statuses with
//! the same name. Each status belongs to one tick phase ([`UpdateType`]) and is
//! advanced only when the battle loop dispatches that phase.
//!
//! # Duration
//!
//! Plain statuses count `duration` down by one per matching tick and expire at
//! zero. Statuses with a [`StatusBehavior`] run their own logic instead and
//! decide themselves when they expire.

use std::fmt;
use std::rc::Rc;

use crate::env::Env;

use super::hero::Hero;

/// Tick phase that advances a status.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum UpdateType {
    /// Before the owning hero acts.
    TurnStart,
    /// After the owning hero acts.
    TurnEnd,
    /// Once per round, after every hero has acted.
    RoundEnd,
}

/// Result of one status update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTick {
    /// Status stays attached.
    Continue,
    /// Status has elapsed and is removed after this update.
    Expired,
}

/// Custom per-tick logic for a status (poison damage, regeneration, ...).
///
/// While a behavior runs, its own status is detached from the hero and handed
/// in as `status`; the hero's other statuses can be inspected, added and
/// removed as usual. A status ends itself by returning [`StatusTick::Expired`].
pub trait StatusBehavior {
    fn update(&self, status: &mut Status, hero: &mut Hero, env: &mut Env) -> StatusTick;
}

/// A named, timed modifier.
#[derive(Clone)]
pub struct Status {
    name: String,
    pub duration: u32,
    update_type: UpdateType,
    behavior: Option<Rc<dyn StatusBehavior>>,
}

impl Status {
    pub fn new(name: impl Into<String>, duration: u32, update_type: UpdateType) -> Self {
        Self {
            name: name.into(),
            duration,
            update_type,
            behavior: None,
        }
    }

    /// Attaches custom tick logic, replacing the default countdown.
    pub fn with_behavior(mut self, behavior: impl StatusBehavior + 'static) -> Self {
        self.behavior = Some(Rc::new(behavior));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn update_type(&self) -> UpdateType {
        self.update_type
    }

    pub fn has_behavior(&self) -> bool {
        self.behavior.is_some()
    }

    /// Runs one update: the behavior if present, otherwise the countdown.
    pub(crate) fn tick(&mut self, hero: &mut Hero, env: &mut Env) -> StatusTick {
        match self.behavior.clone() {
            Some(behavior) => behavior.update(self, hero, env),
            None => {
                self.duration = self.duration.saturating_sub(1);
                if self.duration == 0 {
                    StatusTick::Expired
                } else {
                    StatusTick::Continue
                }
            }
        }
    }
}

/// Statuses compare by name, their identity key.
impl PartialEq for Status {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Status {}

impl fmt::Debug for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Status")
            .field("name", &self.name)
            .field("duration", &self.duration)
            .field("update_type", &self.update_type)
            .field("has_behavior", &self.behavior.is_some())
            .finish()
    }
}
