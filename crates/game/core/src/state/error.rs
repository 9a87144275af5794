//! Hero operation errors.
//!
//! Every error here leaves the hero untouched. The same message is emitted
//! through the battle's text sink, so callers only branch on the `Result`.

use crate::error::{BattleError, ErrorSeverity};
use crate::stats::StatKind;

/// Errors from HP-changing operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HeroError {
    /// The hero has already fallen; defeat is terminal.
    #[error("Damage to a dead hero detected ({name}).")]
    AlreadyDefeated { name: String },

    /// Healing cannot bring a fallen hero back.
    #[error("{name} has fallen and cannot be healed.")]
    CannotHealDefeated { name: String },
}

impl BattleError for HeroError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyDefeated { .. } => "HERO_DEFEATED",
            Self::CannotHealDefeated { .. } => "HERO_HEAL_DEFEATED",
        }
    }
}

/// Direction of a stage change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageDirection {
    Raise,
    Lower,
}

impl StageDirection {
    pub fn of(amount: i32) -> Self {
        if amount < 0 { Self::Lower } else { Self::Raise }
    }

    /// "rose" / "fell"
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Raise => "rose",
            Self::Lower => "fell",
        }
    }

    /// "raised" / "lowered"
    pub const fn participle(self) -> &'static str {
        match self {
            Self::Raise => "raised",
            Self::Lower => "lowered",
        }
    }
}

/// Errors from stage modification.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ModifyStatError {
    /// A zero-stage request; nothing to do.
    #[error("stage amount is zero")]
    NoChange,

    /// Only ATTACK, DEFENSE and SPEED move in stages.
    #[error("Such stat cannot be modified ({0}).")]
    NotModifiable(StatKind),

    /// The stat already sits at or beyond its bound in the requested direction.
    #[error("{name}'s {stat} cannot be {} anymore!", .direction.participle())]
    StageLimit {
        name: String,
        stat: StatKind,
        direction: StageDirection,
    },
}

impl BattleError for ModifyStatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoChange | Self::StageLimit { .. } => ErrorSeverity::Rejected,
            Self::NotModifiable(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoChange => "STAGE_NO_CHANGE",
            Self::NotModifiable(_) => "STAGE_NOT_MODIFIABLE",
            Self::StageLimit { .. } => "STAGE_LIMIT",
        }
    }
}

/// Errors from status bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatusError {
    /// Status names are unique per hero.
    #[error("Status already exists! ({0})")]
    Duplicate(String),
}

impl BattleError for StatusError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Rejected
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Duplicate(_) => "STATUS_DUPLICATE",
        }
    }
}

/// Errors from activating a skill.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SkillError {
    #[error("no skill in slot {slot} (hero has {len})")]
    SlotOutOfRange { slot: usize, len: usize },

    #[error("{name} cannot act while defeated")]
    UserDefeated { name: String },

    #[error("{skill} has no effect to activate")]
    NoEffect { skill: String },

    #[error("{skill} is on cooldown for {remaining} more turn(s)")]
    OnCooldown { skill: String, remaining: u32 },

    /// The skill's content refused to activate (no valid target, not enough points).
    #[error("{skill} could not be used")]
    Declined { skill: String },
}

impl BattleError for SkillError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SlotOutOfRange { .. } | Self::UserDefeated { .. } | Self::NoEffect { .. } => {
                ErrorSeverity::Validation
            }
            Self::OnCooldown { .. } | Self::Declined { .. } => ErrorSeverity::Rejected,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SlotOutOfRange { .. } => "SKILL_SLOT",
            Self::UserDefeated { .. } => "SKILL_USER_DEFEATED",
            Self::NoEffect { .. } => "SKILL_NO_EFFECT",
            Self::OnCooldown { .. } => "SKILL_COOLDOWN",
            Self::Declined { .. } => "SKILL_DECLINED",
        }
    }
}
