//! Battle participants and the state they carry.
//!
//! Heroes own their stats, skills and statuses. Teams are shared rosters of
//! hero ids; heroes hold a handle only so they can leave when they fall.
mod common;
mod error;
mod hero;
mod skill;
mod status;
mod team;

pub use common::{HeroId, SkillRef};
pub use error::{HeroError, ModifyStatError, SkillError, StageDirection, StatusError};
pub use hero::{Hero, HpChange, StageChange};
pub use skill::{Skill, SkillEffect};
pub use status::{Status, StatusBehavior, StatusTick, UpdateType};
pub use team::Team;
