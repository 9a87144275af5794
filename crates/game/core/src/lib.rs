//! Turn-based battle rules shared by hosts and content tools.
//!
//! `battle-core` defines heroes, teams, statuses and skills together with the
//! damage and stage rules that act on them. Hosts drive battles by calling
//! hero operations with an [`Env`], which supplies randomness, the text sink
//! and balance configuration.
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;

pub use combat::{calculate_damage, calculate_damage_between, roll_crit};
pub use config::BattleConfig;
pub use env::{Env, NullSink, PcgRng, RecordingSink, RngOracle, ScriptedRng, TextSink};
pub use error::{BattleError, ErrorSeverity};
pub use state::{
    Hero, HeroError, HeroId, HpChange, ModifyStatError, Skill, SkillEffect, SkillError, SkillRef,
    StageChange, Status, StatusBehavior, StatusError, StatusTick, Team, UpdateType,
};
pub use stats::{StatKind, StatTable, StatTableError, StatTarget};
