//! Data-driven battle content.
//!
//! This crate describes heroes and skills as plain data and provides loaders
//! for RON/TOML data files:
//! - Skill catalogs (RON)
//! - Hero rosters (RON)
//! - Battle balance configuration (TOML)
//!
//! What a skill *does* is not data; hosts bind [`SkillEffect`]s to catalog
//! entries by name before heroes are built.
//!
//! [`SkillEffect`]: battle_core::SkillEffect

pub mod specs;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use specs::{HeroTemplate, SkillSpec};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, RosterLoader, SkillCatalog};
