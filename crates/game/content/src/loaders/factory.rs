//! Content factory for building heroes from data files.

use std::path::{Path, PathBuf};

use battle_core::{BattleConfig, Hero, Team};

use crate::loaders::{ConfigLoader, LoadResult, RosterLoader, SkillCatalog};
use crate::specs::HeroTemplate;

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── skills.ron
/// └── rosters/
///     ├── vanguard.ron
///     └── raiders.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load the skill catalog from `skills.ron`.
    pub fn load_skills(&self) -> LoadResult<SkillCatalog> {
        let path = self.data_dir.join("skills.ron");
        SkillCatalog::load(&path)
    }

    /// Load a roster from `rosters/{roster_name}.ron`.
    pub fn load_roster(&self, roster_name: &str) -> LoadResult<Vec<HeroTemplate>> {
        let path = self
            .data_dir
            .join("rosters")
            .join(format!("{}.ron", roster_name));
        RosterLoader::load(&path)
    }

    /// Builds one hero per template and enlists each into `team`, in roster order.
    ///
    /// Skills are cloned from `catalog`, so effects bound there are shared
    /// and cooldowns are per hero. A template that names an unknown skill or
    /// starts with no HP fails the whole batch.
    pub fn build_heroes(
        roster: &[HeroTemplate],
        catalog: &SkillCatalog,
        team: &Team,
    ) -> LoadResult<Vec<Hero>> {
        let mut heroes = Vec::with_capacity(roster.len());
        for template in roster {
            let stats = template.base_stats().map_err(|e| {
                anyhow::anyhow!("Invalid stats for hero '{}': {}", template.name, e)
            })?;
            let skills = catalog.resolve(&template.skills).map_err(|e| {
                anyhow::anyhow!("Failed to build hero '{}': {}", template.name, e)
            })?;

            let hero = Hero::new(
                template.name.clone(),
                template.title.clone(),
                stats,
                &skills,
                Some(team.clone()),
            );
            anyhow::ensure!(
                hero.is_alive(),
                "Hero '{}' starts defeated (HP {})",
                template.name,
                hero.hp()
            );
            heroes.push(hero);
        }

        for hero in &heroes {
            team.enlist(hero);
        }
        Ok(heroes)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
