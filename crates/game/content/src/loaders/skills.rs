//! Skill catalog loader.

use std::path::Path;
use std::rc::Rc;

use battle_core::{Skill, SkillEffect};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};
use crate::specs::SkillSpec;

/// Skill catalog structure for RON files.
#[derive(Debug, Deserialize)]
struct SkillCatalogFile {
    skills: Vec<SkillSpec>,
}

/// Named skill templates heroes are built from.
///
/// Entries keep file order. Effects are bound after loading with
/// [`bind_effect`](Self::bind_effect); one effect allocation is shared by every
/// hero that receives the skill.
#[derive(Debug, Default)]
pub struct SkillCatalog {
    skills: Vec<Skill>,
}

impl SkillCatalog {
    /// Load a skill catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Self> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Self> {
        let file: SkillCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skill catalog RON: {}", e))?;
        Self::from_specs(file.skills)
    }

    /// Builds a catalog, rejecting duplicate names.
    pub fn from_specs(specs: impl IntoIterator<Item = SkillSpec>) -> LoadResult<Self> {
        let mut catalog = Self::default();
        for spec in specs {
            anyhow::ensure!(
                catalog.get(&spec.name).is_none(),
                "Skill '{}' is defined more than once",
                spec.name
            );
            catalog.skills.push(spec.to_skill());
        }
        Ok(catalog)
    }

    pub fn get(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|skill| skill.name() == name)
    }

    /// Attaches `effect` to the skill called `name`, replacing any earlier one.
    pub fn bind_effect(&mut self, name: &str, effect: Rc<dyn SkillEffect>) -> LoadResult<()> {
        let index = self
            .skills
            .iter()
            .position(|skill| skill.name() == name)
            .ok_or_else(|| anyhow::anyhow!("Cannot bind effect: unknown skill '{}'", name))?;

        self.skills[index] = self.skills[index].clone().with_shared_effect(effect);
        Ok(())
    }

    /// Clones the named skills in the given order.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> LoadResult<Vec<Skill>> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name)
                    .cloned()
                    .ok_or_else(|| anyhow::anyhow!("Unknown skill '{}'", name))
            })
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(Skill::name)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
