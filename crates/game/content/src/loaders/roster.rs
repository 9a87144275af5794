//! Hero roster loader.

use std::path::Path;

use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};
use crate::specs::HeroTemplate;

/// Roster structure for RON files.
#[derive(Debug, Deserialize)]
struct RosterFile {
    heroes: Vec<HeroTemplate>,
}

/// Loader for hero rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load hero templates from a RON file.
    ///
    /// Every template's stat map is checked here, so a roster that loads
    /// always builds.
    pub fn load(path: &Path) -> LoadResult<Vec<HeroTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<HeroTemplate>> {
        let roster: RosterFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        for template in &roster.heroes {
            template
                .base_stats()
                .map_err(|e| anyhow::anyhow!("Invalid stats for hero '{}': {}", template.name, e))?;
        }

        Ok(roster.heroes)
    }
}
