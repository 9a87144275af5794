//! Battle configuration loader.

use std::path::Path;

use battle_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle balance configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys left out of the file keep their default values.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        anyhow::ensure!(
            config.variance_min <= config.variance_max,
            "variance_min ({}) exceeds variance_max ({})",
            config.variance_min,
            config.variance_max
        );
        anyhow::ensure!(
            config.stage_divisor > 0,
            "stage_divisor must be positive, got {}",
            config.stage_divisor
        );
        anyhow::ensure!(
            config.stages_down >= 0 && config.stages_up >= 0 && config.max_stage_step >= 0,
            "stage counts must not be negative (down {}, up {}, step {})",
            config.stages_down,
            config.stages_up,
            config.max_stage_step
        );
        anyhow::ensure!(
            config.damage_denominator > 0.0,
            "damage_denominator must be positive, got {}",
            config.damage_denominator
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), BattleConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = ConfigLoader::parse("heal_ceiling = 250\ncrit_multiplier = 2.0\n").unwrap();

        assert_eq!(config.heal_ceiling, 250);
        assert_eq!(config.crit_multiplier, 2.0);
        assert_eq!(config.stages_up, BattleConfig::DEFAULT_STAGES_UP);
    }

    #[test]
    fn inverted_variance_is_rejected() {
        let err = ConfigLoader::parse("variance_min = 1.2\nvariance_max = 0.8\n").unwrap_err();
        assert!(err.to_string().contains("variance_min"));
    }

    #[test]
    fn negative_stage_counts_are_rejected() {
        assert!(ConfigLoader::parse("stages_up = -1\n").is_err());
        assert!(ConfigLoader::parse("stages_up = 2147483647\n").is_ok());
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "stage_divisor = 5\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.stage_divisor, 5);

        assert!(ConfigLoader::load(&dir.path().join("missing.toml")).is_err());
    }
}
