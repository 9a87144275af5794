//! Stage arithmetic for buffs and debuffs.
//!
//! One stage is a fixed fraction of the *base* value of a stat
//! (`base / stage_divisor`, truncated). A stat may sit at most
//! `stages_down` stages below its base and `stages_up` stages above it.
//! The bounds are checked before a step is applied, so a large step taken
//! from just inside a bound can overshoot it.

use crate::config::BattleConfig;

/// Stage geometry for one stat, derived from its base value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageBounds {
    /// Size of one stage.
    pub delta: i32,
    /// `base - delta * stages_down`
    pub lower: i32,
    /// `base + delta * stages_up`
    pub upper: i32,
}

impl StageBounds {
    pub fn for_base(base: i32, config: &BattleConfig) -> Self {
        let delta = base / config.stage_divisor.max(1);
        Self {
            delta,
            lower: base.saturating_sub(delta.saturating_mul(config.stages_down)),
            upper: base.saturating_add(delta.saturating_mul(config.stages_up)),
        }
    }

    /// Value after moving `amount` stages from `current`, saturating at the
    /// `i32` range.
    pub fn step(&self, current: i32, amount: i32) -> i32 {
        current.saturating_add(self.delta.saturating_mul(amount))
    }

    /// Whether a step in the direction of `amount` may start from `current`.
    pub fn allows(&self, current: i32, amount: i32) -> bool {
        if amount < 0 {
            current > self.lower
        } else {
            current < self.upper
        }
    }
}

/// Clamps a requested stage count to `[-max_stage_step, max_stage_step]`.
pub fn clamp_stage_step(amount: i32, config: &BattleConfig) -> i32 {
    let max = config.max_stage_step.max(0);
    amount.clamp(-max, max)
}

/// How strongly a stage change is described.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageIntensity {
    Plain,
    Sharp,
    Drastic,
}

impl StageIntensity {
    pub fn for_amount(amount: i32) -> Self {
        match amount.unsigned_abs() {
            0 | 1 => Self::Plain,
            2 => Self::Sharp,
            _ => Self::Drastic,
        }
    }

    /// Adverb including its trailing space, empty for a single stage.
    pub const fn adverb(self) -> &'static str {
        match self {
            Self::Plain => "",
            Self::Sharp => "sharply ",
            Self::Drastic => "drastically ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_three_down_six_up() {
        let bounds = StageBounds::for_base(100, &BattleConfig::default());
        assert_eq!(bounds.delta, 25);
        assert_eq!(bounds.lower, 25);
        assert_eq!(bounds.upper, 250);
    }

    #[test]
    fn delta_truncates() {
        let config = BattleConfig::default();
        assert_eq!(StageBounds::for_base(10, &config).delta, 2);
        assert_eq!(StageBounds::for_base(7, &config).delta, 1);
        assert_eq!(StageBounds::for_base(3, &config).delta, 0);
    }

    #[test]
    fn allows_checks_only_the_direction_of_travel() {
        let bounds = StageBounds::for_base(100, &BattleConfig::default());

        assert!(!bounds.allows(25, -1));
        assert!(bounds.allows(25, 1));
        assert!(!bounds.allows(250, 2));
        assert!(bounds.allows(250, -2));
        assert!(bounds.allows(26, -3));
    }

    #[test]
    fn huge_values_saturate() {
        let bounds = StageBounds::for_base(1_000_000_000, &BattleConfig::default());
        assert_eq!(bounds.delta, 250_000_000);
        assert_eq!(bounds.lower, 250_000_000);
        assert_eq!(bounds.upper, i32::MAX);
        assert_eq!(bounds.step(2_000_000_000, 3), i32::MAX);

        let mut config = BattleConfig::default();
        config.stages_up = i32::MAX;
        config.stages_down = i32::MAX;
        let bounds = StageBounds::for_base(100, &config);
        assert_eq!(bounds.upper, i32::MAX);
        assert_eq!(bounds.lower, 100 - i32::MAX);
    }

    #[test]
    fn step_is_clamped() {
        let config = BattleConfig::default();
        assert_eq!(clamp_stage_step(-7, &config), -3);
        assert_eq!(clamp_stage_step(5, &config), 3);
        assert_eq!(clamp_stage_step(2, &config), 2);
    }

    #[test]
    fn adverbs_scale_with_magnitude() {
        assert_eq!(StageIntensity::for_amount(-1).adverb(), "");
        assert_eq!(StageIntensity::for_amount(2).adverb(), "sharply ");
        assert_eq!(StageIntensity::for_amount(-3).adverb(), "drastically ");
    }
}
