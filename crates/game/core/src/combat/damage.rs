//! Damage calculation.

use crate::config::BattleConfig;
use crate::env::RngOracle;
use crate::state::Hero;
use crate::stats::StatKind;

/// Defense actually used by the formula.
///
/// Critical hits cap defense at the defender's base value, negating defense
/// buffs but not defense debuffs. The result is floored at
/// `config.min_defense` (never below 1) so the division is always defined.
pub fn effective_defense(
    target_defense: i32,
    target_base_defense: i32,
    is_crit: bool,
    config: &BattleConfig,
) -> i32 {
    let defense = if is_crit {
        target_defense.clamp(0, target_base_defense.max(0))
    } else {
        target_defense
    };
    defense.max(config.min_defense.max(1))
}

/// Calculate damage with an explicit variance multiplier.
///
/// # Formula
///
/// ```text
/// defense    = crit ? clamp(defense, 0, base_defense) : defense
/// staple     = (30 × power × attack) / (defense × 40) + 15
/// multiplier = crit ? 1.5 : 1.0
/// damage     = round_half_even(staple × variance × multiplier)
/// ```
///
/// Constants come from [`BattleConfig`].
pub fn calculate_damage_with_variance(
    base_damage: i32,
    is_crit: bool,
    attacker_attack: i32,
    target_defense: i32,
    target_base_defense: i32,
    bonus_multiplier: f64,
    config: &BattleConfig,
) -> i32 {
    let defense = effective_defense(target_defense, target_base_defense, is_crit, config);
    let multiplier = if is_crit { config.crit_multiplier } else { 1.0 };

    let staple = config.damage_numerator * f64::from(base_damage) * f64::from(attacker_attack)
        / (f64::from(defense) * config.damage_denominator)
        + config.damage_flat_bonus;
    let damage = (staple * bonus_multiplier * multiplier).round_ties_even() as i32;

    tracing::trace!(
        base_damage,
        attacker_attack,
        defense,
        is_crit,
        staple,
        bonus_multiplier,
        damage,
        "damage rolled"
    );

    damage
}

/// Calculate damage, drawing the variance multiplier from `rng`.
///
/// The multiplier is uniform in `[variance_min, variance_max)` (±10% by default).
pub fn calculate_damage(
    base_damage: i32,
    is_crit: bool,
    attacker_attack: i32,
    target_defense: i32,
    target_base_defense: i32,
    config: &BattleConfig,
    rng: &mut dyn RngOracle,
) -> i32 {
    let bonus_multiplier = rng.uniform_f64(config.variance_min, config.variance_max);
    calculate_damage_with_variance(
        base_damage,
        is_crit,
        attacker_attack,
        target_defense,
        target_base_defense,
        bonus_multiplier,
        config,
    )
}

/// Calculate damage of `source` hitting `target`, using the attacker's current
/// ATTACK and the target's current and base DEFENSE.
pub fn calculate_damage_between(
    base_damage: i32,
    source: &Hero,
    target: &Hero,
    is_crit: bool,
    config: &BattleConfig,
    rng: &mut dyn RngOracle,
) -> i32 {
    calculate_damage(
        base_damage,
        is_crit,
        source.current_stats()[StatKind::Attack],
        target.current_stats()[StatKind::Defense],
        target.base_stats()[StatKind::Defense],
        config,
        rng,
    )
}
