//! Critical hit rolls.

use crate::env::RngOracle;

/// Convert a CRIT_CHANCE stat (percent, 0-100) into a probability.
///
/// Values outside the percent range are clamped.
pub fn crit_probability(crit_chance: i32) -> f64 {
    f64::from(crit_chance.clamp(0, 100)) / 100.0
}

/// Roll whether a hit is critical.
///
/// # Arguments
///
/// * `crit_chance` - CRIT_CHANCE stat as a percent
/// * `rng` - Random source; consumes exactly one unit value
///
/// # Returns
///
/// `true` on a critical hit.
pub fn roll_crit(crit_chance: i32, rng: &mut dyn RngOracle) -> bool {
    let is_crit = rng.roll_bool(crit_probability(crit_chance));
    tracing::trace!(crit_chance, is_crit, "crit rolled");
    is_crit
}
