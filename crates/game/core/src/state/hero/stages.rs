//! Buff/debuff stage modification.

use crate::env::Env;
use crate::state::error::{ModifyStatError, StageDirection};
use crate::stats::{StageBounds, StageIntensity, StatKind, StatTarget, clamp_stage_step};

use super::Hero;

/// A stage modification that went through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageChange {
    /// The stat that moved (resolved if the request was `Random`).
    pub stat: StatKind,
    /// Stages applied after clamping.
    pub stages: i32,
    pub before: i32,
    pub after: i32,
}

impl Hero {
    /// Moves ATTACK, DEFENSE or SPEED by `amount` stages.
    ///
    /// One stage is a quarter of the stat's base value (truncated). A stat can
    /// go at most 3 stages below base and 6 above; the bound is checked
    /// against the current value before the step is applied. `amount` is
    /// clamped to ±3.
    ///
    /// `StatTarget::Random` picks one of the three modifiable stats uniformly.
    pub fn modify_stats(
        &mut self,
        target: impl Into<StatTarget>,
        amount: i32,
        env: &mut Env,
    ) -> Result<StageChange, ModifyStatError> {
        if amount == 0 {
            return Err(ModifyStatError::NoChange);
        }

        let stat = match target.into() {
            StatTarget::Stat(kind) => kind,
            StatTarget::Random => {
                let pick = env.rng().uniform(0, StatKind::MODIFIABLE.len() as u32 - 1);
                StatKind::MODIFIABLE[pick as usize]
            }
        };

        if !stat.is_modifiable() {
            return Err(self.report(ModifyStatError::NotModifiable(stat), env));
        }

        let amount = clamp_stage_step(amount, env.config());
        let direction = StageDirection::of(amount);
        let bounds = StageBounds::for_base(self.base_stats[stat], env.config());
        let before = self.current_stats[stat];

        if !bounds.allows(before, amount) {
            return Err(self.report(
                ModifyStatError::StageLimit {
                    name: self.name.clone(),
                    stat,
                    direction,
                },
                env,
            ));
        }

        let after = bounds.step(before, amount);
        self.current_stats[stat] = after;

        tracing::debug!(
            id = %self.id,
            %stat,
            stages = amount,
            delta = bounds.delta,
            before,
            after,
            "stat stage applied"
        );
        env.emit(&format!(
            "{}'s {} {}{}!",
            self.name,
            stat,
            StageIntensity::for_amount(amount).adverb(),
            direction.verb()
        ));

        Ok(StageChange {
            stat,
            stages: amount,
            before,
            after,
        })
    }

    /// Restores every stat except HP to its base value.
    pub fn reset_stages(&mut self) {
        for stat in StatKind::MODIFIABLE {
            self.current_stats[stat] = self.base_stats[stat];
        }
    }
}
