//! Damage, healing and the death check.

use crate::combat::{calculate_damage, calculate_damage_between, roll_crit};
use crate::env::Env;
use crate::error::BattleError;
use crate::state::common::{HeroId, SkillRef};
use crate::state::error::HeroError;
use crate::stats::StatKind;

use super::Hero;

/// Outcome of an HP-changing operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HpChange {
    pub before: i32,
    pub after: i32,
    /// True only for the operation that made the hero fall.
    pub defeated: bool,
}

impl HpChange {
    /// Signed HP difference (negative for damage).
    pub fn delta(&self) -> i32 {
        self.after - self.before
    }
}

impl Hero {
    /// Applies damage that has already been calculated.
    ///
    /// HP is clamped to `[0, base HP]`. `is_crit` only changes the emitted
    /// text. Damaging a defeated hero is reported and does nothing.
    pub fn take_damage(
        &mut self,
        true_amount: i32,
        show_text: bool,
        is_crit: bool,
        env: &mut Env,
    ) -> Result<HpChange, HeroError> {
        if !self.is_alive {
            return Err(self.report(
                HeroError::AlreadyDefeated {
                    name: self.name.clone(),
                },
                env,
            ));
        }

        let before = self.hp();
        let after = before
            .saturating_sub(true_amount)
            .clamp(0, self.max_hp().max(0));
        self.current_stats[StatKind::Hp] = after;

        if show_text {
            let line = if is_crit {
                format!("{} takes {} damage! It's a critical hit!", self.name, true_amount)
            } else {
                format!("{} takes {} damage!", self.name, true_amount)
            };
            env.emit(&line);
        }

        let defeated = self.check_alive_condition(env);
        Ok(HpChange {
            before,
            after,
            defeated,
        })
    }

    /// Applies an attack, calculating damage against this hero's own DEFENSE.
    pub fn take_attack(
        &mut self,
        base_damage: i32,
        attacker_attack: i32,
        show_text: bool,
        is_crit: bool,
        env: &mut Env,
    ) -> Result<HpChange, HeroError> {
        let (config, rng) = env.split();
        let damage = calculate_damage(
            base_damage,
            is_crit,
            attacker_attack,
            self.current_stats[StatKind::Defense],
            self.base_stats[StatKind::Defense],
            config,
            rng,
        );
        self.take_damage(damage, show_text, is_crit, env)
    }

    /// Like [`take_attack`](Self::take_attack), rolling the crit from this
    /// hero's CRIT_CHANCE (percent).
    pub fn take_attack_rolled(
        &mut self,
        base_damage: i32,
        attacker_attack: i32,
        show_text: bool,
        env: &mut Env,
    ) -> Result<HpChange, HeroError> {
        let is_crit = roll_crit(self.current_stats[StatKind::CritChance], env.rng());
        self.take_attack(base_damage, attacker_attack, show_text, is_crit, env)
    }

    /// Deals `percent` (e.g. `0.25`) of base HP as damage, rounded half to even.
    pub fn take_percent_damage(
        &mut self,
        percent: f64,
        show_text: bool,
        env: &mut Env,
    ) -> Result<HpChange, HeroError> {
        let amount = (f64::from(self.max_hp()) * percent).round_ties_even() as i32;
        self.take_damage(amount, show_text, false, env)
    }

    /// Resolves a hit from `attacker`, remembering who struck and with what.
    ///
    /// Damage uses the attacker's current ATTACK; the crit is rolled from this
    /// hero's CRIT_CHANCE. The attacker and skill are recorded even if the hit
    /// is rejected because this hero has already fallen.
    pub fn take_hit_from(
        &mut self,
        attacker: &Hero,
        skill: Option<SkillRef>,
        base_damage: i32,
        show_text: bool,
        env: &mut Env,
    ) -> Result<HpChange, HeroError> {
        self.record_hit_by(attacker.id(), skill);

        let is_crit = roll_crit(self.current_stats[StatKind::CritChance], env.rng());
        let (config, rng) = env.split();
        let damage = calculate_damage_between(base_damage, attacker, self, is_crit, config, rng);
        self.take_damage(damage, show_text, is_crit, env)
    }

    /// Restores HP up to the configured heal ceiling.
    ///
    /// The ceiling is independent of base HP, so heroes can be overhealed;
    /// the next damage clamps HP back under base HP. A negative amount can
    /// defeat the hero.
    pub fn heal(
        &mut self,
        amount: i32,
        show_text: bool,
        env: &mut Env,
    ) -> Result<HpChange, HeroError> {
        if !self.is_alive {
            return Err(self.report(
                HeroError::CannotHealDefeated {
                    name: self.name.clone(),
                },
                env,
            ));
        }

        let ceiling = env.config().heal_ceiling.max(0);
        let before = self.hp();
        let after = before.saturating_add(amount).clamp(0, ceiling);
        self.current_stats[StatKind::Hp] = after;

        if show_text {
            env.emit(&format!("{} regained {} HP!", self.name, amount));
        }

        let defeated = self.check_alive_condition(env);
        Ok(HpChange {
            before,
            after,
            defeated,
        })
    }

    /// Records who last hit this hero and with which skill.
    pub fn record_hit_by(&mut self, attacker: HeroId, skill: Option<SkillRef>) {
        self.last_hero_attacker = Some(attacker);
        self.last_skill_hit = skill;
    }

    /// Marks the hero defeated once HP drops below 1.
    ///
    /// Returns true only on the call that performs the transition.
    fn check_alive_condition(&mut self, env: &mut Env) -> bool {
        if !self.is_alive || self.hp() >= 1 {
            return false;
        }

        self.is_alive = false;
        env.emit(&format!("{} had fallen in battle!", self.name));
        let removed = self.team.remove(self.id);
        tracing::debug!(id = %self.id, name = %self.name, removed, "hero defeated");
        true
    }

    /// Emits a rejected operation through the sink and hands the error back.
    pub(crate) fn report<E: BattleError>(&self, err: E, env: &mut Env) -> E {
        tracing::debug!(
            id = %self.id,
            code = err.error_code(),
            severity = err.severity().as_str(),
            "operation rejected"
        );
        env.emit_error(&err.to_string());
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BattleConfig;
    use crate::env::{PcgRng, RecordingSink, RngOracle, ScriptedRng};
    use crate::state::Team;
    use crate::stats::StatTable;

    fn env_with(values: &[f64]) -> (Env, RecordingSink) {
        let sink = RecordingSink::new();
        let env = Env::new(BattleConfig::default())
            .with_rng(ScriptedRng::new(values.iter().copied()))
            .with_sink(sink.clone());
        (env, sink)
    }

    fn hero(team: Option<Team>) -> Hero {
        Hero::new("Rook", "the Bold", StatTable::new(100, 100, 100, 50, 0), &[], team)
    }

    #[test]
    fn damage_reduces_hp_and_reports() {
        let (mut env, sink) = env_with(&[]);
        let mut rook = hero(None);

        let change = rook.take_damage(30, true, false, &mut env).unwrap();

        assert_eq!(change, HpChange { before: 100, after: 70, defeated: false });
        assert_eq!(change.delta(), -30);
        assert_eq!(sink.narrative(), vec!["Rook takes 30 damage!"]);
    }

    #[test]
    fn crit_only_changes_text() {
        let (mut env, sink) = env_with(&[]);
        let mut rook = hero(None);

        rook.take_damage(10, true, true, &mut env).unwrap();

        assert_eq!(rook.hp(), 90);
        assert_eq!(
            sink.narrative(),
            vec!["Rook takes 10 damage! It's a critical hit!"]
        );
    }

    #[test]
    fn silent_damage_emits_nothing() {
        let (mut env, sink) = env_with(&[]);
        let mut rook = hero(None);

        rook.take_damage(10, false, false, &mut env).unwrap();
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn negative_damage_cannot_exceed_base_hp() {
        let (mut env, _) = env_with(&[]);
        let mut rook = hero(None);
        rook.take_damage(20, false, false, &mut env).unwrap();

        rook.take_damage(-50, false, false, &mut env).unwrap();
        assert_eq!(rook.hp(), 100);
    }

    #[test]
    fn lethal_damage_defeats_once_and_leaves_team() {
        let team = Team::new();
        let (mut env, sink) = env_with(&[]);
        let mut rook = hero(Some(team.clone()));
        team.enlist(&rook);

        let change = rook.take_damage(250, true, false, &mut env).unwrap();
        assert_eq!(change.after, 0);
        assert!(change.defeated);
        assert!(!rook.is_alive());
        assert!(team.is_empty());

        let err = rook.take_damage(5, true, false, &mut env).unwrap_err();
        assert_eq!(err, HeroError::AlreadyDefeated { name: "Rook".into() });
        assert_eq!(rook.hp(), 0);

        let fallen: Vec<_> = sink
            .narrative()
            .into_iter()
            .filter(|line| line.ends_with("had fallen in battle!"))
            .collect();
        assert_eq!(fallen, vec!["Rook had fallen in battle!"]);
        assert_eq!(sink.errors().len(), 1);
    }

    #[test]
    fn attack_uses_own_defense() {
        // (30 × 50 × 100) / (100 × 40) + 15 = 52.5 → 52 with no variance
        let (mut env, _) = env_with(&[0.5]);
        let mut rook = hero(None);

        let change = rook.take_attack(50, 100, false, false, &mut env).unwrap();
        assert_eq!(change.after, 48);
    }

    #[test]
    fn rolled_attack_uses_crit_chance_percent() {
        let mut rook = Hero::new("Rook", "", StatTable::new(200, 100, 100, 50, 30), &[], None);

        // crit roll 0.29 < 0.30 → crit; variance 0.5 → ×1.0; 52.5 × 1.5 = 78.75 → 79
        let (mut env, sink) = env_with(&[0.29, 0.5]);
        let change = rook.take_attack_rolled(50, 100, true, &mut env).unwrap();
        assert_eq!(change.delta(), -79);
        assert!(sink.narrative()[0].contains("critical"));

        // crit roll 0.30 → no crit; 52
        let (mut env, _) = env_with(&[0.30, 0.5]);
        let change = rook.take_attack_rolled(50, 100, false, &mut env).unwrap();
        assert_eq!(change.delta(), -52);
    }

    #[test]
    fn percent_damage_uses_base_hp() {
        let (mut env, _) = env_with(&[]);
        let mut rook = Hero::new("Rook", "", StatTable::new(90, 10, 10, 10, 0), &[], None);

        // 90 × 0.25 = 22.5 → 22 (half to even)
        rook.take_percent_damage(0.25, false, &mut env).unwrap();
        assert_eq!(rook.hp(), 68);

        rook.take_percent_damage(1.0, false, &mut env).unwrap();
        assert!(!rook.is_alive());
    }

    #[test]
    fn heal_can_overheal_up_to_ceiling() {
        let (mut env, sink) = env_with(&[]);
        let mut rook = hero(None);

        let change = rook.heal(50, true, &mut env).unwrap();
        assert_eq!(change.after, 150);
        assert_eq!(sink.narrative(), vec!["Rook regained 50 HP!"]);

        rook.heal(5000, false, &mut env).unwrap();
        assert_eq!(rook.hp(), 1000);

        // next damage clamps back under base HP
        rook.take_damage(1, false, false, &mut env).unwrap();
        assert_eq!(rook.hp(), 100);
    }

    #[test]
    fn heal_ceiling_comes_from_config() {
        let mut env = Env::new(BattleConfig::default().with_heal_ceiling(120))
            .with_sink(crate::env::NullSink);
        let mut rook = hero(None);

        rook.heal(500, false, &mut env).unwrap();
        assert_eq!(rook.hp(), 120);
    }

    #[test]
    fn negative_heal_can_defeat() {
        let team = Team::new();
        let (mut env, _) = env_with(&[]);
        let mut rook = hero(Some(team.clone()));
        team.enlist(&rook);

        let change = rook.heal(-150, false, &mut env).unwrap();
        assert_eq!(change.after, 0);
        assert!(change.defeated);
        assert!(!team.contains(rook.id()));
    }

    #[test]
    fn defeated_heroes_cannot_be_healed() {
        let (mut env, sink) = env_with(&[]);
        let mut rook = hero(None);
        rook.take_damage(100, false, false, &mut env).unwrap();

        let err = rook.heal(50, false, &mut env).unwrap_err();
        assert_eq!(err, HeroError::CannotHealDefeated { name: "Rook".into() });
        assert_eq!(rook.hp(), 0);
        assert!(!rook.is_alive());
        assert_eq!(sink.errors(), vec!["Rook has fallen and cannot be healed."]);
    }

    #[test]
    fn hit_from_records_attacker() {
        let (mut env, _) = env_with(&[0.99, 0.5]);
        let attacker = Hero::new("Wren", "", StatTable::new(80, 100, 40, 90, 0), &[], None);
        let mut rook = hero(None);
        let skill = SkillRef::new(attacker.id(), 1);

        let change = rook
            .take_hit_from(&attacker, Some(skill), 50, false, &mut env)
            .unwrap();

        assert_eq!(change.delta(), -52);
        assert_eq!(rook.last_hero_attacker(), Some(attacker.id()));
        assert_eq!(rook.last_skill_hit(), Some(skill));
    }

    #[test]
    fn hp_stays_in_bounds_over_random_sequences() {
        let config = BattleConfig::default();
        let ceiling = config.heal_ceiling;

        for seed in 0..64 {
            let mut driver = PcgRng::seeded(seed);
            let mut env = Env::deterministic(config.clone(), seed.wrapping_add(1_000));
            let team = Team::new();
            let base_hp = driver.uniform(1, 300) as i32;
            let crit = driver.uniform(0, 100) as i32;
            let mut rook = Hero::new(
                "Rook",
                "",
                StatTable::new(base_hp, 50, 40, 50, crit),
                &[],
                Some(team.clone()),
            );
            let attacker = Hero::new("Wren", "", StatTable::new(80, 70, 30, 60, 20), &[], None);
            assert!(team.enlist(&rook));

            for _ in 0..200 {
                let before = rook.hp();
                let was_alive = rook.is_alive();
                let amount = driver.uniform(0, 120) as i32 - 20;

                let (result, healed) = match driver.uniform(0, 5) {
                    0 => (rook.take_damage(amount, false, false, &mut env), false),
                    1 => (rook.heal(amount, false, &mut env), true),
                    2 => {
                        let percent = driver.uniform_f64(-0.2, 0.6);
                        (rook.take_percent_damage(percent, false, &mut env), false)
                    }
                    3 => (
                        rook.take_attack_rolled(amount.max(1), 60, false, &mut env),
                        false,
                    ),
                    4 => (rook.take_hit_from(&attacker, None, amount, false, &mut env), false),
                    _ => (rook.take_attack(amount, 60, false, true, &mut env), false),
                };

                let hp = rook.hp();
                let upper = if healed { ceiling } else { base_hp };
                match result {
                    Ok(change) => {
                        assert!(was_alive, "seed {seed}: dead hero accepted an HP change");
                        assert_eq!((change.before, change.after), (before, hp));
                        assert!((0..=upper).contains(&hp), "seed {seed}: hp {hp} outside 0..={upper}");
                        assert_eq!(change.defeated, hp < 1, "seed {seed}");
                    }
                    Err(_) => {
                        assert!(!was_alive, "seed {seed}: living hero rejected");
                        assert_eq!(hp, before);
                    }
                }
                assert_eq!(rook.is_alive(), hp >= 1, "seed {seed}: hp {hp}");
                assert_eq!(team.contains(rook.id()), rook.is_alive(), "seed {seed}");
            }
        }
    }
}
