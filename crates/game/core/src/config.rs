/// Balance constants and tunable parameters for a single battle.
///
/// All fields have defaults matching the shipped game balance; data files may
/// override any subset (missing fields fall back to the defaults).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Upper bound for HP after healing. Independent of base HP, so heroes
    /// can be overhealed up to this value.
    pub heal_ceiling: i32,

    /// Largest number of stages a single modification may apply.
    pub max_stage_step: i32,
    /// How many stages a stat may be lowered below its base value.
    pub stages_down: i32,
    /// How many stages a stat may be raised above its base value.
    pub stages_up: i32,
    /// One stage equals `base / stage_divisor`.
    pub stage_divisor: i32,

    /// Damage multiplier applied on critical hits.
    pub crit_multiplier: f64,
    /// Lower edge of the random damage variance.
    pub variance_min: f64,
    /// Upper edge of the random damage variance (exclusive).
    pub variance_max: f64,

    /// `staple = (numerator * power * attack) / (defense * denominator) + flat`
    pub damage_numerator: f64,
    pub damage_denominator: f64,
    pub damage_flat_bonus: f64,

    /// Defense values below this are raised to it before dividing.
    pub min_defense: i32,
}

impl BattleConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_HEAL_CEILING: i32 = 1000;
    pub const DEFAULT_MAX_STAGE_STEP: i32 = 3;
    pub const DEFAULT_STAGES_DOWN: i32 = 3;
    pub const DEFAULT_STAGES_UP: i32 = 6;
    pub const DEFAULT_STAGE_DIVISOR: i32 = 4;
    pub const DEFAULT_CRIT_MULTIPLIER: f64 = 1.5;
    pub const DEFAULT_VARIANCE_MIN: f64 = 0.9;
    pub const DEFAULT_VARIANCE_MAX: f64 = 1.1;
    pub const DEFAULT_DAMAGE_NUMERATOR: f64 = 30.0;
    pub const DEFAULT_DAMAGE_DENOMINATOR: f64 = 40.0;
    pub const DEFAULT_DAMAGE_FLAT_BONUS: f64 = 15.0;
    pub const DEFAULT_MIN_DEFENSE: i32 = 1;

    pub fn new() -> Self {
        Self {
            heal_ceiling: Self::DEFAULT_HEAL_CEILING,
            max_stage_step: Self::DEFAULT_MAX_STAGE_STEP,
            stages_down: Self::DEFAULT_STAGES_DOWN,
            stages_up: Self::DEFAULT_STAGES_UP,
            stage_divisor: Self::DEFAULT_STAGE_DIVISOR,
            crit_multiplier: Self::DEFAULT_CRIT_MULTIPLIER,
            variance_min: Self::DEFAULT_VARIANCE_MIN,
            variance_max: Self::DEFAULT_VARIANCE_MAX,
            damage_numerator: Self::DEFAULT_DAMAGE_NUMERATOR,
            damage_denominator: Self::DEFAULT_DAMAGE_DENOMINATOR,
            damage_flat_bonus: Self::DEFAULT_DAMAGE_FLAT_BONUS,
            min_defense: Self::DEFAULT_MIN_DEFENSE,
        }
    }

    pub fn with_heal_ceiling(mut self, heal_ceiling: i32) -> Self {
        self.heal_ceiling = heal_ceiling;
        self
    }

    /// Disables damage variance (every roll uses a multiplier of exactly 1.0).
    pub fn without_variance(mut self) -> Self {
        self.variance_min = 1.0;
        self.variance_max = 1.0;
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
