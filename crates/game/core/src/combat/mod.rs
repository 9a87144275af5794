//! Combat resolution.
//!
//! Pure functions for resolving hits between heroes. State changes (HP,
//! death) live on [`Hero`](crate::state::Hero); these functions only compute
//! numbers.
//!
//! # Core Functions
//!
//! - `calculate_damage`: attack vs defense with crit and variance
//! - `calculate_damage_with_variance`: same, with a caller-chosen variance
//! - `effective_defense`: crit defense cap and zero-defense floor
//! - `roll_crit`: CRIT_CHANCE percent roll

pub mod crit;
pub mod damage;

pub use crit::{crit_probability, roll_crit};
pub use damage::{
    calculate_damage, calculate_damage_between, calculate_damage_with_variance, effective_defense,
};
