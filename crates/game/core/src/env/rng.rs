//! RNG oracle for battle randomness.
//!
//! Damage variance, crit rolls and random stat selection all draw from a
//! single [`RngOracle`] carried by the battle [`Env`](super::Env). The oracle
//! is injected so tests and replays can run deterministically.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Source of randomness for a battle.
///
/// Only [`next_u32`](RngOracle::next_u32) is required; every other method has
/// a default expressed in terms of [`next_f64`](RngOracle::next_f64) so a
/// scripted implementation controls every roll by overriding that one method.
pub trait RngOracle {
    /// Generate a random u32 value.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }

    /// Uniform value in `[min, max]` inclusive.
    fn uniform(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = f64::from(max - min) + 1.0;
        let offset = (self.next_f64() * span) as u32;
        min.saturating_add(offset).min(max)
    }

    /// Uniform value in `[min, max)`.
    fn uniform_f64(&mut self, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }
        min + (max - min) * self.next_f64()
    }

    /// Returns true with the given probability (`0.0..=1.0`).
    fn roll_bool(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 32-bit output from 64-bit state. Same seed,
/// same sequence, which makes it the generator of choice for replays.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator whose sequence is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            state: Self::pcg_step(seed.wrapping_add(Self::INCREMENT)),
        }
    }

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

/// Entropy-seeded generator backed by `rand`'s [`StdRng`].
///
/// This is the default generator of a battle [`Env`](super::Env).
#[derive(Clone, Debug)]
pub struct EntropyRng(StdRng);

impl EntropyRng {
    pub fn new() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngOracle for EntropyRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_f64(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}

/// Replays a fixed list of unit values (`[0, 1)`), then repeats `fallback`.
///
/// Useful for pinning crit rolls and damage variance in tests:
/// a damage roll with `0.5` yields a variance multiplier of exactly 1.0
/// under the default config.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    values: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedRng {
    /// Largest `f64` below 1.0.
    const LARGEST_UNIT: f64 = 1.0 - f64::EPSILON / 2.0;

    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            fallback: 0.5,
        }
    }

    /// Value returned once the script is exhausted.
    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }

    /// Appends a value to the end of the script.
    pub fn push(&mut self, value: f64) {
        self.values.push_back(value);
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_f64() * (f64::from(u32::MAX) + 1.0)) as u32
    }

    /// Scripted values are clamped into `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        let value = self.values.pop_front().unwrap_or(self.fallback);
        value.clamp(0.0, Self::LARGEST_UNIT)
    }
}
