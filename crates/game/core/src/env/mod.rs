//! Collaborators a battle needs from its host.
//!
//! The [`Env`] aggregate bundles the random source, the text sink and the
//! balance config so hero operations can reach everything they need without
//! hard coupling to concrete implementations.
mod rng;
mod sink;

pub use rng::{EntropyRng, PcgRng, RngOracle, ScriptedRng};
pub use sink::{NullSink, RecordingSink, SinkLine, TextSink, TracingSink};

use crate::config::BattleConfig;

/// Per-battle environment passed to every state-changing hero operation.
pub struct Env {
    rng: Box<dyn RngOracle>,
    sink: Box<dyn TextSink>,
    config: BattleConfig,
}

impl Env {
    /// Entropy-seeded randomness, `tracing` output.
    pub fn new(config: BattleConfig) -> Self {
        Self {
            rng: Box::new(EntropyRng::new()),
            sink: Box::new(TracingSink),
            config,
        }
    }

    /// Seeded PCG randomness and silent output; handy for simulations.
    pub fn deterministic(config: BattleConfig, seed: u64) -> Self {
        Self::new(config)
            .with_rng(PcgRng::seeded(seed))
            .with_sink(NullSink)
    }

    pub fn with_rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn with_sink(mut self, sink: impl TextSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn rng(&mut self) -> &mut dyn RngOracle {
        self.rng.as_mut()
    }

    /// Borrows the config and the random source at the same time.
    pub fn split(&mut self) -> (&BattleConfig, &mut dyn RngOracle) {
        (&self.config, self.rng.as_mut())
    }

    pub fn emit(&mut self, line: &str) {
        self.sink.emit(line);
    }

    pub fn emit_error(&mut self, line: &str) {
        self.sink.emit_error(line);
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new(BattleConfig::default())
    }
}

impl core::fmt::Debug for Env {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Env")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
