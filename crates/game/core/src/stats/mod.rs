//! Stat system.
//!
//! Heroes carry two [`StatTable`]s: the immutable base table and the current
//! battle view. Stage modification moves non-HP stats of the current view in
//! discrete steps bounded relative to the base table.

pub mod stages;
pub mod table;

pub use stages::{StageBounds, StageIntensity, clamp_stage_step};
pub use table::{StatKind, StatTable, StatTableError, StatTarget};
