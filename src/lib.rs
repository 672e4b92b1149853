//! Sparkmap - ignition advance estimation for two-stroke engine tuning
//!
//! This library estimates an optimal spark-ignition advance curve across an
//! RPM sweep for a two-stroke motorcycle engine, given environmental
//! conditions and carburetion/exhaust tuning parameters. The model is a
//! deterministic, closed-form correction model: it does not integrate
//! combustion equations or fit dynamometer data, it applies documented
//! multiplicative and additive corrections to a baseline curve.
//!
//! ## Module Structure
//!
//! - [`params`] - Engine and environment parameter types, all independently optional
//! - [`model`] - Simulation core: validation, result bundle, entry points
//!   - `curves` - Speed and head-temperature curve generation
//!   - `advance` - Per-RPM-point advance angle calculation
//!   - `recommend` - Aggregate diagnosis of a finished run
//!
//! The two entry points the presentation layer consumes are [`generate`]
//! and [`summarize`]; [`advance_at`] is exposed for single-point queries.

pub mod model;
pub mod params;

pub use model::advance::advance_at;
pub use model::recommend::summarize;
pub use model::{generate, CurveStats, SimulationError, SimulationResult, SweepSpec};
pub use params::{EngineParameters, MufflerMount};
