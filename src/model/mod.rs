//! Simulation core: validation, the result bundle, and the `generate` entry
//! point.
//!
//! One run is a single pass with no feedback loop: parameters go through the
//! curve generator, which derives per-RPM speed and head-temperature values
//! and invokes the advance calculator once per sweep point. Everything is a
//! pure function over immutable inputs; a run holds no state and nothing is
//! cached across runs.

pub mod advance;
pub mod curves;
pub mod recommend;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::EngineParameters;

/// Errors raised before any output is constructed.
///
/// The model is closed-form arithmetic, so the taxonomy is deliberately
/// small: a run either passes eager validation and returns a complete
/// result, or fails naming the offending field.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SimulationError {
    /// A supplied parameter has a value the model cannot use
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter {
        field: &'static str,
        reason: String,
    },
}

/// Output bundle of one simulation run.
///
/// All four sequences share the sweep's length and are read-only after the
/// run that produced them.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SimulationResult {
    /// The input RPM sweep, unchanged
    pub rpm: Vec<f64>,
    /// Estimated road speed per RPM point (km/h)
    pub speed: Vec<f64>,
    /// Estimated cylinder-head temperature per RPM point (°C)
    pub head_temp: Vec<f64>,
    /// Recommended ignition advance per RPM point (degrees, within [5, 25])
    pub advance: Vec<f64>,
}

impl SimulationResult {
    /// Number of sweep points in the run
    pub fn len(&self) -> usize {
        self.rpm.len()
    }

    /// Whether the run was produced from an empty sweep
    pub fn is_empty(&self) -> bool {
        self.rpm.is_empty()
    }
}

/// Linearly spaced RPM sweep, mirroring the tuner-facing min/max/points
/// inputs of the original sidebar.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct SweepSpec {
    pub min_rpm: f64,
    pub max_rpm: f64,
    pub points: usize,
}

impl SweepSpec {
    /// Materialize the sweep. A single point collapses to `min_rpm`.
    pub fn to_sweep(&self) -> Vec<f64> {
        match self.points {
            0 => Vec::new(),
            1 => vec![self.min_rpm],
            n => (0..n)
                .map(|i| {
                    self.min_rpm + (self.max_rpm - self.min_rpm) * i as f64 / (n - 1) as f64
                })
                .collect(),
        }
    }
}

/// Mean and maximum of one output curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveStats {
    pub mean: f64,
    pub max: f64,
}

impl CurveStats {
    /// Aggregate a curve, `None` when it is empty
    pub fn of(values: &[f64]) -> Option<CurveStats> {
        if values.is_empty() {
            return None;
        }
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(CurveStats { mean, max })
    }
}

/// Run one simulation over `rpm_sweep` with the given parameters.
///
/// Validates eagerly (see [`SimulationError`]) and then produces the three
/// output curves in a single pass. An empty sweep is a defined edge case
/// and yields an empty result, not an error.
pub fn generate(
    rpm_sweep: &[f64],
    params: &EngineParameters,
) -> Result<SimulationResult, SimulationError> {
    validate(rpm_sweep, params)?;

    tracing::debug!(points = rpm_sweep.len(), "running ignition advance sweep");
    Ok(curves::run_sweep(rpm_sweep, params))
}

/// Eager validation: every supplied geometry value must be finite and
/// strictly positive, and the sweep strictly increasing. Humidity and load
/// are intentionally not range-checked; out-of-range values flow through
/// the environmental factor unclamped.
fn validate(rpm_sweep: &[f64], params: &EngineParameters) -> Result<(), SimulationError> {
    let geometry = [
        ("carb_bore_mm", params.carb_bore_mm),
        ("intake_diameter_mm", params.intake_diameter_mm),
        ("exhaust_diameter_mm", params.exhaust_diameter_mm),
        ("dome_volume_cc", params.dome_volume_cc),
        ("muffler_belly_mm", params.muffler_belly_mm),
    ];
    for (field, value) in geometry {
        if let Some(v) = value {
            if !v.is_finite() || v <= 0.0 {
                return Err(SimulationError::InvalidParameter {
                    field,
                    reason: format!("must be finite and positive, got {}", v),
                });
            }
        }
    }

    if rpm_sweep.iter().any(|r| !r.is_finite()) {
        return Err(SimulationError::InvalidParameter {
            field: "rpm_sweep",
            reason: "sweep contains a non-finite value".to_string(),
        });
    }
    if let Some(pair) = rpm_sweep.windows(2).find(|w| w[1] <= w[0]) {
        return Err(SimulationError::InvalidParameter {
            field: "rpm_sweep",
            reason: format!(
                "sweep must be strictly increasing, got {} after {}",
                pair[1], pair[0]
            ),
        });
    }

    Ok(())
}
