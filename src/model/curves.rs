//! Curve generation: estimated road speed and cylinder-head temperature
//! across the sweep, feeding the advance calculator point by point.
//!
//! The baseline speed is a positional ramp over the sweep length, not a
//! function of the RPM values themselves; the environmental and engine
//! factors then scale it multiplicatively. Each engine sub-factor is gated
//! on its own parameters and stays at 1.0 when they are absent.

use crate::params::{EngineParameters, MufflerMount};

use super::{advance, SimulationResult};

/// Baseline speed ramp endpoints (km/h), spread positionally over the sweep
const BASE_SPEED_MIN_KMH: f64 = 20.0;
const BASE_SPEED_MAX_KMH: f64 = 140.0;

/// Neutral carburetor bore (mm); the factor is bore relative to this
const NEUTRAL_CARB_BORE_MM: f64 = 30.0;
/// Neutral muffler belly diameter (mm)
const NEUTRAL_BELLY_MM: f64 = 70.0;

const CARB_FACTOR_MIN: f64 = 0.8;
const CARB_FACTOR_MAX: f64 = 1.2;
const FLOW_FACTOR_MIN: f64 = 0.9;
const FLOW_FACTOR_MAX: f64 = 1.15;
const BELLY_FACTOR_MIN: f64 = 0.9;
const BELLY_FACTOR_MAX: f64 = 1.1;
const HEAD_SCALE_MIN: f64 = 0.9;
const HEAD_SCALE_MAX: f64 = 1.15;

/// Produce the full result bundle for an already-validated sweep.
pub(super) fn run_sweep(rpm_sweep: &[f64], params: &EngineParameters) -> SimulationResult {
    let n = rpm_sweep.len();
    let scale = environmental_factor(params) * engine_factor(params);
    let head_scale = params
        .dome_volume_cc
        .map_or(1.0, |v| (20.0 / v).clamp(HEAD_SCALE_MIN, HEAD_SCALE_MAX));
    let ambient = params.ambient_temp_c.unwrap_or(0.0);

    let mut speed = Vec::with_capacity(n);
    let mut head_temp = Vec::with_capacity(n);
    let mut advance_values = Vec::with_capacity(n);

    for (i, &rpm) in rpm_sweep.iter().enumerate() {
        let s = baseline_speed(i, n) * scale;
        let t = (ambient + s / 2.0) * head_scale;
        speed.push(s);
        head_temp.push(t);
        advance_values.push(advance::advance_at(rpm, t, params));
    }

    SimulationResult {
        rpm: rpm_sweep.to_vec(),
        speed,
        head_temp,
        advance: advance_values,
    }
}

/// Positional baseline: linear ramp from 20 to 140 over the sweep length.
/// A single-point sweep collapses to the ramp's lower end.
fn baseline_speed(index: usize, len: usize) -> f64 {
    if len <= 1 {
        return BASE_SPEED_MIN_KMH;
    }
    let span = BASE_SPEED_MAX_KMH - BASE_SPEED_MIN_KMH;
    BASE_SPEED_MIN_KMH + span * index as f64 / (len - 1) as f64
}

/// `(1 - humidity/200) * (1 + load/200)`, each term neutral when its input
/// is absent. Values outside [0, 100] are passed through unclamped.
fn environmental_factor(params: &EngineParameters) -> f64 {
    let humidity_term = params.humidity_pct.map_or(1.0, |h| 1.0 - h / 200.0);
    let load_term = params.load_pct.map_or(1.0, |l| 1.0 + l / 200.0);
    humidity_term * load_term
}

/// Product of the independently gated tuning sub-factors.
fn engine_factor(params: &EngineParameters) -> f64 {
    let mut factor = 1.0;

    if let Some(bore) = params.carb_bore_mm {
        factor *= (bore / NEUTRAL_CARB_BORE_MM).clamp(CARB_FACTOR_MIN, CARB_FACTOR_MAX);
    }
    if let Some(ratio) = params.flow_ratio() {
        factor *= ratio.clamp(FLOW_FACTOR_MIN, FLOW_FACTOR_MAX);
    }
    if let Some(mount) = params.muffler_mount {
        factor *= match mount {
            MufflerMount::Low => 1.05,
            MufflerMount::High => 0.98,
        };
    }
    if let Some(belly) = params.muffler_belly_mm {
        factor *= (belly / NEUTRAL_BELLY_MM).clamp(BELLY_FACTOR_MIN, BELLY_FACTOR_MAX);
    }
    if let Some((high, low, needle)) = params.jetting() {
        factor *= 1.0 + (high - 180.0) * 0.001 + (low - 50.0) * 0.002 + (needle - 2.0) * 0.01;
    }

    factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_speed_endpoints() {
        assert_eq!(baseline_speed(0, 100), 20.0);
        assert_eq!(baseline_speed(99, 100), 140.0);
        assert_eq!(baseline_speed(0, 1), 20.0);
    }

    #[test]
    fn test_environmental_factor_neutral_when_absent() {
        let params = EngineParameters::default();
        assert_eq!(environmental_factor(&params), 1.0);

        let params = EngineParameters {
            humidity_pct: Some(50.0),
            load_pct: Some(75.0),
            ..Default::default()
        };
        assert!((environmental_factor(&params) - 0.75 * 1.375).abs() < 1e-12);
    }

    #[test]
    fn test_environmental_factor_not_clamped_out_of_range() {
        // Humidity past 100% keeps scaling the factor down; the model does
        // not re-clamp inputs.
        let params = EngineParameters {
            humidity_pct: Some(150.0),
            ..Default::default()
        };
        assert!((environmental_factor(&params) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_engine_factor_clamps_each_sub_factor() {
        let params = EngineParameters {
            carb_bore_mm: Some(60.0),
            intake_diameter_mm: Some(40.0),
            exhaust_diameter_mm: Some(25.0),
            muffler_belly_mm: Some(200.0),
            ..Default::default()
        };
        // 1.2 (carb clamp) * 1.15 (flow clamp) * 1.1 (belly clamp)
        assert!((engine_factor(&params) - 1.2 * 1.15 * 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_engine_factor_neutral_with_no_parameters() {
        assert_eq!(engine_factor(&EngineParameters::default()), 1.0);
    }
}
