//! Advance calculation for a single sweep point.
//!
//! A capped linear base ramp over RPM plus a sum of independent linear
//! corrections, each gated on parameter presence and/or a threshold. The
//! only hard guarantee on the output is the final clamp; intermediate sums
//! are unbounded.

use crate::params::{EngineParameters, MufflerMount};

/// Output clamp bounds (degrees before top dead center)
pub const MIN_ADVANCE_DEG: f64 = 5.0;
pub const MAX_ADVANCE_DEG: f64 = 25.0;

/// Base ramp: flat below the threshold, then linear up to the cap
const BASE_ADVANCE_DEG: f64 = 10.0;
const BASE_RAMP_START_RPM: f64 = 3000.0;
const BASE_RAMP_DEG_PER_RPM: f64 = 0.003;
const BASE_ADVANCE_CAP_DEG: f64 = 22.0;

/// RPM band in which a tuned muffler pays off
const MUFFLER_BAND_RPM: std::ops::RangeInclusive<f64> = 4000.0..=7000.0;

/// Recommended ignition advance at one RPM point, clamped to [5, 25].
///
/// `head_temp` is the derived cylinder-head temperature for this point, as
/// produced by the curve generator. Corrections whose parameters are absent
/// contribute nothing; a plug-grade code without digits likewise reads as
/// no correction rather than an error.
pub fn advance_at(rpm: f64, head_temp: f64, params: &EngineParameters) -> f64 {
    let base = if rpm < BASE_RAMP_START_RPM {
        BASE_ADVANCE_DEG
    } else {
        (BASE_ADVANCE_DEG + BASE_RAMP_DEG_PER_RPM * (rpm - BASE_RAMP_START_RPM))
            .min(BASE_ADVANCE_CAP_DEG)
    };

    let mut advance = base;

    // Thermal retard above 120 °C head temperature
    if head_temp > 120.0 {
        advance -= 0.01 * (head_temp - 120.0);
    }
    if let Some(track) = params.track_temp_c {
        if track > 30.0 {
            advance -= 0.005 * (track - 30.0);
        }
    }
    if let Some(load) = params.load_pct {
        if load > 50.0 {
            advance += 0.002 * (load - 50.0);
        }
    }

    if let Some(bore) = params.carb_bore_mm {
        advance += 0.5 * (bore - 30.0) / 10.0;
    }
    if let Some(ratio) = params.flow_ratio() {
        advance += if ratio > 1.2 {
            -0.3
        } else if ratio < 0.8 {
            0.3
        } else {
            0.0
        };
    }
    if let Some(dome) = params.dome_volume_cc {
        advance += 0.02 * (dome - 15.0);
    }
    if let Some(grade) = params.plug_grade_number() {
        advance += 0.1 * (grade as f64 - 8.0);
    }

    if let Some(mount) = params.muffler_mount {
        advance += match mount {
            MufflerMount::Low => 0.3,
            MufflerMount::High => -0.2,
        };
    }
    if let Some(belly) = params.muffler_belly_mm {
        advance += 0.02 * (belly - 70.0);
    }
    // The band bonus needs the full muffler description
    if params.muffler_mount.is_some() && params.muffler_belly_mm.is_some() {
        advance += if MUFFLER_BAND_RPM.contains(&rpm) {
            0.2
        } else {
            -0.1
        };
    }

    if let Some((high, low, needle)) = params.jetting() {
        advance += 0.02 * (high - 180.0) - 0.05 * (low - 50.0) + 0.1 * (needle - 2.0);
    }

    advance.clamp(MIN_ADVANCE_DEG, MAX_ADVANCE_DEG)
}
