//! Aggregate diagnosis of a finished run.
//!
//! Stateless: compares curve means against fixed thresholds and returns a
//! short free-text recommendation. No feedback into the calculation.

use super::{CurveStats, SimulationResult};

/// Mean head temperature above which cooling is flagged (°C)
const HOT_HEAD_MEAN_C: f64 = 140.0;
/// Mean estimated speed below which flow is flagged (km/h)
const SLOW_SPEED_MEAN_KMH: f64 = 80.0;
/// Mean advance above which a colder plug is suggested (degrees)
const HIGH_ADVANCE_MEAN_DEG: f64 = 20.0;

/// Summarize a run as tuning advice.
///
/// An empty run yields a fixed "no data" message rather than statistics
/// over nothing.
pub fn summarize(result: &SimulationResult) -> String {
    let (Some(temp), Some(speed), Some(advance)) = (
        CurveStats::of(&result.head_temp),
        CurveStats::of(&result.speed),
        CurveStats::of(&result.advance),
    ) else {
        return "No simulation data to evaluate.".to_string();
    };

    let mut notes = Vec::new();
    if temp.mean > HOT_HEAD_MEAN_C {
        notes.push(
            "Head temperature runs hot; consider a colder plug grade or improved cooling.",
        );
    }
    if speed.mean < SLOW_SPEED_MEAN_KMH {
        notes.push("Estimated speed is low; review intake/exhaust flow or the compression ratio.");
    }
    if advance.mean > HIGH_ADVANCE_MEAN_DEG {
        notes.push("Average advance is high; a colder plug guards against detonation.");
    }

    if notes.is_empty() {
        "The engine is configured well for these conditions.".to_string()
    } else {
        notes.join("\n")
    }
}
