//! Sparkmap command line runner.
//!
//! Reads a JSON scenario (sweep bounds plus engine parameters), runs one
//! simulation, and prints the resulting curves with a tuning
//! recommendation. This binary is the reference consumer of the library;
//! richer front ends are expected to call [`sparkmap::generate`] and
//! [`sparkmap::summarize`] directly.

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use sparkmap::{generate, summarize, CurveStats, EngineParameters, SweepSpec};

/// One scenario file: the sweep to run and the engine being tuned
#[derive(Debug, Deserialize)]
struct Scenario {
    sweep: SweepSpec,
    #[serde(default)]
    engine: EngineParameters,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: sparkmap <scenario.json>");
    };

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read scenario file '{}'", path))?;
    let scenario: Scenario =
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse '{}'", path))?;

    let sweep = scenario.sweep.to_sweep();
    let result = generate(&sweep, &scenario.engine).context("Simulation rejected the scenario")?;

    tracing::info!(
        points = result.len(),
        min_rpm = scenario.sweep.min_rpm,
        max_rpm = scenario.sweep.max_rpm,
        "simulation complete"
    );

    println!("{:>8}  {:>12}  {:>12}  {:>11}", "RPM", "Speed km/h", "Head °C", "Advance °");
    for i in 0..result.len() {
        println!(
            "{:>8.0}  {:>12.1}  {:>12.1}  {:>11.2}",
            result.rpm[i], result.speed[i], result.head_temp[i], result.advance[i]
        );
    }

    if let (Some(speed), Some(temp), Some(advance)) = (
        CurveStats::of(&result.speed),
        CurveStats::of(&result.head_temp),
        CurveStats::of(&result.advance),
    ) {
        println!();
        println!(
            "mean speed {:.1} km/h (max {:.1}), mean head temp {:.1} °C (max {:.1}), mean advance {:.2}°",
            speed.mean, speed.max, temp.mean, temp.max, advance.mean
        );
    }

    println!();
    println!("{}", summarize(&result));

    Ok(())
}
