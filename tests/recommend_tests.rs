//! Tests for the recommendation synthesizer over real simulation output

use sparkmap::{generate, summarize, EngineParameters, MufflerMount, SweepSpec};

fn sweep() -> Vec<f64> {
    SweepSpec {
        min_rpm: 2000.0,
        max_rpm: 9000.0,
        points: 50,
    }
    .to_sweep()
}

#[test]
fn test_nominal_setup_reads_as_well_configured() {
    let params = EngineParameters {
        ambient_temp_c: Some(25.0),
        track_temp_c: Some(30.0),
        humidity_pct: Some(50.0),
        load_pct: Some(75.0),
        carb_bore_mm: Some(30.0),
        intake_diameter_mm: Some(30.0),
        exhaust_diameter_mm: Some(30.0),
        dome_volume_cc: Some(15.0),
        plug_grade: Some("NGK8".to_string()),
        muffler_mount: Some(MufflerMount::Low),
        muffler_belly_mm: Some(70.0),
        high_jet: Some(180.0),
        low_jet: Some(50.0),
        air_needle_pos: Some(2.0),
    };
    let result = generate(&sweep(), &params).unwrap();
    assert_eq!(
        summarize(&result),
        "The engine is configured well for these conditions."
    );
}

#[test]
fn test_desert_heat_flags_cooling() {
    // Extreme ambient pushes the derived head temperature well past the
    // 140 °C mean threshold
    let params = EngineParameters {
        ambient_temp_c: Some(200.0),
        ..Default::default()
    };
    let result = generate(&sweep(), &params).unwrap();
    assert!(summarize(&result).contains("colder plug grade"));
}

#[test]
fn test_choked_setup_flags_flow() {
    // Heavy humidity with no load drags the speed curve down
    let params = EngineParameters {
        ambient_temp_c: Some(25.0),
        humidity_pct: Some(90.0),
        ..Default::default()
    };
    let result = generate(&sweep(), &params).unwrap();
    assert!(summarize(&result).contains("intake/exhaust flow"));
}

#[test]
fn test_empty_run_summary() {
    let result = generate(&[], &EngineParameters::default()).unwrap();
    assert_eq!(summarize(&result), "No simulation data to evaluate.");
}
