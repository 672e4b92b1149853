//! Engine and environment parameter types for a simulation run.
//!
//! Every field is independently optional: an absent field suppresses exactly
//! the correction terms that depend on it. A value of zero is a real value,
//! never shorthand for "not set", which is why presence is modeled with
//! `Option` rather than sentinel numbers.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use strum::{AsRefStr, EnumString};

/// Regex for the decimal digits embedded in a spark-plug heat-grade code
static GRADE_DIGITS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d").expect("Failed to compile regex"));

/// Muffler mounting position on the frame.
///
/// Two-stroke expansion chambers are mounted either low along the frame or
/// swept up high. Period tuning sheets name the positions in Spanish, so
/// both spellings parse, case-insensitively.
#[derive(AsRefStr, Clone, Copy, Debug, EnumString, Eq, PartialEq, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
#[serde(try_from = "String", into = "String")]
pub enum MufflerMount {
    /// Low-mount ("abajo") expansion chamber
    #[strum(serialize = "abajo", serialize = "low")]
    Low,
    /// High-mount ("arriba") expansion chamber
    #[strum(serialize = "arriba", serialize = "high")]
    High,
}

impl TryFrom<String> for MufflerMount {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MufflerMount> for String {
    fn from(mount: MufflerMount) -> Self {
        mount.as_ref().to_string()
    }
}

/// Immutable inputs to one simulation run.
///
/// Environmental conditions, intake/exhaust geometry, combustion-chamber
/// volume, ignition, and jetting. Serialized as JSON for scenario files;
/// omitted keys deserialize as absent.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct EngineParameters {
    /// Ambient air temperature (°C)
    pub ambient_temp_c: Option<f64>,
    /// Track-surface temperature (°C)
    pub track_temp_c: Option<f64>,
    /// Relative humidity (%), nominally 0-100
    pub humidity_pct: Option<f64>,
    /// Engine load (%), nominally 0-100
    pub load_pct: Option<f64>,
    /// Carburetor bore diameter (mm)
    pub carb_bore_mm: Option<f64>,
    /// Intake port diameter (mm)
    pub intake_diameter_mm: Option<f64>,
    /// Exhaust port diameter (mm)
    pub exhaust_diameter_mm: Option<f64>,
    /// Combustion-chamber dome volume (cc), inversely related to compression
    pub dome_volume_cc: Option<f64>,
    /// Spark-plug heat-grade code, e.g. "NGK8"; only its digits matter
    pub plug_grade: Option<String>,
    /// Muffler mounting position
    pub muffler_mount: Option<MufflerMount>,
    /// Muffler belly diameter (mm)
    pub muffler_belly_mm: Option<f64>,
    /// High-speed jet size
    pub high_jet: Option<f64>,
    /// Low-speed/idle jet size
    pub low_jet: Option<f64>,
    /// Air-mixture needle position (turns)
    pub air_needle_pos: Option<f64>,
}

impl EngineParameters {
    /// Intake-to-exhaust diameter ratio, when both diameters are supplied.
    pub fn flow_ratio(&self) -> Option<f64> {
        Some(self.intake_diameter_mm? / self.exhaust_diameter_mm?)
    }

    /// The complete jetting triple (high jet, low jet, needle position).
    ///
    /// Jetting corrections only apply when the whole set is known, so a
    /// partial set reads as absent.
    pub fn jetting(&self) -> Option<(f64, f64, f64)> {
        Some((self.high_jet?, self.low_jet?, self.air_needle_pos?))
    }

    /// Numeric heat grade extracted from the plug code.
    ///
    /// Keeps only decimal digits ("ngk-8x" -> 8) and parses them as an
    /// integer. A code with no digits, or digits too long to parse, reads
    /// as absent rather than an error.
    pub fn plug_grade_number(&self) -> Option<i64> {
        let code = self.plug_grade.as_deref()?;
        let digits: String = GRADE_DIGITS_REGEX
            .find_iter(code)
            .map(|m| m.as_str())
            .collect();
        if digits.is_empty() {
            return None;
        }
        digits.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_muffler_mount_parses_case_insensitive() {
        assert_eq!("Abajo".parse::<MufflerMount>(), Ok(MufflerMount::Low));
        assert_eq!("ABAJO".parse::<MufflerMount>(), Ok(MufflerMount::Low));
        assert_eq!("low".parse::<MufflerMount>(), Ok(MufflerMount::Low));
        assert_eq!("Arriba".parse::<MufflerMount>(), Ok(MufflerMount::High));
        assert_eq!("HIGH".parse::<MufflerMount>(), Ok(MufflerMount::High));
        assert!("sideways".parse::<MufflerMount>().is_err());
    }

    #[test]
    fn test_plug_grade_digit_extraction() {
        let mut params = EngineParameters::default();
        for code in ["NGK8", "8", "ngk-8x"] {
            params.plug_grade = Some(code.to_string());
            assert_eq!(params.plug_grade_number(), Some(8), "code {:?}", code);
        }

        params.plug_grade = Some("B9ES".to_string());
        assert_eq!(params.plug_grade_number(), Some(9));

        params.plug_grade = Some("".to_string());
        assert_eq!(params.plug_grade_number(), None);

        params.plug_grade = Some("NGK".to_string());
        assert_eq!(params.plug_grade_number(), None);

        params.plug_grade = None;
        assert_eq!(params.plug_grade_number(), None);
    }

    #[test]
    fn test_jetting_requires_complete_set() {
        let params = EngineParameters {
            high_jet: Some(180.0),
            low_jet: Some(50.0),
            ..Default::default()
        };
        assert_eq!(params.jetting(), None);

        let params = EngineParameters {
            air_needle_pos: Some(2.0),
            ..params
        };
        assert_eq!(params.jetting(), Some((180.0, 50.0, 2.0)));
    }

    #[test]
    fn test_omitted_json_keys_deserialize_as_absent() {
        let params: EngineParameters =
            serde_json::from_str(r#"{"carb_bore_mm": 32.0, "muffler_mount": "Abajo"}"#).unwrap();
        assert_eq!(params.carb_bore_mm, Some(32.0));
        assert_eq!(params.muffler_mount, Some(MufflerMount::Low));
        assert_eq!(params.humidity_pct, None);
        assert_eq!(params.plug_grade, None);
    }
}
