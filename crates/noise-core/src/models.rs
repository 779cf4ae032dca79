//! Core data models for the noise engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an enum from a string (CLI / config input).
#[derive(Debug, Clone, thiserror::Error)]
#[error("unrecognized {kind}: '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Dashboard aircraft category, derived from the ICAO type designator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AircraftCategory {
    Helicopter,
    Jet,
    FixedWing,
    #[default]
    Unknown,
}

impl FromStr for AircraftCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "helicopter" => Ok(Self::Helicopter),
            "jet" => Ok(Self::Jet),
            "fixed_wing" | "fixed-wing" => Ok(Self::FixedWing),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ParseEnumError {
                kind: "aircraft category",
                value: s.to_string(),
            }),
        }
    }
}

/// Coarse loudness band for a resolved profile, derived from the
/// reference takeoff level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseClass {
    Quiet,
    Moderate,
    Loud,
    VeryLoud,
}

/// Provenance of the dB values in a resolved profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// Field measurement campaign data
    Measured,
    /// Certification (EPNL-style) catalog data
    Certified,
    /// No direct record; category average applied
    CategoryEstimate,
    /// Nothing known about the type at all
    Unverified,
}

/// Confidence tag displayed alongside any dB number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Confidence is a deterministic function of the data source.
    pub fn from_source(source: DataSource) -> Self {
        match source {
            DataSource::Measured | DataSource::Certified => Confidence::High,
            DataSource::CategoryEstimate => Confidence::Medium,
            DataSource::Unverified => Confidence::Low,
        }
    }
}

/// Ground surface type under the observer, for lateral attenuation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroundSurface {
    /// Pavement, water
    #[default]
    Hard,
    /// Suburban mix of pavement and lawn
    Mixed,
    /// Grass, farmland
    Soft,
    /// Forest, deep snow
    Absorptive,
}

impl FromStr for GroundSurface {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hard" => Ok(Self::Hard),
            "mixed" => Ok(Self::Mixed),
            "soft" => Ok(Self::Soft),
            "absorptive" => Ok(Self::Absorptive),
            _ => Err(ParseEnumError {
                kind: "ground surface",
                value: s.to_string(),
            }),
        }
    }
}

/// Direction of an operation relative to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightDirection {
    Arrival,
    Departure,
}

impl FromStr for FlightDirection {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "arrival" => Ok(Self::Arrival),
            "departure" => Ok(Self::Departure),
            _ => Err(ParseEnumError {
                kind: "flight direction",
                value: s.to_string(),
            }),
        }
    }
}

/// Named phase along a flight path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightPhase {
    Takeoff,
    Climb,
    Cruise,
    Descent,
    Approach,
}

impl fmt::Display for FlightPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FlightPhase::Takeoff => "takeoff",
            FlightPhase::Climb => "climb",
            FlightPhase::Cruise => "cruise",
            FlightPhase::Descent => "descent",
            FlightPhase::Approach => "approach",
        };
        write!(f, "{label}")
    }
}

/// Resolved noise characterization for one aircraft type.
///
/// Built per lookup from the immutable catalog tables; never mutated and
/// never persisted. The `data_source`/`confidence` pair is mandatory for
/// display alongside any dB number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseProfile {
    pub type_code: String,
    pub category: AircraftCategory,
    pub noise_class: NoiseClass,
    /// LAmax at the 1000 ft certification reference
    pub takeoff_db: f64,
    pub approach_db: f64,
    pub lateral_epnl: Option<f64>,
    pub flyover_epnl: Option<f64>,
    pub approach_epnl: Option<f64>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub data_source: DataSource,
    pub confidence: Confidence,
}

impl NoiseProfile {
    /// Base source level for the given direction.
    pub fn base_db(&self, direction: FlightDirection) -> f64 {
        match direction {
            FlightDirection::Arrival => self.approach_db,
            FlightDirection::Departure => self.takeoff_db,
        }
    }
}

/// Interpolated position along a flight path. Ephemeral; recomputed per query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AltitudePosition {
    pub altitude_ft: f64,
    pub phase: FlightPhase,
}

/// Wind snapshot supplied by the surrounding dashboard (METAR-derived).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindConditions {
    /// Direction the wind blows FROM, degrees 0-359
    pub direction_deg: f64,
    pub speed_kt: f64,
}

impl WindConditions {
    /// Calm/default wind: no signal, zero adjustment.
    pub fn calm() -> Self {
        Self {
            direction_deg: 0.0,
            speed_kt: 0.0,
        }
    }
}

/// Strength tier of a temperature inversion layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InversionStrength {
    #[default]
    None,
    Weak,
    Moderate,
    Strong,
}

impl FromStr for InversionStrength {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "weak" => Ok(Self::Weak),
            "moderate" => Ok(Self::Moderate),
            "strong" => Ok(Self::Strong),
            _ => Err(ParseEnumError {
                kind: "inversion strength",
                value: s.to_string(),
            }),
        }
    }
}

/// Vertical temperature snapshot supplied by the surrounding dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureProfile {
    pub surface_temp_f: f64,
    pub inversion_present: bool,
    #[serde(default)]
    pub inversion_strength: InversionStrength,
    #[serde(default)]
    pub inversion_base_ft: Option<f64>,
    #[serde(default)]
    pub inversion_top_ft: Option<f64>,
}

impl TemperatureProfile {
    /// Profile with no inversion signal.
    pub fn neutral(surface_temp_f: f64) -> Self {
        Self {
            surface_temp_f,
            inversion_present: false,
            inversion_strength: InversionStrength::None,
            inversion_base_ft: None,
            inversion_top_ft: None,
        }
    }
}

/// Severity band for ambient propagation conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionsBand {
    Green,
    Yellow,
    Red,
}

/// Banded characterization of ambient sound propagation.
///
/// Independent of any single flight; the presentation layer overlays it as a
/// separate indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropagationConditions {
    pub band: ConditionsBand,
    pub description: String,
    /// Positive downwind, negative upwind, zero when calm
    pub wind_adjustment_db: f64,
    /// Always >= 0; zero when no inversion present
    pub inversion_adjustment_db: f64,
}

impl PropagationConditions {
    /// Combined dB delta the two effects contribute.
    pub fn total_adjustment_db(&self) -> f64 {
        self.wind_adjustment_db + self.inversion_adjustment_db
    }
}

/// Ground-level noise estimate at a specific point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseEstimate {
    pub db: f64,
    pub source: DataSource,
    pub confidence: Confidence,
    #[serde(default)]
    pub warning: Option<String>,
    #[serde(default)]
    pub slant_distance_ft: Option<f64>,
    #[serde(default)]
    pub horizontal_distance_ft: Option<f64>,
    #[serde(default)]
    pub geometric_attenuation_db: Option<f64>,
    #[serde(default)]
    pub atmospheric_attenuation_db: Option<f64>,
    #[serde(default)]
    pub lateral_attenuation_db: Option<f64>,
}

/// Minimal flight record the aggregation layer consumes.
///
/// Flight data is fetched by the surrounding dashboard; the engine never
/// fetches or caches it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightOp {
    pub type_code: String,
    pub direction: FlightDirection,
    /// Live altitude when available; otherwise the phase model supplies one
    #[serde(default)]
    pub altitude_ft: Option<f64>,
}

/// Single position report from a flight track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPosition {
    #[serde(default)]
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude_ft: f64,
    #[serde(default)]
    pub heading_deg: Option<f64>,
}

/// A ground location noise estimates are computed for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observer {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_tracks_source() {
        assert_eq!(Confidence::from_source(DataSource::Measured), Confidence::High);
        assert_eq!(Confidence::from_source(DataSource::Certified), Confidence::High);
        assert_eq!(
            Confidence::from_source(DataSource::CategoryEstimate),
            Confidence::Medium
        );
        assert_eq!(Confidence::from_source(DataSource::Unverified), Confidence::Low);
    }

    #[test]
    fn direction_parses_case_insensitive() {
        assert_eq!("Arrival".parse::<FlightDirection>().unwrap(), FlightDirection::Arrival);
        assert_eq!(
            "departure".parse::<FlightDirection>().unwrap(),
            FlightDirection::Departure
        );
        assert!("sideways".parse::<FlightDirection>().is_err());
    }

    #[test]
    fn enums_serialize_lowercase() {
        let json = serde_json::to_string(&AircraftCategory::FixedWing).unwrap();
        assert_eq!(json, "\"fixed_wing\"");
        let json = serde_json::to_string(&ConditionsBand::Red).unwrap();
        assert_eq!(json, "\"red\"");
        let json = serde_json::to_string(&DataSource::CategoryEstimate).unwrap();
        assert_eq!(json, "\"category_estimate\"");
    }
}
