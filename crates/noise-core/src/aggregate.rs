//! Per-flight and fleet-level noise aggregation.
//!
//! Composes profile resolution, the phase model, and the attenuation models
//! into the point estimates, altitude ladders, and summary rollups the
//! dashboard renders. Every function here is a pure map over caller-supplied
//! flight data.

use serde::{Deserialize, Serialize};

use crate::attenuation::{self, db_at_altitude};
use crate::models::{
    AircraftCategory, DataSource, FlightDirection, FlightOp, GroundSurface, NoiseEstimate,
    Observer, TrackPosition,
};
use crate::phase::position_at;
use crate::resolver::resolve;

/// Reference altitudes for the summary altitude ladder.
pub const REFERENCE_ALTITUDES_FT: [f64; 4] = [500.0, 1000.0, 2000.0, 3000.0];

/// Jets at or above this estimated reference level count as loud.
pub const LOUD_JET_THRESHOLD_DB: f64 = 85.0;

/// Interval between consecutive track position reports.
const TRACK_SAMPLE_INTERVAL_S: u32 = 5;

fn fallback_warning(profile: &crate::models::NoiseProfile) -> Option<String> {
    match profile.data_source {
        DataSource::Measured | DataSource::Certified => None,
        _ => Some(format!(
            "No measured or certified data for {}; using {} estimate",
            profile.type_code,
            match profile.data_source {
                DataSource::CategoryEstimate => "category",
                _ => "unverified default",
            }
        )),
    }
}

/// Point-in-time estimate for a flight at a fractional path position.
///
/// Base level follows direction (approach profile for arrivals, takeoff for
/// departures); altitude comes from the phase model unless the flight
/// carries a live altitude.
pub fn estimate_for_flight(flight: &FlightOp, t: f64) -> NoiseEstimate {
    let profile = resolve(&flight.type_code);
    let base_db = profile.base_db(flight.direction);
    let altitude_ft = flight
        .altitude_ft
        .unwrap_or_else(|| position_at(t, flight.direction).altitude_ft);

    NoiseEstimate {
        db: db_at_altitude(base_db, altitude_ft),
        source: profile.data_source,
        confidence: profile.confidence,
        warning: fallback_warning(&profile),
        slant_distance_ft: None,
        horizontal_distance_ft: None,
        geometric_attenuation_db: None,
        atmospheric_attenuation_db: None,
        lateral_attenuation_db: None,
    }
}

/// Estimate for a type directly overhead at a known altitude.
pub fn estimate_at_altitude(
    type_code: &str,
    direction: FlightDirection,
    altitude_ft: f64,
) -> NoiseEstimate {
    let profile = resolve(type_code);
    NoiseEstimate {
        db: db_at_altitude(profile.base_db(direction), altitude_ft),
        source: profile.data_source,
        confidence: profile.confidence,
        warning: fallback_warning(&profile),
        slant_distance_ft: None,
        horizontal_distance_ft: None,
        geometric_attenuation_db: None,
        atmospheric_attenuation_db: None,
        lateral_attenuation_db: None,
    }
}

/// One rung of the summary altitude ladder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AltitudeLevel {
    pub altitude_ft: f64,
    pub db: f64,
}

/// Evaluate a base level at the standard reference altitudes.
pub fn altitude_profile(base_db: f64) -> Vec<AltitudeLevel> {
    REFERENCE_ALTITUDES_FT
        .iter()
        .map(|&altitude_ft| AltitudeLevel {
            altitude_ft,
            db: db_at_altitude(base_db, altitude_ft),
        })
        .collect()
}

/// Summary-card counts over a flight collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoiseIndex {
    pub helicopters: usize,
    pub loud_jets: usize,
    pub total: usize,
}

/// Count helicopters and loud jets in a flight collection.
///
/// A jet counts as loud when its direction-appropriate reference level meets
/// the fixed threshold. Resolution and thresholding only; no further model.
pub fn noise_index(flights: &[FlightOp]) -> NoiseIndex {
    let mut index = NoiseIndex::default();
    for flight in flights {
        let profile = resolve(&flight.type_code);
        match profile.category {
            AircraftCategory::Helicopter => index.helicopters += 1,
            AircraftCategory::Jet => {
                if profile.base_db(flight.direction) >= LOUD_JET_THRESHOLD_DB {
                    index.loud_jets += 1;
                }
            }
            _ => {}
        }
    }
    index.total = index.helicopters + index.loud_jets;
    index
}

/// Noise impact of one flight track at one observer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObserverImpact {
    pub observer_id: String,
    pub observer_name: String,
    pub max_db: f64,
    pub closest_approach_ft: f64,
    pub seconds_above_65db: u32,
    pub seconds_above_75db: u32,
}

/// Track-wide noise impact across a set of observers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightImpact {
    pub type_code: String,
    pub direction: FlightDirection,
    pub source: DataSource,
    pub max_db: f64,
    pub avg_db: f64,
    pub exposure_seconds: u32,
    pub track_count: usize,
    pub observer_impacts: Vec<ObserverImpact>,
}

/// Evaluate a full flight track against every observer location.
///
/// Per observer: loudest moment, closest acoustic approach, and time spent
/// above the 65/75 dB annoyance thresholds. Track-wide max/avg use the first
/// observer as the primary reference point.
pub fn flight_impact(
    type_code: &str,
    direction: FlightDirection,
    track: &[TrackPosition],
    observers: &[Observer],
    ground: GroundSurface,
) -> FlightImpact {
    let profile = resolve(type_code);
    let source_db = profile.base_db(direction);

    let mut observer_impacts = Vec::with_capacity(observers.len());
    let mut primary_values: Vec<f64> = Vec::new();

    for (index, observer) in observers.iter().enumerate() {
        let mut max_db: f64 = 0.0;
        let mut closest_ft = f64::INFINITY;
        let mut seconds_above_65 = 0;
        let mut seconds_above_75 = 0;

        for position in track {
            let estimate = attenuation::ground_noise(
                source_db,
                position.altitude_ft,
                observer.lat,
                observer.lon,
                position.latitude,
                position.longitude,
                position.heading_deg,
                profile.category,
                ground,
            );

            max_db = max_db.max(estimate.db);
            if let Some(slant) = estimate.slant_distance_ft {
                closest_ft = closest_ft.min(slant);
            }
            if estimate.db >= 65.0 {
                seconds_above_65 += TRACK_SAMPLE_INTERVAL_S;
            }
            if estimate.db >= 75.0 {
                seconds_above_75 += TRACK_SAMPLE_INTERVAL_S;
            }
            if index == 0 {
                primary_values.push(estimate.db);
            }
        }

        observer_impacts.push(ObserverImpact {
            observer_id: observer.id.clone(),
            observer_name: observer.name.clone(),
            max_db,
            closest_approach_ft: if closest_ft.is_finite() {
                closest_ft.round()
            } else {
                0.0
            },
            seconds_above_65db: seconds_above_65,
            seconds_above_75db: seconds_above_75,
        });
    }

    let max_db = primary_values.iter().copied().fold(0.0, f64::max);
    let avg_db = if primary_values.is_empty() {
        0.0
    } else {
        primary_values.iter().sum::<f64>() / primary_values.len() as f64
    };

    FlightImpact {
        type_code: profile.type_code.clone(),
        direction,
        source: profile.data_source,
        max_db: (max_db * 10.0).round() / 10.0,
        avg_db: (avg_db * 10.0).round() / 10.0,
        exposure_seconds: track.len() as u32 * TRACK_SAMPLE_INTERVAL_S,
        track_count: track.len(),
        observer_impacts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Confidence;

    fn flight(type_code: &str, direction: FlightDirection) -> FlightOp {
        FlightOp {
            type_code: type_code.to_string(),
            direction,
            altitude_ft: None,
        }
    }

    #[test]
    fn departure_estimate_uses_takeoff_base() {
        // At t=0 a departure is on the runway: altitude 0 -> base + 20
        let estimate = estimate_for_flight(&flight("GLF5", FlightDirection::Departure), 0.0);
        assert_eq!(estimate.db, 110.0);
        assert_eq!(estimate.source, DataSource::Certified);
    }

    #[test]
    fn arrival_estimate_uses_approach_base() {
        // At t=1 an arrival is on the runway: approach base 86 + 20
        let estimate = estimate_for_flight(&flight("GLF5", FlightDirection::Arrival), 1.0);
        assert_eq!(estimate.db, 106.0);
    }

    #[test]
    fn live_altitude_overrides_phase_model() {
        let mut op = flight("GLF5", FlightDirection::Departure);
        op.altitude_ft = Some(1000.0);
        let estimate = estimate_for_flight(&op, 0.0);
        assert_eq!(estimate.db, 90.0);
    }

    #[test]
    fn estimate_carries_fallback_warning() {
        let estimate = estimate_at_altitude("ZZZZ", FlightDirection::Arrival, 1000.0);
        assert_eq!(estimate.source, DataSource::Unverified);
        assert_eq!(estimate.confidence, Confidence::Low);
        assert!(estimate.warning.is_some());

        let estimate = estimate_at_altitude("S76", FlightDirection::Arrival, 1000.0);
        assert!(estimate.warning.is_none());
    }

    #[test]
    fn altitude_profile_covers_reference_ladder() {
        let ladder = altitude_profile(85.0);
        assert_eq!(ladder.len(), 4);
        assert!((ladder[0].db - 91.0).abs() <= 0.1); // 500 ft
        assert_eq!(ladder[1].db, 85.0); // reference fixed point
        assert!(ladder[2].db < 85.0);
        assert!(ladder[3].db < ladder[2].db);
    }

    #[test]
    fn noise_index_counts_helicopters_and_loud_jets() {
        let flights = vec![
            flight("S76", FlightDirection::Arrival),   // helicopter
            flight("R44", FlightDirection::Departure), // helicopter
            flight("GLF5", FlightDirection::Departure), // jet, 90 dB takeoff
            flight("HDJT", FlightDirection::Departure), // jet, 81 dB takeoff
            flight("C172", FlightDirection::Arrival),  // fixed wing
            flight("ZZZZ", FlightDirection::Arrival),  // unknown
        ];
        let index = noise_index(&flights);
        assert_eq!(index.helicopters, 2);
        assert_eq!(index.loud_jets, 1);
        assert_eq!(index.total, 3);
    }

    #[test]
    fn noise_index_empty_collection() {
        assert_eq!(noise_index(&[]), NoiseIndex::default());
    }

    #[test]
    fn flight_impact_over_short_track() {
        let observers = vec![Observer {
            id: "main-street".to_string(),
            name: "Main Street".to_string(),
            lat: 40.9445,
            lon: -72.2337,
        }];
        // Helicopter passing directly over the observer at 800 ft
        let track = vec![
            TrackPosition {
                timestamp: None,
                latitude: 40.9300,
                longitude: -72.2337,
                altitude_ft: 900.0,
                heading_deg: Some(0.0),
            },
            TrackPosition {
                timestamp: None,
                latitude: 40.9445,
                longitude: -72.2337,
                altitude_ft: 800.0,
                heading_deg: Some(0.0),
            },
            TrackPosition {
                timestamp: None,
                latitude: 40.9600,
                longitude: -72.2337,
                altitude_ft: 700.0,
                heading_deg: Some(0.0),
            },
        ];

        let impact = flight_impact(
            "S76",
            FlightDirection::Departure,
            &track,
            &observers,
            GroundSurface::Mixed,
        );

        assert_eq!(impact.track_count, 3);
        assert_eq!(impact.exposure_seconds, 15);
        assert_eq!(impact.observer_impacts.len(), 1);
        let observed = &impact.observer_impacts[0];
        // Overhead point dominates
        assert_eq!(observed.closest_approach_ft, 800.0);
        assert!(observed.max_db > 80.0, "got {}", observed.max_db);
        assert!(observed.seconds_above_65db >= 5);
        assert!(impact.max_db >= impact.avg_db);
    }

    #[test]
    fn flight_impact_empty_track() {
        let observers = vec![Observer {
            id: "obs".to_string(),
            name: "Observer".to_string(),
            lat: 40.9445,
            lon: -72.2337,
        }];
        let impact = flight_impact(
            "S76",
            FlightDirection::Arrival,
            &[],
            &observers,
            GroundSurface::Hard,
        );
        assert_eq!(impact.max_db, 0.0);
        assert_eq!(impact.avg_db, 0.0);
        assert_eq!(impact.exposure_seconds, 0);
    }
}
