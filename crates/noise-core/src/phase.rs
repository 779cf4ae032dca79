//! Flight-phase / position model.
//!
//! Two fixed keyframe sequences map a fractional path position t in [0,1]
//! (0 = origin, 1 = destination) to an interpolated altitude and a named
//! phase. Altitude interpolates linearly between keyframes; the phase label
//! steps to the upper keyframe's phase rather than blending.

use crate::models::{AltitudePosition, FlightDirection, FlightPhase};

#[derive(Debug, Clone, Copy)]
struct Keyframe {
    t: f64,
    altitude_ft: f64,
    phase: FlightPhase,
}

const CRUISE_ALTITUDE_FT: f64 = 4000.0;

// Sorted by t; endpoints cover the full [0,1] domain.
const DEPARTURE_KEYFRAMES: [Keyframe; 8] = [
    Keyframe { t: 0.0, altitude_ft: 0.0, phase: FlightPhase::Takeoff },
    Keyframe { t: 0.08, altitude_ft: 500.0, phase: FlightPhase::Climb },
    Keyframe { t: 0.18, altitude_ft: 1200.0, phase: FlightPhase::Climb },
    Keyframe { t: 0.32, altitude_ft: 2200.0, phase: FlightPhase::Climb },
    Keyframe { t: 0.48, altitude_ft: 3200.0, phase: FlightPhase::Climb },
    Keyframe { t: 0.65, altitude_ft: CRUISE_ALTITUDE_FT, phase: FlightPhase::Cruise },
    Keyframe { t: 0.82, altitude_ft: CRUISE_ALTITUDE_FT, phase: FlightPhase::Cruise },
    Keyframe { t: 1.0, altitude_ft: CRUISE_ALTITUDE_FT, phase: FlightPhase::Cruise },
];

const ARRIVAL_KEYFRAMES: [Keyframe; 8] = [
    Keyframe { t: 0.0, altitude_ft: CRUISE_ALTITUDE_FT, phase: FlightPhase::Cruise },
    Keyframe { t: 0.15, altitude_ft: 3400.0, phase: FlightPhase::Descent },
    Keyframe { t: 0.3, altitude_ft: 2600.0, phase: FlightPhase::Descent },
    Keyframe { t: 0.45, altitude_ft: 1900.0, phase: FlightPhase::Approach },
    Keyframe { t: 0.6, altitude_ft: 1300.0, phase: FlightPhase::Approach },
    Keyframe { t: 0.75, altitude_ft: 800.0, phase: FlightPhase::Approach },
    Keyframe { t: 0.9, altitude_ft: 400.0, phase: FlightPhase::Approach },
    Keyframe { t: 1.0, altitude_ft: 0.0, phase: FlightPhase::Approach },
];

fn keyframes(direction: FlightDirection) -> &'static [Keyframe; 8] {
    match direction {
        FlightDirection::Departure => &DEPARTURE_KEYFRAMES,
        FlightDirection::Arrival => &ARRIVAL_KEYFRAMES,
    }
}

/// Altitude and phase at a fractional position along the path.
///
/// t outside [0,1] clamps to the first/last keyframe.
pub fn position_at(t: f64, direction: FlightDirection) -> AltitudePosition {
    let frames = keyframes(direction);

    let first = &frames[0];
    if t <= first.t {
        return AltitudePosition {
            altitude_ft: first.altitude_ft,
            phase: first.phase,
        };
    }

    let last = &frames[frames.len() - 1];
    if t >= last.t {
        return AltitudePosition {
            altitude_ft: last.altitude_ft,
            phase: last.phase,
        };
    }

    for pair in frames.windows(2) {
        let (lower, upper) = (&pair[0], &pair[1]);
        if lower.t <= t && t <= upper.t {
            let span = upper.t - lower.t;
            let ratio = if span > 0.0 { (t - lower.t) / span } else { 0.0 };
            let altitude_ft = lower.altitude_ft + ratio * (upper.altitude_ft - lower.altitude_ft);
            return AltitudePosition {
                altitude_ft,
                phase: upper.phase,
            };
        }
    }

    // Unreachable: endpoints cover the domain
    AltitudePosition {
        altitude_ft: last.altitude_ft,
        phase: last.phase,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn departure_starts_with_takeoff() {
        let position = position_at(0.0, FlightDirection::Departure);
        assert_eq!(position.phase, FlightPhase::Takeoff);
        assert_eq!(position.altitude_ft, 0.0);
    }

    #[test]
    fn arrival_ends_with_approach() {
        let position = position_at(1.0, FlightDirection::Arrival);
        assert_eq!(position.phase, FlightPhase::Approach);
        assert_eq!(position.altitude_ft, 0.0);
    }

    #[test]
    fn out_of_range_t_clamps() {
        assert_eq!(
            position_at(-0.5, FlightDirection::Departure),
            position_at(0.0, FlightDirection::Departure)
        );
        assert_eq!(
            position_at(1.5, FlightDirection::Arrival),
            position_at(1.0, FlightDirection::Arrival)
        );
    }

    #[test]
    fn altitude_interpolates_between_keyframes() {
        // Midway between t=0.0 (0 ft) and t=0.08 (500 ft)
        let position = position_at(0.04, FlightDirection::Departure);
        assert!((position.altitude_ft - 250.0).abs() < 1e-9);
        assert_eq!(position.phase, FlightPhase::Climb);
    }

    #[test]
    fn phase_is_upper_keyframe_label() {
        // Just past departure start, phase already reads climb
        let position = position_at(0.01, FlightDirection::Departure);
        assert_eq!(position.phase, FlightPhase::Climb);

        // Just past arrival start, phase reads descent
        let position = position_at(0.01, FlightDirection::Arrival);
        assert_eq!(position.phase, FlightPhase::Descent);
    }

    #[test]
    fn departure_altitude_monotonic_non_decreasing() {
        let mut previous = -1.0;
        for step in 0..=100 {
            let t = step as f64 / 100.0;
            let altitude = position_at(t, FlightDirection::Departure).altitude_ft;
            assert!(altitude >= previous, "altitude dipped at t={t}");
            previous = altitude;
        }
    }

    #[test]
    fn arrival_altitude_monotonic_non_increasing() {
        let mut previous = f64::MAX;
        for step in 0..=100 {
            let t = step as f64 / 100.0;
            let altitude = position_at(t, FlightDirection::Arrival).altitude_ft;
            assert!(altitude <= previous, "altitude rose at t={t}");
            previous = altitude;
        }
    }

    #[test]
    fn departure_reaches_cruise() {
        let position = position_at(0.9, FlightDirection::Departure);
        assert_eq!(position.phase, FlightPhase::Cruise);
        assert_eq!(position.altitude_ft, CRUISE_ALTITUDE_FT);
    }
}
