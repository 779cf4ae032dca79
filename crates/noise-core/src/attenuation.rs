//! Physical attenuation models: altitude (inverse-square), lateral
//! (standards-derived angle table), and the composed ground-level estimate.

use crate::models::{AircraftCategory, Confidence, DataSource, GroundSurface, NoiseEstimate};
use crate::spatial;

/// Certification reference distance (1000 ft / 304.8 m).
pub const CERTIFICATION_REFERENCE_FT: f64 = 1000.0;

/// A-weighted average atmospheric absorption, dB per 1000 ft of path.
pub const ATMOSPHERIC_ABSORPTION_DB_PER_KFT: f64 = 0.5;

/// Floor on the acoustic path length to prevent extreme values close in.
const MIN_SLANT_DISTANCE_FT: f64 = 100.0;

/// Flat bonus applied at or below ground level.
const NEAR_GROUND_BONUS_DB: f64 = 20.0;

/// Base lateral attenuation by angle from track (SAE-AIR-5662 derived).
/// Strictly non-decreasing over the full 0-90 domain.
const LATERAL_ATTENUATION_TABLE: [(f64, f64); 10] = [
    (0.0, 0.0), // directly below
    (10.0, 0.5),
    (20.0, 1.2),
    (30.0, 2.5),
    (40.0, 4.0),
    (50.0, 5.5),
    (60.0, 7.0),
    (70.0, 8.5),
    (80.0, 9.5),
    (90.0, 10.0), // perpendicular
];

/// Angle above which the ground-surface term starts contributing.
const GROUND_TERM_ONSET_DEG: f64 = 30.0;

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Estimated level at an arbitrary altitude from a level at the 1000 ft
/// certification reference.
pub fn db_at_altitude(base_db: f64, altitude_ft: f64) -> f64 {
    db_at_altitude_ref(base_db, altitude_ft, CERTIFICATION_REFERENCE_FT)
}

/// Inverse-square (20 log10) altitude scaling against an explicit reference.
///
/// Altitudes at or below ground get a flat +20 dB near-ground bonus. This is
/// an intentional modeling discontinuity carried over from the original
/// design; it does not connect smoothly to the inverse-square asymptote.
pub fn db_at_altitude_ref(base_db: f64, altitude_ft: f64, reference_ft: f64) -> f64 {
    if altitude_ft <= 0.0 {
        return round1(base_db + NEAR_GROUND_BONUS_DB);
    }
    let attenuation = 20.0 * (reference_ft / altitude_ft).log10();
    round1(base_db + attenuation)
}

/// Directivity factor scaling the base lateral attenuation per category.
/// Helicopters radiate more omnidirectionally, so their lateral fall-off
/// is weaker.
pub fn directivity_factor(category: AircraftCategory) -> f64 {
    match category {
        AircraftCategory::Helicopter => 0.7,
        AircraftCategory::Jet => 1.0,
        AircraftCategory::FixedWing => 0.85,
        AircraftCategory::Unknown => 1.0,
    }
}

fn ground_surface_constant(ground: GroundSurface) -> f64 {
    match ground {
        GroundSurface::Hard => 0.0,
        GroundSurface::Mixed => 1.5,
        GroundSurface::Soft => 3.0,
        GroundSurface::Absorptive => 4.5,
    }
}

/// Base attenuation for an angle, linearly interpolated between the
/// bracketing table rows.
fn base_lateral_attenuation(angle: f64) -> f64 {
    let mut lower = LATERAL_ATTENUATION_TABLE[0];
    let mut upper = LATERAL_ATTENUATION_TABLE[LATERAL_ATTENUATION_TABLE.len() - 1];

    for pair in LATERAL_ATTENUATION_TABLE.windows(2) {
        if pair[0].0 <= angle && angle <= pair[1].0 {
            lower = pair[0];
            upper = pair[1];
            break;
        }
    }

    let span = upper.0 - lower.0;
    if span <= 0.0 {
        return lower.1;
    }
    let ratio = (angle - lower.0) / span;
    lower.1 + ratio * (upper.1 - lower.1)
}

/// Lateral attenuation in dB (always >= 0) for an off-track angle.
///
/// The interpolated base value is scaled by the category directivity factor.
/// Ground reflection/absorption only becomes relevant at larger look-down
/// angles: the surface term activates above 30 degrees and grows linearly
/// with angle/90.
pub fn lateral_attenuation(angle_deg: f64, category: AircraftCategory, ground: GroundSurface) -> f64 {
    let angle = angle_deg.abs().clamp(0.0, 90.0);

    let mut attenuation = base_lateral_attenuation(angle) * directivity_factor(category);

    if angle > GROUND_TERM_ONSET_DEG {
        attenuation += ground_surface_constant(ground) * (angle / 90.0);
    }

    attenuation.max(0.0)
}

/// Composed ground-level estimate for an observer from raw geometry.
///
/// Chains slant-distance geometric spreading, atmospheric absorption along
/// the path, and (when a heading is known) lateral attenuation from the
/// observer's off-track angle. Result is floored at 0 dB with a
/// per-component breakdown. Source/confidence tags default to the lowest
/// tier; callers that resolved a profile overwrite them from it.
#[allow(clippy::too_many_arguments)]
pub fn ground_noise(
    source_db: f64,
    altitude_ft: f64,
    observer_lat: f64,
    observer_lon: f64,
    aircraft_lat: f64,
    aircraft_lon: f64,
    heading_deg: Option<f64>,
    category: AircraftCategory,
    ground: GroundSurface,
) -> NoiseEstimate {
    let horizontal_ft =
        spatial::haversine_distance_ft(observer_lat, observer_lon, aircraft_lat, aircraft_lon);
    let slant_ft = spatial::slant_distance_ft(altitude_ft, horizontal_ft);
    let effective_slant_ft = slant_ft.max(MIN_SLANT_DISTANCE_FT);

    let geometric = 20.0 * (effective_slant_ft / CERTIFICATION_REFERENCE_FT).log10();
    let atmospheric = (effective_slant_ft / 1000.0) * ATMOSPHERIC_ABSORPTION_DB_PER_KFT;

    let lateral = heading_deg
        .map(|heading| {
            let angle = spatial::observer_angle(
                observer_lat,
                observer_lon,
                aircraft_lat,
                aircraft_lon,
                heading,
            );
            lateral_attenuation(angle, category, ground)
        })
        .unwrap_or(0.0);

    let ground_db = (source_db - geometric - atmospheric - lateral).max(0.0);

    NoiseEstimate {
        db: round1(ground_db),
        source: DataSource::Unverified,
        confidence: Confidence::Low,
        warning: None,
        slant_distance_ft: Some(slant_ft.round()),
        horizontal_distance_ft: Some(horizontal_ft.round()),
        geometric_attenuation_db: Some(round1(geometric)),
        atmospheric_attenuation_db: Some(round1(atmospheric)),
        lateral_attenuation_db: Some(round1(lateral)),
    }
}
