//! Ambient propagation conditions: wind transport and temperature inversion.
//!
//! Characterizes how the current atmosphere carries aircraft sound toward the
//! noise-sensitive community, independent of any single flight. The
//! presentation layer overlays the banded result as a separate indicator; the
//! deltas are never folded into per-flight estimates here.

use crate::models::{
    ConditionsBand, InversionStrength, PropagationConditions, TemperatureProfile, WindConditions,
};

/// Wind below this speed contributes nothing.
pub const CALM_THRESHOLD_KT: f64 = 5.0;

/// Downwind transport bonus (perceived level increases).
const DOWNWIND_BONUS_DB: f64 = 3.0;

/// Upwind reduction (sound refracts upward, away from the ground).
const UPWIND_REDUCTION_DB: f64 = -2.0;

/// Bearing from the field toward the dominant noise-sensitive community.
pub const DEFAULT_SENSITIVE_BEARING_DEG: f64 = 135.0;

fn inversion_adjustment(profile: &TemperatureProfile) -> f64 {
    if !profile.inversion_present {
        return 0.0;
    }
    match profile.inversion_strength {
        InversionStrength::None => 0.0,
        InversionStrength::Weak => 2.0,
        InversionStrength::Moderate => 4.0,
        InversionStrength::Strong => 6.0,
    }
}

fn wind_adjustment(wind: &WindConditions, sensitive_bearing_deg: f64) -> f64 {
    if wind.speed_kt < CALM_THRESHOLD_KT {
        return 0.0;
    }

    // Wind direction is where it blows FROM; transport is toward the
    // reciprocal heading.
    let transport_deg = (wind.direction_deg + 180.0).rem_euclid(360.0);
    let mut offset = (transport_deg - sensitive_bearing_deg).abs() % 360.0;
    if offset > 180.0 {
        offset = 360.0 - offset;
    }

    if offset <= 90.0 {
        DOWNWIND_BONUS_DB
    } else {
        UPWIND_REDUCTION_DB
    }
}

/// Conditions relative to the default noise-sensitive community bearing.
pub fn propagation_conditions(
    wind: &WindConditions,
    profile: &TemperatureProfile,
) -> PropagationConditions {
    propagation_conditions_toward(wind, profile, DEFAULT_SENSITIVE_BEARING_DEG)
}

/// Banded propagation assessment toward an arbitrary community bearing.
///
/// Red requires a strong inversion together with downwind transport; any
/// single active effect bands yellow; green only when both deltas are zero.
pub fn propagation_conditions_toward(
    wind: &WindConditions,
    profile: &TemperatureProfile,
    sensitive_bearing_deg: f64,
) -> PropagationConditions {
    let wind_db = wind_adjustment(wind, sensitive_bearing_deg);
    let inversion_db = inversion_adjustment(profile);

    let strong_inversion =
        profile.inversion_present && profile.inversion_strength == InversionStrength::Strong;

    let (band, description) = if strong_inversion && wind_db > 0.0 {
        (
            ConditionsBand::Red,
            "Strong inversion with downwind transport; sound trapped and carried toward the community",
        )
    } else if wind_db != 0.0 || inversion_db > 0.0 {
        (
            ConditionsBand::Yellow,
            "Elevated propagation: wind or inversion is shifting perceived noise levels",
        )
    } else {
        (
            ConditionsBand::Green,
            "Neutral propagation conditions",
        )
    };

    PropagationConditions {
        band,
        description: description.to_string(),
        wind_adjustment_db: wind_db,
        inversion_adjustment_db: inversion_db,
    }
}
