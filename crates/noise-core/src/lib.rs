//! Aircraft noise estimation and propagation engine.
//!
//! Pure, synchronous computation over immutable reference tables: resolve an
//! aircraft type to a noise profile with a provenance tag, scale it through
//! the altitude and lateral attenuation models, place it along a flight path
//! with the phase model, and characterize ambient propagation conditions.
//! Flight and weather data are supplied by the caller; the engine performs
//! no I/O and holds no mutable state.

pub mod aggregate;
pub mod attenuation;
pub mod catalog;
pub mod models;
pub mod phase;
pub mod propagation;
pub mod resolver;
pub mod schedule;
pub mod spatial;

pub use aggregate::{
    altitude_profile, estimate_at_altitude, estimate_for_flight, flight_impact, noise_index,
    AltitudeLevel, FlightImpact, NoiseIndex, ObserverImpact,
};
pub use attenuation::{db_at_altitude, db_at_altitude_ref, ground_noise, lateral_attenuation};
pub use models::{
    AircraftCategory, AltitudePosition, Confidence, ConditionsBand, DataSource, FlightDirection,
    FlightOp, FlightPhase, GroundSurface, InversionStrength, NoiseClass, NoiseEstimate,
    NoiseProfile, Observer, PropagationConditions, TemperatureProfile, TrackPosition,
    WindConditions,
};
pub use phase::position_at;
pub use propagation::{propagation_conditions, propagation_conditions_toward};
pub use resolver::resolve;
pub use spatial::observer_angle;
