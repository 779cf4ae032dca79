//! Noise profile resolution.
//!
//! Walks the catalog tiers in a fixed precedence order and always returns a
//! profile; missing data downgrades the source tag and confidence instead of
//! failing.

use tracing::debug;

use crate::catalog::{
    self, category_average, certified_entry, latest_measurement, noise_class_for,
};
use crate::models::{AircraftCategory, Confidence, DataSource, NoiseProfile};

/// Resolve the noise profile for an ICAO type designator.
///
/// Precedence, highest first:
/// 1. most recent field measurement (merged over the certified record when
///    one exists),
/// 2. certified catalog record,
/// 3. category average for a classifiable type,
/// 4. global unverified default.
///
/// Pure: the same code always yields an identical profile.
pub fn resolve(type_code: &str) -> NoiseProfile {
    let code = type_code.trim().to_ascii_uppercase();

    if let Some(measured) = latest_measurement(&code) {
        // Measured data is trusted for absolute levels; certification metrics
        // and descriptive fields stay with the certified record when present.
        let certified = certified_entry(&code);
        let category = certified
            .map(|entry| entry.category)
            .unwrap_or_else(|| catalog::classify(&code));
        return NoiseProfile {
            type_code: code.clone(),
            category,
            noise_class: noise_class_for(measured.takeoff_db),
            takeoff_db: measured.takeoff_db,
            approach_db: measured.approach_db,
            lateral_epnl: certified.and_then(|entry| entry.lateral_epnl),
            flyover_epnl: certified.and_then(|entry| entry.flyover_epnl),
            approach_epnl: certified.and_then(|entry| entry.approach_epnl),
            manufacturer: certified.map(|entry| entry.manufacturer.to_string()),
            model: certified.map(|entry| entry.model.to_string()),
            data_source: DataSource::Measured,
            confidence: Confidence::from_source(DataSource::Measured),
        };
    }

    if let Some(entry) = certified_entry(&code) {
        return NoiseProfile {
            type_code: code,
            category: entry.category,
            noise_class: noise_class_for(entry.takeoff_db),
            takeoff_db: entry.takeoff_db,
            approach_db: entry.approach_db,
            lateral_epnl: entry.lateral_epnl,
            flyover_epnl: entry.flyover_epnl,
            approach_epnl: entry.approach_epnl,
            manufacturer: Some(entry.manufacturer.to_string()),
            model: Some(entry.model.to_string()),
            data_source: DataSource::Certified,
            confidence: Confidence::from_source(DataSource::Certified),
        };
    }

    let category = catalog::classify(&code);
    if category != AircraftCategory::Unknown {
        debug!(type_code = %code, ?category, "no direct record, using category average");
        let average = category_average(category);
        return NoiseProfile {
            type_code: code,
            category,
            noise_class: noise_class_for(average.default_db),
            takeoff_db: average.default_db,
            approach_db: average.default_db - catalog::CATEGORY_APPROACH_OFFSET_DB,
            lateral_epnl: None,
            flyover_epnl: None,
            approach_epnl: None,
            manufacturer: None,
            model: None,
            data_source: DataSource::CategoryEstimate,
            confidence: Confidence::from_source(DataSource::CategoryEstimate),
        };
    }

    debug!(type_code = %code, "unknown type, using unverified default");
    NoiseProfile {
        type_code: if code.is_empty() { "UNKN".to_string() } else { code },
        category: AircraftCategory::Unknown,
        noise_class: noise_class_for(catalog::UNVERIFIED_DEFAULT_TAKEOFF_DB),
        takeoff_db: catalog::UNVERIFIED_DEFAULT_TAKEOFF_DB,
        approach_db: catalog::UNVERIFIED_DEFAULT_APPROACH_DB,
        lateral_epnl: None,
        flyover_epnl: None,
        approach_epnl: None,
        manufacturer: None,
        model: None,
        data_source: DataSource::Unverified,
        confidence: Confidence::from_source(DataSource::Unverified),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measured_type_reports_measured_source() {
        let profile = resolve("S76");
        assert_eq!(profile.data_source, DataSource::Measured);
        assert_eq!(profile.confidence, Confidence::High);
        // 2023 campaign values, not the certified 88/85
        assert!((profile.takeoff_db - 89.4).abs() < 1e-9);
        assert!((profile.approach_db - 86.1).abs() < 1e-9);
    }

    #[test]
    fn measured_merge_keeps_certified_descriptive_fields() {
        let profile = resolve("S76");
        // EPNLs and manufacturer come from the certified record
        assert_eq!(profile.lateral_epnl, Some(93.1));
        assert_eq!(profile.approach_epnl, Some(95.6));
        assert_eq!(profile.manufacturer.as_deref(), Some("Sikorsky"));
        assert_eq!(profile.category, AircraftCategory::Helicopter);
    }

    #[test]
    fn certified_only_type() {
        let profile = resolve("GLF5");
        assert_eq!(profile.data_source, DataSource::Certified);
        assert_eq!(profile.confidence, Confidence::High);
        assert!((profile.takeoff_db - 90.0).abs() < 1e-9);
        assert_eq!(profile.model.as_deref(), Some("G-V"));
    }

    #[test]
    fn known_category_without_record_uses_average() {
        // B412 classifies as helicopter but has no catalog record
        let profile = resolve("B412");
        assert_eq!(profile.category, AircraftCategory::Helicopter);
        assert_eq!(profile.data_source, DataSource::CategoryEstimate);
        assert_eq!(profile.confidence, Confidence::Medium);
        assert!((profile.takeoff_db - 84.0).abs() < 1e-9);
        assert!((profile.approach_db - 80.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_type_falls_to_unverified_default() {
        let profile = resolve("ZZZZ");
        assert_eq!(profile.data_source, DataSource::Unverified);
        assert_eq!(profile.confidence, Confidence::Low);
        assert_eq!(profile.category, AircraftCategory::Unknown);
        assert!((profile.takeoff_db - 80.0).abs() < 1e-9);
    }

    #[test]
    fn empty_code_never_fails() {
        let profile = resolve("");
        assert_eq!(profile.data_source, DataSource::Unverified);
        assert_eq!(profile.type_code, "UNKN");
    }

    #[test]
    fn resolution_is_deterministic() {
        for code in ["S76", "GLF5", "B412", "ZZZZ", "", "c172"] {
            assert_eq!(resolve(code), resolve(code));
        }
    }

    #[test]
    fn code_normalization() {
        assert_eq!(resolve("s76"), resolve("S76"));
        assert_eq!(resolve(" glf5 "), resolve("GLF5"));
    }
}
