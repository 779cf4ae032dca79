//! Static noise reference tables.
//!
//! Three tiers feed profile resolution:
//! - `CERTIFIED`: per-type certification catalog (LAmax at 1000 ft plus
//!   EPNL certification metrics where published),
//! - `MEASURED`: field measurement campaigns, possibly several years per type,
//! - `CATEGORY_AVERAGES`: per-category fallback levels.
//!
//! All tables are initialized once and read-only for the process lifetime;
//! concurrent access needs no synchronization.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use crate::models::{AircraftCategory, NoiseClass};

/// One certification catalog record, keyed by ICAO type designator.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub type_code: &'static str,
    pub manufacturer: &'static str,
    pub model: &'static str,
    pub category: AircraftCategory,
    /// LAmax at 1000 ft reference
    pub takeoff_db: f64,
    pub approach_db: f64,
    pub lateral_epnl: Option<f64>,
    pub flyover_epnl: Option<f64>,
    pub approach_epnl: Option<f64>,
}

/// One field-measurement record. Several campaigns may cover the same type;
/// resolution picks the most recent year.
#[derive(Debug, Clone, Copy)]
pub struct MeasuredRecord {
    pub type_code: &'static str,
    pub year: i32,
    pub takeoff_db: f64,
    pub approach_db: f64,
}

/// Per-category fallback levels (LAmax at 1000 ft), with optional
/// weight-class variants.
#[derive(Debug, Clone, Copy)]
pub struct CategoryAverage {
    pub default_db: f64,
    pub light_db: Option<f64>,
    pub medium_db: Option<f64>,
    pub heavy_db: Option<f64>,
}

/// Spread between takeoff and approach reference levels when only a single
/// category default is known.
pub const CATEGORY_APPROACH_OFFSET_DB: f64 = 4.0;

/// Default level applied when nothing at all is known about a type.
pub const UNVERIFIED_DEFAULT_TAKEOFF_DB: f64 = 80.0;
pub const UNVERIFIED_DEFAULT_APPROACH_DB: f64 = 76.0;

const HELICOPTER_AVERAGE: CategoryAverage = CategoryAverage {
    default_db: 84.0,
    light_db: Some(78.0),
    medium_db: Some(84.0),
    heavy_db: Some(90.0),
};

const JET_AVERAGE: CategoryAverage = CategoryAverage {
    default_db: 88.0,
    light_db: Some(82.0),
    medium_db: Some(88.0),
    heavy_db: Some(94.0),
};

const FIXED_WING_AVERAGE: CategoryAverage = CategoryAverage {
    default_db: 76.0,
    light_db: Some(72.0),
    medium_db: Some(76.0),
    heavy_db: Some(82.0),
};

const UNKNOWN_AVERAGE: CategoryAverage = CategoryAverage {
    default_db: 80.0,
    light_db: None,
    medium_db: None,
    heavy_db: None,
};

/// Fallback average for a category.
pub fn category_average(category: AircraftCategory) -> &'static CategoryAverage {
    match category {
        AircraftCategory::Helicopter => &HELICOPTER_AVERAGE,
        AircraftCategory::Jet => &JET_AVERAGE,
        AircraftCategory::FixedWing => &FIXED_WING_AVERAGE,
        AircraftCategory::Unknown => &UNKNOWN_AVERAGE,
    }
}

/// Loudness band for a reference takeoff level.
pub fn noise_class_for(takeoff_db: f64) -> NoiseClass {
    if takeoff_db < 75.0 {
        NoiseClass::Quiet
    } else if takeoff_db < 83.0 {
        NoiseClass::Moderate
    } else if takeoff_db < 90.0 {
        NoiseClass::Loud
    } else {
        NoiseClass::VeryLoud
    }
}

// Certification catalog. Values are LAmax at the 1000 ft reference; EPNL
// triples (lateral/flyover/approach) only where the certification record
// publishes them.
const CERTIFIED_ENTRIES: &[CatalogEntry] = &[
    // Helicopters
    CatalogEntry {
        type_code: "S76",
        manufacturer: "Sikorsky",
        model: "S-76",
        category: AircraftCategory::Helicopter,
        takeoff_db: 88.0,
        approach_db: 85.0,
        lateral_epnl: Some(93.1),
        flyover_epnl: Some(91.2),
        approach_epnl: Some(95.6),
    },
    CatalogEntry {
        type_code: "S92",
        manufacturer: "Sikorsky",
        model: "S-92",
        category: AircraftCategory::Helicopter,
        takeoff_db: 92.0,
        approach_db: 89.0,
        lateral_epnl: Some(96.4),
        flyover_epnl: Some(94.8),
        approach_epnl: Some(98.2),
    },
    CatalogEntry {
        type_code: "R44",
        manufacturer: "Robinson",
        model: "R44 Raven",
        category: AircraftCategory::Helicopter,
        takeoff_db: 81.0,
        approach_db: 78.0,
        lateral_epnl: None,
        flyover_epnl: Some(81.9),
        approach_epnl: None,
    },
    CatalogEntry {
        type_code: "R66",
        manufacturer: "Robinson",
        model: "R66 Turbine",
        category: AircraftCategory::Helicopter,
        takeoff_db: 80.0,
        approach_db: 77.0,
        lateral_epnl: None,
        flyover_epnl: Some(80.4),
        approach_epnl: None,
    },
    CatalogEntry {
        type_code: "B06",
        manufacturer: "Bell",
        model: "206 JetRanger",
        category: AircraftCategory::Helicopter,
        takeoff_db: 83.0,
        approach_db: 80.0,
        lateral_epnl: None,
        flyover_epnl: Some(84.5),
        approach_epnl: None,
    },
    CatalogEntry {
        type_code: "B407",
        manufacturer: "Bell",
        model: "407",
        category: AircraftCategory::Helicopter,
        takeoff_db: 85.0,
        approach_db: 82.0,
        lateral_epnl: None,
        flyover_epnl: Some(86.1),
        approach_epnl: None,
    },
    CatalogEntry {
        type_code: "A109",
        manufacturer: "Leonardo",
        model: "AW109",
        category: AircraftCategory::Helicopter,
        takeoff_db: 86.0,
        approach_db: 83.0,
        lateral_epnl: Some(91.0),
        flyover_epnl: Some(89.3),
        approach_epnl: Some(93.5),
    },
    CatalogEntry {
        type_code: "A139",
        manufacturer: "Leonardo",
        model: "AW139",
        category: AircraftCategory::Helicopter,
        takeoff_db: 89.0,
        approach_db: 86.0,
        lateral_epnl: Some(94.2),
        flyover_epnl: Some(92.6),
        approach_epnl: Some(96.8),
    },
    CatalogEntry {
        type_code: "EC35",
        manufacturer: "Airbus Helicopters",
        model: "H135",
        category: AircraftCategory::Helicopter,
        takeoff_db: 84.0,
        approach_db: 81.0,
        lateral_epnl: None,
        flyover_epnl: Some(85.0),
        approach_epnl: None,
    },
    CatalogEntry {
        type_code: "H125",
        manufacturer: "Airbus Helicopters",
        model: "H125",
        category: AircraftCategory::Helicopter,
        takeoff_db: 84.0,
        approach_db: 81.0,
        lateral_epnl: None,
        flyover_epnl: Some(85.7),
        approach_epnl: None,
    },
    // Business jets
    CatalogEntry {
        type_code: "GLF4",
        manufacturer: "Gulfstream",
        model: "G-IV",
        category: AircraftCategory::Jet,
        takeoff_db: 89.0,
        approach_db: 85.0,
        lateral_epnl: Some(94.1),
        flyover_epnl: Some(88.9),
        approach_epnl: Some(92.7),
    },
    CatalogEntry {
        type_code: "GLF5",
        manufacturer: "Gulfstream",
        model: "G-V",
        category: AircraftCategory::Jet,
        takeoff_db: 90.0,
        approach_db: 86.0,
        lateral_epnl: Some(94.8),
        flyover_epnl: Some(89.6),
        approach_epnl: Some(93.4),
    },
    CatalogEntry {
        type_code: "GLF6",
        manufacturer: "Gulfstream",
        model: "G650",
        category: AircraftCategory::Jet,
        takeoff_db: 88.0,
        approach_db: 84.0,
        lateral_epnl: Some(92.3),
        flyover_epnl: Some(87.4),
        approach_epnl: Some(91.8),
    },
    CatalogEntry {
        type_code: "CL60",
        manufacturer: "Bombardier",
        model: "Challenger 600",
        category: AircraftCategory::Jet,
        takeoff_db: 87.0,
        approach_db: 83.0,
        lateral_epnl: Some(91.5),
        flyover_epnl: Some(86.8),
        approach_epnl: Some(91.0),
    },
    CatalogEntry {
        type_code: "GL5T",
        manufacturer: "Bombardier",
        model: "Global 5000",
        category: AircraftCategory::Jet,
        takeoff_db: 88.0,
        approach_db: 84.0,
        lateral_epnl: Some(92.9),
        flyover_epnl: Some(87.7),
        approach_epnl: Some(92.1),
    },
    CatalogEntry {
        type_code: "C560",
        manufacturer: "Cessna",
        model: "Citation V",
        category: AircraftCategory::Jet,
        takeoff_db: 84.0,
        approach_db: 80.0,
        lateral_epnl: Some(88.6),
        flyover_epnl: Some(83.2),
        approach_epnl: Some(89.4),
    },
    CatalogEntry {
        type_code: "C680",
        manufacturer: "Cessna",
        model: "Citation Sovereign",
        category: AircraftCategory::Jet,
        takeoff_db: 85.0,
        approach_db: 81.0,
        lateral_epnl: Some(89.2),
        flyover_epnl: Some(84.0),
        approach_epnl: Some(90.1),
    },
    CatalogEntry {
        type_code: "C750",
        manufacturer: "Cessna",
        model: "Citation X",
        category: AircraftCategory::Jet,
        takeoff_db: 88.0,
        approach_db: 84.0,
        lateral_epnl: Some(92.0),
        flyover_epnl: Some(87.1),
        approach_epnl: Some(91.5),
    },
    CatalogEntry {
        type_code: "F2TH",
        manufacturer: "Dassault",
        model: "Falcon 2000",
        category: AircraftCategory::Jet,
        takeoff_db: 86.0,
        approach_db: 82.0,
        lateral_epnl: Some(90.4),
        flyover_epnl: Some(85.5),
        approach_epnl: Some(90.8),
    },
    CatalogEntry {
        type_code: "E55P",
        manufacturer: "Embraer",
        model: "Phenom 300",
        category: AircraftCategory::Jet,
        takeoff_db: 83.0,
        approach_db: 79.0,
        lateral_epnl: Some(86.9),
        flyover_epnl: Some(81.7),
        approach_epnl: Some(88.2),
    },
    CatalogEntry {
        type_code: "HDJT",
        manufacturer: "Honda",
        model: "HA-420 HondaJet",
        category: AircraftCategory::Jet,
        takeoff_db: 81.0,
        approach_db: 77.0,
        lateral_epnl: Some(84.3),
        flyover_epnl: Some(79.8),
        approach_epnl: Some(86.5),
    },
    CatalogEntry {
        type_code: "PC24",
        manufacturer: "Pilatus",
        model: "PC-24",
        category: AircraftCategory::Jet,
        takeoff_db: 82.0,
        approach_db: 78.0,
        lateral_epnl: Some(85.8),
        flyover_epnl: Some(80.9),
        approach_epnl: Some(87.3),
    },
    CatalogEntry {
        type_code: "LJ60",
        manufacturer: "Learjet",
        model: "60",
        category: AircraftCategory::Jet,
        takeoff_db: 86.0,
        approach_db: 82.0,
        lateral_epnl: Some(90.7),
        flyover_epnl: Some(85.9),
        approach_epnl: Some(90.3),
    },
    // Fixed-wing piston / turboprop
    CatalogEntry {
        type_code: "C172",
        manufacturer: "Cessna",
        model: "172 Skyhawk",
        category: AircraftCategory::FixedWing,
        takeoff_db: 72.0,
        approach_db: 70.0,
        lateral_epnl: None,
        flyover_epnl: None,
        approach_epnl: None,
    },
    CatalogEntry {
        type_code: "C182",
        manufacturer: "Cessna",
        model: "182 Skylane",
        category: AircraftCategory::FixedWing,
        takeoff_db: 74.0,
        approach_db: 72.0,
        lateral_epnl: None,
        flyover_epnl: None,
        approach_epnl: None,
    },
    CatalogEntry {
        type_code: "C208",
        manufacturer: "Cessna",
        model: "208 Caravan",
        category: AircraftCategory::FixedWing,
        takeoff_db: 81.0,
        approach_db: 78.0,
        lateral_epnl: None,
        flyover_epnl: Some(80.2),
        approach_epnl: None,
    },
    CatalogEntry {
        type_code: "SR22",
        manufacturer: "Cirrus",
        model: "SR22",
        category: AircraftCategory::FixedWing,
        takeoff_db: 76.0,
        approach_db: 73.0,
        lateral_epnl: None,
        flyover_epnl: None,
        approach_epnl: None,
    },
    CatalogEntry {
        type_code: "P28A",
        manufacturer: "Piper",
        model: "PA-28 Cherokee",
        category: AircraftCategory::FixedWing,
        takeoff_db: 73.0,
        approach_db: 71.0,
        lateral_epnl: None,
        flyover_epnl: None,
        approach_epnl: None,
    },
    CatalogEntry {
        type_code: "PC12",
        manufacturer: "Pilatus",
        model: "PC-12",
        category: AircraftCategory::FixedWing,
        takeoff_db: 79.0,
        approach_db: 76.0,
        lateral_epnl: None,
        flyover_epnl: Some(78.6),
        approach_epnl: None,
    },
    CatalogEntry {
        type_code: "B350",
        manufacturer: "Beechcraft",
        model: "King Air 350",
        category: AircraftCategory::FixedWing,
        takeoff_db: 80.0,
        approach_db: 77.0,
        lateral_epnl: None,
        flyover_epnl: Some(79.8),
        approach_epnl: None,
    },
    CatalogEntry {
        type_code: "TBM9",
        manufacturer: "Daher",
        model: "TBM 900",
        category: AircraftCategory::FixedWing,
        takeoff_db: 78.0,
        approach_db: 75.0,
        lateral_epnl: None,
        flyover_epnl: Some(77.9),
        approach_epnl: None,
    },
    CatalogEntry {
        type_code: "DA40",
        manufacturer: "Diamond",
        model: "DA40 Star",
        category: AircraftCategory::FixedWing,
        takeoff_db: 70.0,
        approach_db: 68.0,
        lateral_epnl: None,
        flyover_epnl: None,
        approach_epnl: None,
    },
    CatalogEntry {
        type_code: "BE36",
        manufacturer: "Beechcraft",
        model: "Bonanza 36",
        category: AircraftCategory::FixedWing,
        takeoff_db: 75.0,
        approach_db: 72.0,
        lateral_epnl: None,
        flyover_epnl: None,
        approach_epnl: None,
    },
];

// Field measurement campaigns. Headline dB values here are trusted over the
// certification catalog; certification metrics (EPNL) never come from the
// field and stay with the certified record.
const MEASURED_RECORDS: &[MeasuredRecord] = &[
    MeasuredRecord {
        type_code: "S76",
        year: 2019,
        takeoff_db: 88.9,
        approach_db: 85.8,
    },
    MeasuredRecord {
        type_code: "S76",
        year: 2023,
        takeoff_db: 89.4,
        approach_db: 86.1,
    },
    MeasuredRecord {
        type_code: "R44",
        year: 2022,
        takeoff_db: 81.7,
        approach_db: 78.9,
    },
    MeasuredRecord {
        type_code: "A139",
        year: 2023,
        takeoff_db: 90.2,
        approach_db: 87.0,
    },
    MeasuredRecord {
        type_code: "GLF4",
        year: 2021,
        takeoff_db: 90.1,
        approach_db: 85.6,
    },
];

/// Certification catalog keyed by upper-cased type code.
pub static CERTIFIED: Lazy<HashMap<&'static str, &'static CatalogEntry>> = Lazy::new(|| {
    CERTIFIED_ENTRIES
        .iter()
        .map(|entry| (entry.type_code, entry))
        .collect()
});

/// Certified record for a (normalized) type code.
pub fn certified_entry(type_code: &str) -> Option<&'static CatalogEntry> {
    CERTIFIED.get(type_code).copied()
}

/// Most recent measurement record for a (normalized) type code.
pub fn latest_measurement(type_code: &str) -> Option<&'static MeasuredRecord> {
    MEASURED_RECORDS
        .iter()
        .filter(|record| record.type_code == type_code)
        .max_by_key(|record| record.year)
}

// ICAO type designator sets for category classification. Covers the common
// types seen at GA airports; anything unlisted classifies as unknown.
const HELICOPTER_TYPE_CODES: &[&str] = &[
    // Robinson
    "R22", "R44", "R66",
    // Airbus Helicopters
    "EC20", "EC30", "EC35", "EC45", "EC55", "EC75", "AS50", "AS55", "AS65",
    "H125", "H130", "H135", "H145", "H155", "H160", "H175",
    // Bell
    "B06", "B06T", "B205", "B206", "B212", "B407", "B412", "B427", "B429",
    "B430", "B505",
    // Sikorsky
    "S58", "S61", "S70", "S76", "S92", "H60",
    // Leonardo
    "A109", "A119", "A139", "A149", "A169", "A189", "AW09",
    // MD / Schweizer / Enstrom
    "MD52", "MD60", "EXPL", "H369", "H500", "S269", "S300", "S333", "EN28",
    "EN48",
    // Generic
    "HELI",
];

const JET_TYPE_CODES: &[&str] = &[
    // Gulfstream
    "GLF2", "GLF3", "GLF4", "GLF5", "GLF6", "G150", "G280", "G450", "G550",
    "G650",
    // Bombardier
    "CL30", "CL35", "CL60", "GL5T", "GL6T", "GL7T", "GLEX", "LJ31", "LJ35",
    "LJ45", "LJ60", "LJ75",
    // Cessna Citation
    "C500", "C510", "C525", "C550", "C560", "C56X", "C650", "C680", "C700",
    "C750",
    // Dassault
    "FA10", "FA20", "FA50", "FA7X", "FA8X", "F900", "F2TH", "FA6X",
    // Embraer
    "E135", "E145", "E50P", "E55P", "E545", "E550",
    // Others
    "PC24", "HDJT", "EA50", "SF50", "PRM1", "H25A", "H25B", "AJET",
];

const FIXED_WING_TYPE_CODES: &[&str] = &[
    // Cessna
    "C150", "C152", "C172", "C177", "C182", "C206", "C208", "C210", "C310",
    "C337", "C340", "C414", "C441",
    // Piper
    "P28A", "P28R", "P28T", "PA18", "PA23", "PA24", "PA28", "PA31", "PA32",
    "PA34", "PA44", "PA46",
    // Beechcraft
    "BE33", "BE35", "BE36", "BE55", "BE58", "BE76", "BE9L", "BE20", "B200",
    "B300", "B350",
    // Mooney / Cirrus / Diamond
    "M20J", "M20K", "M20R", "SR20", "SR22", "DA20", "DA40", "DA42", "DA62",
    // Turboprop singles
    "PC12", "TBM7", "TBM8", "TBM9",
    // de Havilland
    "DHC2", "DHC3", "DHC6",
];

static HELICOPTER_TYPES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HELICOPTER_TYPE_CODES.iter().copied().collect());
static JET_TYPES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| JET_TYPE_CODES.iter().copied().collect());
static FIXED_WING_TYPES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| FIXED_WING_TYPE_CODES.iter().copied().collect());

/// Classify an ICAO type designator into a dashboard category.
///
/// Empty or unrecognized codes classify as `Unknown`; no heuristic pattern
/// matching is attempted for unlisted codes.
pub fn classify(type_code: &str) -> AircraftCategory {
    let code = type_code.trim().to_ascii_uppercase();
    if code.is_empty() {
        return AircraftCategory::Unknown;
    }
    if HELICOPTER_TYPES.contains(code.as_str()) {
        AircraftCategory::Helicopter
    } else if JET_TYPES.contains(code.as_str()) {
        AircraftCategory::Jet
    } else if FIXED_WING_TYPES.contains(code.as_str()) {
        AircraftCategory::FixedWing
    } else {
        AircraftCategory::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_known_types() {
        assert_eq!(classify("S76"), AircraftCategory::Helicopter);
        assert_eq!(classify("GLF5"), AircraftCategory::Jet);
        assert_eq!(classify("C172"), AircraftCategory::FixedWing);
        assert_eq!(classify("ZZZZ"), AircraftCategory::Unknown);
        assert_eq!(classify(""), AircraftCategory::Unknown);
    }

    #[test]
    fn classify_normalizes_case_and_whitespace() {
        assert_eq!(classify(" s76 "), AircraftCategory::Helicopter);
        assert_eq!(classify("glf5"), AircraftCategory::Jet);
    }

    #[test]
    fn every_certified_entry_classifies_to_its_category() {
        for entry in CERTIFIED_ENTRIES {
            assert_eq!(
                classify(entry.type_code),
                entry.category,
                "catalog/classification disagree on {}",
                entry.type_code
            );
        }
    }

    #[test]
    fn certified_approach_never_exceeds_takeoff() {
        for entry in CERTIFIED_ENTRIES {
            assert!(
                entry.approach_db <= entry.takeoff_db,
                "{} approach {} > takeoff {}",
                entry.type_code,
                entry.approach_db,
                entry.takeoff_db
            );
        }
    }

    #[test]
    fn latest_measurement_picks_most_recent_year() {
        let record = latest_measurement("S76").unwrap();
        assert_eq!(record.year, 2023);
        assert!((record.takeoff_db - 89.4).abs() < 1e-9);
    }

    #[test]
    fn latest_measurement_missing_type() {
        assert!(latest_measurement("C172").is_none());
        assert!(latest_measurement("ZZZZ").is_none());
    }

    #[test]
    fn noise_class_bands() {
        assert_eq!(noise_class_for(72.0), NoiseClass::Quiet);
        assert_eq!(noise_class_for(80.0), NoiseClass::Moderate);
        assert_eq!(noise_class_for(88.0), NoiseClass::Loud);
        assert_eq!(noise_class_for(92.0), NoiseClass::VeryLoud);
    }

    #[test]
    fn category_averages_match_reference_constants() {
        assert!((category_average(AircraftCategory::Helicopter).default_db - 84.0).abs() < 1e-9);
        assert!((category_average(AircraftCategory::Jet).default_db - 88.0).abs() < 1e-9);
        assert!((category_average(AircraftCategory::FixedWing).default_db - 76.0).abs() < 1e-9);
        assert!((category_average(AircraftCategory::Unknown).default_db - 80.0).abs() < 1e-9);
    }
}
