//! noise-report - exercise the noise engine from a terminal.
//!
//! Usage:
//!   noise-report profile S76
//!   noise-report estimate GLF5 --direction departure --altitude 1200
//!   noise-report ladder S76 --direction arrival
//!   noise-report conditions --wind-dir 270 --wind-speed 20 --inversion strong
//!   noise-report index flights.json

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use noise_core::{
    altitude_profile, estimate_at_altitude, estimate_for_flight, noise_index,
    propagation_conditions, resolve, FlightDirection, FlightOp, InversionStrength,
    TemperatureProfile, WindConditions,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Aircraft noise estimation reports")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the noise profile for an aircraft type code
    Profile {
        /// ICAO type designator (e.g. S76, GLF5)
        type_code: String,
    },
    /// Point noise estimate for a type at an altitude or path position
    Estimate {
        type_code: String,
        #[arg(long, default_value = "arrival")]
        direction: FlightDirection,
        /// Altitude in feet; mutually exclusive with --path-fraction
        #[arg(long, conflicts_with = "path_fraction")]
        altitude: Option<f64>,
        /// Fractional position along the path, 0 = origin, 1 = destination
        #[arg(long, default_value_t = 0.5)]
        path_fraction: f64,
    },
    /// Estimated levels at the standard reference altitudes
    Ladder {
        type_code: String,
        #[arg(long, default_value = "departure")]
        direction: FlightDirection,
    },
    /// Ambient propagation conditions report
    Conditions {
        /// Wind direction (degrees the wind blows from)
        #[arg(long, default_value_t = 0.0)]
        wind_dir: f64,
        #[arg(long, default_value_t = 0.0)]
        wind_speed: f64,
        /// Inversion strength: none, weak, moderate, strong
        #[arg(long, default_value = "none")]
        inversion: InversionStrength,
        #[arg(long, default_value_t = 60.0)]
        surface_temp: f64,
    },
    /// Fleet rollup over a JSON flight list
    Index {
        /// JSON file: [{"type_code": "S76", "direction": "arrival"}, ...]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Command::Profile { type_code } => {
            let profile = resolve(&type_code);
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        Command::Estimate {
            type_code,
            direction,
            altitude,
            path_fraction,
        } => {
            let estimate = match altitude {
                Some(altitude_ft) => estimate_at_altitude(&type_code, direction, altitude_ft),
                None => {
                    debug!(path_fraction, "using phase model altitude");
                    let flight = FlightOp {
                        type_code,
                        direction,
                        altitude_ft: None,
                    };
                    estimate_for_flight(&flight, path_fraction)
                }
            };
            println!("{}", serde_json::to_string_pretty(&estimate)?);
        }
        Command::Ladder {
            type_code,
            direction,
        } => {
            let profile = resolve(&type_code);
            let ladder = altitude_profile(profile.base_db(direction));
            println!(
                "{} ({:?}, source {:?}):",
                profile.type_code, direction, profile.data_source
            );
            for level in ladder {
                println!("  {:>6.0} ft  {:>5.1} dB", level.altitude_ft, level.db);
            }
        }
        Command::Conditions {
            wind_dir,
            wind_speed,
            inversion,
            surface_temp,
        } => {
            let wind = WindConditions {
                direction_deg: wind_dir,
                speed_kt: wind_speed,
            };
            let profile = TemperatureProfile {
                surface_temp_f: surface_temp,
                inversion_present: inversion != InversionStrength::None,
                inversion_strength: inversion,
                inversion_base_ft: None,
                inversion_top_ft: None,
            };
            let conditions = propagation_conditions(&wind, &profile);
            println!("{}", serde_json::to_string_pretty(&conditions)?);
        }
        Command::Index { file } => {
            let raw = fs::read_to_string(&file)
                .with_context(|| format!("reading flight list {}", file.display()))?;
            let flights: Vec<FlightOp> =
                serde_json::from_str(&raw).context("parsing flight list JSON")?;
            let index = noise_index(&flights);
            println!("{}", serde_json::to_string_pretty(&index)?);
        }
    }

    Ok(())
}
