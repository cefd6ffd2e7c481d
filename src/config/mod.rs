pub mod cli;
pub mod survey;

#[cfg(feature = "cli")]
use crate::domain::model::{Capacity, ClimateZone, Distance, Refrigerant, Technology, Voltage};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Parser)]
#[command(name = "clima-tools")]
#[command(about = "Field advisory toolkit for HVAC installs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Recommend supply wire gauge and breaker for one unit
    Wire {
        #[arg(long, help = "Unit capacity in tons: 1, 1.5, 2 or 3")]
        capacity: Capacity,

        #[arg(long, default_value = "220", help = "Supply voltage: 110 or 220")]
        voltage: Voltage,

        #[arg(long, default_value = "standard", help = "standard or inverter")]
        technology: Technology,

        #[arg(long, default_value = "short", help = "Run length: short (< 20 m) or long (20-50 m)")]
        distance: Distance,

        #[arg(long, help = "Emit JSON instead of text")]
        json: bool,
    },

    /// Quick thermal-load estimate from the room footprint
    Load {
        #[arg(long, help = "Room length in meters")]
        length: f64,

        #[arg(long, help = "Room width in meters")]
        width: f64,

        #[arg(long, default_value = "warm", help = "temperate, warm or very_warm")]
        zone: ClimateZone,

        #[arg(long, help = "Emit JSON instead of text")]
        json: bool,
    },

    /// Run a full survey job from a TOML file
    Survey {
        #[arg(long, help = "Path to the survey TOML file")]
        file: String,

        #[arg(long, help = "Override the job's report output directory")]
        output: Option<String>,
    },

    /// Expected suction pressure for a refrigerant at ambient temperature
    Pt {
        #[arg(long, help = "Refrigerant: r410a, r32 or r22")]
        gas: Refrigerant,

        #[arg(long, help = "Ambient temperature in degrees Celsius")]
        temp: f64,

        #[arg(long, help = "Emit JSON instead of text")]
        json: bool,
    },

    /// Export the full supply-circuit decision table as CSV
    Matrix {
        #[arg(long, default_value = "./reports", help = "Output directory")]
        output: String,
    },
}
