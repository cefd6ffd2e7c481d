pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{Cli, Command};

pub use config::cli::LocalReportSink;
pub use config::survey::SurveyJob;
pub use core::advisor::AdvisorEngine;
pub use core::refrigerant::suction_pressure;
pub use core::sizing::size_supply_circuit;
pub use core::thermal::{estimate_survey, quick_estimate};
pub use utils::error::{AdvisorError, Result};
