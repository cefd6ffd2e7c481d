pub mod advisor;
pub mod refrigerant;
pub mod report;
pub mod sizing;
pub mod thermal;

pub use crate::domain::model::{AdvisoryReport, SizingInput, SizingResult};
pub use crate::domain::ports::{JobProvider, ReportSink};
pub use crate::utils::error::Result;
