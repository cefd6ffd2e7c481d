use crate::domain::model::{ReportFormat, RoomSurvey, SupplyParams};
use crate::utils::error::Result;

/// Destination for rendered reports. The engine never touches the filesystem
/// directly; everything it writes goes through this seam.
pub trait ReportSink {
    fn write_report(&self, name: &str, data: &[u8]) -> Result<()>;
}

/// Everything the advisor engine needs to know about one survey job.
pub trait JobProvider {
    fn job_name(&self) -> &str;
    fn survey(&self) -> &RoomSurvey;
    fn supply(&self) -> Option<&SupplyParams>;
    fn formats(&self) -> &[ReportFormat];
    fn file_stem(&self) -> &str;
}
