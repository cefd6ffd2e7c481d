//! Survey job engine: estimate, pick equipment, size the circuit, render
//! and write the requested report formats.

use crate::core::report::{render_breakdown_csv, render_json, render_text};
use crate::core::sizing::size_supply_circuit;
use crate::core::thermal;
use crate::core::{JobProvider, ReportSink};
use crate::domain::model::{
    AdvisoryReport, Capacity, CircuitAdvice, ReportFormat, SizingInput,
};
use crate::utils::error::Result;

pub struct AdvisorEngine<S: ReportSink> {
    sink: S,
}

impl<S: ReportSink> AdvisorEngine<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Runs one survey job end to end. Returns the report file names that
    /// were written through the sink.
    pub fn run<J: JobProvider>(&self, job: &J) -> Result<Vec<String>> {
        let started = std::time::Instant::now();
        tracing::info!("Running survey job '{}'", job.job_name());

        let estimate = thermal::estimate_survey(job.survey())?;
        tracing::info!(
            "Estimated load: {:.0} BTU/h, recommending {}",
            estimate.total_btu,
            estimate.recommendation.tonnage
        );

        let mut recommendations = thermal::recommendations(&estimate);

        let circuit = match job.supply() {
            Some(supply) => match Capacity::from_tonnage(estimate.recommendation.tonnage) {
                Some(capacity) => {
                    let input = SizingInput {
                        capacity,
                        voltage: supply.voltage,
                        technology: supply.technology,
                        distance: supply.run,
                    };
                    let result = size_supply_circuit(input);
                    tracing::debug!(
                        "Circuit advice: {} / {}",
                        result.wire_gauge,
                        result.breaker
                    );
                    Some(CircuitAdvice { input, result })
                }
                None => {
                    tracing::warn!(
                        "Recommended capacity {} is beyond the single-circuit advisory range",
                        estimate.recommendation.tonnage
                    );
                    recommendations.push(format!(
                        "No single-circuit wiring advice for {} of capacity; size each \
                         unit's branch circuit separately.",
                        estimate.recommendation.tonnage
                    ));
                    None
                }
            },
            None => None,
        };

        let report = AdvisoryReport {
            job: job.job_name().to_string(),
            generated_at: chrono::Utc::now(),
            estimate,
            recommendations,
            circuit,
        };

        let mut written = Vec::new();
        for format in job.formats() {
            let name = format!("{}.{}", job.file_stem(), format.extension());
            let data = match format {
                ReportFormat::Text => render_text(&report).into_bytes(),
                ReportFormat::Json => render_json(&report)?.into_bytes(),
                ReportFormat::Csv => render_breakdown_csv(&report)?.into_bytes(),
            };
            self.sink.write_report(&name, &data)?;
            tracing::debug!("Wrote {} ({} bytes)", name, data.len());
            written.push(name);
        }

        tracing::info!(
            "Survey job '{}' finished in {:?}",
            job.job_name(),
            started.elapsed()
        );
        Ok(written)
    }
}
