//! Report rendering. Pure string/byte producers; writing is the sink's job.

use crate::core::sizing::size_supply_circuit;
use crate::domain::model::{AdvisoryReport, SizingInput};
use crate::utils::error::Result;

/// Plain-text advisory, the format technicians read on site.
pub fn render_text(report: &AdvisoryReport) -> String {
    let estimate = &report.estimate;
    let breakdown = &estimate.breakdown;
    let mut out = String::new();

    out.push_str(&format!("Survey advisory: {}\n", report.job));
    out.push_str(&format!(
        "Generated: {}\n\n",
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    out.push_str(&format!(
        "Floor area: {:.1} m2   Volume: {:.1} m3\n\n",
        estimate.area_m2, estimate.volume_m3
    ));

    out.push_str("Heat-gain breakdown (BTU/h)\n");
    for (label, value) in [
        ("Conduction (walls/ceiling)", breakdown.conduction),
        ("Solar gain (windows)", breakdown.solar),
        ("Occupants", breakdown.occupants),
        ("Equipment", breakdown.equipment),
        ("Stove", breakdown.stove),
        ("Lighting", breakdown.lighting),
        ("Infiltration", breakdown.infiltration),
    ] {
        if value > 0.0 {
            out.push_str(&format!("  {:<28} {:>8.0}\n", label, value));
        }
    }
    out.push_str(&format!("  {:<28} {:>8.0}\n", "Subtotal", estimate.subtotal_btu));
    out.push_str(&format!(
        "  {:<28} {:>8.0}\n\n",
        "TOTAL (x1.10 safety factor)", estimate.total_btu
    ));

    out.push_str(&format!(
        "Recommended equipment: {} ({} BTU commercial rating)\n",
        estimate.recommendation.tonnage, estimate.recommendation.commercial_btu
    ));

    if let Some(circuit) = &report.circuit {
        out.push_str(&format!(
            "\nSupply circuit ({}, {}, {}):\n",
            circuit.input.voltage, circuit.input.technology, circuit.input.distance
        ));
        out.push_str(&format!("  Wire:    {}\n", circuit.result.wire_gauge));
        out.push_str(&format!("  Breaker: {}\n", circuit.result.breaker));
        if let Some(note) = &circuit.result.note {
            out.push_str(&format!("  CAUTION: {}\n", note));
        }
    }

    if !report.recommendations.is_empty() {
        out.push_str("\nRecommendations:\n");
        for advice in &report.recommendations {
            out.push_str(&format!("  - {}\n", advice));
        }
    }

    out
}

/// Machine-readable advisory.
pub fn render_json(report: &AdvisoryReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Breakdown table as CSV, one heat-gain term per row.
pub fn render_breakdown_csv(report: &AdvisoryReport) -> Result<String> {
    let breakdown = &report.estimate.breakdown;
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["term", "btu_per_hour"])?;
    for (term, value) in [
        ("conduction", breakdown.conduction),
        ("solar", breakdown.solar),
        ("occupants", breakdown.occupants),
        ("equipment", breakdown.equipment),
        ("stove", breakdown.stove),
        ("lighting", breakdown.lighting),
        ("infiltration", breakdown.infiltration),
    ] {
        writer.write_record([term.to_string(), format!("{:.0}", value)])?;
    }
    writer.write_record(["subtotal".to_string(), format!("{:.0}", report.estimate.subtotal_btu)])?;
    writer.write_record(["total".to_string(), format!("{:.0}", report.estimate.total_btu)])?;
    finish(writer)
}

/// The whole supply-circuit decision table as CSV, one row per input tuple.
/// This is the audit artifact: 32 rows, nothing hidden in branches.
pub fn render_sizing_matrix_csv() -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "capacity",
        "voltage",
        "technology",
        "distance",
        "wire_gauge",
        "breaker",
        "note",
    ])?;
    for input in SizingInput::all() {
        let result = size_supply_circuit(input);
        writer.write_record([
            input.capacity.to_string(),
            input.voltage.to_string(),
            input.technology.to_string(),
            input.distance.to_string(),
            result.wire_gauge.to_string(),
            result.breaker.to_string(),
            result.note.clone().unwrap_or_default(),
        ])?;
    }
    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let buffer = writer
        .into_inner()
        .map_err(|e| crate::utils::error::AdvisorError::IoError(e.into_error()))?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
