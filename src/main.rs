use clap::Parser;
use clima_tools::config::{Cli, Command};
use clima_tools::core::report::render_sizing_matrix_csv;
use clima_tools::core::{refrigerant, sizing, thermal, ReportSink};
use clima_tools::domain::model::SizingInput;
use clima_tools::utils::validation::Validate;
use clima_tools::utils::{logger, validation};
use clima_tools::{AdvisorEngine, AdvisorError, LocalReportSink, SurveyJob};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI args: {:?}", cli);

    let outcome = match cli.command {
        Command::Wire {
            capacity,
            voltage,
            technology,
            distance,
            json,
        } => run_wire(
            SizingInput {
                capacity,
                voltage,
                technology,
                distance,
            },
            json,
        ),
        Command::Load {
            length,
            width,
            zone,
            json,
        } => run_load(length, width, zone, json),
        Command::Survey { file, output } => run_survey(&file, output),
        Command::Pt { gas, temp, json } => run_pt(gas, temp, json),
        Command::Matrix { output } => run_matrix(&output),
    };

    if let Err(e) = outcome {
        tracing::error!("Command failed: {}", e);
        eprintln!("\u{274c} {}", e.user_friendly_message());
        eprintln!("\u{1f4a1} {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    Ok(())
}

fn run_wire(input: SizingInput, json: bool) -> Result<(), AdvisorError> {
    let result = sizing::size_supply_circuit(input);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "{} / {} / {} / {}",
        input.capacity, input.voltage, input.technology, input.distance
    );
    println!("  Wire:    {}", result.wire_gauge);
    println!("  Breaker: {}", result.breaker);
    match &result.note {
        Some(note) => println!("  \u{26a0}\u{fe0f}  {}", note),
        None => println!("  \u{2705} Within standard installer guidelines."),
    }
    Ok(())
}

fn run_load(
    length: f64,
    width: f64,
    zone: clima_tools::domain::model::ClimateZone,
    json: bool,
) -> Result<(), AdvisorError> {
    let estimate = thermal::quick_estimate(length, width, zone)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
        return Ok(());
    }

    println!("Area: {:.1} m2 ({})", estimate.area_m2, zone);
    println!("Estimated load: {:.0} BTU/h", estimate.load_btu);
    println!(
        "Recommended equipment: {} ({} BTU commercial rating)",
        estimate.recommendation.tonnage, estimate.recommendation.commercial_btu
    );
    Ok(())
}

fn run_survey(file: &str, output: Option<String>) -> Result<(), AdvisorError> {
    let job = SurveyJob::from_file(file)?;
    job.validate()?;

    let output_path = output.unwrap_or_else(|| job.output_path().to_string());
    let sink = LocalReportSink::new(output_path.clone());
    let engine = AdvisorEngine::new(sink);

    let written = engine.run(&job)?;

    println!("\u{2705} Survey advisory completed");
    for name in written {
        println!("\u{1f4c1} {}", Path::new(&output_path).join(name).display());
    }
    Ok(())
}

fn run_pt(
    gas: clima_tools::domain::model::Refrigerant,
    temp: f64,
    json: bool,
) -> Result<(), AdvisorError> {
    validation::validate_range("temp", temp, -20.0, 60.0)?;
    let band = refrigerant::suction_pressure(gas, temp);

    if json {
        println!("{}", serde_json::to_string_pretty(&band)?);
        return Ok(());
    }

    println!("{} at {:.1} \u{b0}C ambient:", gas, temp);
    println!("  Suction: {:.0}-{:.0} PSI", band.min_psi, band.max_psi);
    println!("           {:.1}-{:.1} bar", band.min_bar, band.max_bar);
    Ok(())
}

fn run_matrix(output: &str) -> Result<(), AdvisorError> {
    let csv = render_sizing_matrix_csv()?;
    let sink = LocalReportSink::new(output.to_string());
    sink.write_report("sizing_matrix.csv", csv.as_bytes())?;

    println!("\u{2705} Sizing matrix exported");
    println!(
        "\u{1f4c1} {}",
        Path::new(output).join("sizing_matrix.csv").display()
    );
    Ok(())
}
