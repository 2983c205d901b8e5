use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use thermosim::core::units::seconds_to_minutes;
use thermosim::input::{ingest_simulation_input, SimulationInput};
use thermosim::output::FileOutput;
use thermosim::{write_results_file, Simulation};

#[derive(Parser, Default, Debug)]
#[clap(author, version, about, long_about = None)]
struct SimArgs {
    /// JSON run configuration; built-in defaults are used when omitted
    input_file: Option<String>,
    /// override the end of the run, in seconds of simulated time
    #[arg(long, short)]
    end_time: Option<f64>,
    /// directory to write the per-tick results CSV into
    #[arg(long, short)]
    output_dir: Option<PathBuf>,
    /// suppress the per-tick report lines
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = SimArgs::parse();

    let mut input = match &args.input_file {
        Some(path) => ingest_simulation_input(BufReader::new(
            File::open(path).with_context(|| format!("Could not open input file {path}"))?,
        ))?,
        None => SimulationInput::default(),
    };
    if let Some(end_time) = args.end_time {
        input.simulation_time.end = end_time;
    }
    let tick_size = input.simulation_time.step;

    let mut simulation = Simulation::from_input(input)?;
    let results = simulation.run_with_observer(|snapshot| {
        if !args.quiet {
            // report lines carry end-of-step time, in minutes
            println!(
                "min: {} outside: {} inside: {} furnace: {}",
                seconds_to_minutes(snapshot.time + tick_size),
                snapshot.external_temp,
                snapshot.internal_temp,
                if snapshot.furnace_on { "on" } else { "off" }
            );
        }
    });
    println!("Used fuel: {}", results.fuel_burned);

    if let Some(output_dir) = args.output_dir {
        let output = FileOutput::new(output_dir, "thermosim".to_string());
        write_results_file(&output, &results)?;
    }

    Ok(())
}
