mod climate;
pub mod core;
pub mod corpus;
mod errors;
pub mod input;
pub mod output;
mod simulation_time;

pub use crate::climate::Climate;
pub use crate::corpus::{RunResults, Simulation};
pub use crate::errors::SimulationError;
pub use crate::simulation_time::SimulationTime;

use crate::input::ingest_simulation_input;
use crate::output::Output;
use csv::WriterBuilder;
use std::io::Read;

/// Run a simulation described by a JSON input document and write the
/// per-tick results CSV through `output` (skipped for no-op outputs).
pub fn run_simulation(input: impl Read, output: impl Output) -> anyhow::Result<RunResults> {
    let input = ingest_simulation_input(input)?;
    let mut simulation = Simulation::from_input(input)?;
    let results = simulation.run();

    if !output.is_noop() {
        write_results_file(&output, &results)?;
    }

    Ok(results)
}

/// Write the per-tick series as CSV with a heading row and a units row.
pub fn write_results_file(output: &impl Output, results: &RunResults) -> anyhow::Result<()> {
    let writer = output.writer_for_result_key("results")?;
    let mut writer = WriterBuilder::new().from_writer(writer);

    writer.write_record([
        "Timestep",
        "Time",
        "External temperature",
        "Internal temperature",
        "Furnace",
    ])?;
    writer.write_record(["[count]", "[seconds]", "[deg C]", "[deg C]", "[on/off]"])?;

    for (t_idx, time) in results.timestamps.iter().enumerate() {
        writer.write_record(&[
            t_idx.to_string(),
            time.to_string(),
            results.external_temps[t_idx].to_string(),
            results.internal_temps[t_idx].to_string(),
            (if results.furnace_on[t_idx] { "on" } else { "off" }).to_string(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}
