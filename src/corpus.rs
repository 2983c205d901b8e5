use crate::climate::Climate;
use crate::core::controls::hysteresis::OnOffHysteresisControl;
use crate::core::heating_systems::furnace::Furnace;
use crate::core::space_heat_demand::building::Building;
use crate::core::thermostat::{Thermostat, TickSnapshot};
use crate::input::SimulationInput;
use crate::simulation_time::SimulationTime;
use itertools::Itertools;
use tracing::debug;

/// This module provides the driver that owns a thermostat and steps it over a
/// run window, collecting per-tick series for reporting. Reporting itself is
/// a collaborator: observers are injected and invoked after each tick, so the
/// kernel can also run headless.

/// Per-tick series and totals for a completed run.
#[derive(Clone, Debug)]
pub struct RunResults {
    /// start-of-step simulated times, in seconds
    pub timestamps: Vec<f64>,
    /// exterior air temperature sampled for each step, in deg C
    pub external_temps: Vec<f64>,
    /// building temperature at the end of each step, in deg C
    pub internal_temps: Vec<f64>,
    /// whether the furnace was burning at the end of each step
    pub furnace_on: Vec<bool>,
    /// total fuel consumed, including the end-of-run flush, in fuel units
    pub fuel_burned: f64,
}

impl RunResults {
    /// Number of burns over the run, counting a burn still in progress at the
    /// end of the run (it is flushed into the fuel total on shutdown).
    pub fn burn_cycles(&self) -> usize {
        let completed = self
            .furnace_on
            .iter()
            .tuple_windows()
            .filter(|(earlier, later)| **earlier && !**later)
            .count();
        match self.furnace_on.last() {
            Some(true) => completed + 1,
            _ => completed,
        }
    }

    /// Fraction of ticks the furnace spent burning.
    pub fn furnace_duty_fraction(&self) -> f64 {
        if self.furnace_on.is_empty() {
            return 0.;
        }
        self.furnace_on.iter().filter(|on| **on).count() as f64 / self.furnace_on.len() as f64
    }
}

pub struct Simulation {
    thermostat: Thermostat,
    simulation_time: SimulationTime,
}

impl Simulation {
    /// Build a runnable simulation from a deserialized input document,
    /// validating the run window and every model's configuration.
    pub fn from_input(input: SimulationInput) -> anyhow::Result<Self> {
        let simulation_time = SimulationTime::from(input.simulation_time).validated()?;
        let building = Building::new(
            input.building.temperature,
            input.building.eflux,
            input.building.specific_heat,
        );
        let furnace = Furnace::new(
            input.furnace.joules_per_fuel,
            input.furnace.burn_rate_per_second,
            input.furnace.startup_use,
        );
        let climate = Climate::new(
            input.climate.min_temp,
            input.climate.max_temp,
            input.climate.min_time_of_day,
            input.climate.period,
        )?;
        let control = OnOffHysteresisControl::new(input.control.setpoint, input.control.deadband)?;
        let thermostat = Thermostat::new(building, furnace, climate, control, simulation_time.step())?;
        Ok(Self {
            thermostat,
            simulation_time,
        })
    }

    pub fn thermostat(&self) -> &Thermostat {
        &self.thermostat
    }

    /// Run to the end of the window, then shut the furnace down so any burn
    /// still in progress is flushed into the fuel total.
    pub fn run(&mut self) -> RunResults {
        self.run_with_observer(|_| {})
    }

    /// As `run`, additionally invoking `observe` after every completed tick.
    pub fn run_with_observer(&mut self, mut observe: impl FnMut(&TickSnapshot)) -> RunResults {
        let total_steps = self.simulation_time.total_steps();
        let mut timestamps = Vec::with_capacity(total_steps);
        let mut external_temps = Vec::with_capacity(total_steps);
        let mut internal_temps = Vec::with_capacity(total_steps);
        let mut furnace_on = Vec::with_capacity(total_steps);

        while self.thermostat.clock() < self.simulation_time.end_time() {
            let snapshot = self.thermostat.tick();
            debug!(
                time = snapshot.time,
                external_temp = snapshot.external_temp,
                internal_temp = snapshot.internal_temp,
                furnace_on = snapshot.furnace_on,
                "tick complete"
            );
            observe(&snapshot);
            timestamps.push(snapshot.time);
            external_temps.push(snapshot.external_temp);
            internal_temps.push(snapshot.internal_temp);
            furnace_on.push(snapshot.furnace_on);
        }
        self.thermostat.shutdown();

        RunResults {
            timestamps,
            external_temps,
            internal_temps,
            furnace_on,
            fuel_burned: self.thermostat.furnace().fuel_burned(),
        }
    }
}
