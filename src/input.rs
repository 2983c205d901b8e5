use crate::core::units::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::simulation_time::SimulationTime;
use anyhow::Context;
use serde::Deserialize;
use std::io::Read;

/// This module provides the deserialized shape of a simulation run request.
/// Every section and field is optional; anything omitted falls back to the
/// built-in default parameter set, so an empty document runs the default scenario.

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationInput {
    pub simulation_time: SimulationTimeInput,
    pub building: BuildingInput,
    pub furnace: FurnaceInput,
    pub climate: ClimateInput,
    pub control: ControlInput,
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationTimeInput {
    /// end of the run, in seconds of simulated time
    pub end: f64,
    /// tick size, in seconds
    pub step: f64,
}

impl Default for SimulationTimeInput {
    fn default() -> Self {
        Self {
            end: SECONDS_PER_DAY as f64,
            step: SECONDS_PER_MINUTE as f64,
        }
    }
}

impl From<SimulationTimeInput> for SimulationTime {
    fn from(input: SimulationTimeInput) -> Self {
        SimulationTime::new(input.end, input.step)
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildingInput {
    /// initial average building temperature, in deg C
    pub temperature: f64,
    /// external heat-transfer coefficient, per second
    pub eflux: f64,
    /// thermal capacity, in J per deg C
    pub specific_heat: f64,
}

impl Default for BuildingInput {
    fn default() -> Self {
        Self {
            temperature: 20.,
            eflux: 1e-4,
            specific_heat: 1e6,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FurnaceInput {
    /// heat released per unit of fuel, in J
    pub joules_per_fuel: f64,
    /// fuel burned per second while on
    pub burn_rate_per_second: f64,
    /// fuel overhead charged once per activation
    pub startup_use: f64,
}

impl Default for FurnaceInput {
    fn default() -> Self {
        Self {
            joules_per_fuel: 1e4,
            burn_rate_per_second: 1.0,
            startup_use: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClimateInput {
    pub min_temp: f64,
    pub max_temp: f64,
    /// time of the daily minimum, in seconds from the start of the cycle
    pub min_time_of_day: f64,
    /// cycle length, in seconds
    pub period: f64,
}

impl Default for ClimateInput {
    fn default() -> Self {
        Self {
            min_temp: -10.,
            max_temp: 10.,
            min_time_of_day: (6 * SECONDS_PER_HOUR) as f64,
            period: SECONDS_PER_DAY as f64,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControlInput {
    /// target building temperature, in deg C
    pub setpoint: f64,
    /// hysteresis half-width around the setpoint, in deg C
    pub deadband: f64,
}

impl Default for ControlInput {
    fn default() -> Self {
        Self {
            setpoint: 20.,
            deadband: 1.0,
        }
    }
}

pub fn ingest_simulation_input(input: impl Read) -> anyhow::Result<SimulationInput> {
    serde_json::from_reader(input).context("Could not parse simulation input as JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    pub fn should_run_default_scenario_from_empty_document() {
        let input = ingest_simulation_input("{}".as_bytes()).unwrap();
        assert_eq!(input.building.temperature, 20.);
        assert_eq!(input.building.eflux, 1e-4);
        assert_eq!(input.building.specific_heat, 1e6);
        assert_eq!(input.furnace.joules_per_fuel, 1e4);
        assert_eq!(input.furnace.burn_rate_per_second, 1.0);
        assert_eq!(input.furnace.startup_use, 1.0);
        assert_eq!(input.climate.min_temp, -10.);
        assert_eq!(input.climate.max_temp, 10.);
        assert_eq!(input.climate.min_time_of_day, 21_600.);
        assert_eq!(input.climate.period, 86_400.);
        assert_eq!(input.control.setpoint, 20.);
        assert_eq!(input.control.deadband, 1.0);
        assert_eq!(input.simulation_time.end, 86_400.);
        assert_eq!(input.simulation_time.step, 60.);
    }

    #[rstest]
    pub fn should_merge_partial_overrides_with_defaults() {
        let document = r#"{
            "building": { "temperature": 15.5 },
            "control": { "deadband": 0.25 },
            "simulation_time": { "end": 3600.0 }
        }"#;
        let input = ingest_simulation_input(document.as_bytes()).unwrap();
        assert_eq!(input.building.temperature, 15.5);
        assert_eq!(input.building.eflux, 1e-4);
        assert_eq!(input.control.setpoint, 20.);
        assert_eq!(input.control.deadband, 0.25);
        assert_eq!(input.simulation_time.end, 3_600.);
        assert_eq!(input.simulation_time.step, 60.);
    }

    #[rstest]
    pub fn should_reject_unknown_fields() {
        assert!(ingest_simulation_input(r#"{ "boiler": {} }"#.as_bytes()).is_err());
        assert!(
            ingest_simulation_input(r#"{ "furnace": { "pilot_light": true } }"#.as_bytes()).is_err()
        );
    }
}
