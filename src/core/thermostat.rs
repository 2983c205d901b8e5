use crate::climate::Climate;
use crate::core::controls::hysteresis::OnOffHysteresisControl;
use crate::core::heating_systems::furnace::Furnace;
use crate::core::space_heat_demand::building::Building;
use crate::errors::SimulationError;
use tracing::warn;

/// This module provides the thermostat, the orchestrator that advances the
/// building, furnace and climate models in lockstep over fixed time steps.

/// The state of the model after one completed tick, as seen by drivers and
/// observers. The exterior temperature is the one sampled at the start of the
/// step; the interior temperature and furnace state are those at its end.
#[derive(Clone, Copy, Debug)]
pub struct TickSnapshot {
    /// simulated time at the start of the step, in seconds
    pub time: f64,
    /// exterior air temperature used for the step, in deg C
    pub external_temp: f64,
    /// building temperature after the step, in deg C
    pub internal_temp: f64,
    /// whether the furnace is burning after the control decision
    pub furnace_on: bool,
}

pub struct Thermostat {
    building: Building,
    furnace: Furnace,
    climate: Climate,
    control: OnOffHysteresisControl,
    /// length of one simulation step, in seconds
    tick_size: f64,
    /// current simulated time, in seconds
    clock: f64,
}

impl Thermostat {
    /// Arguments:
    /// * `building` - the thermal-mass model to heat
    /// * `furnace` - the heat source under control
    /// * `climate` - exterior temperature as a function of time
    /// * `control` - on/off policy evaluated against the building temperature
    /// * `tick_size` - simulation step, in seconds (must be positive)
    pub fn new(
        building: Building,
        furnace: Furnace,
        climate: Climate,
        control: OnOffHysteresisControl,
        tick_size: f64,
    ) -> Result<Self, SimulationError> {
        if tick_size <= 0. {
            return Err(SimulationError::InvalidTickSize(tick_size));
        }
        let stability = building.eflux() * tick_size;
        if stability >= 1. {
            // the explicit external-flux update diverges in this regime
            warn!(
                eflux = building.eflux(),
                tick_size, "eflux * tick_size = {stability} >= 1; external flux update is unstable"
            );
            debug_assert!(
                stability < 1.,
                "eflux * tick_size must be below 1 for a stable external flux update"
            );
        }
        Ok(Self {
            building,
            furnace,
            climate,
            control,
            tick_size,
            clock: 0.,
        })
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn tick_size(&self) -> f64 {
        self.tick_size
    }

    pub fn building(&self) -> &Building {
        &self.building
    }

    pub fn furnace(&self) -> &Furnace {
        &self.furnace
    }

    pub fn climate(&self) -> &Climate {
        &self.climate
    }

    /// Advance the simulation by one step: exchange heat with the exterior at
    /// the start-of-step temperature, apply the furnace output, let the
    /// control toggle the furnace, then advance the clock. The clock moves by
    /// exactly `tick_size` regardless of the control outcome.
    pub fn tick(&mut self) -> TickSnapshot {
        let dt = self.tick_size;
        let external_temp = self.climate.air_temp(self.clock);
        self.building.extern_flux_tick(external_temp, dt);
        let furnace_output = self.furnace.output(dt);
        self.building.intern_flux_tick(furnace_output);
        if self
            .control
            .required_state(self.building.temperature(), self.furnace.is_on())
        {
            self.furnace.turn_on(self.clock);
        } else {
            self.furnace.turn_off(self.clock);
        }
        let snapshot = TickSnapshot {
            time: self.clock,
            external_temp,
            internal_temp: self.building.temperature(),
            furnace_on: self.furnace.is_on(),
        };
        self.clock += dt;
        snapshot
    }

    /// End the run, flushing any in-progress burn into the furnace's fuel
    /// account at the current clock.
    pub fn shutdown(&mut self) {
        self.furnace.turn_off(self.clock);
    }
}
