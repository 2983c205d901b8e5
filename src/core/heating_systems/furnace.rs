use strum::Display;

/// This module provides a model of a combustion furnace with a fixed heat
/// output while burning. Fuel consumption is booked against the furnace only
/// when it switches off, which keeps heat output and fuel accounting
/// decoupled within a burn.

/// Combustion state of the furnace. The switch-on time only exists while the
/// furnace is burning.
#[derive(Clone, Copy, Debug, Display, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum FurnaceState {
    Off,
    On {
        /// simulated time at which the current burn started, in seconds
        on_time: f64,
    },
}

#[derive(Clone, Copy, Debug)]
pub struct Furnace {
    state: FurnaceState,
    /// cumulative fuel consumed over all completed burns, in fuel units
    fuel_burned: f64,
    /// heat released per unit of fuel, in J
    joules_per_fuel: f64,
    /// fuel consumed per second while burning, in fuel units
    burn_rate_per_second: f64,
    /// fixed fuel overhead charged once per activation, in fuel units
    startup_use: f64,
}

impl Furnace {
    /// Arguments:
    /// * `joules_per_fuel` - heat released per unit of fuel burned, in J
    /// * `burn_rate_per_second` - fuel burned per second while on
    /// * `startup_use` - fuel wasted each time the furnace is switched on
    pub fn new(joules_per_fuel: f64, burn_rate_per_second: f64, startup_use: f64) -> Self {
        Self {
            state: FurnaceState::Off,
            fuel_burned: 0.,
            joules_per_fuel,
            burn_rate_per_second,
            startup_use,
        }
    }

    pub fn state(&self) -> FurnaceState {
        self.state
    }

    pub fn is_on(&self) -> bool {
        matches!(self.state, FurnaceState::On { .. })
    }

    pub fn fuel_burned(&self) -> f64 {
        self.fuel_burned
    }

    /// Start a burn at simulated time `time` (seconds). A no-op if the
    /// furnace is already on.
    pub fn turn_on(&mut self, time: f64) {
        if let FurnaceState::Off = self.state {
            self.state = FurnaceState::On { on_time: time };
        }
    }

    /// End the current burn at simulated time `time` (seconds), booking the
    /// startup overhead plus fuel for the burn duration. A no-op if the
    /// furnace is already off.
    pub fn turn_off(&mut self, time: f64) {
        if let FurnaceState::On { on_time } = self.state {
            self.fuel_burned += self.startup_use + (time - on_time) * self.burn_rate_per_second;
            self.state = FurnaceState::Off;
        }
    }

    /// Report heat output over a step of `dt` seconds, in J: zero while off,
    /// otherwise a constant rate. A pure query with no effect on fuel
    /// accounting.
    pub fn output(&self, dt: f64) -> f64 {
        match self.state {
            FurnaceState::On { .. } => dt * self.burn_rate_per_second * self.joules_per_fuel,
            FurnaceState::Off => 0.,
        }
    }
}
