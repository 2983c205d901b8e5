use crate::core::units::{SECONDS_PER_DAY, SECONDS_PER_HOUR};
use crate::errors::SimulationError;
use std::f64::consts::PI;

/// This module provides an idealised periodic climate which reports exterior
/// air temperature as a pure function of simulated time.

#[derive(Clone, Copy, Debug)]
pub struct Climate {
    min_temp: f64,
    max_temp: f64,
    min_time_of_day: f64,
    period: f64,
}

impl Climate {
    /// Arguments:
    /// * `min_temp` - coldest exterior air temperature over a cycle, in deg C
    /// * `max_temp` - warmest exterior air temperature over a cycle, in deg C
    /// * `min_time_of_day` - time at which the minimum occurs, in seconds from
    ///   the start of the cycle
    /// * `period` - length of one full cycle, in seconds (must be positive)
    pub fn new(
        min_temp: f64,
        max_temp: f64,
        min_time_of_day: f64,
        period: f64,
    ) -> Result<Self, SimulationError> {
        if period <= 0. {
            return Err(SimulationError::InvalidClimatePeriod(period));
        }
        Ok(Self {
            min_temp,
            max_temp,
            min_time_of_day,
            period,
        })
    }

    /// Return the exterior air temperature at simulated time `time` (in
    /// seconds), in deg C. Total for all finite times and periodic with
    /// `period`: the minimum falls at `min_time_of_day` (mod period) and the
    /// maximum half a period later.
    pub fn air_temp(&self, time: f64) -> f64 {
        let amplitude = self.max_temp - self.min_temp;
        let offset = (self.max_temp + self.min_temp) * 0.5;
        let phase = self.min_time_of_day;
        let scale = 2. * PI / self.period;
        offset + amplitude * 0.5 * (PI * 0.5 + scale * (phase + time)).sin()
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn min_temp(&self) -> f64 {
        self.min_temp
    }

    pub fn max_temp(&self) -> f64 {
        self.max_temp
    }
}

/// A 24-hour diurnal cycle between -10 and 10 deg C, coldest at 6am.
impl Default for Climate {
    fn default() -> Self {
        Self {
            min_temp: -10.,
            max_temp: 10.,
            min_time_of_day: (6 * SECONDS_PER_HOUR) as f64,
            period: SECONDS_PER_DAY as f64,
        }
    }
}
