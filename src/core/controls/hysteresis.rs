use crate::errors::SimulationError;

/// This module provides an on/off control with hysteresis around a setpoint,
/// used to decide whether a heat source should be burning.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OnOffHysteresisControl {
    /// target temperature, in deg C
    setpoint: f64,
    /// half-width of the tolerance band around the setpoint, in deg C
    deadband: f64,
}

impl OnOffHysteresisControl {
    /// Arguments:
    /// * `setpoint` - target temperature, in deg C
    /// * `deadband` - tolerance either side of the setpoint, in deg C; zero
    ///   gives an instantaneous threshold with no hysteresis
    pub fn new(setpoint: f64, deadband: f64) -> Result<Self, SimulationError> {
        if deadband < 0. {
            return Err(SimulationError::NegativeDeadband(deadband));
        }
        Ok(Self { setpoint, deadband })
    }

    pub fn setpoint(&self) -> f64 {
        self.setpoint
    }

    pub fn deadband(&self) -> f64 {
        self.deadband
    }

    /// Decide whether the heat source should be on, given the controlled
    /// temperature and whether it is currently on. Below the band demands
    /// heat, above the band cuts it, and inside the band the current state is
    /// held to avoid chatter.
    pub fn required_state(&self, temperature: f64, currently_on: bool) -> bool {
        if temperature < self.setpoint - self.deadband {
            true
        } else if temperature > self.setpoint + self.deadband {
            false
        } else {
            currently_on
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[fixture]
    pub fn control() -> OnOffHysteresisControl {
        OnOffHysteresisControl::new(20., 1.).unwrap()
    }

    #[rstest]
    pub fn should_demand_heat_below_band(control: OnOffHysteresisControl) {
        assert!(control.required_state(18.9, false));
        assert!(control.required_state(18.9, true));
    }

    #[rstest]
    pub fn should_cut_heat_above_band(control: OnOffHysteresisControl) {
        assert!(!control.required_state(21.1, false));
        assert!(!control.required_state(21.1, true));
    }

    #[rstest]
    pub fn should_hold_current_state_inside_band(control: OnOffHysteresisControl) {
        for temperature in [19., 19.5, 20., 20.5, 21.] {
            assert!(control.required_state(temperature, true));
            assert!(!control.required_state(temperature, false));
        }
    }

    #[rstest]
    pub fn should_act_as_plain_threshold_with_zero_deadband() {
        let control = OnOffHysteresisControl::new(20., 0.).unwrap();
        assert!(control.required_state(19.999, false));
        assert!(!control.required_state(20.001, true));
        // exactly on the setpoint the current state is held
        assert!(control.required_state(20., true));
        assert!(!control.required_state(20., false));
    }

    #[rstest]
    pub fn should_reject_negative_deadband() {
        assert_eq!(
            OnOffHysteresisControl::new(20., -0.5),
            Err(SimulationError::NegativeDeadband(-0.5))
        );
    }
}
