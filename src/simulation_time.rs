use crate::errors::SimulationError;

/// The window a simulation runs over, in seconds. Runs always begin at time
/// zero; the advancing clock itself lives on the thermostat, so drivers only
/// need the end bound and the step.
#[derive(Clone, Copy, Debug)]
pub struct SimulationTime {
    end_time: f64,
    step: f64,
}

impl SimulationTime {
    pub fn new(end_time: f64, step: f64) -> Self {
        Self { end_time, step }
    }

    /// Check the window is usable: a positive step and a non-negative end.
    /// Deserialized values pass through here before a run is built.
    pub fn validated(self) -> Result<Self, SimulationError> {
        if self.step <= 0. {
            return Err(SimulationError::InvalidTickSize(self.step));
        }
        if self.end_time < 0. {
            return Err(SimulationError::InvalidRunWindow {
                start: 0.,
                end: self.end_time,
            });
        }
        Ok(self)
    }

    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        (self.end_time / self.step).ceil() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    pub fn simtime() -> SimulationTime {
        SimulationTime::new(86_400., 60.)
    }

    #[rstest]
    pub fn should_have_correct_total_steps(simtime: SimulationTime) {
        assert_eq!(simtime.total_steps(), 1_440);
        assert_eq!(SimulationTime::new(90., 60.).total_steps(), 2);
    }

    #[rstest]
    pub fn should_accept_a_valid_window(simtime: SimulationTime) {
        assert!(simtime.validated().is_ok());
    }

    #[rstest]
    pub fn should_reject_non_positive_step() {
        assert_eq!(
            SimulationTime::new(86_400., 0.).validated().err(),
            Some(SimulationError::InvalidTickSize(0.))
        );
        assert_eq!(
            SimulationTime::new(86_400., -1.).validated().err(),
            Some(SimulationError::InvalidTickSize(-1.))
        );
    }

    #[rstest]
    pub fn should_reject_negative_end() {
        assert_eq!(
            SimulationTime::new(-60., 60.).validated().err(),
            Some(SimulationError::InvalidRunWindow {
                start: 0.,
                end: -60.
            })
        );
    }
}
