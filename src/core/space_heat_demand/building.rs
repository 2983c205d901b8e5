/// This module provides a single-zone thermal-mass model of a building. The
/// building exchanges heat passively with the exterior and absorbs heat
/// delivered by a heating system.

#[derive(Clone, Copy, Debug)]
pub struct Building {
    /// current average temperature of the building, in deg C
    temperature: f64,
    /// external heat-transfer coefficient, per second
    eflux: f64,
    /// thermal capacity of the building, in J per deg C
    specific_heat: f64,
}

impl Building {
    /// Arguments:
    /// * `temperature` - initial average building temperature, in deg C
    /// * `eflux` - external heat-transfer coefficient, per second
    /// * `specific_heat` - thermal capacity, in J per deg C
    pub fn new(temperature: f64, eflux: f64, specific_heat: f64) -> Self {
        Self {
            temperature,
            eflux,
            specific_heat,
        }
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn eflux(&self) -> f64 {
        self.eflux
    }

    pub fn specific_heat(&self) -> f64 {
        self.specific_heat
    }

    /// Exchange heat with exterior air at `outside_temp` (deg C) for `dt`
    /// seconds, relaxing the building temperature towards the exterior with a
    /// first-order explicit Euler step. The update is only stable for
    /// `eflux * dt < 1`; callers are expected to enforce that.
    pub fn extern_flux_tick(&mut self, outside_temp: f64, dt: f64) {
        self.temperature -= self.eflux * (self.temperature - outside_temp) * dt;
    }

    /// Absorb `joules` of heat from the heating system.
    pub fn intern_flux_tick(&mut self, joules: f64) {
        self.temperature += joules / self.specific_heat;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use itertools::Itertools;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    pub fn building() -> Building {
        Building::new(20., 1e-4, 1e6)
    }

    #[rstest]
    pub fn should_cool_towards_exterior(mut building: Building) {
        building.extern_flux_tick(0., 60.);
        assert_relative_eq!(building.temperature(), 19.88, epsilon = 1e-12);
    }

    #[rstest]
    pub fn should_warm_towards_exterior_when_colder(mut building: Building) {
        building.extern_flux_tick(30., 60.);
        assert!(building.temperature() > 20.);
        assert!(building.temperature() < 30.);
    }

    #[rstest]
    pub fn should_decay_monotonically_without_overshoot(mut building: Building) {
        let outside_temp = -5.;
        let temps: Vec<f64> = (0..5_000)
            .map(|_| {
                building.extern_flux_tick(outside_temp, 60.);
                building.temperature()
            })
            .collect();
        for (earlier, later) in temps.iter().tuple_windows() {
            assert!(later < earlier, "temperature rose during pure decay");
            assert!(
                *later >= outside_temp,
                "temperature overshot the exterior temperature"
            );
        }
    }

    #[rstest]
    pub fn should_absorb_heat_in_proportion_to_thermal_capacity(mut building: Building) {
        building.intern_flux_tick(5e6);
        assert_eq!(building.temperature(), 25.);
        building.intern_flux_tick(0.);
        assert_eq!(building.temperature(), 25.);
    }
}
