pub mod controls;
pub mod heating_systems;
pub mod space_heat_demand;
pub mod thermostat;
pub mod units;
