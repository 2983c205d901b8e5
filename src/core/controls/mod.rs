pub mod hysteresis;
