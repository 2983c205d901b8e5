pub const SECONDS_PER_MINUTE: u32 = 60;
pub const SECONDS_PER_HOUR: u32 = 3_600;
pub const SECONDS_PER_DAY: u32 = 86_400;
pub const HOURS_PER_DAY: u32 = 24;

pub fn seconds_to_minutes(time_s: f64) -> f64 {
    time_s / SECONDS_PER_MINUTE as f64
}
