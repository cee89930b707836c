//! Threshold evaluation for sensor readings.
//!
//! Pure logic, no database access. The engine fetches sensor
//! configuration, synthesizes a value, and passes both in; persistence of
//! the resulting alarm is the caller's job.

/// Evaluate a reading against a sensor's configured limits.
///
/// Returns the alarm message on a breach, `None` otherwise. The upper
/// bound is checked first and takes precedence: a reading is never
/// flagged for both bounds in one evaluation, even with an inverted
/// configuration (`limit_min >= limit_max`). Either limit may be unset,
/// in which case that bound is open.
///
/// Bounds are exclusive of the limit itself: `value > limit_max` breaches
/// upward, `value < limit_min` breaches downward.
pub fn evaluate(
    value: f64,
    limit_max: Option<f64>,
    limit_min: Option<f64>,
    sensor_name: &str,
    unit: Option<&str>,
) -> Option<String> {
    let unit = unit.unwrap_or("");

    if let Some(max) = limit_max {
        if value > max {
            return Some(format!(
                "{sensor_name} exceeds upper limit (limit: {max}{unit})"
            ));
        }
    }

    if let Some(min) = limit_min {
        if value < min {
            return Some(format!(
                "{sensor_name} below lower limit (limit: {min}{unit})"
            ));
        }
    }

    None
}
