//! Validation for smaller config sections: clock and performance.

use crate::schema::CoronaConfig;

use super::helpers::{validate_above_f64, validate_range, validate_range_f64};

/// Validate clock constraints.
pub(crate) fn validate_clock(errors: &mut Vec<String>, config: &CoronaConfig) {
    validate_above_f64(errors, "clock.step", config.clock.step, 0.0);
    validate_range_f64(errors, "clock.step", config.clock.step, 0.0, 1.0);
    validate_range_f64(errors, "clock.time_scale", config.clock.time_scale, 0.0, 10.0);
}

/// Validate performance constraints.
pub(crate) fn validate_performance(errors: &mut Vec<String>, config: &CoronaConfig) {
    validate_range(
        errors,
        "performance.frame_rate",
        config.performance.frame_rate,
        1,
        240,
    );
}
