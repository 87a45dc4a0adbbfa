//! Shared range-validation helpers used by all section validators.

use crate::schema::FloatRange;
use corona_common::Color;

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is non-finite or outside `[min, max]` (float).
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !value.is_finite() || value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is non-finite or not strictly above `min`.
pub(crate) fn validate_above_f64(errors: &mut Vec<String>, name: &str, value: f64, min: f64) {
    if !value.is_finite() || value <= min {
        errors.push(format!("{name} = {value} must be greater than {min}"));
    }
}

/// Validate both ends of a sampling range against `[lo, hi]` and require
/// `min <= max`.
pub(crate) fn validate_float_range(
    errors: &mut Vec<String>,
    name: &str,
    range: &FloatRange,
    lo: f64,
    hi: f64,
) {
    validate_range_f64(errors, &format!("{name}.min"), range.min, lo, hi);
    validate_range_f64(errors, &format!("{name}.max"), range.max, lo, hi);
    if range.min > range.max {
        errors.push(format!(
            "{name}.min = {} is greater than {name}.max = {}",
            range.min, range.max
        ));
    }
}

/// Push an error if `value` is not a `#RGB`/`#RRGGBB`/`#RRGGBBAA` color.
pub(crate) fn validate_hex_color(errors: &mut Vec<String>, name: &str, value: &str) {
    if !value.starts_with('#') || Color::from_hex(value).is_none() {
        errors.push(format!("{name} = \"{value}\" is not a valid hex color"));
    }
}
