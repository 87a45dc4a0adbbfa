//! Color pass validation.

use crate::schema::CoronaConfig;

use super::helpers::validate_range_f64;

pub(crate) fn validate_palette(errors: &mut Vec<String>, config: &CoronaConfig) {
    let p = &config.palette;

    validate_range_f64(errors, "palette.base_hue", p.base_hue, 0.0, 360.0);
    validate_range_f64(errors, "palette.hue_spread", p.hue_spread, 0.0, 360.0);
    validate_range_f64(errors, "palette.hue_rate", p.hue_rate, 0.0, 100.0);
    validate_range_f64(errors, "palette.saturation", p.saturation, 0.0, 1.0);
    validate_range_f64(errors, "palette.lightness", p.lightness, 0.0, 1.0);
    validate_range_f64(errors, "palette.initial_jitter", p.initial_jitter, 0.0, 360.0);
}
