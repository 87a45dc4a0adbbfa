//! Sun phase effect validation (sweep shaping, colors, pulsation).

use crate::schema::CoronaConfig;

use super::helpers::{validate_above_f64, validate_hex_color, validate_range_f64};

pub(crate) fn validate_sun(errors: &mut Vec<String>, config: &CoronaConfig) {
    let s = &config.sun;

    validate_range_f64(errors, "sun.speed", s.speed, 0.0, 10.0);
    validate_above_f64(errors, "sun.exponent", s.exponent, 0.0);
    validate_range_f64(errors, "sun.exponent", s.exponent, 0.0, 8.0);
    validate_range_f64(errors, "sun.sweep", s.sweep, 0.0, 0.5);
    validate_range_f64(errors, "sun.edge_softness", s.edge_softness, 0.0, 0.5);
    validate_range_f64(errors, "sun.pulse_amount", s.pulse_amount, 0.0, 0.9);
    validate_range_f64(errors, "sun.pulse_rate", s.pulse_rate, 0.0, 20.0);

    validate_hex_color(errors, "sun.color", &s.color);
    validate_hex_color(errors, "sun.emissive_color", &s.emissive_color);
}
