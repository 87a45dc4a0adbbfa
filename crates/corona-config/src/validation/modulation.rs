//! Amplitude modulation validation.

use crate::schema::CoronaConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_modulation(errors: &mut Vec<String>, config: &CoronaConfig) {
    let m = &config.modulation;

    validate_range_f64(errors, "modulation.floor", m.floor, 0.0, 4.0);
    validate_range_f64(errors, "modulation.span", m.span, 0.0, 4.0);

    if !m.enabled {
        return;
    }

    let count = u32::try_from(m.terms.len()).unwrap_or(u32::MAX);
    validate_range(errors, "modulation.terms (count)", count, 2, 3);

    for (i, term) in m.terms.iter().enumerate() {
        validate_range_f64(
            errors,
            &format!("modulation.terms[{i}].weight"),
            term.weight,
            -10.0,
            10.0,
        );
        validate_range_f64(
            errors,
            &format!("modulation.terms[{i}].rate"),
            term.rate,
            0.0001,
            10.0,
        );
        validate_range(
            errors,
            &format!("modulation.terms[{i}].seed"),
            term.seed,
            0,
            1,
        );
        validate_range_f64(
            errors,
            &format!("modulation.terms[{i}].seed_scale"),
            term.seed_scale,
            -100.0,
            100.0,
        );
    }
}
