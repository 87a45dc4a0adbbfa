//! Ring pool validation (count, segments, sampling ranges).

use crate::schema::CoronaConfig;

use super::helpers::{validate_float_range, validate_range, validate_range_f64};

/// Validate all ring-pool constraints.
pub(crate) fn validate_rings(errors: &mut Vec<String>, config: &CoronaConfig) {
    let rings = &config.rings;

    validate_range(errors, "rings.count", rings.count, 1, 5000);
    validate_range(errors, "rings.segments", rings.segments, 3, 4096);

    // Radius and frequency must stay strictly positive; a zero lower bound
    // would allow collapsed loops.
    validate_float_range(errors, "rings.radius", &rings.radius, 0.001, 1000.0);
    validate_float_range(errors, "rings.amplitude", &rings.amplitude, 0.0, 100.0);
    validate_float_range(errors, "rings.frequency", &rings.frequency, 0.001, 256.0);
    validate_float_range(errors, "rings.opacity", &rings.opacity, 0.0, 1.0);

    validate_range_f64(errors, "rings.seed_range", rings.seed_range, 0.0, 1.0e6);
}
