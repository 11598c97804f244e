//! Shared range-validation helpers used by all section validators.

use vista_common::Dimension;

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error unless `value` is a positive length, or a percentage in `(0, 100]`.
pub(crate) fn validate_dimension(errors: &mut Vec<String>, name: &str, value: &Dimension) {
    match *value {
        Dimension::Pixels(px) if px <= 0.0 => {
            errors.push(format!("{name} = {value} must be positive"));
        }
        Dimension::Percent(pct) if pct <= 0.0 || pct > 100.0 => {
            errors.push(format!("{name} = {value} is out of range (0%, 100%]"));
        }
        _ => {}
    }
}
