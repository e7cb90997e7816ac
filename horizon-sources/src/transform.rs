//! Scaling between a question's unit interval and its real values.
//!
//! Linear: `real = min + (max - min) * unit`.
//! Logarithmic (zero point `z`), with `n = (max - z) / (min - z)`:
//! `real = min + (max - min) * (n^unit - 1) / (n - 1)`.
//!
//! Missing bounds make both directions the identity. Inputs outside [0, 1]
//! are not clamped.

use horizon_core::ScalingSpec;

/// Map a unit value onto the question's real scale.
pub fn transform(scaling: &ScalingSpec, unit: f64) -> f64 {
    let Some((min, max)) = scaling.bounds() else {
        return unit;
    };

    match scaling.zero_point {
        Some(zero) => {
            let n = log_base(min, max, zero);
            min + (max - min) * (n.powf(unit) - 1.0) / (n - 1.0)
        }
        None => min + (max - min) * unit,
    }
}

/// Map a real value back onto the unit interval. Inverse of [`transform`].
pub fn inverse_transform(scaling: &ScalingSpec, real: f64) -> f64 {
    let Some((min, max)) = scaling.bounds() else {
        return real;
    };

    match scaling.zero_point {
        Some(zero) => {
            let n = log_base(min, max, zero);
            (((real - min) * (n - 1.0)) / (max - min) + 1.0).ln() / n.ln()
        }
        None => (real - min) / (max - min),
    }
}

fn log_base(min: f64, max: f64, zero: f64) -> f64 {
    (max - zero) / (min - zero)
}
