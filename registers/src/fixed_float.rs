//! Conversion between signed 16-bit fixed-point values and floats.
//!
//! A value in a format with `q` fractional bits is stored as `round(value * 2^q)`. These functions
//! know nothing about registers; see [`Qval`](crate::Qval) for the per-register formats.

use crate::RegisterError;
use log::warn;

/// What to do when a float does not fit in the 16-bit range of its format.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_derive::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OverflowPolicy {
    /// Fail with [`RegisterError::ValueOutOfRange`].
    #[default]
    Reject,
    /// Clamp to `i16::MIN` or `i16::MAX`.
    Saturate,
}

fn scale(q: u8) -> f64 {
    2f64.powi(i32::from(q))
}

pub fn fixed_to_float(raw: i16, q: u8) -> f64 {
    f64::from(raw) / scale(q)
}

/// Converts `value` to fixed point with `q` fractional bits, rounding half away from zero.
///
/// Values outside the representable range are rejected.
pub fn float_to_fixed(value: f64, q: u8) -> Result<i16, RegisterError> {
    float_to_fixed_with(value, q, OverflowPolicy::Reject)
}

pub fn float_to_fixed_with(
    value: f64,
    q: u8,
    policy: OverflowPolicy,
) -> Result<i16, RegisterError> {
    let scaled = (value * scale(q)).round();
    let out_of_range = RegisterError::ValueOutOfRange { value, qval: q };

    if scaled.is_nan() {
        return Err(out_of_range);
    }
    if scaled >= f64::from(i16::MIN) && scaled <= f64::from(i16::MAX) {
        return Ok(scaled as i16);
    }

    match policy {
        OverflowPolicy::Reject => Err(out_of_range),
        OverflowPolicy::Saturate => {
            let clamped = if scaled > 0.0 { i16::MAX } else { i16::MIN };
            warn!("Saturating {} to {} in Q{} fixed point", value, clamped, q);
            Ok(clamped)
        }
    }
}
