//! Fixed-point reserve ratio for external callers.

use core::fmt;

use super::{Amount, Rounding};

/// Scale factor of the fixed-point representation (18 decimal places).
pub const RATIO_SCALE: u128 = 1_000_000_000_000_000_000;

/// The pool's reserve ratio `reserve_a / reserve_b` as a fixed-point
/// value scaled by 10^18.
///
/// The scale is part of the public contract so off-chain callers can do
/// their own arithmetic without guessing at precision.
///
/// # Examples
///
/// ```
/// use reserve_pool::domain::{Amount, Ratio, RATIO_SCALE};
///
/// let ratio = Ratio::from_amounts(Amount::new(600), Amount::new(400))
///     .expect("non-zero denominator");
/// assert_eq!(ratio.get(), RATIO_SCALE * 3 / 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ratio(u128);

impl Ratio {
    /// A ratio of exactly one.
    pub const ONE: Self = Self(RATIO_SCALE);

    /// Creates a ratio from a raw, already-scaled value.
    #[must_use]
    pub const fn from_scaled(value: u128) -> Self {
        Self(value)
    }

    /// Computes `numerator / denominator` at 10^18 precision, floored.
    ///
    /// Returns `None` if `denominator` is zero or the scaled numerator
    /// overflows `u128`.
    #[must_use]
    pub const fn from_amounts(numerator: Amount, denominator: Amount) -> Option<Self> {
        let scaled = match numerator.checked_mul(&Amount::new(RATIO_SCALE)) {
            Some(v) => v,
            None => return None,
        };
        match scaled.checked_div(&denominator, Rounding::Down) {
            Some(v) => Some(Self(v.get())),
            None => None,
        }
    }

    /// Returns the raw scaled value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Lossy conversion to `f64`, for display and off-chain estimates.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / RATIO_SCALE as f64
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:018}", self.0 / RATIO_SCALE, self.0 % RATIO_SCALE)
    }
}
