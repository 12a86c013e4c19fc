//! Raw asset quantity with checked arithmetic.

use core::fmt;

use super::Rounding;

/// A non-negative quantity of a fungible asset, in its smallest unit.
///
/// `Amount` is the unit of all reserve bookkeeping. Arithmetic is always
/// checked — methods return `None` on overflow, underflow, or division
/// by zero instead of panicking, and the engine maps those to explicit
/// errors.
///
/// # Examples
///
/// ```
/// use reserve_pool::domain::{Amount, Rounding};
///
/// let reserve = Amount::new(500);
/// let input = Amount::new(100);
/// let denom = reserve.checked_add(&input).expect("no overflow");
/// // constant-product output: 500 * 100 / 600 = 83 (floored)
/// let out = reserve.checked_mul_div(&input, &denom, Rounding::Down);
/// assert_eq!(out, Some(Amount::new(83)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_mul(&self, other: &Self) -> Option<Self> {
        match self.0.checked_mul(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked division with an explicit rounding direction.
    ///
    /// Returns `None` if `divisor` is zero.
    #[must_use]
    pub const fn checked_div(&self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        if divisor.0 == 0 {
            return None;
        }
        match rounding {
            Rounding::Down => Some(Self(self.0 / divisor.0)),
            Rounding::Up => {
                let q = self.0 / divisor.0;
                let r = self.0 % divisor.0;
                if r != 0 {
                    // q + 1 cannot overflow: r != 0 implies self < u128::MAX
                    // or divisor > 1, either way q < u128::MAX.
                    Some(Self(q + 1))
                } else {
                    Some(Self(q))
                }
            }
        }
    }

    /// Computes `self * mul / div` with an explicit rounding direction.
    ///
    /// This is the primitive behind every proportional computation in the
    /// pool: share minting, redemption payouts, matched deposit amounts,
    /// and the swap output formula. Returns `None` if the intermediate
    /// product overflows or `div` is zero.
    #[must_use]
    pub const fn checked_mul_div(&self, mul: &Self, div: &Self, rounding: Rounding) -> Option<Self> {
        match self.checked_mul(mul) {
            Some(product) => product.checked_div(div, rounding),
            None => None,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
