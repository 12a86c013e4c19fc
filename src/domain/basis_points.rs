//! Basis-point rates for fees and tolerances.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::PoolError;

/// Maximum value that represents 100%.
const MAX_BPS: u32 = 10_000;

/// A rate expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Used for the pool's swap fee, the treasury's share of that fee, and
/// the optional add-liquidity ratio-drift tolerance. Values above
/// 10 000 are representable but rejected by
/// [`PoolConfig`](crate::pool::PoolConfig) validation.
///
/// # Examples
///
/// ```
/// use reserve_pool::domain::BasisPoints;
///
/// let fee = BasisPoints::new(30); // 0.30%
/// assert!(fee.is_valid_percent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the amount is zero basis points.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the value is in the valid percentage range
    /// (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= MAX_BPS
    }

    /// Computes `amount * (self / 10_000)` with explicit rounding.
    ///
    /// The swap fee uses [`Rounding::Down`]: the fee is
    /// `floor(input * rate / 10_000)`, so a dust-sized input pays no fee.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`] if the intermediate product
    /// overflows.
    pub const fn apply(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        let product = match amount.get().checked_mul(self.0 as u128) {
            Some(v) => v,
            None => return Err(PoolError::Overflow("basis points apply overflow")),
        };
        let divisor = MAX_BPS as u128;
        match rounding {
            Rounding::Down => Ok(Amount::new(product / divisor)),
            Rounding::Up => {
                let q = product / divisor;
                let r = product % divisor;
                if r != 0 {
                    Ok(Amount::new(q + 1))
                } else {
                    Ok(Amount::new(q))
                }
            }
        }
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
