//! LP claim share units.

use core::fmt;

use super::Amount;

/// Outstanding units of the pool's LP claim asset.
///
/// Distinct from [`Amount`] because shares measure a proportional claim
/// on both reserves, not a quantity of either underlying asset. Shares
/// cross into [`Amount`] only at the ledger boundary, where the LP claim
/// is itself a fungible asset.
///
/// # Examples
///
/// ```
/// use reserve_pool::domain::LpShares;
///
/// let a = LpShares::new(1_000);
/// let b = LpShares::new(500);
/// assert_eq!(a.checked_sub(&b), Some(LpShares::new(500)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LpShares(u128);

impl LpShares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Creates a new `LpShares` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if no shares are represented.
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

    /// Views the share count as a ledger [`Amount`] of the LP asset.
    #[must_use]
    pub const fn as_amount(&self) -> Amount {
        Amount::new(self.0)
    }
}

impl fmt::Display for LpShares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
