//! Per-swap fee computation and treasury split.

use crate::domain::{Amount, BasisPoints, Rounding};
use crate::error::Result;

/// The fee taken from one swap input, split between its destinations.
///
/// `total = to_treasury + to_reserves` always. The reserve portion is
/// implicit LP compensation — it stays in the input reserve and grows
/// the constant product; the treasury portion is skimmed out of the
/// pool entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSplit {
    /// Fee deducted from the swap input before pricing.
    pub total: Amount,
    /// Portion forwarded to the treasury account.
    pub to_treasury: Amount,
    /// Portion left in the input reserve for LP holders.
    pub to_reserves: Amount,
}

/// Computes the fee for each swap from the pool's fixed rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeePolicy {
    rate: BasisPoints,
    treasury_share: BasisPoints,
}

impl FeePolicy {
    /// Creates a policy from a swap fee rate and the treasury's share
    /// of that fee. Both are validated by `PoolConfig`.
    #[must_use]
    pub const fn new(rate: BasisPoints, treasury_share: BasisPoints) -> Self {
        Self {
            rate,
            treasury_share,
        }
    }

    /// Splits the fee out of `amount_in`.
    ///
    /// Both divisions floor: `total = floor(amount_in * rate / 10_000)`
    /// and `to_treasury = floor(total * share / 10_000)`. Flooring the
    /// treasury cut means rounding dust stays in the reserves, never
    /// leaks out of the pool.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Overflow`](crate::error::PoolError::Overflow)
    /// if an intermediate product overflows.
    pub fn split(&self, amount_in: Amount) -> Result<FeeSplit> {
        let total = self.rate.apply(amount_in, Rounding::Down)?;
        let to_treasury = self.treasury_share.apply(total, Rounding::Down)?;
        // to_treasury <= total by construction, so this cannot underflow
        let to_reserves = total
            .checked_sub(&to_treasury)
            .ok_or(crate::error::PoolError::Overflow("fee split underflow"))?;
        Ok(FeeSplit {
            total,
            to_treasury,
            to_reserves,
        })
    }
}
