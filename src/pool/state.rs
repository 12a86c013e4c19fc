//! Mutable pool state and the transaction-scoped busy flag.

use crate::domain::{Amount, LpShares, PoolSide};
use crate::error::PoolError;

/// The reserve pair and outstanding LP supply.
///
/// Pure data: only the engine mutates it, and always as the final step
/// of a fully computed transition. The `busy` flag marks an in-flight
/// operation so that a ledger callback re-entering the engine is
/// rejected instead of observing half-applied reserves.
///
/// # Invariants
///
/// - both reserves are positive whenever `lp_supply > 0` (the pool is
///   either empty or fully funded)
/// - `lp_supply` changes only through mint-on-add and burn-on-remove
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolState {
    reserve_a: Amount,
    reserve_b: Amount,
    lp_supply: LpShares,
    busy: bool,
}

impl PoolState {
    /// Creates an empty, unfunded state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            lp_supply: LpShares::ZERO,
            busy: false,
        }
    }

    /// Returns the reserve of the pair's first asset.
    #[must_use]
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the reserve of the pair's second asset.
    #[must_use]
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the reserve on the given side.
    #[must_use]
    pub const fn reserve(&self, side: PoolSide) -> Amount {
        match side {
            PoolSide::AssetA => self.reserve_a,
            PoolSide::AssetB => self.reserve_b,
        }
    }

    /// Returns the outstanding LP share supply.
    #[must_use]
    pub const fn lp_supply(&self) -> LpShares {
        self.lp_supply
    }

    /// Returns `true` if the pool holds reserves.
    #[must_use]
    pub const fn is_funded(&self) -> bool {
        !self.lp_supply.is_zero()
    }

    /// Returns the constant-product invariant `reserve_a * reserve_b`,
    /// or `None` if it overflows.
    #[must_use]
    pub const fn invariant(&self) -> Option<u128> {
        self.reserve_a.get().checked_mul(self.reserve_b.get())
    }

    /// Returns `true` if the funding invariant holds: reserves are both
    /// positive exactly when shares are outstanding.
    #[must_use]
    pub const fn holds_funding_invariant(&self) -> bool {
        if self.lp_supply.is_zero() {
            self.reserve_a.is_zero() && self.reserve_b.is_zero()
        } else {
            !self.reserve_a.is_zero() && !self.reserve_b.is_zero()
        }
    }

    /// Marks an operation as in flight.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Busy`] if another operation is already in
    /// flight.
    pub fn begin(&mut self) -> Result<(), PoolError> {
        if self.busy {
            return Err(PoolError::Busy);
        }
        self.busy = true;
        Ok(())
    }

    /// Clears the in-flight marker. Called on every exit path,
    /// successful or not.
    pub fn finish(&mut self) {
        self.busy = false;
    }

    /// Commits new reserves and LP supply in one step.
    pub(crate) fn commit(&mut self, reserve_a: Amount, reserve_b: Amount, lp_supply: LpShares) {
        self.reserve_a = reserve_a;
        self.reserve_b = reserve_b;
        self.lp_supply = lp_supply;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_empty() {
        let state = PoolState::new();
        assert_eq!(state.reserve_a(), Amount::ZERO);
        assert_eq!(state.reserve_b(), Amount::ZERO);
        assert_eq!(state.lp_supply(), LpShares::ZERO);
        assert!(!state.is_funded());
        assert!(state.holds_funding_invariant());
    }

    #[test]
    fn commit_updates_all_fields() {
        let mut state = PoolState::new();
        state.commit(Amount::new(500), Amount::new(500), LpShares::new(500));
        assert_eq!(state.reserve_a(), Amount::new(500));
        assert_eq!(state.reserve_b(), Amount::new(500));
        assert_eq!(state.lp_supply(), LpShares::new(500));
        assert!(state.is_funded());
        assert!(state.holds_funding_invariant());
    }

    #[test]
    fn reserve_by_side() {
        let mut state = PoolState::new();
        state.commit(Amount::new(600), Amount::new(417), LpShares::new(500));
        assert_eq!(state.reserve(PoolSide::AssetA), Amount::new(600));
        assert_eq!(state.reserve(PoolSide::AssetB), Amount::new(417));
    }

    #[test]
    fn invariant_product() {
        let mut state = PoolState::new();
        state.commit(Amount::new(500), Amount::new(500), LpShares::new(500));
        assert_eq!(state.invariant(), Some(250_000));
    }

    #[test]
    fn invariant_overflow_is_none() {
        let mut state = PoolState::new();
        state.commit(Amount::MAX, Amount::new(2), LpShares::new(1));
        assert_eq!(state.invariant(), None);
    }

    #[test]
    fn funding_invariant_violated_by_one_sided_reserves() {
        let mut state = PoolState::new();
        state.commit(Amount::new(500), Amount::ZERO, LpShares::new(500));
        assert!(!state.holds_funding_invariant());
    }

    #[test]
    fn busy_flag_rejects_nested_entry() {
        let mut state = PoolState::new();
        assert_eq!(state.begin(), Ok(()));
        assert_eq!(state.begin(), Err(PoolError::Busy));
        state.finish();
        assert_eq!(state.begin(), Ok(()));
    }
}
