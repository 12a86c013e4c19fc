//! Asset ledger collaborator interface.
//!
//! The ledger owns every balance — the two underlying assets and the LP
//! claim asset alike. The engine only issues instructions against it and
//! never caches balances. [`InMemoryLedger`] is the deterministic
//! reference implementation used by the test suite and demos.

mod memory;

pub use memory::InMemoryLedger;

use crate::domain::{AccountId, Amount, AssetId};

/// Failure conditions reported by the asset ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// The source account does not hold the requested amount.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// The spender has not been authorized for the requested amount.
    #[error("insufficient allowance")]
    InsufficientAllowance,
}

/// Balance operations the engine consumes from the external ledger.
///
/// Every mutation either applies fully or returns an error with no
/// effect; the engine relies on that to keep its own operations atomic.
pub trait AssetLedger {
    /// Moves `amount` of `asset` from `from` to `to`, consuming the
    /// spender's pre-authorized allowance.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InsufficientBalance`] or
    /// [`LedgerError::InsufficientAllowance`].
    fn transfer_from(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Moves `amount` of `asset` out of an account the caller controls.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InsufficientBalance`].
    fn transfer(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Creates `amount` new units of `asset` in `to`.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InsufficientBalance`] if the asset's total supply
    /// would overflow.
    fn mint(&mut self, asset: AssetId, to: AccountId, amount: Amount) -> Result<(), LedgerError>;

    /// Destroys `amount` units of `asset` held by `from`.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InsufficientBalance`].
    fn burn(&mut self, asset: AssetId, from: AccountId, amount: Amount) -> Result<(), LedgerError>;

    /// Returns the balance of `asset` held by `account`.
    fn balance_of(&self, asset: AssetId, account: AccountId) -> Amount;
}
