//! In-memory reference ledger.

use std::collections::HashMap;

use super::{AssetLedger, LedgerError};
use crate::domain::{AccountId, Amount, AssetId};

/// A deterministic, map-backed [`AssetLedger`].
///
/// Implements the same balance/allowance discipline the production
/// ledger enforces: `transfer_from` spends a pre-authorized allowance,
/// transfers never create or destroy units, and mint/burn are the only
/// supply-changing operations.
///
/// # Examples
///
/// ```
/// use reserve_pool::domain::{AccountId, Amount, AssetId};
/// use reserve_pool::ledger::{AssetLedger, InMemoryLedger};
///
/// let asset = AssetId::from_bytes([1u8; 32]);
/// let alice = AccountId::from_bytes([10u8; 32]);
/// let bob = AccountId::from_bytes([11u8; 32]);
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.mint(asset, alice, Amount::new(100)).expect("mint");
/// ledger.transfer(asset, alice, bob, Amount::new(40)).expect("transfer");
/// assert_eq!(ledger.balance_of(asset, bob), Amount::new(40));
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryLedger {
    balances: HashMap<(AssetId, AccountId), u128>,
    allowances: HashMap<(AssetId, AccountId, AccountId), u128>,
    supplies: HashMap<AssetId, u128>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Authorizes `spender` to pull up to `amount` of `asset` from
    /// `owner`, replacing any previous allowance.
    pub fn approve(&mut self, asset: AssetId, owner: AccountId, spender: AccountId, amount: Amount) {
        self.allowances.insert((asset, owner, spender), amount.get());
    }

    /// Returns the remaining allowance of `spender` over `owner`'s
    /// holdings of `asset`.
    #[must_use]
    pub fn allowance(&self, asset: AssetId, owner: AccountId, spender: AccountId) -> Amount {
        Amount::new(
            self.allowances
                .get(&(asset, owner, spender))
                .copied()
                .unwrap_or(0),
        )
    }

    fn debit(&mut self, asset: AssetId, from: AccountId, amount: u128) -> Result<(), LedgerError> {
        let balance = self.balances.entry((asset, from)).or_insert(0);
        let remaining = balance
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance)?;
        *balance = remaining;
        Ok(())
    }

    fn credit(&mut self, asset: AssetId, to: AccountId, amount: u128) {
        // cannot overflow: a balance never exceeds the asset's total
        // supply, which mint keeps within u128
        *self.balances.entry((asset, to)).or_insert(0) += amount;
    }

    /// Returns the total outstanding supply of `asset`.
    #[must_use]
    pub fn total_supply(&self, asset: AssetId) -> Amount {
        Amount::new(self.supplies.get(&asset).copied().unwrap_or(0))
    }
}

impl AssetLedger for InMemoryLedger {
    fn transfer_from(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let key = (asset, from, to);
        let allowed = self.allowances.get(&key).copied().unwrap_or(0);
        let remaining = allowed
            .checked_sub(amount.get())
            .ok_or(LedgerError::InsufficientAllowance)?;
        // balance check before spending the allowance, so a failed pull
        // leaves both tables untouched
        self.debit(asset, from, amount.get())?;
        self.allowances.insert(key, remaining);
        self.credit(asset, to, amount.get());
        Ok(())
    }

    fn transfer(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.debit(asset, from, amount.get())?;
        self.credit(asset, to, amount.get());
        Ok(())
    }

    fn mint(&mut self, asset: AssetId, to: AccountId, amount: Amount) -> Result<(), LedgerError> {
        let supply = self.supplies.entry(asset).or_insert(0);
        *supply = supply
            .checked_add(amount.get())
            .ok_or(LedgerError::InsufficientBalance)?;
        self.credit(asset, to, amount.get());
        Ok(())
    }

    fn burn(&mut self, asset: AssetId, from: AccountId, amount: Amount) -> Result<(), LedgerError> {
        self.debit(asset, from, amount.get())?;
        // debit succeeded, so supply >= amount
        *self.supplies.entry(asset).or_insert(0) -= amount.get();
        Ok(())
    }

    fn balance_of(&self, asset: AssetId, account: AccountId) -> Amount {
        Amount::new(self.balances.get(&(asset, account)).copied().unwrap_or(0))
    }
}
