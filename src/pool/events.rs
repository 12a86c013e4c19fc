//! Operation records emitted by the pool engine.

use crate::domain::{AccountId, Amount, AssetId, LpShares};

/// Record of a completed deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiquidityAdded {
    /// Account that supplied the deposit and received the shares.
    pub provider: AccountId,
    /// Asset-A units actually pulled into the reserves.
    pub amount_a: Amount,
    /// Asset-B units actually pulled into the reserves.
    pub amount_b: Amount,
    /// LP shares minted to the provider.
    pub shares_minted: LpShares,
}

/// Record of a completed withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiquidityRemoved {
    /// Account that redeemed shares and received the payout.
    pub provider: AccountId,
    /// Asset-A units paid out of the reserves.
    pub amount_a: Amount,
    /// Asset-B units paid out of the reserves.
    pub amount_b: Amount,
    /// LP shares burned from the provider.
    pub shares_burned: LpShares,
}

/// Record of a completed swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapExecuted {
    /// Account that traded against the pool.
    pub trader: AccountId,
    /// Input units pulled from the trader, fee included.
    pub amount_in: Amount,
    /// Output units paid to the trader.
    pub amount_out: Amount,
    /// Asset the trader paid in.
    pub asset_in: AssetId,
    /// Asset the trader received.
    pub asset_out: AssetId,
    /// Total fee deducted from the input before pricing.
    pub fee: Amount,
}

/// One entry in the pool's ordered operation history.
///
/// Events are appended exactly when an operation commits, so the
/// history replayed in order reproduces every reserve transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolEvent {
    /// A deposit was accepted and shares were minted.
    LiquidityAdded(LiquidityAdded),
    /// Shares were redeemed for reserves.
    LiquidityRemoved(LiquidityRemoved),
    /// A swap was executed against the reserves.
    SwapExecuted(SwapExecuted),
}
