//! Convenience re-exports of the crate's common surface.
//!
//! ```rust
//! use reserve_pool::prelude::*;
//! ```

pub use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, BasisPoints, LpShares, PoolSide, Ratio, Rounding,
    RATIO_SCALE,
};
pub use crate::error::{PoolError, Result};
pub use crate::ledger::{AssetLedger, InMemoryLedger, LedgerError};
pub use crate::pool::{
    LiquidityAdded, LiquidityRemoved, Pool, PoolConfig, PoolEvent, PoolState, SwapExecuted,
};
