//! The pool engine and its supporting pieces.
//!
//! [`Pool`] ties everything together: a validated [`PoolConfig`], the
//! mutable reserve [`state`], the LP share math in [`lp`], the fee
//! split in [`fees`], and the event history in [`events`]. Asset
//! custody stays behind the [`AssetLedger`](crate::ledger::AssetLedger)
//! trait; the engine only moves balances through it.

pub mod config;
pub mod engine;
pub mod events;
pub mod fees;
pub mod lp;
pub mod state;

pub use config::PoolConfig;
pub use engine::Pool;
pub use events::{LiquidityAdded, LiquidityRemoved, PoolEvent, SwapExecuted};
pub use fees::{FeePolicy, FeeSplit};
pub use state::PoolState;
