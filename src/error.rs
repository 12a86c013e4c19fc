//! Unified error types for the reserve-pool engine.
//!
//! Every fallible operation in the crate returns [`PoolError`]. Failures
//! are always total: an operation that errors leaves the pool state
//! exactly as it found it, and nothing here is fatal to the process.

use crate::ledger::LedgerError;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, PoolError>;

/// The unified error enum for all pool operations.
///
/// The engine never attempts local recovery — the caller is responsible
/// for retrying with corrected inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// A quantity was zero (or otherwise unusable) where a positive
    /// value is required.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// A swap was requested for an asset that is not part of the pair.
    #[error("asset is not part of the pool pair")]
    UnsupportedAsset,

    /// An add-liquidity offer deviates from the current reserve ratio
    /// beyond the configured tolerance.
    #[error("offered amounts deviate from the pool ratio beyond tolerance")]
    RatioMismatch,

    /// A remove request exceeds the holder's LP balance or the pool's
    /// total share supply.
    #[error("share amount exceeds holder balance or pool supply")]
    InsufficientShare,

    /// A ratio or swap was requested against a zero-reserve pool.
    #[error("pool has no reserves")]
    EmptyPool,

    /// The asset ledger rejected a transfer, mint, or burn.
    #[error("asset ledger rejected the operation: {0}")]
    Ledger(#[from] LedgerError),

    /// Intermediate arithmetic exceeded the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A divisor was zero where the caller must see an explicit error.
    #[error("division by zero")]
    DivisionByZero,

    /// A nested entry was attempted while an operation was in flight.
    #[error("pool is busy with another operation")]
    Busy,

    /// Construction-time configuration was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}
