//! Ordered pair of distinct assets.

use super::{AssetId, PoolSide};
use crate::error::PoolError;

/// The two underlying assets of a pool, canonically sorted by identifier.
///
/// Canonical ordering (`asset_a < asset_b`) means `(X, Y)` and `(Y, X)`
/// describe the same pair, and the reserve slots `A`/`B` are fixed for
/// the lifetime of the pool.
///
/// # Examples
///
/// ```
/// use reserve_pool::domain::{AssetId, AssetPair};
///
/// let x = AssetId::from_bytes([2u8; 32]);
/// let y = AssetId::from_bytes([1u8; 32]);
/// let pair = AssetPair::new(x, y).expect("distinct assets");
/// assert_eq!(pair.asset_a(), y); // sorted automatically
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetPair {
    asset_a: AssetId,
    asset_b: AssetId,
}

impl AssetPair {
    /// Creates a new canonically-ordered `AssetPair`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if both identifiers
    /// are equal.
    pub fn new(first: AssetId, second: AssetId) -> Result<Self, PoolError> {
        if first == second {
            return Err(PoolError::InvalidConfiguration(
                "pool pair requires two distinct assets",
            ));
        }
        let (asset_a, asset_b) = if first < second {
            (first, second)
        } else {
            (second, first)
        };
        Ok(Self { asset_a, asset_b })
    }

    /// Returns the first asset (lower identifier).
    #[must_use]
    pub const fn asset_a(&self) -> AssetId {
        self.asset_a
    }

    /// Returns the second asset (higher identifier).
    #[must_use]
    pub const fn asset_b(&self) -> AssetId {
        self.asset_b
    }

    /// Returns `true` if the given asset is part of this pair.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.asset_a == *asset || self.asset_b == *asset
    }

    /// Resolves an asset to its reserve slot, or `None` if it is not
    /// part of the pair.
    #[must_use]
    pub fn side_of(&self, asset: &AssetId) -> Option<PoolSide> {
        if *asset == self.asset_a {
            Some(PoolSide::AssetA)
        } else if *asset == self.asset_b {
            Some(PoolSide::AssetB)
        } else {
            None
        }
    }

    /// Returns the asset occupying the given slot.
    #[must_use]
    pub const fn asset_on(&self, side: PoolSide) -> AssetId {
        match side {
            PoolSide::AssetA => self.asset_a,
            PoolSide::AssetB => self.asset_b,
        }
    }

}
