//! Two-variant tagged choice of swap direction.

use core::fmt;

/// Selects one of the pool's two reserve slots.
///
/// Swap direction is resolved once, at the entry point, from the input
/// asset to a `PoolSide`; all reserve arithmetic below that point works
/// on concrete slots rather than re-comparing asset identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolSide {
    /// The reserve slot of the pair's first (lower-id) asset.
    AssetA,
    /// The reserve slot of the pair's second (higher-id) asset.
    AssetB,
}

impl PoolSide {
    /// Returns the other side of the pair.
    #[must_use]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::AssetA => Self::AssetB,
            Self::AssetB => Self::AssetA,
        }
    }

    /// Returns `true` if this is [`PoolSide::AssetA`].
    #[must_use]
    pub const fn is_asset_a(&self) -> bool {
        matches!(self, Self::AssetA)
    }
}

impl fmt::Display for PoolSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetA => write!(f, "A"),
            Self::AssetB => write!(f, "B"),
        }
    }
}
