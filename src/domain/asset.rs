//! Opaque fungible-asset identifier.

use core::fmt;

/// Identifies a fungible asset held by the external ledger.
///
/// The engine never interprets the bytes — asset creation and metadata
/// belong to the token-factory collaborator. All 32-byte sequences are
/// valid identifiers, so construction is infallible.
///
/// # Examples
///
/// ```
/// use reserve_pool::domain::AssetId;
///
/// let asset = AssetId::from_bytes([1u8; 32]);
/// assert_eq!(asset.as_bytes(), [1u8; 32]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // first four bytes are enough to tell assets apart in logs
        write!(
            f,
            "asset:{:02x}{:02x}{:02x}{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let bytes = [42u8; 32];
        assert_eq!(AssetId::from_bytes(bytes).as_bytes(), bytes);
    }

    #[test]
    fn equality() {
        assert_eq!(AssetId::from_bytes([1u8; 32]), AssetId::from_bytes([1u8; 32]));
        assert_ne!(AssetId::from_bytes([1u8; 32]), AssetId::from_bytes([2u8; 32]));
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(AssetId::from_bytes([0u8; 32]) < AssetId::from_bytes([1u8; 32]));
    }

    #[test]
    fn display_prefix() {
        let asset = AssetId::from_bytes([0xabu8; 32]);
        assert_eq!(format!("{asset}"), "asset:abababab");
    }
}
