//! Construction-time pool configuration.

use crate::domain::{AccountId, AssetId, AssetPair, BasisPoints};
use crate::error::PoolError;

/// Immutable parameters fixed when a pool is created.
///
/// The pool-factory collaborator chooses these once; nothing here can
/// change for the lifetime of the pool.
///
/// # Validation
///
/// - the LP claim asset must be distinct from both underlying assets
/// - the swap fee must be below 100% (a full-input fee makes every swap
///   unpriceable)
/// - the treasury share of the fee must not exceed 100%
/// - a ratio tolerance, if set, must be a valid percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    pair: AssetPair,
    lp_asset: AssetId,
    pool_account: AccountId,
    treasury: AccountId,
    fee_rate: BasisPoints,
    treasury_share: BasisPoints,
    ratio_tolerance: Option<BasisPoints>,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// `fee_rate` is the per-swap fee; `treasury_share` is the fraction
    /// of that fee skimmed to `treasury`, the remainder staying in the
    /// reserves for LP holders.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if any invariant
    /// documented on the type fails.
    pub fn new(
        pair: AssetPair,
        lp_asset: AssetId,
        pool_account: AccountId,
        treasury: AccountId,
        fee_rate: BasisPoints,
        treasury_share: BasisPoints,
    ) -> Result<Self, PoolError> {
        let config = Self {
            pair,
            lp_asset,
            pool_account,
            treasury,
            fee_rate,
            treasury_share,
            ratio_tolerance: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Enables ratio-drift enforcement on add-liquidity offers.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] if `tolerance`
    /// exceeds 100%.
    pub fn with_ratio_tolerance(mut self, tolerance: BasisPoints) -> Result<Self, PoolError> {
        if !tolerance.is_valid_percent() {
            return Err(PoolError::InvalidConfiguration(
                "ratio tolerance exceeds 100%",
            ));
        }
        self.ratio_tolerance = Some(tolerance);
        Ok(self)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfiguration`] naming the violation.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.pair.contains(&self.lp_asset) {
            return Err(PoolError::InvalidConfiguration(
                "LP claim asset must be distinct from the pool pair",
            ));
        }
        if self.fee_rate.get() >= BasisPoints::MAX_PERCENT.get() {
            return Err(PoolError::InvalidConfiguration(
                "fee rate must be below 100%",
            ));
        }
        if !self.treasury_share.is_valid_percent() {
            return Err(PoolError::InvalidConfiguration(
                "treasury share exceeds 100%",
            ));
        }
        Ok(())
    }

    /// Returns the underlying asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Returns the LP claim asset identifier.
    #[must_use]
    pub const fn lp_asset(&self) -> AssetId {
        self.lp_asset
    }

    /// Returns the account holding the pool's reserves on the ledger.
    #[must_use]
    pub const fn pool_account(&self) -> AccountId {
        self.pool_account
    }

    /// Returns the treasury account receiving the protocol fee share.
    #[must_use]
    pub const fn treasury(&self) -> AccountId {
        self.treasury
    }

    /// Returns the per-swap fee rate.
    #[must_use]
    pub const fn fee_rate(&self) -> BasisPoints {
        self.fee_rate
    }

    /// Returns the treasury's share of each fee.
    #[must_use]
    pub const fn treasury_share(&self) -> BasisPoints {
        self.treasury_share
    }

    /// Returns the add-liquidity drift tolerance, if enforced.
    #[must_use]
    pub const fn ratio_tolerance(&self) -> Option<BasisPoints> {
        self.ratio_tolerance
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn pair() -> AssetPair {
        let a = AssetId::from_bytes([1u8; 32]);
        let b = AssetId::from_bytes([2u8; 32]);
        let Ok(pair) = AssetPair::new(a, b) else {
            panic!("expected valid pair");
        };
        pair
    }

    fn lp_asset() -> AssetId {
        AssetId::from_bytes([3u8; 32])
    }

    fn pool_account() -> AccountId {
        AccountId::from_bytes([100u8; 32])
    }

    fn treasury() -> AccountId {
        AccountId::from_bytes([200u8; 32])
    }

    fn valid() -> PoolConfig {
        let Ok(cfg) = PoolConfig::new(
            pair(),
            lp_asset(),
            pool_account(),
            treasury(),
            BasisPoints::new(30),
            BasisPoints::new(5_000),
        ) else {
            panic!("expected valid config");
        };
        cfg
    }

    #[test]
    fn valid_config_accepted() {
        let cfg = valid();
        assert_eq!(cfg.fee_rate(), BasisPoints::new(30));
        assert_eq!(cfg.treasury_share(), BasisPoints::new(5_000));
        assert_eq!(cfg.ratio_tolerance(), None);
        assert_eq!(cfg.lp_asset(), lp_asset());
        assert_eq!(cfg.treasury(), treasury());
        assert_eq!(cfg.pool_account(), pool_account());
    }

    #[test]
    fn lp_asset_in_pair_rejected() {
        let result = PoolConfig::new(
            pair(),
            AssetId::from_bytes([1u8; 32]),
            pool_account(),
            treasury(),
            BasisPoints::new(30),
            BasisPoints::ZERO,
        );
        assert!(matches!(result, Err(PoolError::InvalidConfiguration(_))));
    }

    #[test]
    fn full_fee_rejected() {
        let result = PoolConfig::new(
            pair(),
            lp_asset(),
            pool_account(),
            treasury(),
            BasisPoints::MAX_PERCENT,
            BasisPoints::ZERO,
        );
        assert!(matches!(result, Err(PoolError::InvalidConfiguration(_))));
    }

    #[test]
    fn oversized_treasury_share_rejected() {
        let result = PoolConfig::new(
            pair(),
            lp_asset(),
            pool_account(),
            treasury(),
            BasisPoints::new(30),
            BasisPoints::new(10_001),
        );
        assert!(matches!(result, Err(PoolError::InvalidConfiguration(_))));
    }

    #[test]
    fn ratio_tolerance_opt_in() {
        let Ok(cfg) = valid().with_ratio_tolerance(BasisPoints::new(100)) else {
            panic!("expected Ok");
        };
        assert_eq!(cfg.ratio_tolerance(), Some(BasisPoints::new(100)));
    }

    #[test]
    fn oversized_ratio_tolerance_rejected() {
        let result = valid().with_ratio_tolerance(BasisPoints::new(20_000));
        assert!(matches!(result, Err(PoolError::InvalidConfiguration(_))));
    }

    #[test]
    fn zero_fee_is_allowed() {
        let result = PoolConfig::new(
            pair(),
            lp_asset(),
            pool_account(),
            treasury(),
            BasisPoints::ZERO,
            BasisPoints::ZERO,
        );
        assert!(result.is_ok());
    }
}
