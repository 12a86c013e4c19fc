//! The pool engine: deposit, withdrawal, and swap against one pair.

use tracing::debug;

use crate::domain::{AccountId, Amount, AssetId, LpShares, Ratio, Rounding};
use crate::error::{PoolError, Result};
use crate::ledger::AssetLedger;
use crate::pool::config::PoolConfig;
use crate::pool::events::{LiquidityAdded, LiquidityRemoved, PoolEvent, SwapExecuted};
use crate::pool::fees::FeePolicy;
use crate::pool::lp;
use crate::pool::state::PoolState;

/// A constant-product pool over one asset pair.
///
/// The pool owns its reserve bookkeeping and share accounting; asset
/// custody lives behind the [`AssetLedger`] the caller passes into each
/// operation. Every operation computes its full transition first, then
/// performs the ledger movements, and commits the new reserves as the
/// final step — a ledger failure anywhere leaves the pool state
/// untouched.
///
/// # Examples
///
/// ```
/// use reserve_pool::domain::{AccountId, Amount, AssetId, AssetPair, BasisPoints};
/// use reserve_pool::ledger::{AssetLedger, InMemoryLedger};
/// use reserve_pool::pool::{Pool, PoolConfig};
///
/// let pair = AssetPair::new(
///     AssetId::from_bytes([1u8; 32]),
///     AssetId::from_bytes([2u8; 32]),
/// )
/// .expect("distinct assets");
/// let config = PoolConfig::new(
///     pair,
///     AssetId::from_bytes([3u8; 32]),
///     AccountId::from_bytes([100u8; 32]),
///     AccountId::from_bytes([200u8; 32]),
///     BasisPoints::new(30),
///     BasisPoints::new(5_000),
/// )
/// .expect("valid config");
///
/// let provider = AccountId::from_bytes([10u8; 32]);
/// let mut ledger = InMemoryLedger::new();
/// ledger.mint(pair.asset_a(), provider, Amount::new(500)).expect("mint");
/// ledger.mint(pair.asset_b(), provider, Amount::new(500)).expect("mint");
/// ledger.approve(pair.asset_a(), provider, config.pool_account(), Amount::new(500));
/// ledger.approve(pair.asset_b(), provider, config.pool_account(), Amount::new(500));
///
/// let mut pool = Pool::new(config);
/// let added = pool
///     .add_liquidity(&mut ledger, provider, Amount::new(500), Amount::new(500))
///     .expect("bootstrap deposit");
/// assert_eq!(added.shares_minted.get(), 500);
/// ```
#[derive(Debug, Clone)]
pub struct Pool {
    config: PoolConfig,
    state: PoolState,
    events: Vec<PoolEvent>,
}

impl Pool {
    /// Creates an empty pool from a validated configuration.
    #[must_use]
    pub fn new(config: PoolConfig) -> Self {
        Self {
            config,
            state: PoolState::new(),
            events: Vec::new(),
        }
    }

    /// Returns the pool's configuration.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Returns the current reserves as `(reserve_a, reserve_b)`.
    #[must_use]
    pub const fn reserves(&self) -> (Amount, Amount) {
        (self.state.reserve_a(), self.state.reserve_b())
    }

    /// Returns the outstanding LP share supply.
    #[must_use]
    pub const fn lp_supply(&self) -> LpShares {
        self.state.lp_supply()
    }

    /// Returns `reserve_a / reserve_b` at 10^18 fixed-point precision.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::EmptyPool`] if the pool holds no reserves,
    /// or [`PoolError::Overflow`] if the scaled numerator overflows.
    pub fn liquidity_ratio(&self) -> Result<Ratio> {
        if !self.state.is_funded() {
            return Err(PoolError::EmptyPool);
        }
        Ratio::from_amounts(self.state.reserve_a(), self.state.reserve_b())
            .ok_or(PoolError::Overflow("liquidity ratio overflow"))
    }

    /// Returns the constant-product invariant `reserve_a * reserve_b`,
    /// or `None` if it overflows `u128`.
    #[must_use]
    pub const fn invariant(&self) -> Option<u128> {
        self.state.invariant()
    }

    /// Returns the ordered history of committed operations.
    #[must_use]
    pub fn events(&self) -> &[PoolEvent] {
        &self.events
    }

    /// Drains and returns the event history, oldest first.
    pub fn take_events(&mut self) -> Vec<PoolEvent> {
        core::mem::take(&mut self.events)
    }

    /// Deposits up to `amount_a` and `amount_b` and mints LP shares.
    ///
    /// The first deposit sets the pool's price and mints the geometric
    /// mean of the two amounts. Later deposits are trimmed to the
    /// current reserve ratio; the unused excess of an off-ratio offer
    /// stays with the provider. Only the trimmed amounts are pulled
    /// from the provider's ledger balance, and a pull that fails after
    /// the first leg refunds it, so a failed deposit never strands
    /// funds in custody.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAmount`] if either offer is zero or the
    ///   deposit is too small to mint a share.
    /// - [`PoolError::RatioMismatch`] if a configured drift tolerance
    ///   is exceeded.
    /// - [`PoolError::Ledger`] if pulling the deposit or minting the
    ///   shares fails.
    /// - [`PoolError::Busy`] if called re-entrantly.
    pub fn add_liquidity<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        provider: AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<LiquidityAdded> {
        self.state.begin()?;
        let result = self.add_liquidity_inner(ledger, provider, amount_a, amount_b);
        self.state.finish();
        result
    }

    fn add_liquidity_inner<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        provider: AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<LiquidityAdded> {
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(PoolError::InvalidAmount("deposit amounts must be positive"));
        }

        let (reserve_a, reserve_b) = self.reserves();
        let supply = self.state.lp_supply();

        let (used_a, used_b, minted) = if self.state.is_funded() {
            if let Some(tolerance) = self.config.ratio_tolerance() {
                if lp::drift_exceeds(amount_a, amount_b, reserve_a, reserve_b, tolerance)? {
                    return Err(PoolError::RatioMismatch);
                }
            }
            let (used_a, used_b) = lp::matched_amounts(amount_a, amount_b, reserve_a, reserve_b)?;
            if used_a.is_zero() || used_b.is_zero() {
                return Err(PoolError::InvalidAmount(
                    "offer matches to a zero deposit at the current ratio",
                ));
            }
            let minted = lp::shares_for_deposit(used_a, used_b, reserve_a, reserve_b, supply)?;
            (used_a, used_b, minted)
        } else {
            (amount_a, amount_b, lp::bootstrap_shares(amount_a, amount_b)?)
        };

        let new_reserve_a = reserve_a
            .checked_add(&used_a)
            .ok_or(PoolError::Overflow("reserve overflow on deposit"))?;
        let new_reserve_b = reserve_b
            .checked_add(&used_b)
            .ok_or(PoolError::Overflow("reserve overflow on deposit"))?;
        let new_supply = supply
            .checked_add(&minted)
            .ok_or(PoolError::Overflow("LP supply overflow"))?;

        let pair = self.config.pair();
        let pool_account = self.config.pool_account();
        ledger.transfer_from(pair.asset_a(), provider, pool_account, used_a)?;
        if let Err(err) = ledger.transfer_from(pair.asset_b(), provider, pool_account, used_b) {
            // the first leg is already in custody but not yet booked as
            // a reserve; return it before surfacing the failure
            ledger.transfer(pair.asset_a(), pool_account, provider, used_a)?;
            return Err(err.into());
        }
        if let Err(err) = ledger.mint(self.config.lp_asset(), provider, minted.as_amount()) {
            ledger.transfer(pair.asset_a(), pool_account, provider, used_a)?;
            ledger.transfer(pair.asset_b(), pool_account, provider, used_b)?;
            return Err(err.into());
        }

        self.state.commit(new_reserve_a, new_reserve_b, new_supply);
        let record = LiquidityAdded {
            provider,
            amount_a: used_a,
            amount_b: used_b,
            shares_minted: minted,
        };
        self.events.push(PoolEvent::LiquidityAdded(record));
        debug!(
            %provider,
            amount_a = %used_a,
            amount_b = %used_b,
            shares = %minted,
            "liquidity added"
        );
        Ok(record)
    }

    /// Burns `shares` and pays out the proportional reserves.
    ///
    /// Payouts floor, so a partial withdrawal never takes more than the
    /// redeemed fraction of either reserve. Redeeming the entire supply
    /// is exact and drains the pool back to its empty state.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAmount`] if `shares` is zero or too few
    ///   for any payout.
    /// - [`PoolError::EmptyPool`] if the pool holds no reserves.
    /// - [`PoolError::InsufficientShare`] if `shares` exceeds the
    ///   provider's LP balance or the outstanding supply.
    /// - [`PoolError::Ledger`] if burning the shares or paying out
    ///   fails.
    /// - [`PoolError::Busy`] if called re-entrantly.
    pub fn remove_liquidity<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        provider: AccountId,
        shares: LpShares,
    ) -> Result<LiquidityRemoved> {
        self.state.begin()?;
        let result = self.remove_liquidity_inner(ledger, provider, shares);
        self.state.finish();
        result
    }

    fn remove_liquidity_inner<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        provider: AccountId,
        shares: LpShares,
    ) -> Result<LiquidityRemoved> {
        if shares.is_zero() {
            return Err(PoolError::InvalidAmount("redeemed shares must be positive"));
        }
        if !self.state.is_funded() {
            return Err(PoolError::EmptyPool);
        }

        if ledger.balance_of(self.config.lp_asset(), provider) < shares.as_amount() {
            return Err(PoolError::InsufficientShare);
        }

        let (reserve_a, reserve_b) = self.reserves();
        let supply = self.state.lp_supply();
        let (out_a, out_b) = lp::redemption_amounts(shares, reserve_a, reserve_b, supply)?;
        if out_a.is_zero() && out_b.is_zero() {
            return Err(PoolError::InvalidAmount(
                "redeemed shares too few for any payout",
            ));
        }

        let new_reserve_a = reserve_a
            .checked_sub(&out_a)
            .ok_or(PoolError::Overflow("reserve underflow on withdrawal"))?;
        let new_reserve_b = reserve_b
            .checked_sub(&out_b)
            .ok_or(PoolError::Overflow("reserve underflow on withdrawal"))?;
        let new_supply = supply
            .checked_sub(&shares)
            .ok_or(PoolError::InsufficientShare)?;

        let pair = self.config.pair();
        let pool_account = self.config.pool_account();
        ledger.burn(self.config.lp_asset(), provider, shares.as_amount())?;
        ledger.transfer(pair.asset_a(), pool_account, provider, out_a)?;
        ledger.transfer(pair.asset_b(), pool_account, provider, out_b)?;

        self.state.commit(new_reserve_a, new_reserve_b, new_supply);
        let record = LiquidityRemoved {
            provider,
            amount_a: out_a,
            amount_b: out_b,
            shares_burned: shares,
        };
        self.events.push(PoolEvent::LiquidityRemoved(record));
        debug!(
            %provider,
            amount_a = %out_a,
            amount_b = %out_b,
            shares = %shares,
            "liquidity removed"
        );
        Ok(record)
    }

    /// Swaps `amount_in` of `asset_in` for the pair's other asset.
    ///
    /// The fee is deducted from the input before pricing; the output is
    /// `floor(reserve_out * net / (reserve_in + net))` where `net` is
    /// the fee-adjusted input. The treasury's slice of the fee leaves
    /// the pool; the rest of the fee stays in the input reserve, so the
    /// constant product never decreases across a swap.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidAmount`] if `amount_in` is zero or too
    ///   small to buy any output.
    /// - [`PoolError::UnsupportedAsset`] if `asset_in` is not in the
    ///   pair.
    /// - [`PoolError::EmptyPool`] if the pool holds no reserves.
    /// - [`PoolError::Ledger`] if any transfer fails.
    /// - [`PoolError::Busy`] if called re-entrantly.
    pub fn swap<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        trader: AccountId,
        asset_in: AssetId,
        amount_in: Amount,
    ) -> Result<SwapExecuted> {
        self.state.begin()?;
        let result = self.swap_inner(ledger, trader, asset_in, amount_in);
        self.state.finish();
        result
    }

    fn swap_inner<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        trader: AccountId,
        asset_in: AssetId,
        amount_in: Amount,
    ) -> Result<SwapExecuted> {
        if amount_in.is_zero() {
            return Err(PoolError::InvalidAmount("swap input must be positive"));
        }
        let side_in = self
            .config
            .pair()
            .side_of(&asset_in)
            .ok_or(PoolError::UnsupportedAsset)?;
        if !self.state.is_funded() {
            return Err(PoolError::EmptyPool);
        }

        let side_out = side_in.opposite();
        let reserve_in = self.state.reserve(side_in);
        let reserve_out = self.state.reserve(side_out);
        let asset_out = self.config.pair().asset_on(side_out);

        let fee = FeePolicy::new(self.config.fee_rate(), self.config.treasury_share())
            .split(amount_in)?;
        // fee_rate < 100% guarantees net > 0 for any positive input
        let net_in = amount_in
            .checked_sub(&fee.total)
            .ok_or(PoolError::Overflow("fee exceeds swap input"))?;

        let denominator = reserve_in
            .checked_add(&net_in)
            .ok_or(PoolError::Overflow("swap denominator overflow"))?;
        let amount_out = reserve_out
            .checked_mul_div(&net_in, &denominator, Rounding::Down)
            .ok_or(PoolError::Overflow("swap output overflow"))?;
        if amount_out.is_zero() {
            return Err(PoolError::InvalidAmount("swap input too small for any output"));
        }

        // the input reserve keeps everything but the treasury slice
        let retained = amount_in
            .checked_sub(&fee.to_treasury)
            .ok_or(PoolError::Overflow("fee exceeds swap input"))?;
        let new_reserve_in = reserve_in
            .checked_add(&retained)
            .ok_or(PoolError::Overflow("reserve overflow on swap"))?;
        // amount_out < reserve_out: the floored quotient of
        // reserve_out * net / (reserve_in + net) with reserve_in > 0
        let new_reserve_out = reserve_out
            .checked_sub(&amount_out)
            .ok_or(PoolError::Overflow("reserve underflow on swap"))?;

        let pool_account = self.config.pool_account();
        ledger.transfer_from(asset_in, trader, pool_account, amount_in)?;
        if !fee.to_treasury.is_zero() {
            ledger.transfer(asset_in, pool_account, self.config.treasury(), fee.to_treasury)?;
        }
        ledger.transfer(asset_out, pool_account, trader, amount_out)?;

        let (new_reserve_a, new_reserve_b) = if side_in.is_asset_a() {
            (new_reserve_in, new_reserve_out)
        } else {
            (new_reserve_out, new_reserve_in)
        };
        let supply = self.state.lp_supply();
        self.state.commit(new_reserve_a, new_reserve_b, supply);
        let record = SwapExecuted {
            trader,
            amount_in,
            amount_out,
            asset_in,
            asset_out,
            fee: fee.total,
        };
        self.events.push(PoolEvent::SwapExecuted(record));
        debug!(
            %trader,
            %asset_in,
            %asset_out,
            amount_in = %amount_in,
            amount_out = %amount_out,
            fee = %fee.total,
            "swap executed"
        );
        Ok(record)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{AssetPair, BasisPoints};
    use crate::ledger::InMemoryLedger;

    fn asset_a() -> AssetId {
        AssetId::from_bytes([1u8; 32])
    }

    fn asset_b() -> AssetId {
        AssetId::from_bytes([2u8; 32])
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

    fn provider() -> AccountId {
        AccountId::from_bytes([10u8; 32])
    }

    fn trader() -> AccountId {
        AccountId::from_bytes([11u8; 32])
    }

    fn config(fee_bps: u32, treasury_bps: u32) -> PoolConfig {
        let Ok(pair) = AssetPair::new(asset_a(), asset_b()) else {
            panic!("expected valid pair");
        };
        let Ok(cfg) = PoolConfig::new(
            pair,
            lp_asset(),
            pool_account(),
            treasury(),
            BasisPoints::new(fee_bps),
            BasisPoints::new(treasury_bps),
        ) else {
            panic!("expected valid config");
        };
        cfg
    }

    fn fund(ledger: &mut InMemoryLedger, account: AccountId, a: u128, b: u128) {
        let Ok(()) = ledger.mint(asset_a(), account, Amount::new(a)) else {
            panic!("mint a");
        };
        let Ok(()) = ledger.mint(asset_b(), account, Amount::new(b)) else {
            panic!("mint b");
        };
        ledger.approve(asset_a(), account, pool_account(), Amount::new(a));
        ledger.approve(asset_b(), account, pool_account(), Amount::new(b));
    }

    fn seeded(fee_bps: u32, treasury_bps: u32, a: u128, b: u128) -> (Pool, InMemoryLedger) {
        let mut pool = Pool::new(config(fee_bps, treasury_bps));
        let mut ledger = InMemoryLedger::new();
        fund(&mut ledger, provider(), a, b);
        let Ok(_) = pool.add_liquidity(&mut ledger, provider(), Amount::new(a), Amount::new(b))
        else {
            panic!("bootstrap deposit");
        };
        (pool, ledger)
    }

    // -- add_liquidity ------------------------------------------------------

    #[test]
    fn bootstrap_mints_geometric_mean() {
        let (pool, ledger) = seeded(30, 0, 500, 500);
        assert_eq!(pool.reserves(), (Amount::new(500), Amount::new(500)));
        assert_eq!(pool.lp_supply(), LpShares::new(500));
        assert_eq!(ledger.balance_of(lp_asset(), provider()), Amount::new(500));
        assert_eq!(ledger.balance_of(asset_a(), pool_account()), Amount::new(500));
    }

    #[test]
    fn second_deposit_is_proportional() {
        let (mut pool, mut ledger) = seeded(30, 0, 1_000, 2_000);
        let other = AccountId::from_bytes([12u8; 32]);
        fund(&mut ledger, other, 100, 200);
        let Ok(added) =
            pool.add_liquidity(&mut ledger, other, Amount::new(100), Amount::new(200))
        else {
            panic!("expected Ok");
        };
        // bootstrap minted isqrt(1_000 * 2_000) = 1_414
        assert_eq!(added.shares_minted, LpShares::new(141));
        assert_eq!(pool.reserves(), (Amount::new(1_100), Amount::new(2_200)));
    }

    #[test]
    fn off_ratio_excess_stays_with_provider() {
        let (mut pool, mut ledger) = seeded(30, 0, 1_000, 2_000);
        let other = AccountId::from_bytes([12u8; 32]);
        fund(&mut ledger, other, 100, 500);
        let Ok(added) =
            pool.add_liquidity(&mut ledger, other, Amount::new(100), Amount::new(500))
        else {
            panic!("expected Ok");
        };
        assert_eq!(added.amount_a, Amount::new(100));
        assert_eq!(added.amount_b, Amount::new(200));
        // only the matched amount was pulled
        assert_eq!(ledger.balance_of(asset_b(), other), Amount::new(300));
    }

    #[test]
    fn zero_deposit_rejected() {
        let mut pool = Pool::new(config(30, 0));
        let mut ledger = InMemoryLedger::new();
        let result = pool.add_liquidity(&mut ledger, provider(), Amount::ZERO, Amount::new(10));
        assert!(matches!(result, Err(PoolError::InvalidAmount(_))));
    }

    #[test]
    fn drift_tolerance_enforced_when_configured() {
        let Ok(cfg) = config(30, 0).with_ratio_tolerance(BasisPoints::new(100)) else {
            panic!("expected Ok");
        };
        let mut pool = Pool::new(cfg);
        let mut ledger = InMemoryLedger::new();
        fund(&mut ledger, provider(), 10_000, 10_000);
        let Ok(_) =
            pool.add_liquidity(&mut ledger, provider(), Amount::new(1_000), Amount::new(1_000))
        else {
            panic!("bootstrap deposit");
        };
        // 50% off the pool ratio against a 1% tolerance
        let result =
            pool.add_liquidity(&mut ledger, provider(), Amount::new(100), Amount::new(150));
        assert_eq!(result, Err(PoolError::RatioMismatch));
    }

    #[test]
    fn failed_deposit_leaves_state_untouched() {
        let (mut pool, mut ledger) = seeded(30, 0, 1_000, 2_000);
        let before = pool.reserves();
        let broke = AccountId::from_bytes([13u8; 32]);
        // no balance, no allowance
        let result = pool.add_liquidity(&mut ledger, broke, Amount::new(100), Amount::new(200));
        assert!(matches!(result, Err(PoolError::Ledger(_))));
        assert_eq!(pool.reserves(), before);
        assert_eq!(pool.lp_supply(), LpShares::new(1_414));
    }

    #[test]
    fn one_leg_deposit_refunds_the_pulled_leg() {
        let (mut pool, mut ledger) = seeded(30, 0, 1_000, 1_000);
        let one_sided = AccountId::from_bytes([14u8; 32]);
        // holds and approved asset A only; the B pull will fail
        let Ok(()) = ledger.mint(asset_a(), one_sided, Amount::new(100)) else {
            panic!("mint a");
        };
        ledger.approve(asset_a(), one_sided, pool_account(), Amount::new(100));

        let result =
            pool.add_liquidity(&mut ledger, one_sided, Amount::new(100), Amount::new(100));
        assert!(matches!(result, Err(PoolError::Ledger(_))));

        // the A leg came back, and custody holds exactly what is booked
        assert_eq!(ledger.balance_of(asset_a(), one_sided), Amount::new(100));
        assert_eq!(
            ledger.balance_of(asset_a(), pool_account()),
            pool.reserves().0
        );
        assert_eq!(pool.reserves(), (Amount::new(1_000), Amount::new(1_000)));
        assert_eq!(pool.lp_supply(), LpShares::new(1_000));
    }

    // -- remove_liquidity ---------------------------------------------------

    #[test]
    fn partial_withdrawal_pays_proportionally() {
        let (mut pool, mut ledger) = seeded(30, 0, 1_000, 2_000);
        let Ok(removed) = pool.remove_liquidity(&mut ledger, provider(), LpShares::new(707))
        else {
            panic!("expected Ok");
        };
        // 707 of 1_414 shares → exactly half of each reserve
        assert_eq!(removed.amount_a, Amount::new(500));
        assert_eq!(removed.amount_b, Amount::new(1_000));
        assert_eq!(pool.lp_supply(), LpShares::new(707));
        assert_eq!(ledger.balance_of(lp_asset(), provider()), Amount::new(707));
    }

    #[test]
    fn full_withdrawal_drains_the_pool() {
        let (mut pool, mut ledger) = seeded(30, 0, 999, 2_001);
        let supply = pool.lp_supply();
        let Ok(removed) = pool.remove_liquidity(&mut ledger, provider(), supply) else {
            panic!("expected Ok");
        };
        assert_eq!(removed.amount_a, Amount::new(999));
        assert_eq!(removed.amount_b, Amount::new(2_001));
        assert_eq!(pool.reserves(), (Amount::ZERO, Amount::ZERO));
        assert_eq!(pool.lp_supply(), LpShares::ZERO);
        assert!(pool.liquidity_ratio().is_err());
    }

    #[test]
    fn withdrawal_beyond_supply_rejected() {
        let (mut pool, mut ledger) = seeded(30, 0, 500, 500);
        let result = pool.remove_liquidity(&mut ledger, provider(), LpShares::new(501));
        assert_eq!(result, Err(PoolError::InsufficientShare));
    }

    #[test]
    fn withdrawal_without_shares_rejected() {
        let (mut pool, mut ledger) = seeded(30, 0, 500, 500);
        // trader holds no LP shares
        let result = pool.remove_liquidity(&mut ledger, trader(), LpShares::new(100));
        assert_eq!(result, Err(PoolError::InsufficientShare));
        assert_eq!(pool.lp_supply(), LpShares::new(500));
    }

    #[test]
    fn withdrawal_from_empty_pool_rejected() {
        let mut pool = Pool::new(config(30, 0));
        let mut ledger = InMemoryLedger::new();
        let result = pool.remove_liquidity(&mut ledger, provider(), LpShares::new(1));
        assert_eq!(result, Err(PoolError::EmptyPool));
    }

    // -- swap ---------------------------------------------------------------

    #[test]
    fn swap_small_input_pays_no_fee() {
        // fee floors to zero: floor(100 * 30 / 10_000) = 0
        let (mut pool, mut ledger) = seeded(30, 0, 500, 500);
        fund(&mut ledger, trader(), 100, 0);
        let Ok(swapped) = pool.swap(&mut ledger, trader(), asset_a(), Amount::new(100)) else {
            panic!("expected Ok");
        };
        assert_eq!(swapped.fee, Amount::ZERO);
        assert_eq!(swapped.amount_out, Amount::new(83));
        assert_eq!(pool.reserves(), (Amount::new(600), Amount::new(417)));
        assert_eq!(ledger.balance_of(asset_b(), trader()), Amount::new(83));
    }

    #[test]
    fn swap_splits_fee_with_treasury() {
        let (mut pool, mut ledger) = seeded(30, 5_000, 1_000_000, 1_000_000);
        fund(&mut ledger, trader(), 10_000, 0);
        let Ok(swapped) = pool.swap(&mut ledger, trader(), asset_a(), Amount::new(10_000)) else {
            panic!("expected Ok");
        };
        // fee 30, treasury 15, net 9_970 → out floor(1e6 * 9_970 / 1_009_970)
        assert_eq!(swapped.fee, Amount::new(30));
        assert_eq!(swapped.amount_out, Amount::new(9_871));
        assert_eq!(
            pool.reserves(),
            (Amount::new(1_009_985), Amount::new(990_129))
        );
        assert_eq!(ledger.balance_of(asset_a(), treasury()), Amount::new(15));
    }

    #[test]
    fn swap_direction_b_to_a() {
        let (mut pool, mut ledger) = seeded(30, 0, 500, 500);
        fund(&mut ledger, trader(), 0, 100);
        let Ok(swapped) = pool.swap(&mut ledger, trader(), asset_b(), Amount::new(100)) else {
            panic!("expected Ok");
        };
        assert_eq!(swapped.asset_out, asset_a());
        assert_eq!(swapped.amount_out, Amount::new(83));
        assert_eq!(pool.reserves(), (Amount::new(417), Amount::new(600)));
    }

    #[test]
    fn swap_never_decreases_invariant() {
        let (mut pool, mut ledger) = seeded(30, 0, 1_000_000, 1_000_000);
        let Some(before) = pool.invariant() else {
            panic!("expected Some");
        };
        fund(&mut ledger, trader(), 10_000, 0);
        let Ok(_) = pool.swap(&mut ledger, trader(), asset_a(), Amount::new(10_000)) else {
            panic!("expected Ok");
        };
        let Some(after) = pool.invariant() else {
            panic!("expected Some");
        };
        assert!(after >= before);
    }

    #[test]
    fn swap_foreign_asset_rejected() {
        let (mut pool, mut ledger) = seeded(30, 0, 500, 500);
        let foreign = AssetId::from_bytes([9u8; 32]);
        let result = pool.swap(&mut ledger, trader(), foreign, Amount::new(10));
        assert_eq!(result, Err(PoolError::UnsupportedAsset));
    }

    #[test]
    fn swap_against_empty_pool_rejected() {
        let mut pool = Pool::new(config(30, 0));
        let mut ledger = InMemoryLedger::new();
        let result = pool.swap(&mut ledger, trader(), asset_a(), Amount::new(10));
        assert_eq!(result, Err(PoolError::EmptyPool));
    }

    #[test]
    fn swap_zero_input_rejected() {
        let (mut pool, mut ledger) = seeded(30, 0, 500, 500);
        let result = pool.swap(&mut ledger, trader(), asset_a(), Amount::ZERO);
        assert!(matches!(result, Err(PoolError::InvalidAmount(_))));
    }

    #[test]
    fn swap_dust_input_rejected_when_output_floors_to_zero() {
        let (mut pool, mut ledger) = seeded(0, 0, 1_000_000, 2);
        fund(&mut ledger, trader(), 10, 0);
        let result = pool.swap(&mut ledger, trader(), asset_a(), Amount::new(1));
        assert!(matches!(result, Err(PoolError::InvalidAmount(_))));
    }

    #[test]
    fn failed_swap_leaves_state_untouched() {
        let (mut pool, mut ledger) = seeded(30, 0, 500, 500);
        let before = pool.reserves();
        // trader has no balance of asset_a
        let result = pool.swap(&mut ledger, trader(), asset_a(), Amount::new(100));
        assert!(matches!(result, Err(PoolError::Ledger(_))));
        assert_eq!(pool.reserves(), before);
    }

    // -- accessors & events -------------------------------------------------

    #[test]
    fn liquidity_ratio_reflects_reserves() {
        let (pool, _) = seeded(30, 0, 600, 400);
        let Ok(ratio) = pool.liquidity_ratio() else {
            panic!("expected Ok");
        };
        assert!((ratio.as_f64() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn liquidity_ratio_of_empty_pool_rejected() {
        let pool = Pool::new(config(30, 0));
        assert_eq!(pool.liquidity_ratio(), Err(PoolError::EmptyPool));
    }

    #[test]
    fn events_record_history_in_order() {
        let (mut pool, mut ledger) = seeded(30, 0, 500, 500);
        fund(&mut ledger, trader(), 100, 0);
        let Ok(_) = pool.swap(&mut ledger, trader(), asset_a(), Amount::new(100)) else {
            panic!("expected Ok");
        };
        let Ok(_) = pool.remove_liquidity(&mut ledger, provider(), LpShares::new(100)) else {
            panic!("expected Ok");
        };
        let events = pool.events();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], PoolEvent::LiquidityAdded(_)));
        assert!(matches!(events[1], PoolEvent::SwapExecuted(_)));
        assert!(matches!(events[2], PoolEvent::LiquidityRemoved(_)));
        let drained = pool.take_events();
        assert_eq!(drained.len(), 3);
        assert!(pool.events().is_empty());
    }
}
