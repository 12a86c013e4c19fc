//! LP share accounting math.
//!
//! Pure functions over amounts and shares: the geometric-mean bootstrap
//! mint, proportional mint and redemption, the optimal matched deposit
//! pair, and the optional ratio-drift check. Every division floors, so
//! rounding always favours the pool — except the final full withdrawal,
//! where `shares == supply` makes the floored quotients exact and the
//! reserves drain to zero without dust.

use crate::domain::{Amount, BasisPoints, LpShares, Rounding};
use crate::error::{PoolError, Result};

/// Integer square root via Newton's method.
const fn isqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// Shares minted for the first deposit: `isqrt(amount_a * amount_b)`.
///
/// The geometric mean makes the initial share count independent of
/// which asset is quoted first and prices one share at the geometric
/// mean of the two deposits. The ratio of the first deposit becomes the
/// pool's initial price and is never re-derived.
///
/// # Errors
///
/// - [`PoolError::Overflow`] if the deposit product overflows.
/// - [`PoolError::InvalidAmount`] if the product floors to zero shares.
pub fn bootstrap_shares(amount_a: Amount, amount_b: Amount) -> Result<LpShares> {
    let product = amount_a
        .checked_mul(&amount_b)
        .ok_or(PoolError::Overflow("bootstrap deposit product overflow"))?;
    let shares = isqrt(product.get());
    if shares == 0 {
        return Err(PoolError::InvalidAmount(
            "deposit too small to mint any shares",
        ));
    }
    Ok(LpShares::new(shares))
}

/// Trims an offer to the pool's current ratio.
///
/// Given offered amounts and current reserves, computes the optimal
/// counterpart of each offer (`b_opt = a * rB / rA`, floored) and keeps
/// the smaller matched pair. The excess of the larger offer is simply
/// not used — the caller keeps it, so an off-ratio offer never donates
/// value to the pool.
///
/// # Errors
///
/// - [`PoolError::DivisionByZero`] if either reserve is zero.
/// - [`PoolError::Overflow`] if an intermediate product overflows.
pub fn matched_amounts(
    offer_a: Amount,
    offer_b: Amount,
    reserve_a: Amount,
    reserve_b: Amount,
) -> Result<(Amount, Amount)> {
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(PoolError::DivisionByZero);
    }
    let b_optimal = offer_a
        .checked_mul_div(&reserve_b, &reserve_a, Rounding::Down)
        .ok_or(PoolError::Overflow("optimal counterpart overflow"))?;
    if b_optimal <= offer_b {
        return Ok((offer_a, b_optimal));
    }
    let a_optimal = offer_b
        .checked_mul_div(&reserve_a, &reserve_b, Rounding::Down)
        .ok_or(PoolError::Overflow("optimal counterpart overflow"))?;
    // a_optimal <= offer_a here: b_optimal > offer_b implies the offer
    // is B-short, so matching to B can only shrink the A side
    Ok((a_optimal, offer_b))
}

/// Shares minted for a proportional deposit into a funded pool.
///
/// `min(supply * used_a / reserve_a, supply * used_b / reserve_b)`,
/// both floored. The two quotients agree within rounding when the used
/// amounts came from [`matched_amounts`]; taking the minimum keeps the
/// price of a share from ever dropping on a deposit.
///
/// # Errors
///
/// - [`PoolError::DivisionByZero`] if either reserve is zero.
/// - [`PoolError::Overflow`] if an intermediate product overflows.
/// - [`PoolError::InvalidAmount`] if the deposit floors to zero shares.
pub fn shares_for_deposit(
    used_a: Amount,
    used_b: Amount,
    reserve_a: Amount,
    reserve_b: Amount,
    supply: LpShares,
) -> Result<LpShares> {
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(PoolError::DivisionByZero);
    }
    let supply_amount = supply.as_amount();
    let by_a = supply_amount
        .checked_mul_div(&used_a, &reserve_a, Rounding::Down)
        .ok_or(PoolError::Overflow("share mint numerator overflow"))?;
    let by_b = supply_amount
        .checked_mul_div(&used_b, &reserve_b, Rounding::Down)
        .ok_or(PoolError::Overflow("share mint numerator overflow"))?;
    let minted = core::cmp::min(by_a.get(), by_b.get());
    if minted == 0 {
        return Err(PoolError::InvalidAmount(
            "deposit too small to mint any shares",
        ));
    }
    Ok(LpShares::new(minted))
}

/// Reserve payouts for redeeming `shares` out of `supply`.
///
/// `out_x = reserve_x * shares / supply`, floored. When
/// `shares == supply` both quotients are exact, so the last withdrawal
/// returns the reserves in full.
///
/// # Errors
///
/// - [`PoolError::DivisionByZero`] if `supply` is zero.
/// - [`PoolError::InsufficientShare`] if `shares > supply`.
/// - [`PoolError::Overflow`] if an intermediate product overflows.
pub fn redemption_amounts(
    shares: LpShares,
    reserve_a: Amount,
    reserve_b: Amount,
    supply: LpShares,
) -> Result<(Amount, Amount)> {
    if supply.is_zero() {
        return Err(PoolError::DivisionByZero);
    }
    if shares > supply {
        return Err(PoolError::InsufficientShare);
    }
    let shares_amount = shares.as_amount();
    let supply_amount = supply.as_amount();
    let out_a = reserve_a
        .checked_mul_div(&shares_amount, &supply_amount, Rounding::Down)
        .ok_or(PoolError::Overflow("redemption numerator overflow"))?;
    let out_b = reserve_b
        .checked_mul_div(&shares_amount, &supply_amount, Rounding::Down)
        .ok_or(PoolError::Overflow("redemption numerator overflow"))?;
    Ok((out_a, out_b))
}

/// Returns `true` if an offer's ratio drifts from the pool's by more
/// than `tolerance`.
///
/// Compares cross products (`offer_a * reserve_b` vs
/// `offer_b * reserve_a`); their relative difference against the
/// smaller side must stay within the tolerance. Using the smaller side
/// is the conservative reading: a drift is never under-reported.
///
/// # Errors
///
/// Returns [`PoolError::Overflow`] if a cross product overflows.
pub fn drift_exceeds(
    offer_a: Amount,
    offer_b: Amount,
    reserve_a: Amount,
    reserve_b: Amount,
    tolerance: BasisPoints,
) -> Result<bool> {
    let lhs = offer_a
        .checked_mul(&reserve_b)
        .ok_or(PoolError::Overflow("drift cross product overflow"))?;
    let rhs = offer_b
        .checked_mul(&reserve_a)
        .ok_or(PoolError::Overflow("drift cross product overflow"))?;
    let (smaller, larger) = if lhs <= rhs { (lhs, rhs) } else { (rhs, lhs) };
    let diff = larger
        .checked_sub(&smaller)
        .ok_or(PoolError::Overflow("drift difference underflow"))?;
    let allowed = tolerance.apply(smaller, Rounding::Down)?;
    Ok(diff > allowed)
}
