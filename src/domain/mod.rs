//! Fundamental domain value types for the pool engine.
//!
//! Newtypes with validated constructors and checked arithmetic: asset
//! and account identifiers, raw amounts, LP shares, basis-point rates,
//! and the fixed-point reserve ratio.

mod account;
mod amount;
mod asset;
mod asset_pair;
mod basis_points;
mod ratio;
mod rounding;
mod shares;
mod side;

pub use account::AccountId;
pub use amount::Amount;
pub use asset::AssetId;
pub use asset_pair::AssetPair;
pub use basis_points::BasisPoints;
pub use ratio::{Ratio, RATIO_SCALE};
pub use rounding::Rounding;
pub use shares::LpShares;
pub use side::PoolSide;
