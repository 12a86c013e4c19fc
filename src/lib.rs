//! # Reserve Pool
//!
//! Constant-product market-making engine: reserve bookkeeping, LP share
//! issuance and redemption, and fee-adjusted swap pricing over one pair
//! of fungible assets.
//!
//! The crate is a pure library. It holds no asset custody of its own —
//! every balance movement goes through the [`ledger::AssetLedger`]
//! collaborator the host system provides — and it performs no I/O
//! beyond [`tracing`] diagnostics.
//!
//! # Design
//!
//! - **Checked integer arithmetic everywhere.** All quantities are
//!   `u128` newtypes ([`domain::Amount`], [`domain::LpShares`]) whose
//!   operations return errors instead of wrapping or panicking, and
//!   every division names its rounding direction explicitly.
//! - **Rounding favours the pool.** Share mints, redemption payouts,
//!   and swap outputs all floor, so value lost to rounding accrues to
//!   the remaining LP holders rather than leaking out.
//! - **Atomic operations.** Each operation computes its complete
//!   transition, performs the ledger movements, and commits the new
//!   reserves last. Any failure leaves the pool exactly as it was.
//!
//! # Quick Start
//!
//! ```rust
//! use reserve_pool::domain::{AccountId, Amount, AssetId, AssetPair, BasisPoints, LpShares};
//! use reserve_pool::ledger::{AssetLedger, InMemoryLedger};
//! use reserve_pool::pool::{Pool, PoolConfig};
//!
//! // 1. Identify the pair, the LP claim asset, and the accounts.
//! let gold = AssetId::from_bytes([1u8; 32]);
//! let silver = AssetId::from_bytes([2u8; 32]);
//! let pair = AssetPair::new(gold, silver).expect("distinct assets");
//! let config = PoolConfig::new(
//!     pair,
//!     AssetId::from_bytes([3u8; 32]),     // LP claim asset
//!     AccountId::from_bytes([100u8; 32]), // pool's custody account
//!     AccountId::from_bytes([200u8; 32]), // treasury
//!     BasisPoints::new(30),               // 0.30% swap fee
//!     BasisPoints::new(5_000),            // half of it to the treasury
//! )
//! .expect("valid config");
//!
//! // 2. Seed a ledger and authorize the pool to pull the deposit.
//! let alice = AccountId::from_bytes([10u8; 32]);
//! let mut ledger = InMemoryLedger::new();
//! ledger.mint(gold, alice, Amount::new(1_000)).expect("mint");
//! ledger.mint(silver, alice, Amount::new(1_000)).expect("mint");
//! ledger.approve(gold, alice, config.pool_account(), Amount::new(1_000));
//! ledger.approve(silver, alice, config.pool_account(), Amount::new(1_000));
//!
//! // 3. Bootstrap the pool and trade against it.
//! let mut pool = Pool::new(config);
//! let added = pool
//!     .add_liquidity(&mut ledger, alice, Amount::new(1_000), Amount::new(1_000))
//!     .expect("bootstrap deposit");
//! assert_eq!(added.shares_minted, LpShares::new(1_000));
//!
//! let bob = AccountId::from_bytes([11u8; 32]);
//! ledger.mint(gold, bob, Amount::new(100)).expect("mint");
//! ledger.approve(gold, bob, config.pool_account(), Amount::new(100));
//! let swapped = pool
//!     .swap(&mut ledger, bob, gold, Amount::new(100))
//!     .expect("swap");
//! assert_eq!(ledger.balance_of(silver, bob), swapped.amount_out);
//! ```
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`domain`] | Amount, share, rate, and identifier newtypes |
//! | [`ledger`] | The [`ledger::AssetLedger`] trait and in-memory reference |
//! | [`pool`] | [`pool::Pool`], configuration, fees, LP math, events |
//! | [`error`] | The unified [`error::PoolError`] enum |
//! | [`prelude`] | One-line import of the common surface |

pub mod domain;
pub mod error;
pub mod ledger;
pub mod pool;
pub mod prelude;

pub use error::{PoolError, Result};
