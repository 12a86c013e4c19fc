//! Explicit rounding direction for integer division.

/// Rounding direction for every division performed by the engine.
///
/// Proportional-share arithmetic must never round silently: rounding
/// down favours the pool (mint, redeem, swap output), and the few places
/// that round up name it explicitly. Requiring the direction at the call
/// site keeps the favour-the-pool discipline visible in the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}
