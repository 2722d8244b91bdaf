//! Stateless Q64.96 sqrt price arithmetic for a concentrated liquidity AMM.
//!
//! Relates three quantities during a swap: the pool price expressed as its
//! square root in fixed point form, the liquidity active in the current
//! range, and the token amounts moved into or out of the virtual reserves.
//! Every rounding decision favors the pool, so a caller can never extract
//! more value than a price movement is worth.
//!
//! All operations are pure functions of their arguments. Nothing here keeps
//! state, performs I/O, or loops over input-sized data.

pub mod big_num;
pub mod casts;
pub mod error;
pub mod fixed_point_96;
pub mod full_math;
pub mod sqrt_price_math;
pub mod unsafe_math;

pub use error::ErrorCode;
