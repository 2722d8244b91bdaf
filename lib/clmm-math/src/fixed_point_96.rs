//! Q64.96 fixed point constants

use crate::big_num::U256;

/// Number of fractional bits in a sqrt price
pub const RESOLUTION: u8 = 96;

/// 2^96, the scale factor of a Q64.96 number
pub const Q96: u128 = 1 << 96;

pub fn q96() -> U256 {
    U256::from(Q96)
}
