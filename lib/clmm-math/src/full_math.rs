//! Multiply-then-divide through a 512 bit intermediate product

use crate::big_num::{U256, U512};

pub trait MulDiv: Sized {
    /// Returns `floor(self * num / denom)`, computed with a double width
    /// intermediate so the product never wraps. `None` if `denom` is zero or
    /// the true quotient does not fit the operand width.
    fn mul_div_floor(self, num: Self, denom: Self) -> Option<Self>;

    /// Returns `ceil(self * num / denom)` under the same contract
    fn mul_div_ceil(self, num: Self, denom: Self) -> Option<Self>;
}

impl MulDiv for U256 {
    fn mul_div_floor(self, num: Self, denom: Self) -> Option<Self> {
        if denom.is_zero() {
            return None;
        }
        (self.full_mul(num) / U512::from(denom)).to_u256()
    }

    fn mul_div_ceil(self, num: Self, denom: Self) -> Option<Self> {
        if denom.is_zero() {
            return None;
        }
        let denom = U512::from(denom);
        let product = self.full_mul(num);
        let quotient = product / denom + U512::from(!(product % denom).is_zero() as u8);
        quotient.to_u256()
    }
}
