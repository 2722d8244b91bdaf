//! Checked narrowing conversions.
//!
//! Width narrowing is always an explicit fallible operation here, never an
//! implicit truncation: a sqrt price must fit 160 bits and a signed amount
//! must fit the 256 bit two's complement range.

use crate::big_num::U256;
use crate::error::ErrorCode;
use ethnum::I256;

/// Largest value a 160 bit sqrt price can hold
pub const MAX_U160: U256 = U256([u64::MAX, u64::MAX, u32::MAX as u64, 0]);

/// Checks that `value` fits the 160 bit sqrt price width
pub fn to_u160(value: U256) -> Result<U256, ErrorCode> {
    if value > MAX_U160 {
        return Err(ErrorCode::NarrowingFailure);
    }
    Ok(value)
}

/// Reinterprets an unsigned magnitude as a non-negative `I256`
pub fn to_i256(value: U256) -> Result<I256, ErrorCode> {
    if value.bit(255) {
        return Err(ErrorCode::NarrowingFailure);
    }
    let lo = (value.0[0] as u128) | ((value.0[1] as u128) << 64);
    let hi = (value.0[2] as u128) | ((value.0[3] as u128) << 64);
    Ok(I256::from_words(hi as i128, lo as i128))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u160_boundary() {
        assert_eq!(to_u160(MAX_U160), Ok(MAX_U160));
        assert_eq!(
            to_u160(MAX_U160 + U256::one()),
            Err(ErrorCode::NarrowingFailure)
        );
        assert_eq!(to_u160(U256::MAX), Err(ErrorCode::NarrowingFailure));
    }

    #[test]
    fn i256_small_values() {
        assert_eq!(to_i256(U256::zero()), Ok(I256::new(0)));
        assert_eq!(to_i256(U256::from(12345u32)), Ok(I256::new(12345)));
    }

    #[test]
    fn i256_wide_value_preserves_words() {
        // value straddling the 128 bit word boundary
        let value = (U256::from(7u8) << 128) | U256::from(u128::MAX);
        assert_eq!(to_i256(value), Ok(I256::from_words(7, u128::MAX as i128)));
    }

    #[test]
    fn i256_boundary() {
        let i256_max = (U256::one() << 255) - U256::one();
        assert_eq!(to_i256(i256_max), Ok(I256::MAX));
        assert_eq!(
            to_i256(U256::one() << 255),
            Err(ErrorCode::NarrowingFailure)
        );
        assert_eq!(to_i256(U256::MAX), Err(ErrorCode::NarrowingFailure));
    }
}
