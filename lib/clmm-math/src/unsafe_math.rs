use crate::big_num::U256;

pub trait UnsafeMathTrait {
    /// Returns ceil (x / y)
    /// Division by 0 panics, and must be checked externally
    fn div_rounding_up(x: Self, y: Self) -> Self;
}

impl UnsafeMathTrait for U256 {
    fn div_rounding_up(x: Self, y: Self) -> Self {
        x / y + U256::from((x % y > U256::default()) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_division_has_no_carry() {
        assert_eq!(
            U256::div_rounding_up(U256::from(9u8), U256::from(3u8)),
            U256::from(3u8)
        );
    }

    #[test]
    fn remainder_rounds_up() {
        assert_eq!(
            U256::div_rounding_up(U256::from(10u8), U256::from(3u8)),
            U256::from(4u8)
        );
        assert_eq!(
            U256::div_rounding_up(U256::from(1u8), U256::from(2u8)),
            U256::one()
        );
    }

    #[test]
    fn zero_numerator_stays_zero() {
        assert_eq!(
            U256::div_rounding_up(U256::zero(), U256::from(7u8)),
            U256::zero()
        );
    }

    #[test]
    fn large_values_do_not_wrap() {
        // (2^256 - 1) / 1 rounds to itself
        assert_eq!(U256::div_rounding_up(U256::MAX, U256::one()), U256::MAX);
        assert_eq!(U256::div_rounding_up(U256::MAX, U256::MAX), U256::one());
    }
}
