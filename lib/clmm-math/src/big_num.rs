//! Wide unsigned integer types backing the fixed point math modules

use uint::construct_uint;

construct_uint! {
    pub struct U256(4);
}

construct_uint! {
    pub struct U512(8);
}

impl From<U256> for U512 {
    fn from(value: U256) -> Self {
        let mut words = [0u64; 8];
        words[..4].copy_from_slice(&value.0);
        U512(words)
    }
}

impl U512 {
    /// Narrows to 256 bits, `None` if any of the upper words are set
    pub fn to_u256(self) -> Option<U256> {
        if self.0[4..].iter().any(|word| *word != 0) {
            None
        } else {
            let mut words = [0u64; 4];
            words.copy_from_slice(&self.0[..4]);
            Some(U256(words))
        }
    }
}

impl U256 {
    /// Full 512 bit product, cannot overflow
    pub fn full_mul(self, other: U256) -> U512 {
        U512::from(self) * U512::from(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_mul_of_max_values_does_not_wrap() {
        let product = U256::MAX.full_mul(U256::MAX);
        // (2^256 - 1)^2 = 2^512 - 2^257 + 1
        let expected = U512::MAX - (U512::from(U256::MAX) << 1);
        assert_eq!(product, expected);
    }

    #[test]
    fn widen_then_narrow_roundtrips() {
        let value = U256::from(u128::MAX) << 64;
        assert_eq!(U512::from(value).to_u256(), Some(value));
    }

    #[test]
    fn narrowing_an_oversized_value_fails() {
        let wide = U512::from(U256::MAX) + U512::from(1u8);
        assert_eq!(wide.to_u256(), None);
    }
}
