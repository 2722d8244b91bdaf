//! Helper functions to find price changes for a change in token supply and
//! vice versa.
//!
//! Prices are square roots of token_1/token_0 in Q64.96, held in 160 bits.
//! Liquidity is a 128 bit magnitude, amounts are 256 bit. Every rounding
//! decision favors the pool: prices move at least far enough to realize a
//! requested output, and amounts owed to the pool round up while amounts
//! paid out by the pool round down.

use crate::big_num::U256;
use crate::casts::{to_i256, to_u160, MAX_U160};
use crate::error::ErrorCode;
use crate::fixed_point_96;
use crate::full_math::MulDiv;
use crate::unsafe_math::UnsafeMathTrait;
use ethnum::I256;

/// `|a - b|` as an unsigned magnitude, defined for all inputs
pub(crate) fn abs_diff(a: U256, b: U256) -> U256 {
    if a >= b {
        a - b
    } else {
        b - a
    }
}

/// Gets the next sqrt price √P' given a delta of token_0
///
/// Always round up because
/// 1. In the exact output case, token_0 supply decreases leading to price
/// increase. Move price up so that the exact output is met.
/// 2. In the exact input case, token_0 supply increases leading to price
/// decrease. Under-moving the price would overcharge the pool.
///
/// # Formula
///
/// * `√P' = √P * L / (L ± Δx * √P)`
/// * If `Δx * √P` or the denominator overflows, use the alternate form
///   `√P' = L / (L/√P ± Δx)` which loses at most one extra unit
///
/// # Arguments
///
/// * `sqrt_price_x96` - The starting price `√P`, expected `> 0` by the caller
/// * `liquidity` - The amount of usable liquidity L
/// * `amount` - Delta of token_0 (Δx) to add or remove from virtual reserves
/// * `add` - Whether to add or remove the amount of token_0
///
pub fn get_next_sqrt_price_from_amount_0_rounding_up(
    sqrt_price_x96: U256,
    liquidity: u128,
    amount: U256,
    add: bool,
) -> Result<U256, ErrorCode> {
    // we short circuit amount == 0 because the result is otherwise not
    // guaranteed to equal the input price
    if amount.is_zero() {
        return Ok(sqrt_price_x96);
    }
    let numerator_1 = U256::from(liquidity) << fixed_point_96::RESOLUTION;

    if add {
        if let Some(product) = amount.checked_mul(sqrt_price_x96) {
            if let Some(denominator) = numerator_1.checked_add(product) {
                return numerator_1
                    .mul_div_ceil(sqrt_price_x96, denominator)
                    .ok_or(ErrorCode::PriceOverflow);
            }
        }
        // Alternate form if overflow - `√P' = L / (L/√P + Δx)`
        let denominator = (numerator_1 / sqrt_price_x96)
            .checked_add(amount)
            .ok_or(ErrorCode::PriceOverflow)?;
        Ok(U256::div_rounding_up(numerator_1, denominator))
    } else {
        // if the product overflows, the denominator would underflow as well:
        // the requested removal exceeds what the virtual reserves can support
        let product = amount
            .checked_mul(sqrt_price_x96)
            .ok_or(ErrorCode::PriceOverflow)?;
        if numerator_1 <= product {
            return Err(ErrorCode::PriceOverflow);
        }
        let denominator = numerator_1 - product;
        to_u160(
            numerator_1
                .mul_div_ceil(sqrt_price_x96, denominator)
                .ok_or(ErrorCode::PriceOverflow)?,
        )
    }
}

/// Gets the next sqrt price given a delta of token_1
///
/// Always round down because
/// 1. In the exact output case, token_1 supply decreases leading to price
/// decrease. Move price down so that the exact output is met.
/// 2. In the exact input case, token_1 supply increases leading to price
/// increase. Rounding down keeps the price from overshooting the fair target.
///
/// # Formula
///
/// * `√P' = √P ± Δy * Q96 / L`
///
/// # Arguments
///
/// * `sqrt_price_x96` - The starting price `√P`, expected `> 0` by the caller
/// * `liquidity` - The amount of usable liquidity L
/// * `amount` - Delta of token_1 (Δy) to add or remove from virtual reserves
/// * `add` - Whether to add or remove the amount of token_1
///
pub fn get_next_sqrt_price_from_amount_1_rounding_down(
    sqrt_price_x96: U256,
    liquidity: u128,
    amount: U256,
    add: bool,
) -> Result<U256, ErrorCode> {
    let liquidity = U256::from(liquidity);

    // if we are adding (subtracting), rounding down requires rounding the
    // quotient down (up); shift-then-divide is exact whenever the scaled
    // amount still fits 256 bits
    if add {
        let quotient = if amount <= MAX_U160 {
            (amount << fixed_point_96::RESOLUTION) / liquidity
        } else {
            amount
                .mul_div_floor(fixed_point_96::q96(), liquidity)
                .ok_or(ErrorCode::PriceOverflow)?
        };
        let next = sqrt_price_x96
            .checked_add(quotient)
            .ok_or(ErrorCode::PriceOverflow)?;
        to_u160(next)
    } else {
        let quotient = if amount <= MAX_U160 {
            U256::div_rounding_up(amount << fixed_point_96::RESOLUTION, liquidity)
        } else {
            amount
                .mul_div_ceil(fixed_point_96::q96(), liquidity)
                .ok_or(ErrorCode::PriceOverflow)?
        };
        if sqrt_price_x96 <= quotient {
            return Err(ErrorCode::NotEnoughLiquidity);
        }
        Ok(sqrt_price_x96 - quotient)
    }
}

/// Gets the next sqrt price given an input amount of token_0 or token_1
///
/// # Arguments
///
/// * `sqrt_price_x96` - The starting price `√P`, before accounting for the
///   input amount
/// * `liquidity` - The amount of usable liquidity
/// * `amount_in` - How much of token_0, or token_1, is being swapped in
/// * `zero_for_one` - Whether the amount in is token_0 or token_1
///
pub fn get_next_sqrt_price_from_input(
    sqrt_price_x96: U256,
    liquidity: u128,
    amount_in: U256,
    zero_for_one: bool,
) -> Result<U256, ErrorCode> {
    if sqrt_price_x96.is_zero() || liquidity == 0 {
        return Err(ErrorCode::InvalidPriceOrLiquidity);
    }

    // round to make sure that we don't pass the target price
    if zero_for_one {
        get_next_sqrt_price_from_amount_0_rounding_up(sqrt_price_x96, liquidity, amount_in, true)
    } else {
        get_next_sqrt_price_from_amount_1_rounding_down(sqrt_price_x96, liquidity, amount_in, true)
    }
}

/// Gets the next sqrt price given an output amount of token_0 or token_1
///
/// # Arguments
///
/// * `sqrt_price_x96` - The starting price `√P`, before accounting for the
///   output amount
/// * `liquidity` - The amount of usable liquidity
/// * `amount_out` - How much of token_0, or token_1, is being swapped out
/// * `zero_for_one` - Whether the amount out is token_1 or token_0
///
pub fn get_next_sqrt_price_from_output(
    sqrt_price_x96: U256,
    liquidity: u128,
    amount_out: U256,
    zero_for_one: bool,
) -> Result<U256, ErrorCode> {
    if sqrt_price_x96.is_zero() || liquidity == 0 {
        return Err(ErrorCode::InvalidPriceOrLiquidity);
    }

    // round to make sure that the requested output is always available
    if zero_for_one {
        get_next_sqrt_price_from_amount_1_rounding_down(sqrt_price_x96, liquidity, amount_out, false)
    } else {
        get_next_sqrt_price_from_amount_0_rounding_up(sqrt_price_x96, liquidity, amount_out, false)
    }
}

/// Gets the amount_0 delta between two prices, for a given amount of liquidity
///
/// # Formula
///
/// * `Δx = L * (1 / √P_lower - 1 / √P_upper)`
/// * i.e. `L * (√P_upper - √P_lower) / (√P_upper * √P_lower)`, computed as
///   `(L << 96) * (√P_upper - √P_lower) / √P_upper / √P_lower` to avoid a
///   double full-precision division
///
/// # Arguments
///
/// * `sqrt_ratio_a_x96` - A sqrt price
/// * `sqrt_ratio_b_x96` - Another sqrt price, order does not matter
/// * `liquidity` - The amount of usable liquidity
/// * `round_up` - Whether to round the amount up or down
///
pub fn get_amount_0_delta_unsigned(
    mut sqrt_ratio_a_x96: U256,
    mut sqrt_ratio_b_x96: U256,
    liquidity: u128,
    round_up: bool,
) -> Result<U256, ErrorCode> {
    // sqrt_ratio_a_x96 should hold the smaller value
    if sqrt_ratio_a_x96 > sqrt_ratio_b_x96 {
        std::mem::swap(&mut sqrt_ratio_a_x96, &mut sqrt_ratio_b_x96);
    }
    if sqrt_ratio_a_x96.is_zero() {
        return Err(ErrorCode::InvalidPrice);
    }

    let numerator_1 = U256::from(liquidity) << fixed_point_96::RESOLUTION;
    let numerator_2 = sqrt_ratio_b_x96 - sqrt_ratio_a_x96;

    if round_up {
        Ok(U256::div_rounding_up(
            numerator_1
                .mul_div_ceil(numerator_2, sqrt_ratio_b_x96)
                .ok_or(ErrorCode::PriceOverflow)?,
            sqrt_ratio_a_x96,
        ))
    } else {
        Ok(numerator_1
            .mul_div_floor(numerator_2, sqrt_ratio_b_x96)
            .ok_or(ErrorCode::PriceOverflow)?
            / sqrt_ratio_a_x96)
    }
}

/// Gets the amount_1 delta between two prices, for a given amount of liquidity
///
/// # Formula
///
/// * `Δy = L * |√P_upper - √P_lower| / Q96`
///
/// # Arguments
///
/// * `sqrt_ratio_a_x96` - A sqrt price
/// * `sqrt_ratio_b_x96` - Another sqrt price, order does not matter
/// * `liquidity` - The amount of usable liquidity
/// * `round_up` - Whether to round the amount up or down
///
pub fn get_amount_1_delta_unsigned(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: u128,
    round_up: bool,
) -> Result<U256, ErrorCode> {
    let numerator = abs_diff(sqrt_ratio_a_x96, sqrt_ratio_b_x96);
    let liquidity = U256::from(liquidity);

    // a 128 bit liquidity times a 160 bit difference, shifted down by 96,
    // always fits 256 bits
    if round_up {
        liquidity.mul_div_ceil(numerator, fixed_point_96::q96())
    } else {
        liquidity.mul_div_floor(numerator, fixed_point_96::q96())
    }
    .ok_or(ErrorCode::PriceOverflow)
}

/// Helper function to get the signed token_0 delta between two prices, for
/// the given change in liquidity
///
/// Adding liquidity owes the pool an amount rounded up; removing liquidity
/// pays out an amount rounded down. Both roundings favor the pool.
///
/// # Arguments
///
/// * `sqrt_ratio_a_x96` - A sqrt price
/// * `sqrt_ratio_b_x96` - Another sqrt price
/// * `liquidity` - The change in liquidity for which to compute the amount_0
///   delta
///
pub fn get_amount_0_delta_signed(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: i128,
) -> Result<I256, ErrorCode> {
    if liquidity < 0 {
        let amount = get_amount_0_delta_unsigned(
            sqrt_ratio_a_x96,
            sqrt_ratio_b_x96,
            liquidity.unsigned_abs(),
            false,
        )?;
        Ok(-to_i256(amount)?)
    } else {
        let amount =
            get_amount_0_delta_unsigned(sqrt_ratio_a_x96, sqrt_ratio_b_x96, liquidity as u128, true)?;
        to_i256(amount)
    }
}

/// Helper function to get the signed token_1 delta between two prices, for
/// the given change in liquidity
///
/// # Arguments
///
/// * `sqrt_ratio_a_x96` - A sqrt price
/// * `sqrt_ratio_b_x96` - Another sqrt price
/// * `liquidity` - The change in liquidity for which to compute the amount_1
///   delta
///
pub fn get_amount_1_delta_signed(
    sqrt_ratio_a_x96: U256,
    sqrt_ratio_b_x96: U256,
    liquidity: i128,
) -> Result<I256, ErrorCode> {
    if liquidity < 0 {
        let amount = get_amount_1_delta_unsigned(
            sqrt_ratio_a_x96,
            sqrt_ratio_b_x96,
            liquidity.unsigned_abs(),
            false,
        )?;
        Ok(-to_i256(amount)?)
    } else {
        let amount =
            get_amount_1_delta_unsigned(sqrt_ratio_a_x96, sqrt_ratio_b_x96, liquidity as u128, true)?;
        to_i256(amount)
    }
}
