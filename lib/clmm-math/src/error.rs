use thiserror::Error;

/// Failure conditions of the sqrt price math core.
///
/// Every variant is deterministic and caller-fatal: the inputs that produced
/// it will produce it again, so the surrounding swap must abort rather than
/// retry. Nothing inside this crate recovers from any of them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Zero sqrt price or zero liquidity passed to a next-price dispatcher
    #[error("sqrt price and liquidity must be greater than 0")]
    InvalidPriceOrLiquidity,
    /// Zero lower bound passed to an amount delta computation
    #[error("price bound must be greater than 0")]
    InvalidPrice,
    /// A price-decreasing step would push the sqrt price to zero or below
    #[error("liquidity cannot cover the requested amount at the current price")]
    NotEnoughLiquidity,
    /// An intermediate product or denominator left the 256 bit working width
    #[error("sqrt price computation overflowed")]
    PriceOverflow,
    /// A computed magnitude does not fit the declared result width
    #[error("value does not fit in the target integer width")]
    NarrowingFailure,
}
