//! Currency rounding shared by both amortization engines.
//!
//! Every figure that reaches a `PaymentEntry` goes through [`round_currency`],
//! and every total or ratio is derived from those rounded figures, so that a
//! displayed total always equals the sum of the displayed rows.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::types::Money;

/// Fraction digits kept on every currency amount.
pub const CURRENCY_DP: u32 = 2;

/// Balances below this are treated as fully repaid.
pub const NEGLIGIBLE_BALANCE: Decimal = dec!(0.000001);

/// Round a currency amount to 2 decimal places, midpoints away from zero.
///
/// Decimal arithmetic is exact at the cent boundary, so `1.005` rounds to
/// `1.01` without the epsilon nudge a binary float would need.
pub fn round_currency(value: Money) -> Money {
    value.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// `part / whole`, or zero when `whole` is zero.
pub fn ratio(part: Money, whole: Money) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        part / whole
    }
}

/// Sum of already-rounded amounts, rounded once more to absorb any stray
/// precision from callers that pass unrounded values.
pub fn sum_rounded<I>(amounts: I) -> Money
where
    I: IntoIterator<Item = Money>,
{
    round_currency(amounts.into_iter().sum())
}

/// Clamp a running balance to zero once it is negligible or negative.
pub fn settle_dust(balance: Money) -> Money {
    if balance < NEGLIGIBLE_BALANCE {
        Decimal::ZERO
    } else {
        balance
    }
}
