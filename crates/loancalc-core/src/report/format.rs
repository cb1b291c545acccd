use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::{Money, Percent};

/// Turns an amount into display text. Report builders take one of these
/// instead of assuming a locale.
pub trait CurrencyFormat {
    fn format(&self, amount: Money) -> String;
}

impl<F> CurrencyFormat for F
where
    F: Fn(Money) -> String,
{
    fn format(&self, amount: Money) -> String {
        self(amount)
    }
}

/// Indonesian rupiah: `Rp 1.120.000`, whole rupiah, dot grouping.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rupiah;

impl CurrencyFormat for Rupiah {
    fn format(&self, amount: Money) -> String {
        let whole = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let digits = group_thousands(&whole.abs().trunc().to_string(), '.');
        if whole.is_sign_negative() && !whole.is_zero() {
            format!("-Rp {digits}")
        } else {
            format!("Rp {digits}")
        }
    }
}

/// Plain figure with two decimals and comma grouping: `1,120,000.00`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainCurrency;

impl CurrencyFormat for PlainCurrency {
    fn format(&self, amount: Money) -> String {
        let cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let int_part = group_thousands(&cents.abs().trunc().to_string(), ',');
        let frac = (cents.abs().fract() * Decimal::ONE_HUNDRED)
            .trunc()
            .to_string();
        let sign = if cents.is_sign_negative() && !cents.is_zero() {
            "-"
        } else {
            ""
        };
        format!("{sign}{int_part}.{frac:0>2}")
    }
}

/// Percentage with at most two fraction digits, trailing zeros dropped.
pub fn format_percent(value: Percent) -> String {
    value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
