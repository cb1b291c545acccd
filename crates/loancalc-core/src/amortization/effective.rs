//! Effective (reducing-balance annuity) amortization.
//!
//! The annuity payment is re-sized every month from the outstanding balance,
//! the months left and the rate that applies to that month. At a constant
//! rate this reproduces the classic fixed annuity; when an introductory
//! discount expires the payment steps to a new level that still amortizes
//! the balance to zero at term end.

use log::debug;
use rust_decimal::{Decimal, MathematicalOps};

use super::schedule::{LoanSummary, Method, PaymentEntry};
use crate::params::LoanParameters;
use crate::rounding::settle_dust;
use crate::types::{Money, Rate};

/// Build the effective (annuity) schedule for `params`.
pub fn effective_schedule(params: &LoanParameters) -> LoanSummary {
    let months = params.months();
    let mut balance = params.principal();
    let mut schedule = Vec::with_capacity(months as usize);

    for month in 1..=months {
        let monthly_rate = params.monthly_rate_for_month(month);
        let remaining_months = months - month + 1;

        let scheduled = annuity_payment(balance, monthly_rate, remaining_months);
        let interest = balance * monthly_rate;

        let principal_portion = if month == months {
            balance
        } else {
            (scheduled - interest).max(Decimal::ZERO).min(balance)
        };

        balance = settle_dust(balance - principal_portion);
        if month == months {
            balance = Decimal::ZERO;
        }

        schedule.push(PaymentEntry::from_portions(
            month,
            principal_portion,
            interest,
            balance,
            params.is_discounted(month),
        ));
    }

    let summary = LoanSummary::from_schedule(Method::Effective, schedule);
    debug!(
        "effective schedule: {} months, first payment {}",
        months, summary.monthly_payment
    );
    summary
}

/// Level payment that repays `balance` over `periods` at `rate` per period.
///
/// `balance × r / (1 − (1 + r)^−n)`, or an even split when the rate is zero.
/// When `(1 + r)^n` leaves the Decimal range the discount term vanishes and
/// the payment is the interest alone.
pub fn annuity_payment(balance: Money, rate: Rate, periods: u32) -> Money {
    if periods == 0 {
        return balance;
    }
    if rate.is_zero() {
        return balance / Decimal::from(periods);
    }

    match (Decimal::ONE + rate).checked_powu(u64::from(periods)) {
        Some(growth) if !growth.is_zero() => {
            let discount = Decimal::ONE - Decimal::ONE / growth;
            if discount.is_zero() {
                balance / Decimal::from(periods)
            } else {
                balance * rate / discount
            }
        }
        _ => balance * rate,
    }
}
