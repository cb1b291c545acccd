//! Flat-rate amortization.
//!
//! Interest each month is charged on the original principal, so the interest
//! cost never falls as the loan is paid down. Principal is repaid in equal
//! installments; the final month repays whatever is left so the schedule
//! closes at exactly zero.

use log::debug;
use rust_decimal::Decimal;

use super::schedule::{LoanSummary, Method, PaymentEntry};
use crate::params::LoanParameters;
use crate::rounding::{round_currency, settle_dust};

/// Build the flat-rate schedule for `params`.
pub fn flat_schedule(params: &LoanParameters) -> LoanSummary {
    let principal = params.principal();
    let months = params.months();
    let installment = principal / Decimal::from(months);

    let mut remaining = principal;
    let mut schedule = Vec::with_capacity(months as usize);

    for month in 1..=months {
        let monthly_rate = params.monthly_rate_for_month(month);
        let interest = round_currency(principal * monthly_rate);

        let principal_portion = if month == months {
            remaining
        } else {
            installment
        };

        remaining = settle_dust(remaining - principal_portion);
        if month == months {
            remaining = Decimal::ZERO;
        }

        schedule.push(PaymentEntry::from_portions(
            month,
            principal_portion,
            interest,
            remaining,
            params.is_discounted(month),
        ));
    }

    debug!(
        "flat schedule: {} months, installment {}",
        months,
        round_currency(installment)
    );

    LoanSummary::from_schedule(Method::Flat, schedule)
}
