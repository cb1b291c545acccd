//! Comparisons between two already-computed summaries. Nothing here runs an
//! engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amortization::{LoanSummary, Method};
use crate::types::Money;

/// Side-by-side difference between a flat and an effective summary.
/// Deltas are flat minus effective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodComparison {
    pub interest_delta: Money,
    pub total_payment_delta: Money,
    pub first_payment_delta: Money,
    /// Method with the lower total interest; flat wins ties
    pub cheaper_method: Method,
}

/// Extra interest paid under the flat method.
pub fn interest_delta(flat: &LoanSummary, effective: &LoanSummary) -> Money {
    flat.total_interest - effective.total_interest
}

pub fn compare_methods(flat: &LoanSummary, effective: &LoanSummary) -> MethodComparison {
    let interest_delta = interest_delta(flat, effective);
    MethodComparison {
        interest_delta,
        total_payment_delta: flat.total_payment - effective.total_payment,
        first_payment_delta: flat.monthly_payment - effective.monthly_payment,
        cheaper_method: if interest_delta > Decimal::ZERO {
            Method::Effective
        } else {
            Method::Flat
        },
    }
}
