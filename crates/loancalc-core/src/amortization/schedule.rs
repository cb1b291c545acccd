use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rounding::{ratio, round_currency, sum_rounded};
use crate::types::Money;

/// Interest-accrual convention of a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Interest on the original principal every month
    Flat,
    /// Interest on the outstanding balance (annuity)
    Effective,
}

impl Method {
    pub fn label(&self) -> &'static str {
        match self {
            Method::Flat => "Flat",
            Method::Effective => "Effective (Annuity)",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One month of a repayment schedule. Amounts are rounded to cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentEntry {
    /// 1-indexed month number
    pub month: u32,
    pub payment: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub remaining_balance: Money,
    /// Share of `payment` that repays principal (0 when payment is 0)
    pub principal_ratio: Decimal,
    /// Share of `payment` that is interest (0 when payment is 0)
    pub interest_ratio: Decimal,
    pub is_discounted: bool,
}

impl PaymentEntry {
    /// Build an entry from the unrounded month figures.
    ///
    /// The payment is the sum of the rounded portions, so the row always
    /// reconciles with what is displayed and the two ratios add up to one.
    pub(crate) fn from_portions(
        month: u32,
        principal_portion: Money,
        interest_portion: Money,
        remaining_balance: Money,
        is_discounted: bool,
    ) -> Self {
        let principal_portion = round_currency(principal_portion);
        let interest_portion = round_currency(interest_portion);
        let payment = principal_portion + interest_portion;
        let interest_ratio = ratio(interest_portion, payment);
        let principal_ratio = if payment.is_zero() {
            Decimal::ZERO
        } else {
            Decimal::ONE - interest_ratio
        };

        PaymentEntry {
            month,
            payment,
            principal_portion,
            interest_portion,
            remaining_balance: round_currency(remaining_balance.max(Decimal::ZERO)),
            principal_ratio,
            interest_ratio,
            is_discounted,
        }
    }
}

/// A full schedule with its headline figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub method: Method,
    /// Payment of the first month
    pub monthly_payment: Money,
    pub total_interest: Money,
    pub total_payment: Money,
    pub schedule: Vec<PaymentEntry>,
}

impl LoanSummary {
    /// Derive totals from the rounded rows of `schedule`.
    pub(crate) fn from_schedule(method: Method, schedule: Vec<PaymentEntry>) -> Self {
        let monthly_payment = schedule
            .first()
            .map(|e| e.payment)
            .unwrap_or(Decimal::ZERO);
        let total_interest = sum_rounded(schedule.iter().map(|e| e.interest_portion));
        let total_payment = sum_rounded(schedule.iter().map(|e| e.payment));

        LoanSummary {
            method,
            monthly_payment,
            total_interest,
            total_payment,
            schedule,
        }
    }

    /// Sum of the principal repaid across the schedule.
    pub fn total_principal(&self) -> Money {
        sum_rounded(self.schedule.iter().map(|e| e.principal_portion))
    }

    /// Payment of the last month.
    pub fn final_payment(&self) -> Money {
        self.schedule
            .last()
            .map(|e| e.payment)
            .unwrap_or(Decimal::ZERO)
    }
}
