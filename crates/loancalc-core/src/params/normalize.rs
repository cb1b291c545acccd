use log::debug;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

use super::raw::{RawLoanInput, TermUnit};
use crate::error::LoanCalcError;
use crate::types::{Money, Percent, Rate};
use crate::LoanCalcResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Largest accepted loan amount.
pub const MAX_PRINCIPAL: Money = dec!(1_000_000_000_000_000);
/// Largest accepted annual rate, in percent.
pub const MAX_ANNUAL_RATE_PERCENT: Percent = dec!(1000);
/// Longest accepted term, in months.
pub const MAX_MONTHS: u32 = 1200;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const HUNDRED: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Normalized parameters
// ---------------------------------------------------------------------------

/// A validated parameter set. Only [`normalize`] builds one, so every value
/// of this type can produce a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoanParameters {
    principal: Money,
    annual_rate_percent: Percent,
    months: u32,
    intro_discount_rate_percent: Percent,
    intro_discount_months: u32,
    provision_rate_percent: Percent,
}

impl LoanParameters {
    pub fn principal(&self) -> Money {
        self.principal
    }

    pub fn annual_rate_percent(&self) -> Percent {
        self.annual_rate_percent
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    pub fn intro_discount_rate_percent(&self) -> Percent {
        self.intro_discount_rate_percent
    }

    pub fn intro_discount_months(&self) -> u32 {
        self.intro_discount_months
    }

    pub fn provision_rate_percent(&self) -> Percent {
        self.provision_rate_percent
    }

    /// Whether `month` (1-indexed) falls inside the introductory window.
    pub fn is_discounted(&self, month: u32) -> bool {
        month <= self.intro_discount_months
    }

    /// Annual rate during the discount window, floored at 0%.
    pub fn discounted_rate_percent(&self) -> Percent {
        (self.annual_rate_percent - self.intro_discount_rate_percent).max(Decimal::ZERO)
    }

    /// The annual rate that applies to `month`. Both engines use this rule.
    pub fn annual_rate_for_month(&self, month: u32) -> Percent {
        if self.is_discounted(month) {
            self.discounted_rate_percent()
        } else {
            self.annual_rate_percent
        }
    }

    /// Monthly periodic rate for `month` as a decimal (1% p.m. = 0.01).
    pub fn monthly_rate_for_month(&self, month: u32) -> Rate {
        self.annual_rate_for_month(month) / HUNDRED / MONTHS_PER_YEAR
    }

    /// One-off provision fee withheld at disbursement. Saturates at
    /// `Decimal::MAX` for rates too large to multiply out.
    pub fn provision_fee(&self) -> Money {
        self.principal
            .checked_mul(self.provision_rate_percent)
            .map(|v| v / HUNDRED)
            .unwrap_or(Decimal::MAX)
    }

    /// Cash actually received by the borrower, floored at zero.
    pub fn net_disbursement(&self) -> Money {
        (self.principal - self.provision_fee()).max(Decimal::ZERO)
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Validate and clamp raw input into [`LoanParameters`].
///
/// Discount and provision fields only count when their toggle is on; stale
/// values left behind in a disabled field are ignored, whatever they hold.
/// Any input that cannot produce a schedule yields
/// [`LoanCalcError::InvalidInput`] naming the offending field.
pub fn normalize(raw: &RawLoanInput) -> LoanCalcResult<LoanParameters> {
    let result = normalize_fields(raw);
    if let Err(ref e) = result {
        debug!("rejecting loan input: {e}");
    }
    result
}

fn normalize_fields(raw: &RawLoanInput) -> LoanCalcResult<LoanParameters> {
    let principal = finite_decimal("amount", raw.amount)?;
    if principal <= Decimal::ZERO {
        return Err(LoanCalcError::invalid("amount", "Loan amount must be positive"));
    }
    if principal > MAX_PRINCIPAL {
        return Err(LoanCalcError::invalid(
            "amount",
            format!("Loan amount must not exceed {MAX_PRINCIPAL}"),
        ));
    }

    let annual_rate_percent = bounded_percent("rate", raw.rate, MAX_ANNUAL_RATE_PERCENT)?;

    let term = finite_decimal("term", raw.term)?;
    let term_months = match raw.term_unit {
        TermUnit::Years => term * MONTHS_PER_YEAR,
        TermUnit::Months => term,
    };
    let months = whole_months("term", term_months)?;
    if months == 0 {
        return Err(LoanCalcError::invalid(
            "term",
            "Term must round to at least one month",
        ));
    }

    let (intro_discount_rate_percent, intro_discount_months) = if raw.include_intro_discount {
        (
            non_negative("intro_discount_rate", raw.intro_discount_rate)?,
            discount_window(raw.intro_discount_duration, months)?,
        )
    } else {
        (Decimal::ZERO, 0)
    };

    let provision_rate_percent = if raw.include_provision {
        non_negative("provision_rate", raw.provision_rate)?
    } else {
        Decimal::ZERO
    };

    Ok(LoanParameters {
        principal,
        annual_rate_percent,
        months,
        intro_discount_rate_percent,
        intro_discount_months,
        provision_rate_percent,
    })
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

fn finite_decimal(field: &str, value: f64) -> LoanCalcResult<Decimal> {
    if !value.is_finite() {
        return Err(LoanCalcError::invalid(field, "Must be a finite number"));
    }
    Decimal::from_f64(value)
        .ok_or_else(|| LoanCalcError::invalid(field, "Value is outside the supported range"))
}

fn non_negative(field: &str, value: f64) -> LoanCalcResult<Decimal> {
    let v = finite_decimal(field, value)?;
    if v < Decimal::ZERO {
        return Err(LoanCalcError::invalid(field, "Must not be negative"));
    }
    Ok(v)
}

fn bounded_percent(field: &str, value: f64, max: Percent) -> LoanCalcResult<Percent> {
    let pct = non_negative(field, value)?;
    if pct > max {
        return Err(LoanCalcError::invalid(field, format!("Must not exceed {max}%")));
    }
    Ok(pct)
}

/// Number of leading discounted months: month `m` is discounted while
/// `m <= duration`, so fractions are floored. Capped at the term.
fn discount_window(duration: f64, months: u32) -> LoanCalcResult<u32> {
    let field = "intro_discount_duration";
    let whole = non_negative(field, duration)?.floor();
    Ok(whole.to_u32().map_or(months, |m| m.min(months)))
}

/// Round a month count half away from zero and check it fits the term bound.
fn whole_months(field: &str, value: Decimal) -> LoanCalcResult<u32> {
    if value < Decimal::ZERO {
        return Err(LoanCalcError::invalid(field, "Must not be negative"));
    }
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    match rounded.to_u32() {
        Some(m) if m <= MAX_MONTHS => Ok(m),
        _ => Err(LoanCalcError::invalid(
            field,
            format!("Must not exceed {MAX_MONTHS} months"),
        )),
    }
}
