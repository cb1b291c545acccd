//! The two amortization engines and the schedule types they produce.
//!
//! The engines share the rounding rule and
//! [`LoanParameters::monthly_rate_for_month`], nothing else.
//!
//! [`LoanParameters::monthly_rate_for_month`]: crate::params::LoanParameters::monthly_rate_for_month

pub mod effective;
pub mod flat;
pub mod schedule;

pub use effective::{annuity_payment, effective_schedule};
pub use flat::flat_schedule;
pub use schedule::{LoanSummary, Method, PaymentEntry};
