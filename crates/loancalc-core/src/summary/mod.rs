//! Runs both engines over the same parameters and packages the results.

pub mod aggregate;
pub mod compare;

pub use aggregate::{calculate_loan, compute_loan_summaries, summarize, CalculationState};
pub use compare::{compare_methods, interest_delta, MethodComparison};
