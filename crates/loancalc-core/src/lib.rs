pub mod amortization;
pub mod error;
pub mod params;
pub mod rounding;
pub mod summary;
pub mod types;

#[cfg(feature = "report")]
pub mod report;

pub use error::LoanCalcError;
pub use params::{normalize, LoanParameters, RawLoanInput, TermUnit};
pub use summary::{calculate_loan, compute_loan_summaries, CalculationState};
pub use types::*;

/// Standard result type for all loan calculations
pub type LoanCalcResult<T> = Result<T, LoanCalcError>;
