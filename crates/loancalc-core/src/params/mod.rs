//! Raw loan input and its normalization into a validated parameter set.

pub mod normalize;
pub mod raw;

pub use normalize::{normalize, LoanParameters};
pub use raw::{RawLoanInput, TermUnit};
