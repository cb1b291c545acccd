//! Display-ready rows for summary sheets and repayment timelines.
//!
//! Reads a finished [`CalculationState`](crate::summary::CalculationState)
//! and formats it through an injected [`CurrencyFormat`]; no figure is
//! recomputed here.

pub mod format;
pub mod rows;

pub use format::{format_percent, CurrencyFormat, PlainCurrency, Rupiah};
pub use rows::{
    build_report, export_file_stem, summary_rows, timeline_rows, LoanReport, ReportRow,
    TimelineRow, TIMELINE_HEADERS,
};
