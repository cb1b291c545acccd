use serde::{Deserialize, Serialize};

use super::format::{format_percent, CurrencyFormat};
use crate::amortization::{LoanSummary, Method};
use crate::summary::CalculationState;

/// Column headings of the repayment timeline.
pub const TIMELINE_HEADERS: [&str; 5] = ["Month", "Payment", "Principal", "Interest", "Balance"];

/// A labelled line of the summary sheet. A blank label and value is a
/// separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub label: String,
    pub value: String,
}

impl ReportRow {
    fn new(label: &str, value: impl Into<String>) -> Self {
        ReportRow {
            label: label.to_string(),
            value: value.into(),
        }
    }

    fn separator() -> Self {
        ReportRow::new("", "")
    }

    pub fn is_separator(&self) -> bool {
        self.label.is_empty() && self.value.is_empty()
    }
}

/// One formatted month of the repayment timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineRow {
    pub month: u32,
    pub payment: String,
    pub principal: String,
    pub interest: String,
    pub balance: String,
}

impl TimelineRow {
    /// Cells in [`TIMELINE_HEADERS`] order.
    pub fn cells(&self) -> [String; 5] {
        [
            self.month.to_string(),
            self.payment.clone(),
            self.principal.clone(),
            self.interest.clone(),
            self.balance.clone(),
        ]
    }
}

/// Export view of one calculation for a chosen method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanReport {
    pub method: Method,
    pub summary: Vec<ReportRow>,
    pub timeline_title: String,
    pub timeline: Vec<TimelineRow>,
    pub file_stem: String,
}

/// Summary sheet for `method`: loan terms first, then the headline figures
/// of the selected schedule.
pub fn summary_rows(
    state: &CalculationState,
    method: Method,
    fmt: &impl CurrencyFormat,
) -> Vec<ReportRow> {
    let mut rows = vec![
        ReportRow::new("Loan principal", fmt.format(state.principal)),
        ReportRow::new(
            "Net disbursement (after fees)",
            fmt.format(state.net_disbursement),
        ),
        ReportRow::new("Term", format!("{} months", state.months)),
        ReportRow::new(
            "Base annual rate",
            format!("{}% p.a.", format_percent(state.annual_rate_percent)),
        ),
    ];

    if state.has_provision() {
        rows.push(ReportRow::new(
            "Provision fee (upfront)",
            format!(
                "{}% of principal",
                format_percent(state.provision_rate_percent)
            ),
        ));
    }

    if state.has_intro_discount() {
        rows.push(ReportRow::new(
            "Introductory discount",
            format!(
                "{}% p.a. · {} months",
                format_percent(state.intro_discount_rate_percent),
                state.intro_discount_months
            ),
        ));
        rows.push(ReportRow::new(
            "Rate during discount",
            format!("{}% p.a.", format_percent(state.discounted_rate_percent)),
        ));
    }

    rows.push(ReportRow::separator());

    let summary = state.summary_for(method);
    rows.push(ReportRow::new("Selected method", method.label()));
    rows.push(ReportRow::new(
        "Monthly payment",
        fmt.format(summary.monthly_payment),
    ));
    rows.push(ReportRow::new(
        "Total interest",
        fmt.format(summary.total_interest),
    ));
    rows.push(ReportRow::new(
        "Total payment",
        fmt.format(summary.total_payment),
    ));

    rows
}

/// Formatted repayment timeline of `summary`.
pub fn timeline_rows(summary: &LoanSummary, fmt: &impl CurrencyFormat) -> Vec<TimelineRow> {
    summary
        .schedule
        .iter()
        .map(|entry| TimelineRow {
            month: entry.month,
            payment: fmt.format(entry.payment),
            principal: fmt.format(entry.principal_portion),
            interest: fmt.format(entry.interest_portion),
            balance: fmt.format(entry.remaining_balance),
        })
        .collect()
}

/// File name stem for exported documents, e.g. `loan-schedule-60m`.
pub fn export_file_stem(state: &CalculationState) -> String {
    format!("loan-schedule-{}m", state.months)
}

pub fn build_report(
    state: &CalculationState,
    method: Method,
    fmt: &impl CurrencyFormat,
) -> LoanReport {
    LoanReport {
        method,
        summary: summary_rows(state, method, fmt),
        timeline_title: format!("Timeline ({})", method.label()),
        timeline: timeline_rows(state.summary_for(method), fmt),
        file_stem: export_file_stem(state),
    }
}
