use clap::{Args, ValueEnum};
use log::debug;
use serde_json::{json, Value};

use loancalc_core::amortization::Method;
use loancalc_core::report::{build_report, PlainCurrency, Rupiah};
use loancalc_core::summary::{calculate_loan, compare_methods, compute_loan_summaries};
use loancalc_core::{RawLoanInput, TermUnit};

use crate::input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TermUnitArg {
    Years,
    Months,
}

impl From<TermUnitArg> for TermUnit {
    fn from(unit: TermUnitArg) -> Self {
        match unit {
            TermUnitArg::Years => TermUnit::Years,
            TermUnitArg::Months => TermUnit::Months,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MethodArg {
    Flat,
    Effective,
}

impl From<MethodArg> for Method {
    fn from(method: MethodArg) -> Self {
        match method {
            MethodArg::Flat => Method::Flat,
            MethodArg::Effective => Method::Effective,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CurrencyArg {
    /// Rp 1.120.000
    Rupiah,
    /// 1,120,000.00
    Plain,
}

/// Loan fields shared by every loan command
#[derive(Args)]
pub struct LoanArgs {
    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan amount
    #[arg(long)]
    pub amount: Option<f64>,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Option<f64>,

    /// Loan term, in --term-unit
    #[arg(long)]
    pub term: Option<f64>,

    /// Unit of --term
    #[arg(long, value_enum, default_value = "years")]
    pub term_unit: TermUnitArg,

    /// Percentage points off the annual rate during the introductory window
    #[arg(long)]
    pub intro_discount_rate: Option<f64>,

    /// Length of the introductory window in months
    #[arg(long)]
    pub intro_discount_months: Option<f64>,

    /// One-off provision fee in percent of the loan amount
    #[arg(long)]
    pub provision_rate: Option<f64>,
}

/// Arguments for the full schedule calculation
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// Method whose timeline is rendered in table and CSV output
    #[arg(long, value_enum, default_value = "effective")]
    pub method: MethodArg,

    /// Currency formatting for table and CSV output
    #[arg(long, value_enum, default_value = "rupiah")]
    pub currency: CurrencyArg,
}

/// Resolve raw loan input from a file, piped stdin, or flags, in that order.
fn read_loan_input(args: &LoanArgs) -> Result<RawLoanInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_input(path);
    }
    if let Some(raw) = input::stdin::read_stdin()? {
        return Ok(raw);
    }
    raw_from_flags(args)
}

fn raw_from_flags(args: &LoanArgs) -> Result<RawLoanInput, Box<dyn std::error::Error>> {
    let mut raw = RawLoanInput::new(
        args.amount
            .ok_or("--amount is required (or provide --input)")?,
        args.rate.ok_or("--rate is required (or provide --input)")?,
        args.term.ok_or("--term is required (or provide --input)")?,
        args.term_unit.into(),
    );

    if args.intro_discount_rate.is_some() || args.intro_discount_months.is_some() {
        raw = raw.with_intro_discount(
            args.intro_discount_rate.unwrap_or(0.0),
            args.intro_discount_months.unwrap_or(0.0),
        );
    }
    if let Some(rate) = args.provision_rate {
        raw = raw.with_provision(rate);
    }

    Ok(raw)
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let raw = read_loan_input(&args.loan)?;
    let method: Method = args.method.into();
    debug!("schedule requested for {method} method");

    let output = calculate_loan(&raw)?;
    let report = match args.currency {
        CurrencyArg::Rupiah => build_report(&output.result, method, &Rupiah),
        CurrencyArg::Plain => build_report(&output.result, method, &PlainCurrency),
    };

    let mut value = serde_json::to_value(&output)?;
    value["report"] = serde_json::to_value(&report)?;
    Ok(value)
}

pub fn run_compare(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let raw = read_loan_input(&args)?;
    let state = compute_loan_summaries(&raw)?;
    let comparison = compare_methods(&state.flat, &state.effective);

    Ok(json!({
        "result": {
            "interest_delta": comparison.interest_delta,
            "total_payment_delta": comparison.total_payment_delta,
            "first_payment_delta": comparison.first_payment_delta,
            "cheaper_method": comparison.cheaper_method,
            "flat_monthly_payment": state.flat.monthly_payment,
            "effective_monthly_payment": state.effective.monthly_payment,
            "flat_total_interest": state.flat.total_interest,
            "effective_total_interest": state.effective.total_interest,
            "net_disbursement": state.net_disbursement,
        },
        "methodology": "Flat minus effective, from rounded schedule totals",
    }))
}
