use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::{effective_schedule, flat_schedule, LoanSummary, Method};
use crate::params::{normalize, LoanParameters, RawLoanInput};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::LoanCalcResult;

/// Everything a consumer needs to render or export one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationState {
    pub principal: Money,
    pub annual_rate_percent: Percent,
    pub months: u32,
    pub intro_discount_rate_percent: Percent,
    pub intro_discount_months: u32,
    pub provision_rate_percent: Percent,
    /// Annual rate during the discount window, floored at 0%
    pub discounted_rate_percent: Percent,
    pub provision_fee: Money,
    /// Principal minus provision fee, floored at 0
    pub net_disbursement: Money,
    pub flat: LoanSummary,
    pub effective: LoanSummary,
}

impl CalculationState {
    /// The summary a presentation layer shows for `method`.
    pub fn summary_for(&self, method: Method) -> &LoanSummary {
        match method {
            Method::Flat => &self.flat,
            Method::Effective => &self.effective,
        }
    }

    pub fn has_intro_discount(&self) -> bool {
        self.intro_discount_months > 0 && !self.intro_discount_rate_percent.is_zero()
    }

    pub fn has_provision(&self) -> bool {
        !self.provision_rate_percent.is_zero()
    }
}

/// Run both engines over already-normalized parameters.
pub fn summarize(params: &LoanParameters) -> CalculationState {
    CalculationState {
        principal: params.principal(),
        annual_rate_percent: params.annual_rate_percent(),
        months: params.months(),
        intro_discount_rate_percent: params.intro_discount_rate_percent(),
        intro_discount_months: params.intro_discount_months(),
        provision_rate_percent: params.provision_rate_percent(),
        discounted_rate_percent: params.discounted_rate_percent(),
        provision_fee: params.provision_fee(),
        net_disbursement: params.net_disbursement(),
        flat: flat_schedule(params),
        effective: effective_schedule(params),
    }
}

/// Normalize raw input and compute both schedules.
///
/// An `Err` means no schedule is available; there is never a partial state.
pub fn compute_loan_summaries(raw: &RawLoanInput) -> LoanCalcResult<CalculationState> {
    let params = normalize(raw)?;
    debug!(
        "computing schedules: principal {}, {}% p.a., {} months",
        params.principal(),
        params.annual_rate_percent(),
        params.months()
    );
    Ok(summarize(&params))
}

/// [`compute_loan_summaries`] wrapped in the standard output envelope, with
/// warnings for inputs that were clamped or ignored.
pub fn calculate_loan(raw: &RawLoanInput) -> LoanCalcResult<ComputationOutput<CalculationState>> {
    let start = Instant::now();
    let params = normalize(raw)?;
    let warnings = collect_warnings(raw, &params);
    for w in &warnings {
        warn!("{w}");
    }
    let state = summarize(&params);

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Flat-rate and effective (annuity) amortization",
        &serde_json::json!({
            "principal": params.principal().to_string(),
            "annual_rate_percent": params.annual_rate_percent().to_string(),
            "months": params.months(),
            "term_unit": raw.term_unit,
            "intro_discount_rate_percent": params.intro_discount_rate_percent().to_string(),
            "intro_discount_months": params.intro_discount_months(),
            "provision_rate_percent": params.provision_rate_percent().to_string(),
            "rounding": "2dp, midpoint away from zero",
        }),
        warnings,
        elapsed,
        state,
    ))
}

fn collect_warnings(raw: &RawLoanInput, params: &LoanParameters) -> Vec<String> {
    let mut warnings = Vec::new();

    if params.annual_rate_percent().is_zero() {
        warnings.push("Zero interest rate: both methods reduce to an even principal split".into());
    }

    if raw.include_intro_discount {
        if params.intro_discount_rate_percent() > params.annual_rate_percent() {
            warnings.push(format!(
                "Introductory discount of {}% exceeds the base rate of {}%; discounted rate floored at 0%",
                params.intro_discount_rate_percent(),
                params.annual_rate_percent()
            ));
        }
        let window = raw.intro_discount_duration.floor();
        if window > f64::from(params.months()) {
            warnings.push(format!(
                "Discount window of {} months is longer than the {}-month term; every month is discounted",
                window,
                params.months()
            ));
        }
    } else if raw.intro_discount_rate != 0.0 || raw.intro_discount_duration != 0.0 {
        warnings.push("Introductory discount is disabled; discount fields were ignored".into());
    }

    if !raw.include_provision && raw.provision_rate != 0.0 {
        warnings.push("Provision fee is disabled; provision rate was ignored".into());
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::TermUnit;
    use crate::LoanCalcError;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_state_echoes_normalized_input() {
        let raw = RawLoanInput::new(150_000_000.0, 10.0, 5.0, TermUnit::Years)
            .with_intro_discount(3.0, 12.0)
            .with_provision(1.0);
        let state = compute_loan_summaries(&raw).unwrap();

        assert_eq!(state.principal, dec!(150_000_000));
        assert_eq!(state.months, 60);
        assert_eq!(state.discounted_rate_percent, dec!(7));
        assert_eq!(state.provision_fee, dec!(1_500_000));
        assert_eq!(state.net_disbursement, dec!(148_500_000));
        assert_eq!(state.flat.schedule.len(), 60);
        assert_eq!(state.effective.schedule.len(), 60);
        assert!(state.has_intro_discount());
        assert!(state.has_provision());
    }

    #[test]
    fn test_invalid_input_has_no_state() {
        let raw = RawLoanInput::new(0.0, 10.0, 12.0, TermUnit::Months);
        assert!(matches!(
            compute_loan_summaries(&raw),
            Err(LoanCalcError::InvalidInput { .. })
        ));
        assert!(calculate_loan(&raw).is_err());
    }

    #[test]
    fn test_summary_for_selects_method() {
        let raw = RawLoanInput::new(12_000_000.0, 12.0, 12.0, TermUnit::Months);
        let state = compute_loan_summaries(&raw).unwrap();
        assert_eq!(state.summary_for(Method::Flat).method, Method::Flat);
        assert_eq!(state.summary_for(Method::Effective).method, Method::Effective);
    }

    #[test]
    fn test_envelope_warnings() {
        let mut raw = RawLoanInput::new(1_000_000.0, 5.0, 12.0, TermUnit::Months)
            .with_intro_discount(8.0, 24.0);
        raw.provision_rate = 2.0;

        let output = calculate_loan(&raw).unwrap();
        assert_eq!(output.warnings.len(), 3);
        assert!(output.warnings[0].contains("exceeds the base rate"));
        assert!(output.warnings[1].contains("window of 24 months is longer than the 12-month term"));
        assert_eq!(output.result.intro_discount_months, 12);
        assert!(output.warnings[2].contains("provision rate was ignored"));
        assert_eq!(output.result.provision_fee, Decimal::ZERO);
        assert_eq!(output.result.net_disbursement, dec!(1_000_000));
    }

    #[test]
    fn test_provision_above_principal_is_valid() {
        let raw = RawLoanInput::new(1_000_000.0, 5.0, 12.0, TermUnit::Months).with_provision(150.0);
        let output = calculate_loan(&raw).unwrap();
        assert_eq!(output.result.provision_fee, dec!(1_500_000));
        assert_eq!(output.result.net_disbursement, Decimal::ZERO);
        assert_eq!(output.result.flat.schedule.len(), 12);
    }

    #[test]
    fn test_envelope_serializes() {
        let raw = RawLoanInput::new(1_200_000.0, 0.0, 1.0, TermUnit::Years);
        let output = calculate_loan(&raw).unwrap();
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["result"]["flat"]["method"], "flat");
        assert!(value["result"]["effective"]["total_interest"].is_string());
        assert_eq!(output.result.effective.total_interest, Decimal::ZERO);
        assert_eq!(value["assumptions"]["months"], 12);
        assert_eq!(output.warnings.len(), 1);
    }
}
