use napi::Result as NapiResult;
use napi_derive::napi;

use loancalc_core::amortization::Method;
use loancalc_core::report::{build_report, Rupiah};
use loancalc_core::RawLoanInput;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_input(input_json: &str) -> NapiResult<RawLoanInput> {
    serde_json::from_str(input_json).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Schedules
// ---------------------------------------------------------------------------

/// Both schedules in the standard output envelope.
#[napi]
pub fn compute_loan_summaries(input_json: String) -> NapiResult<String> {
    let raw = parse_input(&input_json)?;
    let output = loancalc_core::calculate_loan(&raw).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn compare_methods(input_json: String) -> NapiResult<String> {
    let raw = parse_input(&input_json)?;
    let state = loancalc_core::compute_loan_summaries(&raw).map_err(to_napi_error)?;
    let comparison = loancalc_core::summary::compare_methods(&state.flat, &state.effective);
    serde_json::to_string(&comparison).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Summary and timeline rows for `method` ("flat" or "effective"), in rupiah.
#[napi]
pub fn loan_report(input_json: String, method: String) -> NapiResult<String> {
    let raw = parse_input(&input_json)?;
    let method: Method =
        serde_json::from_value(serde_json::Value::String(method)).map_err(to_napi_error)?;
    let state = loancalc_core::compute_loan_summaries(&raw).map_err(to_napi_error)?;
    let report = build_report(&state, method, &Rupiah);
    serde_json::to_string(&report).map_err(to_napi_error)
}
