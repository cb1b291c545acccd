use serde_json::Value;

use super::{format_value, report_of};

/// Print just the key figure of the output.
///
/// Schedule output prints the selected method's monthly payment; other
/// output tries well-known result fields, then the first field.
pub fn print_minimal(value: &Value) {
    if let Some(report) = report_of(value) {
        if let Some(row) = report.summary.iter().find(|r| r.label == "Monthly payment") {
            println!("{}", row.value);
            return;
        }
    }

    let result_obj = value.get("result").unwrap_or(value);
    let priority_keys = ["interest_delta", "net_disbursement"];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_value(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_value(val));
            return;
        }
    }

    println!("{}", format_value(result_obj));
}
