use loancalc_core::report::{LoanReport, TIMELINE_HEADERS};
use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{format_value, report_of};

/// Format output as tables using the tabled crate.
///
/// Schedule output renders the export report: the summary sheet, then the
/// timeline of the selected method. Anything else renders its `result`
/// object as a field/value table.
pub fn print_table(value: &Value) {
    if let Some(report) = report_of(value) {
        print_report(&report);
    } else {
        match value.get("result") {
            Some(Value::Object(result)) => print_fields(result),
            _ => match value {
                Value::Object(map) => print_fields(map),
                other => println!("{}", format_value(other)),
            },
        }
    }

    print_warnings(value);

    if let Some(Value::String(meth)) = value.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_report(report: &LoanReport) {
    let mut summary = Builder::default();
    summary.push_record(["Parameter", "Value"]);
    for row in &report.summary {
        summary.push_record([row.label.as_str(), row.value.as_str()]);
    }
    println!("{}", Table::from(summary));

    println!("\n{}", report.timeline_title);
    let mut timeline = Builder::default();
    timeline.push_record(TIMELINE_HEADERS);
    for row in &report.timeline {
        timeline.push_record(row.cells());
    }
    println!("{}", Table::from(timeline));
}

fn print_fields(map: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.as_str(), &format_value(val)]);
    }
    println!("{}", Table::from(builder));
}

fn print_warnings(value: &Value) {
    if let Some(Value::Array(warnings)) = value.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }
}
