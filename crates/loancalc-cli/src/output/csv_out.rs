use loancalc_core::report::{LoanReport, TIMELINE_HEADERS};
use serde_json::Value;
use std::io;

use super::{format_value, report_of};

/// Write output as CSV to stdout.
///
/// Schedule output becomes the timeline sheet (one row per month); other
/// output becomes a two-column field/value sheet.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let written = match report_of(value) {
        Some(report) => write_timeline(&mut wtr, &report),
        None => write_fields(&mut wtr, value),
    };

    if let Err(e) = written.and_then(|_| wtr.flush().map_err(csv::Error::from)) {
        log::error!("CSV write error: {e}");
    }
}

fn write_timeline<W: io::Write>(wtr: &mut csv::Writer<W>, report: &LoanReport) -> csv::Result<()> {
    wtr.write_record(TIMELINE_HEADERS)?;
    for row in &report.timeline {
        wtr.write_record(row.cells())?;
    }
    Ok(())
}

fn write_fields<W: io::Write>(wtr: &mut csv::Writer<W>, value: &Value) -> csv::Result<()> {
    let fields = match value.get("result") {
        Some(Value::Object(result)) => result,
        _ => match value {
            Value::Object(map) => map,
            other => return wtr.write_record([format_value(other)]),
        },
    };

    wtr.write_record(["field", "value"])?;
    for (key, val) in fields {
        wtr.write_record([key.as_str(), &format_value(val)])?;
    }
    Ok(())
}
