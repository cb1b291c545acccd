use serde::{Deserialize, Deserializer, Serialize};

/// Unit of the `term` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermUnit {
    #[default]
    Years,
    Months,
}

/// Unvalidated loan fields as a form or a JSON payload hands them over.
///
/// Numbers may arrive as JSON numbers, numeric strings, empty strings or
/// `null`. Missing and empty values read as zero; text that does not parse
/// reads as NaN, which the normalizer rejects. Toggle-gated fields are kept
/// verbatim here even when their toggle is off; [`super::normalize`] is the
/// only place that decides whether they count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawLoanInput {
    #[serde(deserialize_with = "lenient_number")]
    pub amount: f64,
    /// Annual interest rate in percent
    #[serde(deserialize_with = "lenient_number")]
    pub rate: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub term: f64,
    pub term_unit: TermUnit,
    pub include_intro_discount: bool,
    /// Percentage points taken off the annual rate during the discount window
    #[serde(deserialize_with = "lenient_number")]
    pub intro_discount_rate: f64,
    /// Length of the discount window in months
    #[serde(deserialize_with = "lenient_number")]
    pub intro_discount_duration: f64,
    pub include_provision: bool,
    /// One-off fee in percent of the loan amount
    #[serde(deserialize_with = "lenient_number")]
    pub provision_rate: f64,
}

impl RawLoanInput {
    pub fn new(amount: f64, rate: f64, term: f64, term_unit: TermUnit) -> Self {
        RawLoanInput {
            amount,
            rate,
            term,
            term_unit,
            ..Default::default()
        }
    }

    pub fn with_intro_discount(mut self, rate: f64, months: f64) -> Self {
        self.include_intro_discount = true;
        self.intro_discount_rate = rate;
        self.intro_discount_duration = months;
        self
    }

    pub fn with_provision(mut self, rate: f64) -> Self {
        self.include_provision = true;
        self.provision_rate = rate;
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(match value {
        None => 0.0,
        Some(NumberOrText::Number(n)) => n,
        Some(NumberOrText::Text(s)) => parse_number_text(&s),
    })
}

/// Parse a numeric string. Blank text is zero; anything unparseable is NaN.
pub fn parse_number_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
