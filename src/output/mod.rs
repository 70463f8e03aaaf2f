// Output formatting — terminal display, JSON report, and pie chart SVG.

pub mod chart;
pub mod copy;
pub mod terminal;

use serde::Serialize;

use crate::scoring::risk::RiskStyle;
use crate::scoring::AnalysisResult;
use self::copy::CallToAction;

/// Everything shown to the user for one analysis, in a serializable shape.
#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    pub result: &'a AnalysisResult,
    /// Badge colors for the risk level
    pub style: &'static RiskStyle,
    pub meaning: &'static str,
    pub call_to_action: &'static CallToAction,
}

impl<'a> AnalysisReport<'a> {
    pub fn new(result: &'a AnalysisResult) -> Self {
        Self {
            result,
            style: result.risk_level.style(),
            meaning: copy::meaning(result.risk_level),
            call_to_action: copy::call_to_action(result.risk_level),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Enough fractional digits to print any `f64` exactly.
const EXACT_DIGITS: usize = 1100;

/// Format a number with a fixed count of decimals, rounding ties away from
/// zero.
///
/// Rounding works on the exact stored value: 29/20 is stored just below
/// 1.45, so it prints as "1.4". `{:.N}` already does that, but it sends exact
/// ties to even (`format!("{:.0}", 2.5)` is "2"); here `to_fixed(2.5, 0)` is
/// "3".
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", digits + EXACT_DIGITS, value);
    let (kept, tail) = exact.split_at(exact.len() - EXACT_DIGITS);
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return format!("{value:.digits$}");
    }

    bump_last_digit(kept.trim_end_matches('.'))
}

/// Add one unit in the last place to a decimal string, away from zero.
fn bump_last_digit(number: &str) -> String {
    let mut bytes = number.as_bytes().to_vec();
    let start = usize::from(bytes.first() == Some(&b'-'));

    for i in (start..bytes.len()).rev() {
        match bytes[i] {
            b'.' => continue,
            b'9' => bytes[i] = b'0',
            digit => {
                bytes[i] = digit + 1;
                return String::from_utf8_lossy(&bytes).into_owned();
            }
        }
    }

    // Carried past the leading digit ("9.9" -> "10.0")
    bytes.insert(start, b'1');
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Format a count with comma thousands separators ("1,250,000").
///
/// Fractional parts are kept, trimmed to at most three decimals.
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let value = value.abs();
    let whole = value.trunc();
    let fraction = to_fixed(value - whole, 3);
    // "1.000" means the fraction rounded up into the whole part
    let (whole, fraction) = if fraction.starts_with('1') {
        (whole + 1.0, String::new())
    } else {
        let trimmed = fraction.trim_start_matches('0').trim_end_matches('0');
        let trimmed = trimmed.trim_end_matches('.');
        (whole, trimmed.to_string())
    };

    let digits = format!("{whole:.0}");
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}{fraction}")
}
