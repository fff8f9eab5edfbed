//! Formatted terminal output.
//!
//! We keep formatting code in one place so the search stays free of
//! presentation concerns and output changes stay localized.

use crate::domain::{OutputFormat, Report};
use crate::error::AppError;

/// Render `report` in the requested format.
pub fn render(report: &Report, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(format_text(report)),
        OutputFormat::Json => format_json(report),
    }
}

/// The three-line text report.
pub fn format_text(report: &Report) -> String {
    let exponents: Vec<String> = report.exponents.iter().map(|&e| fmt_real(e)).collect();

    let mut out = String::new();
    out.push_str(&format!("Closest guess: {}\n", fmt_real(report.estimate)));
    out.push_str(&format!("Exponents used: {}\n", exponents.join(" ")));
    out.push_str(&format!("Error: {}%", fmt_real(report.relative_error_percent)));
    out
}

/// The report as pretty-printed JSON.
pub fn format_json(report: &Report) -> Result<String, AppError> {
    serde_json::to_string_pretty(report)
        .map_err(|e| AppError::internal(format!("Failed to serialize report: {e}")))
}

/// Shortest round-trip decimal, always showing a fractional part for finite values.
fn fmt_real(v: f64) -> String {
    let s = v.to_string();
    if v.is_finite() && !s.contains(['.', 'e', 'E']) {
        format!("{s}.0")
    } else {
        s
    }
}
