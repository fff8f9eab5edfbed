//! Reporting utilities: relative error and formatted output.

pub mod format;

pub use format::*;

use crate::domain::{Report, SearchResult};

/// `|estimate - target| / target`, as a percentage.
pub fn relative_error_percent(estimate: f64, target: f64) -> f64 {
    ((estimate - target) / target).abs() * 100.0
}

impl Report {
    pub fn new(target: f64, result: &SearchResult) -> Self {
        Self {
            target,
            estimate: result.estimate,
            exponents: result.exponents,
            relative_error_percent: relative_error_percent(result.estimate, target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_error_basic() {
        assert_eq!(relative_error_percent(2.0, 2.0), 0.0);
        assert!((relative_error_percent(110.0, 100.0) - 10.0).abs() < 1e-12);
        assert!((relative_error_percent(90.0, 100.0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn sentinel_result_reports_full_error() {
        let report = Report::new(5.0, &SearchResult::SENTINEL);
        assert_eq!(report.relative_error_percent, 100.0);
        assert_eq!(report.exponents, [0.0; 4]);
    }
}
