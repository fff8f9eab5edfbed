//! Shared domain types.
//!
//! These types are intentionally kept small, `Copy` where possible, and
//! serializable so they can be:
//!
//! - passed around freely during the search
//! - rendered as JSON by the reporting layer

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::input::{check_personal_number, check_positive};

/// Number of personal numbers raised to a candidate exponent.
pub const BASE_COUNT: usize = 4;

/// How the final report is rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The classic three-line text report.
    #[default]
    Text,
    /// A single pretty-printed JSON object.
    Json,
}

/// The four personal numbers `w, x, y, z`, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bases(pub [f64; BASE_COUNT]);

impl Bases {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<[f64; BASE_COUNT]> for Bases {
    fn from(values: [f64; BASE_COUNT]) -> Self {
        Self(values)
    }
}

impl fmt::Display for Bases {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [w, x, y, z] = self.0;
        write!(f, "{w} {x} {y} {z}")
    }
}

/// A validated search request.
///
/// Construct with [`SearchInput::new`] to have the preconditions checked, or
/// build the struct literally when the values are already known to be valid
/// (the search itself never re-validates).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchInput {
    pub target: f64,
    pub bases: Bases,
}

impl SearchInput {
    /// Check the preconditions and build the input.
    ///
    /// `target` must be finite and `> 0`; every base must be finite, `> 0` and
    /// different from `1.0`.
    pub fn new(target: f64, bases: impl Into<Bases>) -> Result<Self, AppError> {
        let bases = bases.into();
        check_positive(target)?;
        for &base in bases.as_slice() {
            check_personal_number(base)?;
        }
        Ok(Self { target, bases })
    }
}

/// Best combination found by the exponent search.
///
/// `exponents[i]` is the candidate exponent applied to `bases[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub estimate: f64,
    pub exponents: [f64; BASE_COUNT],
}

impl SearchResult {
    /// The "no guess yet" starting point: estimate `0`, all exponents `0`.
    pub const SENTINEL: SearchResult = SearchResult {
        estimate: 0.0,
        exponents: [0.0; BASE_COUNT],
    };

    /// Absolute distance between this estimate and `target`.
    pub fn abs_error(&self, target: f64) -> f64 {
        (target - self.estimate).abs()
    }
}

/// Everything the reporting layer prints for one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub target: f64,
    pub estimate: f64,
    pub exponents: [f64; BASE_COUNT],
    pub relative_error_percent: f64,
}

/// A run's configuration as understood by the application.
///
/// This is derived from CLI flags and environment. Values left as `None` are
/// prompted for interactively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchConfig {
    pub target: Option<f64>,
    pub bases: Option<Bases>,
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_input_accepts_valid_values() {
        let input = SearchInput::new(3.44, [7.4, 2.35, 7.3, 20.3]).unwrap();
        assert_eq!(input.target, 3.44);
        assert_eq!(input.bases.0, [7.4, 2.35, 7.3, 20.3]);
    }

    #[test]
    fn search_input_rejects_unit_base() {
        let err = SearchInput::new(2.0, [2.0, 1.0, 3.0, 4.0]).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INVALID_INPUT);
    }

    #[test]
    fn search_input_rejects_non_positive_target() {
        assert!(SearchInput::new(0.0, [2.0, 3.0, 4.0, 5.0]).is_err());
        assert!(SearchInput::new(-1.0, [2.0, 3.0, 4.0, 5.0]).is_err());
        assert!(SearchInput::new(f64::NAN, [2.0, 3.0, 4.0, 5.0]).is_err());
    }

    #[test]
    fn sentinel_error_equals_target() {
        assert_eq!(SearchResult::SENTINEL.abs_error(42.0), 42.0);
    }

    #[test]
    fn bases_display_is_space_separated() {
        assert_eq!(Bases([2.0, 0.5, 3.25, 10.0]).to_string(), "2 0.5 3.25 10");
    }
}
