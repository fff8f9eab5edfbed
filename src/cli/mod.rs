//! Command-line parsing.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! search and the reporting code. Anything not supplied here is prompted for.

use clap::Parser;

use crate::domain::OutputFormat;
use crate::input::{parse_personal_number, parse_positive};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "dejager",
    version,
    about = "Approximate a constant as a product of four personal numbers raised to small exponents"
)]
pub struct Cli {
    /// Positive constant to approximate.
    #[arg(short, long, env = "DEJAGER_TARGET", value_parser = parse_positive)]
    pub target: Option<f64>,

    /// The four personal numbers (positive, not 1), space- or comma-separated.
    #[arg(
        short,
        long,
        env = "DEJAGER_BASES",
        num_args = 1..,
        value_delimiter = ',',
        value_parser = parse_personal_number,
        value_name = "W X Y Z"
    )]
    pub bases: Option<Vec<f64>>,

    /// Output format for the final report.
    #[arg(short, long, env = "DEJAGER_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "dejager", "--target", "3.44", "--bases", "7.4", "2.35", "7.3", "20.3", "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.target, Some(3.44));
        assert_eq!(cli.bases, Some(vec![7.4, 2.35, 7.3, 20.3]));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn accepts_comma_separated_bases() {
        let cli = Cli::try_parse_from(["dejager", "-b", "7.4,2.35,7.3,20.3"]).unwrap();
        assert_eq!(cli.bases, Some(vec![7.4, 2.35, 7.3, 20.3]));
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(Cli::try_parse_from(["dejager", "--target", "-3"]).is_err());
        assert!(Cli::try_parse_from(["dejager", "--bases", "2", "1", "3", "4"]).is_err());
    }
}
