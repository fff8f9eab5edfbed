//! Interactive prompting.
//!
//! The prompter prints a question, reads one line, and asks again until the
//! line holds a valid value. Running out of input is reported as an error so a
//! closed stdin cannot spin forever.

use std::io::{BufRead, Write};

use tracing::warn;

use crate::domain::{BASE_COUNT, Bases, SearchInput};
use crate::error::AppError;
use crate::input::validate::{parse_personal_number, parse_positive};

pub const TARGET_PROMPT: &str = "Please enter a positive real value: ";
pub const PERSONAL_NUMBER_PROMPT: &str = "Please enter a personal number: ";

pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Ask for the target constant.
    pub fn read_positive(&mut self) -> Result<f64, AppError> {
        self.read_value(TARGET_PROMPT, parse_positive)
    }

    /// Ask for one personal number.
    pub fn read_personal_number(&mut self) -> Result<f64, AppError> {
        self.read_value(PERSONAL_NUMBER_PROMPT, parse_personal_number)
    }

    /// Ask for all four personal numbers, in order.
    pub fn read_bases(&mut self) -> Result<Bases, AppError> {
        let mut out = [0.0; BASE_COUNT];
        for slot in &mut out {
            *slot = self.read_personal_number()?;
        }
        Ok(Bases(out))
    }

    /// Ask for the target and then the four personal numbers.
    pub fn read_input(&mut self) -> Result<SearchInput, AppError> {
        let target = self.read_positive()?;
        let bases = self.read_bases()?;
        Ok(SearchInput { target, bases })
    }

    /// Give back the underlying writer (used by tests to inspect the transcript).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_value(
        &mut self,
        prompt: &str,
        parse: fn(&str) -> Result<f64, AppError>,
    ) -> Result<f64, AppError> {
        let mut line = String::new();
        loop {
            self.writer
                .write_all(prompt.as_bytes())
                .and_then(|()| self.writer.flush())
                .map_err(|e| AppError::io(format!("Failed to write prompt: {e}")))?;

            line.clear();
            let n = self
                .reader
                .read_line(&mut line)
                .map_err(|e| AppError::io(format!("Failed to read input: {e}")))?;
            if n == 0 {
                return Err(AppError::invalid_input(
                    "Input ended before a valid value was entered.",
                ));
            }

            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => warn!(input = line.trim(), %err, "rejected input"),
            }
        }
    }
}
