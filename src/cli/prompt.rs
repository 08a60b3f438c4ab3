//! Retry-until-valid prompts for the interactive mode.

use std::io::{BufRead, Write};

use super::render::reason_menu;
use crate::error::{AppResult, ValidationError};
use crate::request::{ReportReason, SimulationRequest};
use crate::validation::{parse_reason_choice, parse_report_count, validate_phone_number};

/// Collects a [`SimulationRequest`] from a line-oriented reader.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Reads answers from `input` and writes prompts to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompts for every field, re-asking until each value is valid.
    pub fn collect_request(&mut self) -> AppResult<SimulationRequest> {
        writeln!(self.output, "\nReport Simulation Setup")?;
        writeln!(self.output, "{}", "=".repeat(50))?;

        let phone_number = self.phone_number()?;
        let count = self.report_count()?;
        let reason = self.reason()?;
        let details = self.ask("\nAdditional details (optional): ")?;

        Ok(SimulationRequest::new(
            phone_number,
            count,
            reason,
            Some(details),
        )?)
    }

    fn phone_number(&mut self) -> AppResult<String> {
        loop {
            let raw =
                self.ask("\nEnter the phone number to simulate reporting (with country code): ")?;
            if validate_phone_number(&raw) {
                return Ok(raw);
            }
            writeln!(
                self.output,
                "Invalid phone number format. Please enter a valid international number."
            )?;
        }
    }

    fn report_count(&mut self) -> AppResult<u32> {
        loop {
            let raw = self.ask("\nHow many reports do you want to simulate? (1-100): ")?;
            match parse_report_count(&raw) {
                Ok(count) => return Ok(count),
                Err(ValidationError::CountOutOfRange { .. }) => {
                    writeln!(self.output, "Please enter a number between 1 and 100.")?
                }
                Err(_) => writeln!(self.output, "Please enter a valid number.")?,
            }
        }
    }

    fn reason(&mut self) -> AppResult<ReportReason> {
        writeln!(self.output, "\nSelect a reason for reporting:")?;
        write!(self.output, "{}", reason_menu())?;
        loop {
            let raw = self.ask(&format!(
                "\nEnter your choice (1-{}): ",
                ReportReason::ALL.len()
            ))?;
            match parse_reason_choice(&raw) {
                Ok(reason) => return Ok(reason),
                Err(ValidationError::ReasonOutOfRange { .. }) => writeln!(
                    self.output,
                    "Please enter a number between 1 and {}.",
                    ReportReason::ALL.len()
                )?,
                Err(_) => writeln!(self.output, "Please enter a valid number.")?,
            }
        }
    }

    /// Prints `prompt` and reads one trimmed line. End of input is an error.
    fn ask(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ValidationError::InputClosed.into());
        }
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::io::Cursor;

    fn prompt(script: &str) -> (AppResult<SimulationRequest>, String) {
        let mut output = Vec::new();
        let result = Prompter::new(Cursor::new(script.to_string()), &mut output).collect_request();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_collect_request_happy_path() {
        let (result, _) = prompt("+1234567890\n3\n1\nTest\n");
        let request = result.unwrap();
        assert_eq!(request.target_number(), "+1234567890");
        assert_eq!(request.unit_count(), 3);
        assert_eq!(request.reason(), ReportReason::Spam);
        assert_eq!(request.details(), Some("Test"));
    }

    #[test]
    fn test_reprompts_until_valid() {
        let (result, output) = prompt("+123\nabc\n+447911123456\nzero\n0\n2\n11\nx\n7\n\n");
        let request = result.unwrap();
        assert_eq!(request.target_number(), "+447911123456");
        assert_eq!(request.unit_count(), 2);
        assert_eq!(request.reason(), ReportReason::Scam);
        assert_eq!(request.details(), None);

        assert_eq!(output.matches("Invalid phone number format").count(), 2);
        assert!(output.contains("Please enter a number between 1 and 100."));
        assert!(output.contains("Please enter a number between 1 and 10."));
        assert_eq!(output.matches("Please enter a valid number.").count(), 2);
        assert!(output.contains("10. Child exploitation"));
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let (result, _) = prompt("+1234567890\n");
        assert!(matches!(
            result,
            Err(AppError::Validation(ValidationError::InputClosed))
        ));
    }
}
