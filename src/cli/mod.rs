//! Command-line surface: argument parsing, prompts and console output.

mod prompt;
mod render;

pub use prompt::Prompter;
pub use render::{banner, educational_info, reason_menu, ConsoleObserver};

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, DelayRange};
use crate::error::{AppResult, ValidationError, ValidationResult};
use crate::request::{ReportReason, SimulationRequest};
use crate::validation::{parse_reason_choice, parse_report_count};

/// Educational simulator of a messaging-platform abuse report flow.
///
/// No report is ever submitted anywhere: every outcome is fabricated locally.
#[derive(Parser, Debug, Clone)]
#[command(name = "whatsapp-report-simulator", version, about, long_about = None)]
pub struct Cli {
    /// Prompt for every input, even if flags were supplied
    #[arg(long)]
    pub interactive: bool,

    /// Save the session log as JSON after the run
    #[arg(long)]
    pub save_logs: bool,

    /// Print educational information and exit
    #[arg(long)]
    pub educational: bool,

    /// Print the available report reasons and exit
    #[arg(long)]
    pub list_reasons: bool,

    /// Target phone number, with country code (skips prompting)
    #[arg(long)]
    pub phone_number: Option<String>,

    /// Number of reports to simulate (1-100)
    // Kept as text: parse and range errors go through `parse_report_count`,
    // so a bad count is a `ValidationError` (exit 2) just like a bad number.
    #[arg(long, default_value = "1")]
    pub count: String,

    /// Report reason, by menu number (1-10)
    #[arg(long)]
    pub reason: Option<String>,

    /// Optional free-text details attached to every report
    #[arg(long)]
    pub details: Option<String>,

    /// Explicit path for the saved session log
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Seed for the outcome generator, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Probability that a simulated report succeeds, in (0, 1)
    #[arg(long)]
    pub success_probability: Option<f64>,

    /// Skip the artificial pacing delays
    #[arg(long)]
    pub no_delay: bool,
}

impl Cli {
    /// Whether inputs must be collected by prompting.
    pub fn wants_prompt(&self) -> bool {
        self.interactive || self.phone_number.is_none()
    }

    /// Builds a request from flags alone. Any invalid value rejects it.
    pub fn request(&self) -> ValidationResult<SimulationRequest> {
        let phone_number = self
            .phone_number
            .as_deref()
            .ok_or_else(|| ValidationError::Missing {
                field: "--phone-number".to_string(),
            })?;
        let count = parse_report_count(&self.count)?;
        let reason: ReportReason = match self.reason.as_deref() {
            Some(raw) => parse_reason_choice(raw)?,
            None => {
                return Err(ValidationError::Missing {
                    field: "--reason".to_string(),
                })
            }
        };
        SimulationRequest::new(phone_number, count, reason, self.details.clone())
    }

    /// Applies flag overrides on top of the environment configuration.
    pub fn apply_overrides(&self, mut config: Config) -> AppResult<Config> {
        if let Some(p) = self.success_probability {
            config.simulation.success_probability = p;
        }
        if self.seed.is_some() {
            config.simulation.seed = self.seed;
        }
        if self.no_delay {
            config.simulation.pacing_enabled = false;
            config.simulation.submission_delay = DelayRange::ZERO;
            config.simulation.pause = DelayRange::ZERO;
        }
        config.simulation.validate()?;
        Ok(config)
    }
}
