use std::env;
use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::error::AppError;

/// Default probability that a simulated report is marked as successful.
pub const DEFAULT_SUCCESS_PROBABILITY: f64 = 0.85;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Outcome and pacing settings.
    pub simulation: SimulationConfig,
    /// Where session logs go.
    pub output: OutputConfig,
    /// Diagnostic logging settings.
    pub logging: LoggingConfig,
}

/// Outcome generation and pacing configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Chance that a unit is marked successful; strictly inside `(0, 1)`.
    pub success_probability: f64,
    /// Delay simulating the submission itself.
    pub submission_delay: DelayRange,
    /// Pause between consecutive units.
    pub pause: DelayRange,
    /// When false, every delay is skipped.
    pub pacing_enabled: bool,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
}

/// Inclusive range of pacing delays, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    /// Shortest delay.
    pub min_ms: u64,
    /// Longest delay.
    pub max_ms: u64,
}

/// Session log output configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Directory for auto-named session logs.
    pub log_dir: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    /// Human-readable lines.
    Pretty,
    /// One JSON object per event.
    Json,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = SimulationConfig::default();
        let simulation = SimulationConfig {
            success_probability: env::var("SIMULATOR_SUCCESS_PROBABILITY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.success_probability),
            submission_delay: DelayRange {
                min_ms: env_u64(
                    "SIMULATOR_SUBMISSION_DELAY_MIN_MS",
                    defaults.submission_delay.min_ms,
                ),
                max_ms: env_u64(
                    "SIMULATOR_SUBMISSION_DELAY_MAX_MS",
                    defaults.submission_delay.max_ms,
                ),
            },
            pause: DelayRange {
                min_ms: env_u64("SIMULATOR_PAUSE_MIN_MS", defaults.pause.min_ms),
                max_ms: env_u64("SIMULATOR_PAUSE_MAX_MS", defaults.pause.max_ms),
            },
            ..defaults
        };
        simulation.validate()?;

        let output = OutputConfig {
            log_dir: PathBuf::from(
                env::var("SIMULATOR_LOG_DIR").unwrap_or_else(|_| ".".to_string()),
            ),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        Ok(Config {
            simulation,
            output,
            logging,
        })
    }
}

impl SimulationConfig {
    /// Check the probability bounds and delay ranges.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(self.success_probability > 0.0 && self.success_probability < 1.0) {
            return Err(AppError::Config {
                message: format!(
                    "success probability must be between 0 and 1 (exclusive), got {}",
                    self.success_probability
                ),
            });
        }
        self.submission_delay.validate("submission delay")?;
        self.pause.validate("pause")?;
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            success_probability: DEFAULT_SUCCESS_PROBABILITY,
            submission_delay: DelayRange {
                min_ms: 500,
                max_ms: 2000,
            },
            pause: DelayRange {
                min_ms: 1000,
                max_ms: 3000,
            },
            pacing_enabled: true,
            seed: None,
        }
    }
}

impl DelayRange {
    /// A range that always yields zero.
    pub const ZERO: DelayRange = DelayRange {
        min_ms: 0,
        max_ms: 0,
    };

    /// The range in seconds, suitable for uniform sampling.
    pub fn as_secs_range(&self) -> RangeInclusive<f64> {
        (self.min_ms as f64 / 1000.0)..=(self.max_ms as f64 / 1000.0)
    }

    fn validate(&self, name: &str) -> Result<(), AppError> {
        if self.min_ms > self.max_ms {
            return Err(AppError::Config {
                message: format!(
                    "{} range is inverted: min {}ms > max {}ms",
                    name, self.min_ms, self.max_ms
                ),
            });
        }
        Ok(())
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_simulation_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.success_probability, 0.85);
        assert_eq!(config.submission_delay.as_secs_range(), 0.5..=2.0);
        assert_eq!(config.pause.as_secs_range(), 1.0..=3.0);
    }

    #[test]
    fn test_probability_bounds_rejected() {
        for p in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
            let config = SimulationConfig {
                success_probability: p,
                ..SimulationConfig::default()
            };
            assert!(config.validate().is_err(), "probability {} accepted", p);
        }
    }

    #[test]
    fn test_inverted_range_rejected() {
        let config = SimulationConfig {
            pause: DelayRange {
                min_ms: 3000,
                max_ms: 1000,
            },
            ..SimulationConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("pause range is inverted"));
    }

    #[test]
    fn test_zero_range() {
        assert_eq!(DelayRange::ZERO.as_secs_range(), 0.0..=0.0);
    }
}
