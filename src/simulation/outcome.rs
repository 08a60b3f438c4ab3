//! Outcome generation: the only source of randomness in a session.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::record::ReportStatus;
use crate::config::{DelayRange, SimulationConfig};

/// Lowest identifier token drawn for a record.
pub const TOKEN_MIN: u32 = 100_000;
/// Highest identifier token drawn for a record.
pub const TOKEN_MAX: u32 = 999_999;

/// The fabricated result of one simulated unit, plus its pacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    /// Whether the unit is recorded as a success.
    pub status: ReportStatus,
    /// Pause before the simulated submission completes.
    pub submission_delay: Duration,
    /// Pause after this unit, before the next one starts.
    pub pause: Duration,
    /// Random component of the record identifier.
    pub token: u32,
}

/// Produces one outcome per simulated unit.
pub trait OutcomeSource {
    /// Draws the outcome for the next unit.
    fn next_outcome(&mut self) -> Outcome;
}

/// Draws outcomes from a seedable random number generator.
#[derive(Debug, Clone)]
pub struct RandomOutcomeGenerator {
    rng: StdRng,
    success_probability: f64,
    submission_delay: DelayRange,
    pause: DelayRange,
}

impl RandomOutcomeGenerator {
    /// Generator seeded from the operating system.
    pub fn new(config: &SimulationConfig) -> Self {
        Self::with_rng(StdRng::from_os_rng(), config)
    }

    /// Generator with a fixed seed; the same seed yields the same sequence.
    pub fn seeded(seed: u64, config: &SimulationConfig) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), config)
    }

    /// Picks `seeded` or `new` depending on the configured seed.
    pub fn from_config(config: &SimulationConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed, config),
            None => Self::new(config),
        }
    }

    fn with_rng(rng: StdRng, config: &SimulationConfig) -> Self {
        Self {
            rng,
            success_probability: config.success_probability,
            submission_delay: config.submission_delay,
            pause: config.pause,
        }
    }

    /// Chance in `(0, 1)` that a unit succeeds.
    pub fn success_probability(&self) -> f64 {
        self.success_probability
    }

    fn draw_delay(&mut self, range: DelayRange) -> Duration {
        Duration::from_secs_f64(self.rng.random_range(range.as_secs_range()))
    }
}

impl OutcomeSource for RandomOutcomeGenerator {
    fn next_outcome(&mut self) -> Outcome {
        let status = if self.rng.random::<f64>() < self.success_probability {
            ReportStatus::Success
        } else {
            ReportStatus::Failed
        };
        let submission_delay = self.draw_delay(self.submission_delay);
        let pause = self.draw_delay(self.pause);
        let token = self.rng.random_range(TOKEN_MIN..=TOKEN_MAX);

        Outcome {
            status,
            submission_delay,
            pause,
            token,
        }
    }
}

/// Replays a fixed status sequence with no pacing delays.
///
/// Cycles when more outcomes are requested than statuses were given.
/// Tokens count up from [`TOKEN_MIN`].
#[derive(Debug, Clone)]
pub struct ScriptedOutcomes {
    statuses: Vec<ReportStatus>,
    position: usize,
}

impl ScriptedOutcomes {
    /// Returns `None` for an empty script.
    pub fn new(statuses: Vec<ReportStatus>) -> Option<Self> {
        if statuses.is_empty() {
            return None;
        }
        Some(Self {
            statuses,
            position: 0,
        })
    }
}

impl OutcomeSource for ScriptedOutcomes {
    fn next_outcome(&mut self) -> Outcome {
        let status = self.statuses[self.position % self.statuses.len()];
        let token = TOKEN_MIN + (self.position as u32 % (TOKEN_MAX - TOKEN_MIN + 1));
        self.position += 1;

        Outcome {
            status,
            submission_delay: Duration::ZERO,
            pause: Duration::ZERO,
            token,
        }
    }
}
