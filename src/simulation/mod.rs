//! Simulated report generation.
//!
//! A session runs `unit_count` units strictly in order. For each unit the
//! [`OutcomeSource`] fabricates a status and pacing delays, the
//! [`RecordBuilder`] turns it into a [`ReportRecord`], and the record is
//! appended to the session's log. Nothing here touches the network.

mod outcome;
mod record;
mod runner;

pub use outcome::{
    Outcome, OutcomeSource, RandomOutcomeGenerator, ScriptedOutcomes, TOKEN_MAX, TOKEN_MIN,
};
pub use record::{Clock, FixedClock, RecordBuilder, ReportRecord, ReportStatus, SystemClock};
pub use runner::{Pacer, Pacing, Session, SimulationObserver, SimulationState, Simulator};
