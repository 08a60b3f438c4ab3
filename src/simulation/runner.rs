//! The sequential simulation loop.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::outcome::OutcomeSource;
use super::record::{Clock, RecordBuilder, ReportRecord, SystemClock};
use crate::request::SimulationRequest;
use crate::shutdown::Shutdown;
use crate::storage::{LogStore, SessionLog, SimulationInfo};
use crate::summary::{summarize, SummaryView, Tally};

/// Lifecycle of a simulation session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SimulationState {
    /// No unit has been generated yet.
    #[default]
    NotStarted,
    /// Units are being generated.
    Running,
    /// Every requested unit was generated.
    Completed,
    /// A stop request ended the session early.
    Interrupted,
}

impl SimulationState {
    /// Whether the session can no longer change.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SimulationState::Completed | SimulationState::Interrupted)
    }
}

/// Performs the artificial pacing delays.
#[async_trait]
pub trait Pacer: Send + Sync {
    /// Waits for `delay`, or not at all.
    async fn pause(&self, delay: Duration);
}

/// Built-in pacing strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep for the drawn delay.
    Realtime,
    /// Skip every delay.
    Instant,
}

#[async_trait]
impl Pacer for Pacing {
    async fn pause(&self, delay: Duration) {
        match self {
            Pacing::Realtime => tokio::time::sleep(delay).await,
            Pacing::Instant => {}
        }
    }
}

/// Progress callbacks invoked by the loop. All methods default to no-ops.
pub trait SimulationObserver {
    /// A unit is about to be generated (`position` is 1-based).
    fn unit_started(&mut self, _position: u32, _total: u32) {}
    /// The simulated submission is in flight.
    fn submitting(&mut self, _delay: Duration) {}
    /// A record was appended to the session log.
    fn unit_recorded(&mut self, _record: &ReportRecord) {}
    /// The loop is pausing before the next unit.
    fn pausing(&mut self, _delay: Duration) {}
}

impl SimulationObserver for () {}

/// The explicit state of one simulation run.
#[derive(Debug, Clone)]
pub struct Session {
    request: SimulationRequest,
    log: LogStore,
    tally: Tally,
    state: SimulationState,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl Session {
    fn new(request: SimulationRequest, started_at: DateTime<Utc>) -> Self {
        Self {
            request,
            log: LogStore::new(),
            tally: Tally::default(),
            state: SimulationState::NotStarted,
            started_at,
            finished_at: None,
        }
    }

    /// The validated request this session runs.
    pub fn request(&self) -> &SimulationRequest {
        &self.request
    }

    /// Records appended so far.
    pub fn log(&self) -> &LogStore {
        &self.log
    }

    /// Records in generation order.
    pub fn records(&self) -> &[ReportRecord] {
        self.log.records()
    }

    /// Success and failure counts so far.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SimulationState {
        self.state
    }

    /// Whether a stop request ended the session early.
    pub fn was_interrupted(&self) -> bool {
        self.state == SimulationState::Interrupted
    }

    /// When the run began.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// When the session reached a terminal state.
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Counts with the derived success rate.
    pub fn summary(&self) -> SummaryView {
        summarize(&self.tally)
    }

    /// Snapshot of the session in its persisted form.
    pub fn session_log(&self, generated_at: DateTime<Utc>) -> SessionLog {
        self.log.to_session_log(SimulationInfo::new(generated_at))
    }
}

/// Runs simulation sessions.
pub struct Simulator<O, C = SystemClock, P = Pacing> {
    outcomes: O,
    builder: RecordBuilder<C>,
    clock: C,
    pacer: P,
}

impl<O, C, P> Simulator<O, C, P>
where
    O: OutcomeSource,
    C: Clock + Clone,
    P: Pacer,
{
    /// Builds a simulator from its three seams.
    pub fn new(outcomes: O, clock: C, pacer: P) -> Self {
        Self {
            outcomes,
            builder: RecordBuilder::new(clock.clone()),
            clock,
            pacer,
        }
    }

    /// Runs every unit of `request` in order.
    ///
    /// Stops early, keeping every record already appended, once `shutdown`
    /// fires. A `FAILED` outcome is recorded like any other; units are never
    /// reissued.
    pub async fn run(
        &mut self,
        request: SimulationRequest,
        mut shutdown: Shutdown,
        observer: &mut impl SimulationObserver,
    ) -> Session {
        let total = request.unit_count();
        let mut session = Session::new(request, self.clock.now());

        info!(
            target_number = %session.request.target_number(),
            units = total,
            reason = %session.request.reason(),
            "Starting simulation"
        );

        for index in 0..total {
            if shutdown.is_triggered() {
                session.state = SimulationState::Interrupted;
                break;
            }
            session.state = SimulationState::Running;
            observer.unit_started(index + 1, total);

            let outcome = self.outcomes.next_outcome();
            observer.submitting(outcome.submission_delay);
            if !self.pace(outcome.submission_delay, &mut shutdown).await {
                session.state = SimulationState::Interrupted;
                break;
            }

            let record = self
                .builder
                .build(&session.request, &outcome, index as usize);
            debug!(
                report_id = %record.report_id,
                status = %record.status,
                position = index + 1,
                "Unit recorded"
            );
            session.tally.record(record.status);
            observer.unit_recorded(&record);
            session.log.append(record);

            if index + 1 < total {
                observer.pausing(outcome.pause);
                if !self.pace(outcome.pause, &mut shutdown).await {
                    session.state = SimulationState::Interrupted;
                    break;
                }
            }
        }

        if session.state != SimulationState::Interrupted {
            session.state = SimulationState::Completed;
        }
        session.finished_at = Some(self.clock.now());

        if session.was_interrupted() {
            warn!(
                recorded = session.log.len(),
                requested = total,
                "Simulation interrupted"
            );
        } else {
            info!(
                successful = session.tally.successful,
                failed = session.tally.failed,
                "Simulation completed"
            );
        }

        session
    }

    /// Waits out `delay` unless a stop is requested first.
    async fn pace(&self, delay: Duration, shutdown: &mut Shutdown) -> bool {
        tokio::select! {
            biased;
            _ = shutdown.triggered() => false,
            _ = self.pacer.pause(delay) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ReportReason;
    use crate::simulation::{ReportStatus, ScriptedOutcomes};
    use chrono::TimeZone;

    fn clock() -> crate::simulation::FixedClock {
        crate::simulation::FixedClock(Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap())
    }

    fn request(count: u32) -> SimulationRequest {
        SimulationRequest::new("+1234567890", count, ReportReason::Spam, None).unwrap()
    }

    #[test]
    fn test_state_terminal() {
        assert!(!SimulationState::NotStarted.is_terminal());
        assert!(!SimulationState::Running.is_terminal());
        assert!(SimulationState::Completed.is_terminal());
        assert!(SimulationState::Interrupted.is_terminal());
    }

    #[tokio::test]
    async fn test_run_single_unit() {
        let mut simulator = Simulator::new(
            ScriptedOutcomes::new(vec![ReportStatus::Failed]).unwrap(),
            clock(),
            Pacing::Instant,
        );
        let session = simulator.run(request(1), Shutdown::never(), &mut ()).await;

        assert_eq!(session.state(), SimulationState::Completed);
        assert_eq!(session.records().len(), 1);
        assert_eq!(session.tally().failed, 1);
        assert_eq!(session.finished_at(), Some(clock().0));
    }

    #[tokio::test]
    async fn test_trigger_before_run_records_nothing() {
        let (trigger, shutdown) = crate::shutdown::channel();
        trigger.trigger();
        let mut simulator = Simulator::new(
            ScriptedOutcomes::new(vec![ReportStatus::Success]).unwrap(),
            clock(),
            Pacing::Instant,
        );
        let session = simulator.run(request(5), shutdown, &mut ()).await;

        assert_eq!(session.state(), SimulationState::Interrupted);
        assert!(session.records().is_empty());
        assert_eq!(session.summary().success_rate, 0.0);
    }

    #[tokio::test]
    async fn test_realtime_pacing_sleeps() {
        let mut simulator = Simulator::new(
            ScriptedOutcomes::new(vec![ReportStatus::Success]).unwrap(),
            clock(),
            Pacing::Realtime,
        );
        // Scripted outcomes carry zero delays, so real sleeping still returns promptly.
        let session = simulator.run(request(2), Shutdown::never(), &mut ()).await;
        assert_eq!(session.records().len(), 2);
    }
}
