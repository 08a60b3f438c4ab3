//! Report records and the builder that assembles them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::outcome::Outcome;
use crate::request::{ReportReason, SimulationRequest};

/// Fabricated status of a simulated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    /// The simulated submission was accepted.
    Success,
    /// The simulated submission was rejected.
    Failed,
}

impl ReportStatus {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Success => "SUCCESS",
            ReportStatus::Failed => "FAILED",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One simulated report. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    /// Identifier, unique within a session.
    pub report_id: String,
    /// Target number exactly as entered.
    pub phone_number: String,
    /// Reason selected for the session.
    pub reason: ReportReason,
    /// When the record was built.
    pub timestamp: DateTime<Utc>,
    /// Fabricated outcome.
    pub status: ReportStatus,
    /// Free-text details, if any were entered.
    pub additional_details: Option<String>,
}

/// Source of wall-clock time for record timestamps.
pub trait Clock {
    /// Current time in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// The system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Assembles [`ReportRecord`]s from a request and an outcome.
#[derive(Debug, Clone)]
pub struct RecordBuilder<C> {
    clock: C,
}

impl<C: Clock> RecordBuilder<C> {
    /// Builder stamping records with `clock`.
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Builds the record for the unit at `sequence_index` (0-based).
    ///
    /// The identifier is `RPT_<token>_<epoch seconds>_<sequence>`; the
    /// sequence suffix keeps identifiers unique even when the token repeats
    /// within the same second.
    pub fn build(
        &self,
        request: &SimulationRequest,
        outcome: &Outcome,
        sequence_index: usize,
    ) -> ReportRecord {
        let timestamp = self.clock.now();
        let report_id = format!(
            "RPT_{}_{}_{:03}",
            outcome.token,
            timestamp.timestamp(),
            sequence_index + 1
        );

        ReportRecord {
            report_id,
            phone_number: request.target_number().to_string(),
            reason: request.reason(),
            timestamp,
            status: outcome.status,
            additional_details: request.details().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;
    use std::time::Duration;

    fn request() -> SimulationRequest {
        SimulationRequest::new(
            "+1234567890",
            3,
            ReportReason::Spam,
            Some("Test".to_string()),
        )
        .unwrap()
    }

    fn outcome(status: ReportStatus, token: u32) -> Outcome {
        Outcome {
            status,
            submission_delay: Duration::ZERO,
            pause: Duration::ZERO,
            token,
        }
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&ReportStatus::Success).unwrap(),
            "\"SUCCESS\""
        );
        assert_eq!(
            serde_json::to_string(&ReportStatus::Failed).unwrap(),
            "\"FAILED\""
        );
        assert_eq!(ReportStatus::Failed.to_string(), "FAILED");
    }

    #[test]
    fn test_build_record_fields() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let builder = RecordBuilder::new(FixedClock(at));
        let record = builder.build(&request(), &outcome(ReportStatus::Failed, 123456), 0);

        assert_eq!(
            record.report_id,
            format!("RPT_123456_{}_001", at.timestamp())
        );
        assert_eq!(record.phone_number, "+1234567890");
        assert_eq!(record.reason, ReportReason::Spam);
        assert_eq!(record.timestamp, at);
        assert_eq!(record.status, ReportStatus::Failed);
        assert_eq!(record.additional_details.as_deref(), Some("Test"));
    }

    #[test]
    fn test_identifiers_unique_with_repeated_token_and_clock() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let builder = RecordBuilder::new(FixedClock(at));
        let req = request();
        let ids: HashSet<_> = (0..100)
            .map(|i| {
                builder
                    .build(&req, &outcome(ReportStatus::Success, 500000), i)
                    .report_id
            })
            .collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_record_json_shape() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let record = RecordBuilder::new(FixedClock(at)).build(
            &request(),
            &outcome(ReportStatus::Success, 111111),
            1,
        );
        let value = serde_json::to_value(&record).unwrap();
        let keys: HashSet<_> = value.as_object().unwrap().keys().cloned().collect();
        let expected: HashSet<_> = [
            "report_id",
            "phone_number",
            "reason",
            "timestamp",
            "status",
            "additional_details",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        assert_eq!(keys, expected);
        assert_eq!(value["reason"], "Spam or unwanted messages");
        assert_eq!(value["status"], "SUCCESS");
        assert_eq!(value["timestamp"], "2024-01-02T03:04:05Z");
    }
}
