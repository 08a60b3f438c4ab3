//! Simulation request and the fixed set of report reasons.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::validation::{validate_phone_number, MAX_REPORTS, MIN_REPORTS};

/// Reason attached to every simulated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportReason {
    /// Unwanted bulk messages.
    #[serde(rename = "Spam or unwanted messages")]
    Spam,
    /// Harassment or bullying of a person.
    #[serde(rename = "Harassment or bullying")]
    Harassment,
    /// False or misleading information.
    #[serde(rename = "Fake news or misinformation")]
    Misinformation,
    /// Violent content or threats.
    #[serde(rename = "Violence or threats")]
    Violence,
    /// Content unsuitable for the platform.
    #[serde(rename = "Inappropriate content")]
    InappropriateContent,
    /// Pretending to be someone else.
    #[serde(rename = "Impersonation")]
    Impersonation,
    /// Fraudulent schemes.
    #[serde(rename = "Scam or fraud")]
    Scam,
    /// Attacks on protected groups.
    #[serde(rename = "Hate speech")]
    HateSpeech,
    /// Terrorist content.
    #[serde(rename = "Terrorism")]
    Terrorism,
    /// Content that exploits minors.
    #[serde(rename = "Child exploitation")]
    ChildExploitation,
}

impl ReportReason {
    /// All reasons in menu order.
    pub const ALL: [ReportReason; 10] = [
        ReportReason::Spam,
        ReportReason::Harassment,
        ReportReason::Misinformation,
        ReportReason::Violence,
        ReportReason::InappropriateContent,
        ReportReason::Impersonation,
        ReportReason::Scam,
        ReportReason::HateSpeech,
        ReportReason::Terrorism,
        ReportReason::ChildExploitation,
    ];

    /// Human-readable label, also used in the persisted log.
    pub fn label(&self) -> &'static str {
        match self {
            ReportReason::Spam => "Spam or unwanted messages",
            ReportReason::Harassment => "Harassment or bullying",
            ReportReason::Misinformation => "Fake news or misinformation",
            ReportReason::Violence => "Violence or threats",
            ReportReason::InappropriateContent => "Inappropriate content",
            ReportReason::Impersonation => "Impersonation",
            ReportReason::Scam => "Scam or fraud",
            ReportReason::HateSpeech => "Hate speech",
            ReportReason::Terrorism => "Terrorism",
            ReportReason::ChildExploitation => "Child exploitation",
        }
    }

    /// Looks up a reason by its 1-based menu position.
    pub fn from_choice(choice: usize) -> Option<Self> {
        choice
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx))
            .copied()
    }

    /// 1-based menu position.
    pub fn choice(&self) -> usize {
        Self::ALL
            .iter()
            .position(|r| r == self)
            .map(|idx| idx + 1)
            .unwrap_or(0)
    }
}

impl std::fmt::Display for ReportReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for ReportReason {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(choice) = trimmed.parse::<usize>() {
            return Self::from_choice(choice).ok_or(ValidationError::ReasonOutOfRange {
                value: choice as i64,
            });
        }
        Self::ALL
            .iter()
            .find(|r| r.label().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| ValidationError::UnknownReason {
                input: trimmed.to_string(),
            })
    }
}

/// A validated request for one simulation session.
///
/// Built once through [`SimulationRequest::new`]; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationRequest {
    target_number: String,
    unit_count: u32,
    reason: ReportReason,
    details: Option<String>,
}

impl SimulationRequest {
    /// Validates the inputs and builds a request.
    pub fn new(
        target_number: impl Into<String>,
        unit_count: u32,
        reason: ReportReason,
        details: Option<String>,
    ) -> ValidationResult<Self> {
        let target_number = target_number.into().trim().to_string();
        if !validate_phone_number(&target_number) {
            return Err(ValidationError::InvalidPhoneNumber {
                input: target_number,
            });
        }
        if !(MIN_REPORTS..=MAX_REPORTS).contains(&unit_count) {
            return Err(ValidationError::CountOutOfRange {
                value: unit_count as i64,
            });
        }
        let details = details
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Self {
            target_number,
            unit_count,
            reason,
            details,
        })
    }

    /// Phone number as entered.
    pub fn target_number(&self) -> &str {
        &self.target_number
    }

    /// Number of units to simulate, in `1..=100`.
    pub fn unit_count(&self) -> u32 {
        self.unit_count
    }

    /// Reason attached to every unit.
    pub fn reason(&self) -> ReportReason {
        self.reason
    }

    /// Free-text details; `None` when empty.
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_choices_round_trip() {
        for (idx, reason) in ReportReason::ALL.iter().enumerate() {
            assert_eq!(reason.choice(), idx + 1);
            assert_eq!(ReportReason::from_choice(idx + 1), Some(*reason));
        }
        assert_eq!(ReportReason::from_choice(0), None);
        assert_eq!(ReportReason::from_choice(11), None);
    }

    #[test]
    fn test_reason_from_str() {
        assert_eq!("3".parse::<ReportReason>(), Ok(ReportReason::Misinformation));
        assert_eq!(
            "hate speech".parse::<ReportReason>(),
            Ok(ReportReason::HateSpeech)
        );
        assert!(matches!(
            "nonsense".parse::<ReportReason>(),
            Err(ValidationError::UnknownReason { .. })
        ));
        assert!(matches!(
            "42".parse::<ReportReason>(),
            Err(ValidationError::ReasonOutOfRange { value: 42 })
        ));
    }

    #[test]
    fn test_reason_serializes_as_label() {
        let json = serde_json::to_string(&ReportReason::Scam).unwrap();
        assert_eq!(json, "\"Scam or fraud\"");
        let parsed: ReportReason = serde_json::from_str("\"Impersonation\"").unwrap();
        assert_eq!(parsed, ReportReason::Impersonation);
    }

    #[test]
    fn test_request_new_valid() {
        let request = SimulationRequest::new(
            " +1234567890 ",
            3,
            ReportReason::Spam,
            Some("Test".to_string()),
        )
        .unwrap();
        assert_eq!(request.target_number(), "+1234567890");
        assert_eq!(request.unit_count(), 3);
        assert_eq!(request.reason(), ReportReason::Spam);
        assert_eq!(request.details(), Some("Test"));
    }

    #[test]
    fn test_request_blank_details_become_none() {
        let request =
            SimulationRequest::new("+1234567890", 1, ReportReason::Spam, Some("   ".into()))
                .unwrap();
        assert_eq!(request.details(), None);
    }

    #[test]
    fn test_request_rejects_bad_number() {
        let err = SimulationRequest::new("+123", 1, ReportReason::Spam, None).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPhoneNumber { .. }));
    }

    #[test]
    fn test_request_rejects_count_out_of_range() {
        for count in [0, 101] {
            let err =
                SimulationRequest::new("+1234567890", count, ReportReason::Spam, None).unwrap_err();
            assert!(matches!(err, ValidationError::CountOutOfRange { .. }));
        }
    }
}
