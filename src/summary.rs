//! Aggregate statistics for a finished (or interrupted) session.

use chrono::{DateTime, Local, Utc};

use crate::request::ReportReason;
use crate::simulation::ReportStatus;

/// Running counts of successful and failed units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Units recorded as `SUCCESS`.
    pub successful: u32,
    /// Units recorded as `FAILED`.
    pub failed: u32,
}

impl Tally {
    /// Counts one unit with the given status.
    pub fn record(&mut self, status: ReportStatus) {
        match status {
            ReportStatus::Success => self.successful += 1,
            ReportStatus::Failed => self.failed += 1,
        }
    }

    /// Units recorded so far.
    pub fn total(&self) -> u32 {
        self.successful + self.failed
    }
}

/// Read-only view of a tally with the derived success rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryView {
    /// Units recorded.
    pub total: u32,
    /// Units recorded as `SUCCESS`.
    pub successful: u32,
    /// Units recorded as `FAILED`.
    pub failed: u32,
    /// Percentage in `[0, 100]`; `0.0` when no units ran.
    pub success_rate: f64,
}

/// Computes the summary of a tally. Never divides by zero.
pub fn summarize(tally: &Tally) -> SummaryView {
    let total = tally.total();
    let success_rate = if total == 0 {
        0.0
    } else {
        tally.successful as f64 / total as f64 * 100.0
    };
    SummaryView {
        total,
        successful: tally.successful,
        failed: tally.failed,
        success_rate,
    }
}

impl SummaryView {
    /// Success rate rounded to one decimal, e.g. `66.7%`.
    pub fn formatted_rate(&self) -> String {
        format!("{:.1}%", self.success_rate)
    }

    /// Renders the summary block printed at the end of a session.
    pub fn render(
        &self,
        target_number: &str,
        reason: ReportReason,
        completed_at: DateTime<Utc>,
    ) -> String {
        let mut output = String::new();
        let rule = "=".repeat(60);

        output.push_str(&format!("\n{}\n", rule));
        output.push_str("SIMULATION SUMMARY\n");
        output.push_str(&format!("{}\n", rule));
        output.push_str(&format!("Target Number: {}\n", target_number));
        output.push_str(&format!("Report Reason: {}\n", reason));
        output.push_str(&format!("Total Reports: {}\n", self.total));
        output.push_str(&format!("Successful:    {}\n", self.successful));
        output.push_str(&format!("Failed:        {}\n", self.failed));
        output.push_str(&format!("Success Rate:  {}\n", self.formatted_rate()));
        output.push_str(&format!(
            "Completed at:  {}\n",
            completed_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
        ));

        output
    }
}
