//! Console text: banner, educational notes and live progress.

use std::io::Write;
use std::time::Duration;

use crate::request::ReportReason;
use crate::simulation::{ReportRecord, ReportStatus, SimulationObserver};

/// Banner printed at start-up.
pub fn banner() -> String {
    let mut output = String::new();
    output.push_str("\n╔══════════════════════════════════════════════════════════════╗\n");
    output.push_str("║              WhatsApp Number Reporter Simulator              ║\n");
    output.push_str("║                       EDUCATIONAL TOOL                       ║\n");
    output.push_str("║                                                              ║\n");
    output.push_str("║  DISCLAIMER: This is a SIMULATION tool for learning          ║\n");
    output.push_str("║  purposes only. No real reports are submitted.               ║\n");
    output.push_str("╚══════════════════════════════════════════════════════════════╝\n");
    output
}

/// Numbered list of report reasons.
pub fn reason_menu() -> String {
    ReportReason::ALL
        .iter()
        .map(|reason| format!("  {:2}. {}\n", reason.choice(), reason))
        .collect()
}

/// Static notes on how real reporting and anti-abuse systems work.
pub fn educational_info() -> String {
    let rule = "=".repeat(60);
    format!(
        "\n{rule}\nEDUCATIONAL INFORMATION\n{rule}\n{body}",
        rule = rule,
        body = EDUCATIONAL_TEXT
    )
}

const EDUCATIONAL_TEXT: &str = "
How Messaging Platform Reporting Works (Real System):
  - Users can report messages, contacts, or groups
  - Reports are reviewed by human moderators
  - Automated systems detect patterns of abuse
  - Multiple reports can trigger account restrictions
  - False reports are filtered out by the system

Anti-Abuse Measures:
  - Rate limiting on report submissions
  - CAPTCHA challenges for suspicious activity
  - IP-based restrictions
  - Account verification requirements
  - Machine learning detection systems

Legal and Ethical Considerations:
  - Mass reporting can constitute harassment
  - False reports may violate terms of service
  - Legal consequences for abuse of reporting systems
  - Impact on legitimate users and businesses

Learning Objectives:
  - Understanding API rate limiting
  - Social media platform security
  - Anti-abuse system design
  - Ethical hacking principles
  - Cybersecurity awareness
";

/// Prints loop progress to a writer, usually stdout.
pub struct ConsoleObserver<W> {
    out: W,
}

impl<W: Write> ConsoleObserver<W> {
    /// Observer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    // Progress output is best-effort; a closed stdout must not stop the loop.
    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
        let _ = self.out.flush();
    }
}

impl<W: Write> SimulationObserver for ConsoleObserver<W> {
    fn unit_started(&mut self, position: u32, total: u32) {
        self.line(&format!("\nProcessing report {}/{}", position, total));
    }

    fn submitting(&mut self, _delay: Duration) {
        self.line("Simulating report submission...");
    }

    fn unit_recorded(&mut self, record: &ReportRecord) {
        match record.status {
            ReportStatus::Success => self.line("[SUCCESS] Report submitted successfully (simulated)"),
            ReportStatus::Failed => self.line("[FAILED] Report submission failed (simulated)"),
        }
    }

    fn pausing(&mut self, delay: Duration) {
        self.line(&format!(
            "Waiting {:.1} seconds before next report...",
            delay.as_secs_f64()
        ));
    }
}
