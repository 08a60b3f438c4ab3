//! # WhatsApp Report Simulator
//!
//! An educational command-line tool that imitates a messaging-platform abuse
//! report flow entirely offline. No network call is ever made: each
//! "report" is a locally fabricated outcome with artificial pacing.
//!
//! ## Architecture
//!
//! ```text
//! validation → SimulationRequest → Simulator ──▶ OutcomeSource (rand)
//!                                      │      └─▶ RecordBuilder (clock)
//!                                      ▼
//!                            Session (LogStore + Tally)
//!                                │              │
//!                                ▼              ▼
//!                          SummaryView     SessionLog (JSON)
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use whatsapp_report_simulator::request::{ReportReason, SimulationRequest};
//! use whatsapp_report_simulator::shutdown::Shutdown;
//! use whatsapp_report_simulator::simulation::{
//!     Pacing, ReportStatus, ScriptedOutcomes, Simulator, SystemClock,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let request = SimulationRequest::new("+1234567890", 3, ReportReason::Spam, None)?;
//!     let outcomes = ScriptedOutcomes::new(vec![ReportStatus::Success, ReportStatus::Failed])
//!         .ok_or("empty script")?;
//!     let mut simulator = Simulator::new(outcomes, SystemClock, Pacing::Instant);
//!     let session = simulator.run(request, Shutdown::never(), &mut ()).await;
//!     println!("{}", session.summary().formatted_rate());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// Command-line parsing, prompts and console rendering.
pub mod cli;
/// Configuration management.
pub mod config;
/// Error types and result aliases for the application.
pub mod error;
/// Simulation request and report reasons.
pub mod request;
/// Graceful-stop signalling.
pub mod shutdown;
/// Outcome generation, record building and the simulation loop.
pub mod simulation;
/// In-memory session log and JSON persistence.
pub mod storage;
/// Tally aggregation and summary rendering.
pub mod summary;
/// Pure input validation.
pub mod validation;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use simulation::{Session, Simulator};
