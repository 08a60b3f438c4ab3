//! In-memory session log and its JSON persistence.
//!
//! Records are held in generation order. The persisted document is built on
//! demand from the in-memory log and written in one piece; nothing is ever
//! appended to an existing file.

mod json;


pub use json::{default_log_filename, load, persist};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::simulation::ReportRecord;

/// Tool name written to every session log.
pub const TOOL_NAME: &str = "WhatsApp Number Reporter Simulator";

/// Disclaimer written to every session log.
pub const DISCLAIMER: &str = "This is a simulation tool for educational purposes only";

/// Metadata block of a persisted session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationInfo {
    /// Always [`TOOL_NAME`].
    pub tool_name: String,
    /// Crate version that wrote the document.
    pub version: String,
    /// When the document was generated.
    pub timestamp: DateTime<Utc>,
    /// Always [`DISCLAIMER`].
    pub disclaimer: String,
}

impl SimulationInfo {
    /// Metadata for this build of the tool.
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            tool_name: TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp,
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}

/// A whole session in its persisted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLog {
    /// Document metadata.
    pub simulation_info: SimulationInfo,
    /// Records in generation order.
    pub reports: Vec<ReportRecord>,
}

/// Ordered, append-only store of the records of one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogStore {
    records: Vec<ReportRecord>,
}

impl LogStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fully built record.
    pub fn append(&mut self, record: ReportRecord) {
        self.records.push(record);
    }

    /// Records in generation order.
    pub fn records(&self) -> &[ReportRecord] {
        &self.records
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no record has been appended.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Builds the persisted document from the current records.
    pub fn to_session_log(&self, simulation_info: SimulationInfo) -> SessionLog {
        SessionLog {
            simulation_info,
            reports: self.records.clone(),
        }
    }
}
