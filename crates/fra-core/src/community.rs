//! Community engagement records: grievances and gram sabha meetings

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Progress of a grievance through redressal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrievanceStatus {
    /// Just logged
    New,
    /// Being handled
    #[serde(rename = "In Progress")]
    InProgress,
    /// Closed
    Resolved,
}

/// A logged grievance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grievance {
    /// Identifier, e.g. `GRV-451`
    pub id: String,
    /// Village label
    pub village: String,
    /// Reported issue
    pub issue: String,
    /// Current status
    pub status: GrievanceStatus,
    /// Completion percentage, `0..=100`
    #[serde(deserialize_with = "clamped_progress")]
    progress: u8,
}

fn clamped_progress<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    u8::deserialize(deserializer).map(|p| p.min(100))
}

impl Grievance {
    /// Create grievance; progress is clamped to 100
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        village: impl Into<String>,
        issue: impl Into<String>,
        status: GrievanceStatus,
        progress: u8,
    ) -> Self {
        Self {
            id: id.into(),
            village: village.into(),
            issue: issue.into(),
            status,
            progress: progress.min(100),
        }
    }

    /// Completion percentage
    #[inline]
    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }
}

/// A gram sabha meeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Sequence number
    pub id: u32,
    /// Village label
    pub village: String,
    /// Meeting date
    pub date: NaiveDate,
    /// Agenda topic
    pub topic: String,
}
