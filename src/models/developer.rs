//! Sprint and developer data structures
//!
//! This module contains the core data structures for loading and working
//! with sprint JSON files exported from the planning sheet.

use chrono::NaiveDate;
use serde::Deserialize;
use std::io;
use std::path::PathBuf;

use crate::error::SprintDataError;

/// Bundled sample sprint, shown when no sprint file is given.
const SAMPLE_SPRINT: &str = include_str!("../../assets/sprint.json");

/// One developer's capacity and delivery numbers for the sprint
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperRecord {
    pub id: String,
    pub name: String,
    /// First day of leave, if any. Paired with `leave_end`.
    #[serde(default)]
    pub leave_start: Option<NaiveDate>,
    /// Last day of leave, if any. Paired with `leave_start`.
    #[serde(default)]
    pub leave_end: Option<NaiveDate>,
    /// Story points the developer could absorb with no leave at all.
    pub total_capacity: u32,
    /// Capacity left after the planner adjusted for leave.
    pub available_capacity: u32,
    pub assigned_story_points: u32,
    pub completed_story_points: u32,
    /// Portion of the completed points that went to bug fixing.
    pub bug_points: u32,
}

impl DeveloperRecord {
    /// Completed points as a percentage of total capacity.
    pub fn utilization(&self) -> f64 {
        if self.total_capacity == 0 {
            return 0.0;
        }
        f64::from(self.completed_story_points) / f64::from(self.total_capacity) * 100.0
    }

    /// Completed points as a percentage of assigned points.
    pub fn efficiency(&self) -> f64 {
        if self.assigned_story_points == 0 {
            return 0.0;
        }
        f64::from(self.completed_story_points) / f64::from(self.assigned_story_points) * 100.0
    }

    /// Bug points as a percentage of completed points.
    pub fn bug_share(&self) -> f64 {
        if self.completed_story_points == 0 {
            return 0.0;
        }
        f64::from(self.bug_points) / f64::from(self.completed_story_points) * 100.0
    }

    /// Completed points minus bug points. Negative when a developer
    /// logged more bug work than completed story work.
    pub fn effective_points(&self) -> i64 {
        i64::from(self.completed_story_points) - i64::from(self.bug_points)
    }

    /// Story points the planner wrote off for leave.
    pub fn capacity_lost(&self) -> u32 {
        self.total_capacity.saturating_sub(self.available_capacity)
    }

    /// True when the record carries a complete leave interval.
    pub fn on_leave(&self) -> bool {
        self.leave_start.is_some() && self.leave_end.is_some()
    }

    /// The leave interval when both bounds are present.
    pub fn leave_interval(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.leave_start, self.leave_end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// Capacity band derived from this developer's utilization.
    pub fn status(&self) -> crate::models::CapacityStatus {
        crate::metrics::capacity_status(self.utilization())
    }
}

/// Sprint document structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    pub sprint_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_working_days: u32,
    pub developers: Vec<DeveloperRecord>,
}

impl Sprint {
    /// Load a sprint from a JSON file
    pub fn load(path: &PathBuf) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Parse the bundled sample sprint
    pub fn sample() -> io::Result<Self> {
        serde_json::from_str(SAMPLE_SPRINT)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Check the sprint for data that would make the dashboard lie.
    ///
    /// Serde already guarantees shape and date format; this checks the
    /// semantics it cannot express.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.developers.is_empty() {
            return Err(SprintDataError::NoData);
        }
        if self.end_date < self.start_date {
            return Err(SprintDataError::InvalidInput(format!(
                "sprint '{}' ends ({}) before it starts ({})",
                self.sprint_name, self.end_date, self.start_date
            )));
        }
        for dev in &self.developers {
            match (dev.leave_start, dev.leave_end) {
                (Some(start), Some(end)) if end < start => {
                    return Err(SprintDataError::InvalidInput(format!(
                        "{}: leave ends ({}) before it starts ({})",
                        dev.name, end, start
                    )));
                }
                (Some(_), None) | (None, Some(_)) => {
                    return Err(SprintDataError::InvalidInput(format!(
                        "{}: leave interval is missing one bound",
                        dev.name
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Count developers with a leave interval on record.
    pub fn on_leave_count(&self) -> usize {
        self.developers.iter().filter(|d| d.on_leave()).count()
    }
}
