//! Sprint timeline derivation
//!
//! Builds the event list for the timeline view from the sprint window
//! and the roster's leave intervals. Nothing here is stored; the list is
//! recomputed whenever the sprint reloads.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::developer::Sprint;

/// Kind of timeline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineEventKind {
    Milestone,
    Leave,
}

/// A dated entry in the timeline view
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEvent {
    pub date: NaiveDate,
    pub kind: TimelineEventKind,
    pub title: String,
    pub detail: String,
    /// Developers attached to the event. Empty for milestones.
    pub developers: Vec<String>,
}

/// Derive the ordered event list for a sprint.
///
/// Produces a start milestone, one leave event per distinct leave start
/// date (clipped to the sprint window), and an end milestone. Leaves
/// that fall entirely outside the sprint are dropped.
pub fn build_timeline(sprint: &Sprint) -> Vec<TimelineEvent> {
    let mut events = vec![TimelineEvent {
        date: sprint.start_date,
        kind: TimelineEventKind::Milestone,
        title: "Sprint start".to_string(),
        detail: format!(
            "{} begins with {} developers on the roster",
            sprint.sprint_name,
            sprint.developers.len()
        ),
        developers: Vec::new(),
    }];

    // Group leave windows by their first day inside the sprint. BTreeMap
    // keeps the dates ordered.
    let mut leaves: BTreeMap<NaiveDate, Vec<(String, NaiveDate)>> = BTreeMap::new();
    for dev in &sprint.developers {
        let Some((leave_start, leave_end)) = dev.leave_interval() else {
            continue;
        };
        if leave_end < sprint.start_date || leave_start > sprint.end_date {
            continue;
        }
        let first_day = leave_start.max(sprint.start_date);
        leaves
            .entry(first_day)
            .or_default()
            .push((dev.name.clone(), leave_end));
    }

    for (date, entries) in leaves {
        let names: Vec<String> = entries.iter().map(|(name, _)| name.clone()).collect();
        let last_day = entries
            .iter()
            .map(|&(_, end)| end)
            .max()
            .unwrap_or(date);
        let (title, detail) = if names.len() == 1 {
            (
                format!("{} on leave", names[0]),
                format!("Out through {}", last_day.format("%b %d")),
            )
        } else {
            (
                "Multiple leaves".to_string(),
                format!(
                    "{} developers out, last returning after {}",
                    names.len(),
                    last_day.format("%b %d")
                ),
            )
        };
        events.push(TimelineEvent {
            date,
            kind: TimelineEventKind::Leave,
            title,
            detail,
            developers: names,
        });
    }

    events.push(TimelineEvent {
        date: sprint.end_date,
        kind: TimelineEventKind::Milestone,
        title: "Sprint end".to_string(),
        detail: format!("{} completion", sprint.sprint_name),
        developers: Vec::new(),
    });

    // Stable sort keeps the start milestone ahead of leaves that begin
    // on day one, and the end milestone last on its date.
    events.sort_by_key(|event| event.date);
    events
}
