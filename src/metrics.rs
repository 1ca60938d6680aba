//! Sprint metrics calculator
//!
//! Pure arithmetic over the roster. No I/O and no shared state; every
//! function takes its inputs by value or reference and returns a fresh
//! result, so callers can invoke them from anywhere.

use chrono::NaiveDate;

use crate::models::{CapacityStatus, DeveloperRecord};

/// Nominal working days in a two-week sprint.
pub const NOMINAL_WORKING_DAYS: f64 = 10.0;

/// Story points one developer absorbs per working day.
pub const POINTS_PER_DAY: f64 = 4.0;

/// Fraction of capacity held back for bug fixing and unplanned work.
pub const DEFAULT_BUG_BUFFER: f64 = 0.20;

/// Team-level velocity and capacity figures
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregateMetrics {
    /// Sum of assigned story points.
    pub planned_velocity: u32,
    /// Sum of completed story points.
    pub actual_velocity: u32,
    /// Completed minus bug points. Signed: a sprint that was all bug
    /// work and rework can land below zero.
    pub effective_velocity: i64,
    /// Completed as a percentage of total capacity.
    pub utilization_rate: f64,
    /// Bug points as a percentage of completed points.
    pub bug_impact: f64,
    /// Sum of unadjusted capacity.
    pub total_capacity: u32,
    /// Sum of leave-adjusted capacity.
    pub total_available_capacity: u32,
    /// Sum of bug points.
    pub total_bug_points: u32,
}

impl AggregateMetrics {
    /// Effective velocity as a percentage of the planned commitment.
    pub fn success_rate(&self) -> f64 {
        if self.planned_velocity == 0 {
            return 0.0;
        }
        self.effective_velocity as f64 / f64::from(self.planned_velocity) * 100.0
    }

    /// Gap between what was planned and what was completed, in story
    /// points. Positive when the team under-delivered.
    pub fn velocity_gap(&self) -> i64 {
        i64::from(self.planned_velocity) - i64::from(self.actual_velocity)
    }
}

/// Estimate working days left in a sprint after a leave window.
///
/// The overlap between leave and sprint is converted from calendar days
/// to working days at five per seven, capped at the nominal sprint
/// length. A missing or non-overlapping leave costs nothing. This is a
/// planning heuristic, not a business-day calendar walk, so weekends
/// inside the overlap are approximated rather than counted.
pub fn available_days_after_leave(
    sprint_start: NaiveDate,
    sprint_end: NaiveDate,
    leave_start: Option<NaiveDate>,
    leave_end: Option<NaiveDate>,
) -> f64 {
    let (Some(leave_start), Some(leave_end)) = (leave_start, leave_end) else {
        return NOMINAL_WORKING_DAYS;
    };

    let overlap_start = sprint_start.max(leave_start);
    let overlap_end = sprint_end.min(leave_end);
    if overlap_start >= overlap_end {
        return NOMINAL_WORKING_DAYS;
    }

    let overlap_days = (overlap_end - overlap_start).num_days() as f64;
    let working_days_lost = (overlap_days * 5.0 / 7.0).min(NOMINAL_WORKING_DAYS);
    (NOMINAL_WORKING_DAYS - working_days_lost).max(0.0)
}

/// Story points a developer can realistically deliver.
///
/// Scales the available days to points and floors after removing the
/// bug buffer, so the result never promises a fractional point.
pub fn effective_capacity(available_days: f64, bug_buffer: f64) -> u32 {
    let total_points = available_days * POINTS_PER_DAY;
    (total_points * (1.0 - bug_buffer)).floor() as u32
}

/// Fold the whole roster into one set of aggregate metrics.
///
/// An empty roster yields all zeros; the percentage fields guard their
/// denominators so the result is always finite.
pub fn aggregate_velocity_metrics(developers: &[DeveloperRecord]) -> AggregateMetrics {
    let planned: u32 = developers.iter().map(|d| d.assigned_story_points).sum();
    let actual: u32 = developers.iter().map(|d| d.completed_story_points).sum();
    let bugs: u32 = developers.iter().map(|d| d.bug_points).sum();
    let capacity: u32 = developers.iter().map(|d| d.total_capacity).sum();
    let available: u32 = developers.iter().map(|d| d.available_capacity).sum();

    let utilization_rate = if capacity == 0 {
        0.0
    } else {
        f64::from(actual) / f64::from(capacity) * 100.0
    };
    let bug_impact = if actual == 0 {
        0.0
    } else {
        f64::from(bugs) / f64::from(actual) * 100.0
    };

    AggregateMetrics {
        planned_velocity: planned,
        actual_velocity: actual,
        effective_velocity: i64::from(actual) - i64::from(bugs),
        utilization_rate,
        bug_impact,
        total_capacity: capacity,
        total_available_capacity: available,
        total_bug_points: bugs,
    }
}

/// Classify a utilization percentage into a capacity band.
pub fn capacity_status(utilization_percent: f64) -> CapacityStatus {
    if utilization_percent < 60.0 {
        CapacityStatus::Low
    } else if utilization_percent <= 80.0 {
        CapacityStatus::Optimal
    } else if utilization_percent <= 95.0 {
        CapacityStatus::High
    } else {
        CapacityStatus::Overloaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dev(
        total: u32,
        available: u32,
        assigned: u32,
        completed: u32,
        bugs: u32,
    ) -> DeveloperRecord {
        DeveloperRecord {
            id: "1".to_string(),
            name: "Test Dev".to_string(),
            leave_start: None,
            leave_end: None,
            total_capacity: total,
            available_capacity: available,
            assigned_story_points: assigned,
            completed_story_points: completed,
            bug_points: bugs,
        }
    }

    const SPRINT_START: (i32, u32, u32) = (2024, 5, 7);
    const SPRINT_END: (i32, u32, u32) = (2024, 6, 10);

    fn days_with_leave(leave: Option<(NaiveDate, NaiveDate)>) -> f64 {
        let (sy, sm, sd) = SPRINT_START;
        let (ey, em, ed) = SPRINT_END;
        available_days_after_leave(
            date(sy, sm, sd),
            date(ey, em, ed),
            leave.map(|(start, _)| start),
            leave.map(|(_, end)| end),
        )
    }

    #[test]
    fn test_available_days_no_leave() {
        assert_eq!(days_with_leave(None), NOMINAL_WORKING_DAYS);
    }

    #[test]
    fn test_available_days_leave_outside_sprint() {
        let days = days_with_leave(Some((date(2024, 4, 1), date(2024, 4, 20))));
        assert_eq!(days, NOMINAL_WORKING_DAYS);
    }

    #[test]
    fn test_available_days_zero_length_overlap() {
        // Overlap start equals overlap end, so no day is lost.
        let days = days_with_leave(Some((date(2024, 5, 10), date(2024, 5, 10))));
        assert_eq!(days, NOMINAL_WORKING_DAYS);
    }

    #[test]
    fn test_available_days_partial_overlap() {
        // Two calendar days overlap: 2 * 5/7 working days lost.
        let days = days_with_leave(Some((date(2024, 5, 7), date(2024, 5, 9))));
        let expected = NOMINAL_WORKING_DAYS - 2.0 * 5.0 / 7.0;
        assert!((days - expected).abs() < 1e-9);
    }

    #[test]
    fn test_available_days_long_leave_floors_at_zero() {
        // 23 calendar days of overlap converts to more than ten working
        // days, which caps the loss and floors the result at zero.
        let days = days_with_leave(Some((date(2024, 5, 8), date(2024, 5, 31))));
        assert_eq!(days, 0.0);
    }

    #[test]
    fn test_available_days_monotonic_in_leave_length() {
        let start = date(2024, 5, 8);
        let mut previous = NOMINAL_WORKING_DAYS;
        for extra in 0..=40 {
            let end = start + chrono::Duration::days(extra);
            let days = days_with_leave(Some((start, end)));
            assert!(days <= previous + 1e-9);
            assert!(days >= 0.0);
            previous = days;
        }
    }

    #[test]
    fn test_effective_capacity_default_buffer() {
        // 10 days * 4 points * 0.8 = 32
        assert_eq!(effective_capacity(10.0, DEFAULT_BUG_BUFFER), 32);
    }

    #[test]
    fn test_effective_capacity_floors() {
        // 8.571 days * 4 * 0.8 = 27.43, floored to 27
        let days = NOMINAL_WORKING_DAYS - 10.0 / 7.0;
        assert_eq!(effective_capacity(days, DEFAULT_BUG_BUFFER), 27);
    }

    #[test]
    fn test_effective_capacity_no_days() {
        assert_eq!(effective_capacity(0.0, DEFAULT_BUG_BUFFER), 0);
    }

    #[test]
    fn test_effective_capacity_no_buffer() {
        assert_eq!(effective_capacity(10.0, 0.0), 40);
    }

    #[test]
    fn test_aggregate_sums() {
        let team = vec![dev(40, 32, 28, 24, 6), dev(40, 20, 18, 16, 4)];
        let metrics = aggregate_velocity_metrics(&team);

        assert_eq!(metrics.planned_velocity, 46);
        assert_eq!(metrics.actual_velocity, 40);
        assert_eq!(metrics.effective_velocity, 30);
        assert_eq!(metrics.total_capacity, 80);
        assert_eq!(metrics.total_available_capacity, 52);
        assert_eq!(metrics.total_bug_points, 10);
        assert!((metrics.utilization_rate - 50.0).abs() < 1e-9);
        assert!((metrics.bug_impact - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_empty_roster_is_all_zero() {
        assert_eq!(aggregate_velocity_metrics(&[]), AggregateMetrics::default());
    }

    #[test]
    fn test_aggregate_zero_capacity_guards_utilization() {
        let metrics = aggregate_velocity_metrics(&[dev(0, 0, 0, 5, 0)]);
        assert_eq!(metrics.utilization_rate, 0.0);
        assert!(metrics.utilization_rate.is_finite());
    }

    #[test]
    fn test_aggregate_zero_completed_guards_bug_impact() {
        let metrics = aggregate_velocity_metrics(&[dev(40, 40, 10, 0, 3)]);
        assert_eq!(metrics.bug_impact, 0.0);
        assert_eq!(metrics.effective_velocity, -3);
    }

    #[test]
    fn test_aggregate_sample_sprint_figures() {
        let sprint = crate::models::Sprint::sample().unwrap();
        let metrics = aggregate_velocity_metrics(&sprint.developers);

        assert_eq!(metrics.planned_velocity, 166);
        assert_eq!(metrics.actual_velocity, 152);
        assert_eq!(metrics.effective_velocity, 119);
        assert_eq!(metrics.total_capacity, 280);
        assert_eq!(metrics.total_available_capacity, 188);
        assert_eq!(metrics.total_bug_points, 33);
        assert!((metrics.utilization_rate - 54.285_714).abs() < 0.001);
        assert!((metrics.bug_impact - 21.710_526).abs() < 0.001);
        assert_eq!(metrics.velocity_gap(), 14);
    }

    #[test]
    fn test_success_rate() {
        let metrics = aggregate_velocity_metrics(&[dev(40, 40, 20, 15, 5)]);
        assert!((metrics.success_rate() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_success_rate_no_plan() {
        let metrics = aggregate_velocity_metrics(&[dev(40, 40, 0, 0, 0)]);
        assert_eq!(metrics.success_rate(), 0.0);
    }

    #[test]
    fn test_capacity_status_bands() {
        assert_eq!(capacity_status(0.0), CapacityStatus::Low);
        assert_eq!(capacity_status(59.0), CapacityStatus::Low);
        assert_eq!(capacity_status(60.0), CapacityStatus::Optimal);
        assert_eq!(capacity_status(80.0), CapacityStatus::Optimal);
        assert_eq!(capacity_status(81.0), CapacityStatus::High);
        assert_eq!(capacity_status(95.0), CapacityStatus::High);
        assert_eq!(capacity_status(96.0), CapacityStatus::Overloaded);
        assert_eq!(capacity_status(150.0), CapacityStatus::Overloaded);
    }
}
