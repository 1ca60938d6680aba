//! Rule-based sprint recommendations
//!
//! Each rule looks at the aggregate metrics or the roster and either
//! fires a recommendation or stays quiet. Rules are pure functions of
//! their inputs and get re-evaluated on every reload.

use crate::metrics::AggregateMetrics;
use crate::models::DeveloperRecord;

/// Planned-vs-actual gap, in story points, that triggers a warning.
const VELOCITY_GAP_THRESHOLD: i64 = 10;

/// Bug impact percentage above which quality work dominated the sprint.
const BUG_IMPACT_THRESHOLD: f64 = 25.0;

/// Developers below this utilization percentage count as under-used.
const LOW_UTILIZATION_THRESHOLD: f64 = 60.0;

/// Capacity lost to leave, in story points, that flags backup planning.
const LEAVE_IMPACT_THRESHOLD: u32 = 8;

/// Inclusive team-utilization band considered well planned.
const OPTIMAL_UTILIZATION_RANGE: (f64, f64) = (75.0, 85.0);

/// Severity class of a recommendation, drives its accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationKind {
    Success,
    Info,
    Warning,
    Alert,
}

impl RecommendationKind {
    /// Single-character marker shown in front of the title.
    pub fn marker(&self) -> &'static str {
        match self {
            RecommendationKind::Success => "✓",
            RecommendationKind::Info => "•",
            RecommendationKind::Warning => "!",
            RecommendationKind::Alert => "✗",
        }
    }
}

/// Placement in the panel, highest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

/// One actionable insight derived from the sprint numbers
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub priority: Priority,
    pub title: String,
    pub detail: String,
}

/// Evergreen guidance rendered under the computed insights.
pub const PLANNING_TIPS: [&str; 4] = [
    "Plan for a 20% capacity buffer for production issues",
    "Consider the leave calendar when assigning critical work",
    "Monitor velocity trends over 3-4 sprints for better estimation",
    "Keep workload distribution balanced across team members",
];

/// Run every rule and return the recommendations that fired, highest
/// priority first.
pub fn generate_recommendations(
    metrics: &AggregateMetrics,
    developers: &[DeveloperRecord],
) -> Vec<Recommendation> {
    let mut out = Vec::new();

    let velocity_gap = metrics.velocity_gap();
    if velocity_gap > VELOCITY_GAP_THRESHOLD {
        out.push(Recommendation {
            kind: RecommendationKind::Warning,
            priority: Priority::High,
            title: "Velocity Gap Detected".to_string(),
            detail: format!(
                "{} SP gap between planned and actual velocity. Consider reducing \
                 story point estimates or improving sprint planning.",
                velocity_gap
            ),
        });
    }

    if metrics.bug_impact > BUG_IMPACT_THRESHOLD {
        out.push(Recommendation {
            kind: RecommendationKind::Alert,
            priority: Priority::High,
            title: "High Bug Impact".to_string(),
            detail: format!(
                "{:.0}% of completed effort went to bugs. Focus on quality \
                 improvements and preventive measures.",
                metrics.bug_impact
            ),
        });
    }

    let under_utilized = developers
        .iter()
        .filter(|d| d.utilization() < LOW_UTILIZATION_THRESHOLD)
        .count();
    if under_utilized > 0 {
        out.push(Recommendation {
            kind: RecommendationKind::Info,
            priority: Priority::Medium,
            title: "Capacity Optimization".to_string(),
            detail: format!(
                "{} developer(s) under {:.0}% utilization. Consider redistributing \
                 work or addressing blockers.",
                under_utilized, LOW_UTILIZATION_THRESHOLD
            ),
        });
    }

    let leave_impacted = developers
        .iter()
        .filter(|d| d.on_leave() && d.capacity_lost() > LEAVE_IMPACT_THRESHOLD)
        .count();
    if leave_impacted > 0 {
        out.push(Recommendation {
            kind: RecommendationKind::Info,
            priority: Priority::Medium,
            title: "Leave Planning".to_string(),
            detail: format!(
                "{} developer(s) lost significant capacity to leave. Plan backup \
                 coverage for future sprints.",
                leave_impacted
            ),
        });
    }

    let (optimal_low, optimal_high) = OPTIMAL_UTILIZATION_RANGE;
    if metrics.utilization_rate >= optimal_low && metrics.utilization_rate <= optimal_high {
        out.push(Recommendation {
            kind: RecommendationKind::Success,
            priority: Priority::Low,
            title: "Optimal Utilization".to_string(),
            detail: format!(
                "Team utilization sits in the {:.0}-{:.0}% sweet spot. Solid \
                 sprint planning.",
                optimal_low, optimal_high
            ),
        });
    }

    out.sort_by_key(|rec| rec.priority);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::aggregate_velocity_metrics;

    fn dev(total: u32, completed: u32, lost_to_leave: u32) -> DeveloperRecord {
        let on_leave = lost_to_leave > 0;
        DeveloperRecord {
            id: "1".to_string(),
            name: "Test Dev".to_string(),
            leave_start: on_leave.then(|| chrono::NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()),
            leave_end: on_leave.then(|| chrono::NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()),
            total_capacity: total,
            available_capacity: total - lost_to_leave,
            assigned_story_points: completed,
            completed_story_points: completed,
            bug_points: 0,
        }
    }

    fn metrics_for(planned: u32, actual: u32, bugs: u32, capacity: u32) -> AggregateMetrics {
        AggregateMetrics {
            planned_velocity: planned,
            actual_velocity: actual,
            effective_velocity: i64::from(actual) - i64::from(bugs),
            utilization_rate: if capacity == 0 {
                0.0
            } else {
                f64::from(actual) / f64::from(capacity) * 100.0
            },
            bug_impact: if actual == 0 {
                0.0
            } else {
                f64::from(bugs) / f64::from(actual) * 100.0
            },
            total_capacity: capacity,
            total_available_capacity: capacity,
            total_bug_points: bugs,
        }
    }

    fn titles(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_velocity_gap_fires_above_threshold() {
        // Gap of 11 fires, 10 does not.
        let recs = generate_recommendations(&metrics_for(111, 100, 0, 200), &[]);
        assert!(titles(&recs).contains(&"Velocity Gap Detected"));
        assert!(recs[0].detail.starts_with("11 SP gap"));

        let recs = generate_recommendations(&metrics_for(110, 100, 0, 200), &[]);
        assert!(!titles(&recs).contains(&"Velocity Gap Detected"));
    }

    #[test]
    fn test_bug_impact_fires_above_threshold() {
        // 26/100 fires, 25/100 sits exactly on the threshold and does not.
        let recs = generate_recommendations(&metrics_for(100, 100, 26, 200), &[]);
        assert!(titles(&recs).contains(&"High Bug Impact"));

        let recs = generate_recommendations(&metrics_for(100, 100, 25, 200), &[]);
        assert!(!titles(&recs).contains(&"High Bug Impact"));
    }

    #[test]
    fn test_under_utilized_developers_counted() {
        // 20/40 = 50% and 10/40 = 25% are both under 60%; 30/40 = 75% is not.
        let team = vec![dev(40, 20, 0), dev(40, 10, 0), dev(40, 30, 0)];
        let recs = generate_recommendations(&metrics_for(60, 60, 0, 120), &team);
        let capacity = recs
            .iter()
            .find(|r| r.title == "Capacity Optimization")
            .unwrap();
        assert!(capacity.detail.starts_with("2 developer(s)"));
    }

    #[test]
    fn test_leave_planning_requires_significant_loss() {
        // 8 points lost is not "significant", 9 is.
        let recs = generate_recommendations(&metrics_for(0, 0, 0, 0), &[dev(40, 30, 8)]);
        assert!(!titles(&recs).contains(&"Leave Planning"));

        let recs = generate_recommendations(&metrics_for(0, 0, 0, 0), &[dev(40, 30, 9)]);
        assert!(titles(&recs).contains(&"Leave Planning"));
    }

    #[test]
    fn test_optimal_utilization_band_inclusive() {
        for actual in [75, 80, 85] {
            let recs = generate_recommendations(&metrics_for(actual, actual, 0, 100), &[]);
            assert!(
                titles(&recs).contains(&"Optimal Utilization"),
                "expected at {}%",
                actual
            );
        }
        for actual in [74, 86] {
            let recs = generate_recommendations(&metrics_for(actual, actual, 0, 100), &[]);
            assert!(!titles(&recs).contains(&"Optimal Utilization"));
        }
    }

    #[test]
    fn test_recommendations_sorted_by_priority() {
        // Force every rule to fire at once.
        let team = vec![dev(40, 10, 9)];
        let mut metrics = metrics_for(120, 100, 30, 125);
        metrics.utilization_rate = 80.0;
        let recs = generate_recommendations(&metrics, &team);

        assert_eq!(recs.len(), 5);
        let priorities: Vec<Priority> = recs.iter().map(|r| r.priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort();
        assert_eq!(priorities, sorted);
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[4].priority, Priority::Low);
    }

    #[test]
    fn test_quiet_sprint_yields_no_recommendations() {
        // 70% utilization, no gap, low bug impact, nobody on leave.
        let team = vec![dev(40, 28, 0)];
        let metrics = aggregate_velocity_metrics(&team);
        let recs = generate_recommendations(&metrics, &team);
        assert!(recs.is_empty());
    }

    #[test]
    fn test_sample_sprint_recommendations() {
        let sprint = crate::models::Sprint::sample().unwrap();
        let metrics = aggregate_velocity_metrics(&sprint.developers);
        let recs = generate_recommendations(&metrics, &sprint.developers);
        let titles = titles(&recs);

        // Gap of 14 SP and three developers under 60% utilization.
        assert!(titles.contains(&"Velocity Gap Detected"));
        assert!(titles.contains(&"Capacity Optimization"));
        assert!(titles.contains(&"Leave Planning"));
        // 21.7% bug impact stays under the alert threshold.
        assert!(!titles.contains(&"High Bug Impact"));
        assert!(!titles.contains(&"Optimal Utilization"));
    }

    #[test]
    fn test_priority_labels() {
        assert_eq!(Priority::High.label(), "HIGH");
        assert_eq!(Priority::Medium.label(), "MEDIUM");
        assert_eq!(Priority::Low.label(), "LOW");
    }
}
