//! Enums used throughout the sprint TUI
//!
//! This module contains the enum types used for state management
//! and UI rendering.

/// Dashboard view selected via Tab or the number keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardView {
    #[default]
    Overview,   // Metric cards, velocity chart, capacity gauge, insights
    Developers, // Per-developer capacity cards
    Timeline,   // Sprint milestones and leave windows
}

impl DashboardView {
    pub const ALL: [DashboardView; 3] = [
        DashboardView::Overview,
        DashboardView::Developers,
        DashboardView::Timeline,
    ];

    /// Cycle to the next view (Tab key).
    pub fn next(&self) -> Self {
        match self {
            DashboardView::Overview => DashboardView::Developers,
            DashboardView::Developers => DashboardView::Timeline,
            DashboardView::Timeline => DashboardView::Overview,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardView::Overview => "Overview",
            DashboardView::Developers => "Developers",
            DashboardView::Timeline => "Timeline",
        }
    }

    /// Position in the tab bar.
    pub fn index(&self) -> usize {
        match self {
            DashboardView::Overview => 0,
            DashboardView::Developers => 1,
            DashboardView::Timeline => 2,
        }
    }
}

/// Sort mode for developer cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeveloperSortMode {
    #[default]
    Roster,      // Keep the order from the sprint file
    Utilization, // Highest utilization first
}

impl DeveloperSortMode {
    pub fn toggle(&self) -> Self {
        match self {
            DeveloperSortMode::Roster => DeveloperSortMode::Utilization,
            DeveloperSortMode::Utilization => DeveloperSortMode::Roster,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeveloperSortMode::Roster => "Roster",
            DeveloperSortMode::Utilization => "Utilization",
        }
    }
}

/// Utilization band for a developer or the whole team
///
/// Bands are inclusive of their upper bound: below 60% is Low, 60-80%
/// is Optimal, above 80% up to 95% is High, and everything beyond is
/// Overloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityStatus {
    Low,
    Optimal,
    High,
    Overloaded,
}

impl CapacityStatus {
    /// Short badge text for developer cards.
    pub fn label(&self) -> &'static str {
        match self {
            CapacityStatus::Low => "Low",
            CapacityStatus::Optimal => "Optimal",
            CapacityStatus::High => "High",
            CapacityStatus::Overloaded => "Overloaded",
        }
    }

    /// Longer description for the team gauge.
    pub fn description(&self) -> &'static str {
        match self {
            CapacityStatus::Low => "Under-utilized",
            CapacityStatus::Optimal => "Optimal",
            CapacityStatus::High => "High load",
            CapacityStatus::Overloaded => "Overloaded",
        }
    }
}
