//! Application state management for the sprint TUI
//!
//! Holds the loaded sprint plus everything derived from it, along with
//! the navigation state for the three views. Derived data is recomputed
//! in one place so the views never disagree with the roster.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::metrics::{AggregateMetrics, aggregate_velocity_metrics};
use crate::models::{DashboardView, DeveloperSortMode, Sprint, TimelineEvent, build_timeline};
use crate::recommend::{Recommendation, generate_recommendations};

/// How often the pulse animation advances.
const ANIMATION_INTERVAL: Duration = Duration::from_millis(120);

/// Application state
pub struct App {
    pub sprint: Sprint,
    pub metrics: AggregateMetrics,
    pub recommendations: Vec<Recommendation>,
    pub timeline: Vec<TimelineEvent>,
    // Navigation state
    pub view: DashboardView,
    // Currently selected developer (position in display order)
    pub selected_dev: usize,
    // First visible developer card (position in display order)
    pub dev_scroll: usize,
    // Whether the selected developer card shows derived metrics
    pub dev_expanded: bool,
    pub dev_sort: DeveloperSortMode,
    // Timeline scroll offset (whole events)
    pub timeline_scroll: usize,
    // Animation state
    pub animation_tick: u64,
    pub last_animation_update: Instant,
    // Live reload plumbing
    pub sprint_path: Option<PathBuf>,
    pub sprint_needs_reload: Arc<Mutex<bool>>,
}

impl App {
    pub fn new(
        sprint: Sprint,
        sprint_path: Option<PathBuf>,
        sprint_needs_reload: Arc<Mutex<bool>>,
    ) -> Self {
        let metrics = aggregate_velocity_metrics(&sprint.developers);
        let recommendations = generate_recommendations(&metrics, &sprint.developers);
        let timeline = build_timeline(&sprint);

        Self {
            sprint,
            metrics,
            recommendations,
            timeline,
            view: DashboardView::default(),
            selected_dev: 0,
            dev_scroll: 0,
            dev_expanded: false,
            dev_sort: DeveloperSortMode::default(),
            timeline_scroll: 0,
            animation_tick: 0,
            last_animation_update: Instant::now(),
            sprint_path,
            sprint_needs_reload,
        }
    }

    /// Developer indices in display order under the current sort mode.
    pub fn developer_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.sprint.developers.len()).collect();
        if self.dev_sort == DeveloperSortMode::Utilization {
            order.sort_by(|&a, &b| {
                let util_a = self.sprint.developers[a].utilization();
                let util_b = self.sprint.developers[b].utilization();
                util_b
                    .partial_cmp(&util_a)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        order
    }

    pub fn cycle_view(&mut self) {
        self.view = self.view.next();
    }

    pub fn set_view(&mut self, view: DashboardView) {
        self.view = view;
    }

    pub fn select_next_developer(&mut self) {
        if self.selected_dev + 1 < self.sprint.developers.len() {
            self.selected_dev += 1;
        }
    }

    pub fn select_previous_developer(&mut self) {
        self.selected_dev = self.selected_dev.saturating_sub(1);
    }

    pub fn toggle_developer_details(&mut self) {
        self.dev_expanded = !self.dev_expanded;
    }

    /// Flip the sort mode. The selection stays at its screen position,
    /// which may now be a different developer.
    pub fn toggle_sort_mode(&mut self) {
        self.dev_sort = self.dev_sort.toggle();
    }

    pub fn scroll_timeline_down(&mut self) {
        if self.timeline_scroll + 1 < self.timeline.len() {
            self.timeline_scroll += 1;
        }
    }

    pub fn scroll_timeline_up(&mut self) {
        self.timeline_scroll = self.timeline_scroll.saturating_sub(1);
    }

    /// Advance the pulse tick when enough time has passed.
    pub fn update_animation(&mut self) {
        if self.last_animation_update.elapsed() >= ANIMATION_INTERVAL {
            self.animation_tick = self.animation_tick.wrapping_add(1);
            self.last_animation_update = Instant::now();
        }
    }

    /// Ask for a reload on the next tick (bound to the `r` key).
    pub fn request_reload(&self) {
        if let Ok(mut flag) = self.sprint_needs_reload.lock() {
            *flag = true;
        }
    }

    /// Reload the sprint from disk if flagged
    ///
    /// A file that fails to parse or validate leaves the current sprint
    /// in place; a half-written save must not blank the dashboard.
    pub fn reload_sprint_if_needed(&mut self) {
        let needs_reload = {
            let Ok(mut flag) = self.sprint_needs_reload.lock() else {
                return;
            };
            if *flag {
                *flag = false;
                true
            } else {
                false
            }
        };
        if !needs_reload {
            return;
        }

        let Some(path) = self.sprint_path.clone() else {
            return;
        };
        if let Ok(sprint) = Sprint::load(&path) {
            if sprint.validate().is_ok() {
                self.sprint = sprint;
                self.refresh_derived_state();
            }
        }
    }

    /// Recompute everything that hangs off the roster and clamp the
    /// navigation state to the new bounds.
    fn refresh_derived_state(&mut self) {
        self.metrics = aggregate_velocity_metrics(&self.sprint.developers);
        self.recommendations = generate_recommendations(&self.metrics, &self.sprint.developers);
        self.timeline = build_timeline(&self.sprint);

        let dev_count = self.sprint.developers.len();
        if self.selected_dev >= dev_count {
            self.selected_dev = dev_count.saturating_sub(1);
        }
        self.dev_scroll = self.dev_scroll.min(self.selected_dev);
        if self.timeline_scroll >= self.timeline.len() {
            self.timeline_scroll = self.timeline.len().saturating_sub(1);
        }
    }
}
