//! UI module for sprint-tui
//!
//! This module contains UI rendering functions for the TUI interface:
//! the dashboard layout plus the cards, charts, timeline, and
//! recommendations panels it is built from.

mod cards;
mod chart;
mod dashboard;
mod developers;
mod helpers;
mod recommendations;
mod timeline;

pub use dashboard::render_dashboard;
