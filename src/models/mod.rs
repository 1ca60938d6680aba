//! Data models for the sprint TUI
//!
//! This module contains the core data structures:
//! - Sprint and developer records for loading sprint JSON files
//! - Timeline events derived from the sprint window and leaves
//! - Enums for state management

pub mod developer;
pub mod enums;
pub mod timeline;

// Re-exports for convenient access
pub use developer::{DeveloperRecord, Sprint};
pub use enums::{CapacityStatus, DashboardView, DeveloperSortMode};
pub use timeline::{build_timeline, TimelineEvent, TimelineEventKind};
