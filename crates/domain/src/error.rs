//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.

use crate::trigger::Scene;

/// Top-level error for quick action domain operations.
#[derive(Debug, thiserror::Error)]
pub enum QuickActionError {
    #[error("validation error")]
    Validation(#[from] ValidationError),
}

/// A shape invariant of a [`QuickAction`](crate::quick_action::QuickAction) does not hold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("id must not be empty")]
    EmptyId,

    #[error("name must not be empty")]
    EmptyName,

    #[error("category is required")]
    MissingCategory,

    #[error("action is required")]
    MissingAction,

    #[error("app launch requires a package name")]
    MissingPackageName,

    #[error("deep link requires a uri")]
    MissingUri,

    #[error("shortcut id must not be empty when present")]
    EmptyShortcut,

    #[error("invalid clock time {value:?}, expected HH:MM")]
    InvalidClockTime { value: String },

    #[error("time range {start}..{end} does not start before it ends")]
    InvertedTimeRange { start: String, end: String },

    #[error("scene {0} listed more than once")]
    DuplicateScene(Scene),
}
