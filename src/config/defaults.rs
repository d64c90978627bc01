// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Transition**: Slide animation duration bounds
//! - **Autoplay**: Auto-advance interval bounds
//! - **Swipe**: Horizontal swipe threshold bounds
//! - **Viewport**: Carousel viewport size bounds

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Default slide transition duration (in milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 700;

/// Minimum slide transition duration (in milliseconds).
pub const MIN_TRANSITION_MS: u64 = 50;

/// Maximum slide transition duration (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = 5_000;

// ==========================================================================
// Autoplay Defaults
// ==========================================================================

/// Minimum auto-advance interval (in seconds).
pub const MIN_AUTOPLAY_SECS: u32 = 1;

/// Maximum auto-advance interval (in seconds).
pub const MAX_AUTOPLAY_SECS: u32 = 600;

// ==========================================================================
// Swipe Defaults
// ==========================================================================

/// Default swipe threshold: any nonzero horizontal delta counts.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 0.0;

/// Maximum swipe threshold (in logical pixels).
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;

// ==========================================================================
// Viewport Defaults
// ==========================================================================

/// Default viewport width (in logical pixels).
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 480.0;

/// Default viewport height (in logical pixels).
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 320.0;

/// Minimum viewport edge (in logical pixels).
pub const MIN_VIEWPORT_EDGE: f32 = 96.0;

/// Maximum viewport edge (in logical pixels).
pub const MAX_VIEWPORT_EDGE: f32 = 4_096.0;
