// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for carousel settings,
//! ensuring they are always within valid ranges.

use crate::config::defaults::{
    DEFAULT_SWIPE_THRESHOLD_PX, DEFAULT_TRANSITION_MS, DEFAULT_VIEWPORT_HEIGHT,
    DEFAULT_VIEWPORT_WIDTH, MAX_AUTOPLAY_SECS, MAX_SWIPE_THRESHOLD_PX, MAX_TRANSITION_MS,
    MAX_VIEWPORT_EDGE, MIN_AUTOPLAY_SECS, MIN_TRANSITION_MS, MIN_VIEWPORT_EDGE,
};
use std::time::Duration;

// =============================================================================
// TransitionDuration
// =============================================================================

/// Slide transition duration, guaranteed to be within 50 ms – 5 s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDuration(Duration);

impl TransitionDuration {
    /// Creates a new duration, clamping milliseconds to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(
            millis.clamp(MIN_TRANSITION_MS, MAX_TRANSITION_MS),
        ))
    }

    /// Returns the wrapped duration.
    #[must_use]
    pub fn value(self) -> Duration {
        self.0
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self(Duration::from_millis(DEFAULT_TRANSITION_MS))
    }
}

// =============================================================================
// AutoplayInterval
// =============================================================================

/// Auto-advance interval, guaranteed to be within 1 s – 10 min.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayInterval(u32);

impl AutoplayInterval {
    /// Creates a new interval, clamping seconds to the valid range.
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(MIN_AUTOPLAY_SECS, MAX_AUTOPLAY_SECS))
    }

    /// Returns the interval in seconds.
    #[must_use]
    pub fn secs(self) -> u32 {
        self.0
    }

    /// Returns the interval as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Minimum horizontal travel (logical pixels) before a swipe is classified.
///
/// Zero means any nonzero delta counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping to `0.0..=400.0`. NaN becomes zero.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_nan() {
            return Self(0.0);
        }
        Self(px.clamp(0.0, MAX_SWIPE_THRESHOLD_PX))
    }

    /// Returns the threshold in logical pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether `delta` travels past the threshold.
    #[must_use]
    pub fn is_exceeded_by(self, delta: f32) -> bool {
        delta.abs() > self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

// =============================================================================
// ViewportSize
// =============================================================================

/// Carousel viewport size in logical pixels, each edge within 96 – 4096.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    width: f32,
    height: f32,
}

impl ViewportSize {
    /// Creates a new viewport size, clamping both edges.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: clamp_edge(width, DEFAULT_VIEWPORT_WIDTH),
            height: clamp_edge(height, DEFAULT_VIEWPORT_HEIGHT),
        }
    }

    #[must_use]
    pub fn width(self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> f32 {
        self.height
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

fn clamp_edge(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(MIN_VIEWPORT_EDGE, MAX_VIEWPORT_EDGE)
    } else {
        fallback
    }
}
