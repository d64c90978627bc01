// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture sub-component.
//!
//! Tracks one horizontal pointer drag from press to release and classifies
//! it by the sign of the latest horizontal displacement. A rightward swipe
//! asks for the previous image, a leftward swipe for the next one.

use super::navigation::Step;
use crate::domain::ui::SwipeThreshold;

/// Horizontal swipe classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Gesture phase.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Tracking {
        start_x: f32,
        classification: Option<SwipeDirection>,
    },
}

/// Swipe sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    phase: Phase,
    threshold: SwipeThreshold,
}

/// Messages for the swipe sub-component. Positions are horizontal, relative
/// to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Start { x: f32 },
    Move { x: f32 },
    End,
    /// Pointer lost or left the viewport.
    Cancel,
}

/// Effects produced by a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Navigate(Step),
}

impl State {
    #[must_use]
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            phase: Phase::Idle,
            threshold,
        }
    }

    /// Handle a swipe message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Start { x } => {
                self.phase = Phase::Tracking {
                    start_x: x,
                    classification: None,
                };
                Effect::None
            }
            Message::Move { x } => {
                if let Phase::Tracking {
                    start_x,
                    classification,
                } = &mut self.phase
                {
                    let delta = x - *start_x;
                    *classification = if !self.threshold.is_exceeded_by(delta) {
                        None
                    } else if delta > 0.0 {
                        Some(SwipeDirection::Right)
                    } else {
                        Some(SwipeDirection::Left)
                    };
                }
                Effect::None
            }
            Message::End => {
                let phase = std::mem::take(&mut self.phase);
                match phase {
                    Phase::Tracking {
                        classification: Some(SwipeDirection::Right),
                        ..
                    } => Effect::Navigate(Step::Backward),
                    Phase::Tracking {
                        classification: Some(SwipeDirection::Left),
                        ..
                    } => Effect::Navigate(Step::Forward),
                    _ => Effect::None,
                }
            }
            Message::Cancel => {
                self.phase = Phase::Idle;
                Effect::None
            }
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        matches!(self.phase, Phase::Tracking { .. })
    }

    /// Current classification of the gesture in progress.
    #[must_use]
    pub fn classification(&self) -> Option<SwipeDirection> {
        match self.phase {
            Phase::Tracking { classification, .. } => classification,
            Phase::Idle => None,
        }
    }
}
