// SPDX-License-Identifier: MPL-2.0
//! Navigation sub-component: current index, transition direction and the
//! overlap guard for requests arriving mid-slide.

use crate::config::JumpMode;

/// A single navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Advance to the next image.
    Forward,
    /// Go back to the previous image.
    Backward,
}

/// Direction of the most recent transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// No navigation has happened yet.
    #[default]
    None,
    Forward,
    Backward,
}

impl From<Step> for Direction {
    fn from(step: Step) -> Self {
        match step {
            Step::Forward => Direction::Forward,
            Step::Backward => Direction::Backward,
        }
    }
}

/// Request held back while a slide is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    Step(Step),
    JumpTo(usize),
}

/// Navigation sub-component state.
#[derive(Debug, Clone)]
pub struct State {
    index: usize,
    len: usize,
    direction: Direction,
    jump_mode: JumpMode,
    sliding: bool,
    pending: Option<Pending>,
}

/// Messages for the navigation sub-component.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Previous/next control, keyboard or swipe.
    Step(Step),
    /// Indicator dot click.
    JumpTo(usize),
    /// The strip finished its slide animation.
    TransitionFinished,
}

/// Effects produced by navigation changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Start a slide. `previous` is the direction before this step.
    Slide { step: Step, previous: Direction },
    /// A slide is in flight; the request was stored as the pending one.
    Deferred,
}

impl State {
    /// Creates navigation state for `len` images starting at index 0.
    #[must_use]
    pub fn new(len: usize, jump_mode: JumpMode) -> Self {
        Self {
            index: 0,
            len,
            direction: Direction::None,
            jump_mode,
            sliding: false,
            pending: None,
        }
    }

    /// Handle a navigation message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        if self.len <= 1 {
            return Effect::None;
        }

        match msg {
            Message::Step(step) => {
                if self.sliding {
                    self.defer(Pending::Step(step))
                } else {
                    self.apply(step)
                }
            }
            Message::JumpTo(target) => {
                if target >= self.len {
                    tracing::debug!(target, len = self.len, "ignoring out-of-range jump");
                    return Effect::None;
                }
                match self.jump_mode {
                    // One step toward the target, compared against the logical index.
                    JumpMode::Step => match self.step_toward(target) {
                        Some(step) if self.sliding => self.defer(Pending::Step(step)),
                        Some(step) => self.apply(step),
                        None => Effect::None,
                    },
                    JumpMode::Direct => {
                        if self.sliding {
                            self.defer(Pending::JumpTo(target))
                        } else {
                            self.continue_jump(target)
                        }
                    }
                }
            }
            Message::TransitionFinished => {
                if !self.sliding {
                    return Effect::None;
                }
                self.sliding = false;

                match self.pending.take() {
                    Some(Pending::Step(step)) => self.apply(step),
                    Some(Pending::JumpTo(target)) => self.continue_jump(target),
                    None => Effect::None,
                }
            }
        }
    }

    fn defer(&mut self, pending: Pending) -> Effect {
        if let Some(replaced) = self.pending.replace(pending) {
            tracing::debug!(?replaced, ?pending, "replacing pending navigation");
        }
        Effect::Deferred
    }

    fn continue_jump(&mut self, target: usize) -> Effect {
        let Some(step) = self.step_toward(target) else {
            return Effect::None;
        };
        let effect = self.apply(step);
        if self.index != target {
            self.pending = Some(Pending::JumpTo(target));
        }
        effect
    }

    fn step_toward(&self, target: usize) -> Option<Step> {
        match target.cmp(&self.index) {
            std::cmp::Ordering::Greater => Some(Step::Forward),
            std::cmp::Ordering::Less => Some(Step::Backward),
            std::cmp::Ordering::Equal => None,
        }
    }

    fn apply(&mut self, step: Step) -> Effect {
        let previous = self.direction;
        self.direction = step.into();
        self.index = match step {
            Step::Forward => (self.index + 1) % self.len,
            Step::Backward => (self.index + self.len - 1) % self.len,
        };
        self.sliding = true;
        tracing::debug!(?step, index = self.index, "navigating");
        Effect::Slide { step, previous }
    }

    /// Current logical index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Direction of the most recent transition.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether a slide is currently in flight.
    #[must_use]
    pub fn is_sliding(&self) -> bool {
        self.sliding
    }

    /// Request waiting for the current slide to end.
    #[must_use]
    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }
}
