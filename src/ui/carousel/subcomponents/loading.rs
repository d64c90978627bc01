// SPDX-License-Identifier: MPL-2.0
//! Loading state sub-component with animated spinner.
//!
//! Every image starts pending. Completion marks the index loaded for good;
//! later events for the same index never return it to pending.

use crate::error::Error;
use crate::media::ImageData;
use std::collections::{BTreeMap, BTreeSet};

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// Load status of one image.
#[derive(Debug, Clone, Copy)]
pub enum LoadStatus<'a> {
    Pending,
    Loaded(&'a ImageData),
    Failed(&'a Error),
}

/// Loading state for the carousel images.
#[derive(Debug, Clone, Default)]
pub struct State {
    len: usize,
    /// Indices whose load completed.
    loaded: BTreeSet<usize>,
    images: BTreeMap<usize, ImageData>,
    failed: BTreeMap<usize, Error>,
    /// Current spinner rotation angle in radians.
    spinner_rotation: f32,
}

/// Messages for the loading sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    Loaded { index: usize, image: ImageData },
    Failed { index: usize, error: Error },
    /// Animate the spinner.
    SpinnerTick,
}

/// Effects produced by the loading state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The event referred to an index outside the image list.
    Ignored,
}

impl State {
    /// Creates loading state with every one of `len` images pending.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }

    /// Handle a loading message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Loaded { index, image } => {
                if index >= self.len {
                    tracing::warn!(index, len = self.len, "load event for unknown image");
                    return Effect::Ignored;
                }
                self.failed.remove(&index);
                self.loaded.insert(index);
                self.images.insert(index, image);
                Effect::None
            }
            Message::Failed { index, error } => {
                if index >= self.len {
                    tracing::warn!(index, len = self.len, "error event for unknown image");
                    return Effect::Ignored;
                }
                if self.loaded.contains(&index) {
                    return Effect::None;
                }
                self.failed.insert(index, error);
                Effect::None
            }
            Message::SpinnerTick => {
                self.spinner_rotation += SPINNER_SPEED;
                if self.spinner_rotation > std::f32::consts::TAU {
                    self.spinner_rotation -= std::f32::consts::TAU;
                }
                Effect::None
            }
        }
    }

    /// Status of the image at `index`.
    #[must_use]
    pub fn status(&self, index: usize) -> LoadStatus<'_> {
        if let Some(image) = self.images.get(&index) {
            LoadStatus::Loaded(image)
        } else if let Some(error) = self.failed.get(&index) {
            LoadStatus::Failed(error)
        } else {
            LoadStatus::Pending
        }
    }

    /// Decoded image at `index`, if loaded.
    #[must_use]
    pub fn image(&self, index: usize) -> Option<&ImageData> {
        self.images.get(&index)
    }

    #[must_use]
    pub fn is_loaded(&self, index: usize) -> bool {
        self.loaded.contains(&index)
    }

    #[must_use]
    pub fn is_pending(&self, index: usize) -> bool {
        index < self.len && !self.loaded.contains(&index) && !self.failed.contains_key(&index)
    }

    /// Indices whose load has completed.
    #[must_use]
    pub fn loaded_set(&self) -> &BTreeSet<usize> {
        &self.loaded
    }

    /// Get the current spinner rotation angle in radians.
    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn all_images_start_pending() {
        let state = State::new(3);
        assert!((0..3).all(|i| state.is_pending(i)));
        assert!(matches!(state.status(1), LoadStatus::Pending));
        assert!(state.loaded_set().is_empty());
    }

    #[test]
    fn loaded_set_only_grows() {
        let mut state = State::new(3);
        state.handle(Message::Loaded {
            index: 2,
            image: pixel(),
        });
        state.handle(Message::Failed {
            index: 2,
            error: Error::Decode("late".into()),
        });
        state.handle(Message::Loaded {
            index: 2,
            image: pixel(),
        });

        assert!(state.is_loaded(2));
        assert!(matches!(state.status(2), LoadStatus::Loaded(_)));
        assert_eq!(state.loaded_set().iter().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn out_of_range_events_are_ignored() {
        let mut state = State::new(2);
        let effect = state.handle(Message::Loaded {
            index: 2,
            image: pixel(),
        });
        assert_eq!(effect, Effect::Ignored);
        assert!(state.loaded_set().is_empty());
        assert!(!state.is_pending(2));
    }

    #[test]
    fn failure_is_reported_per_image() {
        let mut state = State::new(2);
        state.handle(Message::Failed {
            index: 0,
            error: Error::Io("missing".into()),
        });
        assert!(matches!(state.status(0), LoadStatus::Failed(Error::Io(_))));
        assert!(!state.is_pending(0));
        assert!(state.is_pending(1));
        assert!(!state.is_loaded(0));
    }

    #[test]
    fn spinner_tick_advances_rotation() {
        let mut state = State::new(1);
        let initial = state.spinner_rotation();
        state.handle(Message::SpinnerTick);
        assert!(state.spinner_rotation() > initial);
    }
}
