// SPDX-License-Identifier: MPL-2.0
//! Strip sub-component: the horizontal row of slides and its slide animation.
//!
//! The strip keeps a rotation of every image index. At rest the visible slot
//! is either the first element (start alignment) or the last one (end
//! alignment). A forward slide translates the strip one slot left, a backward
//! slide one slot right. When the animation completes the edge element is
//! rotated to the other end and the translation snaps back to neutral
//! without animating, so the same image stays on screen.

use super::navigation::Step;
use crate::domain::ui::TransitionDuration;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Which end of the rotation is inside the viewport at rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Start,
    End,
}

/// Strip translation target, in whole slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Translate {
    #[default]
    Neutral,
    /// One slot toward the left (forward slide).
    Left,
    /// One slot toward the right (backward slide).
    Right,
}

impl Translate {
    fn slots(self) -> f32 {
        match self {
            Translate::Neutral => 0.0,
            Translate::Left => -1.0,
            Translate::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    step: Step,
    started_at: Instant,
    duration: Duration,
}

/// A slide positioned for painting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedSlide {
    /// Image index shown in this slot.
    pub index: usize,
    /// Horizontal position in slot widths; 0.0 fills the viewport exactly.
    pub offset: f32,
}

/// Strip state.
#[derive(Debug, Clone)]
pub struct State {
    order: VecDeque<usize>,
    alignment: Alignment,
    translate: Translate,
    transition: Option<Transition>,
    duration: TransitionDuration,
}

impl State {
    /// Creates a strip for `len` images in natural order.
    #[must_use]
    pub fn new(len: usize, duration: TransitionDuration) -> Self {
        Self {
            order: (0..len).collect(),
            alignment: Alignment::Start,
            translate: Translate::Neutral,
            transition: None,
            duration,
        }
    }

    /// Starts an animated slide for `step`.
    ///
    /// A slide still in flight is completed instantly first.
    pub fn begin(&mut self, step: Step, now: Instant) {
        if self.order.len() <= 1 {
            return;
        }
        if self.transition.is_some() {
            tracing::debug!("snapping unfinished slide");
            self.finish();
        }

        match step {
            Step::Forward => {
                if self.alignment == Alignment::End {
                    self.order.rotate_right(1);
                    self.alignment = Alignment::Start;
                }
                self.translate = Translate::Left;
            }
            Step::Backward => {
                if self.alignment == Alignment::Start {
                    self.order.rotate_left(1);
                    self.alignment = Alignment::End;
                }
                self.translate = Translate::Right;
            }
        }

        self.transition = Some(Transition {
            step,
            started_at: now,
            duration: self.duration.value(),
        });
    }

    /// Whether the running slide has reached its end at `now`.
    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.transition
            .is_some_and(|t| now.saturating_duration_since(t.started_at) >= t.duration)
    }

    /// Ends the running slide: rotates the edge element and resets the
    /// translation without animation. Returns the finished step.
    pub fn finish(&mut self) -> Option<Step> {
        let transition = self.transition.take()?;

        match transition.step {
            Step::Forward => self.order.rotate_left(1),
            Step::Backward => self.order.rotate_right(1),
        }
        self.translate = Translate::Neutral;
        Some(transition.step)
    }

    /// Eased animation progress in `0.0..=1.0`; 1.0 when nothing is running.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let Some(transition) = self.transition else {
            return 1.0;
        };
        let elapsed = now.saturating_duration_since(transition.started_at);
        let linear = if transition.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / transition.duration.as_secs_f32()).min(1.0)
        };
        ease_in_out_cubic(linear)
    }

    /// Current strip displacement in slots.
    #[must_use]
    pub fn displacement(&self, now: Instant) -> f32 {
        if self.transition.is_some() {
            self.translate.slots() * self.progress(now)
        } else {
            self.translate.slots()
        }
    }

    /// Slides intersecting the viewport at `now`, with their offsets.
    #[must_use]
    pub fn placed_slides(&self, now: Instant) -> Vec<PlacedSlide> {
        let len = self.order.len();
        if len == 0 {
            return Vec::new();
        }
        let anchor = match self.alignment {
            Alignment::Start => 0.0,
            Alignment::End => (len - 1) as f32,
        };
        let displacement = self.displacement(now);

        self.order
            .iter()
            .enumerate()
            .map(|(slot, &index)| PlacedSlide {
                index,
                offset: slot as f32 - anchor + displacement,
            })
            .filter(|slide| slide.offset.abs() < 1.0)
            .collect()
    }

    /// Image index occupying the viewport when the strip is at rest.
    #[must_use]
    pub fn visible_index(&self) -> Option<usize> {
        match self.alignment {
            Alignment::Start => self.order.front().copied(),
            Alignment::End => self.order.back().copied(),
        }
    }

    #[must_use]
    pub fn order(&self) -> &VecDeque<usize> {
        &self.order
    }

    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    #[must_use]
    pub fn translate(&self) -> Translate {
        self.translate
    }

    /// Whether a slide animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }
}

fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(len: usize) -> State {
        State::new(len, TransitionDuration::from_millis(100))
    }

    fn slide(state: &mut State, step: Step) {
        state.begin(step, Instant::now());
        state.finish();
    }

    #[test]
    fn forward_slide_rotates_first_to_end_after_finish() {
        let mut state = strip(3);
        let now = Instant::now();
        state.begin(Step::Forward, now);

        assert_eq!(state.translate(), Translate::Left);
        assert!(state.is_animating());
        assert_eq!(state.order(), &VecDeque::from([0, 1, 2]));

        assert_eq!(state.finish(), Some(Step::Forward));
        assert_eq!(state.order(), &VecDeque::from([1, 2, 0]));
        assert_eq!(state.translate(), Translate::Neutral);
        assert!(!state.is_animating());
        assert_eq!(state.visible_index(), Some(1));
    }

    #[test]
    fn first_backward_slide_shows_last_image() {
        let mut state = strip(3);
        state.begin(Step::Backward, Instant::now());
        assert_eq!(state.alignment(), Alignment::End);
        assert_eq!(state.order(), &VecDeque::from([1, 2, 0]));
        state.finish();
        assert_eq!(state.visible_index(), Some(2));
    }

    #[test]
    fn direction_changes_do_not_double_rotate() {
        let mut state = strip(4);
        slide(&mut state, Step::Forward);
        slide(&mut state, Step::Forward);
        assert_eq!(state.visible_index(), Some(2));

        slide(&mut state, Step::Backward);
        assert_eq!(state.visible_index(), Some(1));
        slide(&mut state, Step::Forward);
        assert_eq!(state.visible_index(), Some(2));
        slide(&mut state, Step::Backward);
        slide(&mut state, Step::Backward);
        slide(&mut state, Step::Backward);
        assert_eq!(state.visible_index(), Some(3));
    }

    #[test]
    fn order_stays_a_rotation_of_all_indices() {
        let mut state = strip(5);
        for step in [
            Step::Forward,
            Step::Backward,
            Step::Backward,
            Step::Forward,
            Step::Forward,
            Step::Forward,
        ] {
            slide(&mut state, step);
            let mut sorted: Vec<_> = state.order().iter().copied().collect();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
        }
    }

    #[test]
    fn completion_depends_on_elapsed_duration() {
        let mut state = strip(2);
        let start = Instant::now();
        state.begin(Step::Forward, start);

        assert!(!state.is_complete(start + Duration::from_millis(50)));
        assert!(state.is_complete(start + Duration::from_millis(100)));
        state.finish();
        assert!(!state.is_complete(start + Duration::from_secs(1)));
    }

    #[test]
    fn placed_slides_follow_the_displacement() {
        let mut state = strip(3);
        let start = Instant::now();
        assert_eq!(
            state.placed_slides(start),
            vec![PlacedSlide {
                index: 0,
                offset: 0.0
            }]
        );

        state.begin(Step::Forward, start);
        let halfway = state.placed_slides(start + Duration::from_millis(50));
        assert_eq!(halfway.len(), 2);
        assert_eq!(halfway[0].index, 0);
        assert!((halfway[0].offset + 0.5).abs() < 1e-4);
        assert_eq!(halfway[1].index, 1);

        let end = state.placed_slides(start + Duration::from_millis(100));
        assert_eq!(
            end,
            vec![PlacedSlide {
                index: 1,
                offset: 0.0
            }]
        );
    }

    #[test]
    fn backward_slide_moves_previous_image_in_from_the_left() {
        let mut state = strip(3);
        let start = Instant::now();
        state.begin(Step::Backward, start);
        let slides = state.placed_slides(start + Duration::from_millis(50));
        let incoming = slides
            .iter()
            .find(|s| s.index == 2)
            .expect("previous image visible mid-slide");
        assert!(incoming.offset < 0.0);
    }

    #[test]
    fn begin_while_animating_snaps_previous_slide() {
        let mut state = strip(3);
        let now = Instant::now();
        state.begin(Step::Forward, now);
        state.begin(Step::Forward, now);
        state.finish();
        assert_eq!(state.visible_index(), Some(2));
    }

    #[test]
    fn single_image_strip_never_animates() {
        let mut state = strip(1);
        state.begin(Step::Forward, Instant::now());
        assert!(!state.is_animating());
        assert_eq!(state.visible_index(), Some(0));
        assert_eq!(strip(0).visible_index(), None);
    }

    #[test]
    fn easing_is_monotonic_and_bounded() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
        let mut last = 0.0;
        for i in 1..=20 {
            let value = ease_in_out_cubic(i as f32 / 20.0);
            assert!(value >= last);
            last = value;
        }
    }
}
