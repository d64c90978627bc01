// SPDX-License-Identifier: MPL-2.0
//! Custom canvas widgets used by the carousel.

pub mod animated_spinner;
pub mod slide_canvas;

pub use animated_spinner::AnimatedSpinner;
pub use slide_canvas::{Slide, SlideCanvas};
