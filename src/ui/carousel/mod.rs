// SPDX-License-Identifier: MPL-2.0
//! Image carousel: a fixed-size viewport showing one image at a time, with
//! previous/next controls, swipe gestures, indicator dots and an endless
//! loop in both directions.
//!
//! [`component`] orchestrates the [`subcomponents`]; the remaining modules
//! are stateless view helpers.

pub mod component;
pub mod controls;
pub mod empty_state;
pub mod overlay;
pub mod subcomponents;

pub use component::{CarouselSettings, Effect, Message, State, ViewEnv};
