// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with no dependency on the GUI toolkit.
//!
//! # Modules
//!
//! - [`ui`]: Carousel setting value objects
//!   ([`TransitionDuration`](ui::newtypes::TransitionDuration),
//!   [`SwipeThreshold`](ui::newtypes::SwipeThreshold),
//!   [`ViewportSize`](ui::newtypes::ViewportSize))

pub mod ui;
