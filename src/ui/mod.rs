// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! The carousel follows the Elm-style "state down, messages up" pattern with
//! nested sub-components.
//!
//! - [`carousel`] - The carousel component and its sub-components
//! - [`widgets`] - Canvas widgets (slide strip, spinner)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Inline SVG icons

pub mod carousel;
pub mod design_tokens;
pub mod icons;
pub mod styles;
pub mod theming;
pub mod widgets;
