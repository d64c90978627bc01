// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the carousel.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! The main component.rs orchestrates these sub-components.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── navigation - Current index, direction, pending request
//!     ├── strip      - Render order, alignment, slide animation
//!     ├── swipe      - Pointer/touch gesture classification
//!     └── loading    - Per-image load status and spinner
//! ```

pub mod loading;
pub mod navigation;
pub mod strip;
pub mod swipe;
