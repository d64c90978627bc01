// SPDX-License-Identifier: MPL-2.0
//! `iced_carousel` is an image carousel built with the Iced GUI framework.
//!
//! It shows one image at a time in a fixed-size viewport and loops endlessly
//! in both directions, driven by previous/next controls, swipe gestures,
//! indicator dots, arrow keys or an optional autoplay timer.

#![doc(html_root_url = "https://docs.rs/iced_carousel/0.1.0")]

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
