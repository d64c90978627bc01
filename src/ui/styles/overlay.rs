// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the loading and failure badges shown over slides.

use crate::ui::design_tokens::radius;
use iced::widget::{container, svg};
use iced::{Background, Border, Color, Theme};

/// Rounded badge behind overlay text.
pub fn badge(background: Color, text: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Tints an SVG icon with a fixed color.
pub fn icon(color: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) }
}
