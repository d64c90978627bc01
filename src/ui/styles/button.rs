// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for the previous/next controls drawn over the slides.
///
/// Transparent at rest; a dark halo appears on hover and press.
pub fn nav_arrow(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_SUBTLE,
            button::Status::Pressed => opacity::OVERLAY_MEDIUM,
            _ => opacity::TRANSPARENT,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::BLACK
            })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Style for an indicator dot.
///
/// The active dot is filled and ringed with `active`; the others only carry
/// an `inactive` ring.
pub fn indicator_dot(
    is_active: bool,
    active: Color,
    inactive: Color,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let ring = if is_active || status == button::Status::Hovered {
            active
        } else {
            inactive
        };
        let fill = if is_active {
            Some(Background::Color(active))
        } else {
            None
        };

        button::Style {
            background: fill,
            text_color: active,
            border: Border {
                color: ring,
                width: border::WIDTH_DOT,
                radius: radius::FULL.into(),
            },
            shadow: shadow::DOT,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_arrow_is_transparent_until_hovered() {
        let style = nav_arrow(palette::WHITE);
        let theme = Theme::Dark;

        let rest = style(&theme, button::Status::Active);
        assert!(matches!(rest.background, Some(Background::Color(c)) if c.a == 0.0));

        let hovered = style(&theme, button::Status::Hovered);
        assert!(matches!(hovered.background, Some(Background::Color(c)) if c.a > 0.0));
    }

    #[test]
    fn only_active_dot_is_filled() {
        let theme = Theme::Light;
        let active = indicator_dot(true, palette::WHITE, palette::GRAY_500)(
            &theme,
            button::Status::Active,
        );
        let inactive = indicator_dot(false, palette::WHITE, palette::GRAY_500)(
            &theme,
            button::Status::Active,
        );

        assert!(active.background.is_some());
        assert_eq!(active.border.color, palette::WHITE);
        assert!(inactive.background.is_none());
        assert_eq!(inactive.border.color, palette::GRAY_500);
    }
}
