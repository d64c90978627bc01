// SPDX-License-Identifier: MPL-2.0
//! Carousel controls: previous/next arrows and indicator dots.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, text, tooltip, Row, Space};
use iced::{alignment::Vertical, Element, Length, Padding};

/// Previous and next arrows pinned to the left and right viewport edges.
pub fn nav_buttons<'a>(i18n: &I18n, colors: &ColorScheme) -> Element<'a, Message> {
    let previous = arrow(
        icons::circle_chevron_left(),
        i18n.tr("carousel-previous"),
        Message::Previous,
        colors,
    );
    let next = arrow(
        icons::circle_chevron_right(),
        i18n.tr("carousel-next"),
        Message::Next,
        colors,
    );

    Row::new()
        .push(previous)
        .push(Space::new().width(Length::Fill))
        .push(next)
        .align_y(Vertical::Center)
        .padding(Padding::from([0.0, sizing::NAV_INSET]))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn arrow<'a>(
    icon: iced::widget::Svg<'a>,
    label: String,
    on_press: Message,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let icon = icons::sized(icon, sizing::NAV_BUTTON)
        .style(styles::overlay::icon(colors.overlay_text));

    let control = button(icon)
        .padding(0)
        .on_press(on_press)
        .style(styles::button::nav_arrow(colors.overlay_text));

    let label = container(text(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::overlay::badge(
            colors.overlay_background,
            colors.overlay_text,
        ));

    tooltip(control, label, tooltip::Position::Bottom).into()
}

/// One clickable dot per image; the dot at `current` is filled.
pub fn indicators<'a>(len: usize, current: usize, colors: &ColorScheme) -> Element<'a, Message> {
    let dots = (0..len).map(|index| {
        button(Space::new())
            .width(Length::Fixed(sizing::DOT))
            .height(Length::Fixed(sizing::DOT))
            .padding(0)
            .on_press(Message::JumpTo(index))
            .style(styles::button::indicator_dot(
                index == current,
                colors.dot_active,
                colors.dot_inactive,
            ))
            .into()
    });

    Row::with_children(dots)
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .into()
}
