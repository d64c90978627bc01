// SPDX-License-Identifier: MPL-2.0
//! Empty state view displayed when the carousel has no images.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

/// Renders the placeholder shown instead of the viewport.
pub fn view<'a>(i18n: &I18n, colors: &ColorScheme) -> Element<'a, Message> {
    let icon = icons::sized(icons::image(), sizing::ICON_XL)
        .style(styles::overlay::icon(colors.text_secondary));

    let title = Text::new(i18n.tr("carousel-empty-title"))
        .size(typography::TITLE_MD)
        .color(colors.text_secondary);

    let subtitle = Text::new(i18n.tr("carousel-empty-subtitle"))
        .size(typography::BODY)
        .color(colors.text_secondary);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(title)
        .push(subtitle);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
