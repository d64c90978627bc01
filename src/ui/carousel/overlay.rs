// SPDX-License-Identifier: MPL-2.0
//! Status overlay drawn over the viewport while the current image is not
//! displayable: a spinner while loading, a warning once loading failed.

use super::component::Message;
use super::subcomponents::loading::LoadStatus;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{container, text, Column, Space};
use iced::{alignment::Horizontal, Element};

pub fn view<'a>(
    status: LoadStatus<'_>,
    spinner_rotation: f32,
    i18n: &I18n,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let content: Column<'a, Message> = match status {
        LoadStatus::Loaded(_) => return Space::new().into(),
        LoadStatus::Pending => Column::new()
            .push(
                AnimatedSpinner::new(colors.overlay_text, spinner_rotation)
                    .size(sizing::ICON_MD)
                    .into_element(),
            )
            .push(text(i18n.tr("carousel-loading")).size(typography::BODY)),
        LoadStatus::Failed(error) => Column::new()
            .push(
                icons::sized(icons::warning(), sizing::ICON_MD)
                    .style(styles::overlay::icon(colors.error)),
            )
            .push(text(i18n.tr(error.i18n_key())).size(typography::BODY)),
    };

    container(
        content
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center),
    )
    .padding([spacing::XS, spacing::SM])
    .style(styles::overlay::badge(
        colors.overlay_background,
        colors.overlay_text,
    ))
    .into()
}
