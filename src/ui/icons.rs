// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are small inline SVG documents. Handles are created once and cached
//! using `OnceLock`; the stroke color comes from the `svg` widget style, so a
//! single variant serves both themes.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `chevron_left` not `previous_image`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Defines an icon function returning an [`Svg`] with a cached handle.
macro_rules! define_icon {
    ($name:ident, $data:expr, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory($data.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

const CIRCLE_CHEVRON_LEFT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"/><path d="M14 8l-4 4 4 4"/></svg>"#;

const CIRCLE_CHEVRON_RIGHT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"/><path d="M10 8l4 4-4 4"/></svg>"#;

const IMAGE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"><rect x="3" y="4" width="18" height="16" rx="2"/><circle cx="9" cy="10" r="2"/><path d="M21 16l-5-5-9 9"/></svg>"#;

const WARNING: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M12 3l10 18H2z"/><path d="M12 10v5"/><path d="M12 18h.01"/></svg>"#;

define_icon!(
    circle_chevron_left,
    CIRCLE_CHEVRON_LEFT,
    "Chevron pointing left inside a circle."
);
define_icon!(
    circle_chevron_right,
    CIRCLE_CHEVRON_RIGHT,
    "Chevron pointing right inside a circle."
);
define_icon!(image, IMAGE, "Picture frame with a mountain and a sun.");
define_icon!(warning, WARNING, "Triangle with an exclamation mark.");

/// Applies a square size to an icon.
pub fn sized(icon: Svg<'_>, size: f32) -> Svg<'_> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_documents_parse_as_svg() {
        for data in [CIRCLE_CHEVRON_LEFT, CIRCLE_CHEVRON_RIGHT, IMAGE, WARNING] {
            let tree = resvg::usvg::Tree::from_str(data, &resvg::usvg::Options::default());
            assert!(tree.is_ok(), "invalid icon markup: {data}");
        }
    }

    #[test]
    fn icons_build_with_cached_handles() {
        let _ = sized(circle_chevron_left(), 32.0);
        let _ = sized(circle_chevron_right(), 32.0);
        let _ = image();
        let _ = warning();
    }
}
