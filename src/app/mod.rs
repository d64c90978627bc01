// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires together configuration, localization, theming and
//! the carousel component, and hosts it in a window sized to the configured
//! viewport.

mod message;
pub mod paths;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::carousel::{self, CarouselSettings, ViewEnv};
use crate::ui::design_tokens::spacing;
use crate::ui::theming::AppTheme;
use iced::widget::center;
use iced::{window, Element, Size, Subscription, Task, Theme};

/// Room around the viewport for the dots and the position caption.
const WINDOW_CHROME_HEIGHT: f32 = 96.0;
const WINDOW_MARGIN: f32 = spacing::LG * 2.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    carousel: carousel::State,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale().to_string())
            .field("theme_mode", &self.theme.mode)
            .field("images", &self.carousel.len())
            .field("index", &self.carousel.index())
            .finish()
    }
}

/// Window settings fitting the configured viewport.
fn window_settings(config: &Config) -> window::Settings {
    let viewport = config.carousel.viewport();
    let size = Size::new(
        viewport.width() + WINDOW_MARGIN,
        viewport.height() + WINDOW_CHROME_HEIGHT + WINDOW_MARGIN,
    );

    window::Settings {
        size,
        min_size: Some(size),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
    let window = window_settings(&config);

    // iced 0.14 requires a Fn boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some((flags, config, config_warning)));
    let boot = move || {
        let (flags, config, warning) = boot_state.borrow_mut().take().unwrap_or_default();
        App::with_config(flags, config, warning)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application from already loaded configuration.
    pub fn with_config(
        flags: Flags,
        config: Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, &config);
        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(&key));
        }
        tracing::info!(locale = %i18n.current_locale(), "starting");

        let theme = AppTheme::new(config.general.theme_mode);
        let settings = CarouselSettings::from(&config.carousel);
        let (carousel, task) = carousel::State::new(flags.sources, settings);

        let app = Self {
            i18n,
            theme,
            carousel,
        };
        (app, task.map(Message::Carousel))
    }

    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.carousel.current_source() {
            Some(source) => format!("{} - {}", source.label(), app_name),
            None => app_name,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Carousel(msg) => {
                let (effect, task) = self.carousel.handle_message(msg);
                if let carousel::Effect::IndexChanged(index) = effect {
                    tracing::debug!(index, "carousel index changed");
                }
                task.map(Message::Carousel)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let env = ViewEnv {
            i18n: &self.i18n,
            theme: &self.theme,
        };

        center(self.carousel.view(env).map(Message::Carousel))
            .padding(spacing::LG)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.carousel.subscription().map(Message::Carousel)
    }

    #[must_use]
    pub fn carousel(&self) -> &carousel::State {
        &self.carousel
    }
}
