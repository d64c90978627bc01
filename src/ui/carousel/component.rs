// SPDX-License-Identifier: MPL-2.0
//! Carousel component encapsulating state and update logic.

use super::subcomponents::navigation::{self, Direction, Step};
use super::subcomponents::{loading, strip, swipe};
use super::{controls, empty_state, overlay};
use crate::config::{CarouselConfig, JumpMode};
use crate::domain::ui::{AutoplayInterval, SwipeThreshold, TransitionDuration, ViewportSize};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageData, ImageSource};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use crate::ui::widgets::{Slide, SlideCanvas};
use iced::widget::{canvas::Canvas, center, column, container, stack, text};
use iced::{event, keyboard, window, Alignment, Element, Length, Subscription, Task};
use std::collections::BTreeSet;
use std::time::Instant;

/// Messages emitted by carousel widgets and subscriptions.
#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    /// Indicator dot clicked.
    JumpTo(usize),
    ImageLoaded {
        index: usize,
        result: Result<ImageData, Error>,
    },
    Swipe(swipe::Message),
    /// Animation frame.
    Tick(Instant),
    /// Queued by the first frame tick past the end of the running slide.
    TransitionFinished,
    /// Autoplay timer fired.
    AutoAdvance,
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
}

/// Side effects the application may react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The logical index changed.
    IndexChanged(usize),
}

/// Behavior settings resolved from the `[carousel]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CarouselSettings {
    pub transition: TransitionDuration,
    pub jump_mode: JumpMode,
    pub autoplay: Option<AutoplayInterval>,
    pub swipe_threshold: SwipeThreshold,
    pub viewport: ViewportSize,
}

impl From<&CarouselConfig> for CarouselSettings {
    fn from(config: &CarouselConfig) -> Self {
        Self {
            transition: config.transition(),
            jump_mode: config.jump_mode.unwrap_or_default(),
            autoplay: config.autoplay(),
            swipe_threshold: config.swipe_threshold(),
            viewport: config.viewport(),
        }
    }
}

/// Environment information required to render the carousel.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a AppTheme,
}

/// Complete carousel component state.
#[derive(Debug)]
pub struct State {
    sources: Vec<ImageSource>,
    settings: CarouselSettings,
    navigation: navigation::State,
    strip: strip::State,
    swipe: swipe::State,
    loading: loading::State,
    /// A frame tick already queued `TransitionFinished` for the running slide.
    finish_queued: bool,
}

impl State {
    /// Creates the carousel and the task loading every image.
    pub fn new(sources: Vec<ImageSource>, settings: CarouselSettings) -> (Self, Task<Message>) {
        let len = sources.len();
        tracing::info!(images = len, "creating carousel");

        let loads = sources.iter().cloned().enumerate().map(|(index, source)| {
            Task::perform(media::load_source(source), move |result| {
                Message::ImageLoaded { index, result }
            })
        });
        let task = Task::batch(loads);

        let state = Self {
            navigation: navigation::State::new(len, settings.jump_mode),
            strip: strip::State::new(len, settings.transition),
            swipe: swipe::State::new(settings.swipe_threshold),
            loading: loading::State::new(len),
            finish_queued: false,
            sources,
            settings,
        };

        (state, task)
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        let mut task = Task::none();

        let effect = match message {
            Message::Previous => self.navigate(navigation::Message::Step(Step::Backward)),
            Message::Next => self.navigate(navigation::Message::Step(Step::Forward)),
            Message::JumpTo(index) => self.navigate(navigation::Message::JumpTo(index)),
            Message::ImageLoaded { index, result } => {
                let msg = match result {
                    Ok(image) => {
                        tracing::debug!(
                            index,
                            width = image.width,
                            height = image.height,
                            "image loaded"
                        );
                        loading::Message::Loaded { index, image }
                    }
                    Err(error) => {
                        let source = self.sources.get(index).map(ToString::to_string);
                        tracing::warn!(index, ?source, %error, "image failed to load");
                        loading::Message::Failed { index, error }
                    }
                };
                self.loading.handle(msg);
                Effect::None
            }
            Message::Swipe(msg) => match self.swipe.handle(msg) {
                swipe::Effect::Navigate(step) => self.navigate(navigation::Message::Step(step)),
                swipe::Effect::None => Effect::None,
            },
            Message::Tick(now) => {
                if self.loading.is_pending(self.navigation.index()) {
                    self.loading.handle(loading::Message::SpinnerTick);
                }
                if !self.finish_queued && self.strip.is_complete(now) {
                    self.finish_queued = true;
                    task = Task::done(Message::TransitionFinished);
                }
                Effect::None
            }
            Message::TransitionFinished => self.finish_transition(Instant::now()),
            Message::AutoAdvance => {
                if self.swipe.is_tracking() {
                    tracing::debug!("skipping autoplay step during swipe");
                    Effect::None
                } else {
                    self.navigate(navigation::Message::Step(Step::Forward))
                }
            }
            Message::RawEvent { event, .. } => match event {
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(named),
                    ..
                }) => match named {
                    keyboard::key::Named::ArrowLeft => {
                        self.navigate(navigation::Message::Step(Step::Backward))
                    }
                    keyboard::key::Named::ArrowRight => {
                        self.navigate(navigation::Message::Step(Step::Forward))
                    }
                    _ => Effect::None,
                },
                _ => Effect::None,
            },
        };

        (effect, task)
    }

    fn navigate(&mut self, msg: navigation::Message) -> Effect {
        let before = self.navigation.index();

        match self.navigation.handle(msg) {
            navigation::Effect::Slide { step, previous } => {
                tracing::debug!(?step, ?previous, "starting slide");
                self.strip.begin(step, Instant::now());
            }
            navigation::Effect::Deferred => {
                tracing::debug!("navigation deferred until slide ends");
            }
            navigation::Effect::None => {}
        }

        self.index_effect(before)
    }

    /// Completes the running slide and replays a pending request, if any.
    fn finish_transition(&mut self, now: Instant) -> Effect {
        self.finish_queued = false;
        if !self.strip.is_animating() {
            return Effect::None;
        }
        let before = self.navigation.index();

        if let Some(step) = self.strip.finish() {
            tracing::debug!(?step, order = ?self.strip.order(), "slide finished");
        }
        if let navigation::Effect::Slide { step, .. } =
            self.navigation.handle(navigation::Message::TransitionFinished)
        {
            tracing::debug!(?step, "replaying pending navigation");
            self.strip.begin(step, now);
        }

        self.index_effect(before)
    }

    fn index_effect(&self, before: usize) -> Effect {
        let index = self.navigation.index();
        if index == before {
            Effect::None
        } else {
            Effect::IndexChanged(index)
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let frames = if self.strip.is_animating() || self.loading.is_pending(self.index()) {
            window::frames().map(Message::Tick)
        } else {
            Subscription::none()
        };

        let autoplay = match self.settings.autoplay {
            Some(interval) if self.len() > 1 => {
                iced::time::every(interval.as_duration()).map(|_| Message::AutoAdvance)
            }
            _ => Subscription::none(),
        };

        let keyboard = event::listen_with(|event, status, window| match event {
            event::Event::Keyboard(_) if status == event::Status::Ignored => {
                Some(Message::RawEvent { window, event })
            }
            _ => None,
        });

        Subscription::batch([frames, autoplay, keyboard])
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let colors = &env.theme.colors;

        if self.sources.is_empty() {
            return empty_state::view(env.i18n, colors);
        }

        let viewport = self.settings.viewport;
        let width = Length::Fixed(viewport.width());
        let height = Length::Fixed(viewport.height());

        let slides = self
            .strip
            .placed_slides(Instant::now())
            .into_iter()
            .map(|placed| Slide {
                image: self.loading.image(placed.index),
                offset: placed.offset,
            })
            .collect();
        let slide_canvas = Canvas::new(SlideCanvas::new(
            slides,
            colors.viewport_background,
            Message::Swipe,
        ))
        .width(width)
        .height(height);

        let status_overlay = overlay::view(
            self.loading.status(self.index()),
            self.loading.spinner_rotation(),
            env.i18n,
            colors,
        );

        let frame = container(stack![
            slide_canvas,
            center(status_overlay),
            controls::nav_buttons(env.i18n, colors),
        ])
        .width(width)
        .height(height)
        .clip(true)
        .style(styles::container::viewport(colors.viewport_background));

        let position = env.i18n.tr_with_args(
            "carousel-position",
            &[
                ("current", &(self.index() + 1).to_string()),
                ("total", &self.len().to_string()),
            ],
        );
        let caption = text(position)
            .size(typography::CAPTION)
            .color(colors.text_secondary);

        column![
            frame,
            controls::indicators(self.len(), self.index(), colors),
            caption,
        ]
        .spacing(spacing::XS)
        .align_x(Alignment::Center)
        .into()
    }

    /// Current logical index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.navigation.index()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.navigation.direction()
    }

    /// Whether a slide animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.strip.is_animating()
    }

    #[must_use]
    pub fn loaded_set(&self) -> &BTreeSet<usize> {
        self.loading.loaded_set()
    }

    #[must_use]
    pub fn strip(&self) -> &strip::State {
        &self.strip
    }

    #[must_use]
    pub fn loading(&self) -> &loading::State {
        &self.loading
    }

    #[must_use]
    pub fn swipe(&self) -> &swipe::State {
        &self.swipe
    }

    #[must_use]
    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    /// Source of the image at the current index.
    #[must_use]
    pub fn current_source(&self) -> Option<&ImageSource> {
        self.sources.get(self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::carousel::subcomponents::strip::Translate;
    use std::path::PathBuf;
    use std::time::Duration;

    fn sources(names: &[&str]) -> Vec<ImageSource> {
        names
            .iter()
            .map(|name| ImageSource::File(PathBuf::from(name)))
            .collect()
    }

    fn carousel(len: usize) -> State {
        let names: Vec<String> = (0..len).map(|i| format!("{i}.png")).collect();
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        State::new(sources(&names), CarouselSettings::default()).0
    }

    fn finish(state: &mut State) -> Effect {
        state.handle_message(Message::TransitionFinished).0
    }

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![255, 255, 255, 255])
    }

    #[test]
    fn next_on_three_images_moves_first_slot_to_end() {
        let mut state = State::new(sources(&["A", "B", "C"]), CarouselSettings::default()).0;

        let (effect, _) = state.handle_message(Message::Next);
        assert_eq!(effect, Effect::IndexChanged(1));
        assert_eq!(state.index(), 1);
        assert_eq!(state.direction(), Direction::Forward);
        assert!(state.is_animating());

        finish(&mut state);
        assert_eq!(
            state.strip().order().iter().copied().collect::<Vec<_>>(),
            vec![1, 2, 0]
        );
        assert_eq!(state.strip().translate(), Translate::Neutral);
        assert!(!state.is_animating());
        assert_eq!(state.strip().visible_index(), Some(1));
    }

    #[test]
    fn visible_slot_tracks_index_through_mixed_navigation() {
        let mut state = carousel(5);
        let script = [
            Message::Previous,
            Message::Next,
            Message::Next,
            Message::Previous,
            Message::Previous,
            Message::Previous,
            Message::JumpTo(4),
            Message::Next,
        ];

        for message in script {
            state.handle_message(message);
            finish(&mut state);
            assert_eq!(state.strip().visible_index(), Some(state.index()));
        }
    }

    #[test]
    fn tick_after_duration_queues_finish_once() {
        let mut state = carousel(3);
        state.handle_message(Message::Next);
        let later = Instant::now() + Duration::from_secs(10);

        let (effect, task) = state.handle_message(Message::Tick(later));
        assert_eq!(effect, Effect::None);
        assert_eq!(task.units(), 1);
        assert!(state.is_animating());

        let (_, task) = state.handle_message(Message::Tick(later));
        assert_eq!(task.units(), 0);

        finish(&mut state);
        assert!(!state.is_animating());
        assert_eq!(state.strip().visible_index(), Some(1));
    }

    #[test]
    fn stray_finish_without_slide_is_ignored() {
        let mut state = carousel(3);
        assert_eq!(finish(&mut state), Effect::None);
        assert_eq!(
            state.strip().order().iter().copied().collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn early_tick_keeps_animating() {
        let mut state = carousel(3);
        state.handle_message(Message::Next);
        state.handle_message(Message::Tick(Instant::now()));
        assert!(state.is_animating());
    }

    #[test]
    fn request_during_slide_is_replayed_after_it() {
        let mut state = carousel(4);
        state.handle_message(Message::Next);

        let (effect, _) = state.handle_message(Message::Next);
        assert_eq!(effect, Effect::None);
        assert_eq!(state.index(), 1);

        let effect = finish(&mut state);
        assert_eq!(effect, Effect::IndexChanged(2));
        assert!(state.is_animating());
        finish(&mut state);
        assert_eq!(state.strip().visible_index(), Some(2));
    }

    #[test]
    fn dot_click_from_zero_steps_once() {
        let mut state = carousel(5);
        state.handle_message(Message::JumpTo(3));
        assert_eq!(state.index(), 1);
        assert_eq!(state.direction(), Direction::Forward);
    }

    #[test]
    fn direct_jump_mode_reaches_target() {
        let settings = CarouselSettings {
            jump_mode: JumpMode::Direct,
            ..CarouselSettings::default()
        };
        let mut state = State::new(sources(&["a", "b", "c", "d"]), settings).0;
        state.handle_message(Message::JumpTo(3));
        for _ in 0..3 {
            finish(&mut state);
        }
        assert_eq!(state.index(), 3);
        assert!(!state.is_animating());
        assert_eq!(state.strip().visible_index(), Some(3));
    }

    #[test]
    fn swipes_map_to_steps() {
        let mut state = carousel(3);
        state.handle_message(Message::Swipe(swipe::Message::Start { x: 200.0 }));
        state.handle_message(Message::Swipe(swipe::Message::Move { x: 100.0 }));
        let (effect, _) = state.handle_message(Message::Swipe(swipe::Message::End));
        assert_eq!(effect, Effect::IndexChanged(1));
        finish(&mut state);

        state.handle_message(Message::Swipe(swipe::Message::Start { x: 100.0 }));
        state.handle_message(Message::Swipe(swipe::Message::Move { x: 180.0 }));
        state.handle_message(Message::Swipe(swipe::Message::End));
        assert_eq!(state.index(), 0);
        assert_eq!(state.direction(), Direction::Backward);
    }

    #[test]
    fn tap_does_not_navigate() {
        let mut state = carousel(3);
        state.handle_message(Message::Swipe(swipe::Message::Start { x: 50.0 }));
        let (effect, _) = state.handle_message(Message::Swipe(swipe::Message::End));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn autoplay_is_suppressed_while_swiping() {
        let mut state = carousel(3);
        state.handle_message(Message::Swipe(swipe::Message::Start { x: 50.0 }));
        state.handle_message(Message::AutoAdvance);
        assert_eq!(state.index(), 0);

        state.handle_message(Message::Swipe(swipe::Message::Cancel));
        state.handle_message(Message::AutoAdvance);
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn autoplay_during_slide_is_replayed_after_it() {
        let mut state = carousel(4);
        state.handle_message(Message::Next);

        let (effect, _) = state.handle_message(Message::AutoAdvance);
        assert_eq!(effect, Effect::None);
        assert_eq!(state.index(), 1);

        assert_eq!(finish(&mut state), Effect::IndexChanged(2));
        assert!(state.is_animating());
    }

    #[test]
    fn arrow_keys_navigate() {
        let mut state = carousel(3);
        let key_event = |named, code| {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(named),
                modified_key: keyboard::Key::Named(named),
                physical_key: keyboard::key::Physical::Code(code),
                location: keyboard::Location::Standard,
                modifiers: keyboard::Modifiers::default(),
                text: None,
                repeat: false,
            })
        };

        state.handle_message(Message::RawEvent {
            window: window::Id::unique(),
            event: key_event(keyboard::key::Named::ArrowLeft, keyboard::key::Code::ArrowLeft),
        });
        assert_eq!(state.index(), 2);
        finish(&mut state);

        state.handle_message(Message::RawEvent {
            window: window::Id::unique(),
            event: key_event(
                keyboard::key::Named::ArrowRight,
                keyboard::key::Code::ArrowRight,
            ),
        });
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn load_results_update_loaded_set() {
        let mut state = carousel(2);
        state.handle_message(Message::ImageLoaded {
            index: 1,
            result: Ok(pixel()),
        });
        state.handle_message(Message::ImageLoaded {
            index: 0,
            result: Err(Error::Io("missing".into())),
        });
        state.handle_message(Message::ImageLoaded {
            index: 7,
            result: Ok(pixel()),
        });

        assert_eq!(state.loaded_set().iter().copied().collect::<Vec<_>>(), vec![1]);
        assert!(matches!(
            state.loading().status(0),
            loading::LoadStatus::Failed(_)
        ));
    }

    #[test]
    fn single_and_empty_carousels_ignore_navigation() {
        for len in 0..2 {
            let mut state = carousel(len);
            for message in [Message::Next, Message::Previous, Message::JumpTo(0)] {
                let (effect, _) = state.handle_message(message);
                assert_eq!(effect, Effect::None);
            }
            assert_eq!(state.index(), 0);
            assert!(!state.is_animating());
        }
    }

    #[test]
    fn settings_follow_config() {
        let config = CarouselConfig {
            transition_ms: Some(300),
            jump_mode: Some(JumpMode::Direct),
            autoplay_secs: Some(4),
            ..CarouselConfig::default()
        };
        let settings = CarouselSettings::from(&config);
        assert_eq!(settings.transition.value(), Duration::from_millis(300));
        assert_eq!(settings.jump_mode, JumpMode::Direct);
        assert_eq!(settings.autoplay.map(AutoplayInterval::secs), Some(4));
    }
}
