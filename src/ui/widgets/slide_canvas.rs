// SPDX-License-Identifier: MPL-2.0
//! Canvas that paints the visible part of the slide strip and turns pointer
//! and touch input into swipe messages.

use crate::media::ImageData;
use crate::ui::carousel::subcomponents::swipe;
use iced::widget::canvas::{self, Frame, Geometry};
use iced::widget::Action;
use iced::{mouse, touch, Color, Point, Rectangle, Renderer, Size, Theme};

/// One slide to paint, positioned in viewport widths.
#[derive(Debug, Clone, Copy)]
pub struct Slide<'a> {
    pub image: Option<&'a ImageData>,
    /// 0.0 fills the viewport; -1.0 sits one viewport to the left.
    pub offset: f32,
}

/// Canvas program for the slide strip.
pub struct SlideCanvas<'a, Message> {
    slides: Vec<Slide<'a>>,
    background: Color,
    on_swipe: fn(swipe::Message) -> Message,
}

/// Which pointer is driving the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pointer {
    #[default]
    None,
    Mouse,
    Finger(touch::Finger),
}

impl<'a, Message> SlideCanvas<'a, Message> {
    #[must_use]
    pub fn new(
        slides: Vec<Slide<'a>>,
        background: Color,
        on_swipe: fn(swipe::Message) -> Message,
    ) -> Self {
        Self {
            slides,
            background,
            on_swipe,
        }
    }

    fn publish(&self, message: swipe::Message) -> Option<Action<Message>> {
        Some(Action::publish((self.on_swipe)(message)).and_capture())
    }
}

impl<Message> canvas::Program<Message> for SlideCanvas<'_, Message> {
    type State = Pointer;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            iced::Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if *state == Pointer::None && bounds.contains(*position) {
                    *state = Pointer::Finger(*id);
                    return self.publish(swipe::Message::Start {
                        x: position.x - bounds.x,
                    });
                }
            }
            iced::Event::Touch(touch::Event::FingerMoved { id, position }) => {
                if *state == Pointer::Finger(*id) {
                    return self.publish(swipe::Message::Move {
                        x: position.x - bounds.x,
                    });
                }
            }
            iced::Event::Touch(touch::Event::FingerLifted { id, .. }) => {
                if *state == Pointer::Finger(*id) {
                    *state = Pointer::None;
                    return self.publish(swipe::Message::End);
                }
            }
            iced::Event::Touch(touch::Event::FingerLost { id, .. }) => {
                if *state == Pointer::Finger(*id) {
                    *state = Pointer::None;
                    return self.publish(swipe::Message::Cancel);
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if *state == Pointer::None {
                    if let Some(position) = cursor.position_in(bounds) {
                        *state = Pointer::Mouse;
                        return self.publish(swipe::Message::Start { x: position.x });
                    }
                }
            }
            // The raw position keeps the drag alive while the cursor levitates
            // over the previous/next buttons stacked on top of the canvas.
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if *state == Pointer::Mouse {
                    if bounds.contains(*position) {
                        return self.publish(swipe::Message::Move {
                            x: position.x - bounds.x,
                        });
                    }
                    *state = Pointer::None;
                    return self.publish(swipe::Message::Cancel);
                }
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                if *state == Pointer::Mouse {
                    *state = Pointer::None;
                    return self.publish(swipe::Message::Cancel);
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if *state == Pointer::Mouse {
                    *state = Pointer::None;
                    return self.publish(swipe::Message::End);
                }
            }
            _ => {}
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = bounds.size();

        for slide in &self.slides {
            let slot = Rectangle::new(Point::new(slide.offset * size.width, 0.0), size);

            frame.with_clip(slot, |frame| {
                frame.fill_rectangle(Point::ORIGIN, size, self.background);
                if let Some(image) = slide.image {
                    frame.draw_image(
                        cover_rect(image.width, image.height, size),
                        canvas::Image::new(image.handle.clone()),
                    );
                }
            });
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        match state {
            Pointer::Mouse => mouse::Interaction::Grabbing,
            _ if cursor.is_over(bounds) => mouse::Interaction::Grab,
            _ => mouse::Interaction::default(),
        }
    }
}

/// Rectangle that scales an image to cover `slot`, centred and cropped by
/// the caller's clip.
#[must_use]
pub fn cover_rect(image_width: u32, image_height: u32, slot: Size) -> Rectangle {
    if image_width == 0 || image_height == 0 {
        return Rectangle::new(Point::ORIGIN, slot);
    }

    let image_width = image_width as f32;
    let image_height = image_height as f32;
    let scale = (slot.width / image_width).max(slot.height / image_height);
    let width = image_width * scale;
    let height = image_height * scale;

    Rectangle::new(
        Point::new((slot.width - width) / 2.0, (slot.height - height) / 2.0),
        Size::new(width, height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvas::Program;

    const BOUNDS: Rectangle = Rectangle {
        x: 0.0,
        y: 0.0,
        width: 480.0,
        height: 320.0,
    };

    fn canvas() -> SlideCanvas<'static, swipe::Message> {
        SlideCanvas::new(Vec::new(), Color::BLACK, |message| message)
    }

    fn published(
        program: &SlideCanvas<'_, swipe::Message>,
        state: &mut Pointer,
        event: iced::Event,
        cursor: mouse::Cursor,
    ) -> Option<swipe::Message> {
        program
            .update(state, &event, BOUNDS, cursor)
            .and_then(|action| action.into_inner().0)
    }

    fn press() -> iced::Event {
        iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
    }

    fn release() -> iced::Event {
        iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
    }

    fn moved(x: f32, y: f32) -> iced::Event {
        iced::Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(x, y),
        })
    }

    #[test]
    fn mouse_drag_publishes_start_move_end() {
        let program = canvas();
        let mut state = Pointer::None;
        let cursor = mouse::Cursor::Available(Point::new(240.0, 160.0));

        assert!(matches!(
            published(&program, &mut state, press(), cursor),
            Some(swipe::Message::Start { x }) if x == 240.0
        ));
        assert_eq!(state, Pointer::Mouse);
        assert!(matches!(
            published(&program, &mut state, moved(100.0, 160.0), cursor),
            Some(swipe::Message::Move { x }) if x == 100.0
        ));
        assert!(matches!(
            published(&program, &mut state, release(), cursor),
            Some(swipe::Message::End)
        ));
        assert_eq!(state, Pointer::None);
    }

    #[test]
    fn drag_survives_cursor_over_stacked_buttons() {
        let program = canvas();
        let mut state = Pointer::None;

        published(
            &program,
            &mut state,
            press(),
            mouse::Cursor::Available(Point::new(240.0, 160.0)),
        );
        let over_button = mouse::Cursor::Levitating(Point::new(20.0, 160.0));

        assert!(matches!(
            published(&program, &mut state, moved(20.0, 160.0), over_button),
            Some(swipe::Message::Move { x }) if x == 20.0
        ));
        assert_eq!(state, Pointer::Mouse);
        assert!(matches!(
            published(&program, &mut state, release(), over_button),
            Some(swipe::Message::End)
        ));
    }

    #[test]
    fn drag_leaving_bounds_cancels() {
        let program = canvas();
        let mut state = Pointer::Mouse;
        let outside = mouse::Cursor::Available(Point::new(600.0, 160.0));

        assert!(matches!(
            published(&program, &mut state, moved(600.0, 160.0), outside),
            Some(swipe::Message::Cancel)
        ));
        assert_eq!(state, Pointer::None);
    }

    #[test]
    fn press_over_stacked_buttons_does_not_start_drag() {
        let program = canvas();
        let mut state = Pointer::None;
        let over_button = mouse::Cursor::Levitating(Point::new(20.0, 160.0));

        assert!(published(&program, &mut state, press(), over_button).is_none());
        assert_eq!(state, Pointer::None);
    }

    #[test]
    fn cover_fills_slot_and_crops_wide_image() {
        let rect = cover_rect(400, 100, Size::new(200.0, 100.0));
        assert_eq!(rect.height, 100.0);
        assert_eq!(rect.width, 400.0);
        assert_eq!(rect.x, -100.0);
        assert_eq!(rect.y, 0.0);
    }

    #[test]
    fn cover_crops_tall_image_vertically() {
        let rect = cover_rect(100, 400, Size::new(200.0, 100.0));
        assert_eq!(rect.width, 200.0);
        assert_eq!(rect.height, 800.0);
        assert_eq!(rect.y, -350.0);
    }

    #[test]
    fn cover_handles_degenerate_images() {
        let slot = Size::new(120.0, 80.0);
        assert_eq!(cover_rect(0, 10, slot), Rectangle::new(Point::ORIGIN, slot));
    }
}
