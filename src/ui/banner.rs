// SPDX-License-Identifier: MPL-2.0
//! Banner widget rendering and message routing.
//!
//! [`view`] draws the frames of an [`OverlayLayer`] as cards anchored to the
//! top (or bottom) edge, with a kind-colored accent border like the toast
//! notifications of a desktop app. [`update`] feeds the resulting messages
//! back into the coordinator.

use crate::application::coordinator::{Coordinator, GestureInput};
use crate::domain::banner::{Anchor, BannerId, ColorSource, ImageSource, Template};
use crate::domain::gesture;
use crate::i18n::fluent::{I18n, CLOSE_KEY, REPLY_HINT_KEY, REPLY_SEND_KEY};
use crate::ui::design_tokens::{
    self, border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::overlay::{Frame, OverlayLayer, SlotView, TemplateContent};
use iced::widget::image::{Handle, Image};
use iced::widget::{
    button, container, text, text_input, tooltip, Column, Container, Row, Stack, Text,
};
use iced::{alignment, Color, Element, Length, Point, Size, Theme};
use std::time::Instant;

/// Pointer activity anywhere in the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Press not captured by a widget. `None` means at the cursor.
    Pressed(Option<Point>),
    Moved(Point),
    /// `None` means at the cursor.
    Released(Option<Point>),
    /// Cursor left the window or the touch was cancelled.
    Lost,
}

/// Messages produced by the banner overlay.
#[derive(Debug, Clone)]
pub enum Message {
    Pointer(PointerEvent),
    Resized(Size),
    InputChanged(String),
    /// Send the reply input.
    Submit,
    Close(BannerId),
    /// Frame tick driving timers and transitions.
    Tick(Instant),
}

/// Applies a banner message.
pub fn update(coordinator: &mut Coordinator, layer: &OverlayLayer, message: Message) {
    match message {
        Message::Tick(_) => coordinator.tick(),
        Message::Resized(size) => layer.set_viewport(size),
        Message::Pointer(event) => route_pointer(coordinator, layer, event),
        Message::InputChanged(text) => layer.set_input(text),
        Message::Submit => coordinator.submit_reply(layer.input()),
        Message::Close(id) => {
            coordinator.close(id);
        }
    }
}

fn to_gesture(point: Point) -> gesture::Point {
    gesture::Point::new(point.x, point.y)
}

/// Turns window pointer events into gestures on the current banner.
///
/// A gesture starts only with a press on the current banner; motion is then
/// routed until release even when the pointer leaves the banner.
fn route_pointer(coordinator: &mut Coordinator, layer: &OverlayLayer, event: PointerEvent) {
    let input = match event {
        PointerEvent::Pressed(point) => {
            let Some(point) = point.or_else(|| layer.cursor()) else {
                return;
            };
            let hit = layer.hit_test(point);
            if hit.is_none() || hit != coordinator.current() {
                return;
            }
            layer.begin_tracking();
            GestureInput::Down(to_gesture(point))
        }
        PointerEvent::Moved(point) => {
            layer.set_cursor(point);
            if !layer.is_tracking() {
                return;
            }
            GestureInput::Move(to_gesture(point))
        }
        PointerEvent::Released(point) => {
            if !layer.end_tracking() {
                return;
            }
            match point.or_else(|| layer.cursor()) {
                Some(point) => GestureInput::Up(to_gesture(point)),
                None => GestureInput::Cancel,
            }
        }
        PointerEvent::Lost => {
            layer.clear_cursor();
            if !layer.end_tracking() {
                return;
            }
            GestureInput::Cancel
        }
    };
    coordinator.handle_gesture(input);
}

/// Renders every live banner of `layer`.
pub fn view<'a>(layer: &OverlayLayer, i18n: &I18n) -> Element<'a, Message> {
    let frames = layer.frames();
    if frames.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let input = layer.input();
    let (top, bottom): (Vec<Frame>, Vec<Frame>) = frames
        .into_iter()
        .partition(|frame| frame.anchor() == Anchor::Top);

    let edge = |frames: Vec<Frame>, align: alignment::Vertical| -> Element<'a, Message> {
        let cards: Vec<Element<'a, Message>> = frames
            .iter()
            .map(|frame| card(frame, layer, i18n, &input))
            .collect();
        Container::new(Stack::with_children(cards))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(align)
            .into()
    };

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);
    if !top.is_empty() {
        column = column.push(edge(top, alignment::Vertical::Top));
    }
    if !bottom.is_empty() {
        column = column.push(edge(bottom, alignment::Vertical::Bottom));
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .into()
}

/// One banner, clipped to the part that has slid onto the screen.
fn card<'a>(frame: &Frame, layer: &OverlayLayer, i18n: &I18n, input: &str) -> Element<'a, Message> {
    let descriptor = &frame.descriptor;
    let accent = design_tokens::kind_accent(descriptor.kind()).unwrap_or(palette::GRAY_400);
    let background = descriptor.background().and_then(resolve_color);
    let text_color = descriptor.text_color().and_then(resolve_color);
    let surface_alpha = frame.opacity;
    let content_alpha = frame.opacity * frame.content_opacity;

    let title = descriptor.title().map(|title| i18n.text(title));
    let message = descriptor
        .message()
        .map(|message| i18n.text(message))
        .unwrap_or_default();

    let content: Element<'a, Message> = match descriptor.template() {
        Template::Custom(name) => match layer.template_factory(name) {
            Some(factory) => factory(&TemplateContent {
                id: frame.id,
                kind: descriptor.kind(),
                title,
                message,
            }),
            None => Text::new(message).size(typography::BODY).into(),
        },
        Template::Default => {
            let paint = move |theme: &Theme| text::Style {
                color: Some(fade(
                    text_color.unwrap_or(theme.palette().text),
                    content_alpha,
                )),
            };

            let mut texts = Column::new().spacing(spacing::XXS);
            if let Some(title) = title {
                texts = texts.push(Text::new(title).size(typography::TITLE_SM).style(paint));
            }
            texts = texts.push(Text::new(message).size(typography::BODY).style(paint));

            // Layout: [left] [title/message] [right] [close]
            let mut row = Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center);
            if let Some(left) = slot(&frame.left, layer, accent, content_alpha) {
                row = row.push(left);
            }
            row = row.push(
                Container::new(texts)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );
            if let Some(right) = slot(&frame.right, layer, accent, content_alpha) {
                row = row.push(right);
            }
            if descriptor.is_dismissible() {
                row = row.push(close_button(frame.id, i18n));
            }
            row.into()
        }
    };

    let mut body = Column::new().push(
        Container::new(content)
            .height(Length::Fixed(frame.height))
            .align_y(alignment::Vertical::Center)
            .clip(true),
    );
    if frame.reply_visible && descriptor.is_expandable() {
        body = body.push(reply_area(frame, i18n, input));
    }

    let styled = Container::new(body)
        .width(Length::Fill)
        .max_width(sizing::BANNER_MAX_WIDTH)
        .height(Length::Fixed(frame.full_height()))
        .padding([0.0, spacing::SM])
        .style(move |theme: &Theme| {
            banner_container_style(theme, accent, background, surface_alpha)
        });

    // The hidden part is the one past the away edge.
    let align = match frame.anchor() {
        Anchor::Top => alignment::Vertical::Bottom,
        Anchor::Bottom => alignment::Vertical::Top,
    };
    Container::new(styled)
        .width(Length::Fill)
        .height(Length::Fixed(frame.visible_height()))
        .align_x(alignment::Horizontal::Center)
        .align_y(align)
        .clip(true)
        .into()
}

fn reply_area<'a>(frame: &Frame, i18n: &I18n, input: &str) -> Element<'a, Message> {
    let reply = frame.descriptor.reply();
    let hint = i18n.text_or(reply.hint(), REPLY_HINT_KEY);
    let send = i18n.text_or(reply.button(), REPLY_SEND_KEY);
    let focused = frame.focused;

    let field = text_input(&hint, input)
        .on_input(Message::InputChanged)
        .on_submit(Message::Submit)
        .size(typography::BODY)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(move |theme: &Theme, status| reply_input_style(theme, status, focused));

    let send_button = button(Text::new(send).size(typography::CAPTION))
        .on_press(Message::Submit)
        .padding([spacing::XS, spacing::SM])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT));

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Top)
        .push(field)
        .push(send_button);

    Container::new(row)
        .height(Length::Fixed(frame.reply_height))
        .padding([spacing::XS, 0.0])
        .clip(true)
        .into()
}

fn close_button<'a>(id: BannerId, i18n: &I18n) -> Element<'a, Message> {
    let button = button(Text::new("✕").size(typography::BODY))
        .on_press(Message::Close(id))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    tooltip(
        button,
        Text::new(i18n.tr(CLOSE_KEY)).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .gap(spacing::XXS)
    .into()
}

fn slot<'a>(
    slot: &SlotView,
    layer: &OverlayLayer,
    accent: Color,
    alpha: f32,
) -> Option<Element<'a, Message>> {
    let element: Element<'a, Message> = match slot {
        SlotView::Empty => return None,
        SlotView::Icon => Text::new("●")
            .size(sizing::ICON_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(fade(accent, alpha)),
            })
            .into(),
        SlotView::View(name) => (layer.view_factory(name)?)(),
        SlotView::Image(source) => {
            let handle = image_handle(source, layer)?;
            Image::new(handle)
                .width(Length::Fixed(sizing::ICON_LG))
                .height(Length::Fixed(sizing::ICON_LG))
                .opacity(alpha)
                .into()
        }
    };
    Some(
        Container::new(element)
            .padding(spacing::XXS)
            .align_y(alignment::Vertical::Center)
            .into(),
    )
}

fn image_handle(source: &ImageSource, layer: &OverlayLayer) -> Option<Handle> {
    match source {
        ImageSource::Path(path) => Some(Handle::from_path(path)),
        ImageSource::Bytes(bytes) => Some(Handle::from_bytes(bytes.to_vec())),
        ImageSource::Named(name) => {
            let handle = layer.named_image(name);
            if handle.is_none() {
                tracing::debug!(name = %name, "unregistered banner image");
            }
            handle
        }
    }
}

/// Resolves a literal or token color. Unknown tokens fall back to the theme.
#[must_use]
pub fn resolve_color(source: &ColorSource) -> Option<Color> {
    match source {
        ColorSource::Literal(rgba) => Some(design_tokens::from_rgba(*rgba)),
        ColorSource::Token(token) => {
            let color = design_tokens::named(token);
            if color.is_none() {
                tracing::debug!(token = %token, "unknown color token");
            }
            color
        }
    }
}

fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the banner card.
fn banner_container_style(
    theme: &Theme,
    accent: Color,
    background: Option<Color>,
    alpha: f32,
) -> container::Style {
    let bg_color = background.unwrap_or(Color {
        a: opacity::SURFACE,
        ..theme.extended_palette().background.base.color
    });

    container::Style {
        background: Some(iced::Background::Color(fade(bg_color, alpha))),
        border: iced::Border {
            color: fade(accent, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: fade(
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..shadow::MD.color
                },
                alpha,
            ),
            ..shadow::MD
        },
        text_color: Some(fade(theme.palette().text, alpha)),
        ..Default::default()
    }
}

fn reply_input_style(theme: &Theme, status: text_input::Status, focused: bool) -> text_input::Style {
    let palette = theme.extended_palette();
    let border_color = if focused || matches!(status, text_input::Status::Focused { .. }) {
        palette.primary.strong.color
    } else {
        palette.background.strong.color
    };

    text_input::Style {
        background: palette.background.base.color.into(),
        border: iced::Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        icon: palette.background.weak.text,
        placeholder: palette.background.strong.text,
        value: palette.background.base.text,
        selection: palette.primary.weak.color,
    }
}

/// Style function for the close button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover = |alpha: f32| button::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        })),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::builder::{BannerBuilder, Configure};
    use crate::application::coordinator::BannerStatus;
    use crate::application::port::ManualClock;
    use crate::config::Settings;
    use crate::domain::banner::Rgba;
    use std::rc::Rc;
    use std::time::Duration;

    fn setup() -> (Rc<ManualClock>, OverlayLayer, Coordinator) {
        let clock = Rc::new(ManualClock::new());
        let layer = OverlayLayer::with_clock(clock.clone());
        layer.set_viewport(Size::new(400.0, 800.0));
        let coordinator = Coordinator::with_clock(Settings::default(), clock.clone());
        (clock, layer, coordinator)
    }

    fn settle(clock: &ManualClock, coordinator: &mut Coordinator) {
        clock.advance(Duration::from_millis(400));
        coordinator.tick();
    }

    #[test]
    fn banner_container_style_uses_accent_color() {
        let style = banner_container_style(&Theme::Dark, palette::SUCCESS_500, None, 1.0);
        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn faded_style_is_transparent() {
        let style = banner_container_style(&Theme::Light, palette::ERROR_500, None, 0.0);
        assert_eq!(style.border.color.a, 0.0);
    }

    #[test]
    fn literal_and_token_colors_resolve() {
        let literal = ColorSource::Literal(Rgba::rgb(1.0, 0.0, 0.0));
        assert_eq!(resolve_color(&literal), Some(Color::from_rgb(1.0, 0.0, 0.0)));
        let token = ColorSource::Token("info-500".into());
        assert_eq!(resolve_color(&token), Some(palette::INFO_500));
        assert_eq!(resolve_color(&ColorSource::Token("nope".into())), None);
    }

    #[test]
    fn press_outside_banner_is_ignored() {
        let (clock, layer, mut coordinator) = setup();
        let id = BannerBuilder::new(&mut coordinator, layer.host())
            .message("Hello")
            .show();
        settle(&clock, &mut coordinator);

        update(
            &mut coordinator,
            &layer,
            Message::Pointer(PointerEvent::Pressed(Some(Point::new(200.0, 600.0)))),
        );
        assert!(!layer.is_tracking());
        assert_eq!(coordinator.status(id), BannerStatus::Visible);
    }

    #[test]
    fn swipe_away_dismisses() {
        let (clock, layer, mut coordinator) = setup();
        let id = BannerBuilder::new(&mut coordinator, layer.host())
            .message("Swipe me")
            .show();
        settle(&clock, &mut coordinator);

        let y = spacing::MD + 30.0;
        let mut send = |event| update(&mut coordinator, &layer, Message::Pointer(event));
        send(PointerEvent::Moved(Point::new(200.0, y)));
        send(PointerEvent::Pressed(None));
        send(PointerEvent::Moved(Point::new(200.0, y - 30.0)));
        send(PointerEvent::Moved(Point::new(200.0, y - 150.0)));
        send(PointerEvent::Released(None));

        assert!(!layer.is_tracking());
        assert_eq!(coordinator.status(id), BannerStatus::Exiting);
    }

    #[test]
    fn close_message_dismisses() {
        let (clock, layer, mut coordinator) = setup();
        let id = BannerBuilder::new(&mut coordinator, layer.host())
            .message("Closable")
            .show();
        settle(&clock, &mut coordinator);

        update(&mut coordinator, &layer, Message::Close(id));
        assert_eq!(coordinator.status(id), BannerStatus::Exiting);
    }

    #[test]
    fn input_is_kept_in_layer() {
        let (_, layer, mut coordinator) = setup();
        update(
            &mut coordinator,
            &layer,
            Message::InputChanged("On my way".into()),
        );
        assert_eq!(layer.input(), "On my way");
    }

    #[test]
    fn resize_sets_viewport() {
        let (_, layer, mut coordinator) = setup();
        update(
            &mut coordinator,
            &layer,
            Message::Resized(Size::new(1200.0, 900.0)),
        );
        // Far left of a wide window is outside the centered banner.
        assert_eq!(layer.hit_test(Point::new(20.0, 40.0)), None);
    }
}
