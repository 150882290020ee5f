// SPDX-License-Identifier: MPL-2.0
//! Shared overlay layer hosting banner surfaces.
//!
//! An [`OverlayLayer`] is the [`Host`] of one screen. It hands out an
//! [`OverlaySurface`] per displayed banner; surfaces turn the coordinator's
//! transition requests into eased [`Tween`]s stored in the layer. The view
//! samples them through [`OverlayLayer::frames`] on every redraw.
//!
//! The layer is a cheap `Rc` handle: the application keeps one clone for
//! rendering and gives [`OverlayLayer::host`] to the banner calls.

use crate::application::port::{
    Clock, Entrance, Exit, ExitStyle, Host, PresentationSurface, SurfaceError, SystemClock,
};
use crate::domain::banner::{
    Anchor, BannerDescriptor, BannerId, BannerKind, ImageSource, Slot, SlotContent, Template,
};
use crate::ui::banner::Message;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::easing::{Easing, Tween};
use iced::widget::image::Handle;
use iced::{Element, Point, Size};
use std::cell::RefCell;
use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Builds a caller-registered slot view.
pub type ViewFactory = Rc<dyn Fn() -> Element<'static, Message>>;

/// Builds a caller-registered banner layout.
pub type TemplateFactory = Rc<dyn Fn(&TemplateContent) -> Element<'static, Message>>;

/// Resolved text handed to a custom template.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateContent {
    pub id: BannerId,
    pub kind: BannerKind,
    pub title: Option<String>,
    pub message: String,
}

/// What a slot shows once remote images are loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotView {
    Empty,
    Icon,
    Image(ImageSource),
    View(String),
}

/// Sampled state of one surface.
#[derive(Debug, Clone)]
pub struct Frame {
    pub id: BannerId,
    pub descriptor: BannerDescriptor,
    /// Body height, without the reply area.
    pub height: f32,
    /// Displacement toward the away edge.
    pub offset: f32,
    pub opacity: f32,
    pub content_opacity: f32,
    pub reply_height: f32,
    pub reply_visible: bool,
    pub reply_expanded: bool,
    pub focused: bool,
    pub exiting: bool,
    pub left: SlotView,
    pub right: SlotView,
}

impl Frame {
    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.descriptor.anchor()
    }

    /// Full height including the open reply area.
    #[must_use]
    pub fn full_height(&self) -> f32 {
        self.height + self.reply_height
    }

    /// Part of the banner left on screen once slid toward the away edge.
    #[must_use]
    pub fn visible_height(&self) -> f32 {
        (self.full_height() - self.offset.max(0.0)).max(0.0)
    }
}

struct SurfaceState {
    id: BannerId,
    descriptor: BannerDescriptor,
    attached: bool,
    height: Tween,
    offset: Tween,
    opacity: Tween,
    content_opacity: Tween,
    reply_height: Tween,
    reply_visible: bool,
    reply_expanded: bool,
    focused: bool,
    exiting: bool,
    left: SlotView,
    right: SlotView,
}

impl SurfaceState {
    fn tweens(&self) -> [&Tween; 5] {
        [
            &self.height,
            &self.offset,
            &self.opacity,
            &self.content_opacity,
            &self.reply_height,
        ]
    }

    fn frame(&self, now: Instant) -> Frame {
        Frame {
            id: self.id,
            descriptor: self.descriptor.clone(),
            height: self.height.value(now),
            offset: self.offset.value(now),
            opacity: self.opacity.value(now),
            content_opacity: self.content_opacity.value(now),
            reply_height: self.reply_height.value(now),
            reply_visible: self.reply_visible,
            reply_expanded: self.reply_expanded,
            focused: self.focused,
            exiting: self.exiting,
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

#[derive(Default)]
struct LayerState {
    available: bool,
    viewport: Option<Size>,
    surfaces: Vec<SurfaceState>,
    input: String,
    cursor: Option<Point>,
    tracking: bool,
    views: HashMap<String, ViewFactory>,
    templates: HashMap<String, TemplateFactory>,
    images: HashMap<String, Handle>,
}

impl LayerState {
    fn surface_mut(&mut self, id: BannerId) -> Option<&mut SurfaceState> {
        self.surfaces.iter_mut().find(|surface| surface.id == id)
    }

    fn surface(&self, id: BannerId) -> Option<&SurfaceState> {
        self.surfaces.iter().find(|surface| surface.id == id)
    }

    fn expanded_reply_height(&self, body: f32) -> f32 {
        match self.viewport {
            Some(size) => (size.height - 2.0 * spacing::MD - body)
                .clamp(sizing::INPUT_HEIGHT, sizing::REPLY_EXPANDED_HEIGHT),
            None => sizing::REPLY_EXPANDED_HEIGHT,
        }
    }

    fn banner_width(&self) -> Option<f32> {
        self.viewport
            .map(|size| (size.width - 2.0 * spacing::MD).min(sizing::BANNER_MAX_WIDTH))
    }
}

/// Banner layer of one screen.
#[derive(Clone)]
pub struct OverlayLayer {
    state: Rc<RefCell<LayerState>>,
    clock: Rc<dyn Clock>,
}

impl OverlayLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Rc::new(SystemClock))
    }

    /// Layer sampling tweens with `clock`. Share the coordinator's clock.
    #[must_use]
    pub fn with_clock(clock: Rc<dyn Clock>) -> Self {
        let state = LayerState {
            available: true,
            ..LayerState::default()
        };
        Self {
            state: Rc::new(RefCell::new(state)),
            clock,
        }
    }

    /// This layer as a banner host.
    #[must_use]
    pub fn host(&self) -> Rc<dyn Host> {
        Rc::new(self.clone())
    }

    /// Marks the screen as gone (or back). Unavailable layers get no banners.
    pub fn set_available(&self, available: bool) {
        self.state.borrow_mut().available = available;
    }

    pub fn set_viewport(&self, size: Size) {
        self.state.borrow_mut().viewport = Some(size);
    }

    /// Registers a view for `Configure::view(side, name)`.
    pub fn register_view(
        &self,
        name: impl Into<String>,
        view: impl Fn() -> Element<'static, Message> + 'static,
    ) {
        self.state
            .borrow_mut()
            .views
            .insert(name.into(), Rc::new(view));
    }

    /// Registers a layout for `Configure::template(name)`.
    pub fn register_template(
        &self,
        name: impl Into<String>,
        template: impl Fn(&TemplateContent) -> Element<'static, Message> + 'static,
    ) {
        self.state
            .borrow_mut()
            .templates
            .insert(name.into(), Rc::new(template));
    }

    /// Registers an image for `ImageSource::Named`.
    pub fn register_image(&self, name: impl Into<String>, handle: Handle) {
        self.state.borrow_mut().images.insert(name.into(), handle);
    }

    #[must_use]
    pub fn view_factory(&self, name: &str) -> Option<ViewFactory> {
        self.state.borrow().views.get(name).cloned()
    }

    #[must_use]
    pub fn template_factory(&self, name: &str) -> Option<TemplateFactory> {
        self.state.borrow().templates.get(name).cloned()
    }

    #[must_use]
    pub fn named_image(&self, name: &str) -> Option<Handle> {
        self.state.borrow().images.get(name).cloned()
    }

    /// Samples every attached surface, bottom-most first.
    #[must_use]
    pub fn frames(&self) -> Vec<Frame> {
        let now = self.clock.now();
        self.state
            .borrow()
            .surfaces
            .iter()
            .filter(|surface| surface.attached)
            .map(|surface| surface.frame(now))
            .collect()
    }

    #[must_use]
    pub fn frame(&self, id: BannerId) -> Option<Frame> {
        let now = self.clock.now();
        self.state
            .borrow()
            .surface(id)
            .filter(|surface| surface.attached)
            .map(|surface| surface.frame(now))
    }

    #[must_use]
    pub fn surface_count(&self) -> usize {
        self.state.borrow().surfaces.len()
    }

    /// Whether any transition is still running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        let now = self.clock.now();
        self.state.borrow().surfaces.iter().any(|surface| {
            surface.attached && surface.tweens().iter().any(|t| !t.is_finished(now))
        })
    }

    #[must_use]
    pub fn input(&self) -> String {
        self.state.borrow().input.clone()
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.state.borrow_mut().input = text.into();
    }

    pub fn set_cursor(&self, point: Point) {
        self.state.borrow_mut().cursor = Some(point);
    }

    pub fn clear_cursor(&self) {
        self.state.borrow_mut().cursor = None;
    }

    /// Last known pointer position.
    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.state.borrow().cursor
    }

    /// Starts routing pointer motion to the gesture machine.
    pub fn begin_tracking(&self) {
        self.state.borrow_mut().tracking = true;
    }

    /// Stops routing. Returns whether a gesture was being tracked.
    pub fn end_tracking(&self) -> bool {
        std::mem::take(&mut self.state.borrow_mut().tracking)
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.state.borrow().tracking
    }

    /// Top-most settled banner under `point`.
    ///
    /// Without a known viewport only top-anchored banners can be hit, across
    /// the full width.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<BannerId> {
        let now = self.clock.now();
        let state = self.state.borrow();
        let width = state.banner_width();

        state
            .surfaces
            .iter()
            .rev()
            .filter(|surface| surface.attached && !surface.exiting)
            .find(|surface| {
                let frame = surface.frame(now);
                let visible = frame.visible_height();
                let within_x = match (width, state.viewport) {
                    (Some(width), Some(size)) => {
                        let left = (size.width - width) / 2.0;
                        point.x >= left && point.x <= left + width
                    }
                    _ => true,
                };
                let within_y = match frame.anchor() {
                    Anchor::Top => point.y >= spacing::MD && point.y <= spacing::MD + visible,
                    Anchor::Bottom => state.viewport.is_some_and(|size| {
                        let bottom = size.height - spacing::MD;
                        point.y >= bottom - visible && point.y <= bottom
                    }),
                };
                within_x && within_y
            })
            .map(|surface| surface.id)
    }
}

impl Default for OverlayLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OverlayLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayLayer")
            .field("surfaces", &self.surface_count())
            .finish_non_exhaustive()
    }
}

/// Layout height of a banner before it is drawn.
#[must_use]
pub fn estimate_height(descriptor: &BannerDescriptor) -> f32 {
    let title_line = if descriptor.title().is_some() && descriptor.message().is_some() {
        sizing::TITLE_LINE
    } else {
        0.0
    };
    sizing::BANNER_MIN_HEIGHT + title_line
}

fn resolve_slot(slot: &Slot, default_icon: bool) -> SlotView {
    match slot.resolve(default_icon) {
        SlotContent::Empty => SlotView::Empty,
        SlotContent::DefaultIcon => SlotView::Icon,
        SlotContent::CustomView(name) => SlotView::View(name.to_string()),
        SlotContent::Image(image) => SlotView::Image(image.clone()),
        SlotContent::Remote(remote) => {
            let loaded = catch_unwind(AssertUnwindSafe(|| remote.loader.load(&remote.url)))
                .unwrap_or_else(|_| {
                    tracing::error!(url = %remote.url, "banner image loader panicked");
                    None
                });
            match loaded {
                Some(image) => SlotView::Image(image),
                None => {
                    tracing::debug!(url = %remote.url, "remote banner image unavailable");
                    match (&slot.image, default_icon) {
                        (Some(image), _) => SlotView::Image(image.clone()),
                        (None, true) => SlotView::Icon,
                        (None, false) => SlotView::Empty,
                    }
                }
            }
        }
    }
}

impl Host for OverlayLayer {
    fn is_available(&self) -> bool {
        self.state.borrow().available
    }

    fn create_surface(
        &self,
        id: BannerId,
        descriptor: &BannerDescriptor,
    ) -> Result<Box<dyn PresentationSurface>, SurfaceError> {
        if !self.is_available() {
            return Err(SurfaceError::HostUnavailable);
        }

        // Loaders are caller code and may reach back into the layer, so no
        // borrow is held while they run.
        let default_icon = descriptor.kind() != BannerKind::Custom;
        let left = resolve_slot(descriptor.left(), default_icon);
        let right = resolve_slot(descriptor.right(), false);

        let mut state = self.state.borrow_mut();
        if !state.available {
            return Err(SurfaceError::HostUnavailable);
        }
        if let Template::Custom(name) = descriptor.template() {
            if !state.templates.contains_key(name) {
                return Err(SurfaceError::Inflate(format!("unknown template `{name}`")));
            }
        }
        for slot in [&left, &right] {
            if let SlotView::View(name) = slot {
                if !state.views.contains_key(name) {
                    return Err(SurfaceError::Inflate(format!("unknown view `{name}`")));
                }
            }
        }

        let now = self.clock.now();
        let height = estimate_height(descriptor);
        state.surfaces.push(SurfaceState {
            id,
            descriptor: descriptor.clone(),
            attached: false,
            height: Tween::fixed(height, now),
            offset: Tween::fixed(height, now),
            opacity: Tween::fixed(1.0, now),
            content_opacity: Tween::fixed(1.0, now),
            reply_height: Tween::fixed(0.0, now),
            reply_visible: false,
            reply_expanded: false,
            focused: false,
            exiting: false,
            left,
            right,
        });

        Ok(Box::new(OverlaySurface {
            id,
            layer: self.clone(),
        }))
    }
}

/// One banner's handle into the layer.
pub struct OverlaySurface {
    id: BannerId,
    layer: OverlayLayer,
}

impl OverlaySurface {
    fn update(&self, f: impl FnOnce(&mut SurfaceState, Instant)) {
        let now = self.layer.clock.now();
        if let Some(surface) = self.layer.state.borrow_mut().surface_mut(self.id) {
            f(surface, now);
        }
    }
}

impl PresentationSurface for OverlaySurface {
    fn show(&mut self, entrance: Entrance) -> Result<(), SurfaceError> {
        let now = self.layer.clock.now();
        let mut state = self.layer.state.borrow_mut();
        let surface = state
            .surface_mut(self.id)
            .ok_or_else(|| SurfaceError::Position("surface was removed".into()))?;

        let height = surface.height.target();
        surface.attached = true;
        surface.offset = Tween::new(height, 0.0, now, entrance.duration, Easing::EaseOut);
        if !entrance.content_delay.is_zero() {
            surface.content_opacity = Tween::new(
                0.0,
                1.0,
                now,
                entrance.content_fade,
                Easing::Linear,
            )
                .delayed(entrance.content_delay);
        }
        Ok(())
    }

    fn measured_height(&self) -> f32 {
        self.layer
            .state
            .borrow()
            .surface(self.id)
            .map_or(0.0, |surface| surface.height.target())
    }

    fn follow_drag(&mut self, offset: f32) {
        self.update(|surface, now| surface.offset.set(offset, now));
    }

    fn settle(&mut self, duration: Duration) {
        self.update(|surface, now| {
            surface.offset.retarget(0.0, now, duration, Easing::EaseOut);
        });
    }

    fn set_reply_height(&mut self, height: f32) {
        self.update(|surface, now| surface.reply_height.set(height.max(0.0), now));
    }

    fn reveal_reply(&mut self) {
        self.update(|surface, _| surface.reply_visible = true);
    }

    fn expand_reply(&mut self, duration: Duration) {
        let now = self.layer.clock.now();
        let mut state = self.layer.state.borrow_mut();
        let body = state
            .surface(self.id)
            .map_or(0.0, |surface| surface.height.target());
        let target = state.expanded_reply_height(body);
        if let Some(surface) = state.surface_mut(self.id) {
            surface.reply_visible = true;
            surface.reply_expanded = true;
            surface
                .reply_height
                .retarget(target, now, duration, Easing::EaseOut);
        }
    }

    fn collapse_reply(&mut self, duration: Duration) {
        self.update(move |surface, now| {
            surface.reply_visible = false;
            surface.reply_expanded = false;
            surface
                .reply_height
                .retarget(0.0, now, duration, Easing::EaseOut);
        });
    }

    fn set_input_focus(&mut self, focused: bool) {
        self.update(|surface, _| surface.focused = focused);
    }

    fn clear_input(&mut self) {
        self.layer.state.borrow_mut().input.clear();
    }

    fn resize(&mut self, height: f32, duration: Duration) {
        self.update(|surface, now| {
            surface
                .height
                .retarget(height.max(0.0), now, duration, Easing::EaseInOut);
        });
    }

    fn fade_content(&mut self, opacity: f32, duration: Duration) {
        self.update(|surface, now| {
            surface
                .content_opacity
                .retarget(opacity.clamp(0.0, 1.0), now, duration, Easing::Linear);
        });
    }

    fn dismiss(&mut self, exit: Exit) {
        self.update(|surface, now| {
            surface.exiting = true;
            surface.focused = false;
            match exit.style {
                ExitStyle::Slide => {
                    let away = surface.height.target() + surface.reply_height.target();
                    surface
                        .offset
                        .retarget(away, now, exit.duration, Easing::EaseIn);
                }
                ExitStyle::RollUp => {
                    surface
                        .height
                        .retarget(0.0, now, exit.duration, Easing::EaseIn);
                    surface
                        .reply_height
                        .retarget(0.0, now, exit.duration, Easing::EaseIn);
                    surface
                        .content_opacity
                        .retarget(0.0, now, exit.duration, Easing::Linear);
                }
                ExitStyle::Fade => {
                    surface
                        .opacity
                        .retarget(0.0, now, exit.duration, Easing::Linear);
                }
            }
        });
    }

    fn teardown(&mut self) {
        let mut state = self.layer.state.borrow_mut();
        let Some(index) = state.surfaces.iter().position(|s| s.id == self.id) else {
            return;
        };
        let removed = state.surfaces.remove(index);
        if removed.reply_visible {
            state.input.clear();
        }
        if !state.surfaces.iter().any(|s| s.attached && !s.exiting) {
            state.tracking = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::ManualClock;
    use crate::domain::banner::{Hook, RemoteImage, TextSource};
    use crate::test_utils::assert_abs_diff_eq;

    const MS_100: Duration = Duration::from_millis(100);

    fn layer() -> (Rc<ManualClock>, OverlayLayer) {
        let clock = Rc::new(ManualClock::new());
        let layer = OverlayLayer::with_clock(clock.clone());
        (clock, layer)
    }

    fn entrance(delay: Duration) -> Entrance {
        Entrance {
            anchor: Anchor::Top,
            duration: MS_100,
            content_delay: delay,
            content_fade: MS_100,
        }
    }

    fn shown(layer: &OverlayLayer) -> (BannerId, Box<dyn PresentationSurface>) {
        let id = BannerId::new();
        let mut surface = layer
            .create_surface(id, &BannerDescriptor::default())
            .expect("surface");
        surface.show(entrance(Duration::ZERO)).expect("shown");
        (id, surface)
    }

    #[test]
    fn surface_is_hidden_until_shown() {
        let (_, layer) = layer();
        let id = BannerId::new();
        let mut surface = layer
            .create_surface(id, &BannerDescriptor::default())
            .expect("surface");
        assert!(layer.frames().is_empty());

        surface.show(entrance(Duration::ZERO)).expect("shown");
        let frame = layer.frame(id).expect("attached");
        assert_abs_diff_eq!(frame.offset, frame.height);
        assert_abs_diff_eq!(frame.visible_height(), 0.0);
    }

    #[test]
    fn entrance_slides_to_rest() {
        let (clock, layer) = layer();
        let (id, _surface) = shown(&layer);
        assert!(layer.is_animating());

        clock.advance(MS_100);
        let frame = layer.frame(id).expect("attached");
        assert_abs_diff_eq!(frame.offset, 0.0);
        assert_abs_diff_eq!(frame.visible_height(), sizing::BANNER_MIN_HEIGHT);
        assert!(!layer.is_animating());
    }

    #[test]
    fn delayed_content_stays_hidden() {
        let (clock, layer) = layer();
        let id = BannerId::new();
        let mut surface = layer
            .create_surface(id, &BannerDescriptor::default())
            .expect("surface");
        surface.show(entrance(Duration::from_millis(200))).expect("shown");

        clock.advance(Duration::from_millis(150));
        assert_abs_diff_eq!(layer.frame(id).expect("frame").content_opacity, 0.0);
        clock.advance(Duration::from_millis(200));
        assert_abs_diff_eq!(layer.frame(id).expect("frame").content_opacity, 1.0);
    }

    #[test]
    fn unavailable_layer_refuses_surfaces() {
        let (_, layer) = layer();
        layer.set_available(false);
        assert!(!layer.is_available());
        let result = layer.create_surface(BannerId::new(), &BannerDescriptor::default());
        assert!(matches!(result, Err(SurfaceError::HostUnavailable)));
    }

    #[test]
    fn unknown_template_fails_to_inflate() {
        let (_, layer) = layer();
        let descriptor = BannerDescriptor {
            template: Template::Custom("compact".into()),
            ..BannerDescriptor::default()
        };
        let result = layer.create_surface(BannerId::new(), &descriptor);
        assert!(matches!(result, Err(SurfaceError::Inflate(_))));

        layer.register_template("compact", |content| {
            iced::widget::text(content.message.clone()).into()
        });
        assert!(layer.create_surface(BannerId::new(), &descriptor).is_ok());
    }

    #[test]
    fn remote_image_is_loaded_once_at_creation() {
        let (_, layer) = layer();
        let mut descriptor = BannerDescriptor::default();
        descriptor.left.remote = Some(RemoteImage {
            url: "avatar".into(),
            loader: Hook::loader(|url| Some(ImageSource::Named(url.to_uppercase()))),
        });
        let id = BannerId::new();
        let mut surface = layer.create_surface(id, &descriptor).expect("surface");
        surface.show(entrance(Duration::ZERO)).expect("shown");

        let frame = layer.frame(id).expect("frame");
        assert_eq!(frame.left, SlotView::Image(ImageSource::Named("AVATAR".into())));
        assert_eq!(frame.right, SlotView::Empty);
    }

    #[test]
    fn failed_remote_load_falls_back_to_icon() {
        let mut slot = Slot::default();
        slot.remote = Some(RemoteImage {
            url: "offline".into(),
            loader: Hook::loader(|_| None),
        });
        assert_eq!(resolve_slot(&slot, true), SlotView::Icon);
        assert_eq!(resolve_slot(&slot, false), SlotView::Empty);
    }

    #[test]
    fn panicking_loader_falls_back_to_icon() {
        let (_, layer) = layer();
        let mut descriptor = BannerDescriptor {
            message: Some(TextSource::Literal("avatar".into())),
            ..BannerDescriptor::default()
        };
        descriptor.left.remote = Some(RemoteImage {
            url: "https://example.invalid/a.png".into(),
            loader: Hook::loader(|_| panic!("loader bug")),
        });

        let id = BannerId::new();
        let mut surface = layer
            .create_surface(id, &descriptor)
            .expect("loader panic is contained");
        surface.show(entrance(Duration::ZERO)).expect("attached");

        let frame = layer.frame(id).expect("frame");
        assert_eq!(frame.left, SlotView::Icon);
    }


    #[test]
    fn title_adds_a_line() {
        let descriptor = BannerDescriptor {
            title: Some(TextSource::Literal("Title".into())),
            message: Some(TextSource::Literal("Body".into())),
            ..BannerDescriptor::default()
        };
        assert_abs_diff_eq!(
            estimate_height(&descriptor),
            sizing::BANNER_MIN_HEIGHT + sizing::TITLE_LINE
        );
    }

    #[test]
    fn slide_exit_moves_fully_away() {
        let (clock, layer) = layer();
        let (id, mut surface) = shown(&layer);
        clock.advance(MS_100);

        surface.dismiss(Exit {
            style: ExitStyle::Slide,
            duration: MS_100,
        });
        clock.advance(MS_100);
        let frame = layer.frame(id).expect("frame");
        assert!(frame.exiting);
        assert_abs_diff_eq!(frame.visible_height(), 0.0);
    }

    #[test]
    fn roll_up_collapses_height() {
        let (clock, layer) = layer();
        let (id, mut surface) = shown(&layer);
        clock.advance(MS_100);

        surface.dismiss(Exit {
            style: ExitStyle::RollUp,
            duration: MS_100,
        });
        clock.advance(MS_100);
        let frame = layer.frame(id).expect("frame");
        assert_abs_diff_eq!(frame.height, 0.0);
        assert_abs_diff_eq!(frame.content_opacity, 0.0);
    }

    #[test]
    fn reply_area_expands_and_collapses() {
        let (clock, layer) = layer();
        let (id, mut surface) = shown(&layer);
        layer.set_viewport(Size::new(400.0, 1000.0));

        surface.set_reply_height(30.0);
        surface.reveal_reply();
        surface.expand_reply(MS_100);
        clock.advance(Duration::from_millis(250));
        let frame = layer.frame(id).expect("frame");
        assert!(frame.reply_visible && frame.reply_expanded);
        assert_abs_diff_eq!(frame.reply_height, sizing::REPLY_EXPANDED_HEIGHT);

        surface.collapse_reply(MS_100);
        clock.advance(Duration::from_millis(250));
        let frame = layer.frame(id).expect("frame");
        assert!(!frame.reply_visible);
        assert_abs_diff_eq!(frame.reply_height, 0.0);
    }

    #[test]
    fn teardown_removes_and_clears_input() {
        let (_, layer) = layer();
        let (_, mut surface) = shown(&layer);
        surface.reveal_reply();
        layer.set_input("draft");
        layer.begin_tracking();

        surface.teardown();
        assert_eq!(layer.surface_count(), 0);
        assert_eq!(layer.input(), "");
        assert!(!layer.is_tracking());
        // Calls after teardown are ignored.
        surface.follow_drag(10.0);
        assert_abs_diff_eq!(surface.measured_height(), 0.0);
    }

    #[test]
    fn hit_test_follows_visible_area() {
        let (clock, layer) = layer();
        let (id, _surface) = shown(&layer);
        layer.set_viewport(Size::new(400.0, 800.0));
        // Still fully above the edge.
        assert_eq!(layer.hit_test(Point::new(200.0, spacing::MD + 10.0)), None);

        clock.advance(MS_100);
        assert_eq!(layer.hit_test(Point::new(200.0, spacing::MD + 10.0)), Some(id));
        assert_eq!(layer.hit_test(Point::new(200.0, 500.0)), None);
        assert_eq!(layer.hit_test(Point::new(2.0, spacing::MD + 10.0)), None);
    }
}
