use std::{fmt, sync::Arc, time::Duration};

use crate::{
    components::{LocalizableTextComponent, SpriteComponent},
    controls::{ControlState, PointerButton, TextBasedControl},
    geometry::{IntRect, Point, Rect, Size, Transformable, Vector},
    render::{Drawable, RenderStates, RenderTarget},
    strings::Strings,
    style::TextTheme,
    texture::Texture,
};

/// Listener invoked with the button that produced the event.
pub type ButtonCallback = Box<dyn FnMut(&Button)>;

/// Push button with a localized label.
///
/// Pressing shows the active sprite; releasing over the button restores the
/// default sprite and fires `on_released`. While pressed, `on_hold` fires
/// once per hold interval (see [`Button::update`]).
#[derive(Default)]
pub struct Button {
    control: TextBasedControl,
    on_released: Option<ButtonCallback>,
    on_hold: Option<ButtonCallback>,
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("control", &self.control)
            .field("on_released", &self.on_released.is_some())
            .field("on_hold", &self.on_hold.is_some())
            .finish()
    }
}

impl Button {
    /// Creates an enabled button without listeners.
    ///
    /// `sprite_default` and `sprite_active` are cut from `texture`; the
    /// label uses the theme's default style and is looked up as `key` in
    /// `strings`.
    pub fn new(
        position: Point,
        size: Size,
        texture: &Texture,
        sprite_default: IntRect,
        sprite_active: IntRect,
        theme: TextTheme,
        strings: Option<Arc<Strings>>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            control: TextBasedControl::new(
                position,
                size,
                texture,
                sprite_default,
                Some(sprite_active),
                theme,
                strings,
                key,
                Vector::zero(),
                true,
            ),
            on_released: None,
            on_hold: None,
        }
    }

    pub fn with_on_released(mut self, callback: impl FnMut(&Button) + 'static) -> Self {
        self.set_on_released(callback);
        self
    }

    pub fn with_on_hold(mut self, callback: impl FnMut(&Button) + 'static) -> Self {
        self.set_on_hold(callback);
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.set_enabled(enabled);
        self
    }

    pub fn set_on_released(&mut self, callback: impl FnMut(&Button) + 'static) {
        self.on_released = Some(Box::new(callback));
    }

    pub fn set_on_hold(&mut self, callback: impl FnMut(&Button) + 'static) {
        self.on_hold = Some(Box::new(callback));
    }

    pub fn state(&self) -> ControlState {
        self.control.state()
    }

    pub fn is_enabled(&self) -> bool {
        self.control.is_enabled()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.control.set_enabled(enabled);
        if !enabled {
            self.control.sprite_mut().set_use_alt(false);
        }
    }

    pub fn sprite(&self) -> &SpriteComponent {
        self.control.sprite()
    }

    pub fn label(&self) -> &LocalizableTextComponent {
        self.control.text()
    }

    pub fn label_mut(&mut self) -> &mut LocalizableTextComponent {
        self.control.text_mut()
    }

    pub fn control(&self) -> &TextBasedControl {
        &self.control
    }

    pub fn transformable(&self) -> &Transformable {
        self.control.transformable()
    }

    pub fn transformable_mut(&mut self) -> &mut Transformable {
        self.control.transformable_mut()
    }

    pub fn set_hold_interval(&mut self, interval: Duration) {
        self.control.set_hold_interval(interval);
    }

    pub fn global_bounds(&self) -> Rect {
        self.control.global_bounds()
    }

    pub fn contains(&self, world_pos: Point) -> bool {
        self.control.contains(world_pos)
    }

    pub fn on_clicked(&mut self, button: PointerButton, world_pos: Point) {
        self.control.on_clicked(button, world_pos);
        if self.control.state().holding {
            self.control.sprite_mut().set_use_alt(true);
        }
    }

    pub fn on_released_control(&mut self, button: PointerButton, world_pos: Point) {
        let was_holding = self.control.state().holding;
        self.control.on_released_control(button, world_pos);
        if was_holding && !self.control.state().holding {
            self.control.sprite_mut().set_use_alt(false);
            self.emit_released();
        }
    }

    pub fn on_released_outside(&mut self, button: PointerButton, world_pos: Point) {
        self.control.on_released_outside(button, world_pos);
        if !self.control.state().holding {
            self.control.sprite_mut().set_use_alt(false);
        }
    }

    pub fn on_entered(&mut self, world_pos: Point) {
        if !self.control.is_enabled() {
            return;
        }
        self.control.on_entered(world_pos);
        let holding = self.control.state().holding;
        self.control.sprite_mut().set_use_alt(holding);
    }

    pub fn on_left(&mut self, world_pos: Point) {
        if !self.control.is_enabled() {
            return;
        }
        self.control.on_left(world_pos);
        self.control.sprite_mut().set_use_alt(false);
    }

    /// Fires the hold listener.
    pub fn on_hold(&mut self) {
        if !self.control.is_enabled() {
            return;
        }
        if let Some(mut callback) = self.on_hold.take() {
            callback(self);
            self.on_hold.get_or_insert(callback);
        }
    }

    /// Advances the hold timer, firing the hold listener once per elapsed
    /// interval while the button is held.
    pub fn update(&mut self, elapsed: Duration) {
        for _ in 0..self.control.update(elapsed) {
            self.on_hold();
        }
    }

    fn emit_released(&mut self) {
        if let Some(mut callback) = self.on_released.take() {
            callback(self);
            self.on_released.get_or_insert(callback);
        }
    }
}

impl Drawable for Button {
    fn draw(&self, target: &mut dyn RenderTarget, states: &RenderStates) {
        self.control.draw(target, states);
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::{
        Canvas, color,
        geometry::{PixelSize, int_rect},
        style::TextStyle,
    };

    fn default_rect() -> IntRect {
        int_rect(0, 0, 16, 8)
    }

    fn active_rect() -> IntRect {
        int_rect(16, 0, 16, 8)
    }

    /// Button whose sprite sheet is red (default) and blue (active).
    fn button(released: &Rc<Cell<u32>>, held: &Rc<Cell<u32>>) -> Button {
        let mut rgba = Vec::new();
        for _ in 0..8 {
            for x in 0..32 {
                if x < 16 {
                    rgba.extend_from_slice(&[255, 0, 0, 255]);
                } else {
                    rgba.extend_from_slice(&[0, 0, 255, 255]);
                }
            }
        }
        let sheet = Texture::from_rgba(PixelSize::new(32, 8), &rgba).unwrap();
        let strings: Strings = [("ok", "OK")].into_iter().collect();

        let released = Rc::clone(released);
        let held = Rc::clone(held);
        Button::new(
            Point::new(0.0, 0.0),
            Size::new(16.0, 8.0),
            &sheet,
            default_rect(),
            active_rect(),
            TextTheme::uniform(TextStyle::default().shared()),
            Some(Arc::new(strings)),
            "ok",
        )
        .with_on_released(move |_| released.set(released.get() + 1))
        .with_on_hold(move |_| held.set(held.get() + 1))
    }

    fn counters() -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
        (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)))
    }

    const INSIDE: Point = Point::new(4.0, 4.0);

    #[test]
    fn label_is_localized() {
        let (released, held) = counters();
        assert_eq!(button(&released, &held).label().string(), "OK");
    }

    #[test]
    fn press_shows_active_sprite() {
        let (released, held) = counters();
        let mut button = button(&released, &held);

        button.on_clicked(PointerButton::Left, INSIDE);
        assert_eq!(button.sprite().current().texture_rect(), active_rect());
        assert_eq!(released.get(), 0);
    }

    #[test]
    fn release_over_button_fires_once() {
        let (released, held) = counters();
        let mut button = button(&released, &held);

        button.on_entered(INSIDE);
        button.on_clicked(PointerButton::Left, INSIDE);
        button.on_released_control(PointerButton::Left, INSIDE);

        assert_eq!(button.sprite().current().texture_rect(), default_rect());
        assert_eq!(released.get(), 1);

        // a stray release without a press does not fire again
        button.on_released_control(PointerButton::Left, INSIDE);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn leaving_while_holding_shows_default() {
        let (released, held) = counters();
        let mut button = button(&released, &held);

        button.on_entered(INSIDE);
        button.on_clicked(PointerButton::Left, INSIDE);
        button.on_left(Point::new(40.0, 40.0));

        assert!(button.state().holding);
        assert_eq!(button.sprite().current().texture_rect(), default_rect());
    }

    #[test]
    fn re_entering_while_holding_restores_active() {
        let (released, held) = counters();
        let mut button = button(&released, &held);

        button.on_clicked(PointerButton::Left, INSIDE);
        button.on_left(Point::new(40.0, 40.0));
        button.on_entered(INSIDE);
        assert_eq!(button.sprite().current().texture_rect(), active_rect());
    }

    #[test]
    fn release_outside_does_not_fire() {
        let (released, held) = counters();
        let mut button = button(&released, &held);

        button.on_clicked(PointerButton::Left, INSIDE);
        button.on_left(Point::new(40.0, 40.0));
        button.on_released_outside(PointerButton::Left, Point::new(40.0, 40.0));

        assert_eq!(released.get(), 0);
        assert!(!button.state().holding);
        assert_eq!(button.sprite().current().texture_rect(), default_rect());
    }

    #[test]
    fn hold_fires_per_interval() {
        let (released, held) = counters();
        let mut button = button(&released, &held);
        button.set_hold_interval(Duration::from_millis(100));

        button.update(Duration::from_millis(300));
        assert_eq!(held.get(), 0);

        button.on_clicked(PointerButton::Left, INSIDE);
        button.update(Duration::from_millis(250));
        assert_eq!(held.get(), 2);

        button.on_hold();
        assert_eq!(held.get(), 3);
    }

    #[test]
    fn disabled_button_is_inert() {
        let (released, held) = counters();
        let mut button = button(&released, &held).with_enabled(false);

        button.on_entered(INSIDE);
        button.on_clicked(PointerButton::Left, INSIDE);
        button.on_released_control(PointerButton::Left, INSIDE);
        button.on_hold();

        assert_eq!(button.sprite().current().texture_rect(), default_rect());
        assert_eq!(released.get(), 0);
        assert_eq!(held.get(), 0);
    }

    #[test]
    fn draws_sprite_for_current_state() {
        let (released, held) = counters();
        let mut button = button(&released, &held);
        let mut canvas = Canvas::new(PixelSize::new(16, 8));

        button.draw(&mut canvas, &RenderStates::default());
        assert_eq!(canvas.pixel(0, 0), Some(color::RED));

        button.on_clicked(PointerButton::Left, INSIDE);
        button.draw(&mut canvas, &RenderStates::default());
        assert_eq!(canvas.pixel(0, 0), Some(color::BLUE));
    }
}
