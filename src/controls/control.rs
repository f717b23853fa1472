use std::{sync::Arc, time::Duration};

use crate::{
    components::{LocalizableTextComponent, SpriteComponent},
    geometry::{IntRect, PixelSize, Point, Rect, Size, Transformable, Vector},
    render::{Drawable, RenderStates, RenderTarget},
    strings::Strings,
    style::TextTheme,
    texture::Texture,
};

/// Interval between two hold notifications while a control stays pressed.
pub const DEFAULT_HOLD_INTERVAL: Duration = Duration::from_millis(100);

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Pointer button that caused an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// Pointer interaction state of a control.
///
/// `hovering` follows enter/leave events; `holding` is set by a left press
/// on the control and cleared by the matching release, wherever it happens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlState {
    pub hovering: bool,
    pub holding: bool,
    pub enabled: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            hovering: false,
            holding: false,
            enabled: true,
        }
    }
}

/// Base of controls made of a sprite and a localized label.
///
/// The pointer hooks only track [`ControlState`]; concrete controls wrap
/// them to add their own side effects. Hooks are ignored while disabled.
#[derive(Clone, Debug)]
pub struct TextBasedControl {
    transformable: Transformable,
    size: Size,
    sprite: SpriteComponent,
    text: LocalizableTextComponent,
    theme: TextTheme,
    state: ControlState,
    hold_interval: Duration,
    hold_elapsed: Duration,
}

impl Default for TextBasedControl {
    fn default() -> Self {
        Self {
            transformable: Transformable::new(),
            size: Size::zero(),
            sprite: SpriteComponent::default(),
            text: LocalizableTextComponent::default(),
            theme: TextTheme::default(),
            state: ControlState::default(),
            hold_interval: DEFAULT_HOLD_INTERVAL,
            hold_elapsed: Duration::ZERO,
        }
    }
}

impl TextBasedControl {
    /// Creates a control at `position`.
    ///
    /// The sprite and the label both sit at the control's origin; the label
    /// canvas covers `size` and the label text is shifted by `text_offset`.
    pub fn new(
        position: Point,
        size: Size,
        texture: &Texture,
        sprite_default: IntRect,
        sprite_active: Option<IntRect>,
        theme: TextTheme,
        strings: Option<Arc<Strings>>,
        key: impl Into<String>,
        text_offset: Vector,
        enabled: bool,
    ) -> Self {
        let label_style = if enabled {
            Arc::clone(&theme.default)
        } else {
            Arc::clone(&theme.disabled)
        };
        let label_size = PixelSize::new(size.width.ceil() as u32, size.height.ceil() as u32);

        Self {
            transformable: Transformable::at(position),
            size,
            sprite: SpriteComponent::with_alt(
                Point::origin(),
                texture,
                sprite_default,
                sprite_active,
                false,
            ),
            text: LocalizableTextComponent::new(
                Point::origin(),
                label_size,
                Some(label_style),
                strings,
                key,
                text_offset,
            ),
            theme,
            state: ControlState {
                enabled,
                ..ControlState::default()
            },
            hold_interval: DEFAULT_HOLD_INTERVAL,
            hold_elapsed: Duration::ZERO,
        }
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    /// Enables or disables the control.
    ///
    /// Disabling drops any hover or hold in progress. The label switches to
    /// the theme's matching style.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.state.enabled == enabled {
            return;
        }
        self.state.enabled = enabled;
        if !enabled {
            self.state.hovering = false;
            self.state.holding = false;
            self.hold_elapsed = Duration::ZERO;
        }

        let style = if enabled {
            &self.theme.default
        } else {
            &self.theme.disabled
        };
        self.text.text_mut().set_style(Some(Arc::clone(style)));
    }

    pub fn theme(&self) -> &TextTheme {
        &self.theme
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn sprite(&self) -> &SpriteComponent {
        &self.sprite
    }

    pub fn sprite_mut(&mut self) -> &mut SpriteComponent {
        &mut self.sprite
    }

    pub fn text(&self) -> &LocalizableTextComponent {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut LocalizableTextComponent {
        &mut self.text
    }

    pub fn transformable(&self) -> &Transformable {
        &self.transformable
    }

    pub fn transformable_mut(&mut self) -> &mut Transformable {
        &mut self.transformable
    }

    pub fn position(&self) -> Point {
        self.transformable.position()
    }

    pub fn set_position(&mut self, position: Point) {
        self.transformable.set_position(position);
    }

    pub fn hold_interval(&self) -> Duration {
        self.hold_interval
    }

    pub fn set_hold_interval(&mut self, interval: Duration) {
        self.hold_interval = interval;
    }

    pub fn global_bounds(&self) -> Rect {
        self.transformable
            .transform()
            .outer_transformed_rect(&Rect::new(Point::origin(), self.size))
    }

    /// Hit test in the parent's coordinates.
    pub fn contains(&self, world_pos: Point) -> bool {
        self.global_bounds().contains(world_pos)
    }

    pub fn on_entered(&mut self, _world_pos: Point) {
        if !self.state.enabled {
            return;
        }
        self.state.hovering = true;
    }

    pub fn on_left(&mut self, _world_pos: Point) {
        if !self.state.enabled {
            return;
        }
        self.state.hovering = false;
    }

    pub fn on_clicked(&mut self, button: PointerButton, _world_pos: Point) {
        if !self.state.enabled || button != PointerButton::Left {
            return;
        }
        self.state.holding = true;
        self.hold_elapsed = Duration::ZERO;
    }

    /// Release while the pointer is over the control.
    pub fn on_released_control(&mut self, button: PointerButton, _world_pos: Point) {
        if !self.state.enabled || button != PointerButton::Left {
            return;
        }
        self.state.holding = false;
        self.state.hovering = true;
    }

    /// Release while the pointer is somewhere else.
    pub fn on_released_outside(&mut self, button: PointerButton, _world_pos: Point) {
        if !self.state.enabled || button != PointerButton::Left {
            return;
        }
        self.state.holding = false;
        self.state.hovering = false;
    }

    /// Advances the hold timer and returns how many hold intervals elapsed.
    pub fn update(&mut self, elapsed: Duration) -> u32 {
        if !self.state.enabled || !self.state.holding || self.hold_interval.is_zero() {
            self.hold_elapsed = Duration::ZERO;
            return 0;
        }

        self.hold_elapsed = self.hold_elapsed.saturating_add(elapsed);
        let interval = self.hold_interval.as_nanos();
        let held = self.hold_elapsed.as_nanos();
        let remainder = held % interval;
        self.hold_elapsed = Duration::new(
            (remainder / NANOS_PER_SEC) as u64,
            (remainder % NANOS_PER_SEC) as u32,
        );
        u32::try_from(held / interval).unwrap_or(u32::MAX)
    }
}

impl Drawable for TextBasedControl {
    fn draw(&self, target: &mut dyn RenderTarget, states: &RenderStates) {
        let states = states.combined(&self.transformable.transform());
        self.sprite.draw(target, &states);
        self.text.draw(target, &states);
    }
}
