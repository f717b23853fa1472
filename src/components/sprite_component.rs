use crate::{
    geometry::{IntRect, Point, Rect, Transformable},
    render::{Drawable, RenderStates, RenderTarget},
    sprite::Sprite,
    texture::Texture,
};

/// One or two sprites cut from the same texture, of which one is shown.
///
/// The alternative sprite is optional; without it the default sprite is
/// shown whatever [`Self::set_use_alt`] was told.
#[derive(Clone, Debug, Default)]
pub struct SpriteComponent {
    transformable: Transformable,
    sprite_default: Sprite,
    sprite_alt: Option<Sprite>,
    use_alt: bool,
}

impl SpriteComponent {
    /// Component without an alternative sprite.
    pub fn new(position: Point, texture: &Texture, rect: IntRect) -> Self {
        Self::with_alt(position, texture, rect, None, false)
    }

    /// Component whose alternative sprite, if any, shows `alt_rect`.
    pub fn with_alt(
        position: Point,
        texture: &Texture,
        default_rect: IntRect,
        alt_rect: Option<IntRect>,
        use_alt: bool,
    ) -> Self {
        Self {
            transformable: Transformable::at(position),
            sprite_default: Sprite::with_rect(texture.clone(), default_rect),
            sprite_alt: alt_rect.map(|rect| Sprite::with_rect(texture.clone(), rect)),
            use_alt,
        }
    }

    pub fn has_alt(&self) -> bool {
        self.sprite_alt.is_some()
    }

    /// Selects the alternative (`true`) or default (`false`) sprite.
    pub fn set_use_alt(&mut self, use_alt: bool) {
        if use_alt && self.sprite_alt.is_none() {
            log::debug!("Alternative sprite requested but none was provided.");
        }
        self.use_alt = use_alt;
    }

    /// Whether the alternative sprite is the one being shown.
    pub fn uses_alt(&self) -> bool {
        self.use_alt && self.sprite_alt.is_some()
    }

    /// The sprite currently shown.
    pub fn current(&self) -> &Sprite {
        match &self.sprite_alt {
            Some(alt) if self.use_alt => alt,
            _ => &self.sprite_default,
        }
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

    pub fn local_bounds(&self) -> Rect {
        self.current().local_bounds()
    }

    pub fn global_bounds(&self) -> Rect {
        self.transformable
            .transform()
            .outer_transformed_rect(&self.current().global_bounds())
    }
}

impl Drawable for SpriteComponent {
    fn draw(&self, target: &mut dyn RenderTarget, states: &RenderStates) {
        let states = states.combined(&self.transformable.transform());
        self.current().draw(target, &states);
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Canvas,
        color::{BLUE, RED},
        geometry::{PixelSize, int_rect},
    };
    use approx::assert_relative_eq;

    /// 8x4 sheet: red on the left half, blue on the right half.
    fn sheet() -> Texture {
        let mut rgba = Vec::new();
        for _ in 0..4 {
            for x in 0..8 {
                if x < 4 {
                    rgba.extend_from_slice(&[255, 0, 0, 255]);
                } else {
                    rgba.extend_from_slice(&[0, 0, 255, 255]);
                }
            }
        }
        Texture::from_rgba(PixelSize::new(8, 4), &rgba).unwrap()
    }

    fn default_rect() -> IntRect {
        int_rect(0, 0, 4, 4)
    }

    fn alt_rect() -> IntRect {
        int_rect(4, 0, 4, 2)
    }

    #[test]
    fn without_alt_always_default() {
        let mut component = SpriteComponent::new(Point::origin(), &sheet(), default_rect());
        component.set_use_alt(true);
        assert_eq!(component.current().texture_rect(), default_rect());
        assert!(!component.uses_alt());
        assert!(!component.has_alt());
    }

    #[test]
    fn alt_toggles_deterministically() {
        let mut component = SpriteComponent::with_alt(
            Point::origin(),
            &sheet(),
            default_rect(),
            Some(alt_rect()),
            false,
        );
        assert_eq!(component.current().texture_rect(), default_rect());

        for _ in 0..3 {
            component.set_use_alt(true);
            assert_eq!(component.current().texture_rect(), alt_rect());
            component.set_use_alt(false);
            assert_eq!(component.current().texture_rect(), default_rect());
        }
    }

    #[test]
    fn starts_on_alt_when_asked() {
        let component = SpriteComponent::with_alt(
            Point::origin(),
            &sheet(),
            default_rect(),
            Some(alt_rect()),
            true,
        );
        assert!(component.uses_alt());
    }

    #[test]
    fn bounds_track_active_sprite() {
        let mut component = SpriteComponent::with_alt(
            Point::new(100.0, 50.0),
            &sheet(),
            default_rect(),
            Some(alt_rect()),
            false,
        );
        assert_relative_eq!(component.local_bounds().height(), 4.0);

        component.set_use_alt(true);
        let local = component.local_bounds();
        assert_relative_eq!(local.min_x(), 0.0);
        assert_relative_eq!(local.height(), 2.0);

        let global = component.global_bounds();
        assert_relative_eq!(global.min_x(), 100.0);
        assert_relative_eq!(global.min_y(), 50.0);
        assert_relative_eq!(global.height(), 2.0);
    }

    #[test]
    fn draws_active_sprite() {
        let mut component = SpriteComponent::with_alt(
            Point::new(1.0, 1.0),
            &sheet(),
            default_rect(),
            Some(alt_rect()),
            false,
        );
        let mut canvas = Canvas::new(PixelSize::new(6, 6));
        component.draw(&mut canvas, &RenderStates::default());
        assert_eq!(canvas.pixel(1, 1), Some(RED));

        component.set_use_alt(true);
        component.draw(&mut canvas, &RenderStates::default());
        assert_eq!(canvas.pixel(1, 1), Some(BLUE));
        // the alt rect is only two rows tall
        assert_eq!(canvas.pixel(1, 4), Some(RED));
    }
}
