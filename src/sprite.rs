use crate::{
    color::{self, Color},
    geometry::{IntRect, Point, Rect, Transformable},
    render::{Drawable, RenderStates, RenderTarget},
    texture::Texture,
};

/// A textured rectangle: a sub-rectangle of a [`Texture`] placed with its own
/// transform and tinted by a color.
#[derive(Clone, Debug)]
pub struct Sprite {
    texture: Texture,
    texture_rect: IntRect,
    color: Color,
    transformable: Transformable,
}

impl Default for Sprite {
    fn default() -> Self {
        Self::new(Texture::empty())
    }
}

impl Sprite {
    /// Sprite showing the whole texture.
    pub fn new(texture: Texture) -> Self {
        let texture_rect = texture.bounds();
        Self::with_rect(texture, texture_rect)
    }

    /// Sprite showing `texture_rect` of the texture.
    pub fn with_rect(texture: Texture, texture_rect: IntRect) -> Self {
        Self {
            texture,
            texture_rect,
            color: color::WHITE,
            transformable: Transformable::new(),
        }
    }

    pub fn texture(&self) -> &Texture {
        &self.texture
    }

    /// Replaces the texture; `reset_rect` makes the sprite show all of it.
    pub fn set_texture(&mut self, texture: Texture, reset_rect: bool) {
        if reset_rect {
            self.texture_rect = texture.bounds();
        }
        self.texture = texture;
    }

    pub fn texture_rect(&self) -> IntRect {
        self.texture_rect
    }

    pub fn set_texture_rect(&mut self, texture_rect: IntRect) {
        self.texture_rect = texture_rect;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
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

    /// Bounds ignoring the sprite's transform.
    pub fn local_bounds(&self) -> Rect {
        let size = self.texture_rect.size.to_f32();
        Rect::new(
            Point::origin(),
            euclid::size2(size.width.abs(), size.height.abs()),
        )
    }

    /// Bounds in the parent's coordinate system.
    pub fn global_bounds(&self) -> Rect {
        self.transformable
            .transform()
            .outer_transformed_rect(&self.local_bounds())
    }
}

impl Drawable for Sprite {
    fn draw(&self, target: &mut dyn RenderTarget, states: &RenderStates) {
        let states = states.combined(&self.transformable.transform());
        target.draw_texture(
            &self.texture,
            self.texture_rect,
            self.color,
            &states.transform,
        );
    }
}
