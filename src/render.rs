//! The drawable contract shared by primitives and widgets.

use crate::{
    color::Color,
    geometry::{IntRect, PixelSize, Transform},
    texture::Texture,
};

/// State passed down while drawing a tree of drawables.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderStates {
    /// Local to target transform applied to everything drawn with these states.
    pub transform: Transform,
}

impl Default for RenderStates {
    fn default() -> Self {
        Self {
            transform: Transform::identity(),
        }
    }
}

impl RenderStates {
    pub fn with_transform(transform: Transform) -> Self {
        Self { transform }
    }

    /// States for a child whose own transform is `local`.
    pub fn combined(&self, local: &Transform) -> Self {
        Self {
            transform: local.then(&self.transform),
        }
    }
}

/// Something pixels can be composited into.
pub trait RenderTarget {
    fn size(&self) -> PixelSize;

    /// Draws the `source` sub-rectangle of `texture`, tinted by `color`.
    ///
    /// The sub-rectangle is placed with its top-left corner at the local
    /// origin and mapped to the target through `transform`.
    fn draw_texture(
        &mut self,
        texture: &Texture,
        source: IntRect,
        color: Color,
        transform: &Transform,
    );
}

/// Anything that can render itself into a [`RenderTarget`].
pub trait Drawable {
    fn draw(&self, target: &mut dyn RenderTarget, states: &RenderStates);
}
