//! Geometry aliases and the position/origin/scale/rotation state shared by
//! every drawable.

use euclid::Angle;

/// Coordinate space of widgets and render targets. Y axis goes down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct UiSpace;

pub type Point = euclid::Point2D<f32, UiSpace>;
pub type Vector = euclid::Vector2D<f32, UiSpace>;
pub type Size = euclid::Size2D<f32, UiSpace>;
pub type Rect = euclid::Rect<f32, UiSpace>;
/// Sub-rectangle of a texture, in texels.
pub type IntRect = euclid::Rect<i32, UiSpace>;
/// Size of a pixel buffer.
pub type PixelSize = euclid::Size2D<u32, UiSpace>;
pub type Transform = euclid::Transform2D<f32, UiSpace, UiSpace>;

/// Builds an [`IntRect`] from its left, top, width and height.
pub fn int_rect(left: i32, top: i32, width: i32, height: i32) -> IntRect {
    IntRect::new(euclid::point2(left, top), euclid::size2(width, height))
}

/// Position, origin, scale and rotation of an entity.
///
/// The resulting transform moves the origin to `(0, 0)`, then scales,
/// rotates, and finally translates to the position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transformable {
    position: Point,
    origin: Point,
    scale: Vector,
    rotation: Angle<f32>,
}

impl Default for Transformable {
    fn default() -> Self {
        Self::new()
    }
}

impl Transformable {
    pub fn new() -> Self {
        Self {
            position: Point::origin(),
            origin: Point::origin(),
            scale: Vector::new(1.0, 1.0),
            rotation: Angle::zero(),
        }
    }

    pub fn at(position: Point) -> Self {
        Self {
            position,
            ..Self::new()
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Adds `offset` to the current position.
    pub fn move_by(&mut self, offset: Vector) {
        self.position += offset;
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn scale(&self) -> Vector {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vector) {
        self.scale = scale;
    }

    pub fn rotation(&self) -> Angle<f32> {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Angle<f32>) {
        self.rotation = rotation.positive();
    }

    /// Local to parent transform.
    pub fn transform(&self) -> Transform {
        Transform::translation(-self.origin.x, -self.origin.y)
            .then_scale(self.scale.x, self.scale.y)
            .then_rotate(self.rotation)
            .then_translate(self.position.to_vector())
    }

    /// Parent to local transform; `None` when the scale is zero on an axis.
    pub fn inverse_transform(&self) -> Option<Transform> {
        self.transform().inverse()
    }
}
