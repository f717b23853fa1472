use std::sync::Arc;

use crate::{
    canvas::Canvas,
    color::{self, Color},
    geometry::{PixelSize, Point, Rect, Transformable, Vector},
    render::{Drawable, RenderStates, RenderTarget},
    sprite::Sprite,
    style::{HorizontalAlign, SharedStyle, VerticalAlign},
    text::Text,
    texture::Texture,
};

/// Text pre-rendered onto a fixed-size canvas.
///
/// The text is composited onto an owned [`Canvas`] whenever the string,
/// style, offset or clear color changes; drawing the component only blits
/// the result. Every public mutator leaves the composited pixels current.
#[derive(Clone, Debug)]
pub struct TextComponent {
    size: PixelSize,
    transformable: Transformable,
    sprite: Sprite,
    canvas: Canvas,
    clear_color: Color,
    text: Text,
    text_offset: Vector,
    style: Option<SharedStyle>,
}

impl Default for TextComponent {
    fn default() -> Self {
        Self::new(Point::origin(), PixelSize::zero(), None, "", Vector::zero())
    }
}

impl TextComponent {
    /// Creates a component of `size` pixels showing `string` in `style`.
    ///
    /// `text_offset` shifts the aligned text inside the canvas.
    pub fn new(
        position: Point,
        size: PixelSize,
        style: Option<SharedStyle>,
        string: impl Into<String>,
        text_offset: Vector,
    ) -> Self {
        let mut component = Self {
            size,
            transformable: Transformable::at(position),
            sprite: Sprite::default(),
            canvas: Canvas::new(size),
            clear_color: color::TRANSPARENT,
            text: Text::default(),
            text_offset,
            style,
        };
        component.text.set_string(string);
        component.sync_style();
        component.apply_text_changes();
        component
    }

    pub fn size(&self) -> PixelSize {
        self.size
    }

    pub fn string(&self) -> &str {
        self.text.string()
    }

    /// Replaces the displayed text and recomposites.
    pub fn set_string(&mut self, string: impl Into<String>) {
        self.text.set_string(string);
        self.apply_text_changes();
    }

    pub fn text_offset(&self) -> Vector {
        self.text_offset
    }

    pub fn set_text_offset(&mut self, offset: Vector) {
        self.text_offset = offset;
        self.apply_text_changes();
    }

    pub fn reset_text_offset(&mut self) {
        self.set_text_offset(Vector::zero());
    }

    /// Adds to the current text offset.
    pub fn move_text(&mut self, offset_x: f32, offset_y: f32) {
        self.set_text_offset(self.text_offset + Vector::new(offset_x, offset_y));
    }

    /// Where the text sits inside the canvas after alignment and offset.
    pub fn text_position(&self) -> Point {
        self.text.position()
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
        self.display_render_texture();
    }

    pub fn style(&self) -> Option<&SharedStyle> {
        self.style.as_ref()
    }

    /// Swaps the style and reapplies it.
    ///
    /// `None` keeps the current font and colors; the text falls back to
    /// top-left alignment.
    pub fn set_style(&mut self, style: Option<SharedStyle>) {
        let unchanged = match (&self.style, &style) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        self.style = style;
        if unchanged {
            return;
        }
        if self.style.is_some() {
            self.apply_style_changes();
        } else {
            self.apply_text_changes();
        }
    }

    /// Reapplies font, size, colors and alignment from the current style.
    pub fn apply_style_changes(&mut self) {
        if self.sync_style() {
            self.apply_text_changes();
        } else {
            log::warn!("Text style applied to a text component without a style.");
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

    /// Position of the `index`-th character in the parent's coordinates.
    ///
    /// Out of range indices give the position of the end of the string.
    pub fn find_character_pos(&self, index: usize) -> Point {
        let in_canvas = self.text.find_character_pos(index);
        self.transformable.transform().transform_point(in_canvas)
    }

    pub fn local_bounds(&self) -> Rect {
        self.sprite.local_bounds()
    }

    pub fn global_bounds(&self) -> Rect {
        self.transformable
            .transform()
            .outer_transformed_rect(&self.local_bounds())
    }

    /// The composited pixels.
    pub fn texture(&self) -> &Texture {
        self.sprite.texture()
    }

    /// The composited text primitive.
    pub fn text(&self) -> &Text {
        &self.text
    }

    /// Realigns and recomposites the text.
    pub fn apply_text_changes(&mut self) {
        self.align_text();
        self.display_render_texture();
    }

    fn sync_style(&mut self) -> bool {
        match &self.style {
            Some(style) => {
                style.apply_to(&mut self.text);
                true
            }
            None => false,
        }
    }

    /// Places the text inside the canvas according to the style's alignment.
    ///
    /// Left and top alignment use the pen origin so labels keep a steady
    /// baseline; centered and far-edge alignment use the ink bounds.
    fn align_text(&mut self) {
        let (horizontal, vertical) = self
            .style
            .as_ref()
            .map(|style| (style.horizontal_align, style.vertical_align))
            .unwrap_or_default();

        let bounds = self.text.local_bounds();
        let area = self.size.to_f32();

        let x = match horizontal {
            HorizontalAlign::Left => 0.0,
            HorizontalAlign::Center => (area.width - bounds.width()) / 2.0 - bounds.min_x(),
            HorizontalAlign::Right => area.width - bounds.width() - bounds.min_x(),
        };
        let y = match vertical {
            VerticalAlign::Top => 0.0,
            VerticalAlign::Middle => (area.height - bounds.height()) / 2.0 - bounds.min_y(),
            VerticalAlign::Bottom => area.height - bounds.height() - bounds.min_y(),
        };

        let position = Point::new(x, y) + self.text_offset;
        self.text
            .set_position(Point::new(position.x.floor(), position.y.floor()));
    }

    /// Redraws the canvas and points the sprite at the new pixels.
    fn display_render_texture(&mut self) {
        self.canvas.clear(self.clear_color);
        self.text.draw(&mut self.canvas, &RenderStates::default());
        self.sprite.set_texture(self.canvas.display(), true);
    }
}

impl Drawable for TextComponent {
    fn draw(&self, target: &mut dyn RenderTarget, states: &RenderStates) {
        let states = states.combined(&self.transformable.transform());
        self.sprite.draw(target, &states);
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        style::TextStyle,
        test_support::{painted_pixels, system_font},
    };
    use approx::assert_relative_eq;

    fn component(style: Option<SharedStyle>, string: &str) -> TextComponent {
        TextComponent::new(
            Point::new(10.0, 20.0),
            PixelSize::new(64, 32),
            style,
            string,
            Vector::zero(),
        )
    }

    #[test]
    fn default_is_empty() {
        let component = TextComponent::default();
        assert_eq!(component.string(), "");
        assert!(component.texture().is_empty());
        assert!(component.style().is_none());
    }

    #[test]
    fn canvas_matches_size() {
        let component = component(None, "abc");
        assert_eq!(component.texture().size(), PixelSize::new(64, 32));

        let global = component.global_bounds();
        assert_relative_eq!(global.min_x(), 10.0);
        assert_relative_eq!(global.min_y(), 20.0);
        assert_relative_eq!(global.width(), 64.0);
        assert_relative_eq!(global.height(), 32.0);
    }

    #[test]
    fn clear_color_fills_canvas() {
        let mut component = component(None, "");
        component.set_clear_color(color::BLUE);
        assert_eq!(component.texture().pixel(0, 0), Some(color::BLUE));
        assert_eq!(component.texture().pixel(63, 31), Some(color::BLUE));
    }

    #[test]
    fn offsets_move_text_without_resizing() {
        let mut component = component(None, "abc");
        component.set_text_offset(Vector::new(3.0, 4.0));
        assert_eq!(component.text_position(), Point::new(3.0, 4.0));

        component.move_text(1.0, -1.0);
        assert_eq!(component.text_offset(), Vector::new(4.0, 3.0));
        assert_eq!(component.text_position(), Point::new(4.0, 3.0));

        component.reset_text_offset();
        assert_eq!(component.text_position(), Point::origin());
        assert_eq!(component.size(), PixelSize::new(64, 32));
    }

    #[test]
    fn applying_missing_style_is_a_no_op() {
        let mut component = component(None, "abc");
        let before = component.texture().to_rgba8();
        component.apply_style_changes();
        assert_eq!(component.texture().to_rgba8(), before);
        assert_eq!(component.string(), "abc");
    }

    #[test]
    fn set_string_twice_renders_the_same() {
        let Some(font) = system_font() else {
            return;
        };
        let style = TextStyle::new(Some(font))
            .with_character_size(18)
            .with_outline(color::BLACK, 1.0)
            .shared();
        let mut component = component(Some(style), "");

        component.set_string("Save");
        let once = component.texture().to_rgba8();
        assert!(painted_pixels(component.texture()) > 0);
        component.set_string("Save");
        assert_eq!(component.texture().to_rgba8(), once);
        assert_eq!(component.string(), "Save");
    }

    #[test]
    fn infinite_outline_style_still_composites() {
        let Some(font) = system_font() else {
            return;
        };
        let style = TextStyle::new(Some(font))
            .with_outline(color::BLACK, f32::INFINITY)
            .shared();
        let component = component(Some(style), "A");

        assert_eq!(component.text().outline_thickness(), 0.0);
        assert!(painted_pixels(component.texture()) > 0);
    }

    #[test]
    fn composites_text_with_font() {
        let Some(font) = system_font() else {
            return;
        };
        let style = TextStyle::new(Some(font)).with_character_size(18).shared();
        let mut component = component(Some(style), "");
        assert_eq!(painted_pixels(component.texture()), 0);

        component.set_string("Open");
        assert!(painted_pixels(component.texture()) > 0);
    }

    #[test]
    fn centered_style_centers_ink() {
        let Some(font) = system_font() else {
            return;
        };
        let style = TextStyle::new(Some(font))
            .with_character_size(18)
            .with_alignment(HorizontalAlign::Center, VerticalAlign::Middle)
            .shared();
        let component = component(Some(style), "Hi");

        let ink = component.text.global_bounds();
        let left_gap = ink.min_x();
        let right_gap = 64.0 - ink.max_x();
        assert!((left_gap - right_gap).abs() <= 2.0);
        let top_gap = ink.min_y();
        let bottom_gap = 32.0 - ink.max_y();
        assert!((top_gap - bottom_gap).abs() <= 2.0);
    }

    #[test]
    fn set_style_reapplies_size() {
        let Some(font) = system_font() else {
            return;
        };
        let small = TextStyle::new(Some(font.clone()))
            .with_character_size(10)
            .shared();
        let large = TextStyle::new(Some(font)).with_character_size(24).shared();

        let mut component = component(Some(small), "W");
        let small_ink = component.text.local_bounds().height();
        component.set_style(Some(large));
        assert!(component.text.local_bounds().height() > small_ink);
    }

    #[test]
    fn clearing_style_keeps_text() {
        let style = TextStyle::default()
            .with_alignment(HorizontalAlign::Right, VerticalAlign::Bottom)
            .shared();
        let mut component = component(Some(style), "abc");
        component.set_text_offset(Vector::new(2.0, 2.0));

        component.set_style(None);
        assert!(component.style().is_none());
        assert_eq!(component.string(), "abc");
        assert_eq!(component.text_position(), Point::new(2.0, 2.0));
    }

    #[test]
    fn character_pos_includes_component_position() {
        let component = component(None, "abc");
        assert_eq!(component.find_character_pos(1), Point::new(10.0, 20.0));
    }
}
